//! Settle-once result slot

use std::cell::OnceCell;

/// Holds the single result of a session
///
/// The first [`settle`](Self::settle) wins; every later call is refused and
/// leaves the stored value untouched.
#[derive(Debug, Default)]
pub struct Settlement {
    slot: OnceCell<String>,
}

impl Settlement {
    /// Create an unsettled slot
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: OnceCell::new(),
        }
    }

    /// Store the result if none is stored yet
    ///
    /// Returns `true` only for the call that actually settled.
    pub fn settle(&self, content: String) -> bool {
        self.slot.set(content).is_ok()
    }

    /// Whether a result has been stored
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.slot.get().is_some()
    }

    /// The stored result, if any
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.slot.get().map(String::as_str)
    }

    /// Take the stored result out, leaving the slot settled-empty
    pub fn take(&mut self) -> Option<String> {
        let value = self.slot.take();
        if value.is_some() {
            // Keep the slot closed so a late settle still loses
            let _ = self.slot.set(String::new());
        }
        value
    }
}
