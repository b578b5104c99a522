//! Session states and the transition table

use std::fmt;

/// Lifecycle state of a prompt session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Waiting for the user to pick, drop or fetch something
    #[default]
    Open,
    /// A file or URL was chosen and is being decoded
    Reading,
    /// The result has been produced; nothing else happens
    Settled,
}

/// What moves a session from one state to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A read or fetch starts
    BeginRead,
    /// The result is produced (content, empty, or cancellation)
    Settle,
}

impl SessionState {
    /// Apply a transition, returning `None` when it is not allowed from this state
    ///
    /// ```text
    /// Open    --BeginRead--> Reading
    /// Open    --Settle-----> Settled
    /// Reading --Settle-----> Settled
    /// ```
    #[must_use]
    pub const fn next(self, transition: Transition) -> Option<Self> {
        match (self, transition) {
            (Self::Open, Transition::BeginRead) => Some(Self::Reading),
            (Self::Open | Self::Reading, Transition::Settle) => Some(Self::Settled),
            _ => None,
        }
    }

    /// True once the session has produced its result
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Settled)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::Reading => "reading",
            Self::Settled => "settled",
        };
        f.write_str(name)
    }
}

/// Border colour of the drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderTone {
    /// No drag in progress
    #[default]
    Neutral,
    /// Something is being dragged over the prompt
    Active,
}

impl BorderTone {
    /// RGB value of the tone
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Neutral => (0x88, 0x88, 0x88),
            Self::Active => (0x03, 0xa9, 0xfc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use SessionState::{Open, Reading, Settled};
        use Transition::{BeginRead, Settle};

        assert_eq!(Open.next(BeginRead), Some(Reading));
        assert_eq!(Open.next(Settle), Some(Settled));
        assert_eq!(Reading.next(Settle), Some(Settled));
        assert_eq!(Reading.next(BeginRead), None);
        assert_eq!(Settled.next(BeginRead), None);
        assert_eq!(Settled.next(Settle), None);
    }

    #[test]
    fn test_only_settled_is_terminal() {
        assert!(!SessionState::Open.is_terminal());
        assert!(!SessionState::Reading.is_terminal());
        assert!(SessionState::Settled.is_terminal());
    }

    #[test]
    fn test_border_tones() {
        assert_eq!(BorderTone::default(), BorderTone::Neutral);
        assert_eq!(BorderTone::Neutral.rgb(), (0x88, 0x88, 0x88));
        assert_eq!(BorderTone::Active.rgb(), (0x03, 0xa9, 0xfc));
    }
}
