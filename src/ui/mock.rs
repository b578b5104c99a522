//! Mock frontend for testing

use super::error::{Result, UiError};
use super::traits::PromptFrontend;
use crate::accept::AcceptFilter;
use crate::session::{PromptEvent, PromptView};
use std::collections::VecDeque;
use std::time::Duration;

/// How many empty polls a drained script tolerates before giving up
const MAX_IDLE_POLLS: usize = 500;

/// Mock frontend that replays a fixed list of events
///
/// Once the script runs out it reports no events for a while (so in-flight
/// reads can finish), then fails with `UiError::InterruptedError`.
#[derive(Debug, Default)]
pub struct MockFrontend {
    script: VecDeque<PromptEvent>,
    idle_polls: usize,
    /// Number of `open` calls
    pub opened: usize,
    /// Number of `close` calls
    pub closed: usize,
    /// Key listeners currently attached
    pub key_listeners: usize,
    /// Accept filters the selector was opened with
    pub selector_opens: Vec<AcceptFilter>,
    /// Every view drawn, including the initial one
    pub views: Vec<PromptView>,
    /// Fail the next `open` call
    pub fail_open: bool,
}

impl MockFrontend {
    /// Create a mock that will deliver these events in order
    #[must_use]
    pub fn new(events: Vec<PromptEvent>) -> Self {
        Self {
            script: events.into(),
            ..Self::default()
        }
    }

    /// Queue more events for the next session
    pub fn push_events(&mut self, events: impl IntoIterator<Item = PromptEvent>) {
        self.script.extend(events);
        self.idle_polls = 0;
    }

    /// Whether the mock ran out of patience and failed a poll
    #[must_use]
    pub const fn gave_up(&self) -> bool {
        self.idle_polls > MAX_IDLE_POLLS
    }

    /// Events not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl PromptFrontend for MockFrontend {
    fn open(&mut self, view: &PromptView) -> Result<()> {
        if self.fail_open {
            self.fail_open = false;
            return Err(UiError::InterruptedError);
        }
        self.opened += 1;
        self.key_listeners += 1;
        self.views.push(view.clone());
        Ok(())
    }

    fn render(&mut self, view: &PromptView) -> Result<()> {
        self.views.push(view.clone());
        Ok(())
    }

    fn open_selector(&mut self, accept: &AcceptFilter) -> Result<()> {
        self.selector_opens.push(accept.clone());
        Ok(())
    }

    fn poll_event(&mut self, timeout: Duration) -> Result<Option<PromptEvent>> {
        if let Some(event) = self.script.pop_front() {
            return Ok(Some(event));
        }
        self.idle_polls += 1;
        if self.idle_polls > MAX_IDLE_POLLS {
            return Err(UiError::InterruptedError);
        }
        std::thread::sleep(timeout);
        Ok(None)
    }

    fn close(&mut self) -> Result<()> {
        self.closed += 1;
        self.key_listeners = self.key_listeners.saturating_sub(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{PromptRequest, PromptSession};
    use crate::config::SelectorMode;

    fn view() -> PromptView {
        PromptSession::new(PromptRequest::default(), SelectorMode::Modal).view()
    }

    #[test]
    fn test_mock_replays_script() {
        let mut mock = MockFrontend::new(vec![PromptEvent::BrowseRequested, PromptEvent::Escape]);
        assert_eq!(
            mock.poll_event(Duration::ZERO).unwrap(),
            Some(PromptEvent::BrowseRequested)
        );
        assert_eq!(mock.poll_event(Duration::ZERO).unwrap(), Some(PromptEvent::Escape));
        assert_eq!(mock.poll_event(Duration::ZERO).unwrap(), None);
    }

    #[test]
    fn test_mock_gives_up_when_idle() {
        let mut mock = MockFrontend::default();
        let mut result = Ok(None);
        for _ in 0..=MAX_IDLE_POLLS {
            result = mock.poll_event(Duration::ZERO);
        }
        assert!(matches!(result, Err(UiError::InterruptedError)));
    }

    #[test]
    fn test_mock_tracks_listeners() {
        let mut mock = MockFrontend::default();
        mock.open(&view()).unwrap();
        assert_eq!(mock.key_listeners, 1);
        mock.close().unwrap();
        assert_eq!(mock.key_listeners, 0);
        assert_eq!((mock.opened, mock.closed), (1, 1));
    }
}
