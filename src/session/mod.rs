//! Prompt session state machine
//!
//! A [`PromptSession`] is one open file prompt. It does no I/O itself: a
//! frontend feeds it [`PromptEvent`]s and the driver carries out the
//! [`Command`]s it returns (open the file selector, read a file, fetch a URL,
//! tear the UI down). This keeps the rules in one place and makes every
//! sequence of events reproducible in tests.
//!
//! # Rules
//!
//! - The result is produced exactly once. Events after that are no-ops.
//! - Once a read or fetch starts, further selections and drops are ignored.
//! - Escape and backdrop clicks cancel at any point before settlement,
//!   including while a read is in flight.
//! - [`Command::Teardown`] is emitted exactly once, in the same batch as the
//!   settlement.

mod error;
mod event;
mod settle;
mod state;

pub use error::SessionError;
pub use event::{DropPayload, PromptEvent};
pub use settle::Settlement;
pub use state::{BorderTone, SessionState, Transition};

use crate::accept::AcceptFilter;
use crate::config::SelectorMode;
use crate::reader::{ByteSource, Encoding};

/// Modal title
pub const TITLE: &str = "Select or drop file";
/// Label of the URL sub-flow button
pub const URL_BUTTON_LABEL: &str = "From URL";
/// Placeholder of the URL input
pub const URL_PLACEHOLDER: &str = "URL";
/// Label of the URL submit button
pub const FETCH_BUTTON_LABEL: &str = "Fetch";

/// What the host asked for
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptRequest {
    /// Which files are acceptable
    pub accept: AcceptFilter,
    /// Format of the result
    pub encoding: Encoding,
}

impl PromptRequest {
    /// Create a request
    #[must_use]
    pub fn new(accept: impl Into<AcceptFilter>, encoding: Encoding) -> Self {
        Self {
            accept: accept.into(),
            encoding,
        }
    }
}

/// Side effects requested by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the file selector, constrained to the accept filter
    OpenSelector,
    /// Decode a file and report back with [`PromptEvent::ReadFinished`]
    Read(ByteSource),
    /// Fetch and decode a URL and report back with [`PromptEvent::ReadFinished`]
    Fetch(String),
    /// Remove the prompt UI and stop listening for keys
    Teardown,
}

/// Everything a frontend needs to draw the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptView {
    /// Modal title
    pub title: &'static str,
    /// `Accepted formats: ...` line
    pub subtitle: String,
    /// Accept filter, for the file selector
    pub accept: AcceptFilter,
    /// Requested encoding
    pub encoding: Encoding,
    /// Whether the modal chrome is drawn (false in selector-only mode)
    pub show_modal: bool,
    /// Current drop target border
    pub border: BorderTone,
    /// Whether the URL panel is showing
    pub url_panel_open: bool,
    /// Session state, for progress indication
    pub state: SessionState,
}

/// One open file prompt
#[derive(Debug)]
pub struct PromptSession {
    request: PromptRequest,
    mode: SelectorMode,
    state: SessionState,
    settlement: Settlement,
    url_panel_open: bool,
    border: BorderTone,
}

impl PromptSession {
    /// Create a session; the selector mode is fixed for its lifetime
    #[must_use]
    pub fn new(request: PromptRequest, mode: SelectorMode) -> Self {
        Self {
            request,
            mode,
            state: SessionState::Open,
            settlement: Settlement::new(),
            url_panel_open: false,
            border: BorderTone::Neutral,
        }
    }

    /// Commands to run once the UI is up
    #[must_use]
    pub fn start(&self) -> Vec<Command> {
        if self.mode.opens_selector_immediately() {
            vec![Command::OpenSelector]
        } else {
            Vec::new()
        }
    }

    /// The request this session serves
    #[must_use]
    pub const fn request(&self) -> &PromptRequest {
        &self.request
    }

    /// Selector mode the session was created with
    #[must_use]
    pub const fn mode(&self) -> SelectorMode {
        self.mode
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a read or fetch is in flight
    #[must_use]
    pub fn is_reading(&self) -> bool {
        self.state == SessionState::Reading
    }

    /// Whether the result has been produced
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settlement.is_settled()
    }

    /// The result, once settled
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.settlement.value()
    }

    /// Take the result out of a settled session
    pub fn take_result(&mut self) -> Option<String> {
        self.settlement.take()
    }

    /// Snapshot for rendering
    #[must_use]
    pub fn view(&self) -> PromptView {
        PromptView {
            title: TITLE,
            subtitle: format!("Accepted formats: {}", self.request.accept.display_text()),
            accept: self.request.accept.clone(),
            encoding: self.request.encoding,
            show_modal: self.mode.shows_modal(),
            border: self.border,
            url_panel_open: self.url_panel_open,
            state: self.state,
        }
    }

    /// Apply one event
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UrlRequiresDataUrl` when the URL panel is
    /// requested for an open text prompt. The session stays open.
    pub fn handle(&mut self, event: PromptEvent) -> Result<Vec<Command>, SessionError> {
        if self.is_settled() {
            log::debug!("Ignoring {} after settlement", event.name());
            return Ok(Vec::new());
        }

        let commands = match event {
            PromptEvent::Escape | PromptEvent::BackdropClicked => self.settle(String::new()),
            PromptEvent::BrowseRequested => {
                if self.state == SessionState::Open {
                    vec![Command::OpenSelector]
                } else {
                    Vec::new()
                }
            }
            PromptEvent::FileSelected(source) => self.begin_read(Command::Read(source)),
            PromptEvent::SelectorDismissed => {
                // Without the modal there is nothing left to cancel with
                if self.mode == SelectorMode::SelectorOnly && self.state == SessionState::Open {
                    self.settle(String::new())
                } else {
                    Vec::new()
                }
            }
            PromptEvent::DragEnter => {
                self.border = BorderTone::Active;
                Vec::new()
            }
            PromptEvent::DragLeave => {
                self.border = BorderTone::Neutral;
                Vec::new()
            }
            PromptEvent::Drop(payload) => {
                self.border = BorderTone::Neutral;
                self.handle_drop(payload)
            }
            PromptEvent::UrlPanelRequested => {
                if self.state != SessionState::Open {
                    return Ok(Vec::new());
                }
                if self.request.encoding != Encoding::DataUrl {
                    return Err(SessionError::UrlRequiresDataUrl(self.request.encoding));
                }
                self.url_panel_open = true;
                Vec::new()
            }
            PromptEvent::UrlSubmitted(url) => {
                if self.url_panel_open {
                    self.begin_read(Command::Fetch(url.trim().to_string()))
                } else {
                    Vec::new()
                }
            }
            PromptEvent::UrlBackdropClicked => {
                if self.url_panel_open {
                    self.settle(String::new())
                } else {
                    Vec::new()
                }
            }
            PromptEvent::ReadFinished(content) => {
                if self.state == SessionState::Reading {
                    self.settle(content)
                } else {
                    log::debug!("Ignoring read completion in state {}", self.state);
                    Vec::new()
                }
            }
        };

        Ok(commands)
    }

    fn handle_drop(&mut self, payload: DropPayload) -> Vec<Command> {
        match payload {
            DropPayload::File(source) => self.begin_read(Command::Read(source)),
            DropPayload::Url(url) => {
                if self.request.encoding == Encoding::DataUrl && self.state == SessionState::Open {
                    self.settle(url)
                } else {
                    log::debug!("Ignoring dropped URL for a {} prompt", self.request.encoding);
                    Vec::new()
                }
            }
        }
    }

    fn begin_read(&mut self, command: Command) -> Vec<Command> {
        match self.state.next(Transition::BeginRead) {
            Some(next) => {
                self.state = next;
                self.url_panel_open = false;
                vec![command]
            }
            None => {
                log::debug!("Ignoring selection while {}", self.state);
                Vec::new()
            }
        }
    }

    fn settle(&mut self, content: String) -> Vec<Command> {
        let Some(next) = self.state.next(Transition::Settle) else {
            return Vec::new();
        };
        if !self.settlement.settle(content) {
            return Vec::new();
        }
        self.state = next;
        self.url_panel_open = false;
        self.border = BorderTone::Neutral;
        vec![Command::Teardown]
    }
}
