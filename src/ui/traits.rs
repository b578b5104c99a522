//! Core traits for UI abstraction layer

use super::error::Result;
use crate::accept::AcceptFilter;
use crate::session::{PromptEvent, PromptView};
use std::time::Duration;

/// Something that can show a file prompt and report what the user does
///
/// The prompter calls [`open`](Self::open) once when a session starts and
/// [`close`](Self::close) once when it settles. Everything in between is
/// event polling and redraws. Frontends translate their native input
/// (keys, clicks, drops) into [`PromptEvent`]s; they never decide the
/// outcome themselves.
pub trait PromptFrontend {
    /// Show the prompt and start listening for keys
    ///
    /// # Errors
    ///
    /// Returns an error if the UI cannot be set up.
    fn open(&mut self, view: &PromptView) -> Result<()>;

    /// Redraw after the session changed
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    fn render(&mut self, view: &PromptView) -> Result<()>;

    /// Open the file selector, limited to files the filter accepts
    ///
    /// The choice arrives later as [`PromptEvent::FileSelected`] or
    /// [`PromptEvent::SelectorDismissed`].
    ///
    /// # Errors
    ///
    /// Returns an error if the selector cannot be shown.
    fn open_selector(&mut self, accept: &AcceptFilter) -> Result<()>;

    /// Wait up to `timeout` for the next event
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend can no longer deliver events.
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<PromptEvent>>;

    /// Remove the prompt and stop listening for keys
    ///
    /// # Errors
    ///
    /// Returns an error if restoring the UI fails.
    fn close(&mut self) -> Result<()>;
}
