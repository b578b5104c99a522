//! Terminal prompt frontend
//!
//! Implements `PromptFrontend` on a full-screen ratatui terminal with
//! mouse capture and bracketed paste enabled.

use super::events::translate;
use super::state::{FrontendState, Mode};
use super::theme::Theme;
use super::widgets::{DropModal, FileBrowser, HelpBar, UrlPanel, hints_for};
use crate::accept::AcceptFilter;
use crate::config::FilePromptConfig;
use crate::session::{PromptEvent, PromptView, SessionState};
use crate::ui::error::{Result, UiError};
use crate::ui::traits::PromptFrontend;
use crossterm::{
    event::{self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

/// Ratatui-based prompt frontend
pub struct RatatuiFrontend {
    terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
    state: FrontendState,
    theme: Theme,
}

impl RatatuiFrontend {
    /// Create a frontend whose browser starts in `start_dir`
    #[must_use]
    pub fn new(start_dir: impl Into<PathBuf>, show_hidden: bool) -> Self {
        Self {
            terminal: None,
            state: FrontendState::new(start_dir.into(), show_hidden),
            theme: Theme::default(),
        }
    }

    /// Create a frontend from the user's configuration
    #[must_use]
    pub fn from_config(config: &FilePromptConfig) -> Self {
        Self::new(config.browse_dir(), config.show_hidden)
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Whether the terminal is currently taken over
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.terminal.is_some()
    }

    /// Setup terminal for TUI
    ///
    /// A failure part way through restores whatever was already switched on.
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        let entered = execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));

        entered.map_err(|e| {
            let _ = Self::cleanup_terminal();
            e.into()
        })
    }

    /// Cleanup terminal after TUI
    ///
    /// Every restore step runs even if an earlier one fails; the first
    /// failure is reported.
    fn cleanup_terminal() -> Result<()> {
        let mut stdout = io::stdout();
        first_error([
            disable_raw_mode(),
            execute!(stdout, DisableBracketedPaste),
            execute!(stdout, DisableMouseCapture),
            execute!(stdout, LeaveAlternateScreen),
        ])?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let Some(terminal) = self.terminal.as_mut() else {
            return Err(UiError::NotOpen);
        };
        let state = &mut self.state;
        let theme = &self.theme;
        terminal.draw(|frame| render_frame(frame, state, theme))?;
        Ok(())
    }
}

impl PromptFrontend for RatatuiFrontend {
    fn open(&mut self, view: &PromptView) -> Result<()> {
        if self.terminal.is_none() {
            self.terminal = Some(Self::setup_terminal()?);
        }
        self.state.reset(view);
        self.draw()
    }

    fn render(&mut self, view: &PromptView) -> Result<()> {
        self.state.sync_view(view);
        self.draw()
    }

    fn open_selector(&mut self, accept: &AcceptFilter) -> Result<()> {
        let opened = self.state.open_browser(accept);
        if let Err(e) = &opened {
            self.state.error = Some(e.to_string());
        }
        self.draw()?;
        opened
    }

    fn poll_event(&mut self, timeout: Duration) -> Result<Option<PromptEvent>> {
        if self.terminal.is_none() {
            return Err(UiError::NotOpen);
        }
        if !event::poll(timeout)? {
            return Ok(None);
        }

        let translated = translate(&mut self.state, event::read()?);
        self.draw()?;
        Ok(translated)
    }

    fn close(&mut self) -> Result<()> {
        self.state.close_browser();
        if self.terminal.take().is_some() {
            Self::cleanup_terminal()?;
        }
        Ok(())
    }
}

impl Drop for RatatuiFrontend {
    fn drop(&mut self) {
        if self.terminal.take().is_some() {
            let _ = Self::cleanup_terminal();
        }
    }
}

/// Draw the whole prompt for the current state
fn render_frame(frame: &mut Frame, state: &mut FrontendState, theme: &Theme) {
    state.screen = frame.area();
    let body = state.body_area();

    if let Some(view) = state.view.as_ref() {
        if view.show_modal {
            frame.render_widget(DropModal::new(view, theme), body);
        } else if view.state == SessionState::Reading {
            let status = Rect::new(body.x, body.y + body.height / 2, body.width, 1.min(body.height));
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled("Reading…", theme.info_style()))).centered(),
                status,
            );
        }
    }

    match state.mode {
        Mode::Browser => {
            if let Some(browser) = state.browser.as_ref() {
                frame.render_widget(FileBrowser::new(browser, theme), body);
            }
        }
        Mode::UrlInput => frame.render_widget(UrlPanel::new(&state.url_input, theme), body),
        Mode::Modal => {}
    }

    let help = state.help_area();
    if let Some(error) = state.error.as_deref() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(error.to_string(), theme.error_style()))),
            help,
        );
    } else {
        frame.render_widget(HelpBar::new(hints_for(state.mode), theme), help);
    }
}

/// The first failure among steps that have all already run
fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().find(|r| r.is_err()).unwrap_or(Ok(()))
}
