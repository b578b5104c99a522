//! Frontend state for the ratatui TUI
//!
//! Holds everything the terminal frontend needs between events: the last
//! session view, which overlay has the keyboard, the file browser and the
//! URL input.

use crate::accept::AcceptFilter;
use crate::session::{PromptView, SessionState};
use crate::ui::error::Result;
use crate::ui::ratatui_adapter::widgets::{
    FileBrowser, FileBrowserState, ModalLayout, UrlInputState, UrlPanelLayout,
};
use ratatui::layout::Rect;
use std::path::PathBuf;

/// Which overlay receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The drop modal (or nothing, in selector-only mode)
    #[default]
    Modal,
    /// The file browser
    Browser,
    /// The "From URL" panel
    UrlInput,
}

/// Mutable state of the terminal frontend
#[derive(Debug)]
pub struct FrontendState {
    /// Last view received from the session
    pub view: Option<PromptView>,
    /// Current input mode
    pub mode: Mode,
    /// File browser, while it is open
    pub browser: Option<FileBrowserState>,
    /// URL panel input
    pub url_input: UrlInputState,
    /// Whether the mouse is over the drop zone
    pub hovering: bool,
    /// Size of the terminal at the last draw
    pub screen: Rect,
    /// Last browser error, shown in the status line
    pub error: Option<String>,
    /// Directory the browser opens in
    pub start_dir: PathBuf,
    /// Whether the browser lists dotfiles
    pub show_hidden: bool,
}

impl FrontendState {
    /// Create state for a browser starting in `start_dir`
    #[must_use]
    pub fn new(start_dir: PathBuf, show_hidden: bool) -> Self {
        Self {
            view: None,
            mode: Mode::Modal,
            browser: None,
            url_input: UrlInputState::new(),
            hovering: false,
            screen: Rect::default(),
            error: None,
            start_dir,
            show_hidden,
        }
    }

    /// Start over for a new session
    pub fn reset(&mut self, view: &PromptView) {
        self.close_browser();
        self.mode = Mode::Modal;
        self.url_input.clear();
        self.hovering = false;
        self.error = None;
        self.sync_view(view);
    }

    /// Adopt a new session view
    ///
    /// The URL panel follows the session's flag. Once the session starts
    /// reading, the browser is no longer needed.
    pub fn sync_view(&mut self, view: &PromptView) {
        if view.state != SessionState::Open {
            self.close_browser();
        }

        if view.url_panel_open && self.mode != Mode::UrlInput {
            self.url_input.clear();
            self.mode = Mode::UrlInput;
        } else if !view.url_panel_open && self.mode == Mode::UrlInput {
            self.mode = Mode::Modal;
        }

        self.view = Some(view.clone());
    }

    /// Whether the drop modal is on screen
    #[must_use]
    pub fn shows_modal(&self) -> bool {
        self.view.as_ref().is_some_and(|v| v.show_modal)
    }

    /// Open the file browser
    ///
    /// # Errors
    ///
    /// Returns `UiError::Browse` if the start directory cannot be listed.
    pub fn open_browser(&mut self, accept: &AcceptFilter) -> Result<()> {
        let browser = FileBrowserState::open(self.start_dir.clone(), accept.clone(), self.show_hidden)?;
        self.browser = Some(browser);
        self.mode = Mode::Browser;
        self.error = None;
        Ok(())
    }

    /// Close the file browser, remembering where it was
    pub fn close_browser(&mut self) {
        if let Some(browser) = self.browser.take() {
            self.start_dir = browser.dir;
            self.show_hidden = browser.show_hidden;
        }
        if self.mode == Mode::Browser {
            self.mode = Mode::Modal;
        }
    }

    /// Area for overlays, above the help bar
    #[must_use]
    pub fn body_area(&self) -> Rect {
        Rect {
            height: self.screen.height.saturating_sub(1),
            ..self.screen
        }
    }

    /// Area of the help bar
    #[must_use]
    pub fn help_area(&self) -> Rect {
        let body = self.body_area();
        Rect::new(self.screen.x, body.bottom(), self.screen.width, self.screen.height.min(1))
    }

    /// Where the drop modal is drawn
    #[must_use]
    pub fn modal_layout(&self) -> ModalLayout {
        ModalLayout::compute(self.body_area())
    }

    /// Where the URL panel is drawn
    #[must_use]
    pub fn url_layout(&self) -> UrlPanelLayout {
        UrlPanelLayout::compute(self.body_area())
    }

    /// Visible rows of the browser list
    #[must_use]
    pub fn browser_page(&self) -> usize {
        // Border and query line
        usize::from(FileBrowser::area(self.body_area()).height.saturating_sub(3))
    }
}
