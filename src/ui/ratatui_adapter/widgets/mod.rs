//! Ratatui widgets for the prompt TUI
//!
//! Custom widgets for rendering the prompt overlays.

mod drop_modal;
mod file_browser;
mod help_bar;
mod url_panel;

pub use drop_modal::{DropModal, ModalLayout};
pub use file_browser::{BrowserAction, BrowserEntry, EntryKind, FileBrowser, FileBrowserState};
pub use help_bar::{HelpBar, KeyHint, hints_for};
pub use url_panel::{UrlInputState, UrlPanel, UrlPanelLayout};
