//! Ratatui-based prompt frontend
//!
//! This module provides an implementation of the `PromptFrontend` trait
//! using ratatui (TUI framework), crossterm (terminal events) and nucleo
//! (fuzzy matching in the file browser).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiFrontend                   │
//! │  (implements PromptFrontend trait)          │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │   Nucleo   │ │  Ratatui  │ │ Crossterm │
//! │ (browser)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Terminal mapping
//!
//! - **Modal**: a centered box over a dimmed screen; clicking outside it cancels
//! - **Native selector**: an in-terminal file browser filtered by the accept list
//! - **Drag and drop**: a bracketed paste of a file path or URL
//! - **Drag highlight**: the mouse hovering the drop zone

mod events;
mod frontend;
mod state;
mod theme;
pub mod widgets;

pub use events::{classify_drop, translate};
pub use frontend::RatatuiFrontend;
pub use state::{FrontendState, Mode};
pub use theme::Theme;
