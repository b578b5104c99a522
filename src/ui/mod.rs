//! UI abstraction layer
//!
//! The prompt session never touches a terminal directly. A frontend turns
//! user input into [`PromptEvent`](crate::session::PromptEvent)s and draws
//! [`PromptView`](crate::session::PromptView)s; the prompter glues the two.
//!
//! # Core Traits
//!
//! - **`PromptFrontend`** - Show the prompt, deliver events, open the file selector
//! - **`OutputWriter`** - Status messages for the host, with severity levels
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Prompter (drives a session)        │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      PromptFrontend                     │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ Test frontends│  │ RatatuiFrontend   │
//! │ (scripted)    │  │   (terminal)      │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a Custom Frontend
//!
//! ```no_run
//! use fileprompt::ui::{PromptFrontend, Result};
//! use fileprompt::session::{PromptEvent, PromptView};
//! use fileprompt::AcceptFilter;
//! use std::time::Duration;
//!
//! struct AlwaysCancel;
//!
//! impl PromptFrontend for AlwaysCancel {
//!     fn open(&mut self, _view: &PromptView) -> Result<()> { Ok(()) }
//!     fn render(&mut self, _view: &PromptView) -> Result<()> { Ok(()) }
//!     fn open_selector(&mut self, _accept: &AcceptFilter) -> Result<()> { Ok(()) }
//!     fn poll_event(&mut self, _timeout: Duration) -> Result<Option<PromptEvent>> {
//!         Ok(Some(PromptEvent::Escape))
//!     }
//!     fn close(&mut self) -> Result<()> { Ok(()) }
//! }
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use fileprompt::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Fetched 3 files");
//! output.error("Something went wrong");
//! ```

mod error;
mod traits;

pub mod output;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use output::{BufferedWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::RatatuiFrontend;
pub use traits::PromptFrontend;
