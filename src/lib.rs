//! fileprompt - Ask the user for a file from the terminal
//!
//! A prompt shows a modal where the user can open a file browser, drop a
//! file (paste its path), or fetch one from a URL. The chosen content comes
//! back either as text or as a base64 `data:` URL.
//!
//! ```no_run
//! use std::sync::Arc;
//! use fileprompt::{Encoding, FilePromptConfig, HttpFetcher, Prompter, RatatuiFrontend};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FilePromptConfig::load()?;
//! let frontend = RatatuiFrontend::from_config(&config);
//! let mut prompter = Prompter::new(frontend, Arc::new(HttpFetcher::new()?))
//!     .with_selector_mode(config.selector_mode);
//!
//! let image = prompter.prompt_for_file("image/*", Encoding::DataUrl)?;
//! if image.is_empty() {
//!     println!("Nothing selected");
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

pub mod accept;
pub mod cli;
pub mod commands;
pub mod config;
pub mod fetch;
pub mod prompter;
pub mod reader;
pub mod session;
pub mod ui;

#[cfg(test)]
pub mod testing;

pub use accept::AcceptFilter;
pub use config::{ConfigError, FilePromptConfig, SelectorMode};
pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use prompter::Prompter;
pub use reader::{ByteSource, Encoding, ReadOutcome};
pub use session::{PromptEvent, PromptSession, SessionError};
pub use ui::{PromptFrontend, RatatuiFrontend};

/// Error enum, contains all failure states of the library
#[derive(Debug, Error)]
pub enum PromptError {
    /// The prompt was used in a way its request does not allow
    #[error("Prompt error: {0}")]
    Session(#[from] SessionError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// HTTP client error
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
