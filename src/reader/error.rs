//! Content reader error types
//!
//! These never reach the host: the reader logs them and reports an empty
//! result instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a byte source
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The path exists but is not a regular file
    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),
}
