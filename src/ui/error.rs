//! UI error types

use thiserror::Error;

/// Errors that can occur in frontend operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal or other I/O failure
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The frontend stopped producing events (e.g. a script ran out)
    #[error("UI operation was interrupted")]
    InterruptedError,

    /// An operation was called on a frontend that is not open
    #[error("Frontend is not open")]
    NotOpen,

    /// The file selector could not list a directory
    #[error("Failed to list {path}: {source}")]
    Browse {
        /// Directory being listed
        path: std::path::PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: UiError = io.into();
        assert_eq!(error.to_string(), "IO error: pipe closed");
    }

    #[test]
    fn test_browse_error_display() {
        let error = UiError::Browse {
            path: "/nope".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().starts_with("Failed to list /nope"));
    }
}
