//! Remote fetch error types

use thiserror::Error;

/// Errors that can occur while fetching a remote file
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or no response arrived
    #[error("Request to {url} failed: {source}")]
    Request {
        /// URL as given by the user
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status {
        /// URL as given by the user
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be read
    #[error("Failed to read response body from {url}: {source}")]
    Body {
        /// URL as given by the user
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },
}

/// Result type for fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;
