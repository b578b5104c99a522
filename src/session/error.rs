//! Session error types

use crate::reader::Encoding;
use thiserror::Error;

/// Misuse of a prompt session
///
/// Runtime failures never show up here; they settle the session with an
/// empty result instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The URL panel was requested for an encoding that cannot use it
    #[error("Can't fetch from URL as {0}")]
    UrlRequiresDataUrl(Encoding),
}
