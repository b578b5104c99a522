//! Accept filters
//!
//! An accept filter is the same pattern an HTML file input takes: a
//! comma-separated list of extensions (`.png`), exact MIME types
//! (`image/png`) and wildcards (`image/*`). An empty filter accepts anything.

use std::fmt;
use std::path::Path;

/// One token of an accept filter
#[derive(Debug, Clone, PartialEq, Eq)]
enum AcceptToken {
    /// File extension without the leading dot, lowercased
    Extension(String),
    /// Exact MIME type, lowercased
    Mime(String),
    /// MIME top-level type of a `type/*` wildcard, lowercased
    MimeWildcard(String),
}

impl AcceptToken {
    fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim().to_lowercase();
        if token.is_empty() {
            return None;
        }
        if let Some(ext) = token.strip_prefix('.') {
            return (!ext.is_empty()).then(|| Self::Extension(ext.to_string()));
        }
        match token.split_once('/') {
            Some((top, "*")) => Some(Self::MimeWildcard(top.to_string())),
            Some(_) => Some(Self::Mime(token)),
            // Bare words are treated like extensions
            None => Some(Self::Extension(token)),
        }
    }

    fn matches(&self, extension: Option<&str>, mimes: &[String]) -> bool {
        match self {
            Self::Extension(ext) => extension.is_some_and(|e| e == ext),
            Self::Mime(mime) => mimes.iter().any(|m| m == mime),
            Self::MimeWildcard(top) => mimes
                .iter()
                .any(|m| m.split_once('/').is_some_and(|(t, _)| t == top)),
        }
    }
}

/// Parsed accept filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AcceptFilter {
    raw: String,
    tokens: Vec<AcceptToken>,
}

impl AcceptFilter {
    /// Parse a raw accept string
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let tokens = raw.split(',').filter_map(AcceptToken::parse).collect();
        Self { raw, tokens }
    }

    /// Filter that accepts every file
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// The filter as the host passed it
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when the filter places no restriction
    #[must_use]
    pub fn is_any(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Text shown to the user: the raw filter, or `any`
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.is_any() { "any" } else { self.raw.trim() }
    }

    /// Check whether a file name or path satisfies the filter
    ///
    /// MIME tokens are compared against every type `mime_guess` knows for
    /// the file's extension.
    #[must_use]
    pub fn matches_path(&self, path: &Path) -> bool {
        if self.is_any() {
            return true;
        }
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        let mimes: Vec<String> = mime_guess::from_path(path)
            .iter_raw()
            .map(str::to_lowercase)
            .collect();

        self.tokens
            .iter()
            .any(|token| token.matches(extension.as_deref(), &mimes))
    }
}

impl fmt::Display for AcceptFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for AcceptFilter {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for AcceptFilter {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
