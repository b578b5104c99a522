//! Content reader
//!
//! Turns a byte source into the string the host asked for: UTF-8 text or a
//! base64 `data:` URL. Reading never fails outward. Any error is logged and
//! reported as an empty, unsuccessful [`ReadOutcome`].

mod error;

pub use error::ReadError;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::ConfigError;

/// MIME type used when nothing better is known
pub const FALLBACK_MIME: &str = "application/octet-stream";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Format the host wants the file contents in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8 text
    #[default]
    Text,
    /// `data:<mime>;base64,<payload>`
    DataUrl,
}

impl Encoding {
    /// Name used in configuration and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::DataUrl => "url",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "url" | "data-url" | "dataurl" => Ok(Self::DataUrl),
            other => Err(ConfigError::InvalidEncoding(other.to_string())),
        }
    }
}

/// Something that carries bytes to decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteSource {
    /// A file on disk, read when decoded
    File(PathBuf),
    /// Bytes already in memory, e.g. a fetched response body
    Blob {
        /// Raw bytes
        bytes: Vec<u8>,
        /// MIME type reported alongside the bytes, if any
        mime: Option<String>,
    },
}

impl ByteSource {
    /// Source backed by a file path
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Source backed by in-memory bytes
    #[must_use]
    pub fn blob(bytes: Vec<u8>, mime: Option<String>) -> Self {
        Self::Blob { bytes, mime }
    }

    /// MIME type of the source
    ///
    /// Files are typed by extension, blobs by whatever came with them.
    #[must_use]
    pub fn mime(&self) -> String {
        let mime = match self {
            Self::File(path) => mime_guess::from_path(path).first_raw().map(str::to_string),
            Self::Blob { mime, .. } => mime
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
        };
        mime.unwrap_or_else(|| FALLBACK_MIME.to_string())
    }

    /// Short description for log messages
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Blob { bytes, .. } => format!("<{} byte blob>", bytes.len()),
        }
    }

    fn load(&self) -> Result<Vec<u8>, ReadError> {
        match self {
            Self::File(path) => read_file(path),
            Self::Blob { bytes, .. } => Ok(bytes.clone()),
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, ReadError> {
    let metadata = fs::metadata(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(ReadError::NotAFile(path.to_path_buf()));
    }
    fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Result of a read or fetch
///
/// `ok` separates "decoded to an empty string" from "failed"; only the
/// content string leaves the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOutcome {
    /// Whether the source was read successfully
    pub ok: bool,
    /// Decoded content, empty on failure
    pub content: String,
}

impl ReadOutcome {
    /// Successful read
    #[must_use]
    pub const fn success(content: String) -> Self {
        Self { ok: true, content }
    }

    /// Failed read
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            ok: false,
            content: String::new(),
        }
    }

    /// Consume the outcome, keeping only the content
    #[must_use]
    pub fn into_content(self) -> String {
        self.content
    }
}

/// Decode raw bytes as UTF-8 text
///
/// A leading byte order mark is dropped and invalid sequences become
/// U+FFFD.
#[must_use]
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

/// Encode raw bytes as a base64 data URL
#[must_use]
pub fn to_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read a source and report whether it worked
#[must_use]
pub fn read(source: &ByteSource, encoding: Encoding) -> ReadOutcome {
    let bytes = match source.load() {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("Failed to read file as {encoding}: {e}");
            return ReadOutcome::failed();
        }
    };

    let content = match encoding {
        Encoding::Text => decode_text(&bytes),
        Encoding::DataUrl => to_data_url(&bytes, &source.mime()),
    };
    log::debug!(
        "Read {} ({} bytes) as {encoding}",
        source.describe(),
        bytes.len()
    );
    ReadOutcome::success(content)
}

/// Read a source, returning only the decoded string
///
/// Empty on failure.
#[must_use]
pub fn decode(source: &ByteSource, encoding: Encoding) -> String {
    read(source, encoding).into_content()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{PNG_HEADER, TempFiles};

    #[test]
    fn test_text_roundtrip() {
        let files = TempFiles::new();
        let path = files.write("hello.txt", b"hello");
        assert_eq!(decode(&ByteSource::file(&path), Encoding::Text), "hello");
    }

    #[test]
    fn test_text_strips_bom() {
        let source = ByteSource::blob(b"\xEF\xBB\xBFhi".to_vec(), None);
        assert_eq!(decode(&source, Encoding::Text), "hi");
    }

    #[test]
    fn test_text_replaces_invalid_utf8() {
        let source = ByteSource::blob(vec![b'a', 0xFF, b'b'], None);
        assert_eq!(decode(&source, Encoding::Text), "a\u{FFFD}b");
    }

    #[test]
    fn test_png_data_url() {
        let files = TempFiles::new();
        let path = files.write("image.png", PNG_HEADER);
        let url = decode(&ByteSource::file(&path), Encoding::DataUrl);

        let payload = url
            .strip_prefix("data:image/png;base64,")
            .expect("png data url prefix");
        assert_eq!(STANDARD.decode(payload).unwrap(), PNG_HEADER);
    }

    #[test]
    fn test_blob_mime_used_for_data_url() {
        let source = ByteSource::blob(b"{}".to_vec(), Some("application/json".into()));
        assert_eq!(decode(&source, Encoding::DataUrl), "data:application/json;base64,e30=");
    }

    #[test]
    fn test_unknown_mime_falls_back() {
        let source = ByteSource::blob(vec![1, 2, 3], Some("  ".into()));
        assert_eq!(source.mime(), FALLBACK_MIME);
        assert!(decode(&source, Encoding::DataUrl).starts_with("data:application/octet-stream;base64,"));

        let file = ByteSource::file("no_extension_here");
        assert_eq!(file.mime(), FALLBACK_MIME);
    }

    #[test]
    fn test_missing_file_is_empty_failure() {
        let outcome = read(&ByteSource::file("definitely/not/here.txt"), Encoding::Text);
        assert_eq!(outcome, ReadOutcome::failed());
    }

    #[test]
    fn test_directory_is_failure() {
        let files = TempFiles::new();
        let outcome = read(&ByteSource::file(files.path()), Encoding::DataUrl);
        assert!(!outcome.ok);
        assert!(outcome.content.is_empty());
    }

    #[test]
    fn test_empty_file_is_success() {
        let files = TempFiles::new();
        let path = files.write("empty.txt", b"");
        let outcome = read(&ByteSource::file(&path), Encoding::Text);
        assert!(outcome.ok);
        assert_eq!(outcome.content, "");
    }

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("text".parse::<Encoding>().unwrap(), Encoding::Text);
        assert_eq!("URL".parse::<Encoding>().unwrap(), Encoding::DataUrl);
        assert!(matches!(
            "binary".parse::<Encoding>(),
            Err(ConfigError::InvalidEncoding(s)) if s == "binary"
        ));
    }
}
