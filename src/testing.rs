//! Testing utilities for fileprompt
//!
//! Fixture helpers shared by unit tests: a temporary directory that cleans
//! up after itself, and a few canned file contents.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// First bytes of a PNG file (signature plus the start of an IHDR chunk)
pub const PNG_HEADER: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];

/// Temporary directory for fixture files, removed when dropped
///
/// # Examples
/// ```ignore
/// let files = TempFiles::new();
/// let path = files.write("hello.txt", b"hello");
/// assert!(path.exists());
/// ```
pub struct TempFiles {
    dir: TempDir,
}

impl TempFiles {
    /// Create a fresh temporary directory
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Path of the directory
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the directory and return its full path
    ///
    /// Parent directories are created as needed.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, name: impl AsRef<Path>, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Create an empty subdirectory and return its full path
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn mkdir(&self, name: impl AsRef<Path>) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::create_dir_all(&path).expect("Failed to create fixture directory");
        path
    }
}

impl Default for TempFiles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_files_cleanup() {
        let root;
        {
            let files = TempFiles::new();
            root = files.path().to_path_buf();
            let path = files.write("a/b.txt", b"content");
            assert_eq!(fs::read(&path).unwrap(), b"content");
            assert!(files.mkdir("empty").is_dir());
        }
        assert!(!root.exists());
    }
}
