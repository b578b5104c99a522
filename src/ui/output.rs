//! Output abstraction layer
//!
//! Host-facing status messages. The prompt result itself is written with
//! [`OutputWriter::write`] to stdout; everything else goes to stderr so a
//! caller can pipe the result without noise.

use colored::Colorize;
use std::sync::{Mutex, PoisonError};

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use fileprompt::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("file contents");
/// output.error("Something went wrong");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a result
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - results to stdout, messages to stderr
///
/// In quiet mode only results and errors are printed.
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Create a writer that suppresses success, warning and info messages
    #[must_use]
    pub const fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠️".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Result
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// Writer that keeps every message in memory
///
/// Used where output has to be inspected afterwards, such as tests of the
/// command handlers.
///
/// # Examples
///
/// ```
/// use fileprompt::ui::output::{BufferedWriter, MessageLevel, OutputWriter};
///
/// let writer = BufferedWriter::new();
/// writer.write("hello");
/// assert_eq!(writer.messages(), vec![(MessageLevel::Normal, "hello".to_string())]);
/// ```
#[derive(Debug, Default)]
pub struct BufferedWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl BufferedWriter {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages so far, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages of one level, oldest first
    #[must_use]
    pub fn messages_at(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    fn add_message(&self, level: MessageLevel, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}

impl OutputWriter for BufferedWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.add_message(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_writer_creation() {
        let _writer = StdoutWriter::new();
        let _writer2 = StdoutWriter::default();
        assert!(StdoutWriter::quiet().quiet);
    }

    #[test]
    fn test_buffered_writer_messages() {
        let writer = BufferedWriter::new();

        writer.success("Test success");
        writer.error("Test error");
        writer.warning("Test warning");

        let messages = writer.messages();
        assert_eq!(messages.len(), 3);

        assert_eq!(messages[0].0, MessageLevel::Success);
        assert_eq!(messages[0].1, "Test success");

        assert_eq!(messages[1].0, MessageLevel::Error);
        assert_eq!(messages[2].0, MessageLevel::Warning);
    }

    #[test]
    fn test_buffered_writer_filter_by_level() {
        let writer = BufferedWriter::new();
        writer.write("result");
        writer.info("detail");
        writer.write("second");

        assert_eq!(writer.messages_at(MessageLevel::Normal), vec!["result", "second"]);
        assert_eq!(writer.messages_at(MessageLevel::Info), vec!["detail"]);
        assert!(writer.messages_at(MessageLevel::Error).is_empty());
    }
}
