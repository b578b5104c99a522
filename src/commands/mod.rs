//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and reports through an `OutputWriter`. They return whether a result
//! was produced, so the binary can pick its exit code.

pub mod config;
pub mod fetch;
pub mod prompt;

// Re-export execute functions for convenience
pub use config::execute as config;
pub use fetch::execute as fetch;
pub use prompt::execute as prompt;
