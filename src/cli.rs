//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for fileprompt using the `clap` crate.
//!
//! # Commands
//!
//! - **prompt**: Show the file prompt and print what the user picked (default)
//! - **fetch**: Fetch a URL directly, without a prompt
//! - **config**: Show or change the stored configuration
//!
//! # Design Features
//!
//! - The result goes to stdout, everything else to stderr
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--verbose` flag to see the log output of the prompt
//! - Command aliases (e.g., `p` for `prompt`, `f` for `fetch`)
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use fileprompt::cli::{Cli, Commands};
//! use fileprompt::Encoding;
//!
//! let cli = Cli::parse_from(["fileprompt", "prompt", "--accept", "image/*", "--as", "url"]);
//! match cli.get_command() {
//!     Commands::Prompt { accept, encoding, .. } => {
//!         assert_eq!(accept, "image/*");
//!         assert_eq!(encoding, Encoding::DataUrl);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use crate::config::SelectorMode;
use crate::reader::Encoding;
use clap::{Parser, Subcommand};

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Store the selector mode (modal, selector, only-selector)
    SetMode {
        /// Selector mode
        #[arg(value_name = "MODE")]
        mode: String,
    },

    /// Print the path of the configuration file
    Path,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "fileprompt")]
#[command(about = "Ask for a file and print its contents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Print debug logs to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the file prompt (default)
    #[command(visible_alias = "p")]
    Prompt {
        /// Accepted formats, e.g. ".png,.jpg" or "image/*"
        #[arg(short = 'a', long = "accept", value_name = "FORMATS", default_value = "")]
        accept: String,

        /// Return the content as text or as a data URL
        #[arg(long = "as", value_name = "ENCODING", default_value = "text")]
        encoding: Encoding,

        /// How to present the file selector (overrides config)
        #[arg(short = 'm', long = "mode", value_name = "MODE")]
        mode: Option<SelectorMode>,
    },

    /// Fetch a URL without showing the prompt
    #[command(visible_alias = "f")]
    Fetch {
        /// URL to fetch
        #[arg(value_name = "URL")]
        url: String,

        /// Accepted formats, sent to the server as the Accept header
        #[arg(short = 'a', long = "accept", value_name = "FORMATS", default_value = "")]
        accept: String,

        /// Return the content as text or as a data URL
        #[arg(long = "as", value_name = "ENCODING", default_value = "text")]
        encoding: Encoding,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Prompt if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Prompt {
            accept: String::new(),
            encoding: Encoding::Text,
            mode: None,
        })
    }

    /// Log filter for `env_logger` when `RUST_LOG` is not set
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_prompt() {
        let cli = Cli::parse_from(["fileprompt"]);
        assert_eq!(
            cli.get_command(),
            Commands::Prompt {
                accept: String::new(),
                encoding: Encoding::Text,
                mode: None,
            }
        );
    }

    #[test]
    fn test_prompt_arguments() {
        let cli = Cli::parse_from([
            "fileprompt", "p", "-a", ".png,.gif", "--as", "url", "--mode", "only-selector",
        ]);
        assert_eq!(
            cli.get_command(),
            Commands::Prompt {
                accept: ".png,.gif".into(),
                encoding: Encoding::DataUrl,
                mode: Some(SelectorMode::SelectorOnly),
            }
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Cli::try_parse_from(["fileprompt", "prompt", "--as", "base64"]).is_err());
        assert!(Cli::try_parse_from(["fileprompt", "prompt", "--mode", "popup"]).is_err());
    }

    #[test]
    fn test_fetch_arguments() {
        let cli = Cli::parse_from(["fileprompt", "fetch", "https://example.com/a.txt", "-q"]);
        assert!(cli.quiet);
        assert_eq!(
            cli.get_command(),
            Commands::Fetch {
                url: "https://example.com/a.txt".into(),
                accept: String::new(),
                encoding: Encoding::Text,
            }
        );
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["fileprompt", "config", "set-mode", "selector"]);
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::SetMode {
                    mode: "selector".into()
                }
            }
        );
    }

    #[test]
    fn test_verbose_log_filter() {
        assert_eq!(Cli::parse_from(["fileprompt"]).log_filter(), "warn");
        assert_eq!(Cli::parse_from(["fileprompt", "-v"]).log_filter(), "debug");
    }
}
