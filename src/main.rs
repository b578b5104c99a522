//! fileprompt CLI application entry point
//!
//! Shows a file prompt in the terminal and prints what the user picked, so
//! shell scripts can ask for a file the same way a GUI would.
//!
//! # Usage
//!
//! ```bash
//! # Ask for any file and print it as text (default command)
//! fileprompt
//! fileprompt prompt
//!
//! # Ask for an image and print it as a data URL
//! fileprompt prompt --accept "image/*" --as url
//!
//! # Open the file browser straight away
//! fileprompt prompt --mode selector
//!
//! # Fetch a URL without a prompt
//! fileprompt fetch https://example.com/logo.png --as url
//!
//! # Make the browser-only prompt the default
//! fileprompt config set-mode only-selector
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/fileprompt/config.toml` on Linux). Every field can be
//! overridden with a `FILEPROMPT_` environment variable.

use fileprompt::{
    FilePromptConfig, HttpFetcher, PromptError, Prompter, RatatuiFrontend,
    cli::{Cli, Commands},
    commands,
    ui::{OutputWriter, StdoutWriter},
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

type Result<T> = std::result::Result<T, PromptError>;

fn load_config() -> Result<(FilePromptConfig, PathBuf)> {
    let path = FilePromptConfig::config_path()?;
    let config = FilePromptConfig::load_from(&path)?;
    Ok((config, path))
}

fn run(
    cli: &Cli,
    config: &mut FilePromptConfig,
    path: &Path,
    output: &dyn OutputWriter,
) -> Result<bool> {
    match cli.get_command() {
        Commands::Prompt {
            accept,
            encoding,
            mode,
        } => {
            let fetcher = HttpFetcher::new()?;
            let frontend = RatatuiFrontend::from_config(config);
            let mut prompter = Prompter::new(frontend, Arc::new(fetcher))
                .with_selector_mode(mode.unwrap_or(config.selector_mode));
            commands::prompt(&mut prompter, &accept, encoding, output)
        }
        Commands::Fetch {
            url,
            accept,
            encoding,
        } => {
            let fetcher = HttpFetcher::new()?;
            commands::fetch(&fetcher, &url, &accept, encoding, output)
        }
        Commands::Config { command } => commands::config(&command, config, path, output),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let (mut config, path) = match load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            StdoutWriter::new().error(&e.to_string());
            return ExitCode::from(2);
        }
    };

    let output = if cli.quiet || config.quiet {
        StdoutWriter::quiet()
    } else {
        StdoutWriter::new()
    };

    match run(&cli, &mut config, &path, &output) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::from(2)
        }
    }
}
