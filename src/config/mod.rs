//! Configuration for fileprompt
//!
//! Holds the selector mode policy and file browser defaults. Configuration
//! is stored as TOML in the user's config directory and can be overridden
//! with `FILEPROMPT_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading, saving or validating configuration
///
/// These are programming or setup mistakes and are surfaced to the caller,
/// unlike read and fetch failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Selector mode string is not one of the known modes
    #[error("Invalid selector mode '{0}' (expected one of: modal, selector, only-selector)")]
    InvalidSelectorMode(String),

    /// Encoding string is not one of the known encodings
    #[error("Invalid encoding '{0}' (expected text or url)")]
    InvalidEncoding(String),

    /// The platform config directory is unknown
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Failed to read or parse configuration sources
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Failed to serialize configuration
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Failed to write the configuration file
    #[error("Failed to write {path}: {source}")]
    Io {
        /// File or directory being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// How the file selector is presented when a prompt opens
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorMode {
    /// Show the modal and wait for the user to act on it
    #[default]
    #[serde(rename = "modal")]
    Modal,
    /// Show the modal and open the file selector straight away
    #[serde(rename = "selector")]
    AutoOpenSelector,
    /// Show only the file selector; dismissing it cancels the prompt
    #[serde(rename = "only-selector")]
    SelectorOnly,
}

impl SelectorMode {
    /// Every mode, in display order
    pub const ALL: [Self; 3] = [Self::Modal, Self::AutoOpenSelector, Self::SelectorOnly];

    /// Name used in configuration files and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modal => "modal",
            Self::AutoOpenSelector => "selector",
            Self::SelectorOnly => "only-selector",
        }
    }

    /// Whether the selector opens as soon as the prompt does
    #[must_use]
    pub const fn opens_selector_immediately(self) -> bool {
        matches!(self, Self::AutoOpenSelector | Self::SelectorOnly)
    }

    /// Whether the modal chrome (title, drop target, URL button) is shown
    #[must_use]
    pub const fn shows_modal(self) -> bool {
        !matches!(self, Self::SelectorOnly)
    }
}

impl std::fmt::Display for SelectorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidSelectorMode(s.to_string()))
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct FilePromptConfig {
    /// How the file selector is presented
    #[serde(default)]
    pub selector_mode: SelectorMode,

    /// Directory the file browser starts in (defaults to the working directory)
    #[serde(default)]
    pub start_dir: Option<PathBuf>,

    /// Show dot-files in the file browser
    #[serde(default)]
    pub show_hidden: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl FilePromptConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("fileprompt").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed, or holds
    /// an unknown selector mode.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, then apply environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("FILEPROMPT"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate and set the selector mode from its string form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSelectorMode` for unknown modes; the
    /// current mode is left untouched.
    pub fn set_selector_mode(&mut self, mode: &str) -> Result<(), ConfigError> {
        self.selector_mode = mode.parse()?;
        Ok(())
    }

    /// Directory the file browser should open in
    #[must_use]
    pub fn browse_dir(&self) -> PathBuf {
        self.start_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
