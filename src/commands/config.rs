//! Config command - show or change the stored configuration

use crate::{
    PromptError,
    cli::ConfigCommands,
    config::{ConfigError, FilePromptConfig},
    ui::OutputWriter,
};
use std::path::Path;

type Result<T> = std::result::Result<T, PromptError>;

/// Execute the config command against the file at `path`
///
/// # Errors
/// Returns an error if the selector mode is unknown or the file cannot be
/// written.
pub fn execute(
    command: &ConfigCommands,
    config: &mut FilePromptConfig,
    path: &Path,
    output: &dyn OutputWriter,
) -> Result<bool> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(config).map_err(ConfigError::from)?;
            output.write(rendered.trim_end());
        }
        ConfigCommands::SetMode { mode } => {
            config.set_selector_mode(mode)?;
            config.save_to(path)?;
            output.success(&format!("Selector mode set to {}", config.selector_mode));
        }
        ConfigCommands::Path => output.write(&path.display().to_string()),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectorMode;
    use crate::testing::TempFiles;
    use crate::ui::{BufferedWriter, MessageLevel};

    #[test]
    fn test_show_prints_toml() {
        let files = TempFiles::new();
        let mut config = FilePromptConfig {
            selector_mode: SelectorMode::AutoOpenSelector,
            ..FilePromptConfig::default()
        };
        let output = BufferedWriter::new();

        execute(&ConfigCommands::Show, &mut config, &files.path().join("c.toml"), &output).unwrap();
        let shown = output.messages_at(MessageLevel::Normal).join("\n");
        assert!(shown.contains("selector_mode = \"selector\""));
    }

    #[test]
    fn test_set_mode_persists() {
        let files = TempFiles::new();
        let path = files.path().join("nested/config.toml");
        let mut config = FilePromptConfig::default();
        let output = BufferedWriter::new();

        let command = ConfigCommands::SetMode {
            mode: "only-selector".into(),
        };
        execute(&command, &mut config, &path, &output).unwrap();

        assert_eq!(config.selector_mode, SelectorMode::SelectorOnly);
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.contains("only-selector"));
        assert_eq!(output.messages_at(MessageLevel::Success).len(), 1);
    }

    #[test]
    fn test_set_mode_rejects_unknown() {
        let files = TempFiles::new();
        let path = files.path().join("config.toml");
        let mut config = FilePromptConfig::default();
        let output = BufferedWriter::new();

        let command = ConfigCommands::SetMode {
            mode: "popup".into(),
        };
        let result = execute(&command, &mut config, &path, &output);
        assert!(matches!(
            result,
            Err(PromptError::Config(ConfigError::InvalidSelectorMode(_)))
        ));
        assert_eq!(config.selector_mode, SelectorMode::Modal);
        assert!(!path.exists());
    }

    #[test]
    fn test_path() {
        let output = BufferedWriter::new();
        let path = Path::new("/tmp/fileprompt/config.toml");
        execute(&ConfigCommands::Path, &mut FilePromptConfig::default(), path, &output).unwrap();
        assert_eq!(
            output.messages_at(MessageLevel::Normal),
            vec!["/tmp/fileprompt/config.toml"]
        );
    }
}
