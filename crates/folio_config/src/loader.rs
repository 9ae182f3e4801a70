//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::FolioConfig;
use std::path::Path;

/// The configuration file name looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Loads and validates `folio.toml` from a project directory.
///
/// A missing file yields the default configuration.
pub fn load_config(project_dir: &Path) -> Result<FolioConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no configuration file, using defaults");
        return Ok(FolioConfig::default());
    }
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `folio.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<FolioConfig, ConfigError> {
    let config: FolioConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Rejects settings that cannot apply to the selected sink.
fn validate_config(config: &FolioConfig) -> Result<(), ConfigError> {
    let diagnostics = &config.diagnostics;
    match diagnostics.max_per_file {
        Some(0) => Err(ConfigError::ValidationError(
            "diagnostics.max_per_file must be greater than 0".to_string(),
        )),
        Some(_) if !diagnostics.sink.retains_diagnostics() => {
            Err(ConfigError::ValidationError(format!(
                "diagnostics.max_per_file is not supported by the '{}' sink",
                diagnostics.sink
            )))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SinkKind;

    #[test]
    fn empty_file_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.diagnostics.sink, SinkKind::Collect);
    }

    #[test]
    fn parse_full_section() {
        let toml = r#"
[build]
output = "_site"

[diagnostics]
sink = "fail-fast"
max_per_file = 50
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.diagnostics.sink, SinkKind::FailFast);
        assert_eq!(config.diagnostics.max_per_file, Some(50));
    }

    #[test]
    fn zero_cap_rejected() {
        let toml = r#"
[diagnostics]
max_per_file = 0
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn cap_with_counting_sink_rejected() {
        let toml = r#"
[diagnostics]
sink = "count"
max_per_file = 10
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert_eq!(
            format!("{err}"),
            "validation error: diagnostics.max_per_file is not supported by the 'count' sink"
        );
    }

    #[test]
    fn unknown_sink_rejected() {
        let toml = r#"
[diagnostics]
sink = "email"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn unknown_key_rejected() {
        let toml = r#"
[diagnostics]
max_errors = 3
"#;
        assert!(matches!(
            load_config_from_str(toml).unwrap_err(),
            ConfigError::ParseError(_)
        ));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[diagnostics]\nsink = \"null\"\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.diagnostics.sink, SinkKind::Null);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.diagnostics.sink, SinkKind::Collect);
    }

    #[test]
    fn unreadable_config_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
