//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Default pass/fail threshold for field checks
    #[serde(default = "default_threshold")]
    pub threshold: u32,

    /// Extraction API endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Default extraction model
    #[serde(default = "default_model")]
    pub model: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".joblens").join("config.toml"))
    }

    /// Load configuration from the default path, or create defaults.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            threshold: default_threshold(),
            endpoint: default_endpoint(),
            model: default_model(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_threshold() -> u32 {
    joblens_eval::DEFAULT_THRESHOLD
}

fn default_endpoint() -> String {
    joblens_llm::openrouter::DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    joblens_llm::openrouter::DEFAULT_MODEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.threshold, 50);
        assert!(config.settings.endpoint.contains("openrouter.ai"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[settings]
color = false
format = "json"
threshold = 70
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert!(!config.settings.color);
        assert!(matches!(config.settings.format, OutputFormat::Json));
        assert_eq!(config.settings.threshold, 70);
        // Unspecified settings fall back to defaults.
        assert_eq!(config.settings.model, "deepseek/deepseek-chat");
    }

    #[test]
    fn test_load_from_bad_file_is_toml_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not [ toml").unwrap();

        let result = Config::load_from(file.path());
        assert!(matches!(result, Err(CliError::Toml(_))));
    }

    #[test]
    fn test_round_trip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.settings.threshold, config.settings.threshold);
        assert_eq!(parsed.settings.endpoint, config.settings.endpoint);
    }
}
