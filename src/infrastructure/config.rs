//! Configuration management

use crate::error::{JsdocError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the configuration file
pub const CONFIG_FILE: &str = "jsdoc.toml";

/// Environment variable pointing at an explicit configuration file
pub const CONFIG_ENV: &str = "JSDOC_CONFIG";

/// How parse results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: '{}'. Valid formats are: text, json",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format
    pub format: OutputFormat,
    /// File extensions picked up when walking a directory
    pub extensions: Vec<String>,
    /// Stop at the first input that fails to parse
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Text,
            extensions: vec!["jsdoc".to_string(), "txt".to_string()],
            strict: true,
        }
    }
}

impl Config {
    /// Load config from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| {
            JsdocError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Load config from jsdoc.toml in the given directory, if present
    pub fn load_from_dir(path: &Path) -> Result<Option<Self>> {
        let config_path = path.join(CONFIG_FILE);
        if !config_path.is_file() {
            return Ok(None);
        }
        Self::load_from_file(&config_path).map(Some)
    }

    /// Save config to jsdoc.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    /// Resolve the effective config.
    /// First checks JSDOC_CONFIG, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(config_path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(config_path);
            if !path.is_file() {
                return Err(JsdocError::Config(format!(
                    "{} is set to '{}' but the file does not exist",
                    CONFIG_ENV,
                    path.display()
                )));
            }
            return Self::load_from_file(&path);
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` to the first jsdoc.toml; defaults when none exists
    pub fn discover_from(start: &Path) -> Result<Self> {
        for dir in start.ancestors() {
            if let Some(config) = Self::load_from_dir(dir)? {
                return Ok(config);
            }
        }
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.extensions, vec!["jsdoc", "txt"]);
        assert!(config.strict);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            format: OutputFormat::Json,
            extensions: vec!["doc".to_string()],
            strict: false,
        };

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(CONFIG_FILE).exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, Some(config));
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        assert_eq!(Config::load_from_dir(temp.path()).unwrap(), None);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "format = \"json\"\n").unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap().unwrap();
        assert_eq!(loaded.format, OutputFormat::Json);
        assert!(loaded.strict);
        assert_eq!(loaded.extensions, vec!["jsdoc", "txt"]);
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "format = \"yaml\"\n").unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            JsdocError::Config(msg) => assert!(msg.contains("Failed to parse")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_from_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "strict = false\n").unwrap();

        let config = Config::discover_from(&nested).unwrap();
        assert!(!config.strict);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("yaml").is_err());
    }
}
