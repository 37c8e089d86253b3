//! Config management use case

use crate::error::{JsdocError, Result};
use crate::infrastructure::{Config, OutputFormat};
use std::path::PathBuf;
use std::str::FromStr;

/// Service for reading and writing jsdoc.toml in a directory
pub struct ConfigService {
    dir: PathBuf,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(dir: PathBuf) -> Self {
        ConfigService { dir }
    }

    fn load(&self) -> Result<Config> {
        Ok(Config::load_from_dir(&self.dir)?.unwrap_or_default())
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.load()?;

        match key {
            "format" => Ok(config.format.to_string()),
            "extensions" => Ok(config.extensions.join(",")),
            "strict" => Ok(config.strict.to_string()),
            _ => Err(JsdocError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: format, extensions, strict",
                key
            ))),
        }
    }

    /// Set a config value, creating jsdoc.toml if needed
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.load()?;

        match key {
            "format" => {
                config.format = OutputFormat::from_str(value).map_err(JsdocError::Config)?;
            }
            "extensions" => {
                config.extensions = value
                    .split(',')
                    .map(|ext| ext.trim().trim_start_matches('.').to_string())
                    .filter(|ext| !ext.is_empty())
                    .collect();
            }
            "strict" => {
                config.strict = value.parse().map_err(|_| {
                    JsdocError::Config(format!(
                        "Invalid value for strict: '{}'. Use true or false",
                        value
                    ))
                })?;
            }
            _ => {
                return Err(JsdocError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: format, extensions, strict",
                    key
                )));
            }
        }

        config.save_to_dir(&self.dir)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.load()
    }
}
