use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::harness::HarnessConfig;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_FILE: &str = "arc-conformance.toml";

/// Main configuration structure for the harness
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub harness: HarnessConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. arc-conformance.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.harness.port = port;
        }
        if let Some(path) = overrides.sign_fixture {
            self.harness.sign_fixture = path;
        }
        if let Some(path) = overrides.verify_fixture {
            self.harness.verify_fixture = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.harness.sign_fixture.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Sign fixture path is empty".to_string(),
            ));
        }

        if self.harness.verify_fixture.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Verify fixture path is empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub sign_fixture: Option<String>,
    pub verify_fixture: Option<String>,
    pub log_level: Option<String>,
}
