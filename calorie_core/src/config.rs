//! Configuration file support for caltrack.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/caltrack/config.toml`.
//! Every field has a default, so a missing file or a partial file is fine.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub data: DataConfig,
}

/// Nutrition API configuration
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable that holds the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_max")]
    pub default_max: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            default_max: default_max(),
        }
    }
}

/// Ledger storage configuration
#[derive(Clone, Debug, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_ledger_path")]
    pub ledger_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            ledger_path: default_ledger_path(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.nal.usda.gov/ndb".into()
}

fn default_api_key_env() -> String {
    "USDA_API_KEY".into()
}

fn default_max() -> u32 {
    50
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("calorietracker.json")
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            other => {
                tracing::debug!("No config file found at {:?}, using defaults", other);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    ///
    /// Returns None when the platform has no config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("caltrack").join("config.toml"))
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Result<String> {
        match std::env::var(&self.api.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(Error::MissingApiKey(self.api.api_key_env.clone())),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(Error::Config("api.base_url must not be empty".into()));
        }
        if self.api.api_key_env.trim().is_empty() {
            return Err(Error::Config("api.api_key_env must not be empty".into()));
        }
        if self.api.default_max == 0 {
            return Err(Error::Config("api.default_max must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://api.nal.usda.gov/ndb");
        assert_eq!(config.api.api_key_env, "USDA_API_KEY");
        assert_eq!(config.api.default_max, 50);
        assert_eq!(config.data.ledger_path, PathBuf::from("calorietracker.json"));
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[api]
base_url = "http://localhost:9000/ndb"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/ndb");
        assert_eq!(config.api.default_max, 50); // default
        assert_eq!(config.data.ledger_path, PathBuf::from("calorietracker.json"));
    }

    #[test]
    fn test_zero_default_max_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[api]\ndefault_max = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_missing_api_key() {
        let mut config = Config::default();
        config.api.api_key_env = "CALTRACK_TEST_KEY_THAT_IS_NEVER_SET".into();

        let err = config.api_key().unwrap_err();
        assert!(matches!(err, Error::MissingApiKey(ref var) if var == "CALTRACK_TEST_KEY_THAT_IS_NEVER_SET"));
    }
}
