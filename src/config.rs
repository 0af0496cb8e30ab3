//! Application configuration.

use crate::consts::cli_consts::DEFAULT_DASHBOARD_SIZE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};
use thiserror::Error;

const CONFIG_DIR: &str = ".safe-connectors";
const CONFIG_FILE: &str = "config.json";
const STORE_FILE: &str = "connectors.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine the home directory")]
    NoHomeDir,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Chain short name used in Safe routes, e.g. `eth`.
    pub short_name: String,
    /// Address of the Safe whose dashboard is shown.
    pub safe_address: String,
    /// Chain identifier carried by share links.
    pub chain_id: String,
    /// Bearer token for the connector catalog.
    #[serde(default = "default_api_token")]
    pub api_token: String,
    /// Number of grid cells in the connectors widget.
    #[serde(default = "default_dashboard_size")]
    pub dashboard_size: usize,
}

fn default_api_token() -> String {
    "demo".to_string()
}

fn default_dashboard_size() -> usize {
    DEFAULT_DASHBOARD_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            short_name: "eth".to_string(),
            safe_address: "0x0000000000000000000000000000000000000000".to_string(),
            chain_id: "1".to_string(),
            api_token: default_api_token(),
            dashboard_size: default_dashboard_size(),
        }
    }
}

impl Config {
    /// Create Config for the given Safe.
    pub fn new(short_name: String, safe_address: String, chain_id: String) -> Self {
        Config {
            short_name,
            safe_address,
            chain_id,
            ..Config::default()
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}

fn config_dir() -> Result<PathBuf, ConfigError> {
    let home = home::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(CONFIG_DIR))
}

/// Path of the configuration file, `~/.safe-connectors/config.json`.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// Path of the pinned/custom connector store, `~/.safe-connectors/connectors.json`.
pub fn get_store_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(STORE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn sample() -> Config {
        Config::new(
            "gno".to_string(),
            "0x1234567890abcdef1234567890abcdef12345678".to_string(),
            "100".to_string(),
        )
    }

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = sample();
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = sample().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Saving a configuration should overwrite an existing file.
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config1 = sample();
        config1.save(&path).unwrap();

        let mut config2 = sample();
        config2.dashboard_size = 9;
        config2.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config2, loaded_config);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // Older files without the optional fields pick up defaults.
    fn test_missing_optional_fields_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"short_name":"eth","safe_address":"0xabc","chain_id":"1"}"#,
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.api_token, "demo");
        assert_eq!(config.dashboard_size, DEFAULT_DASHBOARD_SIZE);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, Config::default());
    }
}
