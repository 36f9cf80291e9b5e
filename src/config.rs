//! Settings file for the tracker window
//!
//! JSON file under the platform config dir. Only display settings live here;
//! board assignments and countdowns are never written to disk.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::cli::Cli;
use crate::constants::icons::{DEFAULT_ASSETS_DIR, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::readout::ReadoutFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the spell icon images
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Icon edge length in pixels
    #[serde(default = "default_icon_size")]
    pub icon_size: u32,

    #[serde(default)]
    pub readout_format: ReadoutFormat,

    #[serde(default)]
    pub always_on_top: bool,
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ASSETS_DIR)
}

fn default_icon_size() -> u32 {
    DEFAULT_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            icon_size: default_icon_size(),
            readout_format: ReadoutFormat::default(),
            always_on_top: false,
        }
    }
}

impl AppConfig {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load settings from `path`, creating the file with defaults when absent.
    /// A file that fails to parse is left untouched and defaults are used.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Config file not found, creating default config");
            let config = AppConfig::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = match serde_json::from_str::<AppConfig>(&contents) {
            Ok(config) => config,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                return Ok(AppConfig::default());
            }
        };

        config.validate_and_clamp();
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Command-line values win over the file
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(dir) = &cli.assets_dir {
            self.assets_dir = dir.clone();
        }
        if let Some(size) = cli.icon_size {
            self.icon_size = size;
        }
        if let Some(format) = cli.readout {
            self.readout_format = format;
        }
        if cli.always_on_top {
            self.always_on_top = true;
        }
        self.validate_and_clamp();
    }

    fn validate_and_clamp(&mut self) {
        if self.icon_size < MIN_SIZE {
            warn!(icon_size = self.icon_size, min = MIN_SIZE, "icon_size below minimum, clamping");
            self.icon_size = MIN_SIZE;
        } else if self.icon_size > MAX_SIZE {
            warn!(icon_size = self.icon_size, max = MAX_SIZE, "icon_size exceeds maximum, clamping");
            self.icon_size = MAX_SIZE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("spell-timer-config-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir.join("nested").join("config.json")
    }

    #[test]
    fn test_missing_file_creates_defaults() {
        let path = scratch_path("missing");

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists(), "default config should be written");

        let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn test_partial_file_fills_defaults_and_clamps() {
        let path = scratch_path("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "icon_size": 4, "readout_format": "minutes_seconds" }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.icon_size, MIN_SIZE);
        assert_eq!(config.readout_format, ReadoutFormat::MinutesSeconds);
        assert_eq!(config.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
        assert!(!config.always_on_top);

        let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn test_malformed_file_falls_back_without_overwriting() {
        let path = scratch_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");

        let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config = AppConfig {
            assets_dir: PathBuf::from("/from/file"),
            icon_size: 40,
            readout_format: ReadoutFormat::Seconds,
            always_on_top: false,
        };
        let cli = Cli {
            icon_size: Some(9000),
            readout: Some(ReadoutFormat::MinutesSeconds),
            always_on_top: true,
            ..Cli::default()
        };

        config.apply_cli(&cli);
        assert_eq!(config.assets_dir, PathBuf::from("/from/file"));
        assert_eq!(config.icon_size, MAX_SIZE);
        assert_eq!(config.readout_format, ReadoutFormat::MinutesSeconds);
        assert!(config.always_on_top);
    }

    #[test]
    fn test_save_then_load_preserves_values() {
        let path = scratch_path("saved");
        let config = AppConfig {
            assets_dir: PathBuf::from("icons"),
            icon_size: 72,
            readout_format: ReadoutFormat::MinutesSeconds,
            always_on_top: true,
        };
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap(), config);

        let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }
}
