// ABOUTME: Configuration file loading, validation, and hierarchical merging for termimg
// ABOUTME: Supports TOML config files with XDG Base Directory specification compliance

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Largest ANSI column count a config file may ask for
pub const MAX_ANSI_COLUMNS: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub ansi_columns: Option<u32>,
    #[serde(default)]
    pub sixel: Option<bool>,
}

impl Config {
    /// Load configuration from standard XDG-compliant locations
    pub fn load() -> Result<Self> {
        Self::load_from_paths(Self::get_config_paths().as_slice())
    }

    /// Load configuration from specific file paths; later paths override earlier ones
    pub fn load_from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(path) {
                Ok(file_config) => config = config.merge(file_config),
                Err(e) => log::warn!("Skipping config file {}: {:#}", path.display(), e),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Standard config file paths, lowest precedence first
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. User config directory fallback
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".config").join("termimg").join("config.toml"));
        }

        // 2. XDG config home
        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(config_home).join("termimg").join("config.toml"));
        }

        // 3. Project-specific config (highest precedence)
        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(current_dir.join("termimg.toml"));
        }

        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        Config {
            protocol: other.protocol.or(self.protocol),
            width: other.width.or(self.width),
            ansi_columns: other.ansi_columns.or(self.ansi_columns),
            sixel: other.sixel.or(self.sixel),
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        if self.width == Some(0) {
            return Err(anyhow!("width must be at least 1"));
        }

        if let Some(columns) = self.ansi_columns {
            if columns == 0 || columns > MAX_ANSI_COLUMNS {
                return Err(anyhow!(
                    "ansi_columns must be between 1 and {}, got {}",
                    MAX_ANSI_COLUMNS,
                    columns
                ));
            }
        }

        if matches!(self.protocol.as_deref(), Some("")) {
            return Err(anyhow!("protocol must not be empty"));
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
        assert!(config.protocol.is_none());
        assert!(config.width.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            protocol: Some("ansi".to_string()),
            width: Some(100),
            ..Default::default()
        };

        let override_config = Config {
            protocol: Some("kitty".to_string()),
            sixel: Some(true),
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.protocol, Some("kitty".to_string()));
        assert_eq!(merged.width, Some(100));
        assert_eq!(merged.sixel, Some(true));
        assert_eq!(merged.ansi_columns, None);
    }

    #[test]
    fn test_validate_rejects_out_of_range_columns() {
        let config = Config {
            ansi_columns: Some(MAX_ANSI_COLUMNS + 1),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            width: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
