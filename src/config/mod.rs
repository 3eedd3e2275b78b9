// ABOUTME: Configuration management for bizlist
// Handles application config: dataset override, UI preferences, log settings

#![allow(dead_code)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory/dataset settings
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Optional path to a JSON dataset that replaces the embedded one
    pub dataset_path: Option<PathBuf>,

    /// Maximum number of search results to display (default: 50)
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            max_results: default_max_results(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Color theme
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Whether to show verified badges in result lists
    #[serde(default = "default_true")]
    pub show_verified_badges: bool,

    /// Whether to show ratings in result lists
    #[serde(default = "default_true")]
    pub show_ratings: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_verified_badges: true,
            show_ratings: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter directive (e.g. "bizlist=debug")
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_results() -> usize {
    50
}

fn default_log_filter() -> String {
    "bizlist=info".to_string()
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        let config_paths = Self::get_config_paths();

        let mut config = Self::default();

        // Load each config file and merge, later paths losing to earlier ones
        for path in config_paths {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;

                let file_config: AppConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config from {}", path.display()))?;

                config.merge(file_config);
            }
        }

        Ok(config)
    }

    /// Save configuration to the user config directory
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::get_user_config_dir()?;
        fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }

    /// Configuration file paths in order of precedence
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".bizlist").join("config.toml"));
        }

        // 2. User config (~/.bizlist/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        paths
    }

    /// User configuration directory (~/.bizlist)
    pub fn get_user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".bizlist"))
    }

    /// Merge another config into this one
    fn merge(&mut self, other: AppConfig) {
        if other.directory.dataset_path.is_some() {
            self.directory.dataset_path = other.directory.dataset_path;
        }
        self.directory.max_results = other.directory.max_results;

        if other.ui_preferences.theme != default_theme() {
            self.ui_preferences.theme = other.ui_preferences.theme;
        }
        self.ui_preferences.show_verified_badges = other.ui_preferences.show_verified_badges;
        self.ui_preferences.show_ratings = other.ui_preferences.show_ratings;

        if other.logging.filter != default_log_filter() {
            self.logging.filter = other.logging.filter;
        }
    }

    /// Load a config from one specific file, bypassing the search paths
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: AppConfig =
            toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            directory: DirectoryConfig::default(),
            ui_preferences: UiPreferences::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.directory.max_results, 50);
        assert!(config.directory.dataset_path.is_none());
        assert!(config.ui_preferences.show_ratings);
    }

    #[test]
    fn test_load_from_file_and_merge_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[directory]
dataset_path = "/tmp/custom.json"
max_results = 10

[ui_preferences]
theme = "light"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(
            config.directory.dataset_path,
            Some(PathBuf::from("/tmp/custom.json"))
        );
        assert_eq!(config.directory.max_results, 10);
        assert_eq!(config.ui_preferences.theme, "light");
        // Unspecified sections fall back to defaults
        assert_eq!(config.logging.filter, "bizlist=info");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.directory.max_results, config.directory.max_results);
        assert_eq!(parsed.ui_preferences.theme, config.ui_preferences.theme);
    }
}
