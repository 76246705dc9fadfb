//! Config struct, defaults, and YAML persistence.
//!
//! Covers:
//! - `load` / `load_from` / `save` (YAML file I/O with atomic write)
//! - XDG-compliant path helpers (`config_path`, `config_dir`)
//! - Default values preserving the ordered font search chain

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::LogLevel;

/// Top-level application configuration.
///
/// Missing file or missing fields fall back to defaults; a file that exists
/// but does not parse is an error (see [`ConfigError`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Top-level window settings
    pub window: WindowConfig,

    /// Font resolution settings
    pub font: FontConfig,

    /// Log verbosity for the session log file
    pub log_level: LogLevel,
}

/// Top-level window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Initial inner width in logical pixels
    pub width: u32,

    /// Initial inner height in logical pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "scribe-pad".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Font resolution settings.
///
/// `search_roots` is an ordered list: each root is joined with the primary
/// and secondary file names to form the candidate path chain, and the first
/// existing, parseable candidate wins. The default chain tolerates different
/// working directories (launch from the repo root, a build directory, or an
/// installed location) by listing relative-depth variants before one absolute
/// system root. Duplicate roots are harmless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Primary font file name, joined against each search root
    pub primary_file: String,

    /// Secondary script-coverage font file name, merged into the primary's
    /// fallback chain when present. Empty string disables the secondary.
    pub secondary_file: String,

    /// Ordered directories searched for font files
    pub search_roots: Vec<PathBuf>,

    /// Target glyph pixel size
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            primary_file: "NotoSans-Medium.ttf".to_string(),
            secondary_file: "NotoSansJP-Medium.otf".to_string(),
            search_roots: vec![
                PathBuf::from("resources"),
                PathBuf::from("../resources"),
                PathBuf::from("../../resources"),
                PathBuf::from("../../../resources"),
                PathBuf::from("."),
                PathBuf::from("/usr/share/fonts/truetype/scribe-pad"),
            ],
            size: 22.0,
        }
    }
}

impl FontConfig {
    /// Candidate paths for the primary font, in search order.
    pub fn primary_candidates(&self) -> Vec<PathBuf> {
        self.candidates(&self.primary_file)
    }

    /// Candidate paths for the secondary font, in search order.
    ///
    /// Empty when no secondary file is configured.
    pub fn secondary_candidates(&self) -> Vec<PathBuf> {
        if self.secondary_file.is_empty() {
            return Vec::new();
        }
        self.candidates(&self.secondary_file)
    }

    fn candidates(&self, file_name: &str) -> Vec<PathBuf> {
        self.search_roots
            .iter()
            .map(|root| root.join(file_name))
            .collect()
    }
}

impl Config {
    /// Load configuration from the default location or create defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_dir())
    }

    /// Load configuration from a specific directory or create defaults.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE);
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            log::info!("Loading existing config from {:?}", config_path);
            let contents = fs::read_to_string(&config_path)?;
            let config: Config = serde_yaml_ng::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }

    /// Save configuration to the default location.
    ///
    /// Writes to a temp file in the target directory first, then renames, so
    /// a crash mid-write never leaves a truncated config behind.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_dir())
    }

    /// Save configuration to a specific directory.
    pub fn save_to(&self, dir: &Path) -> Result<(), ConfigError> {
        let config_path = dir.join(CONFIG_FILE);
        fs::create_dir_all(dir)?;

        let yaml = serde_yaml_ng::to_string(self)?;
        let temp_path = config_path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, &config_path)?;
        log::info!("Saved config to {:?}", config_path);
        Ok(())
    }

    /// Directory holding the config file (`~/.config/scribe-pad` on Linux).
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scribe-pad")
    }

    /// Full path of the config file in the default directory.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.font.size.is_finite() || self.font.size <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "font.size must be a positive number, got {}",
                self.font.size
            )));
        }
        if self.font.primary_file.is_empty() {
            return Err(ConfigError::Validation(
                "font.primary_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

const CONFIG_FILE: &str = "config.yaml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_search_chain_orders_relative_roots_first() {
        let font = FontConfig::default();
        let candidates = font.primary_candidates();
        assert_eq!(candidates.len(), font.search_roots.len());
        assert_eq!(candidates[0], PathBuf::from("resources/NotoSans-Medium.ttf"));
        assert!(candidates.last().unwrap().is_absolute());
    }

    #[test]
    fn empty_secondary_file_yields_no_candidates() {
        let font = FontConfig {
            secondary_file: String::new(),
            ..FontConfig::default()
        };
        assert!(font.secondary_candidates().is_empty());
    }

    #[test]
    fn load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.window.title = "test-window".to_string();
        config.font.size = 18.5;
        config.save_to(dir.path()).unwrap();

        let loaded = Config::load_from(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "window:\n  title: partial\n").unwrap();

        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.window.title, "partial");
        assert_eq!(config.window.width, WindowConfig::default().width);
        assert_eq!(config.font, FontConfig::default());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "window: [not, a, mapping\n").unwrap();

        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn nonpositive_font_size_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "font:\n  size: -4.0\n").unwrap();

        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
