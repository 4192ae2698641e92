//! Configuration file support.
//!
//! User preferences and tool hotkeys are stored as JSON in the platform
//! config directory and read back on startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::export::DEFAULT_MAP_NAME;
use crate::keybindings::KeyBindings;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    #[serde(default)]
    pub preferences: UserPreferences,

    #[serde(default)]
    pub keybindings: KeyBindingsConfig,
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Map name for new documents
    #[serde(default = "default_map_name")]
    pub default_map_name: String,

    /// Scale exported coordinates to 1920x1080
    #[serde(default)]
    pub screen_standard_mode: bool,

    /// Clicks copy coordinates instead of drawing
    #[serde(default)]
    pub clipboard_mode: bool,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Default export folder path
    #[serde(default)]
    pub export_folder: String,
}

fn default_map_name() -> String {
    DEFAULT_MAP_NAME.to_string()
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            default_map_name: default_map_name(),
            screen_standard_mode: false,
            clipboard_mode: false,
            log_level: LogLevel::default(),
            export_folder: String::new(),
        }
    }
}

/// Keybinding configuration section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindingsConfig {
    #[serde(default = "default_select_key")]
    pub tool_select: char,
    #[serde(default = "default_rectangle_key")]
    pub tool_rectangle: char,
    #[serde(default = "default_circle_key")]
    pub tool_circle: char,
    #[serde(default = "default_polygon_key")]
    pub tool_polygon: char,
}

fn default_select_key() -> char {
    KeyBindings::default().tool_select
}

fn default_rectangle_key() -> char {
    KeyBindings::default().tool_rectangle
}

fn default_circle_key() -> char {
    KeyBindings::default().tool_circle
}

fn default_polygon_key() -> char {
    KeyBindings::default().tool_polygon
}

impl Default for KeyBindingsConfig {
    fn default() -> Self {
        Self::from(&KeyBindings::default())
    }
}

impl From<&KeyBindings> for KeyBindingsConfig {
    fn from(bindings: &KeyBindings) -> Self {
        Self {
            tool_select: bindings.tool_select,
            tool_rectangle: bindings.tool_rectangle,
            tool_circle: bindings.tool_circle,
            tool_polygon: bindings.tool_polygon,
        }
    }
}

impl KeyBindingsConfig {
    pub fn to_keybindings(&self) -> KeyBindings {
        KeyBindings {
            tool_select: self.tool_select,
            tool_rectangle: self.tool_rectangle,
            tool_circle: self.tool_circle,
            tool_polygon: self.tool_polygon,
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            preferences: UserPreferences::default(),
            keybindings: KeyBindingsConfig::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "imagemap-config.json"
    }

    /// Get the default config file path for auto-load/save.
    pub fn default_path() -> Option<PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("imagemap").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("imagemap")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", path);
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to the default path.
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;

        self.save(&path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let mut config = AppConfig::new();
        config.preferences.default_map_name = "shop".to_string();
        config.preferences.screen_standard_mode = true;
        config.preferences.log_level = LogLevel::Debug;
        config.keybindings.tool_circle = 'o';

        let json = config.to_json().expect("serialize");
        let loaded = AppConfig::from_json(&json).expect("parse");
        assert_eq!(loaded, config);
        assert_eq!(loaded.keybindings.to_keybindings().tool_circle, 'o');
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_json(r#"{ "version": 1 }"#).expect("parse");
        assert_eq!(config.preferences, UserPreferences::default());
        assert_eq!(config.preferences.default_map_name, "imagemap");
        assert_eq!(config.keybindings.to_keybindings(), KeyBindings::default());
    }

    #[test]
    fn test_partial_preferences() {
        let config = AppConfig::from_json(
            r#"{ "version": 1, "preferences": { "clipboard_mode": true, "log_level": "warn" } }"#,
        )
        .expect("parse");
        assert!(config.preferences.clipboard_mode);
        assert_eq!(config.preferences.log_level, LogLevel::Warn);
        assert_eq!(config.preferences.default_map_name, "imagemap");
    }

    #[test]
    fn test_version_too_new() {
        let json = format!(r#"{{ "version": {} }}"#, CONFIG_VERSION + 1);
        assert!(matches!(
            AppConfig::from_json(&json),
            Err(ConfigError::VersionTooNew { .. })
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            AppConfig::from_json("not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(AppConfig::default_filename());

        let mut config = AppConfig::new();
        config.preferences.export_folder = "/tmp/out".to_string();
        config.save(&path).expect("save");

        let loaded = AppConfig::load(&path).expect("load");
        assert_eq!(loaded.preferences.export_folder, "/tmp/out");
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
    }
}
