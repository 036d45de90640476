//! User settings for daka
//!
//! Presentation preferences only. Cap, unit price and the daily punch limit
//! are fixed `Rules` and deliberately absent here.

use serde::Deserialize;

use super::paths::DakaPaths;
use crate::error::DakaError;

/// User settings for daka
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether terminal output uses ANSI colours
    #[serde(default = "default_color")]
    pub color: bool,

    /// Currency label printed after amounts
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_color() -> bool {
    true
}

fn default_currency() -> String {
    "RMB".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            color: default_color(),
            currency: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &DakaPaths) -> Result<Self, DakaError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| DakaError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| DakaError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Colour is on unless disabled here or through `NO_COLOR`
    pub fn use_color(&self) -> bool {
        self.color && std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert!(settings.color);
        assert_eq!(settings.currency, "RMB");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DakaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency, "RMB");
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_full_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DakaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"schema_version": 1, "color": false, "currency": "CNY"}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.color);
        assert_eq!(loaded.currency, "CNY");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DakaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"color": false}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.color);
        assert_eq!(loaded.currency, "RMB");
    }

    #[test]
    fn test_garbage_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DakaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, DakaError::Config(_)));
    }
}
