//! Path management for daka
//!
//! ## Path Resolution Order
//!
//! 1. `DAKA_DATA_DIR` environment variable (if set and not empty)
//! 2. The directory holding the `dk` executable, so the state file travels
//!    with the tool
//! 3. The platform config directory (`~/.config/daka` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::DakaError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "DAKA_DATA_DIR";

/// Manages all paths used by daka
#[derive(Debug, Clone)]
pub struct DakaPaths {
    /// Base directory for all daka data
    base_dir: PathBuf,
}

impl DakaPaths {
    /// Create a new DakaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the executable location nor a platform
    /// config directory can be determined.
    pub fn new() -> Result<Self, DakaError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create DakaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the path to the persisted punch state
    pub fn state_file(&self) -> PathBuf {
        self.base_dir.join("daka_status.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }
}

fn resolve_default_path() -> Result<PathBuf, DakaError> {
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        return Ok(dir);
    }

    ProjectDirs::from("", "", "daka")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DakaError::Config("Could not determine a data directory".into()))
}
