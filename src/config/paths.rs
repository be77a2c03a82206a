//! Path management for symkey
//!
//! Provides XDG-compliant path resolution for the settings file and the
//! default key file.
//!
//! ## Path Resolution Order
//!
//! 1. `SYMKEY_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/symkey` or `~/.config/symkey`
//! 3. Windows: `%APPDATA%\symkey`

use std::path::PathBuf;

use crate::error::SymkeyError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "SYMKEY_CONFIG_DIR";

/// Manages all paths used by symkey
#[derive(Debug, Clone)]
pub struct SymkeyPaths {
    /// Base directory for all symkey files
    base_dir: PathBuf,
}

impl SymkeyPaths {
    /// Create a new SymkeyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor the platform config
    /// directory can be determined.
    pub fn new() -> Result<Self, SymkeyError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SymkeyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/symkey/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the default key file
    pub fn key_file(&self) -> PathBuf {
        self.base_dir.join("key.txt")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SymkeyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SymkeyError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if symkey has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SymkeyError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                SymkeyError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("symkey"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SymkeyError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SymkeyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("symkey"))
}
