//! User settings for symkey
//!
//! Manages the default key file location and the ciphertext output format.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::SymkeyPaths;
use crate::error::SymkeyError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for symkey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Key file used when no key is given on the command line.
    /// Falls back to `key.txt` in the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_file: Option<PathBuf>,

    /// Whether ciphertext is base64-armored by default
    #[serde(default)]
    pub armor: bool,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            key_file: None,
            armor: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SymkeyPaths) -> Result<Self, SymkeyError> {
        let settings_path = paths.settings_file();

        let settings: Settings = read_json(&settings_path).map_err(|e| {
            SymkeyError::Config(format!("Failed to load settings file: {}", e))
        })?;

        tracing::debug!(
            path = %settings_path.display(),
            exists = settings_path.exists(),
            "settings loaded"
        );

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SymkeyPaths) -> Result<(), SymkeyError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Resolve the key file to use when none is given explicitly
    ///
    /// `paths` is `None` when no config directory could be determined. The
    /// configured key file still applies then; the default one does not.
    pub fn resolve_key_file(&self, paths: Option<&SymkeyPaths>) -> Result<PathBuf, SymkeyError> {
        match (&self.key_file, paths) {
            (Some(path), _) => Ok(path.clone()),
            (None, Some(paths)) => Ok(paths.key_file()),
            (None, None) => Err(SymkeyError::Config(
                "No config directory for the default key file; pass --key or --key-file".into(),
            )),
        }
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
        assert!(settings.key_file.is_none());
        assert!(!settings.armor);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SymkeyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SymkeyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            key_file: Some(PathBuf::from("/tmp/other.key")),
            armor: true,
            ..Settings::default()
        };

        settings.save(&paths).unwrap();
        assert!(paths.is_initialized());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SymkeyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"armor": true}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.armor);
        assert_eq!(loaded.schema_version, 1);
        assert!(loaded.key_file.is_none());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SymkeyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SymkeyError::Config(_)));
    }

    #[test]
    fn test_resolve_key_file() {
        let paths = SymkeyPaths::with_base_dir(PathBuf::from("/cfg"));

        let settings = Settings::default();
        assert_eq!(
            settings.resolve_key_file(Some(&paths)).unwrap(),
            PathBuf::from("/cfg/key.txt")
        );

        let settings = Settings {
            key_file: Some(PathBuf::from("/keys/app.key")),
            ..Settings::default()
        };
        assert_eq!(
            settings.resolve_key_file(Some(&paths)).unwrap(),
            PathBuf::from("/keys/app.key")
        );
    }

    #[test]
    fn test_resolve_key_file_without_config_dir() {
        let err = Settings::default().resolve_key_file(None).unwrap_err();
        assert!(matches!(err, SymkeyError::Config(_)));

        let settings = Settings {
            key_file: Some(PathBuf::from("/keys/app.key")),
            ..Settings::default()
        };
        assert_eq!(
            settings.resolve_key_file(None).unwrap(),
            PathBuf::from("/keys/app.key")
        );
    }
}
