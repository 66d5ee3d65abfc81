//! Configuration file handling.
//!
//! A config is looked up in order: an explicit path, `./regionmap.ini`, then
//! `~/.regionmap/config.ini`. Without any file the built-in defaults apply.
//! Settings structs live in [`super::settings`], defaults in
//! [`super::defaults`], parsing in [`super::parser`], and serialization in
//! [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::defaults::LOCAL_CONFIG_FILE;
use super::settings::ConfigFile;
use crate::diagnostics::LonLatLimits;
use crate::patch::{PatchLayout, PatchTable};

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Explicitly requested config file does not exist
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load the first config found by [`locate_config`], or defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        match locate_config(None) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Load from an explicit path that must exist, or fall back to lookup.
    ///
    /// Returns the config together with the file it came from.
    pub fn load_with(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigFileError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigFileError::NotFound(path.to_path_buf()));
            }
        }
        match locate_config(explicit) {
            Some(path) => Ok((Self::load_from(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// File locations for the patch and merge commands.
    pub fn patch_layout(&self) -> PatchLayout {
        let root = &self.paths.root;
        let defaults = PatchLayout::under_root(root);
        let resolve = |p: &Option<PathBuf>, fallback: PathBuf| match p {
            Some(p) => root.join(p),
            None => fallback,
        };
        PatchLayout {
            master: resolve(&self.paths.master, defaults.master),
            extra_dir: resolve(&self.paths.extra_dir, defaults.extra_dir),
            wgs84_dir: resolve(&self.paths.wgs84_dir, defaults.wgs84_dir),
        }
    }

    pub fn patch_table(&self) -> &PatchTable {
        &self.regions.table
    }

    pub fn limits(&self) -> &LonLatLimits {
        &self.limits
    }
}

/// Get the path to the config directory (~/.regionmap).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".regionmap")
}

/// Get the path to the user config file (~/.regionmap/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

/// The config file that applies, if any.
///
/// An explicit path wins even when it does not exist.
pub fn locate_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    [PathBuf::from(LOCAL_CONFIG_FILE), config_file_path()]
        .into_iter()
        .find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DEFAULT_TOP;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert_eq!(config.paths.root, PathBuf::from("."));
        assert!(config.paths.master.is_none());
        assert_eq!(config.patch_table().len(), 5);
        assert_eq!(config.limits().lon_max, 200.0);
        assert_eq!(config.report.top, DEFAULT_TOP);
        assert!(config.logging.file.ends_with("regionmap.log"));
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("missing.ini");

        let err = ConfigFile::load_with(Some(&config_path)).unwrap_err();
        assert!(matches!(err, ConfigFileError::NotFound(_)));
    }

    #[test]
    fn test_explicit_config_is_reported() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("regionmap.ini");
        std::fs::write(&config_path, "[report]\ntop = 3\n").unwrap();

        let (config, source) = ConfigFile::load_with(Some(&config_path)).unwrap();

        assert_eq!(config.report.top, 3);
        assert_eq!(source, Some(config_path));
    }

    #[test]
    fn test_patch_layout_defaults_below_root() {
        let mut config = ConfigFile::default();
        config.paths.root = PathBuf::from("/project");

        assert_eq!(
            config.patch_layout(),
            PatchLayout::under_root(Path::new("/project"))
        );
    }

    #[test]
    fn test_patch_layout_overrides() {
        let mut config = ConfigFile::default();
        config.paths.root = PathBuf::from("/project");
        config.paths.master = Some(PathBuf::from("data/ru.geojson"));
        config.paths.wgs84_dir = Some(PathBuf::from("/tmp/converted"));

        let layout = config.patch_layout();

        assert_eq!(layout.master, PathBuf::from("/project/data/ru.geojson"));
        assert_eq!(
            layout.extra_dir,
            PathBuf::from("/project/backend/maps/ru/extra")
        );
        assert_eq!(layout.wgs84_dir, PathBuf::from("/tmp/converted"));
    }
}
