//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use regionmap::config::ConfigFileError;
use regionmap::geojson::GeoJsonError;
use regionmap::patch::PatchError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// Config file already exists and would be overwritten
    ConfigExists(PathBuf),
    /// Failed to read, interpret or write a GeoJSON file
    GeoJson(GeoJsonError),
    /// Patch or merge run aborted
    Patch(PatchError),
    /// Named region is not in the file
    RegionNotFound { name: String, path: PathBuf },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Patch(_) => {
                eprintln!();
                eprintln!("The master file was not modified.");
                eprintln!("Check the paths with: regionmap config path");
            }
            CliError::ConfigExists(_) => {
                eprintln!("Use --force to overwrite it.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::ConfigExists(path) => {
                write!(f, "Config file already exists: {}", path.display())
            }
            CliError::GeoJson(e) => write!(f, "{}", e),
            CliError::Patch(e) => write!(f, "Patch failed: {}", e),
            CliError::RegionNotFound { name, path } => {
                write!(f, "Region '{}' not found in {}", name, path.display())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::GeoJson(e) => Some(e),
            CliError::Patch(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<GeoJsonError> for CliError {
    fn from(e: GeoJsonError) -> Self {
        CliError::GeoJson(e)
    }
}

impl From<PatchError> for CliError {
    fn from(e: PatchError) -> Self {
        CliError::Patch(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CliError::RegionNotFound {
            name: "Атлантида".to_string(),
            path: PathBuf::from("regions.geojson"),
        };
        assert_eq!(
            err.to_string(),
            "Region 'Атлантида' not found in regions.geojson"
        );
    }

    #[test]
    fn test_missing_file_message_keeps_path() {
        let err: CliError = GeoJsonError::NotFound {
            path: PathBuf::from("/data/absent.geojson"),
        }
        .into();
        assert_eq!(err.to_string(), "File not found: /data/absent.geojson");
        assert!(std::error::Error::source(&err).is_some());
    }
}
