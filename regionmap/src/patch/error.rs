//! Error types for the patch pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::geojson::GeoJsonError;

/// Errors that abort a patch or merge run.
///
/// Every variant is raised before the master file is backed up or
/// rewritten, except [`PatchError::Backup`] and [`PatchError::Write`].
#[derive(Debug, Error)]
pub enum PatchError {
    /// Master file could not be loaded.
    #[error("Failed to load master file: {0}")]
    Master(#[source] GeoJsonError),

    /// Master file is valid GeoJSON but not a FeatureCollection.
    #[error("Master file is not a FeatureCollection (found {found}): {}", .path.display())]
    NotFeatureCollection { path: PathBuf, found: &'static str },

    /// A replacement file could not be loaded or interpreted.
    #[error("Replacement '{file}' for {target}: {source}")]
    Replacement {
        file: String,
        target: String,
        source: GeoJsonError,
    },

    /// Replacement directory is missing.
    #[error("Replacement directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// Failed to write a converted replacement to the side directory.
    #[error("Failed to write converted replacement: {0}")]
    SideOutput(#[source] GeoJsonError),

    /// Failed to copy the master file to its backup.
    #[error("Failed to back up {} to {}: {source}", .from.display(), .to.display())]
    Backup {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    /// Failed to write the patched master file.
    #[error("Failed to write master file: {0}")]
    Write(#[source] GeoJsonError),
}
