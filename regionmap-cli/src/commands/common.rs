//! Helpers shared by the command handlers.

use std::path::{Path, PathBuf};

use regionmap::geojson::{read_document, FeatureCollection, GeoJson, GeoJsonError};

use crate::runner::CliRunner;

/// Load a file that must hold a FeatureCollection.
pub fn load_collection(path: &Path) -> Result<FeatureCollection, GeoJsonError> {
    match read_document(path)? {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        other => Err(GeoJsonError::UnsupportedShape(format!(
            "expected a FeatureCollection, found {}",
            other.type_name()
        ))),
    }
}

/// The given input, or the configured master file.
pub fn input_or_master(runner: &CliRunner, input: Option<PathBuf>) -> PathBuf {
    input.unwrap_or_else(|| runner.config().patch_layout().master)
}
