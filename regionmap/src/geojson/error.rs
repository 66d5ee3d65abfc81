//! Error types for reading and writing GeoJSON documents.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, interpreting or saving GeoJSON.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    /// Input file does not exist.
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Failed to read or write a file.
    #[error("I/O error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// Input is not valid JSON, or does not match the GeoJSON model.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Structure is valid JSON but not a GeoJSON shape we accept.
    #[error("Unsupported GeoJSON structure: {0}")]
    UnsupportedShape(String),

    /// A Feature or FeatureCollection carries no usable geometry.
    #[error("{0} has no geometry")]
    MissingGeometry(&'static str),
}
