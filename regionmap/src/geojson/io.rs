//! File helpers for GeoJSON documents.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{GeoJson, GeoJsonError};

/// Resolve a path against the current directory for error reporting.
pub fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Read a file as raw JSON.
///
/// Fails with [`GeoJsonError::NotFound`] (carrying the absolute path) when
/// the file does not exist.
pub fn read_value(path: &Path) -> Result<Value, GeoJsonError> {
    if !path.exists() {
        return Err(GeoJsonError::NotFound {
            path: absolute_path(path),
        });
    }
    let text = fs::read_to_string(path).map_err(|source| GeoJsonError::Io {
        path: absolute_path(path),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "Read GeoJSON file");
    Ok(serde_json::from_str(&text)?)
}

/// Read and interpret a GeoJSON document.
pub fn read_document(path: &Path) -> Result<GeoJson, GeoJsonError> {
    GeoJson::from_value(read_value(path)?)
}

/// Serialize `value` as two-space indented JSON and write it to `path`.
pub fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), GeoJsonError> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text).map_err(|source| GeoJsonError::Io {
        path: absolute_path(path),
        source,
    })?;
    debug!(path = %path.display(), "Wrote GeoJSON file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geojson::Geometry;

    #[test]
    fn test_read_missing_file_reports_absolute_path() {
        let err = read_value(Path::new("definitely/not/here.geojson")).unwrap_err();
        match err {
            GeoJsonError::NotFound { path } => {
                assert!(path.is_absolute());
                assert!(path.ends_with("definitely/not/here.geojson"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_invalid_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.geojson");
        fs::write(&path, "{ \"type\": ").unwrap();

        assert!(matches!(read_value(&path), Err(GeoJsonError::Json(_))));
    }

    #[test]
    fn test_write_pretty_keeps_cyrillic_and_indents() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let value = serde_json::json!({ "name": "Республика Крым" });

        write_pretty(&path, &value).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Республика Крым"));
        assert!(text.contains("\n  \"name\""));
    }

    #[test]
    fn test_read_document_geometry() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("point.geojson");
        fs::write(&path, r#"{"type":"Point","coordinates":[30.5,50.25]}"#).unwrap();

        let doc = read_document(&path).unwrap();
        assert_eq!(
            doc,
            GeoJson::Geometry(Geometry::point(vec![30.5, 50.25]))
        );
    }
}
