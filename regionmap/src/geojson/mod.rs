//! GeoJSON document model and file handling.
//!
//! Documents are parsed in two steps: first as raw JSON, then dispatched on
//! the top-level `type` member into [`GeoJson`]. Structural problems are
//! reported as [`GeoJsonError::UnsupportedShape`] naming what was expected.

mod error;
mod io;
mod types;

pub use error::GeoJsonError;
pub use io::{absolute_path, read_document, read_value, write_pretty};
pub use types::{
    Feature, FeatureCollection, ForeignMembers, GeoJson, Geometry, Position, Properties,
};

use serde_json::Value;

impl GeoJson {
    /// Interpret raw JSON as a Geometry, Feature or FeatureCollection.
    pub fn from_value(value: Value) -> Result<Self, GeoJsonError> {
        let type_name = match value.get("type").and_then(Value::as_str) {
            Some(t) => t.to_string(),
            None => {
                return Err(GeoJsonError::UnsupportedShape(
                    "top-level object has no string `type` member".to_string(),
                ))
            }
        };

        match type_name.as_str() {
            "FeatureCollection" => {
                if !value.get("features").is_some_and(Value::is_array) {
                    return Err(GeoJsonError::UnsupportedShape(
                        "FeatureCollection has no `features` array".to_string(),
                    ));
                }
                Ok(GeoJson::FeatureCollection(serde_json::from_value(value)?))
            }
            "Feature" => Ok(GeoJson::Feature(serde_json::from_value(value)?)),
            "GeometryCollection" => {
                if value.get("geometries").is_none() {
                    return Err(GeoJsonError::UnsupportedShape(
                        "GeometryCollection has no `geometries`".to_string(),
                    ));
                }
                Ok(GeoJson::Geometry(serde_json::from_value(value)?))
            }
            t if Geometry::TYPE_NAMES.contains(&t) => {
                if value.get("coordinates").map_or(true, Value::is_null) {
                    return Err(GeoJsonError::UnsupportedShape(format!(
                        "{t} geometry has no `coordinates`"
                    )));
                }
                Ok(GeoJson::Geometry(serde_json::from_value(value)?))
            }
            other => Err(GeoJsonError::UnsupportedShape(format!(
                "unknown type `{other}`"
            ))),
        }
    }

    /// The top-level `type` tag of the document.
    pub fn type_name(&self) -> &'static str {
        match self {
            GeoJson::Geometry(g) => g.type_name(),
            GeoJson::Feature(_) => "Feature",
            GeoJson::FeatureCollection(_) => "FeatureCollection",
        }
    }

    /// Reduce the document to a single bare geometry.
    ///
    /// A Feature yields its geometry; a FeatureCollection yields the geometry
    /// of its first feature that has one.
    pub fn into_geometry(self) -> Result<Geometry, GeoJsonError> {
        match self {
            GeoJson::Geometry(g) => Ok(g),
            GeoJson::Feature(f) => f.geometry.ok_or(GeoJsonError::MissingGeometry("Feature")),
            GeoJson::FeatureCollection(fc) => fc
                .features
                .into_iter()
                .find_map(|f| f.geometry)
                .ok_or(GeoJsonError::MissingGeometry("FeatureCollection")),
        }
    }

    /// Like [`GeoJson::into_geometry`], but only Polygon and MultiPolygon
    /// geometries qualify.
    pub fn into_areal_geometry(self) -> Result<Geometry, GeoJsonError> {
        match self {
            GeoJson::Geometry(g) if g.is_areal() => Ok(g),
            GeoJson::Geometry(g) => Err(GeoJsonError::UnsupportedShape(format!(
                "expected Polygon or MultiPolygon, found {}",
                g.type_name()
            ))),
            GeoJson::Feature(f) => f
                .geometry
                .filter(Geometry::is_areal)
                .ok_or(GeoJsonError::MissingGeometry("Feature (Polygon/MultiPolygon)")),
            GeoJson::FeatureCollection(fc) => fc
                .features
                .into_iter()
                .filter_map(|f| f.geometry)
                .find(Geometry::is_areal)
                .ok_or(GeoJsonError::MissingGeometry(
                    "FeatureCollection (Polygon/MultiPolygon)",
                )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feature_collection_preserves_foreign_members() {
        let value = json!({
            "type": "FeatureCollection",
            "name": "regions",
            "features": [
                { "type": "Feature", "id": 7, "properties": { "name": "A" },
                  "geometry": { "type": "Point", "coordinates": [1.0, 2.0] } }
            ]
        });

        let doc = GeoJson::from_value(value).unwrap();
        let out = serde_json::to_value(&doc).unwrap();

        assert_eq!(out["name"], "regions");
        assert_eq!(out["features"][0]["id"], 7);
        assert_eq!(out["features"][0]["type"], "Feature");
        assert_eq!(out["features"][0]["geometry"]["type"], "Point");
    }

    #[test]
    fn test_geometry_members_survive_round_trip() {
        let value = json!({
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "Polygon",
                "bbox": [30, 50, 31, 51],
                "coordinates": [[[30, 50], [31, 50], [31, 51], [30, 50]]]
            }
        });

        let doc = GeoJson::from_value(value).unwrap();
        let GeoJson::Feature(feature) = &doc else {
            panic!("expected a feature");
        };
        let geometry = feature.geometry.as_ref().unwrap();
        assert_eq!(geometry.foreign()["bbox"], json!([30, 50, 31, 51]));

        let out = serde_json::to_value(&doc).unwrap();
        assert_eq!(out["geometry"]["bbox"], json!([30, 50, 31, 51]));
        assert_eq!(out["geometry"]["type"], "Polygon");
        assert!(out["geometry"].get("foreign").is_none());
    }

    #[test]
    fn test_null_ordinates_read_as_nan_and_write_as_null() {
        let value = json!({
            "type": "LineString",
            "coordinates": [[30.5, 50.0], [null, null]]
        });

        let doc = GeoJson::from_value(value).unwrap();
        let GeoJson::Geometry(Geometry::LineString { coordinates, .. }) = &doc else {
            panic!("expected a LineString");
        };
        assert_eq!(coordinates[0], vec![30.5, 50.0]);
        assert!(coordinates[1].iter().all(|v| v.is_nan()));

        let text = serde_json::to_string(&doc).unwrap();
        assert!(text.contains("[null,null]"));
    }

    #[test]
    fn test_geometry_without_coordinates_is_unsupported() {
        let err = GeoJson::from_value(json!({ "type": "Polygon" })).unwrap_err();
        assert!(matches!(err, GeoJsonError::UnsupportedShape(msg) if msg.contains("Polygon")));
    }

    #[test]
    fn test_unknown_type_is_unsupported() {
        let err = GeoJson::from_value(json!({ "type": "Topology" })).unwrap_err();
        assert!(matches!(err, GeoJsonError::UnsupportedShape(_)));
    }

    #[test]
    fn test_missing_type_is_unsupported() {
        let err = GeoJson::from_value(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, GeoJsonError::UnsupportedShape(_)));
    }

    #[test]
    fn test_into_geometry_picks_first_feature_with_geometry() {
        let doc = GeoJson::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": {}, "geometry": null },
                { "type": "Feature", "properties": {},
                  "geometry": { "type": "LineString", "coordinates": [[0, 0], [1, 1]] } }
            ]
        }))
        .unwrap();

        let geometry = doc.into_geometry().unwrap();
        assert_eq!(geometry.type_name(), "LineString");
    }

    #[test]
    fn test_into_geometry_empty_collection_fails() {
        let doc = GeoJson::from_value(json!({ "type": "FeatureCollection", "features": [] }))
            .unwrap();
        assert!(matches!(
            doc.into_geometry(),
            Err(GeoJsonError::MissingGeometry("FeatureCollection"))
        ));
    }

    #[test]
    fn test_into_areal_geometry_skips_points() {
        let doc = GeoJson::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": {},
                  "geometry": { "type": "Point", "coordinates": [0, 0] } },
                { "type": "Feature", "properties": {},
                  "geometry": { "type": "Polygon",
                                "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]] } }
            ]
        }))
        .unwrap();

        assert_eq!(doc.into_areal_geometry().unwrap().type_name(), "Polygon");
    }

    #[test]
    fn test_feature_null_properties_round_trip() {
        let doc = GeoJson::from_value(json!({
            "type": "Feature",
            "properties": null,
            "geometry": { "type": "Point", "coordinates": [1, 2] }
        }))
        .unwrap();

        let GeoJson::Feature(feature) = doc else {
            panic!("expected a feature");
        };
        assert!(feature.properties.is_none());
        assert_eq!(
            feature.geometry,
            Some(Geometry::point(vec![1.0, 2.0]))
        );
    }
}
