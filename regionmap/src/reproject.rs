//! Web Mercator → WGS84 reprojection over whole geometries and documents.
//!
//! Every transform here returns a new value. Positions keep their extra
//! dimensions; positions with fewer than two axes pass through unchanged.

use serde_json::Value;
use tracing::debug;

use crate::coord::{map_positions, map_raw_positions, mercator_to_wgs84};
use crate::geojson::{GeoJsonError, Geometry, Position};

fn reproject_position(position: &Position) -> Position {
    match position.as_slice() {
        [x, y, rest @ ..] => {
            let (lon, lat) = mercator_to_wgs84(*x, *y);
            let mut out = Vec::with_capacity(position.len());
            out.push(lon);
            out.push(lat);
            out.extend_from_slice(rest);
            out
        }
        _ => position.clone(),
    }
}

/// Converts every position of a Web Mercator geometry to WGS84 degrees.
pub fn reproject_geometry(geometry: &Geometry) -> Geometry {
    map_positions(geometry, &reproject_position)
}

/// Converts a raw JSON coordinate tree (or any JSON value) to WGS84.
///
/// Non-array values and arrays that are not positions are copied as-is.
pub fn reproject_value(coordinates: &Value) -> Value {
    map_raw_positions(coordinates, &mercator_to_wgs84)
}

fn reproject_geometry_value(geometry: &Value) -> Value {
    match geometry {
        Value::Object(members) => {
            let mut out = members.clone();
            if let Some(coords) = members.get("coordinates") {
                out.insert("coordinates".to_string(), reproject_value(coords));
            }
            if let Some(Value::Array(children)) = members.get("geometries") {
                out.insert(
                    "geometries".to_string(),
                    Value::Array(children.iter().map(reproject_geometry_value).collect()),
                );
            }
            Value::Object(out)
        }
        other => other.clone(),
    }
}

fn reproject_feature_value(feature: &Value) -> Value {
    let mut out = feature.clone();
    if let Some(members) = out.as_object_mut() {
        if let Some(geometry) = members.get("geometry") {
            let converted = reproject_geometry_value(geometry);
            members.insert("geometry".to_string(), converted);
        }
    }
    out
}

/// Converts a whole GeoJSON document from Web Mercator to WGS84.
///
/// Works on raw JSON so members this crate does not model survive. The
/// conversion is unconditional; callers that need the WGS84 gate use
/// [`crate::classify`].
pub fn convert_document(document: &Value) -> Result<Value, GeoJsonError> {
    let type_name = document.get("type").and_then(Value::as_str);
    let converted = match type_name {
        Some("FeatureCollection") => {
            let mut out = document.clone();
            if let Some(Value::Array(features)) = document.get("features") {
                let features = features.iter().map(reproject_feature_value).collect();
                if let Some(members) = out.as_object_mut() {
                    members.insert("features".to_string(), Value::Array(features));
                }
            }
            out
        }
        Some("Feature") => reproject_feature_value(document),
        Some(_)
            if document.get("coordinates").is_some()
                || document.get("geometries").is_some() =>
        {
            reproject_geometry_value(document)
        }
        _ => {
            return Err(GeoJsonError::UnsupportedShape(
                "expected a Geometry, Feature or FeatureCollection".to_string(),
            ))
        }
    };
    debug!(kind = type_name.unwrap_or("?"), "Converted document to WGS84");
    Ok(converted)
}
