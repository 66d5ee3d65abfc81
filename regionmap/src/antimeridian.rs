//! Antimeridian (±180°) unwrapping.
//!
//! A region straddling the dateline has vertices near +180 and near −180,
//! so its box spans almost the whole globe. Shifting every negative
//! longitude by +360 makes it contiguous again (east of 180).
//!
//! Two policies exist and both are kept:
//!
//! - [`normalize_features`] decides per feature. The patch pipeline uses it
//!   so that only the regions that actually cross the line move.
//! - [`normalize_collection`] decides once from the longitude span of the
//!   whole collection and shifts every feature. Map rendering uses it so the
//!   country stays in one piece.

use crate::bbox::BoundingBox;
use crate::coord::{for_each_position, map_positions};
use crate::geojson::{Feature, FeatureCollection, Geometry, Position};

/// Minimum longitude span (degrees) treated as a dateline split.
pub const UNWRAP_SPAN_THRESHOLD: f64 = 300.0;

/// True when the box is finite and at least [`UNWRAP_SPAN_THRESHOLD`] wide.
pub fn needs_unwrap(bbox: &BoundingBox) -> bool {
    let width = bbox.width();
    width.is_finite() && width >= UNWRAP_SPAN_THRESHOLD
}

fn shift_position(position: &Position) -> Position {
    let mut out = position.clone();
    if let Some(lon) = out.first_mut() {
        if *lon < 0.0 {
            *lon += 360.0;
        }
    }
    out
}

/// Shifts every negative longitude by +360. Latitudes are untouched.
pub fn unwrap_geometry(geometry: &Geometry) -> Geometry {
    map_positions(geometry, &shift_position)
}

/// Unwraps one feature if its own box needs it; otherwise returns a copy.
pub fn normalize_feature(feature: &Feature) -> Feature {
    match &feature.geometry {
        Some(geometry) if needs_unwrap(&BoundingBox::of_geometry(geometry)) => {
            tracing::debug!(
                name = crate::names::resolve_name(feature).as_deref().unwrap_or("?"),
                "Unwrapping feature across the antimeridian"
            );
            feature.with_geometry(unwrap_geometry(geometry))
        }
        _ => feature.clone(),
    }
}

/// Feature-level policy: each feature is checked and fixed on its own.
pub fn normalize_features(collection: &FeatureCollection) -> FeatureCollection {
    collection.with_features(collection.features.iter().map(normalize_feature).collect())
}

/// Longitude span over every finite longitude in the collection.
///
/// Only the longitude has to be finite here; latitudes are not inspected.
/// Returns `None` when no finite longitude exists.
pub fn longitude_span(collection: &FeatureCollection) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for geometry in collection.features.iter().filter_map(|f| f.geometry.as_ref()) {
        for_each_position(geometry, |p| {
            if let Some(&lon) = p.first() {
                if lon.is_finite() {
                    min = min.min(lon);
                    max = max.max(lon);
                }
            }
        });
    }
    (min <= max).then_some((min, max))
}

/// Collection-level policy: one global decision for the whole collection.
pub fn normalize_collection(collection: &FeatureCollection) -> FeatureCollection {
    let triggered = longitude_span(collection)
        .is_some_and(|(min, max)| max - min >= UNWRAP_SPAN_THRESHOLD);
    if !triggered {
        return collection.clone();
    }

    let features = collection
        .features
        .iter()
        .map(|f| match &f.geometry {
            Some(g) => f.with_geometry(unwrap_geometry(g)),
            None => f.clone(),
        })
        .collect();
    collection.with_features(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(lons: &[f64], lat: f64) -> Geometry {
        Geometry::line_string(lons.iter().map(|&lon| vec![lon, lat]).collect())
    }

    fn feature(name: &str, geometry: Geometry) -> Feature {
        let mut props = serde_json::Map::new();
        props.insert("name".into(), name.into());
        Feature::new(props, geometry)
    }

    fn lons(geometry: &Geometry) -> Vec<f64> {
        let mut out = Vec::new();
        for_each_position(geometry, |p| out.push(p[0]));
        out
    }

    #[test]
    fn test_dateline_pair_is_unwrapped() {
        let f = feature("Чукотский автономный округ", line(&[179.9, -179.9], 66.0));
        let before = BoundingBox::of_feature(&f);
        assert!((before.width() - 359.8).abs() < 1e-9);

        let fixed = normalize_feature(&f);
        let g = fixed.geometry.as_ref().unwrap();
        let out = lons(g);
        assert_eq!(out[0], 179.9);
        assert!((out[1] - 180.1).abs() < 1e-9);
        assert!((BoundingBox::of_geometry(g).width() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_narrow_feature_is_untouched() {
        let f = feature("narrow", line(&[10.0, 50.0], 55.0));
        assert_eq!(normalize_feature(&f), f);
    }

    #[test]
    fn test_narrow_feature_with_negative_longitudes_is_untouched() {
        let f = feature("west", line(&[-10.0, 30.0], 55.0));
        assert_eq!(normalize_feature(&f), f);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let exactly = BoundingBox {
            min_x: -150.0,
            min_y: 0.0,
            max_x: 150.0,
            max_y: 1.0,
        };
        assert!(needs_unwrap(&exactly));
        assert!(!needs_unwrap(&BoundingBox { max_x: 149.9, ..exactly }));
        assert!(!needs_unwrap(&BoundingBox::empty()));
    }

    #[test]
    fn test_latitudes_never_change() {
        let g = Geometry::polygon(vec![vec![vec![-170.0, -45.0], vec![170.0, 45.0]]]);
        let Geometry::Polygon { coordinates, .. } = unwrap_geometry(&g) else {
            panic!("variant changed");
        };
        assert_eq!(coordinates[0][0], vec![190.0, -45.0]);
        assert_eq!(coordinates[0][1], vec![170.0, 45.0]);
    }

    #[test]
    fn test_feature_policy_only_moves_crossing_features() {
        let collection = FeatureCollection::new(vec![
            feature("crossing", line(&[179.0, -179.0], 65.0)),
            feature("west", line(&[-5.0, 5.0], 50.0)),
        ]);

        let out = normalize_features(&collection);

        assert_eq!(lons(out.features[0].geometry.as_ref().unwrap()), vec![179.0, 181.0]);
        assert_eq!(lons(out.features[1].geometry.as_ref().unwrap()), vec![-5.0, 5.0]);
    }

    #[test]
    fn test_collection_policy_moves_everything_on_global_span() {
        // No single feature is wide, but together they span 340 degrees.
        let collection = FeatureCollection::new(vec![
            feature("east", line(&[170.0, 179.0], 65.0)),
            feature("west", line(&[-170.0, -160.0], 65.0)),
        ]);

        assert_eq!(normalize_features(&collection), collection);

        let out = normalize_collection(&collection);
        assert_eq!(lons(out.features[0].geometry.as_ref().unwrap()), vec![170.0, 179.0]);
        assert_eq!(lons(out.features[1].geometry.as_ref().unwrap()), vec![190.0, 200.0]);
    }

    #[test]
    fn test_collection_policy_leaves_narrow_collection() {
        let collection = FeatureCollection::new(vec![feature("a", line(&[20.0, 60.0], 50.0))]);
        assert_eq!(normalize_collection(&collection), collection);
        assert_eq!(longitude_span(&collection), Some((20.0, 60.0)));
    }

    #[test]
    fn test_input_collection_is_not_mutated() {
        let collection = FeatureCollection::new(vec![feature("x", line(&[179.9, -179.9], 0.0))]);
        let snapshot = collection.clone();
        let _ = normalize_features(&collection);
        let _ = normalize_collection(&collection);
        assert_eq!(collection, snapshot);
    }
}
