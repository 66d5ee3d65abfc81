use std::fmt;

use crate::bbox::BoundingBox;
use crate::geojson::FeatureCollection;
use crate::names::resolve_name;

/// Label used for features without a resolvable name.
const UNNAMED: &str = "(no name)";

/// Expected extent of every region, in degrees.
///
/// The longitude bound runs past 180 so that regions unwrapped across the
/// antimeridian still pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLatLimits {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl Default for LonLatLimits {
    fn default() -> Self {
        Self {
            lon_min: 10.0,
            lon_max: 200.0,
            lat_min: 40.0,
            lat_max: 90.0,
        }
    }
}

impl LonLatLimits {
    /// True when any side of `bbox` lies outside the limits.
    pub fn exceeded_by(&self, bbox: &BoundingBox) -> bool {
        bbox.min_x < self.lon_min
            || bbox.max_x > self.lon_max
            || bbox.min_y < self.lat_min
            || bbox.max_y > self.lat_max
    }
}

/// A feature whose box falls outside the limits.
#[derive(Debug, Clone, PartialEq)]
pub struct OutOfLimits {
    pub name: String,
    pub bbox: BoundingBox,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LimitsReport {
    pub total: usize,
    pub out_of_limits: Vec<OutOfLimits>,
}

/// Lists every feature whose box leaves `limits`.
///
/// Features without a finite box are not flagged.
pub fn check_limits(collection: &FeatureCollection, limits: &LonLatLimits) -> LimitsReport {
    let out_of_limits = collection
        .features
        .iter()
        .filter_map(|feature| {
            let bbox = BoundingBox::of_feature(feature);
            (bbox.is_finite() && limits.exceeded_by(&bbox)).then(|| OutOfLimits {
                name: resolve_name(feature).unwrap_or_else(|| UNNAMED.to_string()),
                bbox,
            })
        })
        .collect();

    LimitsReport {
        total: collection.features.len(),
        out_of_limits,
    }
}

impl fmt::Display for OutOfLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.3}", self.name, self.bbox)
    }
}

impl fmt::Display for LimitsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Features: {}", self.total)?;
        writeln!(f, "Out of limits: {}", self.out_of_limits.len())?;
        for row in &self.out_of_limits {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collection(value: serde_json::Value) -> FeatureCollection {
        serde_json::from_value(value).unwrap()
    }

    fn rect(name: &str, lon: [f64; 2], lat: [f64; 2]) -> serde_json::Value {
        json!({
            "type": "Feature",
            "properties": { "name": name },
            "geometry": { "type": "Polygon", "coordinates": [[
                [lon[0], lat[0]], [lon[1], lat[0]], [lon[1], lat[1]], [lon[0], lat[1]], [lon[0], lat[0]]
            ]] }
        })
    }

    #[test]
    fn test_feature_above_latitude_limit_is_listed() {
        let fc = collection(json!({
            "type": "FeatureCollection",
            "features": [
                rect("Inside", [30.0, 40.0], [50.0, 60.0]),
                rect("Outside", [30.0, 40.0], [95.0, 100.0])
            ]
        }));

        let report = check_limits(&fc, &LonLatLimits::default());

        assert_eq!(report.total, 2);
        assert_eq!(report.out_of_limits.len(), 1);
        assert_eq!(
            report.out_of_limits[0].to_string(),
            "Outside: lon[30.000..40.000], lat[95.000..100.000]"
        );
        assert_eq!(
            report.to_string(),
            "Features: 2\nOut of limits: 1\nOutside: lon[30.000..40.000], lat[95.000..100.000]\n"
        );
    }

    #[test]
    fn test_unwrapped_chukotka_passes() {
        let fc = collection(json!({
            "type": "FeatureCollection",
            "features": [rect("Чукотский автономный округ", [160.0, 190.5], [62.0, 71.0])]
        }));
        assert!(check_limits(&fc, &LonLatLimits::default()).out_of_limits.is_empty());
    }

    #[test]
    fn test_unnamed_and_empty_features() {
        let fc = collection(json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": {},
                  "geometry": { "type": "Point", "coordinates": [-5.0, 45.0] } },
                { "type": "Feature", "properties": { "name": "Empty" }, "geometry": null }
            ]
        }));

        let report = check_limits(&fc, &LonLatLimits::default());

        assert_eq!(report.out_of_limits.len(), 1);
        assert_eq!(report.out_of_limits[0].name, "(no name)");
    }

    #[test]
    fn test_custom_limits() {
        let fc = collection(json!({
            "type": "FeatureCollection",
            "features": [rect("A", [30.0, 40.0], [50.0, 60.0])]
        }));
        let limits = LonLatLimits {
            lon_max: 35.0,
            ..LonLatLimits::default()
        };
        assert_eq!(check_limits(&fc, &limits).out_of_limits.len(), 1);
    }
}
