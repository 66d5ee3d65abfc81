use std::fmt;

use crate::bbox::BoundingBox;
use crate::geojson::FeatureCollection;
use crate::names::display_name;

/// Rows shown when no limit is configured.
pub const DEFAULT_TOP: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct WidthRow {
    pub name: String,
    pub bbox: BoundingBox,
}

impl WidthRow {
    pub fn width(&self) -> f64 {
        self.bbox.width()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidestReport {
    pub rows: Vec<WidthRow>,
}

/// The `top` features with the widest longitude extent, widest first.
///
/// Features without coordinates have an infinitely negative width and sort
/// last.
pub fn rank_widest(collection: &FeatureCollection, top: usize) -> WidestReport {
    let mut rows: Vec<WidthRow> = collection
        .features
        .iter()
        .map(|feature| WidthRow {
            name: display_name(feature, "???"),
            bbox: BoundingBox::of_feature(feature),
        })
        .collect();
    rows.sort_by(|a, b| b.width().total_cmp(&a.width()));
    rows.truncate(top);
    WidestReport { rows }
}

impl fmt::Display for WidestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, row) in self.rows.iter().enumerate() {
            writeln!(
                f,
                "{:>3}. {}: w={:.3}, h={:.3}, {:.3}",
                rank + 1,
                row.name,
                row.width(),
                row.bbox.height(),
                row.bbox
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line(name: serde_json::Value, lons: [f64; 2]) -> serde_json::Value {
        json!({
            "type": "Feature",
            "properties": name,
            "geometry": { "type": "LineString", "coordinates": [[lons[0], 50.0], [lons[1], 51.0]] }
        })
    }

    #[test]
    fn test_sorted_descending_and_truncated() {
        let fc: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                line(json!({ "name": "narrow" }), [30.0, 31.0]),
                line(json!({ "NAME": "wide" }), [-179.0, 179.0]),
                line(json!({ "region": "middle" }), [30.0, 60.0])
            ]
        }))
        .unwrap();

        let report = rank_widest(&fc, 2);

        let names: Vec<_> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["wide", "middle"]);
        assert_eq!(report.rows[0].width(), 358.0);
    }

    #[test]
    fn test_empty_features_sort_last_with_fallback_names() {
        let fc: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": {}, "geometry": null },
                { "type": "Feature", "id": "RU-X", "properties": {},
                  "geometry": { "type": "Point", "coordinates": [1.0, 1.0] } }
            ]
        }))
        .unwrap();

        let report = rank_widest(&fc, DEFAULT_TOP);

        assert_eq!(report.rows[0].name, "RU-X");
        assert_eq!(report.rows[1].name, "???");
        assert!(report.to_string().starts_with("  1. RU-X: w=0.000"));
    }
}
