use std::fmt;

use serde_json::Value;

use crate::bbox::BoundingBox;

/// Overall extent of a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BboxSummary {
    pub bbox: BoundingBox,
}

impl BboxSummary {
    pub fn range_x(&self) -> f64 {
        self.bbox.width()
    }

    pub fn range_y(&self) -> f64 {
        self.bbox.height()
    }
}

/// Bounding box of a raw Geometry, Feature or FeatureCollection document.
///
/// Coordinates are walked without interpreting their shape, so files the
/// typed model rejects can still be inspected.
pub fn inspect_bbox(document: &Value) -> BboxSummary {
    BboxSummary {
        bbox: BoundingBox::of_value(document),
    }
}

impl fmt::Display for BboxSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.bbox;
        writeln!(
            f,
            "BBox: {:.6}, {:.6}, {:.6}, {:.6}",
            b.min_x, b.min_y, b.max_x, b.max_y
        )?;
        writeln!(f, "Range X: {:.6}", self.range_x())?;
        writeln!(f, "Range Y: {:.6}", self.range_y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inspect_feature_collection() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": {},
                  "geometry": { "type": "Point", "coordinates": [30.5, 50.25] } },
                { "type": "Feature", "properties": {}, "geometry": null },
                { "type": "Feature", "properties": {},
                  "geometry": { "type": "LineString", "coordinates": [[32, 46], [33, 47]] } }
            ]
        });

        let summary = inspect_bbox(&doc);

        assert_eq!(
            summary.to_string(),
            "BBox: 30.500000, 46.000000, 33.000000, 50.250000\n\
             Range X: 2.500000\n\
             Range Y: 4.250000\n"
        );
    }

    #[test]
    fn test_inspect_bare_geometry() {
        let doc = json!({ "type": "MultiPoint", "coordinates": [[1, 2], [3, -4]] });
        let summary = inspect_bbox(&doc);
        assert_eq!(summary.range_x(), 2.0);
        assert_eq!(summary.range_y(), 6.0);
    }
}
