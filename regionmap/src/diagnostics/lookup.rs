use std::fmt;

use crate::bbox::BoundingBox;
use crate::coord::positions;
use crate::geojson::{FeatureCollection, Position};
use crate::names::{canonical_name, resolve_name};

/// Number of leading vertices included in a lookup.
pub const LOOKUP_SAMPLE_POINTS: usize = 6;

/// Shape summary of one named region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionLookup {
    /// Name as it appears in the map file.
    pub name: String,
    /// Geometry type, `None` for a feature without geometry.
    pub geometry_type: Option<&'static str>,
    pub points: usize,
    pub bbox: BoundingBox,
    pub first_points: Vec<Position>,
}

/// Finds the first feature named `name`.
///
/// Dashboard spellings are mapped to map-file spellings before matching.
pub fn lookup_region(collection: &FeatureCollection, name: &str) -> Option<RegionLookup> {
    let wanted = canonical_name(name);
    let feature = collection
        .features
        .iter()
        .find(|f| resolve_name(f).as_deref() == Some(wanted))?;

    let geometry = feature.geometry.as_ref();
    let (points, first_points) = geometry.map_or((0, Vec::new()), |g| {
        let first = positions(g).take(LOOKUP_SAMPLE_POINTS).cloned().collect();
        (positions(g).count(), first)
    });

    Some(RegionLookup {
        name: wanted.to_string(),
        geometry_type: geometry.map(|g| g.type_name()),
        points,
        bbox: BoundingBox::of_feature(feature),
        first_points,
    })
}

impl fmt::Display for RegionLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name: {}", self.name)?;
        writeln!(f, "type: {}", self.geometry_type.unwrap_or("none"))?;
        writeln!(f, "points: {}", self.points)?;
        writeln!(f, "bbox: {:.6}", self.bbox)?;
        let sample = serde_json::to_string(&self.first_points).map_err(|_| fmt::Error)?;
        writeln!(f, "first points: {}", sample)
    }
}
