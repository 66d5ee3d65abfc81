//! Coordinate system detection for region geometries.
//!
//! Replacement region files arrive either in WGS84 degrees or in Web
//! Mercator meters, with no CRS member to say which. The bounding box is
//! enough to tell them apart: Mercator northings for any populated area are
//! far outside ±90.

use std::fmt;

use crate::bbox::BoundingBox;
use crate::geojson::Geometry;

/// Longitude band accepted as WGS84. Wider than ±180 so that geometries
/// already unwrapped across the antimeridian still qualify.
pub const WGS84_LON_TOLERANCE: f64 = 200.0;

/// Latitude band accepted as WGS84.
pub const WGS84_LAT_LIMIT: f64 = 90.0;

/// Detected coordinate system of a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// Longitude/latitude degrees.
    Wgs84,
    /// Anything else; treated as Web Mercator meters.
    Projected,
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateSystem::Wgs84 => write!(f, "WGS84"),
            CoordinateSystem::Projected => write!(f, "projected"),
        }
    }
}

/// Classifies a bounding box.
///
/// An empty box (no finite positions) is [`CoordinateSystem::Projected`].
pub fn classify_bbox(bbox: &BoundingBox) -> CoordinateSystem {
    if !bbox.is_finite() {
        return CoordinateSystem::Projected;
    }
    let lon_ok = bbox.min_x >= -WGS84_LON_TOLERANCE && bbox.max_x <= WGS84_LON_TOLERANCE;
    let lat_ok = bbox.min_y >= -WGS84_LAT_LIMIT && bbox.max_y <= WGS84_LAT_LIMIT;
    if lon_ok && lat_ok {
        CoordinateSystem::Wgs84
    } else {
        CoordinateSystem::Projected
    }
}

pub fn classify(geometry: &Geometry) -> CoordinateSystem {
    classify_bbox(&BoundingBox::of_geometry(geometry))
}

pub fn is_likely_wgs84(geometry: &Geometry) -> bool {
    classify(geometry) == CoordinateSystem::Wgs84
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::lonlat_to_mercator;

    fn ring(points: &[(f64, f64)]) -> Geometry {
        Geometry::polygon(vec![points.iter().map(|&(x, y)| vec![x, y]).collect()])
    }

    #[test]
    fn test_degrees_are_wgs84() {
        let g = ring(&[(32.0, 45.0), (35.5, 47.6), (32.0, 45.0)]);
        assert_eq!(classify(&g), CoordinateSystem::Wgs84);
    }

    #[test]
    fn test_unwrapped_longitudes_up_to_200_are_wgs84() {
        let g = ring(&[(170.0, 65.0), (190.5, 70.0)]);
        assert!(is_likely_wgs84(&g));
    }

    #[test]
    fn test_mercator_meters_are_projected() {
        let (x1, y1) = lonlat_to_mercator(32.0, 45.0);
        let (x2, y2) = lonlat_to_mercator(35.5, 47.6);
        let g = ring(&[(x1, y1), (x2, y2)]);
        assert_eq!(classify(&g), CoordinateSystem::Projected);
    }

    #[test]
    fn test_latitude_out_of_band_is_projected() {
        let g = ring(&[(30.0, 95.0), (40.0, 100.0)]);
        assert!(!is_likely_wgs84(&g));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let g = ring(&[(-200.0, -90.0), (200.0, 90.0)]);
        assert!(is_likely_wgs84(&g));
        let g = ring(&[(-200.001, 0.0), (0.0, 0.0)]);
        assert!(!is_likely_wgs84(&g));
    }

    #[test]
    fn test_empty_geometry_is_projected() {
        let g = Geometry::multi_polygon(Vec::new());
        assert_eq!(classify(&g), CoordinateSystem::Projected);
    }
}
