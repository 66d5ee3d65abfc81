//! Coordinate traversal and conversion module
//!
//! Provides recursive walks over GeoJSON coordinate trees and conversions
//! between spherical Web Mercator meters (EPSG:3857) and WGS84 degrees.

mod types;
mod walk;

pub use types::{EARTH_RADIUS, MAX_LAT, MAX_LON, MERCATOR_HALF_WORLD, MIN_LAT, MIN_LON};
pub use walk::{
    for_each_position, for_each_raw_position, map_positions, map_raw_positions, positions,
};

use std::f64::consts::PI;

/// Converts a Web Mercator easting (meters) to longitude in degrees.
#[inline]
pub fn mercator_to_lon(x: f64) -> f64 {
    (x / EARTH_RADIUS) * (180.0 / PI)
}

/// Converts a Web Mercator northing (meters) to latitude in degrees.
///
/// Uses the spherical inverse `2·atan(exp(y/R)) − π/2`.
#[inline]
pub fn mercator_to_lat(y: f64) -> f64 {
    (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0) * (180.0 / PI)
}

/// Converts a Web Mercator point to `(lon, lat)` degrees.
#[inline]
pub fn mercator_to_wgs84(x: f64, y: f64) -> (f64, f64) {
    (mercator_to_lon(x), mercator_to_lat(y))
}

/// Converts `(lon, lat)` degrees to a Web Mercator point in meters.
///
/// Latitudes at the poles map to infinite northings.
#[inline]
pub fn lonlat_to_mercator(lon: f64, lat: f64) -> (f64, f64) {
    let x = lon.to_radians() * EARTH_RADIUS;
    let y = (PI / 4.0 + lat.to_radians() / 2.0).tan().ln() * EARTH_RADIUS;
    (x, y)
}
