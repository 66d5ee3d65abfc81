//! Coordinate constants

/// Sphere radius used by Web Mercator (EPSG:3857), in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half the Web Mercator world width in meters (the easting of ±180°).
pub const MERCATOR_HALF_WORLD: f64 = EARTH_RADIUS * std::f64::consts::PI;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;
