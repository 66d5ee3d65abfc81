//! Axis-aligned bounding boxes over GeoJSON coordinates.
//!
//! A box is folded from `+∞/−∞` sentinels, so a box that saw no finite
//! position stays at the sentinels and reports [`BoundingBox::is_empty`].
//! Callers must check [`BoundingBox::is_finite`] before using the bounds.

use std::fmt;

use serde_json::Value;

use crate::coord::{for_each_position, for_each_raw_position};
use crate::geojson::{Feature, FeatureCollection, GeoJson, Geometry, Position};

/// Bounding box in the units of the input coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoundingBox {
    /// The fold seed: infinite sentinels on every side.
    pub const fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Returns the box grown to include `(x, y)`.
    ///
    /// Non-finite pairs are ignored.
    #[must_use]
    pub fn include(self, x: f64, y: f64) -> Self {
        if !x.is_finite() || !y.is_finite() {
            return self;
        }
        Self {
            min_x: self.min_x.min(x),
            min_y: self.min_y.min(y),
            max_x: self.max_x.max(x),
            max_y: self.max_y.max(y),
        }
    }

    /// Returns the box grown to include a position's first two axes.
    ///
    /// Positions with fewer than two elements are ignored.
    #[must_use]
    pub fn include_position(self, position: &Position) -> Self {
        match position.as_slice() {
            [x, y, ..] => self.include(*x, *y),
            _ => self,
        }
    }

    /// Returns the smallest box containing both boxes.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn of_geometry(geometry: &Geometry) -> Self {
        let mut bbox = Self::empty();
        for_each_position(geometry, |p| bbox = bbox.include_position(p));
        bbox
    }

    /// Box of a feature's geometry; empty when the feature has none.
    pub fn of_feature(feature: &Feature) -> Self {
        feature
            .geometry
            .as_ref()
            .map_or_else(Self::empty, Self::of_geometry)
    }

    pub fn of_collection(collection: &FeatureCollection) -> Self {
        collection
            .features
            .iter()
            .map(Self::of_feature)
            .fold(Self::empty(), Self::union)
    }

    pub fn of_document(document: &GeoJson) -> Self {
        match document {
            GeoJson::Geometry(g) => Self::of_geometry(g),
            GeoJson::Feature(f) => Self::of_feature(f),
            GeoJson::FeatureCollection(fc) => Self::of_collection(fc),
        }
    }

    /// Box of an untyped JSON document.
    ///
    /// Dispatches on `type` the same way [`BoundingBox::of_document`] does
    /// but walks coordinates without interpreting their shape, so partially
    /// recognized files still produce a box.
    pub fn of_value(value: &Value) -> Self {
        let mut bbox = Self::empty();
        let mut mark = |x, y| bbox = bbox.include(x, y);
        match value.get("type").and_then(Value::as_str) {
            Some("FeatureCollection") => {
                if let Some(features) = value.get("features").and_then(Value::as_array) {
                    for geometry in features.iter().filter_map(|f| f.get("geometry")) {
                        visit_raw_geometry(geometry, &mut mark);
                    }
                }
            }
            Some("Feature") => {
                if let Some(geometry) = value.get("geometry") {
                    visit_raw_geometry(geometry, &mut mark);
                }
            }
            Some(_) => visit_raw_geometry(value, &mut mark),
            None => {}
        }
        bbox
    }

    /// True when no finite position has been included.
    pub fn is_empty(&self) -> bool {
        !self.is_finite()
    }

    /// True when all four bounds are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }

    /// `max_x − min_x`; `−∞` for an empty box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// `max_y − min_y`; `−∞` for an empty box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point, or `None` for an empty box.
    pub fn center(&self) -> Option<(f64, f64)> {
        self.is_finite().then(|| {
            (
                (self.min_x + self.max_x) / 2.0,
                (self.min_y + self.max_y) / 2.0,
            )
        })
    }
}

/// Walks `coordinates`, or the members of `geometries` for a collection.
fn visit_raw_geometry<F: FnMut(f64, f64)>(geometry: &Value, f: &mut F) {
    if let Some(children) = geometry.get("geometries").and_then(Value::as_array) {
        for child in children {
            visit_raw_geometry(child, f);
        }
    } else if let Some(coords) = geometry.get("coordinates") {
        for_each_raw_position(coords, &mut *f);
    }
}

impl fmt::Display for BoundingBox {
    /// Formats as `lon[min..max], lat[min..max]`, honoring the precision flag
    /// (three decimals by default).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(3);
        write!(
            f,
            "lon[{:.p$}..{:.p$}], lat[{:.p$}..{:.p$}]",
            self.min_x,
            self.max_x,
            self.min_y,
            self.max_y,
            p = p
        )
    }
}
