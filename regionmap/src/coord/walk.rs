//! Coordinate traversal.
//!
//! Two entry points cover the two ways region files get walked:
//!
//! - Typed traversal dispatches on the [`Geometry`] variant, so the nesting
//!   depth is known statically (Point 0, MultiPoint/LineString 1,
//!   Polygon/MultiLineString 2, MultiPolygon 3, GeometryCollection recurses).
//! - Raw traversal works on untyped JSON and descends through arrays until
//!   it finds one whose first two elements are numbers.
//!
//! Neither filters leaves. A position that is too short or non-finite is
//! still visited; aggregators decide what to skip.

use serde_json::Value;

use crate::geojson::{Geometry, Position};

/// Lazy depth-first iterator over every position of a geometry.
pub fn positions(geometry: &Geometry) -> Box<dyn Iterator<Item = &Position> + '_> {
    match geometry {
        Geometry::Point { coordinates, .. } => Box::new(std::iter::once(coordinates)),
        Geometry::MultiPoint { coordinates, .. } | Geometry::LineString { coordinates, .. } => {
            Box::new(coordinates.iter())
        }
        Geometry::MultiLineString { coordinates, .. } | Geometry::Polygon { coordinates, .. } => {
            Box::new(coordinates.iter().flatten())
        }
        Geometry::MultiPolygon { coordinates, .. } => {
            Box::new(coordinates.iter().flatten().flatten())
        }
        Geometry::GeometryCollection { geometries, .. } => {
            Box::new(geometries.iter().flat_map(positions))
        }
    }
}

/// Calls `f` for every position of `geometry`, in document order.
pub fn for_each_position<F>(geometry: &Geometry, mut f: F)
where
    F: FnMut(&Position),
{
    visit(geometry, &mut f);
}

fn visit<F: FnMut(&Position)>(geometry: &Geometry, f: &mut F) {
    match geometry {
        Geometry::Point { coordinates, .. } => f(coordinates),
        Geometry::MultiPoint { coordinates, .. } | Geometry::LineString { coordinates, .. } => {
            coordinates.iter().for_each(|p| f(p))
        }
        Geometry::MultiLineString { coordinates, .. } | Geometry::Polygon { coordinates, .. } => {
            coordinates.iter().flatten().for_each(|p| f(p))
        }
        Geometry::MultiPolygon { coordinates, .. } => {
            coordinates.iter().flatten().flatten().for_each(|p| f(p))
        }
        Geometry::GeometryCollection { geometries, .. } => {
            for child in geometries {
                visit(child, f);
            }
        }
    }
}

/// Builds a new geometry with every position replaced by `f(position)`.
///
/// The variant, nesting and foreign members are preserved exactly; the
/// input is untouched.
pub fn map_positions<F>(geometry: &Geometry, f: &F) -> Geometry
where
    F: Fn(&Position) -> Position,
{
    let line = |ps: &Vec<Position>| ps.iter().map(f).collect::<Vec<_>>();
    let rings = |rs: &Vec<Vec<Position>>| rs.iter().map(line).collect::<Vec<_>>();

    match geometry {
        Geometry::Point {
            coordinates,
            foreign,
        } => Geometry::Point {
            coordinates: f(coordinates),
            foreign: foreign.clone(),
        },
        Geometry::MultiPoint {
            coordinates,
            foreign,
        } => Geometry::MultiPoint {
            coordinates: line(coordinates),
            foreign: foreign.clone(),
        },
        Geometry::LineString {
            coordinates,
            foreign,
        } => Geometry::LineString {
            coordinates: line(coordinates),
            foreign: foreign.clone(),
        },
        Geometry::MultiLineString {
            coordinates,
            foreign,
        } => Geometry::MultiLineString {
            coordinates: rings(coordinates),
            foreign: foreign.clone(),
        },
        Geometry::Polygon {
            coordinates,
            foreign,
        } => Geometry::Polygon {
            coordinates: rings(coordinates),
            foreign: foreign.clone(),
        },
        Geometry::MultiPolygon {
            coordinates,
            foreign,
        } => Geometry::MultiPolygon {
            coordinates: coordinates.iter().map(rings).collect(),
            foreign: foreign.clone(),
        },
        Geometry::GeometryCollection {
            geometries,
            foreign,
        } => Geometry::GeometryCollection {
            geometries: geometries.iter().map(|g| map_positions(g, f)).collect(),
            foreign: foreign.clone(),
        },
    }
}

/// Returns the `(x, y)` pair if `value` is a raw position leaf.
fn raw_leaf(value: &Value) -> Option<(f64, f64)> {
    let items = value.as_array()?;
    let x = items.first()?.as_f64()?;
    let y = items.get(1)?.as_f64()?;
    Some((x, y))
}

/// Calls `f(x, y)` for every raw position leaf under `value`.
///
/// `null`, scalars and empty arrays visit nothing.
pub fn for_each_raw_position<F>(value: &Value, mut f: F)
where
    F: FnMut(f64, f64),
{
    visit_raw(value, &mut f);
}

fn visit_raw<F: FnMut(f64, f64)>(value: &Value, f: &mut F) {
    if let Some((x, y)) = raw_leaf(value) {
        f(x, y);
        return;
    }
    if let Value::Array(items) = value {
        for item in items {
            visit_raw(item, f);
        }
    }
}

/// Builds a new JSON tree with every raw position leaf rewritten.
///
/// `f` maps `(x, y)` to the replacement pair; elements past index 1 are
/// kept as they were. Anything that is not an array is returned unchanged.
pub fn map_raw_positions<F>(value: &Value, f: &F) -> Value
where
    F: Fn(f64, f64) -> (f64, f64),
{
    if let Some((x, y)) = raw_leaf(value) {
        let (nx, ny) = f(x, y);
        let mut out = vec![json_number(nx), json_number(ny)];
        if let Some(items) = value.as_array() {
            out.extend(items.iter().skip(2).cloned());
        }
        return Value::Array(out);
    }
    match value {
        Value::Array(items) => Value::Array(items.iter().map(|v| map_raw_positions(v, f)).collect()),
        other => other.clone(),
    }
}

/// JSON has no NaN or infinity; those become `null`, as serde_json does.
fn json_number(v: f64) -> Value {
    serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number)
}
