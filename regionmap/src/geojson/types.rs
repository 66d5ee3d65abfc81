//! GeoJSON object model.
//!
//! Geometries are a tagged union over the seven GeoJSON geometry kinds, each
//! carrying a coordinate container nested to the depth its kind requires.
//! Geometries, features and collections keep their foreign members so that a
//! round trip through this model does not drop data the region tools do not
//! understand.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single coordinate: `[x, y]` or `[x, y, z, ...]`.
///
/// Index 0 is longitude (or Mercator easting), index 1 is latitude (or
/// Mercator northing). Extra dimensions are carried along untouched.
pub type Position = Vec<f64>;

/// Feature properties: string keys to arbitrary JSON values.
pub type Properties = Map<String, Value>;

/// Members of a geometry object other than `type` and its coordinates
/// (e.g. `bbox`).
pub type ForeignMembers = Map<String, Value>;

/// GeoJSON geometry.
///
/// A `null` ordinate reads as NaN and is written back as `null`, so leaves
/// produced from non-finite numbers survive a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        #[serde(deserialize_with = "leaf::position")]
        coordinates: Position,
        #[serde(flatten)]
        foreign: ForeignMembers,
    },
    MultiPoint {
        #[serde(deserialize_with = "leaf::line")]
        coordinates: Vec<Position>,
        #[serde(flatten)]
        foreign: ForeignMembers,
    },
    LineString {
        #[serde(deserialize_with = "leaf::line")]
        coordinates: Vec<Position>,
        #[serde(flatten)]
        foreign: ForeignMembers,
    },
    MultiLineString {
        #[serde(deserialize_with = "leaf::rings")]
        coordinates: Vec<Vec<Position>>,
        #[serde(flatten)]
        foreign: ForeignMembers,
    },
    Polygon {
        #[serde(deserialize_with = "leaf::rings")]
        coordinates: Vec<Vec<Position>>,
        #[serde(flatten)]
        foreign: ForeignMembers,
    },
    MultiPolygon {
        #[serde(deserialize_with = "leaf::polygons")]
        coordinates: Vec<Vec<Vec<Position>>>,
        #[serde(flatten)]
        foreign: ForeignMembers,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
        #[serde(flatten)]
        foreign: ForeignMembers,
    },
}

/// Deserializers for coordinate containers that accept `null` ordinates.
mod leaf {
    use serde::{Deserialize, Deserializer};

    use super::Position;

    #[derive(Deserialize)]
    #[serde(transparent)]
    struct Ordinate(Option<f64>);

    #[derive(Deserialize)]
    #[serde(transparent)]
    struct Leaf(Vec<Ordinate>);

    impl From<Leaf> for Position {
        fn from(leaf: Leaf) -> Self {
            leaf.0.into_iter().map(|o| o.0.unwrap_or(f64::NAN)).collect()
        }
    }

    fn collect(leaves: Vec<Leaf>) -> Vec<Position> {
        leaves.into_iter().map(Position::from).collect()
    }

    pub(super) fn position<'de, D: Deserializer<'de>>(d: D) -> Result<Position, D::Error> {
        Leaf::deserialize(d).map(Position::from)
    }

    pub(super) fn line<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Position>, D::Error> {
        Vec::<Leaf>::deserialize(d).map(collect)
    }

    pub(super) fn rings<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Vec<Position>>, D::Error> {
        Vec::<Vec<Leaf>>::deserialize(d).map(|rings| rings.into_iter().map(collect).collect())
    }

    pub(super) fn polygons<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Vec<Vec<Vec<Position>>>, D::Error> {
        Vec::<Vec<Vec<Leaf>>>::deserialize(d).map(|polygons| {
            polygons
                .into_iter()
                .map(|rings| rings.into_iter().map(collect).collect())
                .collect()
        })
    }
}

impl Geometry {
    pub fn point(coordinates: Position) -> Self {
        Geometry::Point {
            coordinates,
            foreign: ForeignMembers::new(),
        }
    }

    pub fn multi_point(coordinates: Vec<Position>) -> Self {
        Geometry::MultiPoint {
            coordinates,
            foreign: ForeignMembers::new(),
        }
    }

    pub fn line_string(coordinates: Vec<Position>) -> Self {
        Geometry::LineString {
            coordinates,
            foreign: ForeignMembers::new(),
        }
    }

    pub fn multi_line_string(coordinates: Vec<Vec<Position>>) -> Self {
        Geometry::MultiLineString {
            coordinates,
            foreign: ForeignMembers::new(),
        }
    }

    pub fn polygon(coordinates: Vec<Vec<Position>>) -> Self {
        Geometry::Polygon {
            coordinates,
            foreign: ForeignMembers::new(),
        }
    }

    pub fn multi_polygon(coordinates: Vec<Vec<Vec<Position>>>) -> Self {
        Geometry::MultiPolygon {
            coordinates,
            foreign: ForeignMembers::new(),
        }
    }

    pub fn collection(geometries: Vec<Geometry>) -> Self {
        Geometry::GeometryCollection {
            geometries,
            foreign: ForeignMembers::new(),
        }
    }

    /// Members of the geometry object other than `type` and its data.
    pub fn foreign(&self) -> &ForeignMembers {
        match self {
            Geometry::Point { foreign, .. }
            | Geometry::MultiPoint { foreign, .. }
            | Geometry::LineString { foreign, .. }
            | Geometry::MultiLineString { foreign, .. }
            | Geometry::Polygon { foreign, .. }
            | Geometry::MultiPolygon { foreign, .. }
            | Geometry::GeometryCollection { foreign, .. } => foreign,
        }
    }

    /// The GeoJSON `type` tag of this geometry.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::LineString { .. } => "LineString",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
            Geometry::GeometryCollection { .. } => "GeometryCollection",
        }
    }

    /// Returns true for Polygon and MultiPolygon.
    pub fn is_areal(&self) -> bool {
        matches!(self, Geometry::Polygon { .. } | Geometry::MultiPolygon { .. })
    }

    /// Every geometry `type` tag this model accepts.
    pub const TYPE_NAMES: [&'static str; 7] = [
        "Point",
        "MultiPoint",
        "LineString",
        "MultiLineString",
        "Polygon",
        "MultiPolygon",
        "GeometryCollection",
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureTag {
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureCollectionTag {
    FeatureCollection,
}

/// GeoJSON feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    tag: FeatureTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub properties: Option<Properties>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    /// Members other than the ones above (e.g. `bbox`).
    #[serde(flatten)]
    pub foreign: Map<String, Value>,
}

impl Feature {
    /// Creates a feature with the given properties and geometry.
    pub fn new(properties: Properties, geometry: Geometry) -> Self {
        Self {
            tag: FeatureTag::Feature,
            id: None,
            properties: Some(properties),
            geometry: Some(geometry),
            foreign: Map::new(),
        }
    }

    /// Returns a copy of this feature carrying a different geometry.
    pub fn with_geometry(&self, geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
            ..self.clone()
        }
    }
}

/// GeoJSON feature collection. Feature order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    tag: FeatureCollectionTag,
    #[serde(default)]
    pub features: Vec<Feature>,
    /// Members other than `type` and `features` (e.g. `name`, `crs`).
    #[serde(flatten)]
    pub foreign: Map<String, Value>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            tag: FeatureCollectionTag::FeatureCollection,
            features,
            foreign: Map::new(),
        }
    }

    /// Returns a copy of this collection with the features replaced.
    pub fn with_features(&self, features: Vec<Feature>) -> Self {
        Self {
            tag: self.tag,
            features,
            foreign: self.foreign.clone(),
        }
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Any top-level GeoJSON document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeoJson {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl From<Geometry> for GeoJson {
    fn from(geometry: Geometry) -> Self {
        GeoJson::Geometry(geometry)
    }
}

impl From<Feature> for GeoJson {
    fn from(feature: Feature) -> Self {
        GeoJson::Feature(feature)
    }
}

impl From<FeatureCollection> for GeoJson {
    fn from(collection: FeatureCollection) -> Self {
        GeoJson::FeatureCollection(collection)
    }
}
