use serde_json::Value;

use crate::bbox::BoundingBox;
use crate::geojson::{Feature, FeatureCollection, Geometry, Properties};
use crate::names::scalar_text;

/// Prefix of every generated center name.
pub const CENTER_NAME_PREFIX: &str = "Центр: ";

const DISTRICT_ID_KEYS: [&str; 3] = ["id", "osm_id", "name"];
const DISTRICT_NAME_KEYS: [&str; 2] = ["name", "name:ru"];

fn first_text(properties: Option<&Properties>, keys: &[&str]) -> Option<String> {
    let properties = properties?;
    keys.iter()
        .filter_map(|key| properties.get(*key))
        .find_map(scalar_text)
}

/// One Point feature at the bbox center of every district polygon.
///
/// Features that are not Polygon or MultiPolygon, or have no finite
/// coordinates, are skipped.
pub fn district_centers(districts: &FeatureCollection) -> FeatureCollection {
    let features = districts
        .features
        .iter()
        .filter_map(|feature| {
            let geometry = feature.geometry.as_ref().filter(|g| g.is_areal())?;
            let (lon, lat) = BoundingBox::of_geometry(geometry).center()?;

            let props = feature.properties.as_ref();
            let district_id =
                first_text(props, &DISTRICT_ID_KEYS).unwrap_or_else(|| "unknown".to_string());
            let name = first_text(props, &DISTRICT_NAME_KEYS).unwrap_or_else(|| "Район".to_string());

            let mut properties = Properties::new();
            properties.insert(
                "name".to_string(),
                Value::String(format!("{CENTER_NAME_PREFIX}{name}")),
            );
            properties.insert("district_id".to_string(), Value::String(district_id));
            properties.insert("is_center".to_string(), Value::Bool(true));

            Some(Feature::new(
                properties,
                Geometry::point(vec![lon, lat]),
            ))
        })
        .collect();

    FeatureCollection::new(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_centers_of_district_polygons() {
        let districts: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "name": "Верхотурский", "osm_id": 77 },
                  "geometry": { "type": "Polygon", "coordinates": [[
                      [60.0, 58.0], [62.0, 58.0], [62.0, 59.0], [60.0, 58.0]
                  ]] } },
                { "type": "Feature", "properties": {},
                  "geometry": { "type": "MultiPolygon", "coordinates": [[[
                      [10.0, 20.0], [12.0, 24.0], [10.0, 20.0]
                  ]]] } },
                { "type": "Feature", "properties": { "name": "Точка" },
                  "geometry": { "type": "Point", "coordinates": [1.0, 1.0] } },
                { "type": "Feature", "properties": { "name": "Пусто" }, "geometry": null }
            ]
        }))
        .unwrap();

        let centers = district_centers(&districts);
        let out = serde_json::to_value(&centers).unwrap();

        assert_eq!(centers.features.len(), 2);
        assert_eq!(out["features"][0]["geometry"]["coordinates"], json!([61.0, 58.5]));
        assert_eq!(out["features"][0]["properties"]["name"], "Центр: Верхотурский");
        assert_eq!(out["features"][0]["properties"]["district_id"], "77");
        assert_eq!(out["features"][0]["properties"]["is_center"], true);
        assert_eq!(out["features"][1]["properties"]["name"], "Центр: Район");
        assert_eq!(out["features"][1]["properties"]["district_id"], "unknown");
    }
}
