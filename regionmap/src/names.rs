//! Region name resolution.
//!
//! Region files from different sources store the region name under
//! different property keys. [`resolve_name`] checks them in a fixed order.

use serde_json::Value;

use crate::geojson::{Feature, Properties};

/// Property keys holding a region name, highest priority first.
pub const NAME_KEYS: [&str; 6] = ["name", "NAME", "name_ru", "region", "subject", "NAME_1"];

/// Keys written on features created by the patch pipeline.
pub const REGION_NAME_KEYS: [&str; 3] = ["name", "name_ru", "name:ru"];

/// Spellings used by the dashboard that differ from the map file.
const UI_TO_MAP: [(&str, &str); 6] = [
    (
        "Кабардино-Балкарская Республика",
        "Кабардино-Балкарская республика",
    ),
    (
        "Карачаево-Черкесская Республика",
        "Карачаево-Черкесская республика",
    ),
    ("Удмуртская Республика", "Удмуртская республика"),
    ("Чеченская Республика", "Чеченская республика"),
    (
        "Ханты-Мансийский автономный округ — Югра",
        "Ханты-Мансийский автономный округ - Югра",
    ),
    (
        "Республика Северная Осетия — Алания",
        "Северная Осетия - Алания",
    ),
];

/// Text form of a scalar property value. Empty strings, `false`, `null`
/// and containers do not count as a name.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// First non-empty name found under [`NAME_KEYS`].
pub fn resolve_name_in(properties: &Properties) -> Option<String> {
    NAME_KEYS
        .iter()
        .filter_map(|key| properties.get(*key))
        .find_map(scalar_text)
}

/// Resolved name of a feature, or `None` when it has no name-like property.
pub fn resolve_name(feature: &Feature) -> Option<String> {
    feature.properties.as_ref().and_then(resolve_name_in)
}

/// Label for reports: the resolved name, else the feature id, else `fallback`.
pub fn display_name(feature: &Feature, fallback: &str) -> String {
    resolve_name(feature)
        .or_else(|| feature.id.as_ref().and_then(scalar_text))
        .unwrap_or_else(|| fallback.to_string())
}

/// Maps a dashboard spelling to the spelling used in the map file.
///
/// Names without an alias are returned trimmed.
pub fn canonical_name(name: &str) -> &str {
    let name = name.trim();
    UI_TO_MAP
        .iter()
        .find(|(ui, _)| *ui == name)
        .map_or(name, |(_, map)| *map)
}

/// Properties for a newly created region feature.
pub fn region_properties(name: &str) -> Properties {
    REGION_NAME_KEYS
        .iter()
        .map(|key| (key.to_string(), Value::String(name.to_string())))
        .collect()
}
