//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::patch::{PatchTable, RegionPatchSpec};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [paths] section
    if let Some(section) = ini.section(Some("paths")) {
        if let Some(v) = non_empty(section.get("root")) {
            config.paths.root = expand_tilde(v);
        }
        if let Some(v) = non_empty(section.get("master")) {
            config.paths.master = Some(expand_tilde(v));
        }
        if let Some(v) = non_empty(section.get("extra_dir")) {
            config.paths.extra_dir = Some(expand_tilde(v));
        }
        if let Some(v) = non_empty(section.get("wgs84_dir")) {
            config.paths.wgs84_dir = Some(expand_tilde(v));
        }
    }

    // [regions] section, in file order
    if let Some(section) = ini.section(Some("regions")) {
        let mut entries = Vec::new();
        for (file, target) in section.iter() {
            let target = target.trim();
            if target.is_empty() {
                return Err(ConfigFileError::InvalidValue {
                    section: "regions".to_string(),
                    key: file.to_string(),
                    value: target.to_string(),
                    reason: "target region name must not be empty".to_string(),
                });
            }
            entries.push(RegionPatchSpec::new(file.trim(), target));
        }
        if entries.is_empty() {
            return Err(ConfigFileError::InvalidValue {
                section: "regions".to_string(),
                key: String::new(),
                value: String::new(),
                reason: "section must list at least one `file = region name` entry".to_string(),
            });
        }
        config.regions.table = PatchTable::new(entries);
    }

    // [limits] section
    if let Some(section) = ini.section(Some("limits")) {
        let limits = &mut config.limits;
        for (key, slot) in [
            ("lon_min", &mut limits.lon_min),
            ("lon_max", &mut limits.lon_max),
            ("lat_min", &mut limits.lat_min),
            ("lat_max", &mut limits.lat_max),
        ] {
            if let Some(v) = section.get(key) {
                *slot = parse_degrees("limits", key, v)?;
            }
        }
        if limits.lon_min > limits.lon_max || limits.lat_min > limits.lat_max {
            return Err(ConfigFileError::InvalidValue {
                section: "limits".to_string(),
                key: "lon_min/lat_min".to_string(),
                value: format!(
                    "lon {}..{}, lat {}..{}",
                    limits.lon_min, limits.lon_max, limits.lat_min, limits.lat_max
                ),
                reason: "minimum must not exceed maximum".to_string(),
            });
        }
    }

    // [report] section
    if let Some(section) = ini.section(Some("report")) {
        if let Some(v) = section.get("top") {
            config.report.top = v
                .trim()
                .parse()
                .ok()
                .filter(|top| *top > 0)
                .ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "report".to_string(),
                    key: "top".to_string(),
                    value: v.to_string(),
                    reason: "must be a positive integer".to_string(),
                })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = non_empty(section.get("file")) {
            config.logging.file = expand_tilde(v);
        }
    }

    Ok(config)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_degrees(section: &str, key: &str, value: &str) -> Result<f64, ConfigFileError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "must be a finite number of degrees".to_string(),
        })
}

/// Expand `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
