//! INI serialization logic for converting `ConfigFile` → INI string.

use std::fmt::Write as _;
use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let optional = |p: &Option<std::path::PathBuf>| {
        p.as_deref().map(path_to_string).unwrap_or_default()
    };

    let mut regions = String::new();
    for entry in config.regions.table.iter() {
        let _ = writeln!(regions, "{} = {}", entry.source_file, entry.target_name);
    }

    format!(
        r#"[paths]
; Project root. The default layout lives below it:
;   <root>/backend/maps/ru/regions.geojson   master file
;   <root>/backend/maps/ru/extra/            replacement sources
;   <root>/backend/maps/ru/extra_wgs84/      converted replacements
root = {}
; Optional overrides, relative to root unless absolute
master = {}
extra_dir = {}
wgs84_dir = {}

[regions]
; Replacement table, applied in order: <source file> = <target region name>
{}
[limits]
; Expected region extent in degrees. lon_max runs past 180 for regions
; unwrapped across the antimeridian.
lon_min = {}
lon_max = {}
lat_min = {}
lat_max = {}

[report]
; Rows printed by `regionmap widest`
top = {}

[logging]
; Log file, cleared at the start of every run
file = {}
"#,
        path_to_string(&config.paths.root),
        optional(&config.paths.master),
        optional(&config.paths.extra_dir),
        optional(&config.paths.wgs84_dir),
        regions,
        config.limits.lon_min,
        config.limits.lon_max,
        config.limits.lat_min,
        config.limits.lat_max,
        config.report.top,
        path_to_string(&config.logging.file),
    )
}

/// Convert path to string, collapsing the home directory to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::{PatchTable, RegionPatchSpec};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        let config = ConfigFile::default();

        config.save_to(&config_path).unwrap();
        let loaded = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_custom_values_are_written() {
        let mut config = ConfigFile::default();
        config.paths.master = Some(PathBuf::from("/data/regions.geojson"));
        config.regions.table = PatchTable::new(vec![RegionPatchSpec::new(
            "kherson.geojson",
            "Херсонская область",
        )]);
        config.limits.lon_max = 190.5;

        let text = to_config_string(&config);

        assert!(text.contains("master = /data/regions.geojson\n"));
        assert!(text.contains("kherson.geojson = Херсонская область\n"));
        assert!(!text.contains("crimea.geojson"));
        assert!(text.contains("lon_max = 190.5\n"));
    }
}
