//! Replacement tables and on-disk layout for region patching.

use std::path::{Path, PathBuf};

/// One replacement: which source file replaces which named region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPatchSpec {
    /// File name inside the replacement directory.
    pub source_file: String,
    /// Region name the replacement is stored under.
    pub target_name: String,
}

impl RegionPatchSpec {
    pub fn new(source_file: impl Into<String>, target_name: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            target_name: target_name.into(),
        }
    }
}

/// Ordered list of replacements. Order decides append order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchTable {
    entries: Vec<RegionPatchSpec>,
}

impl PatchTable {
    pub fn new(entries: Vec<RegionPatchSpec>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RegionPatchSpec] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionPatchSpec> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when `name` is the target of any entry.
    pub fn targets(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.target_name == name)
    }
}

impl Default for PatchTable {
    /// The five regions shipped as separate files.
    fn default() -> Self {
        Self::new(vec![
            RegionPatchSpec::new("crimea.geojson", "Республика Крым"),
            RegionPatchSpec::new("donetsk.geojson", "Донецкая Народная Республика"),
            RegionPatchSpec::new("luhansk.geojson", "Луганская Народная Республика"),
            RegionPatchSpec::new("kherson.geojson", "Херсонская область"),
            RegionPatchSpec::new("zaporizhzhia.geojson", "Запорожская область"),
        ])
    }
}

impl FromIterator<RegionPatchSpec> for PatchTable {
    fn from_iter<I: IntoIterator<Item = RegionPatchSpec>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Where the pipeline reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchLayout {
    /// Master FeatureCollection that gets patched in place.
    pub master: PathBuf,
    /// Directory holding the replacement source files.
    pub extra_dir: PathBuf,
    /// Directory receiving each converted replacement for inspection.
    pub wgs84_dir: PathBuf,
}

impl PatchLayout {
    /// Default layout below a project root.
    pub fn under_root(root: &Path) -> Self {
        let maps = root.join("backend").join("maps").join("ru");
        Self {
            master: maps.join("regions.geojson"),
            extra_dir: maps.join("extra"),
            wgs84_dir: maps.join("extra_wgs84"),
        }
    }

    pub fn source_path(&self, spec: &RegionPatchSpec) -> PathBuf {
        self.extra_dir.join(&spec.source_file)
    }

    pub fn converted_path(&self, spec: &RegionPatchSpec) -> PathBuf {
        self.wgs84_dir.join(&spec.source_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_order() {
        let table = PatchTable::default();
        let files: Vec<_> = table.iter().map(|e| e.source_file.as_str()).collect();
        assert_eq!(
            files,
            [
                "crimea.geojson",
                "donetsk.geojson",
                "luhansk.geojson",
                "kherson.geojson",
                "zaporizhzhia.geojson"
            ]
        );
        assert!(table.targets("Херсонская область"));
        assert!(!table.targets("Московская область"));
    }

    #[test]
    fn test_layout_paths() {
        let layout = PatchLayout::under_root(Path::new("/project"));
        let spec = RegionPatchSpec::new("kherson.geojson", "Херсонская область");

        assert_eq!(
            layout.master,
            PathBuf::from("/project/backend/maps/ru/regions.geojson")
        );
        assert_eq!(
            layout.source_path(&spec),
            PathBuf::from("/project/backend/maps/ru/extra/kherson.geojson")
        );
        assert_eq!(
            layout.converted_path(&spec),
            PathBuf::from("/project/backend/maps/ru/extra_wgs84/kherson.geojson")
        );
    }
}
