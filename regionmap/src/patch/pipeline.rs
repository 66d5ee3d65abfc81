//! Region patch pipeline.
//!
//! A run moves through [`PatchStage`]s in order and is all-or-nothing: every
//! replacement is loaded and converted before anything is written, so a bad
//! input leaves the master file, its backups and the side directory as they
//! were.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};

use super::backup::create_backup;
use super::{PatchError, PatchLayout, PatchTable, RegionPatchSpec};
use crate::antimeridian::normalize_features;
use crate::bbox::BoundingBox;
use crate::classify::{classify, CoordinateSystem};
use crate::geojson::{read_document, write_pretty, Feature, FeatureCollection, GeoJson, Geometry};
use crate::names::{region_properties, resolve_name};
use crate::reproject::reproject_geometry;

/// Pipeline stage of a run.
///
/// Runs progress through stages in order and are not resumable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PatchStage {
    /// Master collection read
    Loaded,
    /// Stale copies of the target regions removed
    Filtered,
    /// Converted replacements appended
    Extended,
    /// Per-feature antimeridian fix applied
    Normalized,
    /// Master copied to its timestamped backup
    BackedUp,
    /// Patched master written
    Persisted,
}

impl PatchStage {
    /// Returns the stage name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loaded => "loaded",
            Self::Filtered => "filtered",
            Self::Extended => "extended",
            Self::Normalized => "normalized",
            Self::BackedUp => "backed-up",
            Self::Persisted => "persisted",
        }
    }
}

impl fmt::Display for PatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A replacement geometry ready to be appended.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRegion {
    pub spec: RegionPatchSpec,
    /// Geometry in WGS84 degrees.
    pub geometry: Geometry,
    /// Coordinate system the source file was detected in.
    pub source_system: CoordinateSystem,
}

impl PreparedRegion {
    /// The feature appended to the master collection.
    pub fn to_feature(&self) -> Feature {
        Feature::new(
            region_properties(&self.spec.target_name),
            self.geometry.clone(),
        )
    }
}

/// Bounding box of one patched region in the written collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionExtent {
    pub name: String,
    /// `None` when no feature with that name was found.
    pub bbox: Option<BoundingBox>,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchReport {
    /// Target names appended, in table order.
    pub added: Vec<String>,
    /// Target names whose source needed reprojection.
    pub reprojected: Vec<String>,
    /// Stale features removed from the master.
    pub removed: usize,
    /// Features in the written collection.
    pub feature_count: usize,
    pub backup_path: PathBuf,
    pub extents: Vec<RegionExtent>,
}

/// Loads the master file; it must be a FeatureCollection.
pub fn load_master(path: &Path) -> Result<FeatureCollection, PatchError> {
    match read_document(path).map_err(PatchError::Master)? {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        other => Err(PatchError::NotFeatureCollection {
            path: path.to_path_buf(),
            found: other.type_name(),
        }),
    }
}

/// Drops every feature whose resolved name is a target of `table`.
///
/// Returns the filtered collection and the number of removed features.
pub fn remove_targets(
    collection: &FeatureCollection,
    table: &PatchTable,
) -> (FeatureCollection, usize) {
    let kept: Vec<Feature> = collection
        .features
        .iter()
        .filter(|f| !resolve_name(f).is_some_and(|name| table.targets(&name)))
        .cloned()
        .collect();
    let removed = collection.features.len() - kept.len();
    (collection.with_features(kept), removed)
}

/// Loads one replacement and brings it to WGS84.
///
/// Reprojection only runs when the geometry is not already WGS84.
pub fn prepare_region(
    layout: &PatchLayout,
    spec: &RegionPatchSpec,
) -> Result<PreparedRegion, PatchError> {
    let wrap = |source| PatchError::Replacement {
        file: spec.source_file.clone(),
        target: spec.target_name.clone(),
        source,
    };

    let geometry = read_document(&layout.source_path(spec))
        .and_then(GeoJson::into_geometry)
        .map_err(wrap)?;

    let source_system = classify(&geometry);
    let geometry = match source_system {
        CoordinateSystem::Wgs84 => geometry,
        CoordinateSystem::Projected => reproject_geometry(&geometry),
    };
    debug!(
        file = %spec.source_file,
        target = %spec.target_name,
        system = %source_system,
        "Prepared replacement region"
    );

    Ok(PreparedRegion {
        spec: spec.clone(),
        geometry,
        source_system,
    })
}

/// Splices replacement regions into a master collection.
#[derive(Debug, Clone)]
pub struct PatchPipeline {
    layout: PatchLayout,
    table: PatchTable,
}

impl PatchPipeline {
    pub fn new(layout: PatchLayout, table: PatchTable) -> Self {
        Self { layout, table }
    }

    pub fn layout(&self) -> &PatchLayout {
        &self.layout
    }

    pub fn table(&self) -> &PatchTable {
        &self.table
    }

    /// Runs the pipeline, naming the backup after the local time.
    pub fn run(&self) -> Result<PatchReport, PatchError> {
        self.run_at(Local::now().naive_local())
    }

    /// Runs the pipeline with an explicit backup timestamp.
    pub fn run_at(&self, at: NaiveDateTime) -> Result<PatchReport, PatchError> {
        let master_path = &self.layout.master;

        let master = load_master(master_path)?;
        info!(
            stage = %PatchStage::Loaded,
            path = %master_path.display(),
            features = master.features.len(),
            "Master collection loaded"
        );

        let (filtered, removed) = remove_targets(&master, &self.table);
        info!(stage = %PatchStage::Filtered, removed, "Stale regions removed");

        let prepared = self
            .table
            .iter()
            .map(|spec| prepare_region(&self.layout, spec))
            .collect::<Result<Vec<_>, _>>()?;

        let mut features = filtered.features.clone();
        features.extend(prepared.iter().map(PreparedRegion::to_feature));
        let extended = filtered.with_features(features);
        info!(
            stage = %PatchStage::Extended,
            added = prepared.len(),
            features = extended.features.len(),
            "Replacement regions appended"
        );

        let normalized = normalize_features(&extended);
        info!(stage = %PatchStage::Normalized, "Antimeridian normalization applied");

        self.write_converted(&prepared)?;

        let backup_path = create_backup(master_path, at)?;
        info!(stage = %PatchStage::BackedUp, backup = %backup_path.display());

        write_pretty(master_path, &normalized).map_err(PatchError::Write)?;
        info!(
            stage = %PatchStage::Persisted,
            path = %master_path.display(),
            "Master collection written"
        );

        let extents = self
            .table
            .iter()
            .map(|spec| region_extent(&normalized, &spec.target_name))
            .collect();

        Ok(PatchReport {
            added: prepared.iter().map(|p| p.spec.target_name.clone()).collect(),
            reprojected: prepared
                .iter()
                .filter(|p| p.source_system == CoordinateSystem::Projected)
                .map(|p| p.spec.target_name.clone())
                .collect(),
            removed,
            feature_count: normalized.features.len(),
            backup_path,
            extents,
        })
    }

    /// Writes each converted replacement as a standalone feature.
    fn write_converted(&self, prepared: &[PreparedRegion]) -> Result<(), PatchError> {
        let dir = &self.layout.wgs84_dir;
        fs::create_dir_all(dir).map_err(|source| {
            PatchError::SideOutput(crate::geojson::GeoJsonError::Io {
                path: dir.clone(),
                source,
            })
        })?;
        for region in prepared {
            let path = self.layout.converted_path(&region.spec);
            write_pretty(&path, &region.to_feature()).map_err(PatchError::SideOutput)?;
        }
        Ok(())
    }
}

fn region_extent(collection: &FeatureCollection, name: &str) -> RegionExtent {
    let feature = collection
        .features
        .iter()
        .find(|f| resolve_name(f).as_deref() == Some(name));
    if feature.is_none() {
        warn!(region = name, "Feature not found for bbox report");
    }
    RegionExtent {
        name: name.to_string(),
        bbox: feature.map(BoundingBox::of_feature),
    }
}
