//! Append-only merge of replacement regions.
//!
//! Unlike [`super::PatchPipeline`], a merge never replaces or converts: a
//! region already present in the master file is left alone, and a missing
//! one is appended with its source coordinates as they are.

use std::collections::HashSet;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use super::backup::create_backup;
use super::pipeline::load_master;
use super::{PatchError, PatchLayout, PatchTable};
use crate::geojson::{
    absolute_path, read_document, write_pretty, Feature, FeatureCollection, GeoJson, GeoJsonError,
};
use crate::names::{region_properties, resolve_name};

/// Outcome of a merge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MergeReport {
    /// Features before the merge.
    pub before: usize,
    /// Features after the merge.
    pub after: usize,
    /// Target names appended, in table order.
    pub added: Vec<String>,
    /// Target names already present in the master.
    pub skipped: Vec<String>,
}

impl MergeReport {
    pub fn changed(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Appends every table region missing from `master`.
///
/// Every source file must exist. Only the sources of missing regions are
/// parsed, and those must carry a Polygon or MultiPolygon.
pub fn merge_missing(
    master: &FeatureCollection,
    layout: &PatchLayout,
    table: &PatchTable,
) -> Result<(FeatureCollection, MergeReport), PatchError> {
    if !layout.extra_dir.is_dir() {
        return Err(PatchError::MissingDirectory(layout.extra_dir.clone()));
    }

    let mut present: HashSet<String> = master.features.iter().filter_map(resolve_name).collect();
    let mut features = master.features.clone();
    let mut report = MergeReport {
        before: master.features.len(),
        ..MergeReport::default()
    };

    for spec in table.iter() {
        let source_path = layout.source_path(spec);
        let replacement_error = |source| PatchError::Replacement {
            file: spec.source_file.clone(),
            target: spec.target_name.clone(),
            source,
        };

        if present.contains(&spec.target_name) {
            if !source_path.is_file() {
                return Err(replacement_error(GeoJsonError::NotFound {
                    path: absolute_path(&source_path),
                }));
            }
            debug!(region = %spec.target_name, "Region already present, skipping");
            report.skipped.push(spec.target_name.clone());
            continue;
        }

        let geometry = read_document(&source_path)
            .and_then(GeoJson::into_areal_geometry)
            .map_err(replacement_error)?;

        features.push(Feature::new(region_properties(&spec.target_name), geometry));
        present.insert(spec.target_name.clone());
        report.added.push(spec.target_name.clone());
    }

    report.after = features.len();
    Ok((master.with_features(features), report))
}

/// Loads the master, merges missing regions and writes it back.
///
/// The master is backed up first and left untouched when nothing was added.
pub fn merge_into_master(
    layout: &PatchLayout,
    table: &PatchTable,
) -> Result<MergeReport, PatchError> {
    merge_into_master_at(layout, table, Local::now().naive_local())
}

pub fn merge_into_master_at(
    layout: &PatchLayout,
    table: &PatchTable,
    at: NaiveDateTime,
) -> Result<MergeReport, PatchError> {
    let master = load_master(&layout.master)?;
    let (merged, report) = merge_missing(&master, layout, table)?;

    if report.changed() {
        create_backup(&layout.master, at)?;
        write_pretty(&layout.master, &merged).map_err(PatchError::Write)?;
    }
    info!(
        before = report.before,
        after = report.after,
        added = report.added.len(),
        "Merge finished"
    );
    Ok(report)
}
