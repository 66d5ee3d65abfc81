//! Read-only report commands: `bbox`, `limits`, `widest`, `lookup`.

use std::path::{Path, PathBuf};

use regionmap::diagnostics::{check_limits, inspect_bbox, lookup_region, rank_widest};
use regionmap::geojson::read_value;
use tracing::info;

use super::common::{input_or_master, load_collection};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Print the overall bounding box of any GeoJSON document.
pub fn run_bbox(input: &Path) -> Result<(), CliError> {
    let document = read_value(input)?;
    print!("{}", inspect_bbox(&document));
    Ok(())
}

/// List features outside the configured lon/lat limits.
pub fn run_limits(runner: &CliRunner, input: Option<PathBuf>) -> Result<(), CliError> {
    let path = input_or_master(runner, input);
    let collection = load_collection(&path)?;
    let report = check_limits(&collection, runner.config().limits());
    info!(
        path = %path.display(),
        total = report.total,
        out_of_limits = report.out_of_limits.len(),
        "Limits checked"
    );
    print!("{}", report);
    Ok(())
}

/// Rank features by longitude extent.
pub fn run_widest(
    runner: &CliRunner,
    input: Option<PathBuf>,
    top: Option<usize>,
) -> Result<(), CliError> {
    let path = input_or_master(runner, input);
    let collection = load_collection(&path)?;
    let top = top.unwrap_or(runner.config().report.top);
    print!("{}", rank_widest(&collection, top));
    Ok(())
}

/// Show the shape of one named region.
pub fn run_lookup(input: &Path, name: &str) -> Result<(), CliError> {
    let collection = load_collection(input)?;
    let lookup = lookup_region(&collection, name).ok_or_else(|| CliError::RegionNotFound {
        name: name.to_string(),
        path: input.to_path_buf(),
    })?;
    print!("{}", lookup);
    Ok(())
}
