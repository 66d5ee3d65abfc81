//! File-to-file commands: `convert`, `unwrap`, `centers`.

use std::path::Path;

use regionmap::antimeridian::{longitude_span, normalize_collection, UNWRAP_SPAN_THRESHOLD};
use regionmap::diagnostics::district_centers;
use regionmap::geojson::{read_value, write_pretty};
use regionmap::reproject::convert_document;
use tracing::info;

use super::common::load_collection;
use crate::error::CliError;

/// Convert a Web-Mercator document to WGS84 unconditionally.
pub fn run_convert(input: &Path, output: &Path) -> Result<(), CliError> {
    let document = read_value(input)?;
    let converted = convert_document(&document)?;
    write_pretty(output, &converted)?;
    info!(from = %input.display(), to = %output.display(), "Converted to WGS84");
    println!("Converted: {} -> {}", input.display(), output.display());
    Ok(())
}

/// Apply the collection-level antimeridian policy to a file.
pub fn run_unwrap(input: &Path, output: &Path) -> Result<(), CliError> {
    let collection = load_collection(input)?;
    let span = longitude_span(&collection);
    let unwrapped = normalize_collection(&collection);
    write_pretty(output, &unwrapped)?;

    match span {
        Some((min, max)) if max - min >= UNWRAP_SPAN_THRESHOLD => {
            println!(
                "Unwrapped: lon[{:.3}..{:.3}] spans {:.3} degrees",
                min,
                max,
                max - min
            );
        }
        _ => println!("No antimeridian crossing, written unchanged"),
    }
    println!("Output: {}", output.display());
    Ok(())
}

/// Write a Point at the center of every district polygon.
pub fn run_centers(input: &Path, output: &Path) -> Result<(), CliError> {
    let districts = load_collection(input)?;
    let centers = district_centers(&districts);
    write_pretty(output, &centers)?;
    info!(
        districts = districts.features.len(),
        centers = centers.features.len(),
        "District centers written"
    );
    println!("Centers: {} -> {}", centers.features.len(), output.display());
    Ok(())
}
