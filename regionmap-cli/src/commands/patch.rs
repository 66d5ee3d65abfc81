//! Commands that modify the master file: `patch` and `merge`.

use regionmap::patch::{merge_into_master, PatchPipeline};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Replace the configured regions in the master file.
pub fn run_patch(runner: &CliRunner) -> Result<(), CliError> {
    let config = runner.config();
    let pipeline = PatchPipeline::new(config.patch_layout(), config.patch_table().clone());
    let report = pipeline.run()?;

    println!("Patched regions: {} added", report.added.len());
    for name in &report.added {
        println!("- {}", name);
    }
    println!("Backup saved to: {}", report.backup_path.display());

    for extent in &report.extents {
        match extent.bbox {
            Some(b) => println!(
                "[BBox] {}: minX={:.6}, maxX={:.6}, minY={:.6}, maxY={:.6}",
                extent.name, b.min_x, b.max_x, b.min_y, b.max_y
            ),
            None => println!("[WARN] Feature not found for bbox: {}", extent.name),
        }
    }
    Ok(())
}

/// Append configured regions that are missing from the master file.
pub fn run_merge(runner: &CliRunner) -> Result<(), CliError> {
    let config = runner.config();
    let report = merge_into_master(&config.patch_layout(), config.patch_table())?;

    println!("Regions before: {}", report.before);
    println!("Regions after:  {}", report.after);
    if report.changed() {
        println!("Added regions:");
        for name in &report.added {
            println!("- {}", name);
        }
    } else {
        println!("No regions added (all already present).");
    }
    Ok(())
}
