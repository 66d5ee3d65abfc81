//! Splicing replacement regions into the master map file.
//!
//! [`PatchPipeline`] removes stale copies of each target region, appends the
//! replacement converted to WGS84, normalizes antimeridian crossings and
//! rewrites the master after backing it up. [`merge_into_master`] is the
//! conservative variant that only appends regions that are missing.

mod backup;
mod error;
mod merge;
mod pipeline;
mod table;

pub use backup::{backup_path, create_backup, BACKUP_TIMESTAMP_FORMAT};
pub use error::PatchError;
pub use merge::{merge_into_master, merge_into_master_at, merge_missing, MergeReport};
pub use pipeline::{
    load_master, prepare_region, remove_targets, PatchPipeline, PatchReport, PatchStage,
    PreparedRegion, RegionExtent,
};
pub use table::{PatchLayout, PatchTable, RegionPatchSpec};
