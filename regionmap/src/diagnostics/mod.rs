//! Read-only reports over region files.
//!
//! Each reporter returns a plain report struct whose `Display` output is the
//! text printed by the command line tool.
//!
//! # Example
//!
//! ```ignore
//! use regionmap::diagnostics::{check_limits, LonLatLimits};
//!
//! let report = check_limits(&collection, &LonLatLimits::default());
//! print!("{}", report);
//! ```

mod centers;
mod inspect;
mod limits;
mod lookup;
mod widest;

pub use centers::{district_centers, CENTER_NAME_PREFIX};
pub use inspect::{inspect_bbox, BboxSummary};
pub use limits::{check_limits, LimitsReport, LonLatLimits, OutOfLimits};
pub use lookup::{lookup_region, RegionLookup, LOOKUP_SAMPLE_POINTS};
pub use widest::{rank_widest, WidestReport, WidthRow, DEFAULT_TOP};
