//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::diagnostics::LonLatLimits;
use crate::patch::PatchTable;

/// Complete configuration loaded from an INI file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Map file locations
    pub paths: PathSettings,
    /// Replacement table for the patch and merge commands
    pub regions: RegionSettings,
    /// Bounds used by the out-of-limits check
    pub limits: LonLatLimits,
    /// Report settings
    pub report: ReportSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Map file locations.
///
/// Unset entries fall back to the default layout below `root`; relative
/// entries are resolved against `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSettings {
    pub root: PathBuf,
    pub master: Option<PathBuf>,
    pub extra_dir: Option<PathBuf>,
    pub wgs84_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSettings {
    pub table: PatchTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    /// Rows printed by the widest-feature ranking
    pub top: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
