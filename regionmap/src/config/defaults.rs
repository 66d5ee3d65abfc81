//! Default values and the `ConfigFile::default()` implementation.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::diagnostics::{LonLatLimits, DEFAULT_TOP};
use crate::patch::PatchTable;

/// Config file looked up in the working directory before the user config.
pub const LOCAL_CONFIG_FILE: &str = "regionmap.ini";

/// Log file name inside the config directory.
pub const DEFAULT_LOG_FILE: &str = "regionmap.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            paths: PathSettings {
                root: PathBuf::from("."),
                master: None,
                extra_dir: None,
                wgs84_dir: None,
            },
            regions: RegionSettings {
                table: PatchTable::default(),
            },
            limits: LonLatLimits::default(),
            report: ReportSettings { top: DEFAULT_TOP },
            logging: LoggingSettings {
                file: config_directory().join(DEFAULT_LOG_FILE),
            },
        }
    }
}
