//! INI configuration for the region tools.
//!
//! # Example
//!
//! ```ignore
//! use regionmap::config::ConfigFile;
//! use regionmap::patch::PatchPipeline;
//!
//! let config = ConfigFile::load()?;
//! let pipeline = PatchPipeline::new(config.patch_layout(), config.patch_table().clone());
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_LOG_FILE, LOCAL_CONFIG_FILE};
pub use file::{config_directory, config_file_path, locate_config, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings, PathSettings, RegionSettings, ReportSettings};
