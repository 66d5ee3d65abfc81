//! regionmap - GeoJSON tooling for the Russian regions map
//!
//! The library reads region files in WGS84 or Web-Mercator, brings them to
//! WGS84, repairs regions split by the antimeridian and splices replacement
//! regions into the master map file.
//!
//! ```ignore
//! use regionmap::config::ConfigFile;
//! use regionmap::patch::PatchPipeline;
//!
//! let config = ConfigFile::load()?;
//! let report = PatchPipeline::new(config.patch_layout(), config.patch_table().clone()).run()?;
//! println!("Backup saved to: {}", report.backup_path.display());
//! ```

pub mod antimeridian;
pub mod bbox;
pub mod classify;
pub mod config;
pub mod coord;
pub mod diagnostics;
pub mod geojson;
pub mod logging;
pub mod names;
pub mod patch;
pub mod reproject;

/// Version of the regionmap library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
