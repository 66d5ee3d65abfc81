//! CLI runner for common setup.
//!
//! Loads the configuration and initializes logging once for every command
//! that works on map files.

use std::path::{Path, PathBuf};

use regionmap::config::ConfigFile;
use regionmap::logging::{init_logging, LogOptions, LoggingGuard};
use tracing::info;

use crate::error::CliError;

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub verbose: bool,
    pub debug: bool,
}

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    _logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
    /// File the configuration came from, if any
    config_source: Option<PathBuf>,
}

impl CliRunner {
    /// Load config and initialize logging.
    ///
    /// Log events go to the configured log file, and to stderr with
    /// `--verbose` or `--debug`. Stdout carries only report output.
    pub fn new(options: &GlobalOptions) -> Result<Self, CliError> {
        let (config, config_source) = ConfigFile::load_with(options.config.as_deref())?;

        let log_options = LogOptions::new(&config.logging.file)
            .with_console(options.verbose || options.debug)
            .with_debug(options.debug);
        let logging_guard =
            init_logging(&log_options).map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            _logging_guard: logging_guard,
            config,
            config_source,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub fn config_source(&self) -> Option<&Path> {
        self.config_source.as_deref()
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("regionmap v{}", regionmap::VERSION);
        match self.config_source() {
            Some(path) => info!(command, config = %path.display(), "Starting"),
            None => info!(command, "Starting with built-in defaults"),
        }
    }
}
