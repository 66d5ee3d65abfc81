//! Configuration management CLI commands.
//!
//! Provides `config path` and `config init`.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use regionmap::config::{config_file_path, locate_config, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file in effect
    Path,

    /// Write a configuration file with the default settings
    ///
    /// Writes to --config when given, otherwise ~/.regionmap/config.ini.
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands, explicit: Option<&Path>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(explicit),
        ConfigCommands::Init { force } => run_init(explicit, force),
    }
}

fn run_path(explicit: Option<&Path>) -> Result<(), CliError> {
    match locate_config(explicit) {
        Some(path) => {
            println!("{}", path.display());
            if !path.exists() {
                println!("(file does not exist)");
            }
        }
        None => {
            println!("{}", config_file_path().display());
            println!("(not created, built-in defaults apply)");
        }
    }
    Ok(())
}

fn run_init(explicit: Option<&Path>, force: bool) -> Result<(), CliError> {
    let path: PathBuf = explicit.map_or_else(config_file_path, Path::to_path_buf);
    if path.exists() && !force {
        return Err(CliError::ConfigExists(path));
    }
    ConfigFile::default().save_to(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
