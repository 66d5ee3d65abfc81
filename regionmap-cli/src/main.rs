//! regionmap CLI - command-line tools for the regions map
//!
//! Report output goes to stdout; errors go to stderr with exit code 1.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use error::CliError;
use runner::{CliRunner, GlobalOptions};

#[derive(Parser)]
#[command(name = "regionmap", version = regionmap::VERSION)]
#[command(about = "Inspect, convert and patch GeoJSON region maps", long_about = None)]
struct Cli {
    /// Configuration file (default: ./regionmap.ini, then ~/.regionmap/config.ini)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Mirror log output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug logging (implies --verbose)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bounding box and X/Y range of a GeoJSON file
    Bbox {
        /// Geometry, Feature or FeatureCollection file
        input: PathBuf,
    },

    /// Convert a Web-Mercator GeoJSON file to WGS84
    Convert {
        input: PathBuf,
        output: PathBuf,
    },

    /// Replace the configured regions in the master file
    ///
    /// Removes stale copies, appends each replacement converted to WGS84,
    /// fixes antimeridian crossings and rewrites the master after a
    /// timestamped backup.
    Patch,

    /// Append configured regions missing from the master file, without conversion
    Merge,

    /// List features whose bounding box falls outside the configured limits
    Limits {
        /// FeatureCollection file (default: the master file)
        input: Option<PathBuf>,
    },

    /// Rank features by longitude extent
    Widest {
        /// FeatureCollection file (default: the master file)
        input: Option<PathBuf>,

        /// Number of rows to print
        #[arg(long)]
        top: Option<usize>,
    },

    /// Show geometry type, vertex count and bbox of one region
    Lookup {
        /// FeatureCollection file
        input: PathBuf,

        /// Region name; dashboard spellings are accepted
        name: String,
    },

    /// Write a Point at the bbox center of every district polygon
    Centers {
        input: PathBuf,
        output: PathBuf,
    },

    /// Shift a whole collection east of the antimeridian when it spans it
    Unwrap {
        input: PathBuf,
        output: PathBuf,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Bbox { .. } => "bbox",
            Commands::Convert { .. } => "convert",
            Commands::Patch => "patch",
            Commands::Merge => "merge",
            Commands::Limits { .. } => "limits",
            Commands::Widest { .. } => "widest",
            Commands::Lookup { .. } => "lookup",
            Commands::Centers { .. } => "centers",
            Commands::Unwrap { .. } => "unwrap",
            Commands::Config { .. } => "config",
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let options = GlobalOptions {
        config: cli.config,
        verbose: cli.verbose,
        debug: cli.debug,
    };

    if let Err(e) = run(cli.command, &options) {
        e.exit();
    }
}

fn run(command: Commands, options: &GlobalOptions) -> Result<(), CliError> {
    // Config commands must work even when the config file is broken.
    if let Commands::Config { command } = command {
        return commands::config::run(command, options.config.as_deref());
    }

    let runner = CliRunner::new(options)?;
    runner.log_startup(command.name());

    match command {
        Commands::Bbox { input } => commands::inspect::run_bbox(&input),
        Commands::Convert { input, output } => commands::transform::run_convert(&input, &output),
        Commands::Patch => commands::patch::run_patch(&runner),
        Commands::Merge => commands::patch::run_merge(&runner),
        Commands::Limits { input } => commands::inspect::run_limits(&runner, input),
        Commands::Widest { input, top } => commands::inspect::run_widest(&runner, input, top),
        Commands::Lookup { input, name } => commands::inspect::run_lookup(&input, &name),
        Commands::Centers { input, output } => commands::transform::run_centers(&input, &output),
        Commands::Unwrap { input, output } => commands::transform::run_unwrap(&input, &output),
        Commands::Config { .. } => Ok(()),
    }
}
