pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A lightweight error type for CLI commands
pub type CliError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// scenesheet - mixer scene file reports
#[derive(Parser)]
#[command(
    name = "scenesheet",
    about = "Print channel routing and patch tables from mixer scene files",
    version,
    long_about = r#"
scenesheet - mixer scene reports

Reads a console scene dump and prints channel names, stereo links,
dynamics/insert state and the physical input feeding every channel.

EXAMPLES:
  scenesheet report show.scn                # All tables
  scenesheet --format json report show.scn  # Same as JSON
  scenesheet tree show.scn                  # Parsed path tree
  scenesheet resolve show.scn 1 17 33       # Source of single channel ids
  scenesheet config profiles                # Known hardware profiles
"#
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, csv); defaults to the configured format
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Force a hardware profile instead of picking one from the version tag
    #[arg(long, global = true)]
    pub family: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print all report tables for a scene file
    Report {
        /// Scene file to read
        file: PathBuf,
    },

    /// Print the parsed path tree of a scene file
    Tree {
        /// Scene file to read
        file: PathBuf,
    },

    /// Show the physical input behind channel source ids
    Resolve {
        /// Scene file to read
        file: PathBuf,

        /// Source ids to resolve
        #[arg(required = true)]
        ids: Vec<u32>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show which config file is in use
    Path,

    /// Write a commented default config file
    Init {
        /// Where to write it (defaults to the user config directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// List hardware profiles and the version rules that select them
    Profiles,
}

pub use commands::*;
pub use output::*;
