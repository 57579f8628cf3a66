//! CLI parse: clap types for digitmap. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// digitmap CLI - device digit maps from dialplan contexts
#[derive(Parser)]
#[command(name = "digitmap")]
#[command(about = "Generate device digit maps from a dialplan")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (config/ and relative dialplan paths resolve here)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dialplan file (overrides dialplan.path from config)
    #[arg(long)]
    pub dialplan: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate artifacts from the dialplan
    Generate {
        #[command(subcommand)]
        command: GenerateCommands,
    },
}

#[derive(Subcommand)]
pub enum GenerateCommands {
    /// Generate the device digit map for a dialplan context
    Digitmap {
        /// Root context name
        context: String,
    },
}
