//! CLI help and command-name contract for logging.

use crate::cli::parse::{Commands, GenerateCommands};

/// Command name string for log records (e.g. "generate.digitmap").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Generate { command } => format!("generate.{}", generate_command_name(command)),
    }
}

pub fn generate_command_name(command: &GenerateCommands) -> &'static str {
    match command {
        GenerateCommands::Digitmap { .. } => "digitmap",
    }
}
