//! CLI domain: parse, route, help, output, and presentation only.
//! No generation logic; the single route table dispatches to the digit map generator.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{exit_code, map_error};
pub use parse::{Cli, Commands, GenerateCommands};
pub use presentation::format_digitmap;
pub use route::RunContext;
