//! CLI route: single route table and run context. Dispatches to the generator and presentation.

use crate::cli::parse::{Commands, GenerateCommands};
use crate::cli::presentation::format_digitmap;
use crate::config::{ConfigLoader, DigitmapConfig};
use crate::dialplan::{loader, Dialplan};
use crate::digitmap::MapGenerator;
use crate::error::{ApiError, GenerateError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: loaded configuration and dialplan.
pub struct RunContext {
    config: DigitmapConfig,
    dialplan: Dialplan,
}

impl RunContext {
    /// Create run context from workspace root, optional config path and optional
    /// dialplan override. Uses ConfigLoader only.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        dialplan_path: Option<PathBuf>,
    ) -> Result<Self, ApiError> {
        let mut config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        if let Some(path) = dialplan_path {
            config.dialplan.path = path;
        }

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        let path = config.dialplan.resolve_path(&workspace_root);
        let dialplan = Self::load_dialplan(&path)?;
        Ok(Self::from_parts(config, dialplan))
    }

    /// Build a run context around an already loaded dialplan.
    pub fn from_parts(config: DigitmapConfig, dialplan: Dialplan) -> Self {
        Self { config, dialplan }
    }

    fn load_dialplan(path: &Path) -> Result<Dialplan, ApiError> {
        debug!(path = %path.display(), "Loading dialplan");
        Ok(loader::load_file(path)?)
    }

    pub fn config(&self) -> &DigitmapConfig {
        &self.config
    }

    pub fn dialplan(&self) -> &Dialplan {
        &self.dialplan
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Generate { command } => self.handle_generate_command(command),
        }
    }

    fn handle_generate_command(&self, command: &GenerateCommands) -> Result<String, ApiError> {
        match command {
            GenerateCommands::Digitmap { context } => {
                let map = self.generate_digitmap(context)?;
                if map.is_empty() {
                    return Ok(String::new());
                }
                Ok(format_digitmap(&map, self.config.generator.braces))
            }
        }
    }

    fn generate_digitmap(&self, context: &str) -> Result<String, GenerateError> {
        let generator = MapGenerator::new(&self.dialplan)
            .with_max_depth(self.config.generator.max_depth);
        let map = generator.generate_string(context, self.config.generator.buffer_size)?;
        info!(context, bytes = map.len(), "Generated digit map");
        Ok(map)
    }
}
