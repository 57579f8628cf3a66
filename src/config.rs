//! Configuration System
//!
//! Layered configuration for digit map generation: built-in defaults, the
//! global config file, then workspace config files. Command-line flags are
//! applied on top by the CLI.

use crate::digitmap::{DEFAULT_BUFFER_SIZE, DEFAULT_MAX_DEPTH};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;

mod merge {
    pub mod merge_policy;
}

mod sources {
    pub mod global_file;
    pub mod workspace_file;
}

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DigitmapConfig {
    /// Traversal and output limits
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Where the dialplan is read from
    #[serde(default)]
    pub dialplan: DialplanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Generator limits and output options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Maximum number of contexts on one include path
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Size of the output buffer in bytes (device limit)
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// Wrap the printed map in `{ }`, as Grandstream devices expect
    #[serde(default)]
    pub braces: bool,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            buffer_size: default_buffer_size(),
            braces: false,
        }
    }
}

/// Dialplan source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialplanConfig {
    /// Path to an extensions.conf style file; relative paths resolve against the workspace
    #[serde(default = "default_dialplan_path")]
    pub path: PathBuf,
}

fn default_dialplan_path() -> PathBuf {
    PathBuf::from("extensions.conf")
}

impl Default for DialplanConfig {
    fn default() -> Self {
        Self {
            path: default_dialplan_path(),
        }
    }
}

impl DialplanConfig {
    pub fn resolve_path(&self, workspace_root: &Path) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            workspace_root.join(&self.path)
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Generator(String),
    Dialplan(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Generator(msg) => write!(f, "Generator: {}", msg),
            ValidationError::Dialplan(msg) => write!(f, "Dialplan: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_depth == 0 {
            return Err("max_depth must be at least 1".to_string());
        }
        // Room for the leading separator plus one character.
        if self.buffer_size < 2 {
            return Err("buffer_size must be at least 2 bytes".to_string());
        }
        Ok(())
    }
}

impl DigitmapConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.generator.validate() {
            errors.push(ValidationError::Generator(e));
        }
        if self.dialplan.path.as_os_str().is_empty() {
            errors.push(ValidationError::Dialplan("path cannot be empty".to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
