//! Workspace config files: `config/config.toml`, then `config/{DIGITMAP_ENV}.toml`

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

const ENV_VAR: &str = "DIGITMAP_ENV";
const DEFAULT_ENV: &str = "development";

/// Workspace layers in ascending precedence.
pub fn layer_paths(workspace_root: &Path) -> [PathBuf; 2] {
    let config_dir = workspace_root.join("config");
    let env_name = std::env::var(ENV_VAR).unwrap_or_else(|_| DEFAULT_ENV.to_string());
    [
        config_dir.join("config.toml"),
        config_dir.join(format!("{}.toml", env_name)),
    ]
}

/// Layer the workspace files that exist onto `builder`.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for path in layer_paths(workspace_root) {
        if !path.exists() {
            continue;
        }
        debug!(config_path = %path.display(), "Layering workspace configuration");
        builder = builder.add_source(File::from(path.as_path()).required(false));
    }
    Ok(builder)
}
