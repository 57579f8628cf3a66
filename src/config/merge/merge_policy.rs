//! Merge rules: built-in defaults that every file source layers over.

use crate::digitmap::{DEFAULT_BUFFER_SIZE, DEFAULT_MAX_DEPTH};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("generator.max_depth", DEFAULT_MAX_DEPTH as i64)?
        .set_default("generator.buffer_size", DEFAULT_BUFFER_SIZE as i64)?
        .set_default("generator.braces", false)?
        .set_default("dialplan.path", "extensions.conf")
}
