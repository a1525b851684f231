//! Merge rules: defaults, override order, conflict handling.

use crate::fingerprint::{DEFAULT_DIRECTORIES, DEFAULT_FILES};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("fingerprint.files", DEFAULT_FILES.to_vec())?
        .set_default("fingerprint.directories", DEFAULT_DIRECTORIES.to_vec())?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
