//! Global config file source: <user config dir>/envhash/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Path to global config file, if a home directory can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "envhash").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    global: Option<&Path>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(path) = global.filter(|path| path.exists()) {
        builder = builder.add_source(File::from(path).required(false));
    }
    Ok(builder)
}
