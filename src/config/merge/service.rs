//! MergeService: orchestrates sources, applies merge policy, deserializes to EnvHashConfig.

use crate::config::sources::{environment, global_file, workspace_file};
use crate::config::EnvHashConfig;
use config::ConfigError;
use config::File;
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from workspace and standard sources.
    /// Precedence: defaults (lowest) -> global file -> workspace file -> environment (highest).
    pub fn load(workspace_root: &Path) -> Result<EnvHashConfig, ConfigError> {
        let global = global_file::global_config_path();
        Self::load_with_global(global.as_deref(), workspace_root)
    }

    /// Same as [`MergeService::load`] with an explicit global config file location.
    pub fn load_with_global(
        global: Option<&Path>,
        workspace_root: &Path,
    ) -> Result<EnvHashConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, global)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder)?;

        builder.build()?.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<EnvHashConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path));
        let builder = environment::add_to_builder(builder)?;

        builder.build()?.try_deserialize()
    }
}
