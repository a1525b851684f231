//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::EnvHashConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file, `<workspace_root>/envhash.toml`
    /// and the environment.
    pub fn load(workspace_root: &Path) -> Result<EnvHashConfig, ConfigError> {
        MergeService::load(workspace_root)
    }

    /// Load configuration with an explicit global file location.
    pub fn load_with_global(
        global: Option<&Path>,
        workspace_root: &Path,
    ) -> Result<EnvHashConfig, ConfigError> {
        MergeService::load_with_global(global, workspace_root)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<EnvHashConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
