//! Configuration System
//!
//! Layered configuration for the `envhash` binary: built-in defaults, a global
//! user file, a per-workspace `envhash.toml` and `ENVHASH__*` environment
//! variables. The fingerprint core itself only ever sees a
//! [`FingerprintConfig`] value.

use crate::fingerprint::FingerprintConfig;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvHashConfig {
    /// What to fingerprint
    #[serde(default)]
    pub fingerprint: FingerprintConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Fingerprint(String),
    Logging(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Fingerprint(msg) => write!(f, "Fingerprint: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl EnvHashConfig {
    /// Validate the entire configuration
    ///
    /// File and directory references are not checked here; a reference that
    /// does not resolve fails when the fingerprint is computed.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(root) = &self.fingerprint.root {
            if root.as_os_str().is_empty() {
                errors.push(ValidationError::Fingerprint(
                    "Root cannot be an empty path".to_string(),
                ));
            }
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
