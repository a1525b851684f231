//! CLI route: run context and command dispatch.

use crate::cli::output::{EXIT_CHANGED, EXIT_OK};
use crate::cli::parse::{Cli, Commands};
use crate::cli::state::{read_state, write_state, StateRecord};
use crate::config::{ConfigLoader, EnvHashConfig};
use crate::error::ApiError;
use crate::fingerprint::EnvHasher;
use crate::types::Fingerprint;
use serde_json::json;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;
use tracing::{debug, info};

/// Result of a command: text for stdout and the process exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            exit_code: EXIT_OK,
        }
    }
}

/// Runtime context for CLI execution: effective configuration and the
/// fingerprint assembler.
pub struct RunContext {
    config: EnvHashConfig,
    hasher: EnvHasher,
}

impl RunContext {
    /// Build the effective configuration from config files, the environment
    /// and command-line overrides (highest priority).
    pub fn new(cli: &Cli) -> Result<Self, ApiError> {
        let workspace_root = match &cli.root {
            Some(root) => root.clone(),
            None => PathBuf::from("."),
        };

        let mut config = match &cli.config {
            Some(config_path) => ConfigLoader::load_from_file(config_path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };

        if let Some(root) = &cli.root {
            config.fingerprint.root = Some(root.clone());
        }
        if !cli.files.is_empty() {
            config.fingerprint.files = cli.files.clone();
        }
        if !cli.directories.is_empty() {
            config.fingerprint.directories = cli.directories.clone();
        }

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(Self {
            config,
            hasher: EnvHasher::new(),
        })
    }

    pub fn config(&self) -> &EnvHashConfig {
        &self.config
    }

    /// Execute a command, returning what to print and the exit code.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        debug!(?command, "Executing command");
        match command {
            Commands::Hash { json } => self.handle_hash(*json),
            Commands::Check { state, update } => self.handle_check(state, *update),
            Commands::Config => self.handle_config(),
        }
    }

    fn compute(&self) -> Result<Fingerprint, ApiError> {
        let rt = Runtime::new()
            .map_err(|e| ApiError::RuntimeError(format!("Failed to create runtime: {}", e)))?;
        let fingerprint = rt.block_on(self.hasher.compute_fingerprint(&self.config.fingerprint))?;
        Ok(fingerprint)
    }

    fn handle_hash(&self, as_json: bool) -> Result<CommandOutput, ApiError> {
        let fingerprint = self.compute()?;
        if !as_json {
            return Ok(CommandOutput::ok(fingerprint.to_string()));
        }

        let report = json!({
            "fingerprint": fingerprint.to_string(),
            "files": fingerprint.files,
            "directories": fingerprint.directories,
        });
        serde_json::to_string_pretty(&report)
            .map(CommandOutput::ok)
            .map_err(|e| ApiError::RuntimeError(format!("Failed to render JSON: {}", e)))
    }

    fn handle_check(&self, state_path: &Path, update: bool) -> Result<CommandOutput, ApiError> {
        let current = self.compute()?.to_string();
        let previous = read_state(state_path)?;

        if previous.as_ref().map(|record| record.fingerprint.as_str()) == Some(current.as_str()) {
            info!(state = %state_path.display(), "Environment unchanged");
            return Ok(CommandOutput::ok("unchanged".to_string()));
        }

        info!(
            state = %state_path.display(),
            previous = ?previous.as_ref().map(|record| record.fingerprint.as_str()),
            current = %current,
            "Environment changed"
        );
        if update {
            write_state(state_path, &StateRecord::new(current))?;
        }

        Ok(CommandOutput {
            text: "changed".to_string(),
            exit_code: EXIT_CHANGED,
        })
    }

    fn handle_config(&self) -> Result<CommandOutput, ApiError> {
        serde_json::to_string_pretty(&self.config)
            .map(CommandOutput::ok)
            .map_err(|e| ApiError::RuntimeError(format!("Failed to render JSON: {}", e)))
    }
}
