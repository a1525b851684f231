//! State file: the last fingerprint recorded by `envhash check --update`.

use crate::error::ApiError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Contents of a state file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    pub fingerprint: String,
    pub computed_at: DateTime<Utc>,
}

impl StateRecord {
    pub fn new(fingerprint: String) -> Self {
        Self {
            fingerprint,
            computed_at: Utc::now(),
        }
    }
}

/// Read a state file; a missing file is `Ok(None)`
pub fn read_state(path: &Path) -> Result<Option<StateRecord>, ApiError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ApiError::StateError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_str(&raw).map(Some).map_err(|e| {
        ApiError::StateError(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write a state file, creating parent directories as needed
pub fn write_state(path: &Path, record: &StateRecord) -> Result<(), ApiError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ApiError::StateError(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let json = serde_json::to_string_pretty(record)
        .map_err(|e| ApiError::StateError(format!("Failed to serialize state: {}", e)))?;
    std::fs::write(path, json)
        .map_err(|e| ApiError::StateError(format!("Failed to write {}: {}", path.display(), e)))
}
