//! Error types for environment fingerprinting.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filesystem operation that was attempted when a read failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ReadContent,
    ReadModifiedTime,
    ListDirectory,
    ResolveRoot,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ReadContent => "read content",
            Operation::ReadModifiedTime => "read modified time",
            Operation::ListDirectory => "list directory",
            Operation::ResolveRoot => "resolve root",
        };
        f.write_str(name)
    }
}

/// Fingerprint computation errors
///
/// Every variant carries the absolute path that failed and the operation
/// being attempted.
#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("{} - {operation}: no such file or directory", path.display())]
    NotFound { path: PathBuf, operation: Operation },

    #[error("{} - {operation}: permission denied", path.display())]
    PermissionDenied { path: PathBuf, operation: Operation },

    #[error("{} - {operation}: {source}", path.display())]
    Io {
        path: PathBuf,
        operation: Operation,
        #[source]
        source: io::Error,
    },
}

impl FingerprintError {
    /// Classify an I/O error raised while performing `operation` on `path`
    pub fn from_io(path: impl Into<PathBuf>, operation: Operation, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => FingerprintError::NotFound { path, operation },
            io::ErrorKind::PermissionDenied => {
                FingerprintError::PermissionDenied { path, operation }
            }
            _ => FingerprintError::Io {
                path,
                operation,
                source: err,
            },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FingerprintError::NotFound { path, .. }
            | FingerprintError::PermissionDenied { path, .. }
            | FingerprintError::Io { path, .. } => path,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            FingerprintError::NotFound { operation, .. }
            | FingerprintError::PermissionDenied { operation, .. }
            | FingerprintError::Io { operation, .. } => *operation,
        }
    }
}

/// Errors surfaced by the configuration, logging and CLI layers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("State file error: {0}")]
    StateError(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
