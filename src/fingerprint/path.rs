//! Resolution of configured file and directory references against a root

use crate::error::{FingerprintError, Operation};
use std::path::{Path, PathBuf};

/// Resolve a single reference against `root`
///
/// Absolute references are returned unchanged; relative ones are joined onto
/// `root`. Resolution is purely syntactic: nothing is checked on disk.
pub fn resolve_path(root: &Path, reference: &str) -> PathBuf {
    let candidate = Path::new(reference);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        root.join(candidate)
    }
}

/// Resolve every reference against `root`, preserving order
pub fn resolve_paths<S: AsRef<str>>(root: &Path, references: &[S]) -> Vec<PathBuf> {
    references
        .iter()
        .map(|reference| resolve_path(root, reference.as_ref()))
        .collect()
}

/// Determine the absolute root directory
///
/// `None` means the current working directory. A relative root is taken
/// relative to the current working directory.
pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf, FingerprintError> {
    match root {
        Some(root) if root.is_absolute() => Ok(root.to_path_buf()),
        Some(root) => Ok(current_dir()?.join(root)),
        None => current_dir(),
    }
}

fn current_dir() -> Result<PathBuf, FingerprintError> {
    std::env::current_dir()
        .map_err(|e| FingerprintError::from_io(".", Operation::ResolveRoot, e))
}
