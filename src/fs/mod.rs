//! Filesystem Accessor
//!
//! The fingerprint core reads the filesystem exclusively through the
//! [`FileSystem`] trait: file content, modification time and one-level
//! directory listings. Implementations must be free of shared mutable state
//! so that any number of reads can be in flight at once.

mod local;
mod memory;

pub use local::LocalFileSystem;
pub use memory::MemoryFileSystem;

use crate::error::FingerprintError;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;

/// Read-only filesystem capability consumed by the data collector
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Read a file as UTF-8 text, replacing invalid sequences with U+FFFD
    async fn read_content(&self, path: &Path) -> Result<String, FingerprintError>;

    /// Modification time in milliseconds since the Unix epoch
    async fn modified_time(&self, path: &Path) -> Result<i64, FingerprintError>;

    /// Names of the direct children of a directory, files and subdirectories alike
    async fn list_directory(&self, path: &Path) -> Result<Vec<OsString>, FingerprintError>;
}

