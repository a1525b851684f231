//! Local disk accessor backed by `tokio::fs`

use super::FileSystem;
use crate::error::{FingerprintError, Operation};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::ffi::OsString;
use std::path::Path;
use tracing::trace;

/// Accessor for the local filesystem
///
/// Directory listings are sorted by name (byte order). The order in which the
/// operating system returns entries differs between platforms and
/// filesystems, and the fingerprint is order-sensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn read_content(&self, path: &Path) -> Result<String, FingerprintError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| FingerprintError::from_io(path, Operation::ReadContent, e))?;
        trace!(path = %path.display(), bytes = bytes.len(), "Read file content");

        Ok(match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }

    async fn modified_time(&self, path: &Path) -> Result<i64, FingerprintError> {
        let modified = tokio::fs::metadata(path)
            .await
            .and_then(|metadata| metadata.modified())
            .map_err(|e| FingerprintError::from_io(path, Operation::ReadModifiedTime, e))?;

        Ok(DateTime::<Utc>::from(modified).timestamp_millis())
    }

    async fn list_directory(&self, path: &Path) -> Result<Vec<OsString>, FingerprintError> {
        let to_error = |e| FingerprintError::from_io(path, Operation::ListDirectory, e);

        let mut read_dir = tokio::fs::read_dir(path).await.map_err(to_error)?;
        let mut names = Vec::new();
        while let Some(entry) = read_dir.next_entry().await.map_err(to_error)? {
            names.push(entry.file_name());
        }

        names.sort();
        trace!(path = %path.display(), entries = names.len(), "Listed directory");
        Ok(names)
    }
}
