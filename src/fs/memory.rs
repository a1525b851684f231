//! In-memory accessor for tests and embedders

use super::FileSystem;
use crate::error::{FingerprintError, Operation};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum MemoryNode {
    File { content: String, mtime_millis: i64 },
    Directory { mtime_millis: i64 },
}

impl MemoryNode {
    fn mtime_millis(&self) -> i64 {
        match self {
            MemoryNode::File { mtime_millis, .. } | MemoryNode::Directory { mtime_millis } => {
                *mtime_millis
            }
        }
    }
}

/// Filesystem held entirely in memory
///
/// Paths are stored exactly as inserted; no normalization is applied.
/// Inserting a node does not create its parents. Listings return children in
/// name order.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    nodes: RwLock<BTreeMap<PathBuf, MemoryNode>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    pub fn insert_file(
        &self,
        path: impl Into<PathBuf>,
        content: impl Into<String>,
        mtime_millis: i64,
    ) {
        self.nodes.write().insert(
            path.into(),
            MemoryNode::File {
                content: content.into(),
                mtime_millis,
            },
        );
    }

    /// Add or replace a directory
    pub fn insert_dir(&self, path: impl Into<PathBuf>, mtime_millis: i64) {
        self.nodes
            .write()
            .insert(path.into(), MemoryNode::Directory { mtime_millis });
    }

    /// Change the modification time of an existing node
    ///
    /// Returns false if nothing exists at `path`.
    pub fn set_modified(&self, path: &Path, mtime_millis: i64) -> bool {
        match self.nodes.write().get_mut(path) {
            Some(MemoryNode::File {
                mtime_millis: current,
                ..
            })
            | Some(MemoryNode::Directory {
                mtime_millis: current,
            }) => {
                *current = mtime_millis;
                true
            }
            None => false,
        }
    }

    /// Replace a file's content while keeping its modification time
    ///
    /// Returns false if `path` is not a file.
    pub fn set_content(&self, path: &Path, content: impl Into<String>) -> bool {
        match self.nodes.write().get_mut(path) {
            Some(MemoryNode::File {
                content: current, ..
            }) => {
                *current = content.into();
                true
            }
            _ => false,
        }
    }

    /// Remove a node; children of a removed directory are left in place
    pub fn remove(&self, path: &Path) -> bool {
        self.nodes.write().remove(path).is_some()
    }

    fn not_found(path: &Path, operation: Operation) -> FingerprintError {
        FingerprintError::from_io(path, operation, io::Error::from(io::ErrorKind::NotFound))
    }
}

#[async_trait]
impl FileSystem for MemoryFileSystem {
    async fn read_content(&self, path: &Path) -> Result<String, FingerprintError> {
        match self.nodes.read().get(path) {
            Some(MemoryNode::File { content, .. }) => Ok(content.clone()),
            Some(MemoryNode::Directory { .. }) => Err(FingerprintError::from_io(
                path,
                Operation::ReadContent,
                io::Error::new(io::ErrorKind::Other, "is a directory"),
            )),
            None => Err(Self::not_found(path, Operation::ReadContent)),
        }
    }

    async fn modified_time(&self, path: &Path) -> Result<i64, FingerprintError> {
        self.nodes
            .read()
            .get(path)
            .map(MemoryNode::mtime_millis)
            .ok_or_else(|| Self::not_found(path, Operation::ReadModifiedTime))
    }

    async fn list_directory(&self, path: &Path) -> Result<Vec<OsString>, FingerprintError> {
        let nodes = self.nodes.read();
        match nodes.get(path) {
            Some(MemoryNode::Directory { .. }) => Ok(nodes
                .keys()
                .filter(|candidate| candidate.parent() == Some(path))
                .filter_map(|candidate| candidate.file_name().map(|name| name.to_os_string()))
                .collect()),
            Some(MemoryNode::File { .. }) => Err(FingerprintError::from_io(
                path,
                Operation::ListDirectory,
                io::Error::new(io::ErrorKind::Other, "not a directory"),
            )),
            None => Err(Self::not_found(path, Operation::ListDirectory)),
        }
    }
}
