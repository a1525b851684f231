//! Environment Fingerprinting
//!
//! Summarizes the state of a set of files and directories as one composite
//! hash string, cheap enough to recompute before every build. Files
//! contribute their content and modification time; directories contribute
//! the path and modification time of each direct child. Nothing is read
//! recursively.

pub mod collector;
pub mod hasher;
pub mod path;

use crate::error::FingerprintError;
use crate::fs::{FileSystem, LocalFileSystem};
use crate::types::{DirEntryRecord, FileRecord, Fingerprint};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Files tracked when none are configured
pub const DEFAULT_FILES: &[&str] = &["package.json"];

/// Directories tracked when none are configured
pub const DEFAULT_DIRECTORIES: &[&str] = &["node_modules"];

/// What to fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintConfig {
    /// Directory relative references are resolved against (defaults to the
    /// current working directory)
    ///
    /// A relative root is resolved against the process working directory,
    /// not against the directory of the configuration file that set it.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Files whose content and modification time are tracked
    #[serde(default = "default_files")]
    pub files: Vec<String>,

    /// Directories whose direct children are tracked
    #[serde(default = "default_directories")]
    pub directories: Vec<String>,
}

fn default_files() -> Vec<String> {
    DEFAULT_FILES.iter().map(|file| file.to_string()).collect()
}

fn default_directories() -> Vec<String> {
    DEFAULT_DIRECTORIES.iter().map(|dir| dir.to_string()).collect()
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            root: None,
            files: default_files(),
            directories: default_directories(),
        }
    }
}

impl FingerprintConfig {
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_directories<I, S>(mut self, directories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directories = directories.into_iter().map(Into::into).collect();
        self
    }
}

/// Fingerprint assembler over a filesystem accessor
#[derive(Debug, Default)]
pub struct EnvHasher<F: FileSystem = LocalFileSystem> {
    fs: F,
}

impl EnvHasher<LocalFileSystem> {
    /// Create an assembler reading the local filesystem
    pub fn new() -> Self {
        Self {
            fs: LocalFileSystem::new(),
        }
    }
}

impl<F: FileSystem> EnvHasher<F> {
    /// Create an assembler over a custom accessor
    pub fn with_filesystem(fs: F) -> Self {
        Self { fs }
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Collect `(content, mtime)` for each file, in input order
    pub async fn collect_file_records(
        &self,
        paths: &[PathBuf],
    ) -> Result<Vec<FileRecord>, FingerprintError> {
        collector::collect_file_records(&self.fs, paths).await
    }

    /// Collect `(path, mtime)` for each direct child of each directory
    pub async fn collect_directory_records(
        &self,
        paths: &[PathBuf],
    ) -> Result<Vec<DirEntryRecord>, FingerprintError> {
        collector::collect_directory_records(&self.fs, paths).await
    }

    /// Compute the environment fingerprint for `config`
    ///
    /// Files and directories are collected concurrently and hashed
    /// independently. If either side fails, the first failure observed is
    /// returned and no fingerprint is produced.
    #[instrument(skip_all, fields(root = ?config.root))]
    pub async fn compute_fingerprint(
        &self,
        config: &FingerprintConfig,
    ) -> Result<Fingerprint, FingerprintError> {
        let start = Instant::now();

        let root = path::resolve_root(config.root.as_deref())?;
        let files = path::resolve_paths(&root, &config.files);
        let directories = path::resolve_paths(&root, &config.directories);
        debug!(
            root = %root.display(),
            files = files.len(),
            directories = directories.len(),
            "Resolved fingerprint inputs"
        );

        let (file_records, directory_records) = tokio::try_join!(
            self.collect_file_records(&files),
            self.collect_directory_records(&directories)
        )?;

        let fingerprint = Fingerprint {
            files: hasher::fold_hash(&file_records),
            directories: hasher::fold_hash(&directory_records),
        };

        info!(
            fingerprint = %fingerprint,
            file_records = file_records.len(),
            directory_records = directory_records.len(),
            duration_ms = start.elapsed().as_millis(),
            "Computed environment fingerprint"
        );

        Ok(fingerprint)
    }
}

/// Compute the environment fingerprint for `config` on the local filesystem
pub async fn compute_fingerprint(
    config: &FingerprintConfig,
) -> Result<Fingerprint, FingerprintError> {
    EnvHasher::new().compute_fingerprint(config).await
}

/// Collect file records from the local filesystem
pub async fn collect_file_records(paths: &[PathBuf]) -> Result<Vec<FileRecord>, FingerprintError> {
    EnvHasher::new().collect_file_records(paths).await
}

/// Collect directory child records from the local filesystem
pub async fn collect_directory_records(
    paths: &[PathBuf],
) -> Result<Vec<DirEntryRecord>, FingerprintError> {
    EnvHasher::new().collect_directory_records(paths).await
}
