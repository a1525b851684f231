//! Data collection for files and direct directory children

use crate::error::FingerprintError;
use crate::fs::FileSystem;
use crate::types::{DirEntryRecord, FileRecord};
use futures::future::try_join_all;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Read content and modification time of every file
///
/// All reads are issued concurrently. The output is aligned with `paths`
/// regardless of completion order. The first failure aborts the whole
/// collection.
#[instrument(skip_all, fields(file_count = paths.len()))]
pub async fn collect_file_records<F>(
    fs: &F,
    paths: &[PathBuf],
) -> Result<Vec<FileRecord>, FingerprintError>
where
    F: FileSystem + ?Sized,
{
    let records = try_join_all(paths.iter().map(|path| read_file_record(fs, path))).await?;
    debug!(record_count = records.len(), "Collected file records");
    Ok(records)
}

async fn read_file_record<F>(fs: &F, path: &Path) -> Result<FileRecord, FingerprintError>
where
    F: FileSystem + ?Sized,
{
    let (content, mtime_millis) = tokio::try_join!(fs.read_content(path), fs.modified_time(path))?;
    Ok(FileRecord {
        content,
        mtime_millis,
    })
}

/// Record the direct children of every directory
///
/// Entries are grouped by directory in the order the directories were given;
/// within a directory they keep the order returned by the accessor's listing.
/// Any failed listing or stat aborts the whole collection.
#[instrument(skip_all, fields(directory_count = paths.len()))]
pub async fn collect_directory_records<F>(
    fs: &F,
    paths: &[PathBuf],
) -> Result<Vec<DirEntryRecord>, FingerprintError>
where
    F: FileSystem + ?Sized,
{
    let per_directory =
        try_join_all(paths.iter().map(|directory| read_directory_entries(fs, directory))).await?;

    let records: Vec<DirEntryRecord> = per_directory.into_iter().flatten().collect();
    debug!(record_count = records.len(), "Collected directory records");
    Ok(records)
}

async fn read_directory_entries<F>(
    fs: &F,
    directory: &Path,
) -> Result<Vec<DirEntryRecord>, FingerprintError>
where
    F: FileSystem + ?Sized,
{
    let children: Vec<PathBuf> = fs
        .list_directory(directory)
        .await?
        .into_iter()
        .map(|name| directory.join(name))
        .collect();

    try_join_all(children.into_iter().map(|path| async move {
        let mtime_millis = fs.modified_time(&path).await?;
        Ok::<_, FingerprintError>(DirEntryRecord { path, mtime_millis })
    }))
    .await
}
