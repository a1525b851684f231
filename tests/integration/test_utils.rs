//! Shared test utilities for integration tests
//!
//! Builds the on-disk fixture used across the suites: two small files and two
//! directories with a few direct children each.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// On-disk fixture; removed when dropped
pub struct Fixture {
    _temp_dir: TempDir,
    pub root: PathBuf,
    pub file1: PathBuf,
    pub file2: PathBuf,
    pub dir1: PathBuf,
    pub dir1a: PathBuf,
    pub dir1b: PathBuf,
    pub dir2: PathBuf,
    pub dir2a: PathBuf,
}

impl Fixture {
    /// Create:
    /// ```text
    /// files/file1.txt   "test1"
    /// files/file2.txt   "test2"
    /// dirs/dir1/{a,b}/
    /// dirs/dir2/a/
    /// ```
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();

        let file_root = root.join("files");
        let dir_root = root.join("dirs");
        fs::create_dir_all(&file_root).unwrap();

        let file1 = file_root.join("file1.txt");
        let file2 = file_root.join("file2.txt");
        fs::write(&file1, "test1").unwrap();
        fs::write(&file2, "test2").unwrap();

        let dir1 = dir_root.join("dir1");
        let dir1a = dir1.join("a");
        let dir1b = dir1.join("b");
        let dir2 = dir_root.join("dir2");
        let dir2a = dir2.join("a");
        for dir in [&dir1a, &dir1b, &dir2a] {
            fs::create_dir_all(dir).unwrap();
        }

        Self {
            _temp_dir: temp_dir,
            root,
            file1,
            file2,
            dir1,
            dir1a,
            dir1b,
            dir2,
            dir2a,
        }
    }
}

/// Modification time of `path` in epoch milliseconds, read with std
pub fn mtime_millis(path: &Path) -> i64 {
    let modified = fs::metadata(path).unwrap().modified().unwrap();
    DateTime::<Utc>::from(modified).timestamp_millis()
}

/// Set the modification time of a file to `millis` since the epoch
pub fn set_mtime_millis(path: &Path, millis: u64) {
    let mtime = SystemTime::UNIX_EPOCH + Duration::from_millis(millis);
    fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(mtime)
        .unwrap();
}
