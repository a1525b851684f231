//! Core data types for environment fingerprinting

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// Content and modification time of one configured file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub content: String,
    pub mtime_millis: i64,
}

/// Absolute path and modification time of one direct child of a configured directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryRecord {
    pub path: PathBuf,
    pub mtime_millis: i64,
}

/// A `(key, value)` pair that can be folded into an incremental hash
///
/// A slice of `Hashable` items is the ordered sequence consumed by
/// [`fold_hash`](crate::fingerprint::hasher::fold_hash).
pub trait Hashable {
    fn hash_key(&self) -> Cow<'_, str>;
    fn hash_value(&self) -> String;
}

impl Hashable for FileRecord {
    fn hash_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.content)
    }

    fn hash_value(&self) -> String {
        self.mtime_millis.to_string()
    }
}

/// The key is the path decoded lossily, like file content. Child names that
/// differ only in invalid UTF-8 bytes produce the same key.
impl Hashable for DirEntryRecord {
    fn hash_key(&self) -> Cow<'_, str> {
        self.path.to_string_lossy()
    }

    fn hash_value(&self) -> String {
        self.mtime_millis.to_string()
    }
}

impl<K, V> Hashable for (K, V)
where
    K: AsRef<str>,
    V: fmt::Display,
{
    fn hash_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.0.as_ref())
    }

    fn hash_value(&self) -> String {
        self.1.to_string()
    }
}

/// Composite environment fingerprint
///
/// Renders as `<files>_<directories>`. A side with nothing to hash is the
/// empty string, so a configuration without files renders as `_<directories>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    pub files: String,
    pub directories: String,
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.files, self.directories)
    }
}
