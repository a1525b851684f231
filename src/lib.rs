//! envhash: Environment Fingerprinting
//!
//! Computes a deterministic fingerprint of a set of files and directories so
//! that a build step can tell whether its environment changed since the last
//! run, without walking or hashing whole directory trees.
//!
//! ```no_run
//! use envhash::fingerprint::{compute_fingerprint, FingerprintConfig};
//!
//! # async fn run() -> Result<(), envhash::error::FingerprintError> {
//! let config = FingerprintConfig::default()
//!     .with_files(["Cargo.toml", "Cargo.lock"])
//!     .with_directories(["vendor"]);
//! let fingerprint = compute_fingerprint(&config).await?;
//! println!("{}", fingerprint);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod fs;
pub mod logging;
pub mod types;

pub use error::FingerprintError;
pub use fingerprint::hasher::fold_hash;
pub use fingerprint::{
    collect_directory_records, collect_file_records, compute_fingerprint, EnvHasher,
    FingerprintConfig,
};
pub use types::{DirEntryRecord, FileRecord, Fingerprint};
