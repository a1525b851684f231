//! CLI parse: clap types for envhash. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// envhash - fingerprint a build environment
#[derive(Debug, Parser)]
#[command(name = "envhash")]
#[command(about = "Cheap, deterministic fingerprints of a build environment")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory that relative file and directory references resolve against
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// File to track (repeatable; replaces configured files)
    #[arg(long = "file", value_name = "PATH", global = true)]
    pub files: Vec<String>,

    /// Directory whose direct children are tracked (repeatable; replaces configured directories)
    #[arg(long = "dir", value_name = "PATH", global = true)]
    pub directories: Vec<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the environment fingerprint
    Hash {
        /// Print both sub-hashes and the fingerprint as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare the fingerprint with the one stored in a state file
    Check {
        /// JSON state file holding the last fingerprint
        #[arg(long)]
        state: PathBuf,
        /// Rewrite the state file when the fingerprint changed
        #[arg(long)]
        update: bool,
    },
    /// Print the effective configuration as JSON
    Config,
}
