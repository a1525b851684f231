//! CLI output: exit codes and error mapping to a stable CLI surface.

use crate::error::ApiError;

/// Command succeeded; for `check`, the environment is unchanged.
pub const EXIT_OK: i32 = 0;

/// `check` found a different fingerprint (or no stored one).
pub const EXIT_CHANGED: i32 = 1;

/// Any error, including a failed filesystem read.
pub const EXIT_ERROR: i32 = 2;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    format!("envhash: {}", e)
}
