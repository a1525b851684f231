//! CLI domain: parse, route, output and state file handling.
//! The fingerprint itself is computed by the library; this layer only supplies
//! configuration and decides what to print.

mod output;
mod parse;
mod route;
mod state;

pub use output::{map_error, EXIT_CHANGED, EXIT_ERROR, EXIT_OK};
pub use parse::{Cli, Commands};
pub use route::{CommandOutput, RunContext};
pub use state::{read_state, write_state, StateRecord};
