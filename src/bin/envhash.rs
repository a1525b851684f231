//! envhash CLI Binary
//!
//! Prints or checks the fingerprint of a build environment.

use clap::Parser;
use envhash::cli::{map_error, Cli, RunContext, EXIT_ERROR};
use envhash::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{debug, error, info};

fn main() {
    let cli = Cli::parse();

    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(EXIT_ERROR);
        }
    };

    let logging_config = build_logging_config(&cli, &context.config().logging);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(EXIT_ERROR);
    }

    info!("envhash starting");
    let fingerprint_config = &context.config().fingerprint;
    debug!(
        root = ?fingerprint_config.root,
        files = fingerprint_config.files.len(),
        directories = fingerprint_config.directories.len(),
        "Loaded configuration"
    );

    match context.execute(&cli.command) {
        Ok(output) => {
            info!(exit_code = output.exit_code, "Command completed");
            println!("{}", output.text);
            process::exit(output.exit_code);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(EXIT_ERROR);
        }
    }
}

/// Build logging configuration from the loaded config and CLI args
fn build_logging_config(cli: &Cli, configured: &LoggingConfig) -> LoggingConfig {
    // Without --verbose, logging is off
    if !cli.verbose {
        return LoggingConfig {
            level: "off".to_string(),
            ..LoggingConfig::default()
        };
    }

    let mut config = configured.clone();

    // CLI arguments have the highest priority
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
