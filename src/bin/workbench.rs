//! Workbench CLI Binary
//!
//! Command-line entry point for inspecting workspace snapshots and session
//! state.

use clap::Parser;
use std::process;
use workbench::config::WorkbenchConfig;
use workbench::logging::{init_logging, LoggingConfig};
use workbench::tooling::cli::{Cli, CliContext};

fn main() {
    let cli = Cli::parse();

    let config = match WorkbenchConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let logging = merge_logging_overrides(config.logging.clone(), &cli);
    if let Err(e) = init_logging(Some(&logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let context = match CliContext::new(cli.snapshot.clone(), &config) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("Error loading snapshot: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// CLI flags take precedence over the config file.
fn merge_logging_overrides(mut logging: LoggingConfig, cli: &Cli) -> LoggingConfig {
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        logging.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        logging.output = output.clone();
    }
    logging
}
