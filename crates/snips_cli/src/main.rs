//! snips CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Template root not found
//! - 3: Manifest or metadata parse failure
//! - 4: Duplicate template id
//! - 5: IO error

use std::process::ExitCode;

use clap::Parser;
use snips_templates::{ErrorKind, TemplateError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const NOT_FOUND: u8 = 2;
    pub const PARSE_ERROR: u8 = 3;
    pub const CONFLICT: u8 = 4;
    pub const IO_ERROR: u8 = 5;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("snips={}", level).parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args),
        Commands::Show(args) => commands::show::execute(args),
        Commands::Check(args) => commands::check::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Map a failure to its exit code through the loader's error kind.
fn categorize_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<TemplateError>().map(TemplateError::kind) {
        Some(ErrorKind::NotFound) => ExitCodes::NOT_FOUND,
        Some(ErrorKind::Parse) => ExitCodes::PARSE_ERROR,
        Some(ErrorKind::Conflict) => ExitCodes::CONFLICT,
        Some(ErrorKind::Io) => ExitCodes::IO_ERROR,
        None => ExitCodes::GENERAL_ERROR,
    }
}
