//! Command-line entry point for the agent marketplace.
//!
//! Usage:
//!
//! ```text
//! agentmarket [--log-level LEVEL] [--log-format text|json] <command>
//! ```
//!
//! Every invocation starts from an empty in-memory catalog; `serve` keeps
//! that catalog alive behind the HTTP API until the process is signalled.

use agentmarket::cli::{self, Cli};
use agentmarket::telemetry::{self, TelemetryError};
use clap::Parser;
use std::io;
use std::process::ExitCode;

fn main() -> Result<ExitCode, TelemetryError> {
    let args = Cli::parse();
    telemetry::init_tracing(args.log_level, args.log_format)?;

    let marketplace = agentmarket::in_memory_marketplace();
    // Unlocked handles: `serve` runs for the process lifetime while tracing
    // writes to stderr from runtime worker threads.
    let outcome = cli::execute(
        args.command,
        &marketplace,
        &mut io::stdout(),
        &mut io::stderr(),
    )?;
    Ok(outcome.into())
}
