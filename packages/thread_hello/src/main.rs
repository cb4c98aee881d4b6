#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for `thread_hello`.
//!
//! This module is excluded from mutation testing because its behavior is observable only as a
//! process: the integration tests cover it by running the compiled binary.

use std::env;
use std::io;
use std::process::ExitCode;

use thread_hello::{DEFAULT_PROGRAM_NAME, RunOutcome, run};
use tracing::debug;
use tracing_subscriber::EnvFilter;

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    init_tracing();

    // Arguments that are not valid Unicode cannot be integers, so a lossy conversion only ever
    // turns them into a rejected command line.
    let env_args = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>();

    let (program_name, args) = match env_args.split_first() {
        Some((program_name, args)) => (program_name.as_str(), args),
        None => (DEFAULT_PROGRAM_NAME, &[][..]),
    };

    let args = args.iter().map(String::as_str).collect::<Vec<_>>();

    match run(program_name, &args) {
        RunOutcome::Rejected(error) => debug!(%error, "exiting after usage text"),
        RunOutcome::Completed(report) => debug!(clean = report.is_clean(), "exiting after launch"),
        _ => {}
    }

    // There is no failure exit status, not even for a rejected command line.
    ExitCode::SUCCESS
}

/// Diagnostics are off unless `RUST_LOG` asks for them, so that standard error carries only the
/// program's own messages by default.
#[cfg_attr(test, mutants::skip)]
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
