#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Spawns a bounded number of worker threads that each print one greeting, greets from the
//! launching thread and then waits for every worker before returning.
//!
//! The binary is invoked as `thread_hello <worker_count>` where the worker count is between 1
//! and [`MAX_WORKERS`]. Each worker prints `Hello from thread <rank> of <worker_count>` and the
//! launching thread prints [`MAIN_GREETING`] once all workers have been started. The order of
//! the lines is up to the operating system scheduler.
//!
//! Any other command line gets the usage text on standard error. The process exits with status
//! 0 either way.
//!
//! The library exposes the same lifecycle through [`run()`], and the building blocks through
//! [`WorkerCount`] and [`Launcher`]:
//!
//! ```
//! use thread_hello::{Launcher, parse_worker_count};
//!
//! let worker_count = parse_worker_count("3")?;
//! let report = Launcher::new(worker_count).launch();
//!
//! assert_eq!(report.joined().len(), 3);
//! # Ok::<(), thread_hello::UsageError>(())
//! ```

mod config;
mod error;
mod launcher;
mod output;
mod pal;
mod report;
mod worker;

pub use config::*;
pub use error::*;
pub use launcher::*;
use output::write_stderr;
use pal::ConsoleFacade;
pub use report::*;
pub use worker::*;

use tracing::debug;

/// The result of a [`run()`].
#[derive(Debug)]
#[non_exhaustive]
pub enum RunOutcome {
    /// The command line was rejected and the usage text was written. No worker was started.
    Rejected(UsageError),

    /// Workers were started and all of the started ones have been waited for.
    Completed(LaunchReport),
}

/// Runs the program against the standard output and error of the process.
///
/// `args` excludes the program name, which is passed separately for the usage text. This
/// function does not touch process-global state such as `std::env::args()`, so it can be called
/// directly from tests.
pub fn run(program_name: &str, args: &[&str]) -> RunOutcome {
    run_with_console(program_name, args, ConsoleFacade::target())
}

fn run_with_console(program_name: &str, args: &[&str], console: ConsoleFacade) -> RunOutcome {
    match parse_args(args) {
        Ok(worker_count) => {
            debug!(%worker_count, "worker count accepted");
            RunOutcome::Completed(Launcher::with_console(worker_count, console).launch())
        }
        Err(error) => {
            debug!(%error, "command line rejected");

            for line in usage_text(program_name).lines() {
                write_stderr(&console, line);
            }

            RunOutcome::Rejected(error)
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::{Arc, Mutex};

    use testing::{ProgramOutput, assert_usage_text, with_watchdog};

    use super::*;
    use crate::pal::MockConsole;

    fn rejecting_console(stderr: &Arc<Mutex<Vec<String>>>) -> MockConsole {
        let mut console = MockConsole::new();
        console.expect_write_stdout_line().never();
        console.expect_write_stderr_line().returning({
            let stderr = Arc::clone(stderr);
            move |line: &str| {
                stderr.lock().unwrap().push(line.to_string());
                Ok(())
            }
        });
        console
    }

    #[test]
    fn valid_count_runs_every_worker() {
        with_watchdog(|| {
            let stdout = Arc::new(Mutex::new(Vec::new()));

            let mut console = MockConsole::new();
            console.expect_write_stdout_line().times(4).returning({
                let stdout = Arc::clone(&stdout);
                move |line: &str| {
                    stdout.lock().unwrap().push(line.to_string());
                    Ok(())
                }
            });
            console.expect_write_stderr_line().never();

            let outcome = run_with_console("thread_hello", &["3"], ConsoleFacade::from_mock(console));

            let RunOutcome::Completed(report) = outcome else {
                panic!("expected a completed run, got {outcome:?}");
            };
            assert!(report.is_clean());
            assert_eq!(report.worker_count().get(), 3);

            let output = ProgramOutput::from_lines(stdout.lock().unwrap().iter());
            output.assert_complete_run(3);
        });
    }

    #[test]
    fn invalid_command_lines_print_usage_only() {
        let cases: [&[&str]; 7] = [
            &[],
            &["0"],
            &["65"],
            &["-1"],
            &["abc"],
            &["3", "4"],
            &["--help"],
        ];

        for args in cases {
            let stderr = Arc::new(Mutex::new(Vec::new()));
            let console = rejecting_console(&stderr);

            let outcome = run_with_console("prog", args, ConsoleFacade::from_mock(console));

            assert!(
                matches!(outcome, RunOutcome::Rejected(_)),
                "args {args:?} gave {outcome:?}"
            );
            assert_usage_text(&stderr.lock().unwrap().join("\n"), "prog");
        }
    }

    #[test]
    fn rejection_reports_the_reason() {
        let stderr = Arc::new(Mutex::new(Vec::new()));
        let console = rejecting_console(&stderr);

        let outcome = run_with_console("prog", &["65"], ConsoleFacade::from_mock(console));

        let RunOutcome::Rejected(error) = outcome else {
            panic!("expected a rejected run, got {outcome:?}");
        };
        assert_eq!(error, UsageError::OutOfRange { value: 65 });
    }
}
