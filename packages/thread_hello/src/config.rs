// Command line handling: turns the raw arguments into a validated `WorkerCount`.

use std::iter;
use std::num::NonZero;

use argh::FromArgs;
use derive_more::Display;

use crate::{UsageError, Worker, WorkerRank};

/// The largest number of workers a single run may start.
pub const MAX_WORKERS: u32 = 64;

/// Program name used in the usage text when the operating system does not provide one.
pub const DEFAULT_PROGRAM_NAME: &str = "thread_hello";

/// The validated number of workers to start, always in `1..=MAX_WORKERS`.
///
/// This is the entire configuration of a run. It is created once from the command line and then
/// copied into the launcher and into every worker, so no worker ever observes a different value.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WorkerCount(NonZero<u32>);

impl WorkerCount {
    /// Validates that `value` is a permitted worker count.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::OutOfRange`] if `value` is zero or greater than [`MAX_WORKERS`].
    ///
    /// # Example
    ///
    /// ```
    /// use thread_hello::WorkerCount;
    ///
    /// assert_eq!(WorkerCount::new(8).unwrap().get(), 8);
    /// assert!(WorkerCount::new(0).is_err());
    /// assert!(WorkerCount::new(65).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, UsageError> {
        NonZero::new(value)
            .filter(|count| count.get() <= MAX_WORKERS)
            .map(Self)
            .ok_or(UsageError::OutOfRange {
                value: i64::from(value),
            })
    }

    /// The number of workers.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Describes every worker of the run, in rank order starting from rank 0.
    pub fn workers(self) -> impl Iterator<Item = Worker> {
        (0..self.get()).map(move |rank| Worker::new(WorkerRank::new(rank), self))
    }
}

/// Parses a single command line argument into a worker count.
///
/// The argument must be a base-10 integer (an optional leading sign is accepted) whose value is
/// in `1..=MAX_WORKERS`.
///
/// # Errors
///
/// Returns [`UsageError::NotAnInteger`] if the argument does not parse and
/// [`UsageError::OutOfRange`] if it parses to an unacceptable value.
pub fn parse_worker_count(argument: &str) -> Result<WorkerCount, UsageError> {
    let value = argument
        .parse::<i64>()
        .map_err(|source| UsageError::NotAnInteger {
            value: argument.to_string(),
            source,
        })?;

    let value = u32::try_from(value).map_err(|_overflow| UsageError::OutOfRange { value })?;

    WorkerCount::new(value)
}

/// Spawns worker threads that each print a greeting, then waits for all of them.
#[derive(Debug, FromArgs)]
struct Args {
    /// how many worker threads to start, from 1 to 64
    #[argh(positional)]
    worker_count: String,
}

/// Validates the command line arguments (excluding the program name).
///
/// # Errors
///
/// Returns [`UsageError::ArgumentCount`] unless there is exactly one argument, otherwise the
/// outcome of [`parse_worker_count()`].
pub fn parse_args(args: &[&str]) -> Result<WorkerCount, UsageError> {
    // The leading "--" makes argh treat everything as positional, so "-1" is parsed as a number
    // and "--help" is rejected like any other non-integer.
    let argh_args = iter::once("--")
        .chain(args.iter().copied())
        .collect::<Vec<_>>();

    // With options disabled by the leading "--", a missing or surplus positional is the only
    // thing argh can still reject, so every early exit is an arity problem.
    let parsed = Args::from_args(&[DEFAULT_PROGRAM_NAME], &argh_args).map_err(|_early_exit| {
        UsageError::ArgumentCount {
            provided: args.len(),
        }
    })?;

    parse_worker_count(&parsed.worker_count)
}

/// The two-line usage text written to standard error when the command line is rejected.
#[must_use]
pub fn usage_text(program_name: &str) -> String {
    format!("usage: {program_name} <number of threads>\n0 < number of threads <= {MAX_WORKERS}")
}
