use std::io;
use std::num::ParseIntError;

use thiserror::Error;

use crate::{MAX_WORKERS, WorkerRank};

/// The command line did not describe a valid worker count.
///
/// Every variant is handled the same way by [`run()`][crate::run]: the usage text is written to
/// standard error and the process exits successfully without starting any workers.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum UsageError {
    /// The program expects exactly one positional argument.
    #[error("expected exactly one argument but got {provided}")]
    ArgumentCount {
        /// How many arguments were provided, excluding the program name.
        provided: usize,
    },

    /// The argument is not a base-10 integer.
    #[error("'{value}' is not a base-10 integer: {source}")]
    NotAnInteger {
        /// The argument as provided.
        value: String,

        /// Why the integer parser rejected it.
        source: ParseIntError,
    },

    /// The argument is an integer but not a permitted worker count.
    #[error("{value} is not a worker count between 1 and {}", MAX_WORKERS)]
    OutOfRange {
        /// The parsed value.
        value: i64,
    },
}

/// Waiting for a worker did not observe a normal completion.
///
/// Joining a Rust thread cannot be interrupted from the outside, so this is reported when the
/// worker thread terminated by panicking. The launcher writes the [`Display`][std::fmt::Display]
/// form of this value to standard error and keeps waiting for the remaining workers.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("wait on thread {rank} interrupted: {reason}")]
pub struct WaitInterrupted {
    rank: WorkerRank,
    reason: String,
}

impl WaitInterrupted {
    pub(crate) fn new(rank: WorkerRank, reason: impl Into<String>) -> Self {
        Self {
            rank,
            reason: reason.into(),
        }
    }

    /// The rank of the worker whose wait was interrupted.
    #[must_use]
    pub fn rank(&self) -> WorkerRank {
        self.rank
    }

    /// Human-readable reason, taken from the worker's panic payload when available.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// The operating system refused to start a worker thread.
///
/// No further workers are started after this; the ones already running are still waited for.
#[derive(Debug, Error)]
#[error("failed to start thread {rank}: {source}")]
pub struct SpawnFailed {
    rank: WorkerRank,
    source: io::Error,
}

impl SpawnFailed {
    pub(crate) fn new(rank: WorkerRank, source: io::Error) -> Self {
        Self { rank, source }
    }

    /// The rank of the worker that could not be started.
    #[must_use]
    pub fn rank(&self) -> WorkerRank {
        self.rank
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(UsageError: Send, Sync, Debug);
    assert_impl_all!(WaitInterrupted: Send, Sync, Debug);
    assert_impl_all!(SpawnFailed: Send, Sync, Debug);

    #[test]
    fn usage_error_messages_name_the_problem() {
        let count = UsageError::ArgumentCount { provided: 2 };
        assert_eq!(count.to_string(), "expected exactly one argument but got 2");

        let range = UsageError::OutOfRange { value: 65 };
        assert_eq!(
            range.to_string(),
            "65 is not a worker count between 1 and 64"
        );

        let source = "abc".parse::<i64>().unwrap_err();
        let not_integer = UsageError::NotAnInteger {
            value: "abc".to_string(),
            source,
        };
        assert!(not_integer.to_string().starts_with("'abc' is not a base-10 integer"));
    }

    #[test]
    fn wait_interrupted_renders_diagnostic_line() {
        let interrupted = WaitInterrupted::new(WorkerRank::new(7), "worker exploded");

        assert_eq!(interrupted.rank(), WorkerRank::new(7));
        assert_eq!(interrupted.reason(), "worker exploded");
        assert_eq!(
            interrupted.to_string(),
            "wait on thread 7 interrupted: worker exploded"
        );
    }

    #[test]
    fn spawn_failed_includes_os_error() {
        let failed = SpawnFailed::new(
            WorkerRank::new(3),
            io::Error::new(io::ErrorKind::OutOfMemory, "no more threads"),
        );

        assert_eq!(failed.rank(), WorkerRank::new(3));
        assert_eq!(
            failed.to_string(),
            "failed to start thread 3: no more threads"
        );
    }
}
