// Console trait abstraction for mocking in tests.

use std::fmt::Debug;
use std::io;

/// Line-oriented access to the standard output and standard error streams.
///
/// Every call writes one complete line, terminator included, so that concurrent callers never
/// interleave partial lines.
///
/// This trait is automatically mocked by mockall in test builds, generating `MockConsole`.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Console: Debug + Send + Sync + 'static {
    /// Writes `line` followed by a newline to standard output.
    fn write_stdout_line(&self, line: &str) -> io::Result<()>;

    /// Writes `line` followed by a newline to standard error.
    fn write_stderr_line(&self, line: &str) -> io::Result<()>;
}
