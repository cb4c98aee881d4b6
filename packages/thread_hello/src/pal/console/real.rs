// Real console implementation that writes to the process's standard streams.

use std::io::{self, Write};

use crate::pal::Console;

/// Console implementation backed by the standard output and standard error of the process.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetConsole;

// Trivial forwarder to system APIs - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl Console for BuildTargetConsole {
    fn write_stdout_line(&self, line: &str) -> io::Result<()> {
        // Holding the lock for the whole line keeps lines from different threads intact.
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }

    fn write_stderr_line(&self, line: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{line}")
    }
}
