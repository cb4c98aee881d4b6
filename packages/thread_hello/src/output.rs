// Console writes that must not fail the run.
//
// The program has no failure exit status, so a console that refuses a line is only worth a
// diagnostic event.

use tracing::warn;

use crate::pal::Console;

pub(crate) fn write_stdout(console: &impl Console, line: &str) {
    if let Err(error) = console.write_stdout_line(line) {
        warn!(%error, line, "failed to write to standard output");
    }
}

pub(crate) fn write_stderr(console: &impl Console, line: &str) {
    if let Err(error) = console.write_stderr_line(line) {
        warn!(%error, line, "failed to write to standard error");
    }
}
