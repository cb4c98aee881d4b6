// Facade that dispatches to either the real console or a mock in tests.

use std::io;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::MockConsole;
use crate::pal::{BuildTargetConsole, Console};

/// Facade over console output, dispatching to the real or the mock implementation.
///
/// In production, this always uses `BuildTargetConsole`. In tests, it can also wrap a
/// `MockConsole` that records what the launcher and its workers wrote. Cloning is cheap, which
/// lets every worker thread carry its own handle.
#[derive(Clone)]
pub(crate) enum ConsoleFacade {
    /// Real console implementation.
    Target(&'static BuildTargetConsole),

    /// Mock console for testing.
    #[cfg(test)]
    Mock(Arc<MockConsole>),
}

// Debug implementations have no API contract to test.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl std::fmt::Debug for ConsoleFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target(_) => f.debug_struct("ConsoleFacade::Target").finish(),
            #[cfg(test)]
            Self::Mock(_) => f.debug_struct("ConsoleFacade::Mock").finish(),
        }
    }
}

static BUILD_TARGET_CONSOLE: BuildTargetConsole = BuildTargetConsole;

// Facade types are trivial pass-through layers - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl ConsoleFacade {
    /// Creates a facade over the real standard streams.
    pub(crate) const fn target() -> Self {
        Self::Target(&BUILD_TARGET_CONSOLE)
    }

    /// Creates a facade wrapping a mock console (test builds only).
    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockConsole) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

// Facade types are trivial pass-through layers - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl Console for ConsoleFacade {
    fn write_stdout_line(&self, line: &str) -> io::Result<()> {
        match self {
            Self::Target(console) => console.write_stdout_line(line),
            #[cfg(test)]
            Self::Mock(mock) => mock.write_stdout_line(line),
        }
    }

    fn write_stderr_line(&self, line: &str) -> io::Result<()> {
        match self {
            Self::Target(console) => console.write_stderr_line(line),
            #[cfg(test)]
            Self::Mock(mock) => mock.write_stderr_line(line),
        }
    }
}

