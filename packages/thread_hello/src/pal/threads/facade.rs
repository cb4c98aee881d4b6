use std::io;
#[cfg(test)]
use std::sync::Arc;
use std::thread::JoinHandle;

#[cfg(test)]
use crate::pal::MockThreads;
use crate::pal::{BuildTargetThreads, ThreadEntrypoint, Threads};

/// Facade over thread creation, dispatching to the real or the mock implementation.
#[derive(Clone)]
pub(crate) enum ThreadsFacade {
    /// Real thread creation.
    Target(&'static BuildTargetThreads),

    /// Mock thread creation for testing.
    #[cfg(test)]
    Mock(Arc<MockThreads>),
}

// Debug implementations have no API contract to test.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl std::fmt::Debug for ThreadsFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target(_) => f.debug_struct("ThreadsFacade::Target").finish(),
            #[cfg(test)]
            Self::Mock(_) => f.debug_struct("ThreadsFacade::Mock").finish(),
        }
    }
}

static BUILD_TARGET_THREADS: BuildTargetThreads = BuildTargetThreads;

// Facade types are trivial pass-through layers - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl ThreadsFacade {
    /// Creates a facade that starts real threads.
    pub(crate) const fn target() -> Self {
        Self::Target(&BUILD_TARGET_THREADS)
    }

    /// Creates a facade wrapping a mock (test builds only).
    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockThreads) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

// Facade types are trivial pass-through layers - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl Threads for ThreadsFacade {
    fn spawn(&self, name: String, entrypoint: ThreadEntrypoint) -> io::Result<JoinHandle<()>> {
        match self {
            Self::Target(threads) => threads.spawn(name, entrypoint),
            #[cfg(test)]
            Self::Mock(mock) => mock.spawn(name, entrypoint),
        }
    }
}
