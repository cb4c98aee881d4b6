use std::io;
use std::thread::{self, JoinHandle};

use crate::pal::{ThreadEntrypoint, Threads};

/// Thread creation backed by `std::thread`.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetThreads;

// Trivial forwarder to system APIs - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl Threads for BuildTargetThreads {
    fn spawn(&self, name: String, entrypoint: ThreadEntrypoint) -> io::Result<JoinHandle<()>> {
        thread::Builder::new().name(name).spawn(entrypoint)
    }
}
