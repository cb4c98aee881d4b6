use std::fmt::Debug;
use std::io;
use std::thread::JoinHandle;

/// The body a worker thread runs.
pub(crate) type ThreadEntrypoint = Box<dyn FnOnce() + Send + 'static>;

/// Creation of named operating system threads.
///
/// This trait is automatically mocked by mockall in test builds, generating `MockThreads`.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Threads: Debug + Send + Sync + 'static {
    /// Starts a thread named `name` that runs `entrypoint`.
    ///
    /// Returns an error if the operating system refuses to create the thread, in which case
    /// `entrypoint` is dropped without running.
    fn spawn(&self, name: String, entrypoint: ThreadEntrypoint) -> io::Result<JoinHandle<()>>;
}
