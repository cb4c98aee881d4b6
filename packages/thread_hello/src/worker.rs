use derive_more::Display;
use tracing::trace;

use crate::WorkerCount;
use crate::output::write_stdout;
use crate::pal::Console;

/// Zero-based index that identifies a worker among its siblings.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WorkerRank(u32);

impl WorkerRank {
    /// Creates a rank from its numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The numeric value of the rank.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// One unit of concurrent work: prints its greeting once and finishes.
///
/// Obtained from [`WorkerCount::workers()`], which guarantees that the rank is less than the
/// worker count. Both values are plain copies, so a worker shares nothing mutable with its
/// siblings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Worker {
    rank: WorkerRank,
    worker_count: WorkerCount,
}

impl Worker {
    pub(crate) const fn new(rank: WorkerRank, worker_count: WorkerCount) -> Self {
        Self { rank, worker_count }
    }

    /// The rank of this worker.
    #[must_use]
    pub const fn rank(self) -> WorkerRank {
        self.rank
    }

    /// The total number of workers in the run this worker belongs to.
    #[must_use]
    pub const fn worker_count(self) -> WorkerCount {
        self.worker_count
    }

    /// The line this worker prints when it runs.
    ///
    /// # Example
    ///
    /// ```
    /// use thread_hello::WorkerCount;
    ///
    /// let count = WorkerCount::new(3).unwrap();
    /// let last = count.workers().last().unwrap();
    ///
    /// assert_eq!(last.greeting(), "Hello from thread 2 of 3");
    /// ```
    #[must_use]
    pub fn greeting(self) -> String {
        format!("Hello from thread {} of {}", self.rank, self.worker_count)
    }

    /// Body of the worker thread.
    pub(crate) fn run(self, console: &impl Console) {
        trace!(rank = self.rank.get(), "worker running");

        write_stdout(console, &self.greeting());
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::pal::MockConsole;

    #[test]
    fn greeting_cites_rank_and_count() {
        let count = WorkerCount::new(64).unwrap();

        let greetings = count.workers().map(Worker::greeting).collect::<Vec<_>>();

        assert_eq!(greetings.first().unwrap(), "Hello from thread 0 of 64");
        assert_eq!(greetings.last().unwrap(), "Hello from thread 63 of 64");
    }

    #[test]
    fn run_writes_exactly_one_stdout_line() {
        let worker = WorkerCount::new(2).unwrap().workers().nth(1).unwrap();

        let mut console = MockConsole::new();
        console
            .expect_write_stdout_line()
            .with(eq("Hello from thread 1 of 2"))
            .times(1)
            .returning(|_| Ok(()));
        console.expect_write_stderr_line().never();

        worker.run(&console);
    }

    #[test]
    fn run_survives_console_failure() {
        let worker = WorkerCount::new(1).unwrap().workers().next().unwrap();

        let mut console = MockConsole::new();
        console
            .expect_write_stdout_line()
            .times(1)
            .returning(|_| Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe)));

        worker.run(&console);
    }
}
