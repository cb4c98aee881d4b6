//! Starting the workers and waiting for them.

use std::any::Any;
use std::thread::JoinHandle;

use tracing::{debug, trace, warn};

use crate::output::{write_stderr, write_stdout};
use crate::pal::{Console, ConsoleFacade, Threads, ThreadsFacade};
use crate::{LaunchReport, SpawnFailed, WaitInterrupted, WorkerCount, WorkerRank};

/// The line printed by the launching thread once every worker has been started.
pub const MAIN_GREETING: &str = "Hello from the main thread";

/// Worker threads are named `<prefix>-<rank>`.
const THREAD_NAME_PREFIX: &str = "thread_hello";

/// Starts one thread per worker, greets from the launching thread and then waits for every
/// worker to finish.
///
/// The only ordering guarantees are that all start requests are issued before
/// [`MAIN_GREETING`] is printed and that it is printed before the first wait begins. The
/// workers' own lines may appear in any order, before or after the main greeting.
///
/// # Example
///
/// ```
/// use thread_hello::{Launcher, WorkerCount};
///
/// let report = Launcher::new(WorkerCount::new(4)?).launch();
///
/// assert!(report.is_clean());
/// assert_eq!(report.joined().len(), 4);
/// # Ok::<(), thread_hello::UsageError>(())
/// ```
#[derive(Debug)]
pub struct Launcher {
    worker_count: WorkerCount,
    console: ConsoleFacade,
    threads: ThreadsFacade,
}

impl Launcher {
    /// Creates a launcher that writes to the standard output and error of the process.
    #[must_use]
    pub fn new(worker_count: WorkerCount) -> Self {
        Self::with_console(worker_count, ConsoleFacade::target())
    }

    pub(crate) fn with_console(worker_count: WorkerCount, console: ConsoleFacade) -> Self {
        Self::with_platform(worker_count, console, ThreadsFacade::target())
    }

    pub(crate) fn with_platform(
        worker_count: WorkerCount,
        console: ConsoleFacade,
        threads: ThreadsFacade,
    ) -> Self {
        Self {
            worker_count,
            console,
            threads,
        }
    }

    /// The number of workers this launcher starts.
    #[must_use]
    pub fn worker_count(&self) -> WorkerCount {
        self.worker_count
    }

    /// Runs the whole lifecycle and returns once every started worker has been waited for.
    ///
    /// Nothing here is fatal: an interrupted wait or a refused thread is written to standard
    /// error, recorded in the returned report and the launch carries on.
    #[must_use]
    pub fn launch(self) -> LaunchReport {
        let mut report = LaunchReport::new(self.worker_count);

        let handles = self.start_all(&mut report);

        write_stdout(&self.console, MAIN_GREETING);

        join_all(handles, &self.console, &mut report);

        debug!(
            worker_count = self.worker_count.get(),
            joined = report.joined().len(),
            interrupted = report.interruptions().len(),
            "all workers waited for"
        );

        report
    }

    fn start_all(&self, report: &mut LaunchReport) -> Vec<(WorkerRank, JoinHandle<()>)> {
        let mut handles = Vec::with_capacity(self.worker_count.get() as usize);

        for worker in self.worker_count.workers() {
            let rank = worker.rank();
            let console = self.console.clone();

            let spawned = self.threads.spawn(
                format!("{THREAD_NAME_PREFIX}-{rank}"),
                Box::new(move || worker.run(&console)),
            );

            match spawned {
                Ok(handle) => {
                    trace!(rank = rank.get(), "worker started");
                    handles.push((rank, handle));
                }
                Err(error) => {
                    let failure = SpawnFailed::new(rank, error);
                    warn!(rank = rank.get(), %failure, "stopped starting workers");
                    write_stderr(&self.console, &failure.to_string());
                    report.spawn_failure = Some(failure);
                    break;
                }
            }
        }

        debug!(started = handles.len(), "start requests issued");

        handles
    }
}

/// Waits for each worker in turn. A failed wait is reported and never stops the loop.
fn join_all(
    handles: Vec<(WorkerRank, JoinHandle<()>)>,
    console: &impl Console,
    report: &mut LaunchReport,
) {
    for (rank, handle) in handles {
        match handle.join() {
            Ok(()) => {
                trace!(rank = rank.get(), "worker joined");
                report.joined.push(rank);
            }
            Err(payload) => {
                let interrupted = WaitInterrupted::new(rank, panic_message(payload.as_ref()));
                warn!(
                    rank = rank.get(),
                    reason = interrupted.reason(),
                    "wait on worker interrupted"
                );
                write_stderr(console, &interrupted.to_string());
                report.interruptions.push(interrupted);
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked with a non-string payload".to_string()
    }
}
