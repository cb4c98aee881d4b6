use crate::{SpawnFailed, WaitInterrupted, WorkerCount, WorkerRank};

/// What happened to the workers of a completed launch.
///
/// Every started worker ends up either in [`joined()`][Self::joined] or in
/// [`interruptions()`][Self::interruptions]. Workers that were never started because the
/// operating system refused a thread are not in either list; see
/// [`spawn_failure()`][Self::spawn_failure].
#[derive(Debug)]
pub struct LaunchReport {
    worker_count: WorkerCount,
    pub(crate) joined: Vec<WorkerRank>,
    pub(crate) interruptions: Vec<WaitInterrupted>,
    pub(crate) spawn_failure: Option<SpawnFailed>,
}

impl LaunchReport {
    pub(crate) fn new(worker_count: WorkerCount) -> Self {
        Self {
            worker_count,
            joined: Vec::with_capacity(worker_count.get() as usize),
            interruptions: Vec::new(),
            spawn_failure: None,
        }
    }

    /// The validated worker count the launch was configured with.
    #[must_use]
    pub fn worker_count(&self) -> WorkerCount {
        self.worker_count
    }

    /// Ranks of the workers that were waited for and completed normally, in the order they were
    /// waited for.
    #[must_use]
    pub fn joined(&self) -> &[WorkerRank] {
        &self.joined
    }

    /// Waits that did not observe a normal completion.
    #[must_use]
    pub fn interruptions(&self) -> &[WaitInterrupted] {
        &self.interruptions
    }

    /// Set if the launch stopped starting workers early.
    #[must_use]
    pub fn spawn_failure(&self) -> Option<&SpawnFailed> {
        self.spawn_failure.as_ref()
    }

    /// Whether every worker was started and completed normally.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.spawn_failure.is_none()
            && self.interruptions.is_empty()
            && self.joined.len() == self.worker_count.get() as usize
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn new_report_is_not_clean_until_all_joined() {
        let count = WorkerCount::new(2).unwrap();
        let mut report = LaunchReport::new(count);

        assert_eq!(report.worker_count(), count);
        assert!(!report.is_clean());

        report.joined.push(WorkerRank::new(0));
        report.joined.push(WorkerRank::new(1));

        assert!(report.is_clean());
        assert_eq!(report.joined(), &[WorkerRank::new(0), WorkerRank::new(1)]);
    }

    #[test]
    fn interruption_makes_report_unclean() {
        let mut report = LaunchReport::new(WorkerCount::new(1).unwrap());
        report
            .interruptions
            .push(WaitInterrupted::new(WorkerRank::new(0), "boom"));

        assert!(!report.is_clean());
        assert_eq!(report.interruptions().len(), 1);
        assert!(report.spawn_failure().is_none());
    }
}
