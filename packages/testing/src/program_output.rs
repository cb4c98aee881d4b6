use std::collections::BTreeSet;

const MAIN_GREETING: &str = "Hello from the main thread";
const WORKER_PREFIX: &str = "Hello from thread ";

/// The standard output of one `thread_hello` run, split into the kinds of lines it may contain.
///
/// The order of worker lines is not deterministic, so everything here compares ranks as sets or
/// sorted lists.
#[derive(Debug)]
pub struct ProgramOutput {
    main_greetings: usize,

    /// `(rank, worker_count)` pairs in the order they were printed.
    worker_lines: Vec<(u32, u32)>,

    unrecognized: Vec<String>,
}

impl ProgramOutput {
    /// Classifies the lines of a captured standard output stream.
    #[must_use]
    pub fn parse(stdout: &str) -> Self {
        Self::from_lines(stdout.lines())
    }

    /// Classifies individually captured lines.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut main_greetings = 0_usize;
        let mut worker_lines = Vec::new();
        let mut unrecognized = Vec::new();

        for line in lines {
            let line = line.as_ref();

            if line == MAIN_GREETING {
                main_greetings = main_greetings
                    .checked_add(1)
                    .expect("cannot have that many lines");
            } else if let Some(worker) = parse_worker_line(line) {
                worker_lines.push(worker);
            } else {
                unrecognized.push(line.to_string());
            }
        }

        Self {
            main_greetings,
            worker_lines,
            unrecognized,
        }
    }

    /// How many times the main greeting was printed.
    #[must_use]
    pub fn main_greetings(&self) -> usize {
        self.main_greetings
    }

    /// `(rank, worker_count)` pairs of all worker lines, in print order.
    #[must_use]
    pub fn worker_lines(&self) -> &[(u32, u32)] {
        &self.worker_lines
    }

    /// Lines that are neither greeting.
    #[must_use]
    pub fn unrecognized_lines(&self) -> &[String] {
        &self.unrecognized
    }

    /// Worker ranks in ascending order, duplicates retained.
    #[must_use]
    pub fn sorted_ranks(&self) -> Vec<u32> {
        let mut ranks = self
            .worker_lines
            .iter()
            .map(|&(rank, _)| rank)
            .collect::<Vec<_>>();
        ranks.sort_unstable();
        ranks
    }

    /// All lines sorted, for comparing two runs regardless of scheduling.
    #[must_use]
    pub fn sorted_lines(stdout: &str) -> Vec<String> {
        let mut lines = stdout.lines().map(str::to_string).collect::<Vec<_>>();
        lines.sort_unstable();
        lines
    }

    /// Asserts that this is the output of a successful run with `worker_count` workers: one main
    /// greeting, one line for every rank in `0..worker_count` each citing `worker_count`, and
    /// nothing else.
    ///
    /// # Panics
    ///
    /// Panics if any of these conditions does not hold.
    pub fn assert_complete_run(&self, worker_count: u32) {
        assert_eq!(
            self.main_greetings, 1,
            "expected exactly one main greeting in {self:?}"
        );
        assert!(
            self.unrecognized.is_empty(),
            "unexpected lines: {:?}",
            self.unrecognized
        );

        let expected_ranks = (0..worker_count).collect::<Vec<_>>();
        assert_eq!(
            self.sorted_ranks(),
            expected_ranks,
            "every rank must be printed exactly once"
        );

        let distinct_counts = self
            .worker_lines
            .iter()
            .map(|&(_, count)| count)
            .collect::<BTreeSet<_>>();
        assert!(
            distinct_counts.iter().all(|&count| count == worker_count),
            "worker lines cite counts {distinct_counts:?} instead of {worker_count}"
        );
    }

    /// Asserts that no worker and no main greeting was printed.
    ///
    /// # Panics
    ///
    /// Panics if any greeting is present.
    pub fn assert_no_greetings(&self) {
        assert_eq!(self.main_greetings, 0, "unexpected main greeting");
        assert!(
            self.worker_lines.is_empty(),
            "unexpected worker lines: {:?}",
            self.worker_lines
        );
    }
}

fn parse_worker_line(line: &str) -> Option<(u32, u32)> {
    let (rank, count) = line.strip_prefix(WORKER_PREFIX)?.split_once(" of ")?;

    Some((rank.parse().ok()?, count.parse().ok()?))
}

/// Asserts that `stderr` is exactly the two-line usage text for `program_name`.
///
/// # Panics
///
/// Panics if the text differs.
pub fn assert_usage_text(stderr: &str, program_name: &str) {
    let lines = stderr.lines().collect::<Vec<_>>();
    let first_line = format!("usage: {program_name} <number of threads>");

    assert_eq!(
        lines,
        vec![first_line.as_str(), "0 < number of threads <= 64"],
        "unexpected standard error content"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_lines() {
        let output = ProgramOutput::parse(
            "Hello from thread 1 of 2\nHello from the main thread\nHello from thread 0 of 2\nnoise\n",
        );

        assert_eq!(output.main_greetings(), 1);
        assert_eq!(output.worker_lines(), &[(1, 2), (0, 2)]);
        assert_eq!(output.unrecognized_lines(), &["noise".to_string()]);
        assert_eq!(output.sorted_ranks(), vec![0, 1]);
    }

    #[test]
    fn complete_run_accepts_any_order() {
        ProgramOutput::parse(
            "Hello from thread 2 of 3\nHello from the main thread\nHello from thread 0 of 3\nHello from thread 1 of 3\n",
        )
        .assert_complete_run(3);
    }

    #[test]
    #[should_panic(expected = "every rank must be printed exactly once")]
    fn complete_run_rejects_duplicate_rank() {
        ProgramOutput::parse(
            "Hello from the main thread\nHello from thread 0 of 2\nHello from thread 0 of 2\n",
        )
        .assert_complete_run(2);
    }

    #[test]
    fn malformed_worker_lines_are_unrecognized() {
        let output = ProgramOutput::parse("Hello from thread x of 3\nHello from thread 1 of\n");

        assert!(output.worker_lines().is_empty());
        assert_eq!(output.unrecognized_lines().len(), 2);
    }
}
