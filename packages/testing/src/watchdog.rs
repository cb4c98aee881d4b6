use std::panic;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// How long a test may run before the watchdog declares it hung.
const TIMEOUT: Duration = Duration::from_secs(10);

/// Miri is far slower at thread synchronization, so it gets more time.
const MIRI_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs `test_fn` on a separate thread and panics if it does not finish in time.
///
/// Tests that join threads hang forever if a join never returns. Wrapping them in this function
/// turns such a hang into a test failure. A panic inside `test_fn` is propagated unchanged.
///
/// Setting the `MUTATION_TESTING` environment variable to `1` disables the watchdog so that
/// mutation testing can detect hanging mutants through its own timeout.
///
/// # Panics
///
/// Panics if `test_fn` panics or does not complete within the timeout.
pub fn with_watchdog<F, R>(test_fn: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    if std::env::var("MUTATION_TESTING").as_deref() == Ok("1") {
        return test_fn();
    }

    let timeout = if cfg!(miri) { MIRI_TIMEOUT } else { TIMEOUT };

    let (result_tx, result_rx) = mpsc::channel();

    let test_thread = thread::Builder::new()
        .name("watched-test".to_string())
        .spawn(move || {
            // The receiver is gone only if the watchdog already gave up on us.
            drop(result_tx.send(test_fn()));
        })
        .expect("failed to start the watched test thread");

    match result_rx.recv_timeout(timeout) {
        Ok(result) => {
            test_thread
                .join()
                .expect("watched test thread panicked after reporting its result");
            result
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            panic!("test did not finish within {timeout:?}, it is probably hung");
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => match test_thread.join() {
            Ok(()) => panic!("watched test thread exited without reporting a result"),
            Err(payload) => panic::resume_unwind(payload),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_value_of_fast_test() {
        assert_eq!(with_watchdog(|| 6 * 7), 42);
    }

    #[test]
    #[should_panic(expected = "inner failure")]
    fn propagates_test_panic() {
        with_watchdog(|| assert_eq!(1, 2, "inner failure"));
    }
}
