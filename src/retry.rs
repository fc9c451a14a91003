//! Bounded re-invocation of a fallible operation with a fixed delay.

use std::time::Duration;
use tracing::debug;

/// Run `op` up to `max_retries + 1` total times, sleeping `delay` between
/// attempts (never after the last one).
///
/// Returns the first `Ok` immediately. If every attempt fails, returns the
/// *last* error; earlier errors are discarded, not aggregated. The delay is
/// fixed, not exponential, and the calling thread blocks through it.
///
/// The operation may run multiple times, so it should be safe to repeat:
/// no irreversible side effects before its own success point.
///
/// ```
/// use sidekick::retry;
/// use std::time::Duration;
///
/// let mut attempts = 0;
/// let result = retry(5, Duration::from_millis(1), || {
///     attempts += 1;
///     if attempts < 3 { Err("not yet") } else { Ok(attempts) }
/// });
/// assert_eq!(result, Ok(3));
/// ```
pub fn retry<T, E>(
    max_retries: usize,
    delay: Duration,
    mut op: impl FnMut() -> Result<T, E>,
) -> Result<T, E> {
    let mut last_err = match op() {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };
    for attempt in 1..=max_retries {
        std::thread::sleep(delay);
        debug!(attempt, max_retries, "retrying after failed attempt");
        match op() {
            Ok(value) => return Ok(value),
            Err(err) => last_err = err,
        }
    }
    Err(last_err)
}
