//! Trailing-edge debounce for a zero-argument action.
//!
//! ## Design
//!
//! [`Debouncer`] owns one background worker thread per wrapper. The trigger
//! side only mutates a deadline under the wrapper's lock and notifies the
//! worker; the worker sleeps on a condvar until the deadline passes without
//! being moved, then fires the action. This keeps "cancel pending, schedule
//! new" atomic and keeps the trigger call non-blocking regardless of how long
//! the action runs.
//!
//! ## Thread Safety
//!
//! All shared state lives in a single `Mutex<State>`; the action itself is
//! owned by the worker thread and never aliased. Concurrent trigger calls
//! serialize on the lock, so the last caller's deadline always wins.

use parking_lot::{Condvar, Mutex, MutexGuard};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::trace;

struct State {
    /// When the pending execution should fire. `None` means nothing pending.
    deadline: Option<Instant>,
    /// Set once by `Drop` to stop the worker.
    shutdown: bool,
}

struct Shared {
    state: Mutex<State>,
    signal: Condvar,
}

/// Debounces a zero-argument action: the action runs once `wait` has elapsed
/// since the most recent [`call`](Debouncer::call), however many calls were
/// made in between.
///
/// Execution is fire-and-forget: no return value is propagated and the action
/// is expected not to fail through this path. If the action panics, the
/// worker thread exits and later triggers are silently inert.
///
/// Dropping the wrapper cancels any pending execution and joins the worker.
pub struct Debouncer {
    shared: Arc<Shared>,
    wait: Duration,
    worker: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Wrap `action`, to be debounced by `wait`.
    pub fn new(wait: Duration, action: impl FnMut() + Send + 'static) -> Self {
        let shared = Arc::new(Shared {
            state: Mutex::new(State { deadline: None, shutdown: false }),
            signal: Condvar::new(),
        });
        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || worker_loop(&worker_shared, action));
        Debouncer { shared, wait, worker: Some(worker) }
    }

    /// Trigger the debouncer.
    ///
    /// Cancels any pending scheduled execution and schedules a new one `wait`
    /// from now. Never blocks on the action.
    pub fn call(&self) {
        let mut state = self.shared.state.lock();
        state.deadline = Some(Instant::now() + self.wait);
        self.shared.signal.notify_one();
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        {
            let mut state = self.shared.state.lock();
            state.shutdown = true;
            state.deadline = None;
            self.shared.signal.notify_one();
        }
        if let Some(worker) = self.worker.take() {
            // A panicked action already unwound the worker; nothing to do.
            let _ = worker.join();
        }
    }
}

fn worker_loop(shared: &Shared, mut action: impl FnMut()) {
    let mut state = shared.state.lock();
    loop {
        if state.shutdown {
            return;
        }
        match state.deadline {
            None => {
                shared.signal.wait(&mut state);
            }
            Some(deadline) => {
                if Instant::now() < deadline {
                    // Wakes early if the deadline moves or shutdown is set;
                    // the loop re-checks either way.
                    shared.signal.wait_until(&mut state, deadline);
                } else {
                    state.deadline = None;
                    trace!("debounce window elapsed, firing action");
                    MutexGuard::unlocked(&mut state, &mut action);
                }
            }
        }
    }
}
