//! Leading-edge throttle for a zero-argument action.
//!
//! ## Design
//!
//! The first trigger fires the action immediately; any trigger arriving
//! within `wait` of the last *fired* trigger is dropped outright (not queued,
//! not delayed). The action runs on a freshly spawned thread so the trigger
//! call never blocks on the action's duration.
//!
//! ## Thread Safety
//!
//! The last-fired timestamp is the only shared state and sits under a single
//! `Mutex`, so the "check elapsed, record now" sequence is atomic; concurrent
//! triggers cannot double-fire inside one window.

use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::trace;

/// Throttles a zero-argument action to at most one execution per `wait`.
///
/// Surplus triggers inside the window are ignored. Eligibility is
/// `elapsed >= wait`: a trigger landing exactly on the window boundary fires.
pub struct Throttler {
    action: Arc<dyn Fn() + Send + Sync>,
    wait: Duration,
    last_fired: Mutex<Option<Instant>>,
}

impl Throttler {
    /// Wrap `action`, to be throttled to one execution per `wait`.
    pub fn new(wait: Duration, action: impl Fn() + Send + Sync + 'static) -> Self {
        Throttler {
            action: Arc::new(action),
            wait,
            last_fired: Mutex::new(None),
        }
    }

    /// Trigger the throttler.
    ///
    /// Fires the action asynchronously if at least `wait` has elapsed since
    /// the last fired trigger (or if this is the first trigger); otherwise
    /// the call is dropped. The timestamp is recorded at the trigger, not at
    /// action completion.
    pub fn call(&self) {
        let now = Instant::now();
        {
            let mut last_fired = self.last_fired.lock();
            let eligible = match *last_fired {
                None => true,
                Some(last) => now.duration_since(last) >= self.wait,
            };
            if !eligible {
                trace!("throttled call dropped inside window");
                return;
            }
            *last_fired = Some(now);
        }
        let action = Arc::clone(&self.action);
        thread::spawn(move || action());
    }
}
