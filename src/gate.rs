//! Invocation-count gates: [`Once`], [`Before`], [`After`].
//!
//! Each gate wraps a zero-argument function and decides, from its own call
//! count, whether to run the function or return a cached/default value. The
//! count, the cache, and the wrapped function all live under one `Mutex` per
//! wrapper, so the "check count, maybe run, record result" sequence is
//! atomic: concurrent callers racing on a boundary cannot both cross it.

use parking_lot::Mutex;

type Action<T> = Box<dyn FnMut() -> T + Send>;

struct OnceState<T> {
    f: Action<T>,
    value: Option<T>,
}

/// Runs the wrapped function on the first call only; every later call
/// returns a clone of the first call's result without running the function.
pub struct Once<T> {
    state: Mutex<OnceState<T>>,
}

impl<T: Clone> Once<T> {
    /// Wrap `f` so it runs at most once.
    pub fn new(f: impl FnMut() -> T + Send + 'static) -> Self {
        Once {
            state: Mutex::new(OnceState { f: Box::new(f), value: None }),
        }
    }

    /// Run the function if it has not run yet; return the cached result.
    pub fn call(&self) -> T {
        let mut state = self.state.lock();
        if let Some(value) = &state.value {
            return value.clone();
        }
        let value = (state.f)();
        state.value = Some(value.clone());
        value
    }
}

struct BeforeState<T> {
    f: Action<T>,
    remaining: usize,
    last: Option<T>,
}

/// Runs the wrapped function on the first `n` calls; calls beyond the `n`-th
/// return a clone of the `n`-th call's result.
///
/// `Before::new(0, f)` never runs `f`; calls return `T::default()`.
pub struct Before<T> {
    state: Mutex<BeforeState<T>>,
}

impl<T: Clone + Default> Before<T> {
    /// Wrap `f` so only the first `n` calls run it.
    pub fn new(n: usize, f: impl FnMut() -> T + Send + 'static) -> Self {
        Before {
            state: Mutex::new(BeforeState { f: Box::new(f), remaining: n, last: None }),
        }
    }

    /// Run the function if fewer than `n` calls have happened; otherwise
    /// return the last cached result.
    pub fn call(&self) -> T {
        let mut state = self.state.lock();
        if state.remaining > 0 {
            state.remaining -= 1;
            let value = (state.f)();
            state.last = Some(value.clone());
            value
        } else {
            state.last.clone().unwrap_or_default()
        }
    }
}

struct AfterState<T> {
    f: Action<T>,
    calls: usize,
    threshold: usize,
}

/// Ignores the first `n - 1` calls (returning `T::default()`); the `n`-th
/// call and every call after it run the wrapped function.
///
/// Useful to delay an action until a set of collaborators have all signaled
/// completion. `After::new(0, f)` behaves like `After::new(1, f)`.
pub struct After<T> {
    state: Mutex<AfterState<T>>,
}

impl<T: Default> After<T> {
    /// Wrap `f` so it only starts running on the `n`-th call.
    pub fn new(n: usize, f: impl FnMut() -> T + Send + 'static) -> Self {
        After {
            state: Mutex::new(AfterState { f: Box::new(f), calls: 0, threshold: n }),
        }
    }

    /// Run the function if this is the `n`-th call or later; otherwise
    /// return `T::default()`.
    pub fn call(&self) -> T {
        let mut state = self.state.lock();
        state.calls += 1;
        if state.calls >= state.threshold {
            (state.f)()
        } else {
            T::default()
        }
    }
}
