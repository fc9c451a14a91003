//! Cache-by-argument memoization.
//!
//! ## Design
//!
//! [`Memo`] is a pure memoizer, not a bounded cache: entries are never
//! evicted and the map grows for the lifetime of the wrapper. Callers who
//! care about memory discard the wrapper. The miss path computes while
//! holding the lock, so a given key is computed exactly once even when many
//! threads miss on it simultaneously.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::hash::Hash;

struct MemoState<K, V> {
    f: Box<dyn FnMut(&K) -> V + Send>,
    cache: FxHashMap<K, V>,
}

/// Memoizes a single-argument function by argument value.
///
/// The key type must be hashable and cloneable; results are cloned out of
/// the cache on every hit.
pub struct Memo<K, V> {
    state: Mutex<MemoState<K, V>>,
}

impl<K: Eq + Hash + Clone, V: Clone> Memo<K, V> {
    /// Wrap `f` with an unbounded by-argument cache.
    pub fn new(f: impl FnMut(&K) -> V + Send + 'static) -> Self {
        Memo {
            state: Mutex::new(MemoState { f: Box::new(f), cache: FxHashMap::default() }),
        }
    }

    /// Return the cached result for `key`, computing and caching it on the
    /// first call with this key.
    pub fn call(&self, key: K) -> V {
        let mut state = self.state.lock();
        if let Some(value) = state.cache.get(&key) {
            return value.clone();
        }
        let value = (state.f)(&key);
        state.cache.insert(key, value.clone());
        value
    }
}
