//! Bulk transforms over slices and maps.
//!
//! ## Design
//!
//! The sequential helpers are plain iterator pipelines. The two non-trivial
//! members are:
//!
//! - [`transform_concurrent`]: fork-join over scoped threads, spawned fresh
//!   per call. Items are split into contiguous near-equal chunks (ceiling
//!   division) and results are reassembled in chunk order, so output order
//!   always equals input order regardless of worker completion order.
//! - [`transform_batch`]: strictly sequential batching; the caller's
//!   function runs once per contiguous batch and outputs are concatenated
//!   in batch order.
//!
//! Only [`transform_list_with_error`] has an error channel; the rest treat
//! the per-item function as total. Misuse (zero workers, zero batch size)
//! falls back to a sensible default instead of erroring.

use std::collections::HashMap;
use std::hash::Hash;
use std::thread;
use tracing::debug;

/// Batch size used by [`transform_batch`] when the caller passes `0`.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Apply `f` to every item sequentially, preserving order.
///
/// Empty input yields an empty (never absent) vector.
pub fn transform_list<T, U>(items: &[T], f: impl Fn(&T) -> U) -> Vec<U> {
    items.iter().map(f).collect()
}

/// Apply `f` to every value of `map`, preserving keys.
pub fn transform_map<K, V, W>(map: &HashMap<K, V>, f: impl Fn(&V) -> W) -> HashMap<K, W>
where
    K: Clone + Eq + Hash,
{
    map.iter().map(|(k, v)| (k.clone(), f(v))).collect()
}

/// Apply a fallible `f` to every item sequentially.
///
/// Items that error are excluded from the success vector (no padding) and
/// their errors are collected in encounter order. Once any item has errored
/// the two vectors are no longer index-aligned with each other.
pub fn transform_list_with_error<T, U, E>(
    items: &[T],
    f: impl Fn(&T) -> Result<U, E>,
) -> (Vec<U>, Vec<E>) {
    let mut values = Vec::with_capacity(items.len());
    let mut errors = Vec::new();
    for item in items {
        match f(item) {
            Ok(value) => values.push(value),
            Err(err) => errors.push(err),
        }
    }
    (values, errors)
}

/// Apply `f` to every item across `workers` fork-join threads, preserving
/// input order in the output.
///
/// Items are split into `workers` contiguous chunks (ceiling-divided, so the
/// last chunk may be short) and each chunk runs on its own scoped thread.
/// The call blocks until every worker finishes; there are no partial or
/// streaming results. `workers <= 1` or fewer items than workers falls back
/// to the sequential path.
///
/// If a worker panics, all workers are still joined and then the first
/// panic is re-raised in the caller, so a panicking `f` can never produce a
/// silently truncated result.
pub fn transform_concurrent<T, U>(
    items: &[T],
    f: impl Fn(&T) -> U + Sync,
    workers: usize,
) -> Vec<U>
where
    T: Sync,
    U: Send,
{
    if workers <= 1 || items.len() < workers {
        return transform_list(items, &f);
    }
    let chunk_size = (items.len() + workers - 1) / workers;
    debug!(workers, chunk_size, total = items.len(), "fanning out transform");

    let f = &f;
    let mut out = Vec::with_capacity(items.len());
    thread::scope(|scope| {
        let handles: Vec<_> = items
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || chunk.iter().map(f).collect::<Vec<U>>()))
            .collect();
        // Handles are joined in spawn order, which is chunk order, so the
        // reassembled output matches the input order.
        for handle in handles {
            match handle.join() {
                Ok(part) => out.extend(part),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
    });
    out
}

/// Apply a batch-level `f` to contiguous batches of `batch_size` items,
/// strictly sequentially, concatenating outputs in batch order.
///
/// `batch_size == 0` falls back to [`DEFAULT_BATCH_SIZE`].
pub fn transform_batch<T, U>(
    items: &[T],
    f: impl Fn(&[T]) -> Vec<U>,
    batch_size: usize,
) -> Vec<U> {
    let size = if batch_size == 0 { DEFAULT_BATCH_SIZE } else { batch_size };
    let mut out = Vec::with_capacity(items.len());
    for batch in items.chunks(size) {
        out.extend(f(batch));
    }
    out
}
