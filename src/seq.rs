//! Sequence helpers: chunking and random sampling.
//!
//! These are the shared primitives the bulk transforms and collection-style
//! callers delegate to; [`sample_size`] is built on [`shuffle`].

use rand::seq::SliceRandom;

/// Split `items` into contiguous chunks of `size`, cloning elements.
///
/// The final chunk may be shorter. `size == 0` falls back to a single chunk
/// holding everything (fail-open); empty input yields no chunks.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if items.is_empty() {
        return Vec::new();
    }
    let size = if size == 0 { items.len() } else { size };
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Return a uniformly shuffled copy of `items`.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(&mut rand::thread_rng());
    out
}

/// Return one uniformly random element, or `None` for empty input.
pub fn sample<T: Clone>(items: &[T]) -> Option<T> {
    items.choose(&mut rand::thread_rng()).cloned()
}

/// Return `n` distinct elements chosen uniformly at random.
///
/// Delegates to [`shuffle`]; `n >= items.len()` returns a full shuffle.
pub fn sample_size<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    let mut out = shuffle(items);
    out.truncate(n);
    out
}
