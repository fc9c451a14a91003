//! # Sidekick
//!
//! Concurrency-safe function helpers: rate limiting, invocation gating,
//! memoization, retry, composition, and bulk transforms.
//!
//! Every primitive is independent and stateless from the caller's point of
//! view: construction returns a wrapper (or a plain closure), and all wrapper
//! state is private, guarded by the wrapper's own lock, and reachable only
//! through the wrapper's call interface.
//!
//! ## Quick Start
//!
//! ```
//! use sidekick::prelude::*;
//! use std::time::Duration;
//!
//! // Run a flaky operation up to 4 times total
//! let value = retry(3, Duration::from_millis(10), || {
//!     Ok::<_, std::io::Error>(42)
//! })?;
//! assert_eq!(value, 42);
//!
//! // Fan a transform out over 4 workers, order preserved
//! let doubled = transform_concurrent(&[1, 2, 3, 4, 5, 6], |n| n * 2, 4);
//! assert_eq!(doubled, vec![2, 4, 6, 8, 10, 12]);
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! ## Primitives
//!
//! - [`Debouncer`] - trailing-edge debounce of a zero-argument action
//! - [`Throttler`] - leading-edge throttle, surplus calls dropped
//! - [`Once`], [`Before`], [`After`] - invocation-count gates
//! - [`Memo`] - cache-by-argument memoization, no eviction
//! - [`retry`] - bounded re-invocation with fixed delay
//! - [`compose`], [`pipe`], [`negate`], [`wrap`], [`partial`], [`rearg`],
//!   [`spread`] - pure higher-order wrappers
//! - [`transform_list`], [`transform_map`], [`transform_list_with_error`],
//!   [`transform_concurrent`], [`transform_batch`] - bulk transforms
//! - [`seq`] - chunking and sampling helpers the transforms delegate to

#![warn(missing_docs)]

mod compose;
mod debounce;
mod gate;
mod memoize;
mod retry;
mod throttle;
mod transform;

pub mod prelude;
pub mod seq;

pub use compose::{compose, negate, partial, pipe, pipeline, rearg, spread, wrap};
pub use debounce::Debouncer;
pub use gate::{After, Before, Once};
pub use memoize::Memo;
pub use retry::retry;
pub use throttle::Throttler;
pub use transform::{
    transform_batch, transform_concurrent, transform_list, transform_list_with_error,
    transform_map, DEFAULT_BATCH_SIZE,
};
