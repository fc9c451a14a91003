//! Convenient imports for Sidekick.
//!
//! Re-exports the most commonly used primitives so you can get started with a
//! single import:
//!
//! ```
//! use sidekick::prelude::*;
//!
//! let names = transform_list(&[1, 2, 3], |n| n.to_string());
//! assert_eq!(names, vec!["1", "2", "3"]);
//! ```

// Stateful wrappers
pub use crate::{After, Before, Debouncer, Memo, Once, Throttler};

// Retry
pub use crate::retry;

// Composition
pub use crate::{compose, negate, partial, pipe, pipeline, rearg, spread, wrap};

// Bulk transforms
pub use crate::{
    transform_batch, transform_concurrent, transform_list, transform_list_with_error,
    transform_map,
};

// Sequence helpers
pub use crate::seq::{chunk, sample, sample_size, shuffle};
