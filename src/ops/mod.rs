//! # Layer 3: Operations
//!
//! The public higher-order surface. Every operation takes its input by
//! reference and never mutates it; `sort_by_key` and `shuffle` work on a
//! cloned copy and return a fresh reordered sequence. Operations that build
//! a new container route every produced value through the dispatch layer;
//! the rest need only traversal.
//!
//! - `transform.rs`: each, map, invoke, pluck (and their `_into` forms)
//! - `fold.rs`: reduce, reduce_right
//! - `query.rs`: find, filter, reject, every, some, contains, size
//! - `order.rs`: max, min, max_by_key, min_by_key, sort_by_key, shuffle

pub mod fold;
pub mod order;
pub mod query;
pub mod transform;

pub use fold::{reduce, reduce_right};
pub use order::{max, max_by_key, min, min_by_key};
#[cfg(feature = "alloc")]
pub use order::{shuffle_with, sort_by_key};
#[cfg(feature = "std")]
pub use order::shuffle;
pub use query::{contains, every, filter, find, reject, size, some};
pub use transform::{each, invoke_into, map_into, pluck_into};
#[cfg(feature = "alloc")]
pub use transform::{invoke, map, pluck};
