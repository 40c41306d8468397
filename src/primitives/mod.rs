//! # Layer 0: Primitives
//!
//! Type-level building blocks consumed by the classification and dispatch
//! layers:
//! - `bool.rs`: type-level booleans (`Present`/`Absent`).

pub mod bool;

pub use self::bool::{Absent, Bool, Present};
