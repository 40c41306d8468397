//! # Layer 1: Container classification
//!
//! Traits answering, for a container type, "which primitives does it
//! expose?". Every answer is fixed at build time and has no runtime cost;
//! the absence of a capability is a valid answer, not an error; it merely
//! disqualifies the matching dispatch branch.
//!
//! - `container.rs`: the declared element type and forward/reverse traversal.
//! - `insert.rs`: the three insertion capabilities, the `Mapped` refinement,
//!   and the `InsertCaps` profile the dispatch layer selects from.
//! - `size.rs`: the O(1) size capability and its `SizeCaps` profile.

pub mod container;
pub mod insert;
pub mod size;

// Re-export key types at this level
pub use container::{BidiElements, Container, Elements};
pub use insert::{Appendable, InsertCaps, KeyedInsertable, LinkTailInsertable, Mapped};
pub use size::{FastSized, SizeCaps};
