#![cfg_attr(not(feature = "std"), no_std)]

//! # uniops
//!
//! Container-agnostic functional operations with compile-time
//! insertion-capability dispatch.
//!
//! ## Architecture
//!
//! Every operation that produces a new container routes each produced value
//! through a single "add one element" entry point ([`dispatch::Emplace`]).
//! Which insertion primitive that entry point uses is selected in the type
//! system, once per output container type, with a fixed priority order:
//!
//! ```text
//! tail append  >  keyed insert  >  link-tail insert
//! ```
//!
//! A container type advertises its primitives through a profile of type-level
//! booleans; the selection is a nested type-level conditional over that
//! profile. By the time anything runs, exactly one strategy is left and the
//! call monomorphizes to a direct insert: no tags, no runtime branch.
//!
//! ```text
//! +--------------------------------------------------------------+
//! |  Layer 3: Operations                                         |
//! |  - each, map, reduce, filter, find, pluck, sort_by_key, ...  |
//! +--------------------------------------------------------------+
//!                                |
//!                                v
//! +--------------------------------------------------------------+
//! |  Layer 2: Dispatch                                           |
//! |  - StrategyOf<C>, Emplace, InsertWith, MeasureWith           |
//! +--------------------------------------------------------------+
//!                                |
//!                                v
//! +--------------------------------------------------------------+
//! |  Layer 1: Container classification                           |
//! |  - Container, Elements, Appendable, KeyedInsertable,         |
//! |    LinkTailInsertable, Mapped, FastSized, profiles           |
//! +--------------------------------------------------------------+
//!                                |
//!                                v
//! +--------------------------------------------------------------+
//! |  Layer 0: Primitives                                         |
//! |  - Present, Absent, Bool::If                                 |
//! +--------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::BTreeSet;
//! use uniops::prelude::*;
//!
//! let words = vec!["tern", "gull", "tern", "skua"];
//!
//! // One transform, three output shapes. The insert primitive is picked
//! // per output type at build time.
//! let lengths: Vec<usize> = map(&words, |w| w.len());
//! let unique: BTreeSet<&str> = map_into(&words, |w| *w);
//! let initials: String = map_into(&words, |w| w.chars().next().unwrap());
//!
//! assert_eq!(lengths, vec![4, 4, 4, 4]);
//! assert_eq!(unique.len(), 3);
//! assert_eq!(initials, "tgts");
//! ```
//!
//! Produced values must match the output's declared element type exactly;
//! a mismatch, or an output type exposing none of the three insertion
//! primitives, is rejected at build time (see [`dispatch`]).

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Container classification
// =============================================================================
pub mod caps;

// =============================================================================
// Layer 2: Dispatch
// =============================================================================
pub mod dispatch;

// =============================================================================
// Layer 3: Operations
// =============================================================================
pub mod ops;

// Re-export key types at the crate root
pub use caps::{
    Appendable, BidiElements, Container, Elements, FastSized, InsertCaps, KeyedInsertable,
    LinkTailInsertable, Mapped, SizeCaps,
};
pub use dispatch::{Emplace, StrategyOf, add, strategy_of};
pub use primitives::{Absent, Bool, Present};

/// Everything needed to call the operations and to adapt new containers.
pub mod prelude {
    pub use crate::caps::{
        Appendable, BidiElements, Container, Elements, FastSized, InsertCaps, KeyedInsertable,
        LinkTailInsertable, Mapped, SizeCaps,
    };
    pub use crate::dispatch::{Emplace, Strategy, add, strategy_of};
    pub use crate::ops::*;
    pub use crate::primitives::{Absent, Bool, Present};
}
