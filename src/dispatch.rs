//! # Layer 2: Dispatch
//!
//! One polymorphic "add one element" entry point, [`Emplace`]. For a given
//! output container type the insertion strategy is selected from the type's
//! [`InsertCaps`] profile with a fixed priority order, first match wins:
//!
//! 1. tail append ([`ViaAppend`])
//! 2. keyed insert ([`ViaKeyedInsert`])
//! 3. link-tail insert ([`ViaLinkTail`])
//!
//! The selection is a nested type-level conditional ([`StrategyOf`]); a type
//! satisfying several predicates still resolves to exactly one strategy, and
//! a type satisfying none resolves to [`NoInsert`], which carries no insert
//! routine, so using such a type as an output fails to build.
//!
//! [`size`](crate::ops::size) uses the same pattern for counting:
//! [`SizeStrategyOf`] picks [`ViaFastLen`] or [`ViaTraversal`] from the
//! [`SizeCaps`] profile.

use crate::caps::{
    Appendable, Container, Elements, FastSized, InsertCaps, KeyedInsertable, LinkTailInsertable,
    SizeCaps,
};
use crate::primitives::Bool;

// =============================================================================
// Insertion strategies
// =============================================================================

/// Strategy marker: insert at the logical end.
#[derive(Debug)]
pub struct ViaAppend;

/// Strategy marker: insert by key identity.
#[derive(Debug)]
pub struct ViaKeyedInsert;

/// Strategy marker: walk to the last node and splice after it.
#[derive(Debug)]
pub struct ViaLinkTail;

/// Terminal marker: the profile answered `Absent` three times. No insert
/// routine exists for it, so it can never reach a run-time path.
#[derive(Debug)]
pub struct NoInsert;

/// The insert routine carried by a strategy marker.
#[diagnostic::on_unimplemented(
    message = "`{C}` exposes no insertion primitive usable by this operation",
    label = "strategy `{Self}` has no insert routine for `{C}`",
    note = "an output container must support tail append, keyed insert, or link-tail insert"
)]
pub trait InsertWith<C: Container> {
    fn insert_one(container: &mut C, value: C::Elem);
}

impl<C: Appendable> InsertWith<C> for ViaAppend {
    #[inline(always)]
    fn insert_one(container: &mut C, value: C::Elem) {
        container.append(value);
    }
}

impl<C: KeyedInsertable> InsertWith<C> for ViaKeyedInsert {
    #[inline(always)]
    fn insert_one(container: &mut C, value: C::Elem) {
        container.insert_keyed(value);
    }
}

impl<C: LinkTailInsertable> InsertWith<C> for ViaLinkTail {
    fn insert_one(container: &mut C, value: C::Elem) {
        // No cached tail: walk the whole chain, O(n) per element added.
        let mut tail = container.before_head();
        while let Some(next) = container.pos_after(tail) {
            tail = next;
        }
        container.insert_after(tail, value);
    }
}

// =============================================================================
// Strategy selection
// =============================================================================

// Priority order: append beats keyed insert beats link-tail insert.
#[doc(hidden)]
pub type LinkOrNone<C> = <<C as InsertCaps>::HasLinkTail as Bool>::If<ViaLinkTail, NoInsert>;
#[doc(hidden)]
pub type KeyedOrLater<C> =
    <<C as InsertCaps>::HasKeyedInsert as Bool>::If<ViaKeyedInsert, LinkOrNone<C>>;

/// The insertion strategy selected for `C`, computed from its [`InsertCaps`]
/// profile.
pub type StrategyOf<C> = <<C as InsertCaps>::HasAppend as Bool>::If<ViaAppend, KeyedOrLater<C>>;

/// The dispatch entry point: insert one produced value into `Self` with the
/// strategy selected for its type.
///
/// Implemented once, for every profiled container whose selected strategy
/// carries an insert routine. A container whose profile answers `Absent`
/// three times is rejected at build time:
///
/// ```compile_fail
/// use uniops::caps::{Container, InsertCaps};
/// use uniops::primitives::Absent;
///
/// #[derive(Default)]
/// struct Opaque(Vec<i32>);
///
/// impl Container for Opaque {
///     type Elem = i32;
/// }
///
/// impl InsertCaps for Opaque {
///     type HasAppend = Absent;
///     type HasKeyedInsert = Absent;
///     type HasLinkTail = Absent;
/// }
///
/// let squares: Opaque = uniops::ops::map_into(&vec![1, 2, 3], |n| n * n);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an operation output",
    note = "`{Self}` needs an `InsertCaps` profile with at least one `Present` answer"
)]
pub trait Emplace: Container {
    fn emplace(&mut self, value: Self::Elem);
}

impl<C> Emplace for C
where
    C: InsertCaps,
    StrategyOf<C>: InsertWith<C>,
{
    #[inline(always)]
    fn emplace(&mut self, value: Self::Elem) {
        <StrategyOf<C> as InsertWith<C>>::insert_one(self, value);
    }
}

/// Free-function form of [`Emplace::emplace`].
#[inline(always)]
pub fn add<C: Emplace>(container: &mut C, value: C::Elem) {
    container.emplace(value);
}

// =============================================================================
// Strategy reflection
// =============================================================================

/// Runtime-readable name of an insertion strategy, for diagnostics and
/// tests.
pub trait Strategy {
    const NAME: &'static str;
}

impl Strategy for ViaAppend {
    const NAME: &'static str = "append";
}

impl Strategy for ViaKeyedInsert {
    const NAME: &'static str = "keyed-insert";
}

impl Strategy for ViaLinkTail {
    const NAME: &'static str = "link-tail";
}

/// Name of the strategy the dispatch layer selected for `C`.
pub fn strategy_of<C>() -> &'static str
where
    C: InsertCaps,
    StrategyOf<C>: Strategy,
{
    <StrategyOf<C> as Strategy>::NAME
}

// =============================================================================
// Size strategies
// =============================================================================

/// Size strategy marker: ask the container, O(1).
#[derive(Debug)]
pub struct ViaFastLen;

/// Size strategy marker: traverse and count, O(n).
#[derive(Debug)]
pub struct ViaTraversal;

/// The counting routine carried by a size strategy marker.
pub trait MeasureWith<C> {
    fn measure(container: &C) -> usize;
}

impl<C: FastSized> MeasureWith<C> for ViaFastLen {
    #[inline(always)]
    fn measure(container: &C) -> usize {
        container.fast_len()
    }
}

impl<C: Elements> MeasureWith<C> for ViaTraversal {
    fn measure(container: &C) -> usize {
        container.elements().count()
    }
}

/// The size strategy selected for `C`, from its [`SizeCaps`] profile.
pub type SizeStrategyOf<C> = <<C as SizeCaps>::HasFastLen as Bool>::If<ViaFastLen, ViaTraversal>;
