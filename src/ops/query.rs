//! Searches, predicate tests, membership, and counting.

use crate::caps::Elements;
use crate::caps::SizeCaps;
use crate::dispatch::{Emplace, MeasureWith, SizeStrategyOf};

/// The first element satisfying `pred`, or `None` once the input is
/// exhausted. Searching stops at the first match.
pub fn find<C, P>(input: &C, mut pred: P) -> Option<&C::Elem>
where
    C: Elements,
    P: FnMut(&C::Elem) -> bool,
{
    input.elements().find(|&element| pred(element))
}

/// The elements for which `pred` holds, in original order, in a fresh
/// container of the input's own kind.
pub fn filter<C, P>(input: &C, mut pred: P) -> C
where
    C: Elements + Emplace + Default,
    C::Elem: Clone,
    P: FnMut(&C::Elem) -> bool,
{
    let mut out = C::default();
    for element in input.elements() {
        if pred(element) {
            out.emplace(element.clone());
        }
    }
    out
}

/// Complement of [`filter`]: the elements for which `pred` does not hold.
pub fn reject<C, P>(input: &C, mut pred: P) -> C
where
    C: Elements + Emplace + Default,
    C::Elem: Clone,
    P: FnMut(&C::Elem) -> bool,
{
    filter(input, move |element| !pred(element))
}

/// True iff `pred` holds for every element. Vacuously true on empty input;
/// stops at the first failure.
pub fn every<C, P>(input: &C, pred: P) -> bool
where
    C: Elements,
    P: FnMut(&C::Elem) -> bool,
{
    input.elements().all(pred)
}

/// True iff `pred` holds for at least one element. Vacuously false on empty
/// input; stops at the first success.
pub fn some<C, P>(input: &C, pred: P) -> bool
where
    C: Elements,
    P: FnMut(&C::Elem) -> bool,
{
    input.elements().any(pred)
}

/// True iff some element compares equal to `value` under the element type's
/// own equality.
pub fn contains<C>(input: &C, value: &C::Elem) -> bool
where
    C: Elements,
    C::Elem: PartialEq,
{
    input.elements().any(|element| element == value)
}

/// Element count: O(1) when the container reports its own size, otherwise
/// by traversal. The choice is fixed at build time from the [`SizeCaps`]
/// profile, mirroring the insert dispatch.
pub fn size<C>(input: &C) -> usize
where
    C: SizeCaps,
    SizeStrategyOf<C>: MeasureWith<C>,
{
    <SizeStrategyOf<C> as MeasureWith<C>>::measure(input)
}
