//! Element-wise transforms and projections.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::caps::Elements;
use crate::dispatch::Emplace;

/// Apply `f` to every element in forward order.
///
/// Pure side-effecting iteration; empty input is a no-op.
pub fn each<C, F>(input: &C, f: F)
where
    C: Elements,
    F: FnMut(&C::Elem),
{
    input.elements().for_each(f);
}

/// Transform every element into a fresh output container of the caller's
/// choosing.
///
/// The produced value type must equal the output's declared element type;
/// each value is routed through the dispatch layer's insert entry point, so
/// any container with an insertion capability works as `Out`.
///
/// ```
/// use std::collections::BTreeSet;
///
/// let squares: BTreeSet<i32> = uniops::ops::map_into(&vec![3, 1, 3], |n| n * n);
/// assert_eq!(squares.into_iter().collect::<Vec<_>>(), vec![1, 9]);
/// ```
pub fn map_into<Out, C, F>(input: &C, mut f: F) -> Out
where
    C: Elements,
    Out: Emplace + Default,
    F: FnMut(&C::Elem) -> Out::Elem,
{
    let mut out = Out::default();
    for element in input.elements() {
        out.emplace(f(element));
    }
    out
}

/// [`map_into`] with the output fixed to the ordered-sequence default.
///
/// A produced value that does not match the element type of the requested
/// output is a build error, not a conversion:
///
/// ```compile_fail
/// let lengths: Vec<String> = uniops::ops::map(&vec!["a", "bc"], |s| s.len());
/// ```
///
/// ```
/// assert_eq!(uniops::ops::map(&vec![1, 2, 3], |n| n * 10), vec![10, 20, 30]);
/// ```
#[cfg(feature = "alloc")]
pub fn map<C, F, R>(input: &C, f: F) -> Vec<R>
where
    C: Elements,
    F: FnMut(&C::Elem) -> R,
{
    map_into(input, f)
}

/// Call a member operation on every element and collect the results in
/// input order.
///
/// Member operations are expressed as accessor closures; extra arguments
/// ride in the closure's captures. A member operation that returns nothing
/// has no results to collect; route it through [`each`] instead.
///
/// ```
/// let words = vec!["tern".to_string(), "gull".to_string()];
/// assert_eq!(uniops::ops::invoke(&words, |w| w.to_uppercase()), vec!["TERN", "GULL"]);
/// ```
#[cfg(feature = "alloc")]
pub fn invoke<C, F, R>(input: &C, method: F) -> Vec<R>
where
    C: Elements,
    F: FnMut(&C::Elem) -> R,
{
    map_into(input, method)
}

/// [`invoke`] with a caller-chosen output container.
pub fn invoke_into<Out, C, F>(input: &C, method: F) -> Out
where
    C: Elements,
    Out: Emplace + Default,
    F: FnMut(&C::Elem) -> Out::Elem,
{
    map_into(input, method)
}

/// Project one member field out of every element, in input order.
///
/// The output's element type is the field's declared type.
///
/// ```
/// struct Track {
///     title: &'static str,
///     secs: u32,
/// }
///
/// let tracks = vec![
///     Track { title: "Alpha", secs: 191 },
///     Track { title: "Beta", secs: 204 },
/// ];
///
/// assert_eq!(uniops::ops::pluck(&tracks, |t| &t.title), vec!["Alpha", "Beta"]);
/// assert_eq!(uniops::ops::pluck(&tracks, |t| &t.secs), vec![191, 204]);
/// ```
#[cfg(feature = "alloc")]
pub fn pluck<C, F, R>(input: &C, field: F) -> Vec<R>
where
    C: Elements,
    R: Clone,
    F: FnMut(&C::Elem) -> &R,
{
    pluck_into(input, field)
}

/// [`pluck`] with a caller-chosen output container.
pub fn pluck_into<Out, C, F>(input: &C, mut field: F) -> Out
where
    C: Elements,
    Out: Emplace + Default,
    Out::Elem: Clone,
    F: FnMut(&C::Elem) -> &Out::Elem,
{
    let mut out = Out::default();
    for element in input.elements() {
        out.emplace(field(element).clone());
    }
    out
}
