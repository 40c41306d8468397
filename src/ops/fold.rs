//! Left and right folds.

use crate::caps::{BidiElements, Elements};

/// Left fold: `memo = f(memo, element)` in forward order, starting from
/// `seed`. Empty input returns the seed unchanged.
///
/// ```
/// assert_eq!(uniops::ops::reduce(&vec![1, 2, 3], |memo, n| memo + n, 0), 6);
/// ```
pub fn reduce<C, M, F>(input: &C, mut f: F, seed: M) -> M
where
    C: Elements,
    F: FnMut(M, &C::Elem) -> M,
{
    let mut memo = seed;
    for element in input.elements() {
        memo = f(memo, element);
    }
    memo
}

/// Right fold: [`reduce`] in reverse order. Requires reverse traversal,
/// which the double-ended sequences and fixed-size arrays provide.
///
/// Produces the mirror image of [`reduce`] whenever `f` is order-sensitive:
///
/// ```
/// let collect = |mut memo: Vec<i32>, n: &i32| {
///     memo.push(*n);
///     memo
/// };
///
/// assert_eq!(uniops::ops::reduce(&[1, 2, 3], collect, Vec::new()), vec![1, 2, 3]);
/// assert_eq!(uniops::ops::reduce_right(&[1, 2, 3], collect, Vec::new()), vec![3, 2, 1]);
/// ```
pub fn reduce_right<C, M, F>(input: &C, mut f: F, seed: M) -> M
where
    C: BidiElements,
    F: FnMut(M, &C::Elem) -> M,
{
    let mut memo = seed;
    for element in input.elements_rev() {
        memo = f(memo, element);
    }
    memo
}
