//! Algebraic properties over arbitrary inputs.

use proptest::prelude::*;
use uniops::ops::{contains, every, filter, map, reduce, reject, size, some, sort_by_key};

proptest! {
    /// Mapping never changes the element count.
    #[test]
    fn prop_map_preserves_size(input: Vec<i64>) {
        prop_assert_eq!(size(&map(&input, |n| n.wrapping_mul(3))), size(&input));
    }

    /// Counting with a fold agrees with size.
    #[test]
    fn prop_reduce_counts_elements(input: Vec<u8>) {
        prop_assert_eq!(reduce(&input, |memo, _| memo + 1, 0usize), size(&input));
    }

    /// filter and reject split the input into two disjoint parts that
    /// together reproduce its multiset.
    #[test]
    fn prop_filter_and_reject_partition(input: Vec<i64>) {
        let kept = filter(&input, |n| n % 3 == 0);
        let dropped = reject(&input, |n| n % 3 == 0);

        prop_assert!(kept.iter().all(|n| n % 3 == 0));
        prop_assert!(dropped.iter().all(|n| n % 3 != 0));

        let mut merged = [kept, dropped].concat();
        merged.sort_unstable();
        let mut expected = input.clone();
        expected.sort_unstable();
        prop_assert_eq!(merged, expected);
    }

    /// De Morgan duality between the universal and existential tests.
    #[test]
    fn prop_every_is_dual_to_some(input: Vec<i64>) {
        prop_assert_eq!(
            every(&input, |n| n % 2 == 0),
            !some(&input, |n| n % 2 != 0)
        );
    }

    /// Membership is existence of an equal element.
    #[test]
    fn prop_contains_is_some_with_equality(input: Vec<u16>, needle: u16) {
        prop_assert_eq!(
            contains(&input, &needle),
            some(&input, |n| *n == needle)
        );
    }

    /// Sorting is idempotent and order-independent in its result.
    #[test]
    fn prop_sort_by_key_is_idempotent(input: Vec<i32>) {
        let once = sort_by_key(&input, |&n| n);
        let twice = sort_by_key(&once, |&n| n);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.windows(2).all(|w| w[0] <= w[1]));
    }
}
