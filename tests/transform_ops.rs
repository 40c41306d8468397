//! each, map, invoke, pluck and their `_into` forms.

mod common;

use std::collections::{BTreeMap, BTreeSet, HashSet, LinkedList, VecDeque};

use common::{Chain, sample_tracks};
use uniops::ops::{each, invoke, invoke_into, map, map_into, pluck, pluck_into};

// =============================================================================
// each
// =============================================================================

#[test]
fn test_each_visits_in_forward_order() {
    let mut seen = Vec::new();
    each(&vec![1, 2, 3], |n| seen.push(*n));
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_each_on_empty_input_is_a_no_op() {
    let mut calls = 0;
    each(&Vec::<i32>::new(), |_| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn test_each_accepts_arrays() {
    let mut sum = 0;
    each(&[10, 20, 30], |n| sum += n);
    assert_eq!(sum, 60);
}

// =============================================================================
// map / map_into
// =============================================================================

#[test]
fn test_map_defaults_to_an_ordered_sequence() {
    assert_eq!(map(&vec![1, 2, 3], |n| n * 10), vec![10, 20, 30]);
}

#[test]
fn test_map_preserves_input_order() {
    let words = vec!["tern", "gull", "skua"];
    assert_eq!(map(&words, |w| w.len()), vec![4, 4, 4]);
    assert_eq!(
        map(&words, |w| w.to_uppercase()),
        vec!["TERN", "GULL", "SKUA"]
    );
}

#[test]
fn test_map_on_empty_input_yields_empty_output() {
    assert_eq!(map(&Vec::<i32>::new(), |n| n + 1), Vec::<i32>::new());
}

#[test]
fn test_map_into_every_output_shape() {
    let input = vec![3, 1, 3, 2];

    let as_vec: Vec<i32> = map_into(&input, |n| n * n);
    assert_eq!(as_vec, vec![9, 1, 9, 4]);

    let as_deque: VecDeque<i32> = map_into(&input, |n| n * n);
    assert_eq!(as_deque.iter().copied().collect::<Vec<_>>(), vec![9, 1, 9, 4]);

    let as_list: LinkedList<i32> = map_into(&input, |n| n * n);
    assert_eq!(as_list.iter().copied().collect::<Vec<_>>(), vec![9, 1, 9, 4]);

    // Keyed output: the set's own semantics collapse the duplicate.
    let as_set: BTreeSet<i32> = map_into(&input, |n| n * n);
    assert_eq!(as_set.iter().copied().collect::<Vec<_>>(), vec![1, 4, 9]);

    let as_hash: HashSet<i32> = map_into(&input, |n| n * n);
    assert_eq!(as_hash.len(), 3);

    // Link-tail output: O(n) walk per element, still input order.
    let as_chain: Chain<i32> = map_into(&input, |n| n * n);
    assert_eq!(as_chain.to_vec(), vec![9, 1, 9, 4]);
}

#[test]
fn test_map_into_string_collects_chars() {
    let words = vec!["tern", "gull", "skua"];
    let initials: String = map_into(&words, |w| w.chars().next().unwrap());
    assert_eq!(initials, "tgs");
}

#[test]
fn test_map_into_map_pairs_produced_values() {
    let words = vec!["tern", "gull"];
    let lengths: BTreeMap<String, usize> = map_into(&words, |w| (w.to_string(), w.len()));
    assert_eq!(lengths.get("tern"), Some(&4));
    assert_eq!(lengths.get("gull"), Some(&4));
}

#[test]
fn test_map_reads_sets_in_their_own_order() {
    let input: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
    assert_eq!(map(&input, |n| n * 10), vec![10, 20, 30]);
}

#[test]
fn test_map_leaves_the_input_untouched() {
    let input = vec![1, 2, 3];
    let _doubled = map(&input, |n| n * 2);
    assert_eq!(input, vec![1, 2, 3]);
}

// =============================================================================
// invoke
// =============================================================================

#[test]
fn test_invoke_collects_member_call_results() {
    let words = vec!["tern".to_string(), "gull".to_string()];
    assert_eq!(invoke(&words, |w| w.to_uppercase()), vec!["TERN", "GULL"]);
}

#[test]
fn test_invoke_passes_extra_arguments_via_captures() {
    let words = vec!["tern".to_string(), "gull".to_string()];
    let prefix = "sea-";
    assert_eq!(
        invoke(&words, |w| format!("{prefix}{w}")),
        vec!["sea-tern", "sea-gull"]
    );
}

#[test]
fn test_invoke_into_routes_through_dispatch() {
    let words = vec!["tern", "gull", "tern"];
    let unique: BTreeSet<String> = invoke_into(&words, |w| w.to_string());
    assert_eq!(unique.len(), 2);
}

// =============================================================================
// pluck
// =============================================================================

#[test]
fn test_pluck_projects_fields_in_input_order() {
    let tracks = sample_tracks();
    assert_eq!(
        pluck(&tracks, |t| &t.title),
        vec!["Alpha", "Beta", "Gamma", "Delta"]
    );
    assert_eq!(pluck(&tracks, |t| &t.secs), vec![191, 204, 160, 204]);
}

#[test]
fn test_pluck_into_keyed_output_dedupes() {
    let tracks = sample_tracks();
    let durations: BTreeSet<u32> = pluck_into(&tracks, |t| &t.secs);
    assert_eq!(durations.iter().copied().collect::<Vec<_>>(), vec![160, 191, 204]);
}
