//! Which insertion strategy does each output type get?
//!
//! Walks the classification + dispatch path end to end: profile answers
//! read back with `Bool::VALUE`, the selected strategy with `strategy_of`,
//! then one transform routed into four differently-shaped outputs.

use std::collections::{BTreeMap, BTreeSet, HashSet, LinkedList, VecDeque};

use uniops::caps::{Container, Elements, InsertCaps, LinkTailInsertable};
use uniops::dispatch::{Strategy, StrategyOf, strategy_of};
use uniops::ops::map_into;
use uniops::primitives::{Absent, Bool, Present};

// =============================================================================
// A singly-linked chain: the one shape std does not cover
// =============================================================================

// No tail append, no keyed insert; the only way in is a position handle.
// The dispatch layer has to fall through to the link-tail strategy.
struct Chain<T> {
    head: Option<Box<Link<T>>>,
    len: usize,
}

struct Link<T> {
    value: T,
    next: Option<Box<Link<T>>>,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Chain { head: None, len: 0 }
    }
}

impl<T> Container for Chain<T> {
    type Elem = T;
}

struct ChainIter<'a, T>(Option<&'a Link<T>>);

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let link = self.0?;
        self.0 = link.next.as_deref();
        Some(&link.value)
    }
}

impl<T> Elements for Chain<T> {
    type Iter<'a>
        = ChainIter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn elements(&self) -> Self::Iter<'_> {
        ChainIter(self.head.as_deref())
    }
}

impl<T> LinkTailInsertable for Chain<T> {
    type Pos = usize;

    fn before_head(&self) -> usize {
        0
    }

    fn pos_after(&self, pos: usize) -> Option<usize> {
        if pos < self.len { Some(pos + 1) } else { None }
    }

    fn insert_after(&mut self, pos: usize, value: T) {
        let mut slot = &mut self.head;
        for _ in 0..pos {
            slot = &mut slot.as_mut().unwrap().next;
        }
        let rest = slot.take();
        *slot = Some(Box::new(Link { value, next: rest }));
        self.len += 1;
    }
}

impl<T> InsertCaps for Chain<T> {
    type HasAppend = Absent;
    type HasKeyedInsert = Absent;
    type HasLinkTail = Present;
}

// =============================================================================
// Walkthrough
// =============================================================================

fn profile<C>(name: &str)
where
    C: InsertCaps,
    StrategyOf<C>: Strategy,
{
    println!(
        "  {name:<22} append={:<5} keyed={:<5} link-tail={:<5} -> {}",
        <C::HasAppend as Bool>::VALUE,
        <C::HasKeyedInsert as Bool>::VALUE,
        <C::HasLinkTail as Bool>::VALUE,
        strategy_of::<C>(),
    );
}

fn main() {
    println!("=== Capability profiles and selected strategies ===\n");
    profile::<Vec<i32>>("Vec<i32>");
    profile::<VecDeque<i32>>("VecDeque<i32>");
    profile::<LinkedList<i32>>("LinkedList<i32>");
    profile::<String>("String");
    profile::<BTreeSet<i32>>("BTreeSet<i32>");
    profile::<HashSet<i32>>("HashSet<i32>");
    profile::<BTreeMap<i32, i32>>("BTreeMap<i32, i32>");
    profile::<Chain<i32>>("Chain<i32>");

    println!("\n=== One transform, four output shapes ===\n");
    let input = vec![3, 1, 3, 2];
    println!("  input:          {input:?}");

    let doubled: Vec<i32> = map_into(&input, |n| n * 2);
    println!("  Vec (append):   {doubled:?}");

    let unique: BTreeSet<i32> = map_into(&input, |n| n * 2);
    println!("  BTreeSet (keyed, duplicate collapsed): {unique:?}");

    let squares: BTreeMap<i32, i32> = map_into(&input, |n| (*n, n * n));
    println!("  BTreeMap (keyed, pair split): {squares:?}");

    let chained: Chain<i32> = map_into(&input, |n| n * 2);
    let walked: Vec<i32> = chained.elements().copied().collect();
    println!("  Chain (link-tail, O(n) walk per insert): {walked:?}");
}
