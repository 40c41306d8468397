//! A small report pipeline over record data: the whole operations surface
//! on one dataset.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use uniops::ops::{
    contains, every, filter, map_into, max_by_key, min_by_key, pluck, reduce, reject,
    shuffle_with, size, some, sort_by_key,
};

#[derive(Debug, Clone)]
struct Word {
    text: &'static str,
    hits: u32,
}

fn word(text: &'static str, hits: u32) -> Word {
    Word { text, hits }
}

fn main() {
    let words = vec![
        word("tern", 14),
        word("gull", 31),
        word("skua", 3),
        word("fulmar", 9),
        word("gannet", 31),
        word("petrel", 5),
    ];

    println!("=== Word report over {} entries ===\n", size(&words));

    let common = filter(&words, |w| w.hits >= 10);
    let rare = reject(&words, |w| w.hits >= 10);
    println!("common: {:?}", pluck(&common, |w| &w.text));
    println!("rare:   {:?}", pluck(&rare, |w| &w.text));

    let total: u32 = reduce(&words, |memo, w| memo + w.hits, 0);
    println!("total hits: {total}");

    let letters: BTreeSet<char> = map_into(&words, |w| w.text.chars().next().unwrap());
    println!("distinct initials: {letters:?}");

    let by_hits = sort_by_key(&words, |w| w.hits);
    println!("by hits: {:?}", pluck(&by_hits, |w| &w.text));

    if let Some(top) = max_by_key(&words, |w| w.hits) {
        println!("most seen:  {} ({} hits)", top.text, top.hits);
    }
    if let Some(bottom) = min_by_key(&words, |w| w.hits) {
        println!("least seen: {} ({} hits)", bottom.text, bottom.hits);
    }

    println!(
        "any above 30: {}; all above 2: {}",
        some(&words, |w| w.hits > 30),
        every(&words, |w| w.hits > 2),
    );

    let texts = pluck(&words, |w| &w.text);
    println!("has 'skua': {}", contains(&texts, &"skua"));

    let mut rng = StdRng::seed_from_u64(2026);
    let drawn = shuffle_with(&texts, &mut rng);
    println!("draw order: {drawn:?}");
}
