//! Line sorter over real worker threads: sortedness after exactly `size`
//! passes, for any permutation and both directions, and multiset
//! preservation across the whole pass sequence.

mod util;

use itertools::Itertools;
use mesh_shear::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use util::{assert_permutation, recs, sort_line};

#[test]
fn every_permutation_of_four_sorts_ascending() {
    let base = recs(&["alpha", "bravo", "charlie", "delta"]);
    for perm in base.iter().copied().permutations(base.len()) {
        let sorted = sort_line(&perm, Direction::Ascending);
        assert!(
            Direction::Ascending.is_sorted(&sorted),
            "input {perm:?} gave {sorted:?}"
        );
        assert_permutation(&sorted, &base);
    }
}

#[test]
fn every_permutation_of_four_sorts_descending() {
    let base = recs(&["alpha", "bravo", "charlie", "delta"]);
    for perm in base.iter().copied().permutations(base.len()) {
        let sorted = sort_line(&perm, Direction::Descending);
        assert!(
            Direction::Descending.is_sorted(&sorted),
            "input {perm:?} gave {sorted:?}"
        );
        assert_permutation(&sorted, &base);
    }
}

#[test]
fn shuffled_lines_of_eight_sort_both_ways() {
    let base = recs(&[
        "ant", "bee", "cow", "dog", "eel", "fox", "gnu", "hen",
    ]);
    let mut rng = SmallRng::seed_from_u64(0xBADC0DE);
    for _ in 0..50 {
        let mut line = base.clone();
        line.shuffle(&mut rng);
        let asc = sort_line(&line, Direction::Ascending);
        assert!(Direction::Ascending.is_sorted(&asc), "from {line:?}");
        assert_permutation(&asc, &base);

        let desc = sort_line(&line, Direction::Descending);
        assert!(Direction::Descending.is_sorted(&desc), "from {line:?}");
        assert_permutation(&desc, &base);
    }
}

#[test]
fn duplicate_records_survive_sorting() {
    let line = recs(&["mu", "mu", "alpha", "mu", "alpha", "zeta"]);
    let sorted = sort_line(&line, Direction::Ascending);
    assert!(Direction::Ascending.is_sorted(&sorted));
    assert_permutation(&sorted, &line);
}

#[test]
fn two_element_line() {
    let sorted = sort_line(&recs(&["zulu", "alpha"]), Direction::Ascending);
    assert_eq!(sorted, recs(&["alpha", "zulu"]));
    let sorted = sort_line(&recs(&["alpha", "zulu"]), Direction::Descending);
    assert_eq!(sorted, recs(&["zulu", "alpha"]));
}

#[test]
fn already_sorted_line_is_unchanged() {
    let line = recs(&["a", "b", "c", "d", "e"]);
    assert_eq!(sort_line(&line, Direction::Ascending), line);
}
