// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Brute-force oracles shared across unit, property and integration tests.
//!
//! This module is always compiled but hidden from documentation. Everything
//! here is quadratic or worse on purpose: it is the reference the fast
//! builders are checked against, so it has to be obviously correct.

#![doc(hidden)]

use crate::alphabet::{Alphabet, Rank, Text};
use crate::index::{build_suffix_array, SuffixArray};
use crate::tree::SuffixTree;

/// Suffix array by sorting the suffixes directly. O(n² log n).
pub fn naive_suffix_array(text: &Text) -> Vec<usize> {
    let mut order: Vec<usize> = (0..text.len()).collect();
    order.sort_by(|&a, &b| text.suffix(a).cmp(text.suffix(b)));
    order
}

/// LCP array of adjacent suffixes in `order`, length `n - 1`.
pub fn naive_lcp(text: &Text, order: &[usize]) -> Vec<usize> {
    order
        .windows(2)
        .map(|pair| {
            text.suffix(pair[0])
                .iter()
                .zip(text.suffix(pair[1]))
                .take_while(|(a, b)| a == b)
                .count()
        })
        .collect()
}

/// Every start position of `pattern` in `text`, ascending.
pub fn naive_occurrences(text: &Text, pattern: &[Rank]) -> Vec<usize> {
    (0..text.len())
        .filter(|&pos| text.suffix(pos).starts_with(pattern))
        .collect()
}

/// DNA text from letters, sentinel appended.
///
/// # Panics
/// Panics on anything outside `ACGT`.
pub fn dna_text(letters: &str) -> Text {
    Text::with_sentinel(&Alphabet::dna(), letters.as_bytes()).expect("test text must be DNA")
}

/// Suffix array plus a tree built from the oracle LCP.
///
/// # Panics
/// Panics if construction fails, which is a bug in the builder.
pub fn build_tree(text: &Text) -> (SuffixArray, SuffixTree) {
    let sa = build_suffix_array(text);
    let lcp = naive_lcp(text, &sa);
    let tree = SuffixTree::build(text, &sa, &lcp).expect("oracle lcp must build a tree");
    (sa, tree)
}
