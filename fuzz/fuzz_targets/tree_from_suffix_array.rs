// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for suffix tree construction from untrusted arrays.
//!
//! The tree tool takes its suffix array and LCP array from outside. Any
//! permutation and any in-range LCP values must give either a well-formed
//! tree or an error, never a panic. The correct arrays must always build.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqdex::testing::naive_lcp;
use seqdex::{
    build_suffix_array, serialize_edges, Alphabet, EdgeList, SuffixArray, SuffixTree, Text,
};

#[derive(Arbitrary, Debug)]
struct Input {
    text: Vec<u8>,
    swaps: Vec<(u16, u16)>,
    lcp_noise: Vec<u8>,
}

fuzz_target!(|input: Input| {
    if input.text.len() > 500 {
        return;
    }

    let letters: Vec<u8> = input.text.iter().map(|b| b"ACGT"[(b & 3) as usize]).collect();
    let text = Text::with_sentinel(&Alphabet::dna(), &letters).unwrap();
    let n = text.len();

    let sa = build_suffix_array(&text);
    let lcp = naive_lcp(&text, &sa);
    let tree = SuffixTree::build(&text, &sa, &lcp).unwrap();
    assert_eq!(serialize_edges(&EdgeList::from_tree(&tree)).len(), tree.node_count() - 1);

    // Perturb both arrays, keeping the permutation and the LCP bound
    let mut positions = sa.into_inner();
    for &(a, b) in &input.swaps {
        positions.swap(a as usize % n, b as usize % n);
    }
    let mut lcp = lcp;
    for (i, &noise) in input.lcp_noise.iter().enumerate().take(lcp.len()) {
        lcp[i] = (lcp[i] + noise as usize) % n;
    }

    let sa = SuffixArray::from_positions(&text, positions).unwrap();
    if let Ok(tree) = SuffixTree::build(&text, &sa, &lcp) {
        let list = EdgeList::from_tree(&tree);
        assert_eq!(serialize_edges(&list).len(), tree.node_count() - 1);
    }
});
