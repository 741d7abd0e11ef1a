// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for suffix array construction and pattern matching.
//!
//! Arbitrary bytes become a DNA text (two bits per base). The built suffix
//! array must equal the brute-force sort, and every pattern must be found
//! exactly where a scan finds it. Debug contracts run on every round.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqdex::testing::{naive_occurrences, naive_suffix_array};
use seqdex::{build_suffix_array, find_occurrences, Alphabet, Pattern, Text};

#[derive(Arbitrary, Debug)]
struct Input {
    text: Vec<u8>,
    pattern: Vec<u8>,
}

fn to_dna(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|b| b"ACGT"[(b & 3) as usize]).collect()
}

fuzz_target!(|input: Input| {
    if input.text.len() > 2000 || input.pattern.len() > 20 {
        return;
    }

    let dna = Alphabet::dna();
    let text = Text::with_sentinel(&dna, &to_dna(&input.text)).unwrap();
    let sa = build_suffix_array(&text);
    assert_eq!(sa.as_slice(), naive_suffix_array(&text).as_slice());

    let pattern = Pattern::parse(&dna, &to_dna(&input.pattern)).unwrap();
    let mut found = find_occurrences(&pattern, &text, &sa);
    found.sort_unstable();
    assert_eq!(found, naive_occurrences(&text, pattern.ranks()));
});
