// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the line formats of both tools.
//!
//! Whatever arrives on stdin, parsing and running either tool returns a
//! result or an error. Huge counts, negative numbers, stray sentinels and
//! non-UTF-8 input included.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seqdex::io::{parse_match_input, parse_tree_input, run_match, run_tree};
use seqdex::Alphabet;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let dna = Alphabet::dna();

    if let Ok(parsed) = parse_match_input(&dna, input) {
        let occurrences = run_match(&parsed);
        assert!(occurrences.positions().all(|p| p < parsed.text.len()));
    }

    if let Ok(parsed) = parse_tree_input(&dna, input) {
        let _ = run_tree(&parsed, false);
        let _ = run_tree(&parsed, true);
    }
});
