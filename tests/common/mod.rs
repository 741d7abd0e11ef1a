//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;
use seqdex::{SuffixArray, Text};

// Re-export canonical oracles from seqdex::testing
pub use seqdex::testing::{build_tree, dna_text, naive_lcp, naive_occurrences, naive_suffix_array};

// ============================================================================
// FIXTURES
// ============================================================================

/// Letters of the worked example, sentinel not included.
pub const EXAMPLE_LETTERS: &str = "ACACAA";

/// Suffix array of `ACACAA$`.
pub const EXAMPLE_SA: [usize; 7] = [6, 5, 4, 2, 0, 3, 1];

/// LCP array of `ACACAA$`.
pub const EXAMPLE_LCP: [usize; 6] = [0, 1, 1, 3, 0, 2];

/// Tree tool output for `ACACAA$`.
pub const EXAMPLE_EDGES: [(usize, usize); 10] = [
    (6, 7),
    (5, 6),
    (6, 7),
    (5, 7),
    (3, 5),
    (5, 7),
    (3, 7),
    (3, 5),
    (5, 7),
    (3, 7),
];

// ============================================================================
// STRATEGIES
// ============================================================================

/// DNA letters, up to 50 of them.
pub fn dna_letters() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ACGT]{0,50}").unwrap()
}

/// Repetitive DNA: few distinct letters, so long shared prefixes are common.
pub fn repetitive_letters() -> impl Strategy<Value = String> {
    prop::string::string_regex("[AC]{0,40}").unwrap()
}

/// Mix of uniform and repetitive texts.
pub fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => dna_letters(),
        1 => repetitive_letters(),
    ]
}

/// A query pattern, 1 to 10 letters.
pub fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ACGT]{1,10}").unwrap()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Panic unless `sa` is the suffix array of `text`.
pub fn assert_suffix_array_well_formed(text: &Text, sa: &SuffixArray) {
    let n = text.len();
    assert_eq!(sa.len(), n, "suffix array length");

    let mut seen = vec![false; n];
    for &pos in sa.iter() {
        assert!(pos < n, "position {} out of range", pos);
        assert!(!seen[pos], "position {} repeated", pos);
        seen[pos] = true;
    }

    for i in 1..n {
        assert!(
            text.suffix(sa[i - 1]) < text.suffix(sa[i]),
            "suffixes {} and {} out of order",
            sa[i - 1],
            sa[i]
        );
    }
}
