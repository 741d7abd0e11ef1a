//! Property tests for binary search pattern matching.
//!
//! Verifies that:
//! 1. Every reported position really starts an occurrence
//! 2. No occurrence is missed
//! 3. Multi-pattern results are the union of single-pattern results

use super::common::{dna_text, naive_occurrences, pattern_strategy, text_strategy};
use proptest::prelude::*;
use seqdex::{
    build_suffix_array, compare, find_occurrences, match_range, Alphabet, Comparison,
    OccurrenceSet, Pattern,
};
use std::collections::BTreeSet;

proptest! {
    /// Property: Matcher agrees with a brute-force scan
    #[test]
    fn prop_occurrences_match_oracle(letters in text_strategy(), raw in pattern_strategy()) {
        let text = dna_text(&letters);
        let sa = build_suffix_array(&text);
        let pattern = Pattern::parse(&Alphabet::dna(), raw.as_bytes()).unwrap();

        let mut found = find_occurrences(&pattern, &text, &sa);
        found.sort_unstable();
        prop_assert_eq!(found, naive_occurrences(&text, pattern.ranks()));
    }

    /// Property: Substrings of the text are always found at their origin
    #[test]
    fn prop_substring_found(
        letters in "[ACGT]{1,50}",
        start_frac in 0.0f64..1.0,
        len in 1usize..10,
    ) {
        let text = dna_text(&letters);
        let sa = build_suffix_array(&text);
        let start = ((letters.len() as f64) * start_frac) as usize;
        let end = (start + len).min(letters.len());
        prop_assume!(start < end);

        let pattern = Pattern::parse(&Alphabet::dna(), &letters.as_bytes()[start..end]).unwrap();
        prop_assert!(find_occurrences(&pattern, &text, &sa).contains(&start));
    }

    /// Property: The range splits the array into greater, match, less
    #[test]
    fn prop_match_range_partitions(letters in text_strategy(), raw in pattern_strategy()) {
        let text = dna_text(&letters);
        let sa = build_suffix_array(&text);
        let pattern = Pattern::parse(&Alphabet::dna(), raw.as_bytes()).unwrap();
        let range = match_range(pattern.ranks(), &text, &sa);

        for (i, &pos) in sa.iter().enumerate() {
            let expected = if i < range.start {
                Comparison::PatternGreater
            } else if i < range.end {
                Comparison::Match
            } else {
                Comparison::PatternLess
            };
            prop_assert_eq!(compare(pattern.ranks(), &text, pos), expected);
        }
    }

    /// Property: OccurrenceSet is the union over its patterns
    #[test]
    fn prop_occurrence_set_is_union(
        letters in text_strategy(),
        raws in prop::collection::vec(pattern_strategy(), 0..8),
    ) {
        let dna = Alphabet::dna();
        let text = dna_text(&letters);
        let sa = build_suffix_array(&text);

        let mut set = OccurrenceSet::new(text.len());
        let mut expected = BTreeSet::new();
        for raw in &raws {
            let pattern = Pattern::parse(&dna, raw.as_bytes()).unwrap();
            set.insert_pattern(&pattern, &text, &sa);
            expected.extend(naive_occurrences(&text, pattern.ranks()));
        }

        prop_assert_eq!(set.positions().collect::<Vec<_>>(), expected.into_iter().collect::<Vec<_>>());
        prop_assert!(!set.contains(text.len() - 1));
    }
}
