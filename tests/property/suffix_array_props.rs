//! Property tests for suffix array construction.
//!
//! Verifies that:
//! 1. The result is a permutation of all positions
//! 2. Adjacent suffixes are strictly increasing
//! 3. The result equals the brute-force sort

use super::common::{assert_suffix_array_well_formed, dna_text, naive_suffix_array, text_strategy};
use proptest::prelude::*;
use seqdex::{build_suffix_array, is_suffix_array_sorted, Alphabet, Text};

proptest! {
    /// Property: Every position appears exactly once
    #[test]
    fn prop_suffix_array_is_permutation(letters in text_strategy()) {
        let text = dna_text(&letters);
        let sa = build_suffix_array(&text);
        prop_assert_eq!(sa.len(), text.len());

        let mut sorted = sa.to_vec();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..text.len()).collect::<Vec<_>>());
    }

    /// Property: Suffixes come out in rank order
    #[test]
    fn prop_suffix_array_is_sorted(letters in text_strategy()) {
        let text = dna_text(&letters);
        let sa = build_suffix_array(&text);
        prop_assert!(is_suffix_array_sorted(&text, &sa));
        assert_suffix_array_well_formed(&text, &sa);
    }

    /// Property: Prefix doubling agrees with sorting suffixes directly
    #[test]
    fn prop_suffix_array_matches_oracle(letters in text_strategy()) {
        let text = dna_text(&letters);
        let sa = build_suffix_array(&text);
        let expected = naive_suffix_array(&text);
        prop_assert_eq!(sa.as_slice(), expected.as_slice());
    }

    /// Property: Sentinel suffix is always first
    #[test]
    fn prop_sentinel_first(letters in text_strategy()) {
        let text = dna_text(&letters);
        let sa = build_suffix_array(&text);
        prop_assert_eq!(sa[0], text.len() - 1);
    }

    /// Property: Reordering the alphabet reorders suffixes by the new ranks
    #[test]
    fn prop_custom_alphabet_matches_oracle(letters in "[ACGT]{0,30}") {
        let reversed = Alphabet::new(b'$', b"TGCA").unwrap();
        let text = Text::with_sentinel(&reversed, letters.as_bytes()).unwrap();
        let sa = build_suffix_array(&text);
        let expected = naive_suffix_array(&text);
        prop_assert_eq!(sa.as_slice(), expected.as_slice());
    }
}
