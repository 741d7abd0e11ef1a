//! Suffix array construction against fixed cases and the oracle.

use super::common::{
    assert_suffix_array_well_formed, dna_text, naive_suffix_array, EXAMPLE_LETTERS, EXAMPLE_SA,
};
use seqdex::{
    build_suffix_array, is_suffix_array_sorted, Alphabet, SeqdexError, SortedSuffixArray,
    SuffixArray, Text,
};

#[test]
fn test_worked_example() {
    seqdex::logging::test();
    let text = dna_text(EXAMPLE_LETTERS);
    let sa = build_suffix_array(&text);
    assert_eq!(sa.as_slice(), &EXAMPLE_SA);
    assert_eq!(sa.as_slice(), naive_suffix_array(&text).as_slice());
}

#[test]
fn test_fixed_cases_match_oracle() {
    for letters in [
        "",
        "A",
        "GATTACA",
        "AAAAAAAA",
        "ACGTACGTACGT",
        "TTTTGGGGCCCCAAAA",
        "CATCATCATCAT",
        "AACCAACCAACCAAC",
    ] {
        let text = dna_text(letters);
        let sa = build_suffix_array(&text);
        assert_suffix_array_well_formed(&text, &sa);
        assert_eq!(sa.as_slice(), naive_suffix_array(&text).as_slice(), "{letters}");
    }
}

#[test]
fn test_sentinel_sorts_first() {
    let text = dna_text("TGCA");
    let sa = build_suffix_array(&text);
    assert_eq!(sa[0], text.len() - 1);
}

#[test]
fn test_custom_alphabet_orders_by_rank() {
    // T < G < C < A, the reverse of code point order
    let alphabet = Alphabet::new(b'#', b"TGCA").unwrap();
    let text = Text::new(&alphabet, "ACGT#").unwrap();
    let sa = build_suffix_array(&text);
    assert_eq!(sa.as_slice(), &[4, 3, 2, 1, 0]);
    assert!(is_suffix_array_sorted(&text, &sa));
}

#[test]
fn test_binary_alphabet() {
    let alphabet = Alphabet::new(b'.', b"01").unwrap();
    let text = Text::new(&alphabet, "0110100110010110.").unwrap();
    let sa = build_suffix_array(&text);
    assert_suffix_array_well_formed(&text, &sa);
}

#[test]
fn test_text_validation_errors() {
    let dna = Alphabet::dna();
    assert!(matches!(
        Text::new(&dna, "ACNT$"),
        Err(SeqdexError::UnknownSymbol { symbol: 'N', position: 2 })
    ));
    assert!(matches!(
        Text::new(&dna, "AC$T$"),
        Err(SeqdexError::MisplacedSentinel { position: 2, last: 4 })
    ));
    assert!(matches!(
        Text::new(&dna, "ACGT"),
        Err(SeqdexError::MissingSentinel { sentinel: '$' })
    ));
    assert!(matches!(Text::new(&dna, ""), Err(SeqdexError::EmptyText)));
}

#[test]
fn test_is_suffix_array_sorted_detects_swaps() {
    let text = dna_text(EXAMPLE_LETTERS);
    assert!(is_suffix_array_sorted(&text, &EXAMPLE_SA));

    let mut swapped = EXAMPLE_SA;
    swapped.swap(3, 4);
    assert!(!is_suffix_array_sorted(&text, &swapped));
}

#[test]
fn test_from_positions_checks_permutation() {
    let text = dna_text(EXAMPLE_LETTERS);
    assert!(SuffixArray::from_positions(&text, EXAMPLE_SA.to_vec()).is_ok());
    assert!(matches!(
        SuffixArray::from_positions(&text, vec![0, 1, 2]),
        Err(SeqdexError::LengthMismatch { expected: 7, actual: 3, .. })
    ));
    assert!(matches!(
        SuffixArray::from_positions(&text, vec![6, 5, 4, 2, 0, 3, 9]),
        Err(SeqdexError::NotAPermutation { position: 6 })
    ));
}

#[test]
fn test_long_repetitive_text_builds_and_verifies() {
    seqdex::logging::test();
    let letters = "ACGT".repeat(25_000);
    let text = dna_text(&letters);
    let sa = build_suffix_array(&text);
    assert_eq!(sa.len(), 100_001);

    // $, then ACGT$, ACGTACGT$, ... shortest first
    assert_eq!(&sa[..4], &[100_000, 99_996, 99_992, 99_988]);
    assert!(SortedSuffixArray::new(&text, sa.into_inner()).is_ok());
}
