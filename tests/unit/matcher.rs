//! Pattern matching against fixed cases and the oracle.

use super::common::{dna_text, naive_occurrences, EXAMPLE_LETTERS};
use seqdex::{
    build_suffix_array, compare, find_occurrences, match_range, Alphabet, Comparison,
    OccurrenceSet, Pattern, SeqdexError,
};

fn sorted(mut v: Vec<usize>) -> Vec<usize> {
    v.sort_unstable();
    v
}

#[test]
fn test_every_substring_of_example_is_found() {
    seqdex::logging::test();
    let dna = Alphabet::dna();
    let text = dna_text(EXAMPLE_LETTERS);
    let sa = build_suffix_array(&text);

    for start in 0..EXAMPLE_LETTERS.len() {
        for end in start + 1..=EXAMPLE_LETTERS.len() {
            let pattern = Pattern::parse(&dna, &EXAMPLE_LETTERS.as_bytes()[start..end]).unwrap();
            let found = sorted(find_occurrences(&pattern, &text, &sa));
            assert!(found.contains(&start));
            assert_eq!(found, naive_occurrences(&text, pattern.ranks()));
        }
    }
}

#[test]
fn test_overlapping_occurrences() {
    let dna = Alphabet::dna();
    let text = dna_text("AAAAA");
    let sa = build_suffix_array(&text);
    let pattern = Pattern::parse(&dna, b"AA").unwrap();
    assert_eq!(sorted(find_occurrences(&pattern, &text, &sa)), vec![0, 1, 2, 3]);
}

#[test]
fn test_absent_patterns() {
    let dna = Alphabet::dna();
    let text = dna_text("GATTACA");
    let sa = build_suffix_array(&text);
    for raw in ["G T", "GG", "CAT", "TTT", "GATTACAG", "ACGTACGTACGT"] {
        let Ok(pattern) = Pattern::parse(&dna, raw.as_bytes()) else {
            continue;
        };
        assert!(find_occurrences(&pattern, &text, &sa).is_empty(), "{raw}");
    }
}

#[test]
fn test_match_range_is_contiguous_block() {
    let dna = Alphabet::dna();
    let text = dna_text(EXAMPLE_LETTERS);
    let sa = build_suffix_array(&text);

    let a = Pattern::parse(&dna, b"A").unwrap();
    assert_eq!(match_range(a.ranks(), &text, &sa), 1..5);

    let ca = Pattern::parse(&dna, b"CA").unwrap();
    assert_eq!(match_range(ca.ranks(), &text, &sa), 5..7);

    // Absent pattern: empty range at its insertion point
    let g = Pattern::parse(&dna, b"G").unwrap();
    assert_eq!(match_range(g.ranks(), &text, &sa), 7..7);
}

#[test]
fn test_comparator_text_exhausted_branch() {
    let text = dna_text("ACA");
    // Validated patterns stop at the sentinel and never run past the end
    for pos in 0..text.len() {
        let pattern = Pattern::parse(&Alphabet::dna(), b"ACAAAA").unwrap();
        assert_ne!(compare(pattern.ranks(), &text, pos), Comparison::Match);
    }
    // A raw slice through the sentinel reaches it
    assert_eq!(compare(&[1, 0, 3], &text, 2), Comparison::PatternGreater);
    assert_eq!(compare(&[1, 0], &text, 2), Comparison::Match);
}

#[test]
fn test_patterns_reject_sentinel() {
    assert!(matches!(
        Pattern::parse(&Alphabet::dna(), b"A$C"),
        Err(SeqdexError::SentinelInPattern { position: 1 })
    ));
}

#[test]
fn test_occurrence_set_over_many_patterns() {
    let dna = Alphabet::dna();
    let text = dna_text("GATTACAGATTACA");
    let sa = build_suffix_array(&text);

    let mut set = OccurrenceSet::new(text.len());
    for raw in ["GATT", "ACA", "GATT", "CCC"] {
        set.insert_pattern(&Pattern::parse(&dna, raw.as_bytes()).unwrap(), &text, &sa);
    }
    assert_eq!(set.positions().collect::<Vec<_>>(), vec![0, 4, 7, 11]);
}
