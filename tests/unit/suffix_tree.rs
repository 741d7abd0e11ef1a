//! Suffix tree construction, export and serialization.

use super::common::{
    build_tree, dna_text, naive_lcp, EXAMPLE_EDGES, EXAMPLE_LCP, EXAMPLE_LETTERS, EXAMPLE_SA,
};
use seqdex::{
    build_suffix_array, serialize_edges, Alphabet, EdgeList, InvariantError, SeqdexError,
    SortedSuffixArray, SuffixTree, Text, VerifiedLcp,
};

#[test]
fn test_worked_example_edges() {
    seqdex::logging::test();
    let text = dna_text(EXAMPLE_LETTERS);
    let sa = build_suffix_array(&text);
    let tree = SuffixTree::build(&text, &sa, &EXAMPLE_LCP).unwrap();
    let edges = serialize_edges(&EdgeList::from_tree(&tree));
    assert_eq!(edges, EXAMPLE_EDGES.to_vec());
}

#[test]
fn test_root_edges_sentinel_first() {
    let text = dna_text("GATTACA");
    let (_, tree) = build_tree(&text);
    let list = EdgeList::from_tree(&tree);
    let root = list.edges(0);
    assert_eq!((root[0].start, root[0].end), (7, 7));
    // $, A, C, G, T all start a suffix
    assert_eq!(root.len(), 5);
}

#[test]
fn test_leaf_paths_spell_suffixes() {
    for letters in ["GATTACA", "AAAA", "ACGTACGT", "CATCATCAT"] {
        let text = dna_text(letters);
        let (sa, tree) = build_tree(&text);
        assert_eq!(tree.leaves().count(), text.len());
        for leaf in tree.leaves() {
            let suffix = tree.node(leaf).suffix().unwrap();
            assert_eq!(tree.path_label(&text, leaf), text.suffix(suffix));
        }
        assert!(tree.node_count() <= 2 * sa.len());
    }
}

#[test]
fn test_verified_inputs_build_same_tree() {
    let text = dna_text(EXAMPLE_LETTERS);
    let sa = SortedSuffixArray::new(&text, EXAMPLE_SA.to_vec()).unwrap();
    let lcp = VerifiedLcp::new(&text, &sa, EXAMPLE_LCP.to_vec()).unwrap();
    let tree = SuffixTree::build(&text, sa.as_suffix_array(), lcp.as_slice()).unwrap();
    assert_eq!(serialize_edges(&EdgeList::from_tree(&tree)), EXAMPLE_EDGES.to_vec());
}

#[test]
fn test_lcp_length_mismatch() {
    let text = dna_text(EXAMPLE_LETTERS);
    let sa = build_suffix_array(&text);
    assert!(matches!(
        SuffixTree::build(&text, &sa, &EXAMPLE_LCP[..5]),
        Err(SeqdexError::LengthMismatch { what: "lcp array", expected: 6, actual: 5 })
    ));
}

#[test]
fn test_unsorted_suffix_array_caught_by_verification() {
    let text = dna_text(EXAMPLE_LETTERS);
    // ACACAA$ placed before ACAA$
    let err = SortedSuffixArray::new(&text, vec![6, 5, 4, 0, 2, 3, 1]).unwrap_err();
    assert!(matches!(
        err,
        SeqdexError::Invariant(InvariantError::UnsortedSuffixArray { position: 4 })
    ));
}

#[test]
fn test_wrong_lcp_caught_by_verification() {
    let text = dna_text(EXAMPLE_LETTERS);
    let sa = SortedSuffixArray::new(&text, EXAMPLE_SA.to_vec()).unwrap();
    let err = VerifiedLcp::new(&text, &sa, vec![0, 1, 1, 3, 1, 2]).unwrap_err();
    assert_eq!(
        err,
        InvariantError::IncorrectLcp {
            index: 4,
            claimed: 1,
            actual: 0
        }
    );
}

#[test]
fn test_custom_alphabet_tree() {
    let alphabet = Alphabet::new(b'#', b"XY").unwrap();
    let text = Text::new(&alphabet, "XYXY#").unwrap();
    let sa = build_suffix_array(&text);
    let lcp = naive_lcp(&text, &sa);
    let tree = SuffixTree::build(&text, &sa, &lcp).unwrap();
    let edges = serialize_edges(&EdgeList::from_tree(&tree));
    // # edge, then the XY subtree, then the Y subtree
    assert_eq!(edges[0], (4, 5));
    assert_eq!(edges.len(), tree.node_count() - 1);
}
