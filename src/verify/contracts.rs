// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the construction algorithms.
//!
//! Debug-mode assertions that verify the properties every builder promises.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`, and the
//!    expensive ones return early when debug assertions are off)
//! 2. Provide **early failure detection** during development
//! 3. Check **algorithmic** invariants only. Bad input is an error value,
//!    never a contract violation.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function                 | Property                                   |
//! |-----------------------------------|--------------------------------------------|
//! | `check_suffix_array_permutation`  | every position appears exactly once        |
//! | `check_suffix_array_sorted`       | adjacent suffixes in rank order            |
//! | `check_char_classes`              | length-1 classes step where symbols differ |
//! | `check_classes_consistent`        | doubled classes step where pairs differ    |
//! | `check_match_range`               | binary search bounds stay in the array     |
//! | `check_tree_well_formed`          | depths, leaf count, child keys             |
//!
//! # Usage
//!
//! ```ignore
//! use seqdex::verify::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_suffix_array_sorted(text.ranks(), &order);
//!
//! // In release builds, this is a no-op
//! ```

use crate::alphabet::Rank;
use crate::index::first_unsorted;
use crate::tree::SuffixTree;
use std::ops::Range;

// ============================================================================
// SUFFIX ARRAY CONTRACTS
// ============================================================================

/// Check that `order` is a permutation of `0..n`.
///
/// # Panics (debug builds only)
/// Panics on a wrong length, an out-of-range entry, or a repeated entry.
#[inline]
pub fn check_suffix_array_permutation(n: usize, order: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert_eq!(
        order.len(),
        n,
        "Contract violation: SuffixArray.Permutation - len {} != text len {}",
        order.len(),
        n
    );

    let mut seen = vec![false; n];
    for (i, &pos) in order.iter().enumerate() {
        debug_assert!(
            pos < n && !seen[pos],
            "Contract violation: SuffixArray.Permutation - \
             order[{}] = {} is out of range or repeated",
            i,
            pos
        );
        if pos < n {
            seen[pos] = true;
        }
    }
}

/// Check that adjacent suffixes are in rank order.
///
/// O(n) via `index::first_unsorted`. Call it after
/// [`check_suffix_array_permutation`].
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair violates the ordering.
#[inline]
pub fn check_suffix_array_sorted(ranks: &[Rank], order: &[usize]) {
    if !cfg!(debug_assertions) || order.len() != ranks.len() {
        return;
    }

    let unsorted = first_unsorted(ranks, order);
    debug_assert!(
        unsorted.is_none(),
        "Contract violation: SuffixArray.Sorted - \
         suffix at index {:?} does not sort after its predecessor",
        unsorted
    );
}

/// Check the length-1 classes against the symbols themselves.
///
/// # Panics (debug builds only)
/// Panics if a class step disagrees with the ranks.
#[inline]
pub fn check_char_classes(ranks: &[Rank], order: &[usize], classes: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }
    check_class_steps(order, classes, 1, |p| ranks[p]);
}

/// Check one doubling round: classes for prefixes of length `2 * len`,
/// given the classes `prev` for length `len`.
///
/// A doubled prefix at `p` is the pair `(prev[p], prev[p + len])`, so each
/// round is checked in O(n) against the round before it. The first round is
/// covered by [`check_char_classes`].
///
/// # Panics (debug builds only)
/// Panics if `order` is not sorted by pairs, or a class step disagrees with
/// the pairs.
#[inline]
pub fn check_classes_consistent(order: &[usize], prev: &[usize], classes: &[usize], len: usize) {
    if !cfg!(debug_assertions) {
        return;
    }
    let n = prev.len();
    check_class_steps(order, classes, 2 * len, |p| (prev[p], prev[(p + len) % n]));
}

/// Along `order`, keys never decrease, classes start at 0 and grow by exactly
/// one where the key changes.
fn check_class_steps<K, F>(order: &[usize], classes: &[usize], width: usize, key: F)
where
    K: Ord + std::fmt::Debug,
    F: Fn(usize) -> K,
{
    let Some(&first) = order.first() else {
        return;
    };

    debug_assert_eq!(
        classes[first], 0,
        "Contract violation: Classes.Consistent - smallest prefix has class {}",
        classes[first]
    );

    for pair in order.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        let (prev_key, curr_key) = (key(prev), key(curr));

        debug_assert!(
            prev_key <= curr_key,
            "Contract violation: Classes.Consistent - \
             prefix at {} {:?} sorts after prefix at {} {:?} (len {})",
            prev,
            prev_key,
            curr,
            curr_key,
            width
        );

        let expected = if prev_key == curr_key {
            classes[prev]
        } else {
            classes[prev] + 1
        };
        debug_assert_eq!(
            classes[curr], expected,
            "Contract violation: Classes.Consistent - \
             positions {} and {} (prefix len {}) have classes {} and {}",
            prev, curr, width, classes[prev], classes[curr]
        );
    }
}

// ============================================================================
// BINARY SEARCH CONTRACTS
// ============================================================================

/// Check binary search result bounds.
#[inline]
pub fn check_match_range(range: &Range<usize>, suffix_array_len: usize) {
    debug_assert!(
        range.start <= range.end && range.end <= suffix_array_len,
        "Contract violation: MatchRange.Bounds - \
         {:?} not within 0..{}",
        range,
        suffix_array_len
    );
}

// ============================================================================
// SUFFIX TREE CONTRACTS
// ============================================================================

/// Check the structural invariants of a finished suffix tree.
///
/// - every non-root node's depth is its parent's depth plus its edge length
/// - every leaf's depth is `n - suffix_start`
/// - there are exactly `n` leaves and at most `n - 1` internal non-root nodes
/// - every child sits under the rank of its edge's first symbol
///
/// # Panics (debug builds only)
/// Panics if any of these fail.
#[inline]
pub fn check_tree_well_formed(tree: &SuffixTree, ranks: &[Rank]) {
    if !cfg!(debug_assertions) {
        return;
    }

    let n = ranks.len();
    let mut leaves = 0usize;
    let mut internal = 0usize;

    for id in tree.node_ids() {
        let node = tree.node(id);
        let Some(parent) = node.parent() else {
            continue;
        };

        let Some((start, end)) = node.edge() else {
            debug_assert!(
                false,
                "Contract violation: SuffixTree.WellFormed - non-root node {:?} has no edge",
                id
            );
            continue;
        };

        let parent_depth = tree.node(parent).string_depth();
        debug_assert_eq!(
            node.string_depth(),
            parent_depth + (end + 1 - start),
            "Contract violation: SuffixTree.WellFormed - depth of {:?} \
             is not parent depth {} plus edge [{}, {}]",
            id,
            parent_depth,
            start,
            end
        );

        debug_assert_eq!(
            tree.node(parent).child(ranks[start]),
            Some(id),
            "Contract violation: SuffixTree.WellFormed - {:?} not keyed by rank {}",
            id,
            ranks[start]
        );

        match node.suffix() {
            Some(suffix) => {
                leaves += 1;
                debug_assert_eq!(
                    node.string_depth(),
                    n - suffix,
                    "Contract violation: SuffixTree.WellFormed - leaf for suffix {} has depth {}",
                    suffix,
                    node.string_depth()
                );
            }
            None => internal += 1,
        }
    }

    debug_assert_eq!(
        leaves, n,
        "Contract violation: SuffixTree.WellFormed - {} leaves for text of length {}",
        leaves, n
    );
    debug_assert!(
        internal < n.max(1),
        "Contract violation: SuffixTree.WellFormed - {} internal nodes for text of length {}",
        internal,
        n
    );
}
