// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array construction by prefix doubling.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "ACACAA$"   ranks: A=1 C=2 $=0
//!
//! Round 0 (L=1): counting sort by rank, classes per first symbol
//!   order   6 0 2 4 5 1 3
//!   class   $=0  A=1  C=2
//!
//! Round k (L -> 2L): a length-2L prefix at p is the pair
//!   (class[p], class[p+L])
//!   The second halves are already sorted (order shifted back by L),
//!   so a stable counting sort on the first half finishes the job.
//!
//! Output: [6, 5, 4, 2, 0, 3, 1]
//!          $  A$ AA$ ACAA$ ACACAA$ CAA$ CACAA$
//! ```
//!
//! Suffixes are compared cyclically during the rounds. Because the sentinel
//! is unique and smallest, a cyclic prefix that reaches it is already
//! distinguished from every other, so the cyclic order equals suffix order.
//!
//! # Complexity
//!
//! - Time: O(n log n), each of the log n rounds is two linear passes
//! - Space: O(n)
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SUFFIX_ARRAY_PERMUTATION**: the result contains every position exactly once
//! 2. **SUFFIX_ARRAY_SORTED**: `text[order[i]..] <= text[order[i+1]..]` in rank order
//! 3. **CLASSES_CONSISTENT**: after each round, classes along `order` are
//!    non-decreasing and step exactly where the length-L prefixes differ

use crate::alphabet::{Rank, Text};
use crate::error::{Result, SeqdexError};
use crate::verify::contracts::{
    check_char_classes, check_classes_consistent, check_suffix_array_permutation,
    check_suffix_array_sorted,
};
use std::cmp::Ordering;
use std::ops::Deref;
use tracing::{debug, trace};

/// Positions of a text sorted by suffix.
///
/// Immutable once built. Dereferences to `[usize]` so it reads like the
/// plain array it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixArray {
    order: Vec<usize>,
}

impl SuffixArray {
    /// Wrap an externally supplied suffix array after checking it is a
    /// permutation of `0..text.len()`.
    ///
    /// Sortedness is not checked here; see [`SortedSuffixArray`](crate::verify::SortedSuffixArray) for the
    /// fully checked wrapper.
    pub fn from_positions(text: &Text, positions: Vec<usize>) -> Result<Self> {
        let n = text.len();
        if positions.len() != n {
            return Err(SeqdexError::length_mismatch(
                "suffix array",
                n,
                positions.len(),
            ));
        }

        let mut seen = vec![false; n];
        for (i, &pos) in positions.iter().enumerate() {
            if pos >= n || seen[pos] {
                return Err(SeqdexError::NotAPermutation { position: i });
            }
            seen[pos] = true;
        }

        Ok(Self { order: positions })
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.order
    }
}

impl Deref for SuffixArray {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.order
    }
}

impl AsRef<[usize]> for SuffixArray {
    fn as_ref(&self) -> &[usize] {
        &self.order
    }
}

/// Build the suffix array of a sentinel-terminated text.
///
/// Infallible: a [`Text`] only exists after its symbols and sentinel were
/// validated.
pub fn build_suffix_array(text: &Text) -> SuffixArray {
    let span = tracing::debug_span!("build_suffix_array", n = text.len());
    let _enter = span.enter();

    let ranks = text.ranks();
    let n = ranks.len();

    let mut order = sort_characters(ranks, text.alphabet().size());
    let mut classes = compute_char_classes(ranks, &order);
    check_char_classes(ranks, &order, &classes);

    let mut len = 1;
    let mut rounds = 0usize;
    while len < n {
        order = sort_doubled(len, &order, &classes);
        let next = update_classes(&order, &classes, len);

        // INVARIANT: CLASSES_CONSISTENT
        // Classes describe the cyclic prefixes of length `2 * len` after this
        // round. The next round relies on it to sort without comparing symbols.
        check_classes_consistent(&order, &classes, &next, len);

        classes = next;
        len *= 2;
        rounds += 1;
        trace!(round = rounds, prefix_len = len, "doubling round done");
    }

    // INVARIANT: SUFFIX_ARRAY_PERMUTATION, SUFFIX_ARRAY_SORTED
    check_suffix_array_permutation(n, &order);
    check_suffix_array_sorted(ranks, &order);

    debug!(rounds, "suffix array built");
    SuffixArray { order }
}

/// Counting sort of positions by their first rank.
///
/// O(n + alphabet_size). Positions with equal rank keep text order.
pub(crate) fn sort_characters(ranks: &[Rank], alphabet_size: usize) -> Vec<usize> {
    let mut counts = vec![0usize; alphabet_size];
    for &rank in ranks {
        counts[rank as usize] += 1;
    }
    for c in 1..alphabet_size {
        counts[c] += counts[c - 1];
    }

    let mut order = vec![0usize; ranks.len()];
    for (i, &rank) in ranks.iter().enumerate().rev() {
        counts[rank as usize] -= 1;
        order[counts[rank as usize]] = i;
    }
    order
}

/// Classes of length-1 prefixes: equal first symbol, equal class.
pub(crate) fn compute_char_classes(ranks: &[Rank], order: &[usize]) -> Vec<usize> {
    let mut classes = vec![0usize; ranks.len()];
    classes[order[0]] = 0;
    for pair in order.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        classes[curr] = if ranks[curr] != ranks[prev] {
            classes[prev] + 1
        } else {
            classes[prev]
        };
    }
    classes
}

/// Sort cyclic prefixes of length `2 * len`, given the order and classes of
/// prefixes of length `len`.
///
/// Every position `p - len` inherits its second half from `p`, whose place in
/// `order` is already known. Walking `order` backwards and dropping each
/// shifted start into its first-half class bucket from the top keeps ties in
/// second-half order, which is all the stability the pair sort needs.
pub(crate) fn sort_doubled(len: usize, order: &[usize], classes: &[usize]) -> Vec<usize> {
    let n = order.len();

    // Classes are < n, so a count table of size n always suffices.
    let mut counts = vec![0usize; n];
    for &class in classes {
        counts[class] += 1;
    }
    for i in 1..n {
        counts[i] += counts[i - 1];
    }

    // INVARIANT: STABLE_PAIR_SORT
    // Reverse walk plus top-down bucket filling keeps equal first halves in
    // second-half order.
    let mut new_order = vec![0usize; n];
    for &pos in order.iter().rev() {
        let start = (pos + n - len % n) % n;
        let class = classes[start];
        counts[class] -= 1;
        new_order[counts[class]] = start;
    }
    new_order
}

/// Derive classes of length-`2 * len` prefixes from the doubled order.
///
/// Adjacent positions share a class only when both halves agree: the class of
/// the position itself and the class of the position `len` further on.
pub(crate) fn update_classes(order: &[usize], classes: &[usize], len: usize) -> Vec<usize> {
    let n = order.len();
    let mut new_classes = vec![0usize; n];
    new_classes[order[0]] = 0;

    for pair in order.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        let mid = (curr + len) % n;
        let mid_prev = (prev + len) % n;

        new_classes[curr] = if classes[curr] != classes[prev] || classes[mid] != classes[mid_prev]
        {
            new_classes[prev] + 1
        } else {
            new_classes[prev]
        };
    }
    new_classes
}

/// Check whether `order` lists the suffixes of `text` in rank order.
///
/// Compares whole suffixes, O(n^2) on repetitive text. Meant for tests;
/// [`SortedSuffixArray`](crate::verify::SortedSuffixArray) checks in O(n).
pub fn is_suffix_array_sorted(text: &Text, order: &[usize]) -> bool {
    order
        .windows(2)
        .all(|pair| text.suffix(pair[0]) <= text.suffix(pair[1]))
}

/// First index `i` where `order[i - 1]` does not sort strictly before
/// `order[i]`, or `None` if `order` is the suffix array of `ranks`.
///
/// O(n). Two suffixes with the same first rank are ordered like the suffixes
/// one position further on, and `order` itself says where those sit. Checking
/// that for every adjacent pair checks the whole array. `order` must be a
/// permutation of `0..ranks.len()`.
pub(crate) fn first_unsorted(ranks: &[Rank], order: &[usize]) -> Option<usize> {
    let n = ranks.len();
    let mut inverse = vec![0usize; n];
    for (i, &pos) in order.iter().enumerate() {
        inverse[pos] = i;
    }

    (1..order.len()).find(|&i| {
        let (prev, curr) = (order[i - 1], order[i]);
        match ranks[prev].cmp(&ranks[curr]) {
            Ordering::Less => false,
            Ordering::Greater => true,
            // A one-symbol suffix is a prefix of the other
            Ordering::Equal if prev + 1 == n => false,
            Ordering::Equal if curr + 1 == n => true,
            Ordering::Equal => inverse[prev + 1] > inverse[curr + 1],
        }
    })
}
