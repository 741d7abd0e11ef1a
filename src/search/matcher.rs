// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact pattern matching by binary search over the suffix array.
//!
//! Every occurrence of a pattern is the start of a suffix that has the pattern
//! as a prefix. Those suffixes sit next to each other in the suffix array, so
//! two binary searches find the whole block:
//!
//! ```text
//! text = "ACACAA$", pattern = "AC"
//!
//!   idx  pos  suffix      compare("AC", suffix)
//!    0    6   $           PatternGreater
//!    1    5   A$          PatternGreater
//!    2    4   AA$         PatternGreater
//!    3    2   ACAA$       Match            <- lower bound
//!    4    0   ACACAA$     Match
//!    5    3   CAA$        PatternLess      <- upper bound
//!    6    1   CACAA$      PatternLess
//!
//! occurrences: sa[3..5] = {2, 0}
//! ```
//!
//! O(|pattern| log n) per query.

use crate::alphabet::{Alphabet, Rank, Text, SENTINEL_RANK};
use crate::error::{Result, SeqdexError};
use crate::index::SuffixArray;
use crate::verify::contracts::check_match_range;
use std::ops::Range;
use tracing::trace;

/// Outcome of comparing a pattern against the suffix at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// The suffix sorts after every string with the pattern as prefix.
    PatternLess,
    /// The suffix sorts before every string with the pattern as prefix.
    PatternGreater,
    /// The suffix starts with the pattern.
    Match,
}

/// A validated query: alphabet letters only, no sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    ranks: Vec<Rank>,
}

impl Pattern {
    /// Rank a pattern, rejecting unknown symbols and the sentinel.
    ///
    /// An empty pattern is allowed and occurs at every position.
    pub fn parse(alphabet: &Alphabet, bytes: &[u8]) -> Result<Self> {
        let ranks = alphabet.encode(bytes)?;
        if let Some(position) = ranks.iter().position(|&r| r == SENTINEL_RANK) {
            return Err(SeqdexError::SentinelInPattern { position });
        }
        Ok(Self { ranks })
    }

    #[inline]
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Three-way comparison of `pattern` against `text[pos..]`.
///
/// - `Match` when the whole pattern is consumed
/// - `PatternGreater` when the text runs out first, or at the first
///   differing rank the pattern is larger
/// - `PatternLess` otherwise
///
/// The text-runs-out branch needs a pattern that matches through the
/// sentinel, so a [`Pattern`] never reaches it. Raw rank slices can.
pub fn compare(pattern: &[Rank], text: &Text, pos: usize) -> Comparison {
    let ranks = text.ranks();
    let n = ranks.len();

    let mut i = 0;
    while i < pattern.len() && pos + i < n && pattern[i] == ranks[pos + i] {
        i += 1;
    }

    if i == pattern.len() {
        Comparison::Match
    } else if pos + i == n {
        Comparison::PatternGreater
    } else if pattern[i] > ranks[pos + i] {
        Comparison::PatternGreater
    } else {
        Comparison::PatternLess
    }
}

/// Range of suffix array indices whose suffixes start with `pattern`.
///
/// The range is empty (at the insertion point) when the pattern does not occur.
pub fn match_range(pattern: &[Rank], text: &Text, sa: &SuffixArray) -> Range<usize> {
    // INVARIANT: MATCH_BLOCK_CONTIGUOUS
    // Along a sorted suffix array the comparisons run PatternGreater*, Match*,
    // PatternLess*. Both searches below are only valid on that shape.
    // Lower bound: first suffix that is not below the pattern
    let mut lo = 0;
    let mut hi = sa.len();
    while lo < hi {
        let mid = (lo + hi) / 2;
        if compare(pattern, text, sa[mid]) == Comparison::PatternGreater {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    let start = lo;

    // Upper bound: first suffix strictly above every pattern extension
    hi = sa.len();
    while lo < hi {
        let mid = (lo + hi) / 2;
        if compare(pattern, text, sa[mid]) == Comparison::PatternLess {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    let range = start..hi;
    check_match_range(&range, sa.len());
    range
}

/// Every start position of `pattern` in `text`, in suffix array order.
pub fn find_occurrences(pattern: &Pattern, text: &Text, sa: &SuffixArray) -> Vec<usize> {
    let range = match_range(pattern.ranks(), text, sa);
    trace!(
        pattern_len = pattern.len(),
        occurrences = range.len(),
        "pattern matched"
    );
    sa[range].to_vec()
}

/// Union of occurrence positions over many patterns.
///
/// One flag per text position. Duplicate patterns and overlapping
/// occurrences collapse naturally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceSet {
    present: Vec<bool>,
    count: usize,
}

impl OccurrenceSet {
    /// Empty set over a text of `text_len` positions.
    pub fn new(text_len: usize) -> Self {
        Self {
            present: vec![false; text_len],
            count: 0,
        }
    }

    /// Mark every occurrence of `pattern`. Returns how many suffixes matched,
    /// including ones already marked.
    pub fn insert_pattern(&mut self, pattern: &Pattern, text: &Text, sa: &SuffixArray) -> usize {
        let range = match_range(pattern.ranks(), text, sa);
        let matched = range.len();
        for &pos in &sa[range] {
            self.insert(pos);
        }
        matched
    }

    /// Mark one position.
    pub fn insert(&mut self, pos: usize) {
        if !self.present[pos] {
            self.present[pos] = true;
            self.count += 1;
        }
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.present.get(pos).copied().unwrap_or(false)
    }

    /// Number of distinct positions marked.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Marked positions in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.present
            .iter()
            .enumerate()
            .filter_map(|(pos, &present)| present.then_some(pos))
    }
}
