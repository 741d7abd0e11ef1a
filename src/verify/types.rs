// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make invalid states unrepresentable.
//!
//! The tree tool receives its suffix array and LCP array from outside. The
//! builder only checks what it needs to stay memory-safe (lengths, permutation,
//! LCP bounds); these wrappers check everything, once, in linear time, and
//! guarantee it afterwards.
//!
//! | Type                | What's Guaranteed                                       |
//! |---------------------|---------------------------------------------------------|
//! | `SortedSuffixArray` | permutation, adjacent suffixes strictly increasing      |
//! | `VerifiedLcp`       | length `n - 1`, every entry is the true common prefix   |
//!
//! # Example
//!
//! ```ignore
//! let sa = SortedSuffixArray::new(&text, positions)?;
//! let lcp = VerifiedLcp::new(&text, &sa, lcp)?;
//! let tree = SuffixTree::build(&text, sa.as_suffix_array(), lcp.as_slice())?;
//! ```

use crate::alphabet::Text;
use crate::error::Result;
use crate::index::{first_unsorted, SuffixArray};
use thiserror::Error;

/// Error type for invariant violations in externally supplied arrays.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Suffix array is not sorted lexicographically.
    #[error("suffix array not sorted at position {position}")]
    UnsortedSuffixArray { position: usize },
    /// LCP array length is not `n - 1`.
    #[error("lcp array has {lcp_len} entries, expected {expected}")]
    MismatchedLcp { lcp_len: usize, expected: usize },
    /// LCP entry disagrees with the suffixes it describes.
    #[error("lcp[{index}] = {claimed} but the suffixes share {actual}")]
    IncorrectLcp {
        index: usize,
        claimed: usize,
        actual: usize,
    },
}

/// A suffix array whose sortedness has been checked against its text.
///
/// # Invariants (enforced at construction)
/// - permutation of `0..text.len()`
/// - for all `i`: `text[sa[i]..] < text[sa[i + 1]..]` in rank order
#[derive(Debug, Clone)]
pub struct SortedSuffixArray {
    inner: SuffixArray,
}

impl SortedSuffixArray {
    /// Validate `positions` as the suffix array of `text`.
    ///
    /// Length and permutation errors come from
    /// [`SuffixArray::from_positions`]; ordering errors are
    /// [`InvariantError::UnsortedSuffixArray`]. O(n).
    pub fn new(text: &Text, positions: Vec<usize>) -> Result<Self> {
        let inner = SuffixArray::from_positions(text, positions)?;
        if let Some(position) = first_unsorted(text.ranks(), &inner) {
            return Err(InvariantError::UnsortedSuffixArray { position }.into());
        }
        Ok(Self { inner })
    }

    pub fn as_suffix_array(&self) -> &SuffixArray {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// An LCP array checked entry by entry against its suffix array.
#[derive(Debug, Clone)]
pub struct VerifiedLcp {
    values: Vec<usize>,
}

impl VerifiedLcp {
    /// Validate `lcp` for `sa` over `text`.
    pub fn new(
        text: &Text,
        sa: &SortedSuffixArray,
        lcp: Vec<usize>,
    ) -> std::result::Result<Self, InvariantError> {
        let expected = sa.len().saturating_sub(1);
        if lcp.len() != expected {
            return Err(InvariantError::MismatchedLcp {
                lcp_len: lcp.len(),
                expected,
            });
        }

        let actual = kasai_lcp(text, sa.as_suffix_array());
        if let Some(index) = lcp.iter().zip(&actual).position(|(a, b)| a != b) {
            return Err(InvariantError::IncorrectLcp {
                index,
                claimed: lcp[index],
                actual: actual[index],
            });
        }

        Ok(Self { values: lcp })
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }
}

/// LCP array of a sorted suffix array in O(n) (Kasai et al.).
///
/// Visits suffixes in text order. Dropping the first symbol of a suffix
/// loses at most one symbol of common prefix with its neighbour, so the
/// match length `h` only ever shrinks by one between steps.
fn kasai_lcp(text: &Text, sa: &SuffixArray) -> Vec<usize> {
    let ranks = text.ranks();
    let n = ranks.len();
    let mut inverse = vec![0usize; n];
    for (i, &pos) in sa.iter().enumerate() {
        inverse[pos] = i;
    }

    let mut lcp = vec![0usize; n.saturating_sub(1)];
    let mut h = 0usize;
    for pos in 0..n {
        let i = inverse[pos];
        if i == 0 {
            h = 0;
            continue;
        }
        let prev = sa[i - 1];
        while pos + h < n && prev + h < n && ranks[pos + h] == ranks[prev + h] {
            h += 1;
        }
        lcp[i - 1] = h;
        h = h.saturating_sub(1);
    }
    lcp
}
