// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: finding every occurrence of a pattern.
//!
//! The suffix array groups all suffixes that share a prefix into one
//! contiguous block. Find the block, read the positions out of it. Many
//! patterns against the same text collapse into an [`OccurrenceSet`].

mod matcher;

pub use matcher::*;
