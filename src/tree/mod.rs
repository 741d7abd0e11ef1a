// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix trees: build from a suffix array plus LCP array, export, serialize.
//!
//! ```text
//! SuffixArray + lcp ──► SuffixTree ──► EdgeList ──► [(start, end)]
//!                       (arena)        (BFS ids)    (pre-order)
//! ```

mod builder;
mod export;
mod serialize;

pub use builder::*;
pub use export::*;
pub use serialize::*;
