// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix arrays and suffix trees over small alphabets.
//!
//! This crate indexes a sentinel-terminated text (DNA by default) for exact
//! substring search, and turns a suffix array plus LCP array into a suffix
//! tree.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ alphabet.rs │────▶│ index/           │────▶│ search/          │
//! │ (Alphabet,  │     │ (prefix doubling,│     │ (binary search,  │
//! │  Text)      │     │  SuffixArray)    │     │  OccurrenceSet)  │
//! └─────────────┘     └──────────────────┘     └──────────────────┘
//!                              │ + lcp
//!                              ▼
//!                     ┌──────────────────┐     ┌──────────────────┐
//!                     │ tree/builder     │────▶│ tree/export,     │
//!                     │ (arena,          │     │ tree/serialize   │
//!                     │  edge splitting) │     │ (BFS ids, edges) │
//!                     └──────────────────┘     └──────────────────┘
//!        │                   │                        │
//!        ▼                   ▼                        ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          verify/                             │
//! │  (SortedSuffixArray, VerifiedLcp, debug-mode contracts)      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use seqdex::{build_suffix_array, find_occurrences, Alphabet, Pattern, Text};
//!
//! let dna = Alphabet::dna();
//! let text = Text::with_sentinel(&dna, b"ACACAA").unwrap();
//! let sa = build_suffix_array(&text);
//! assert_eq!(sa.as_slice(), &[6, 5, 4, 2, 0, 3, 1]);
//!
//! let pattern = Pattern::parse(&dna, b"AC").unwrap();
//! let mut hits = find_occurrences(&pattern, &text, &sa);
//! hits.sort_unstable();
//! assert_eq!(hits, vec![0, 2]);
//! ```
//!
//! ```
//! use seqdex::{build_suffix_array, serialize_edges, Alphabet, EdgeList, SuffixTree, Text};
//!
//! let text = Text::new(&Alphabet::dna(), "ACACAA$").unwrap();
//! let sa = build_suffix_array(&text);
//! let tree = SuffixTree::build(&text, &sa, &[0, 1, 1, 3, 0, 2]).unwrap();
//! let edges = serialize_edges(&EdgeList::from_tree(&tree));
//! assert_eq!(edges[0], (6, 7));
//! ```

pub mod alphabet;
pub mod error;
pub mod index;
pub mod io;
pub mod logging;
pub mod search;
pub mod testing;
pub mod tree;
pub mod verify;

pub use alphabet::{Alphabet, Rank, Text, MAX_ALPHABET, SENTINEL_RANK};
pub use error::{Result, SeqdexError};
pub use index::{build_suffix_array, is_suffix_array_sorted, SuffixArray};
pub use search::{compare, find_occurrences, match_range, Comparison, OccurrenceSet, Pattern};
pub use tree::{serialize_edges, Edge, EdgeList, Node, NodeId, PreOrder, SuffixTree};
pub use verify::{InvariantError, SortedSuffixArray, VerifiedLcp};
