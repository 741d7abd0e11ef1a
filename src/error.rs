// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for index construction and tool input.
//!
//! Everything the outside world can get wrong ends up here: a symbol the
//! alphabet doesn't know, a sentinel in the wrong place, a suffix array that
//! isn't a permutation, an LCP array of the wrong length. The algorithms
//! themselves are pure functions of validated input, so once a [`Text`] or a
//! checked array exists, construction cannot fail.
//!
//! [`Text`]: crate::Text

use crate::verify::InvariantError;
use thiserror::Error;

/// Error type for all seqdex operations.
#[derive(Error, Debug)]
pub enum SeqdexError {
    /// A byte outside the alphabet.
    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    /// Text is empty (not even a sentinel).
    #[error("text is empty")]
    EmptyText,

    /// Text does not end with the sentinel.
    #[error("text does not end with the sentinel {sentinel:?}")]
    MissingSentinel { sentinel: char },

    /// Sentinel appears before the final position.
    #[error("sentinel found at position {position}, expected only at position {last}")]
    MisplacedSentinel { position: usize, last: usize },

    /// Patterns never contain the sentinel.
    #[error("pattern contains the sentinel at position {position}")]
    SentinelInPattern { position: usize },

    /// Alphabet definition is unusable.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// An input array has the wrong length for the text.
    #[error("{what} has length {actual}, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Supplied suffix array repeats or skips a position.
    #[error("suffix array is not a permutation: entry {position} is out of range or repeated")]
    NotAPermutation { position: usize },

    /// LCP entry larger than any common prefix could be.
    #[error("lcp[{index}] = {value} exceeds limit {limit}")]
    LcpOutOfRange {
        index: usize,
        value: usize,
        limit: usize,
    },

    /// LCP values disagree with the text while building the tree.
    #[error("lcp array is inconsistent with the text at suffix array index {index}")]
    InconsistentLcp { index: usize },

    /// Text too long for the tree's node ids.
    #[error("text of length {len} exceeds the suffix tree limit of {limit}")]
    TextTooLong { len: usize, limit: usize },

    /// Malformed tool input.
    #[error("parse error at token {token}: {message}")]
    Parse { token: usize, message: String },

    /// Tool input ended early.
    #[error("unexpected end of input while reading {what}")]
    UnexpectedEof { what: &'static str },

    /// Strict validation of supplied arrays failed.
    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantError),

    /// I/O errors while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SeqdexError {
    /// Create a LengthMismatch error.
    pub fn length_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Create a Parse error.
    pub fn parse(token: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            token,
            message: message.into(),
        }
    }

    /// Create an InvalidAlphabet error.
    pub fn invalid_alphabet(message: impl Into<String>) -> Self {
        Self::InvalidAlphabet(message.into())
    }
}

/// Result type alias for seqdex operations.
pub type Result<T> = std::result::Result<T, SeqdexError>;
