// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Alphabet and validated text: the only place symbols get interpreted.
//!
//! Every comparison in the crate runs on ranks, never on raw bytes. The
//! sentinel is rank 0 and the letters follow in the order the alphabet was
//! declared, so ordering is alphabet-defined rather than code-point-defined.
//!
//! ```text
//! DNA alphabet
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  $  │  A  │  C  │  G  │  T  │   symbol
//! ├─────┼─────┼─────┼─────┼─────┤
//! │  0  │  1  │  2  │  3  │  4  │   rank
//! └─────┴─────┴─────┴─────┴─────┘
//! ```
//!
//! A [`Text`] can only be constructed through validation: every byte is in the
//! alphabet and the sentinel appears exactly once, at the end. Downstream code
//! relies on that and never re-checks.

use crate::error::{Result, SeqdexError};
use std::fmt;

/// Dense integer standing in for a symbol.
pub type Rank = u8;

/// Rank of the sentinel.
pub const SENTINEL_RANK: Rank = 0;

/// Upper bound on alphabet size (sentinel included).
///
/// Tree nodes keep a fixed child slot per rank, so this stays small.
pub const MAX_ALPHABET: usize = 16;

/// Marker for "not in the alphabet" in the lookup table.
const NO_RANK: u8 = u8::MAX;

/// Fixed symbol set with a terminating sentinel.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// symbols[rank] = symbol
    symbols: Vec<u8>,
    /// lookup[symbol] = rank, or NO_RANK
    lookup: [u8; 256],
}

impl Alphabet {
    /// The DNA alphabet `$ < A < C < G < T`.
    pub fn dna() -> Self {
        Self::from_symbols(b'$', b"ACGT")
    }

    /// Build an alphabet from a sentinel and its letters, in rank order.
    ///
    /// Symbols must be printable, non-whitespace ASCII (tool input is
    /// whitespace-delimited) and pairwise distinct.
    pub fn new(sentinel: u8, letters: &[u8]) -> Result<Self> {
        if letters.is_empty() {
            return Err(SeqdexError::invalid_alphabet("no letters"));
        }
        if letters.len() + 1 > MAX_ALPHABET {
            return Err(SeqdexError::invalid_alphabet(format!(
                "{} letters exceeds the maximum of {}",
                letters.len(),
                MAX_ALPHABET - 1
            )));
        }

        let mut seen = [false; 256];
        for &symbol in std::iter::once(&sentinel).chain(letters) {
            if !symbol.is_ascii_graphic() {
                return Err(SeqdexError::invalid_alphabet(format!(
                    "symbol {:?} is not printable ASCII",
                    symbol as char
                )));
            }
            if seen[symbol as usize] {
                return Err(SeqdexError::invalid_alphabet(format!(
                    "duplicate symbol {:?}",
                    symbol as char
                )));
            }
            seen[symbol as usize] = true;
        }

        Ok(Self::from_symbols(sentinel, letters))
    }

    fn from_symbols(sentinel: u8, letters: &[u8]) -> Self {
        let mut symbols = Vec::with_capacity(letters.len() + 1);
        symbols.push(sentinel);
        symbols.extend_from_slice(letters);

        let mut lookup = [NO_RANK; 256];
        for (rank, &symbol) in symbols.iter().enumerate() {
            lookup[symbol as usize] = rank as u8;
        }

        Self { symbols, lookup }
    }

    /// Number of symbols, sentinel included.
    #[inline]
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// The sentinel symbol.
    #[inline]
    pub fn sentinel(&self) -> u8 {
        self.symbols[SENTINEL_RANK as usize]
    }

    /// Letters in rank order (sentinel excluded).
    pub fn letters(&self) -> &[u8] {
        &self.symbols[1..]
    }

    /// Rank of `symbol`, or `None` if the alphabet doesn't contain it.
    #[inline]
    pub fn rank(&self, symbol: u8) -> Option<Rank> {
        match self.lookup[symbol as usize] {
            NO_RANK => None,
            rank => Some(rank),
        }
    }

    /// Symbol for `rank`.
    ///
    /// # Panics
    /// Panics if `rank >= self.size()`.
    #[inline]
    pub fn symbol(&self, rank: Rank) -> u8 {
        self.symbols[rank as usize]
    }

    /// Rank every byte, reporting the first unknown one.
    pub fn encode(&self, bytes: &[u8]) -> Result<Vec<Rank>> {
        bytes
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                self.rank(symbol).ok_or(SeqdexError::UnknownSymbol {
                    symbol: symbol as char,
                    position,
                })
            })
            .collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("sentinel", &(self.sentinel() as char))
            .field("letters", &String::from_utf8_lossy(self.letters()))
            .finish()
    }
}

/// Sentinel-terminated text, stored as bytes and ranks.
#[derive(Clone, PartialEq, Eq)]
pub struct Text {
    bytes: Vec<u8>,
    ranks: Vec<Rank>,
    alphabet: Alphabet,
}

impl Text {
    /// Validate a text that already carries its sentinel.
    pub fn new(alphabet: &Alphabet, bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(SeqdexError::EmptyText);
        }

        let ranks = alphabet.encode(&bytes)?;
        let last = ranks.len() - 1;

        if ranks[last] != SENTINEL_RANK {
            return Err(SeqdexError::MissingSentinel {
                sentinel: alphabet.sentinel() as char,
            });
        }
        if let Some(position) = ranks[..last].iter().position(|&r| r == SENTINEL_RANK) {
            return Err(SeqdexError::MisplacedSentinel { position, last });
        }

        Ok(Self {
            bytes,
            ranks,
            alphabet: alphabet.clone(),
        })
    }

    /// Validate letters and append the sentinel.
    pub fn with_sentinel(alphabet: &Alphabet, letters: &[u8]) -> Result<Self> {
        let mut bytes = Vec::with_capacity(letters.len() + 1);
        bytes.extend_from_slice(letters);
        bytes.push(alphabet.sentinel());
        Self::new(alphabet, bytes)
    }

    /// Length including the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Always false: a validated text holds at least the sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    #[inline]
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    #[inline]
    pub fn rank_at(&self, position: usize) -> Rank {
        self.ranks[position]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Ranks of the suffix starting at `position`.
    #[inline]
    pub fn suffix(&self, position: usize) -> &[Rank] {
        &self.ranks[position..]
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Alphabet symbols are ASCII, so this never loses data.
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({:?})", String::from_utf8_lossy(&self.bytes))
    }
}
