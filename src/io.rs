// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line formats of the two tools.
//!
//! Both read whitespace-delimited tokens, so line breaks in the input do not
//! matter.
//!
//! ```text
//! match input            tree input
//!   ACACAA                 ACACAA$
//!   2                      6 5 4 2 0 3 1
//!   AC CA                  0 1 1 3 0 2
//!
//! match output           tree output
//!   "0 1 2 3 \n"           ACACAA$
//!                          6 7
//!                          5 6
//!                          ...
//! ```
//!
//! The match text is given without its sentinel and gets one appended. The
//! tree text carries its own.

use crate::alphabet::{Alphabet, Text};
use crate::error::{Result, SeqdexError};
use crate::index::{build_suffix_array, SuffixArray};
use crate::search::{OccurrenceSet, Pattern};
use crate::tree::{serialize_edges, EdgeList, SuffixTree};
use crate::verify::{SortedSuffixArray, VerifiedLcp};
use std::io::{self, Write};
use std::iter::Enumerate;
use std::str::SplitWhitespace;
use tracing::{debug, info};

/// Parsed input of the match tool.
#[derive(Debug, Clone)]
pub struct MatchInput {
    pub text: Text,
    pub patterns: Vec<Pattern>,
}

/// Parsed input of the tree tool. The arrays are unchecked until [`run_tree`].
#[derive(Debug, Clone)]
pub struct TreeInput {
    pub text: Text,
    pub suffix_array: Vec<usize>,
    pub lcp: Vec<usize>,
}

struct Tokens<'a> {
    inner: Enumerate<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace().enumerate(),
        }
    }

    fn next_str(&mut self, what: &'static str) -> Result<(usize, &'a str)> {
        self.inner
            .next()
            .map(|(i, token)| (i + 1, token))
            .ok_or(SeqdexError::UnexpectedEof { what })
    }

    fn next_usize(&mut self, what: &'static str) -> Result<usize> {
        let (token, raw) = self.next_str(what)?;
        raw.parse()
            .map_err(|e| SeqdexError::parse(token, format!("{what} {raw:?}: {e}")))
    }
}

/// Text line, pattern count, then that many patterns.
pub fn parse_match_input(alphabet: &Alphabet, input: &str) -> Result<MatchInput> {
    let mut tokens = Tokens::new(input);

    let (_, letters) = tokens.next_str("text")?;
    let text = Text::with_sentinel(alphabet, letters.as_bytes())?;

    let count = tokens.next_usize("pattern count")?;
    let mut patterns = Vec::with_capacity(count.min(1 << 16));
    for _ in 0..count {
        let (_, raw) = tokens.next_str("pattern")?;
        patterns.push(Pattern::parse(alphabet, raw.as_bytes())?);
    }

    Ok(MatchInput { text, patterns })
}

/// Text line with sentinel, `n` suffix array entries, `n - 1` LCP entries.
pub fn parse_tree_input(alphabet: &Alphabet, input: &str) -> Result<TreeInput> {
    let mut tokens = Tokens::new(input);

    let (_, raw) = tokens.next_str("text")?;
    let text = Text::new(alphabet, raw.as_bytes())?;
    let n = text.len();

    let suffix_array = (0..n)
        .map(|_| tokens.next_usize("suffix array entry"))
        .collect::<Result<Vec<_>>>()?;
    let lcp = (0..n - 1)
        .map(|_| tokens.next_usize("lcp entry"))
        .collect::<Result<Vec<_>>>()?;

    Ok(TreeInput {
        text,
        suffix_array,
        lcp,
    })
}

/// Build the suffix array and collect the occurrences of every pattern.
pub fn run_match(input: &MatchInput) -> OccurrenceSet {
    let sa = build_suffix_array(&input.text);
    let mut occurrences = OccurrenceSet::new(input.text.len());
    let mut matched = 0usize;
    for pattern in &input.patterns {
        matched += occurrences.insert_pattern(pattern, &input.text, &sa);
    }
    info!(
        patterns = input.patterns.len(),
        matched,
        positions = occurrences.len(),
        "match done"
    );
    occurrences
}

/// Build the tree from the supplied arrays and serialize its edges.
///
/// With `strict`, the suffix array is checked for sortedness and every LCP
/// entry against the text before building. Otherwise only the checks the
/// builder needs are made.
pub fn run_tree(input: &TreeInput, strict: bool) -> Result<Vec<(usize, usize)>> {
    let text = &input.text;
    let tree = if strict {
        let sa = SortedSuffixArray::new(text, input.suffix_array.clone())?;
        let lcp = VerifiedLcp::new(text, &sa, input.lcp.clone())?;
        debug!("supplied arrays verified");
        SuffixTree::build(text, sa.as_suffix_array(), lcp.as_slice())?
    } else {
        let sa = SuffixArray::from_positions(text, input.suffix_array.clone())?;
        SuffixTree::build(text, &sa, &input.lcp)?
    };

    let edges = serialize_edges(&EdgeList::from_tree(&tree));
    info!(nodes = tree.node_count(), edges = edges.len(), "tree done");
    Ok(edges)
}

/// Positions on one line, each followed by a space.
pub fn write_positions<W: Write>(
    writer: &mut W,
    positions: impl IntoIterator<Item = usize>,
) -> io::Result<()> {
    for pos in positions {
        write!(writer, "{pos} ")?;
    }
    writeln!(writer)
}

/// The text line, then one `start end` line per edge.
pub fn write_edges<W: Write>(
    writer: &mut W,
    text: &Text,
    edges: &[(usize, usize)],
) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writeln!(writer)?;
    for (start, end) in edges {
        writeln!(writer, "{start} {end}")?;
    }
    Ok(())
}
