// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix tree construction from a suffix array and its LCP array.
//!
//! # Algorithm Overview
//!
//! Suffixes are inserted in suffix array order. Each one shares exactly
//! `lcp[i - 1]` symbols with the previous suffix, whose leaf is where the
//! cursor sits, so only the rightmost path of the tree is ever touched:
//!
//! ```text
//! 1. climb from the previous leaf while depth > lcp_prev
//! 2a. depth == lcp_prev: hang a new leaf off this node
//! 2b. depth <  lcp_prev: the shared prefix ends inside the edge below,
//!     break it there and hang the leaf off the new middle node
//!
//!        node                     node
//!         │ [s, e]                 │ [s, s+k-1]
//!         │              ──►      mid
//!       child                    ╱   ╲ [suffix+depth, n-1]
//!                    [s+k, e]  child  leaf
//! ```
//!
//! Each insertion climbs past nodes it never revisits, so the whole build is
//! O(n) amortized.
//!
//! Edges are inclusive ranges `[start, end]` into the text. Labels are never
//! copied.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **TREE_DEPTH_CONSISTENT**: a node's depth is its parent's depth plus its
//!    edge length
//! 2. **TREE_LEAF_PER_SUFFIX**: exactly one leaf per suffix, at depth
//!    `n - suffix_start`
//! 3. **TREE_CHILD_KEYED_BY_RANK**: a child sits in the slot of its edge's first rank

use crate::alphabet::{Rank, Text, MAX_ALPHABET};
use crate::error::{Result, SeqdexError};
use crate::index::SuffixArray;
use crate::verify::contracts::check_tree_well_formed;
use tracing::debug;

/// Index of a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The root is always the first node allocated.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node of the suffix tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    parent: Option<NodeId>,
    children: [Option<NodeId>; MAX_ALPHABET],
    string_depth: usize,
    edge: Option<(usize, usize)>,
    suffix: Option<usize>,
}

impl Node {
    fn root() -> Self {
        Self {
            parent: None,
            children: [None; MAX_ALPHABET],
            string_depth: 0,
            edge: None,
            suffix: None,
        }
    }

    /// `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child whose edge starts with `rank`.
    #[inline]
    pub fn child(&self, rank: Rank) -> Option<NodeId> {
        self.children.get(rank as usize).copied().flatten()
    }

    /// Children in rank order, sentinel first.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().filter_map(|&c| c)
    }

    /// Symbols on the path from the root to this node.
    pub fn string_depth(&self) -> usize {
        self.string_depth
    }

    /// Label of the incoming edge as an inclusive text range. `None` for the root.
    pub fn edge(&self) -> Option<(usize, usize)> {
        self.edge
    }

    /// Start of the suffix this leaf spells. `None` for internal nodes.
    pub fn suffix(&self) -> Option<usize> {
        self.suffix
    }

    pub fn is_leaf(&self) -> bool {
        self.suffix.is_some()
    }
}

/// Compressed trie of all suffixes of a text.
#[derive(Debug, Clone)]
pub struct SuffixTree {
    nodes: Vec<Node>,
}

/// Largest text whose tree (at most `2n` nodes) still fits `u32` ids.
pub const MAX_TREE_TEXT_LEN: usize = (u32::MAX / 2) as usize;

impl SuffixTree {
    /// Build the suffix tree of `text` from its suffix array and LCP array.
    ///
    /// `lcp[i]` is the common prefix length of `text[sa[i]..]` and
    /// `text[sa[i + 1]..]`. Lengths and bounds are checked up front. Values
    /// that are in range but disagree with the text are caught when they
    /// would produce an impossible split or a colliding child.
    pub fn build(text: &Text, sa: &SuffixArray, lcp: &[usize]) -> Result<Self> {
        let span = tracing::debug_span!("suffix_tree_build", n = text.len());
        let _enter = span.enter();

        let ranks = text.ranks();
        let n = ranks.len();

        if n > MAX_TREE_TEXT_LEN {
            return Err(SeqdexError::TextTooLong {
                len: n,
                limit: MAX_TREE_TEXT_LEN,
            });
        }
        if sa.len() != n {
            return Err(SeqdexError::length_mismatch("suffix array", n, sa.len()));
        }
        if lcp.len() != n - 1 {
            return Err(SeqdexError::length_mismatch("lcp array", n - 1, lcp.len()));
        }
        if let Some((index, &value)) = lcp.iter().enumerate().find(|&(_, &v)| v >= n) {
            return Err(SeqdexError::LcpOutOfRange {
                index,
                value,
                limit: n,
            });
        }

        let mut tree = SuffixTree {
            nodes: Vec::with_capacity(2 * n),
        };
        tree.nodes.push(Node::root());

        let mut current = NodeId::ROOT;
        let mut lcp_prev = 0;
        let mut splits = 0usize;

        for (i, &suffix) in sa.iter().enumerate() {
            // INVARIANT: RIGHTMOST_PATH
            // `current` is the previous leaf or one of its ancestors.
            while tree.node(current).string_depth > lcp_prev {
                current = tree
                    .node(current)
                    .parent
                    .ok_or(SeqdexError::InconsistentLcp { index: i })?;
            }

            let depth = tree.node(current).string_depth;
            let attach_to = if depth == lcp_prev {
                current
            } else {
                // depth < lcp_prev implies i > 0
                let edge_start = sa[i - 1] + depth;
                splits += 1;
                tree.break_edge(current, ranks, edge_start, lcp_prev - depth, i)?
            };
            current = tree.attach_leaf(attach_to, ranks, suffix, i)?;

            if i + 1 < n {
                lcp_prev = lcp[i];
            }
        }

        // INVARIANT: TREE_DEPTH_CONSISTENT, TREE_LEAF_PER_SUFFIX, TREE_CHILD_KEYED_BY_RANK
        check_tree_well_formed(&tree, ranks);

        debug!(nodes = tree.nodes.len(), splits, "suffix tree built");
        Ok(tree)
    }

    /// Hang the leaf for `suffix` off `parent`.
    fn attach_leaf(
        &mut self,
        parent: NodeId,
        ranks: &[Rank],
        suffix: usize,
        index: usize,
    ) -> Result<NodeId> {
        let n = ranks.len();
        let depth = self.node(parent).string_depth;
        let start = suffix + depth;
        if start >= n || self.node(parent).is_leaf() {
            return Err(SeqdexError::InconsistentLcp { index });
        }

        let key = ranks[start];
        if self.node(parent).child(key).is_some() {
            return Err(SeqdexError::InconsistentLcp { index });
        }

        let leaf = self.push(Node {
            parent: Some(parent),
            children: [None; MAX_ALPHABET],
            string_depth: n - suffix,
            edge: Some((start, n - 1)),
            suffix: Some(suffix),
        });
        self.nodes[parent.index()].children[key as usize] = Some(leaf);
        Ok(leaf)
    }

    /// Split the child edge of `node` that starts with `ranks[start]`
    /// `offset` symbols in, returning the new middle node.
    fn break_edge(
        &mut self,
        node: NodeId,
        ranks: &[Rank],
        start: usize,
        offset: usize,
        index: usize,
    ) -> Result<NodeId> {
        let inconsistent = || SeqdexError::InconsistentLcp { index };
        if start + offset > ranks.len() {
            return Err(inconsistent());
        }

        let start_key = ranks[start];
        let child = self.node(node).child(start_key).ok_or_else(inconsistent)?;
        let (child_start, child_end) = self.node(child).edge.ok_or_else(inconsistent)?;
        if offset == 0 || offset > child_end - child_start {
            return Err(inconsistent());
        }

        let mid_key = ranks[child_start + offset];
        let mut mid = Node {
            parent: Some(node),
            children: [None; MAX_ALPHABET],
            string_depth: self.node(node).string_depth + offset,
            edge: Some((start, start + offset - 1)),
            suffix: None,
        };
        mid.children[mid_key as usize] = Some(child);
        let mid = self.push(mid);

        let moved = &mut self.nodes[child.index()];
        moved.parent = Some(mid);
        moved.edge = Some((child_start + offset, child_end));
        self.nodes[node.index()].children[start_key as usize] = Some(mid);
        Ok(mid)
    }

    fn push(&mut self, node: Node) -> NodeId {
        // Bounded by MAX_TREE_TEXT_LEN, checked in build
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// # Panics
    /// Panics if `id` came from another tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Every node id in allocation order, root first.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Leaves in allocation order, which is suffix array order.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_ids().filter(|&id| self.node(id).is_leaf())
    }

    /// Ranks spelled by the path from the root down to `id`.
    ///
    /// For a leaf this is the suffix it stands for.
    pub fn path_label(&self, text: &Text, id: NodeId) -> Vec<Rank> {
        let ranks = text.ranks();
        let mut edges = Vec::new();
        let mut cursor = Some(id);
        while let Some(node_id) = cursor {
            let node = self.node(node_id);
            if let Some(edge) = node.edge {
                edges.push(edge);
            }
            cursor = node.parent;
        }

        let mut label = Vec::with_capacity(self.node(id).string_depth);
        for &(start, end) in edges.iter().rev() {
            label.extend_from_slice(&ranks[start..=end]);
        }
        label
    }
}
