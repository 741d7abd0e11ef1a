// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Breadth-first numbering of a suffix tree into an edge list.
//!
//! Arena ids follow allocation order, which depends on how the tree was
//! built. The exported ids follow the tree's shape alone: the root is 0 and
//! every other node gets the next id when a breadth-first walk first reaches
//! it, visiting children in rank order.
//!
//! ```text
//! "ACACAA$"          id  outgoing edges (node, [start, end])
//!                     0  (1, [6,6]) (2, [5,5]) (3, [3,4])
//!     ┌──$──1         1  -
//!   0─┼──A──2 ...     2  (4, [6,6]) (5, [5,6]) (6, [3,4])
//!     └─CA──3 ...     3  (7, [5,6]) (8, [3,6])
//! ```

use super::builder::{NodeId, SuffixTree};
use std::collections::VecDeque;
use tracing::debug;

/// An outgoing edge: the node it leads to and its label as an inclusive
/// text range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub node: usize,
    pub start: usize,
    pub end: usize,
}

impl Edge {
    /// The label as a half-open range `[start, end + 1)`.
    pub fn half_open(&self) -> (usize, usize) {
        (self.start, self.end + 1)
    }

    /// Number of symbols on the edge.
    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    /// Always false, an edge spells at least one symbol.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Map from exported node id to its outgoing edges, sorted by first symbol.
///
/// Ids are dense (`0..len()`), so the map is a vector indexed by id. Leaves
/// are present with no edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    edges: Vec<Vec<Edge>>,
}

impl EdgeList {
    /// Number the nodes of `tree` breadth-first and collect their edges.
    pub fn from_tree(tree: &SuffixTree) -> Self {
        let span = tracing::debug_span!("edge_list_from_tree", nodes = tree.node_count());
        let _enter = span.enter();

        let mut edges = Vec::with_capacity(tree.node_count());
        let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();
        queue.push_back((tree.root(), 0));
        let mut next_id = 1;

        while let Some((node_id, id)) = queue.pop_front() {
            // INVARIANT: BFS_IDS_DENSE
            // Ids are handed out in queue order, so they come back out in order
            debug_assert_eq!(id, edges.len());

            let mut kids = Vec::new();
            for child in tree.node(node_id).children() {
                if let Some((start, end)) = tree.node(child).edge() {
                    kids.push(Edge {
                        node: next_id,
                        start,
                        end,
                    });
                }
                queue.push_back((child, next_id));
                next_id += 1;
            }
            edges.push(kids);
        }

        debug!(nodes = edges.len(), "edge list exported");
        Self { edges }
    }

    /// Outgoing edges of `node_id`. Empty for leaves and unknown ids.
    pub fn edges(&self, node_id: usize) -> &[Edge] {
        self.edges.get(node_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of edges, one per non-root node.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// `(node_id, outgoing edges)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Edge])> {
        self.edges.iter().enumerate().map(|(id, e)| (id, e.as_slice()))
    }
}
