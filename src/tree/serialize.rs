// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pre-order serialization of an [`EdgeList`].
//!
//! Equivalent to the recursive walk
//!
//! ```text
//! visit(node):
//!     for edge in edges(node):
//!         emit [edge.start, edge.end + 1)
//!         visit(edge.node)
//! ```
//!
//! but with an explicit `(node_id, next_edge_index)` stack, so a degenerate
//! tree as deep as the text cannot overflow the call stack.

use super::export::EdgeList;

/// Lazy pre-order walk over the edges of an [`EdgeList`], starting at node 0.
#[derive(Debug)]
pub struct PreOrder<'a> {
    list: &'a EdgeList,
    stack: Vec<(usize, usize)>,
}

impl<'a> PreOrder<'a> {
    pub fn new(list: &'a EdgeList) -> Self {
        Self {
            list,
            stack: vec![(0, 0)],
        }
    }
}

impl Iterator for PreOrder<'_> {
    /// Half-open `(start, end)` label range.
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, edge_index)) = self.stack.pop() {
            let edges = self.list.edges(node);
            let Some(edge) = edges.get(edge_index) else {
                continue;
            };
            if edge_index + 1 < edges.len() {
                self.stack.push((node, edge_index + 1));
            }
            self.stack.push((edge.node, 0));
            return Some(edge.half_open());
        }
        None
    }
}

/// Every edge of the tree as a half-open range, in pre-order.
pub fn serialize_edges(list: &EdgeList) -> Vec<(usize, usize)> {
    PreOrder::new(list).collect()
}
