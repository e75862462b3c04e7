// Copyright 2025 CGFCA Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Path Abstraction
//!
//! A path is an ordered sequence of node ids: alternating concepts and
//! relations as laid down by the search. Paths never own their nodes;
//! they index into a graph that outlives them, so cloning a path copies
//! ids only. A cycle repeats its starting node at the end.

use cgfca_core::{BinaryTuple, ConceptGraph, NodeId};

/// One traversal from an attribute toward a target concept.
#[derive(Debug, Clone, Default)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a concept to the end of the path.
    pub fn push_concept(&mut self, concept: NodeId) {
        self.nodes.push(concept);
    }

    /// Append a tuple's concept and relation to the end of the path.
    pub fn push_tuple(&mut self, tuple: &BinaryTuple) {
        self.nodes.push(tuple.concept);
        self.nodes.push(tuple.relation);
    }

    /// Whether the node occurs anywhere in the path.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// The node sequence.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// First node, if any.
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node, if any.
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// How many concepts and relations are in the path. For a cycle the
    /// repeated first/last node counts twice.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the path has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// A cycle ends on the node it started from.
    pub fn is_cycle(&self) -> bool {
        self.len() > 1 && self.first() == self.last()
    }

    /// Compare two paths for equality.
    ///
    /// Empty paths are never equal to anything, including each other;
    /// that exception is why this is a named method and not `PartialEq`.
    /// Two non-empty paths match when their node sequences are identical
    /// either in order or in exact reverse order.
    pub fn same_as(&self, other: &Path) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if self.len() != other.len() {
            return false;
        }
        if self.nodes == other.nodes {
            return true;
        }
        self.nodes.iter().rev().eq(other.nodes.iter())
    }

    /// Whether two cycles trace the same loop.
    ///
    /// Equal-length cycles match when one, read forward from wherever the
    /// other's start node first occurs, repeats the other element for
    /// element. Traversal direction is significant: a reversed rotation is
    /// a different cycle, though an exact reversal sharing the start
    /// position is accepted through [`Path::same_as`].
    pub fn cycle_same(&self, other: &Path) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if !self.is_cycle() || !other.is_cycle() {
            return false;
        }
        let Some(start) = self.first() else {
            return false;
        };
        if !other.contains(start) {
            return false;
        }
        if self.same_as(other) {
            return true;
        }

        let Some(mut other_idx) = other.nodes.iter().position(|&n| n == start) else {
            return false;
        };
        // Walk the other cycle in step with this one, wrapping past the
        // duplicated end node back to index 1.
        for idx in 1..self.len() {
            other_idx += 1;
            if other_idx == other.len() {
                other_idx = 1;
            }
            if other.nodes[other_idx] != self.nodes[idx] {
                return false;
            }
        }
        true
    }

    /// Whether the path runs from an input concept to an output concept.
    pub fn is_between_terminals(&self, graph: &ConceptGraph) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => graph.is_input(first) && graph.is_output(last),
            _ => false,
        }
    }

    /// Render the path, e.g. `Direct Pathway: Cat - sits-on - Mat` or
    /// `Cycle: A - r1 - B - r2 - A`.
    pub fn describe(&self, graph: &ConceptGraph) -> String {
        let prefix = if self.is_cycle() {
            "Cycle: "
        } else {
            "Direct Pathway: "
        };
        let labels: Vec<&str> = self.nodes.iter().map(|&id| graph.label(id)).collect();
        format!("{}{}", prefix, labels.join(" - "))
    }
}
