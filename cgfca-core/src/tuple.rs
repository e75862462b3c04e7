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

//! Binary Tuples
//!
//! A binary tuple is a (source concept, relation) pair: one attribute
//! column of the formal context. The concept a relation points at is not
//! part of the tuple identity; it only steers the search.

use crate::graph::ConceptGraph;
use crate::node::{Direction, NodeId, NodeKind};

/// One attribute of the formal context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryTuple {
    /// The concept the relation leaves
    pub concept: NodeId,
    /// The relation itself
    pub relation: NodeId,
}

impl BinaryTuple {
    /// The attribute caption, e.g. `Cat sits-on`.
    pub fn attribute_label(&self, graph: &ConceptGraph) -> String {
        format!("{} {}", graph.label(self.concept), graph.label(self.relation))
    }
}

/// Extract the ordered attribute set of a graph.
///
/// For every relation node in insertion order, every concept linked into
/// it yields one tuple. Actor arguments do not form attributes.
pub fn binary_tuples(graph: &ConceptGraph) -> Vec<BinaryTuple> {
    let mut tuples = Vec::new();
    for relation in graph.relations() {
        for &source in graph.linked_nodes(relation, Direction::Incoming) {
            if graph.kind(source) == NodeKind::Concept {
                tuples.push(BinaryTuple {
                    concept: source,
                    relation,
                });
            }
        }
    }
    tuples
}
