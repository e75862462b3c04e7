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

//! Node and Arc Types
//!
//! Defines the core types for the conceptual graph.

use serde::{Deserialize, Serialize};

/// A unique identifier for nodes in the conceptual graph.
///
/// Ids are arena indices assigned in insertion order. Identity comparisons
/// throughout the workspace compare ids, not labels.
pub type NodeId = u32;

/// The kind of a conceptual-graph node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A concept box (e.g. "Cat", "Mat")
    Concept,
    /// A relation oval (e.g. "sits-on")
    Relation,
    /// An actor diamond; carried in the model but never part of an attribute
    Actor,
}

impl NodeKind {
    /// Relations and actors link concepts; arcs always join a connector
    /// to a concept.
    pub fn is_connector(&self) -> bool {
        matches!(self, NodeKind::Relation | NodeKind::Actor)
    }
}

/// A conceptual-graph node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    /// Display label; labels may repeat across nodes
    pub label: String,
    /// Node kind
    pub kind: NodeKind,
}

/// A directed arc between two nodes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphEdge {
    /// Source node id
    pub from: NodeId,
    /// Target node id
    pub to: NodeId,
}

/// Direction selector for linked-node queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Nodes this node points at
    Outgoing,
    /// Nodes pointing at this node
    Incoming,
}
