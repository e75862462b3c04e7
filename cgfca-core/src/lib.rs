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

//! CGFCA Core
//!
//! The conceptual-graph data model: nodes (concepts, relations, actors),
//! directed arcs, linked-node queries, and the binary-tuple extraction that
//! turns a graph's relation arguments into formal-context attributes.
//!
//! Node identity is the arena index, never the label. Two nodes with the
//! same label are distinct nodes everywhere in this workspace.

pub mod error;
pub mod graph;
pub mod node;
pub mod tuple;

pub use error::GraphError;
pub use graph::{ArcDoc, ConceptGraph, GraphDoc, NodeDoc};
pub use node::{Direction, GraphEdge, GraphNode, NodeId, NodeKind};
pub use tuple::{binary_tuples, BinaryTuple};
