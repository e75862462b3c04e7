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

//! Conceptual Graph
//!
//! The graph data structure storing nodes and directed arcs.
//! Uses adjacency lists for efficient traversal and supports:
//! - Node lookup by id
//! - Linked-node queries (outgoing, incoming)
//! - Input/output classification of concepts
//! - Load/save as a JSON document

use crate::error::GraphError;
use crate::node::{Direction, GraphEdge, GraphNode, NodeId, NodeKind};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Adjacency list type; hand-drawn graphs rarely exceed a handful of arcs
/// per node, so the common case stays inline.
type Neighbors = SmallVec<[NodeId; 4]>;

/// A conceptual graph: an arena of nodes plus directed arcs between them.
///
/// One graph instance is exclusively owned by the analysis run that reads
/// it; there is no shared mutation.
#[derive(Debug, Default)]
pub struct ConceptGraph {
    /// Node arena; a node's id is its index here
    nodes: Vec<GraphNode>,
    /// All arcs, in insertion order
    arcs: Vec<GraphEdge>,
    /// Outgoing neighbors per node
    outgoing: Vec<Neighbors>,
    /// Incoming neighbors per node
    incoming: Vec<Neighbors>,
}

impl ConceptGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    fn add_node(&mut self, label: impl Into<String>, kind: NodeKind) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(GraphNode {
            label: label.into(),
            kind,
        });
        self.outgoing.push(Neighbors::new());
        self.incoming.push(Neighbors::new());
        id
    }

    /// Add a concept node and return its id.
    pub fn add_concept(&mut self, label: impl Into<String>) -> NodeId {
        self.add_node(label, NodeKind::Concept)
    }

    /// Add a relation node and return its id.
    pub fn add_relation(&mut self, label: impl Into<String>) -> NodeId {
        self.add_node(label, NodeKind::Relation)
    }

    /// Add an actor node and return its id.
    pub fn add_actor(&mut self, label: impl Into<String>) -> NodeId {
        self.add_node(label, NodeKind::Actor)
    }

    /// Add a directed arc.
    ///
    /// Arcs always join a concept to a relation or actor; both endpoints
    /// must already be in the graph.
    pub fn add_arc(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        for id in [from, to] {
            if id as usize >= self.nodes.len() {
                return Err(GraphError::NodeOutOfRange(id));
            }
        }
        let connectors = [from, to]
            .iter()
            .filter(|&&id| self.kind(id).is_connector())
            .count();
        if connectors != 1 {
            return Err(GraphError::InvalidArc {
                from: self.label(from).to_string(),
                to: self.label(to).to_string(),
            });
        }
        self.arcs.push(GraphEdge { from, to });
        self.outgoing[from as usize].push(to);
        self.incoming[to as usize].push(from);
        Ok(())
    }

    /// Nodes linked to `id` in the given direction, in arc insertion order.
    pub fn linked_nodes(&self, id: NodeId, direction: Direction) -> &[NodeId] {
        match direction {
            Direction::Outgoing => &self.outgoing[id as usize],
            Direction::Incoming => &self.incoming[id as usize],
        }
    }

    /// The node for an id.
    pub fn node(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id as usize]
    }

    /// The label of a node.
    pub fn label(&self, id: NodeId) -> &str {
        &self.nodes[id as usize].label
    }

    /// The kind of a node.
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id as usize].kind
    }

    /// All concept ids, in insertion order.
    pub fn concepts(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids_of_kind(NodeKind::Concept)
    }

    /// All relation ids, in insertion order.
    pub fn relations(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids_of_kind(NodeKind::Relation)
    }

    fn ids_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.kind == kind)
            .map(|(id, _)| id as NodeId)
    }

    /// An "input" node has no incoming arcs.
    pub fn is_input(&self, id: NodeId) -> bool {
        self.incoming[id as usize].is_empty()
    }

    /// An "output" node has no outgoing arcs.
    pub fn is_output(&self, id: NodeId) -> bool {
        self.outgoing[id as usize].is_empty()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of arcs.
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// All arcs, in insertion order.
    pub fn arcs(&self) -> &[GraphEdge] {
        &self.arcs
    }

    /// Build a graph from a document.
    ///
    /// Node keys must be unique; arcs refer to nodes by key. Labels are
    /// free-form and may repeat.
    pub fn from_doc(doc: &GraphDoc) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        let mut ids: HashMap<&str, NodeId> = HashMap::new();
        for node in &doc.nodes {
            if ids.contains_key(node.id.as_str()) {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }
            let id = graph.add_node(node.label.clone(), node.kind);
            ids.insert(&node.id, id);
        }
        for arc in &doc.arcs {
            let from = *ids
                .get(arc.from.as_str())
                .ok_or_else(|| GraphError::UnknownNode(arc.from.clone()))?;
            let to = *ids
                .get(arc.to.as_str())
                .ok_or_else(|| GraphError::UnknownNode(arc.to.clone()))?;
            graph.add_arc(from, to)?;
        }
        Ok(graph)
    }

    /// Render the graph as a document. Keys are generated from node ids.
    pub fn to_doc(&self) -> GraphDoc {
        GraphDoc {
            nodes: self
                .nodes
                .iter()
                .enumerate()
                .map(|(id, node)| NodeDoc {
                    id: format!("n{id}"),
                    label: node.label.clone(),
                    kind: node.kind,
                })
                .collect(),
            arcs: self
                .arcs
                .iter()
                .map(|arc| ArcDoc {
                    from: format!("n{}", arc.from),
                    to: format!("n{}", arc.to),
                })
                .collect(),
        }
    }

    /// Load a graph from a JSON document file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, GraphError> {
        let file = File::open(path.as_ref())?;
        let doc: GraphDoc = serde_json::from_reader(BufReader::new(file))?;
        let graph = Self::from_doc(&doc)?;
        debug!(
            nodes = graph.node_count(),
            arcs = graph.arc_count(),
            "loaded graph document"
        );
        Ok(graph)
    }

    /// Save the graph as a JSON document file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), GraphError> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.to_doc())?;
        writer.flush()?;
        Ok(())
    }
}

/// On-disk graph document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDoc {
    /// Nodes, keyed by a caller-chosen unique string
    pub nodes: Vec<NodeDoc>,
    /// Directed arcs between node keys
    pub arcs: Vec<ArcDoc>,
}

/// One node of a graph document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDoc {
    /// Unique key within the document
    pub id: String,
    /// Display label
    pub label: String,
    /// Node kind
    pub kind: NodeKind,
}

/// One arc of a graph document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcDoc {
    /// Source node key
    pub from: String,
    /// Target node key
    pub to: String,
}
