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

//! Error types for graph construction and document loading.

use crate::node::NodeId;
use thiserror::Error;

/// Errors raised while building a graph or reading a graph document.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("unknown node key: {0}")]
    UnknownNode(String),

    #[error("duplicate node key: {0}")]
    DuplicateNode(String),

    #[error("node id {0} is not in the graph")]
    NodeOutOfRange(NodeId),

    #[error("arc must join a concept to a relation or actor: \"{from}\" -> \"{to}\"")]
    InvalidArc { from: String, to: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
