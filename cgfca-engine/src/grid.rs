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

//! Formal Context Grid
//!
//! The attribute x element matrix of one analysis run. Attributes are
//! binary tuples, elements are concepts; each cell carries a has-path
//! incidence flag and the ordered, deduplicated set of paths found for
//! that pair. The shape is fixed at construction; only cell contents
//! change during enumeration and pruning.

use crate::path::Path;
use cgfca_core::{BinaryTuple, ConceptGraph, NodeId};
use std::collections::HashMap;

/// One cell of the formal context.
#[derive(Debug, Default)]
pub struct PathCell {
    /// Incidence mark for the CXT cross-table
    pub has_path: bool,
    paths: Vec<Path>,
}

impl PathCell {
    /// Add a path unless an equal one (forward or reversed) is already
    /// present. Returns whether the path was inserted.
    pub fn add_path(&mut self, path: Path) -> bool {
        if self.paths.iter().any(|p| p.same_as(&path)) {
            return false;
        }
        self.paths.push(path);
        self.has_path = true;
        true
    }

    /// The recorded paths, in insertion order.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Drop every path that traces the same loop as `cycle`.
    /// Returns how many were removed. The incidence mark is left alone:
    /// the loop still passes through this pair, its record just lives in
    /// another cell now.
    pub fn remove_cycle_duplicates(&mut self, cycle: &Path) -> usize {
        let before = self.paths.len();
        self.paths.retain(|p| !cycle.cycle_same(p));
        before - self.paths.len()
    }
}

/// The formal context of one analysis run.
///
/// Built once per run and exclusively owned by it. Cell iteration order
/// is attribute-major in insertion order, and the prune pass's
/// keep-first-found rule relies on that order being stable.
#[derive(Debug)]
pub struct FormalContext {
    attributes: Vec<BinaryTuple>,
    elements: Vec<NodeId>,
    /// Attribute-major: cell (a, e) lives at `a * elements.len() + e`
    cells: Vec<PathCell>,
    attribute_index: HashMap<BinaryTuple, usize>,
    element_index: HashMap<NodeId, usize>,
}

impl FormalContext {
    /// Allocate an empty grid over the given attribute and element sets.
    pub fn new(attributes: Vec<BinaryTuple>, elements: Vec<NodeId>) -> Self {
        let attribute_index = attributes
            .iter()
            .enumerate()
            .map(|(idx, &bt)| (bt, idx))
            .collect();
        let element_index = elements
            .iter()
            .enumerate()
            .map(|(idx, &el)| (el, idx))
            .collect();
        let mut cells = Vec::with_capacity(attributes.len() * elements.len());
        cells.resize_with(attributes.len() * elements.len(), PathCell::default);
        Self {
            attributes,
            elements,
            cells,
            attribute_index,
            element_index,
        }
    }

    /// The declared attributes, in insertion order.
    pub fn attributes(&self) -> &[BinaryTuple] {
        &self.attributes
    }

    /// The declared elements, in insertion order.
    pub fn elements(&self) -> &[NodeId] {
        &self.elements
    }

    fn cell_index(&self, attribute: &BinaryTuple, element: NodeId) -> usize {
        let a = *self
            .attribute_index
            .get(attribute)
            .unwrap_or_else(|| panic!("cell lookup for undeclared attribute {attribute:?}"));
        let e = *self
            .element_index
            .get(&element)
            .unwrap_or_else(|| panic!("cell lookup for undeclared element {element}"));
        a * self.elements.len() + e
    }

    /// The cell for a declared (attribute, element) pair.
    ///
    /// # Panics
    ///
    /// Panics if either key was not declared at construction. That is a
    /// programming error upstream, not a recoverable condition.
    pub fn cell(&self, attribute: &BinaryTuple, element: NodeId) -> &PathCell {
        &self.cells[self.cell_index(attribute, element)]
    }

    /// Mutable access to the cell for a declared pair.
    ///
    /// # Panics
    ///
    /// Same contract as [`FormalContext::cell`].
    pub fn cell_mut(&mut self, attribute: &BinaryTuple, element: NodeId) -> &mut PathCell {
        let idx = self.cell_index(attribute, element);
        &mut self.cells[idx]
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in attribute-major insertion order.
    pub fn cells(&self) -> impl Iterator<Item = &PathCell> + '_ {
        self.cells.iter()
    }

    pub(crate) fn cell_at(&self, idx: usize) -> &PathCell {
        &self.cells[idx]
    }

    pub(crate) fn cell_at_mut(&mut self, idx: usize) -> &mut PathCell {
        &mut self.cells[idx]
    }

    /// Render the grid as a formal-context cross-table.
    ///
    /// Layout: a `B` format tag, the context name, one header line with
    /// the element and attribute counts, a blank line, one attribute
    /// caption per line, then one line per element carrying its label and
    /// a fixed-width mark string (`X` where the cell's incidence flag is
    /// set, `.` elsewhere).
    pub fn to_cxt_string(&self, graph: &ConceptGraph, name: &str) -> String {
        let mut out = String::new();
        out.push_str("B\n");
        out.push_str(name);
        out.push('\n');
        out.push_str(&format!("{} {}\n\n", self.elements.len(), self.attributes.len()));
        for attribute in &self.attributes {
            out.push_str(&attribute.attribute_label(graph));
            out.push('\n');
        }
        for (e, &element) in self.elements.iter().enumerate() {
            let marks: String = (0..self.attributes.len())
                .map(|a| {
                    if self.cells[a * self.elements.len() + e].has_path {
                        'X'
                    } else {
                        '.'
                    }
                })
                .collect();
            out.push_str(&format!("{} {}\n", graph.label(element), marks));
        }
        out
    }
}
