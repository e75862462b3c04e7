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

//! Path Enumeration Engine
//!
//! For every (attribute, concept) pair of the grid, a depth-first search
//! discovers every direct path and every cycle reachable from the
//! attribute and records it in the pair's cell. The search enumerates
//! everything and is sized for small hand-authored graphs; run time on a
//! densely cyclic graph is unbounded.
//!
//! A branch ends when it closes a cycle or runs out of unvisited
//! concepts, so every branch terminates on a finite graph.

use crate::grid::FormalContext;
use crate::path::Path;
use cgfca_core::{binary_tuples, BinaryTuple, ConceptGraph, Direction, NodeId, NodeKind};
use tracing::{debug, warn};

/// One analysis run: the graph under analysis, its ordered attribute
/// tuples and target concepts, and the grid being populated.
pub struct PathFinder<'g> {
    graph: &'g ConceptGraph,
    binaries: Vec<BinaryTuple>,
    targets: Vec<NodeId>,
    grid: FormalContext,
}

impl<'g> PathFinder<'g> {
    /// Extract the graph's attributes and concepts and allocate the grid.
    pub fn new(graph: &'g ConceptGraph) -> Self {
        let binaries = binary_tuples(graph);
        let targets: Vec<NodeId> = graph.concepts().collect();
        let grid = FormalContext::new(binaries.clone(), targets.clone());
        debug!(
            attributes = binaries.len(),
            elements = targets.len(),
            "initialized formal context"
        );
        Self {
            graph,
            binaries,
            targets,
            grid,
        }
    }

    /// The populated grid.
    pub fn grid(&self) -> &FormalContext {
        &self.grid
    }

    /// The ordered attribute tuples.
    pub fn binaries(&self) -> &[BinaryTuple] {
        &self.binaries
    }

    /// The ordered target concepts.
    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    /// The paths currently recorded between a tuple and a concept.
    pub fn current_paths(&self, tuple: &BinaryTuple, concept: NodeId) -> &[Path] {
        self.grid.cell(tuple, concept).paths()
    }

    /// Run the whole analysis: enumerate every path, then prune
    /// duplicated cycle records. One atomic unit of work; the grid is a
    /// consistent snapshot only after this returns.
    pub fn run(&mut self) {
        self.build_all_paths();
        self.prune_cycles();
    }

    /// Find all paths and cycles for every attribute x element pair and
    /// record them in the grid.
    pub fn build_all_paths(&mut self) {
        for tuple_idx in 0..self.binaries.len() {
            for target_idx in 0..self.targets.len() {
                let tuple = self.binaries[tuple_idx];
                let target = self.targets[target_idx];
                self.build_paths(tuple, target);
            }
        }
        debug!("path enumeration complete");
    }

    /// Depth-first search from one attribute toward one target concept.
    ///
    /// Runs on an explicit work stack rather than the call stack, so a
    /// pathological graph exhausts patience, not stack frames. Successor
    /// branches are pushed in reverse so paths are discovered in the same
    /// order a recursive descent would find them.
    fn build_paths(&mut self, tuple: BinaryTuple, target: NodeId) {
        let graph = self.graph;
        let mut seed = Path::new();
        seed.push_tuple(&tuple);
        let mut stack = vec![seed];

        while let Some(path) = stack.pop() {
            let Some(tail) = path.last() else {
                continue;
            };
            // Seeding and extension both end on a relation; anything else
            // means a broken invariant upstream, so drop the branch.
            if graph.kind(tail) != NodeKind::Relation {
                warn!(
                    path = %path.describe(graph),
                    "path does not end with a relation; abandoning branch"
                );
                continue;
            }
            let linked = graph.linked_nodes(tail, Direction::Outgoing);

            if linked.contains(&target) {
                let mut found = path.clone();
                found.push_concept(target);
                self.add_to_current_paths(found, &tuple, target);
            }
            // Keep looking regardless: other routes to the target may
            // still branch off below.
            let mut branches = Vec::new();
            for &next in linked {
                if path.contains(next) {
                    // Closed a loop. Record it against the pair that
                    // triggered this search, whether or not `next` is the
                    // target, and stop extending this branch.
                    let mut cycle = path.clone();
                    cycle.push_concept(next);
                    self.add_to_current_paths(cycle, &tuple, target);
                } else {
                    for next_tuple in self.tuples_from_concept(next) {
                        let mut extended = path.clone();
                        extended.push_tuple(&next_tuple);
                        branches.push(extended);
                    }
                }
            }
            while let Some(branch) = branches.pop() {
                stack.push(branch);
            }
        }
    }

    /// Every attribute tuple whose source concept is `concept`.
    fn tuples_from_concept(&self, concept: NodeId) -> Vec<BinaryTuple> {
        self.binaries
            .iter()
            .filter(|bt| bt.concept == concept)
            .copied()
            .collect()
    }

    /// Record a path in the cell for (tuple, concept) unless an equal one
    /// is already there. Returns whether it was inserted.
    fn add_to_current_paths(&mut self, path: Path, tuple: &BinaryTuple, concept: NodeId) -> bool {
        self.grid.cell_mut(tuple, concept).add_path(path)
    }

    /// Remove cycle records that duplicate a cycle kept elsewhere.
    ///
    /// The same physical loop is discovered once per entry point, so it
    /// surfaces in many cells as rotations of one node sequence. The
    /// first cell in grid order keeps its copy; every equivalent record
    /// in every other cell is deleted. Running this twice removes nothing
    /// the second time.
    pub fn prune_cycles(&mut self) {
        let cell_count = self.grid.cell_count();
        let mut removed = 0;
        for keeper in 0..cell_count {
            let cycles: Vec<Path> = self
                .grid
                .cell_at(keeper)
                .paths()
                .iter()
                .filter(|p| p.is_cycle())
                .cloned()
                .collect();
            for cycle in &cycles {
                for other in 0..cell_count {
                    if other != keeper {
                        removed += self.grid.cell_at_mut(other).remove_cycle_duplicates(cycle);
                    }
                }
            }
        }
        debug!(removed, "pruned duplicated cycle records");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_recorded_under_triggering_pair() {
        // A -> r1 -> B -> r2 -> A, with an extra output concept Z fed by
        // B -> r3 -> Z. Searching (A, r1) for Z walks into the loop and
        // must record the cycle in the (A r1, Z) cell it was searching.
        let mut graph = ConceptGraph::new();
        let a = graph.add_concept("A");
        let r1 = graph.add_relation("r1");
        let b = graph.add_concept("B");
        let r2 = graph.add_relation("r2");
        let r3 = graph.add_relation("r3");
        let z = graph.add_concept("Z");
        graph.add_arc(a, r1).unwrap();
        graph.add_arc(r1, b).unwrap();
        graph.add_arc(b, r2).unwrap();
        graph.add_arc(r2, a).unwrap();
        graph.add_arc(b, r3).unwrap();
        graph.add_arc(r3, z).unwrap();

        let mut finder = PathFinder::new(&graph);
        finder.build_all_paths();

        let a_r1 = BinaryTuple {
            concept: a,
            relation: r1,
        };
        let cell_paths = finder.current_paths(&a_r1, z);
        assert!(
            cell_paths
                .iter()
                .any(|p| p.is_cycle() && p.nodes() == [a, r1, b, r2, a]),
            "cycle missing from the cell whose search closed it"
        );
        assert!(
            cell_paths.iter().any(|p| p.nodes() == [a, r1, b, r3, z]),
            "direct path to Z missing"
        );
    }

    #[test]
    fn test_search_continues_past_target() {
        // A -> r1 -> B -> r2 -> B2 -> r3 -> B: searching (A, r1) for B
        // finds the one-hop path and still walks on to close the loop
        // back at B.
        let mut graph = ConceptGraph::new();
        let a = graph.add_concept("A");
        let r1 = graph.add_relation("r1");
        let b = graph.add_concept("B");
        let r2 = graph.add_relation("r2");
        let b2 = graph.add_concept("B2");
        let r3 = graph.add_relation("r3");
        graph.add_arc(a, r1).unwrap();
        graph.add_arc(r1, b).unwrap();
        graph.add_arc(b, r2).unwrap();
        graph.add_arc(r2, b2).unwrap();
        graph.add_arc(b2, r3).unwrap();
        graph.add_arc(r3, b).unwrap();

        let mut finder = PathFinder::new(&graph);
        finder.build_all_paths();

        let a_r1 = BinaryTuple {
            concept: a,
            relation: r1,
        };
        let paths = finder.current_paths(&a_r1, b);
        assert!(paths.iter().any(|p| p.nodes() == [a, r1, b]));
        // The longer route revisits B without returning to A, so it is
        // recorded but does not count as a cycle.
        assert!(paths
            .iter()
            .any(|p| !p.is_cycle() && p.nodes() == [a, r1, b, r2, b2, r3, b]));
    }

    #[test]
    fn test_empty_graph_is_valid() {
        let graph = ConceptGraph::new();
        let mut finder = PathFinder::new(&graph);
        finder.run();
        assert_eq!(finder.grid().cell_count(), 0);
        assert!(finder.binaries().is_empty());
        assert!(finder.targets().is_empty());
    }
}
