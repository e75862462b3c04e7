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

//! End-to-end checks of the analysis pipeline on small graphs.

use cgfca_core::{BinaryTuple, ConceptGraph, NodeId};
use cgfca_engine::{render_cxt, render_report, PathFinder, ReportOptions};

/// A -> r1 -> B -> r2 -> C -> r3 -> A
fn cycle_chain() -> (ConceptGraph, [NodeId; 6]) {
    let mut graph = ConceptGraph::new();
    let a = graph.add_concept("A");
    let r1 = graph.add_relation("r1");
    let b = graph.add_concept("B");
    let r2 = graph.add_relation("r2");
    let c = graph.add_concept("C");
    let r3 = graph.add_relation("r3");
    for (from, to) in [(a, r1), (r1, b), (b, r2), (r2, c), (c, r3), (r3, a)] {
        graph.add_arc(from, to).expect("arc rejected");
    }
    (graph, [a, r1, b, r2, c, r3])
}

/// A -> r1 -> B -> r2 -> C
fn dag_chain() -> (ConceptGraph, [NodeId; 5]) {
    let mut graph = ConceptGraph::new();
    let a = graph.add_concept("A");
    let r1 = graph.add_relation("r1");
    let b = graph.add_concept("B");
    let r2 = graph.add_relation("r2");
    let c = graph.add_concept("C");
    for (from, to) in [(a, r1), (r1, b), (b, r2), (r2, c)] {
        graph.add_arc(from, to).expect("arc rejected");
    }
    (graph, [a, r1, b, r2, c])
}

fn grid_snapshot(finder: &PathFinder) -> Vec<Vec<Vec<NodeId>>> {
    finder
        .grid()
        .cells()
        .map(|cell| cell.paths().iter().map(|p| p.nodes().to_vec()).collect())
        .collect()
}

#[test]
fn test_cycle_discovery() {
    let (graph, [a, r1, b, r2, c, r3]) = cycle_chain();
    let mut finder = PathFinder::new(&graph);
    finder.build_all_paths();

    let a_r1 = BinaryTuple {
        concept: a,
        relation: r1,
    };
    let paths = finder.current_paths(&a_r1, a);
    assert_eq!(paths.len(), 1, "expected exactly the closing cycle");
    assert_eq!(paths[0].nodes(), [a, r1, b, r2, c, r3, a]);
    assert!(paths[0].is_cycle());
}

#[test]
fn test_direct_path_discovery() {
    let (graph, [a, r1, b, r2, c]) = dag_chain();
    let mut finder = PathFinder::new(&graph);
    finder.build_all_paths();

    let a_r1 = BinaryTuple {
        concept: a,
        relation: r1,
    };
    let paths = finder.current_paths(&a_r1, c);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].nodes(), [a, r1, b, r2, c]);
    assert!(!paths[0].is_cycle());
}

#[test]
fn test_dag_terminal_classification() {
    let (graph, [a, _r1, b, _r2, c]) = dag_chain();
    assert!(graph.is_input(a));
    assert!(graph.is_output(c));
    assert!(!graph.is_input(b));
    assert!(!graph.is_output(b));
}

#[test]
fn test_prune_keeps_first_cycle_copy_only() {
    let (graph, [a, r1, b, r2, c, r3]) = cycle_chain();
    let mut finder = PathFinder::new(&graph);
    finder.run();

    let mut cycle_copies = 0;
    for cell in finder.grid().cells() {
        cycle_copies += cell.paths().iter().filter(|p| p.is_cycle()).count();
    }
    assert_eq!(cycle_copies, 1, "one loop must keep exactly one record");

    // The surviving record sits in the first cell of grid order, which is
    // the ((A, r1), A) search that closed it first.
    let a_r1 = BinaryTuple {
        concept: a,
        relation: r1,
    };
    let kept = finder.current_paths(&a_r1, a);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].nodes(), [a, r1, b, r2, c, r3, a]);
}

#[test]
fn test_prune_is_idempotent() {
    let (graph, _) = cycle_chain();
    let mut finder = PathFinder::new(&graph);
    finder.run();
    let once = grid_snapshot(&finder);
    finder.prune_cycles();
    assert_eq!(grid_snapshot(&finder), once);
}

#[test]
fn test_report_shows_cycles_regardless_of_terminals() {
    // The pure cycle graph has no inputs and no outputs, yet the loop is
    // reported.
    let (graph, _) = cycle_chain();
    let mut finder = PathFinder::new(&graph);
    finder.run();
    let report = render_report(&graph, &finder, &ReportOptions::default());
    assert!(report.starts_with("Inputs: \n\nOutputs: \n\n"));
    assert!(report.contains("Cycle: A - r1 - B - r2 - C - r3 - A"));
    assert!(!report.contains("Direct Pathway:"));
}

#[test]
fn test_report_direct_paths_need_terminals() {
    let (graph, _) = dag_chain();
    let mut finder = PathFinder::new(&graph);
    finder.run();
    let report = render_report(&graph, &finder, &ReportOptions::default());
    assert!(report.contains("Direct Pathway: A - r1 - B - r2 - C"));
    // Partial hops are computed but filtered from the report.
    assert!(!report.contains("Direct Pathway: A - r1 - B\n"));
    assert!(!report.contains("Direct Pathway: B - r2 - C"));
}

#[test]
fn test_cxt_marks_follow_incidence() {
    let (graph, _) = dag_chain();
    let mut finder = PathFinder::new(&graph);
    finder.run();
    let cxt = render_cxt(&graph, &finder, "dag");
    let lines: Vec<&str> = cxt.lines().collect();
    assert_eq!(lines[0], "B");
    assert_eq!(lines[1], "dag");
    assert_eq!(lines[2], "3 2");
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "A r1");
    assert_eq!(lines[5], "B r2");
    // (A r1) reaches B and C; (B r2) reaches only C.
    assert_eq!(lines[6], "A ..");
    assert_eq!(lines[7], "B X.");
    assert_eq!(lines[8], "C XX");
}

#[test]
fn test_nodes_with_identical_labels_are_distinct() {
    // Two concepts both labeled "X" feed two relations both labeled "r".
    // Each attribute column only reaches its own branch's target.
    let mut graph = ConceptGraph::new();
    let x1 = graph.add_concept("X");
    let x2 = graph.add_concept("X");
    let r1 = graph.add_relation("r");
    let r2 = graph.add_relation("r");
    let t1 = graph.add_concept("T1");
    let t2 = graph.add_concept("T2");
    graph.add_arc(x1, r1).expect("arc rejected");
    graph.add_arc(r1, t1).expect("arc rejected");
    graph.add_arc(x2, r2).expect("arc rejected");
    graph.add_arc(r2, t2).expect("arc rejected");

    let mut finder = PathFinder::new(&graph);
    finder.run();

    let x1_r = BinaryTuple {
        concept: x1,
        relation: r1,
    };
    let x2_r = BinaryTuple {
        concept: x2,
        relation: r2,
    };
    assert_eq!(finder.current_paths(&x1_r, t1).len(), 1);
    assert!(finder.current_paths(&x1_r, t2).is_empty());
    assert_eq!(finder.current_paths(&x2_r, t2).len(), 1);
    assert!(finder.current_paths(&x2_r, t1).is_empty());
}
