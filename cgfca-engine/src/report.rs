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

//! Report & Cross-Table Formatting
//!
//! Renders a populated grid as a human-readable path report and as the
//! CXT cross-table consumed by formal-concept-analysis tools.

use crate::path::Path;
use crate::pathfinder::PathFinder;
use cgfca_core::ConceptGraph;

/// Report rendering options.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// When set, only cycles and input-to-output pathways are listed.
    /// Everything else stays in the grid but is not printed.
    pub only_input_output_paths: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            only_input_output_paths: true,
        }
    }
}

/// Whether a path belongs in an input-output report: every cycle does,
/// and so does any pathway running terminal to terminal.
pub fn belongs_in_input_output_report(graph: &ConceptGraph, path: &Path) -> bool {
    path.is_cycle() || path.is_between_terminals(graph)
}

/// Render the path report.
///
/// Starts with the input and output concepts (quoted, comma-separated),
/// then lists each recorded path in grid order, one per line with a
/// blank line after it.
pub fn render_report(graph: &ConceptGraph, finder: &PathFinder, options: &ReportOptions) -> String {
    let mut report = String::new();

    let quoted = |ids: Vec<cgfca_core::NodeId>| -> String {
        ids.iter()
            .map(|&id| format!("\"{}\"", graph.label(id)))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let inputs: Vec<_> = finder
        .targets()
        .iter()
        .copied()
        .filter(|&c| graph.is_input(c))
        .collect();
    let outputs: Vec<_> = finder
        .targets()
        .iter()
        .copied()
        .filter(|&c| graph.is_output(c))
        .collect();
    report.push_str(&format!("Inputs: {}\n\n", quoted(inputs)));
    report.push_str(&format!("Outputs: {}\n\n", quoted(outputs)));

    for tuple in finder.binaries() {
        for &concept in finder.targets() {
            for path in finder.current_paths(tuple, concept) {
                if !options.only_input_output_paths
                    || belongs_in_input_output_report(graph, path)
                {
                    report.push_str(&path.describe(graph));
                    report.push_str("\n\n");
                }
            }
        }
    }
    report
}

/// Render the formal-context cross-table for the run.
pub fn render_cxt(graph: &ConceptGraph, finder: &PathFinder, name: &str) -> String {
    finder.grid().to_cxt_string(graph, name)
}
