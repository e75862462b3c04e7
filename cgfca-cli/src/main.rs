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

//! CGFCA CLI
//!
//! Command-line interface for running the CG-to-FCA analysis over a
//! graph document and exporting the path report and CXT cross-table.

use anyhow::{Context, Result};
use cgfca_core::ConceptGraph;
use cgfca_engine::{render_cxt, render_report, PathFinder, ReportOptions};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};

#[derive(Parser)]
#[command(name = "cgfca")]
#[command(about = "CGFCA - conceptual-graph to formal-context analysis", long_about = None)]
struct Cli {
    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a graph and write the report and cross-table next to it
    Analyze {
        /// Graph document (JSON)
        graph: PathBuf,

        /// List every computed path, not just cycles and
        /// input-to-output pathways
        #[arg(long)]
        all_paths: bool,
    },

    /// Print the path report to stdout
    Report {
        /// Graph document (JSON)
        graph: PathBuf,

        /// List every computed path, not just cycles and
        /// input-to-output pathways
        #[arg(long)]
        all_paths: bool,
    },

    /// Print the CXT cross-table to stdout
    Cxt {
        /// Graph document (JSON)
        graph: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        Commands::Analyze { graph, all_paths } => analyze(&graph, all_paths),
        Commands::Report { graph, all_paths } => {
            let loaded = load_graph(&graph)?;
            let finder = run_engine(&loaded);
            print!("{}", render_report(&loaded, &finder, &report_options(all_paths)));
            Ok(())
        }
        Commands::Cxt { graph } => {
            let loaded = load_graph(&graph)?;
            let finder = run_engine(&loaded);
            print!("{}", render_cxt(&loaded, &finder, &document_name(&graph)));
            Ok(())
        }
    }
}

fn load_graph(path: &Path) -> Result<ConceptGraph> {
    ConceptGraph::load_json(path)
        .with_context(|| format!("failed to load graph document {}", path.display()))
}

fn run_engine(graph: &ConceptGraph) -> PathFinder<'_> {
    let mut finder = PathFinder::new(graph);
    finder.run();
    finder
}

fn report_options(all_paths: bool) -> ReportOptions {
    ReportOptions {
        only_input_output_paths: !all_paths,
    }
}

/// The document file name, used as the cross-table's context name.
fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Run the analysis and write `<stem>.txt` and `<stem>.cxt` alongside the
/// input document.
fn analyze(graph_path: &Path, all_paths: bool) -> Result<()> {
    let graph = load_graph(graph_path)?;
    let finder = run_engine(&graph);

    if finder.binaries().is_empty() || finder.targets().is_empty() {
        warn!(
            graph = %graph_path.display(),
            "graph has no attributes or no concepts; outputs will be empty"
        );
    }

    let report_path = graph_path.with_extension("txt");
    let cxt_path = graph_path.with_extension("cxt");

    let report = render_report(&graph, &finder, &report_options(all_paths));
    fs::write(&report_path, report)
        .with_context(|| format!("failed to write report {}", report_path.display()))?;
    info!(path = %report_path.display(), "wrote path report");

    let cxt = render_cxt(&graph, &finder, &document_name(graph_path));
    fs::write(&cxt_path, cxt)
        .with_context(|| format!("failed to write cross-table {}", cxt_path.display()))?;
    info!(path = %cxt_path.display(), "wrote formal context");

    Ok(())
}
