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

//! CGFCA Engine
//!
//! Converts a conceptual graph into a formal context whose rows are the
//! graph's concepts, whose columns are (concept, relation) binary tuples,
//! and whose cells record every distinct traversal path connecting the
//! column to the row, following Polovina and Andrews' CG-to-FCA mapping.
//!
//! ## Pipeline
//!
//! 1. [`PathFinder::new`] extracts the attribute tuples and target
//!    concepts and allocates the grid.
//! 2. [`PathFinder::build_all_paths`] enumerates every simple path and
//!    cycle for every (attribute, concept) pair.
//! 3. [`PathFinder::prune_cycles`] removes cycle records that are
//!    rotations of a cycle already kept in an earlier cell.
//! 4. [`report::render_report`] / [`report::render_cxt`] format the
//!    populated grid for people and for FCA tools respectively.
//!
//! The whole pipeline is synchronous and exclusively owns its grid; run
//! it to completion before reading any results.

pub mod grid;
pub mod path;
pub mod pathfinder;
pub mod report;

pub use grid::{FormalContext, PathCell};
pub use path::Path;
pub use pathfinder::PathFinder;
pub use report::{render_cxt, render_report, ReportOptions};
