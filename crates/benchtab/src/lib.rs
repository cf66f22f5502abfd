// benchtab - Criterion comparison tables
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Comparison tables from Criterion benchmark results.
//!
//! `benchtab` reads the results Criterion leaves under `target/criterion`
//! for two competing implementations (by default `flate2` and
//! `libdeflate`), reduces each benchmark group to one mean time per
//! implementation and prints an aligned table:
//!
//! ```text
//! bench     size [KB]    flate2 [us]    libdeflate [us]    speedup
//! sample    4            2000           500                4.0
//! ```
//!
//! # Pipeline
//!
//! 1. [`collector::collect`] discovers one group per directory under the
//!    results root and reads both artifacts ([`artifact`]).
//! 2. Each [`Measurement`] is rendered into a [`ResultRow`] of strings.
//! 3. [`Table`] computes column widths over all rows and lays out the lines.
//!
//! # Examples
//!
//! ```no_run
//! use benchtab::{generate_report, Mode, ReportConfig};
//!
//! # fn main() -> benchtab::Result<()> {
//! let config = ReportConfig::for_mode(Some(Mode::Encode)).with_env();
//! print!("{}", generate_report(&config)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every failure is fatal. A missing dataset file, a missing artifact or a
//! malformed one aborts the run with a [`ReportError`]; no partial table is
//! produced.

pub mod artifact;
pub mod collector;
pub mod config;
pub mod error;
pub mod row;
pub mod table;

pub use config::{ArtifactKind, Mode, ReportConfig, RowOrder};
pub use error::{ReportError, Result};
pub use row::{column_labels, Measurement, ResultRow};
pub use table::{Column, Table};

/// Lay out already collected measurements, keeping their order.
pub fn build_table(config: &ReportConfig, measurements: &[Measurement]) -> Table {
    let rows: Vec<ResultRow> = measurements.iter().map(ResultRow::from).collect();
    Table::from_rows(column_labels(&config.baseline, &config.challenger), &rows)
}

/// Collect all groups and lay them out as a table.
pub fn generate_report(config: &ReportConfig) -> Result<Table> {
    let measurements = collector::collect(config)?;
    Ok(build_table(config, &measurements))
}
