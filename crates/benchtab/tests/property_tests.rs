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

//! Property-based tests for the table renderer.
//!
//! - Every column is at least two wider than its header and every cell
//! - All lines of a table have the same length
//! - Speedup cells match the raw means rounded to one decimal
//! - Rendering keeps row order and is deterministic

use benchtab::{column_labels, Measurement, ResultRow, Table};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9_.\\-]{0,24}").expect("Failed to create cell regex")
}

fn bench_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_\\-]{0,15}").expect("Failed to create name regex")
}

fn measurement() -> impl Strategy<Value = Measurement> {
    (bench_name(), 0u64..10_000_000_000, 1.0f64..1e10, 1.0f64..1e10)
        .prop_map(|(name, size, a, b)| Measurement::new(name, size, a, b))
}

proptest! {
    #[test]
    fn prop_widths_cover_header_and_cells(
        rows in prop::collection::vec(prop::collection::vec(cell(), 5), 0..20)
    ) {
        let labels = column_labels("flate2", "libdeflate");
        let table = Table::new(labels.clone(), rows.clone());

        for (idx, column) in table.columns().iter().enumerate() {
            prop_assert!(column.width >= labels[idx].len() + 2);
            for row in &rows {
                prop_assert!(column.width >= row[idx].len() + 2);
            }
        }
    }

    #[test]
    fn prop_lines_have_equal_length(
        rows in prop::collection::vec(prop::collection::vec(cell(), 5), 0..20)
    ) {
        let table = Table::new(column_labels("a", "b"), rows.clone());
        let lines = table.lines();

        prop_assert_eq!(lines.len(), rows.len() + 1);
        let expected = lines[0].len();
        for line in &lines {
            prop_assert_eq!(line.len(), expected);
        }
    }

    #[test]
    fn prop_speedup_matches_raw_means(m in measurement()) {
        let row = ResultRow::from(&m);
        let shown: f64 = row.speedup.parse().expect("speedup is numeric");
        let exact = m.baseline_ns / m.challenger_ns;

        prop_assert!((shown - exact).abs() <= 0.05 + 1e-9 * exact);
        prop_assert_eq!(row.speedup.split('.').nth(1).map(str::len), Some(1));
    }

    #[test]
    fn prop_rendering_is_deterministic(ms in prop::collection::vec(measurement(), 0..10)) {
        let render = || {
            let rows: Vec<ResultRow> = ms.iter().map(ResultRow::from).collect();
            Table::from_rows(column_labels("flate2", "libdeflate"), &rows).to_string()
        };
        prop_assert_eq!(render(), render());
    }

    #[test]
    fn prop_row_order_is_preserved(ms in prop::collection::vec(measurement(), 1..10)) {
        let rows: Vec<ResultRow> = ms.iter().map(ResultRow::from).collect();
        let table = Table::from_rows(column_labels("a", "b"), &rows);

        for (line, m) in table.lines().iter().skip(1).zip(&ms) {
            prop_assert!(line.starts_with(&m.bench));
        }
    }
}
