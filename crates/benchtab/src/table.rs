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

//! Aligned plain-text table.
//!
//! Each column is as wide as its longest cell (header included) plus two
//! spaces; cells are left-justified and joined by two more spaces. Widths
//! are computed once over the whole row set so every line lines up.

use crate::row::ResultRow;
use std::fmt;

/// Padding added to the widest cell of every column.
pub const COLUMN_PADDING: usize = 2;

/// Separator placed between columns.
pub const COLUMN_SEPARATOR: &str = "  ";

/// A column header and its display width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text.
    pub label: String,
    /// Width every cell is padded to.
    pub width: usize,
}

/// A fully laid-out table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Lay out `rows` under `labels`.
    ///
    /// Cells beyond the number of labels are ignored; missing cells render
    /// as empty strings.
    pub fn new(labels: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let columns = labels
            .into_iter()
            .enumerate()
            .map(|(idx, label)| {
                let widest = rows
                    .iter()
                    .map(|row| row.get(idx).map_or(0, |cell| display_len(cell)))
                    .chain(std::iter::once(display_len(&label)))
                    .max()
                    .unwrap_or(0);
                Column {
                    label,
                    width: widest + COLUMN_PADDING,
                }
            })
            .collect();

        Self { columns, rows }
    }

    /// Lay out rendered result rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchtab::{column_labels, Measurement, ResultRow, Table};
    ///
    /// let row = ResultRow::from(&Measurement::new("sample", 4000, 2_000_000.0, 500_000.0));
    /// let table = Table::from_rows(column_labels("a", "b"), &[row]);
    /// assert_eq!(table.lines()[0], "bench     size [KB]    a [us]    b [us]    speedup  ");
    /// assert_eq!(table.lines()[1], "sample    4            2000      500       4.0      ");
    /// ```
    pub fn from_rows(labels: Vec<String>, rows: &[ResultRow]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.cells().into_iter().map(str::to_string).collect())
            .collect();
        Self::new(labels, rows)
    }

    /// Column headers with their computed widths.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Header line followed by one line per row, without trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        let header = self.columns.iter().map(|c| c.label.as_str()).collect::<Vec<_>>();

        std::iter::once(self.render_line(&header))
            .chain(self.rows.iter().map(|row| {
                let cells = (0..self.columns.len())
                    .map(|idx| row.get(idx).map_or("", String::as_str))
                    .collect::<Vec<_>>();
                self.render_line(&cells)
            }))
            .collect()
    }

    fn render_line(&self, cells: &[&str]) -> String {
        self.columns
            .iter()
            .zip(cells)
            .map(|(column, cell)| format!("{:<width$}", cell, width = column.width))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

// Padding in `format!` counts chars, so widths must too.
fn display_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_widths_from_header_and_cells() {
        let table = Table::new(
            strings(&["bench", "speedup"]),
            vec![strings(&["a_very_long_name", "1.0"]), strings(&["b", "10.0"])],
        );
        let widths: Vec<usize> = table.columns().iter().map(|c| c.width).collect();
        assert_eq!(widths, vec![18, 9]);
    }

    #[test]
    fn test_lines_align() {
        let table = Table::new(
            strings(&["bench", "speedup"]),
            vec![strings(&["alpha", "2.0"]), strings(&["beta", "10.0"])],
        );
        assert_eq!(
            table.lines(),
            vec![
                "bench    speedup  ",
                "alpha    2.0      ",
                "beta     10.0     ",
            ]
        );
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = Table::new(strings(&["bench", "size [KB]"]), Vec::new());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.lines(), vec!["bench    size [KB]  "]);
    }

    #[test]
    fn test_display_is_newline_terminated() {
        let table = Table::new(strings(&["x"]), vec![strings(&["1"])]);
        assert_eq!(table.to_string(), "x  \n1  \n");
    }

    #[test]
    fn test_missing_cells_render_empty() {
        let table = Table::new(strings(&["a", "b"]), vec![strings(&["1"])]);
        assert_eq!(table.lines()[1], "1    ".to_string() + "   ");
    }

    #[test]
    fn test_width_counts_chars() {
        let table = Table::new(strings(&["µs"]), vec![strings(&["ab"])]);
        assert_eq!(table.columns()[0].width, 4);
        assert_eq!(table.lines()[0], "µs  ");
    }
}
