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

//! Result rows: exact numbers first, display strings second.
//!
//! A [`Measurement`] holds the raw nanosecond means read by the collector.
//! A [`ResultRow`] is its rendering: integer kilobytes, integer
//! microseconds and a one-decimal speedup. Keeping the stages apart lets
//! the speedup be derived from the raw means rather than from the rounded
//! microsecond columns.

use serde::Serialize;

/// Label of the bench-name column.
pub const BENCH_LABEL: &str = "bench";
/// Label of the dataset-size column.
pub const SIZE_LABEL: &str = "size [KB]";
/// Label of the speedup column.
pub const SPEEDUP_LABEL: &str = "speedup";

/// Exact values collected for one benchmark group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Lower-cased group name.
    pub bench: String,
    /// Size of the dataset file in bytes.
    pub size_bytes: u64,
    /// Mean time of the baseline implementation in nanoseconds.
    pub baseline_ns: f64,
    /// Mean time of the challenger implementation in nanoseconds.
    pub challenger_ns: f64,
    /// `baseline_ns / challenger_ns`, unrounded.
    pub speedup: f64,
}

impl Measurement {
    /// Build a measurement and derive its speedup.
    ///
    /// The ratio is always baseline over challenger.
    pub fn new(bench: impl Into<String>, size_bytes: u64, baseline_ns: f64, challenger_ns: f64) -> Self {
        Self {
            bench: bench.into(),
            size_bytes,
            baseline_ns,
            challenger_ns,
            speedup: baseline_ns / challenger_ns,
        }
    }
}

/// One rendered table row. Every cell is already a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// Bench name.
    pub bench: String,
    /// Dataset size in whole kilobytes (1000 bytes), truncated.
    pub size_kb: String,
    /// Baseline mean in microseconds, rounded to an integer.
    pub baseline_us: String,
    /// Challenger mean in microseconds, rounded to an integer.
    pub challenger_us: String,
    /// Speedup rounded to one decimal place.
    pub speedup: String,
}

impl ResultRow {
    /// Cells in column order.
    pub fn cells(&self) -> Vec<&str> {
        vec![
            self.bench.as_str(),
            self.size_kb.as_str(),
            self.baseline_us.as_str(),
            self.challenger_us.as_str(),
            self.speedup.as_str(),
        ]
    }
}

impl From<&Measurement> for ResultRow {
    fn from(m: &Measurement) -> Self {
        Self {
            bench: m.bench.clone(),
            size_kb: format_size_kb(m.size_bytes),
            baseline_us: format_micros(m.baseline_ns),
            challenger_us: format_micros(m.challenger_ns),
            speedup: format_speedup(m.speedup),
        }
    }
}

/// Column labels for a baseline/challenger pair.
///
/// ```
/// use benchtab::column_labels;
///
/// assert_eq!(
///     column_labels("flate2", "libdeflate"),
///     vec!["bench", "size [KB]", "flate2 [us]", "libdeflate [us]", "speedup"]
/// );
/// ```
pub fn column_labels(baseline: &str, challenger: &str) -> Vec<String> {
    vec![
        BENCH_LABEL.to_string(),
        SIZE_LABEL.to_string(),
        format!("{} [us]", baseline),
        format!("{} [us]", challenger),
        SPEEDUP_LABEL.to_string(),
    ]
}

/// Bytes to whole kilobytes, truncating.
pub fn format_size_kb(bytes: u64) -> String {
    (bytes / 1000).to_string()
}

/// Nanoseconds to microseconds, rounded half away from zero.
pub fn format_micros(ns: f64) -> String {
    format!("{}", (ns / 1000.0).round())
}

/// A ratio rounded to one decimal place, always printed with one decimal.
pub fn format_speedup(ratio: f64) -> String {
    format!("{:.1}", (ratio * 10.0).round() / 10.0)
}
