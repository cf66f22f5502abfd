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

//! Criterion measurement artifacts.
//!
//! Two shapes are understood:
//!
//! - **Tabular** (`new/raw.csv`): a header line followed by one line per
//!   sample. Field 5 (`sample_measured_value`) is a nanosecond value; the
//!   representative time is the arithmetic mean over all samples.
//! - **Summary** (`new/estimates.json`): the harness's own statistics; the
//!   representative time is `Mean.point_estimate`.
//!
//! Both parsers are strict. A short row, a non-numeric value or a missing
//! key is an error, never a silently skipped sample.

use crate::config::ArtifactKind;
use crate::error::{ReportError, Result};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Index of the measured-value column in `raw.csv`.
pub const MEASURED_VALUE_INDEX: usize = 5;

/// Samples read from a tabular artifact, in nanoseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSamples {
    values: Vec<f64>,
}

impl RawSamples {
    /// Parse a `raw.csv` stream. `path` is only used for error context.
    pub fn from_reader<R: Read>(reader: R, path: &Path) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let header_len = csv_reader
            .headers()
            .map_err(|e| csv_error(path, 1, e))?
            .len();
        if header_len <= MEASURED_VALUE_INDEX {
            return Err(ReportError::ShortRecord {
                path: path.to_path_buf(),
                line: 1,
                expected: MEASURED_VALUE_INDEX + 1,
                actual: header_len,
            });
        }

        let mut values = Vec::new();
        for (idx, result) in csv_reader.records().enumerate() {
            let fallback_line = idx as u64 + 2;
            let record = result.map_err(|e| csv_error(path, fallback_line, e))?;
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(fallback_line);

            let field = record.get(MEASURED_VALUE_INDEX).ok_or_else(|| {
                ReportError::ShortRecord {
                    path: path.to_path_buf(),
                    line,
                    expected: MEASURED_VALUE_INDEX + 1,
                    actual: record.len(),
                }
            })?;

            let value = field
                .trim()
                .parse::<f64>()
                .map_err(|_| ReportError::NonNumeric {
                    path: path.to_path_buf(),
                    line,
                    value: field.to_string(),
                })?;
            values.push(value);
        }

        if values.is_empty() {
            return Err(ReportError::EmptyArtifact {
                path: path.to_path_buf(),
            });
        }

        Ok(Self { values })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no samples were read.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arithmetic mean of the samples in nanoseconds.
    pub fn mean_ns(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }
}

fn csv_error(path: &Path, fallback_line: u64, err: csv::Error) -> ReportError {
    let line = err
        .position()
        .map(|p| p.line())
        .unwrap_or(fallback_line);
    ReportError::Csv {
        path: path.to_path_buf(),
        line,
        message: err.to_string(),
    }
}

/// The subset of `estimates.json` used for the report.
#[derive(Debug, Clone, Deserialize)]
pub struct Estimates {
    /// Mean statistic. Older Criterion releases spell the key `Mean`.
    #[serde(rename = "Mean", alias = "mean")]
    pub mean: Estimate,
}

/// One statistic of a summary artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct Estimate {
    /// Point estimate in nanoseconds.
    pub point_estimate: f64,
}

impl Estimates {
    /// Parse the contents of an `estimates.json` file.
    pub fn parse(json: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ReportError::summary(path, e.to_string()))
    }
}

/// Read an artifact and reduce it to a single mean time in nanoseconds.
pub fn read_mean_ns(path: &Path, kind: ArtifactKind) -> Result<f64> {
    let mean = match kind {
        ArtifactKind::Raw => {
            let file = File::open(path).map_err(|e| ReportError::io(path, e))?;
            let samples = RawSamples::from_reader(file, path)?;
            debug!(path = %path.display(), samples = samples.len(), "read raw samples");
            samples.mean_ns()
        }
        ArtifactKind::Estimates => {
            let json = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
            Estimates::parse(&json, path)?.mean.point_estimate
        }
    };
    Ok(mean)
}
