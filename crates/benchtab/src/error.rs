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

//! Error types for result collection and report generation.
//!
//! Every failure in the pipeline is fatal: the collector never skips a group
//! and never produces a partial table. Each variant carries enough context
//! (file path, line, offending value) to locate the broken artifact.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while collecting or rendering benchmark results.
///
/// # Examples
///
/// ```
/// use benchtab::ReportError;
///
/// let err = ReportError::InvalidMode("compress".to_string());
/// assert_eq!(
///     err.to_string(),
///     "invalid mode 'compress': expected 'encode' or 'decode'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// The mode argument was not one of the accepted literals.
    #[error("invalid mode '{0}': expected 'encode' or 'decode'")]
    InvalidMode(String),

    /// A file or directory could not be read or stat-ed.
    ///
    /// Covers the results root, dataset files and artifact files.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The underlying error message
        message: String,
    },

    /// The tabular artifact could not be tokenized.
    #[error("CSV parse error in '{path}' at line {line}: {message}")]
    Csv {
        /// Artifact path
        path: PathBuf,
        /// Line number (1-based, header is line 1)
        line: u64,
        /// Detailed error message
        message: String,
    },

    /// A header or data row has fewer fields than the measured-value column needs.
    #[error("'{path}' line {line}: expected at least {expected} fields, found {actual}")]
    ShortRecord {
        /// Artifact path
        path: PathBuf,
        /// Line number (1-based)
        line: u64,
        /// Minimum number of fields
        expected: usize,
        /// Fields actually present
        actual: usize,
    },

    /// The measured-value field is not a number.
    #[error("'{path}' line {line}: measured value '{value}' is not a number")]
    NonNumeric {
        /// Artifact path
        path: PathBuf,
        /// Line number (1-based)
        line: u64,
        /// The offending field
        value: String,
    },

    /// A tabular artifact contains a header but no samples.
    #[error("'{path}' contains no samples")]
    EmptyArtifact {
        /// Artifact path
        path: PathBuf,
    },

    /// The summary artifact is not valid JSON or lacks `Mean.point_estimate`.
    #[error("invalid summary '{path}': {message}")]
    Summary {
        /// Artifact path
        path: PathBuf,
        /// Detailed error message
        message: String,
    },

    /// A mean time cannot be used as a divisor or displayed.
    #[error("group '{group}': {implementation} mean time {value} ns is not a positive number")]
    InvalidMean {
        /// Benchmark group name
        group: String,
        /// Implementation whose mean is invalid
        implementation: String,
        /// The offending mean
        value: f64,
    },

    /// Two result directories map to the same dataset file.
    #[error("directories '{first}' and '{second}' both map to benchmark '{name}'")]
    DuplicateGroup {
        /// Lower-cased group name
        name: String,
        /// First directory seen
        first: String,
        /// Conflicting directory
        second: String,
    },
}

impl ReportError {
    /// Create an I/O error with path context.
    ///
    /// ```
    /// use benchtab::ReportError;
    /// use std::io;
    ///
    /// let err = ReportError::io("bench_data/sample", io::Error::from(io::ErrorKind::NotFound));
    /// assert!(err.to_string().starts_with("I/O error for 'bench_data/sample'"));
    /// ```
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a summary parse error with path context.
    pub fn summary(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Summary {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for errors caused by the invocation rather than the data.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidMode(_))
    }
}
