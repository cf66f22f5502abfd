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

//! Structured error types for the benchtab CLI.

use benchtab::ReportError;
use std::io;
use thiserror::Error;

/// The main error type for CLI execution.
///
/// Collection and rendering failures come from the library unchanged;
/// the CLI only adds output-side failures.
#[derive(Error, Debug)]
pub enum CliError {
    /// Result collection failed, or the mode argument was invalid.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Measurements could not be serialized with `--json`.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Writing to standard output failed.
    #[error("Failed to write output: {message}")]
    Output {
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create an output error from an I/O failure.
    pub fn output(source: io::Error) -> Self {
        Self::Output {
            message: source.to_string(),
        }
    }

    /// Returns `true` when the invocation itself was wrong.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::Report(e) if e.is_usage_error())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_errors_are_transparent() {
        let err = CliError::from(ReportError::InvalidMode("compress".to_string()));
        assert_eq!(
            err.to_string(),
            "invalid mode 'compress': expected 'encode' or 'decode'"
        );
        assert!(err.is_usage_error());
    }

    #[test]
    fn test_output_error() {
        let err = CliError::output(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
        assert!(err.to_string().contains("broken pipe"));
        assert!(!err.is_usage_error());
    }
}
