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

//! Report configuration.
//!
//! [`ReportConfig`] makes every filesystem location an explicit value so the
//! collector can be pointed at synthetic directory trees in tests. Defaults
//! follow the layout Criterion writes under `target/criterion`, and the
//! `BENCHTAB_*` environment variables can override them.

use crate::error::{ReportError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default root directory holding one subdirectory per benchmark group.
pub const DEFAULT_RESULTS_DIR: &str = "target/criterion";

/// Default directory holding the benchmarked dataset files.
pub const DEFAULT_DATA_DIR: &str = "bench_data";

/// Default baseline implementation (column A).
pub const DEFAULT_BASELINE: &str = "flate2";

/// Default challenger implementation (column B).
pub const DEFAULT_CHALLENGER: &str = "libdeflate";

/// Directory names under the results root that are never benchmark groups.
///
/// Criterion writes its HTML index to `report/`.
pub const DEFAULT_EXCLUDES: &[&str] = &["report"];

/// Environment variable overriding [`ReportConfig::results_dir`].
pub const ENV_RESULTS_DIR: &str = "BENCHTAB_RESULTS_DIR";
/// Environment variable overriding [`ReportConfig::data_dir`].
pub const ENV_DATA_DIR: &str = "BENCHTAB_DATA_DIR";
/// Environment variable overriding [`ReportConfig::baseline`].
pub const ENV_BASELINE: &str = "BENCHTAB_BASELINE";
/// Environment variable overriding [`ReportConfig::challenger`].
pub const ENV_CHALLENGER: &str = "BENCHTAB_CHALLENGER";

/// Operation whose results are being tabulated.
///
/// The mode becomes a suffix of each implementation's result directory
/// (`flate2_encode`, `libdeflate_decode`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Compression benchmarks.
    Encode,
    /// Decompression benchmarks.
    Decode,
}

impl Mode {
    /// The literal accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Encode => "encode",
            Mode::Decode => "decode",
        }
    }
}

impl FromStr for Mode {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "encode" => Ok(Mode::Encode),
            "decode" => Ok(Mode::Decode),
            other => Err(ReportError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which Criterion artifact is read for each implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `new/raw.csv`: one row per sample, averaged by the collector.
    Raw,
    /// `new/estimates.json`: the harness's own mean point estimate.
    Estimates,
}

impl ArtifactKind {
    /// File name inside the implementation's `new/` directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Raw => "raw.csv",
            ArtifactKind::Estimates => "estimates.json",
        }
    }
}

/// Order of rows in the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// The order in which the results root was enumerated.
    Discovery,
    /// Ascending lexicographic order of the bench name.
    Name,
}

/// Everything the collector needs to locate and read results.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Root directory with one subdirectory per benchmark group.
    pub results_dir: PathBuf,
    /// Directory with one dataset file per group, named after the lower-cased group.
    pub data_dir: PathBuf,
    /// Implementation A; the numerator of the speedup.
    pub baseline: String,
    /// Implementation B; the denominator of the speedup.
    pub challenger: String,
    /// Optional operation suffix for the implementation directories.
    pub mode: Option<Mode>,
    /// Artifact read for each implementation.
    pub artifact: ArtifactKind,
    /// Row order of the output.
    pub order: RowOrder,
    /// Directory names under `results_dir` that are not groups.
    pub exclude: Vec<String>,
}

impl ReportConfig {
    /// Default configuration for the given mode.
    ///
    /// Without a mode the collector reads `raw.csv` samples and keeps
    /// discovery order; with one it reads `estimates.json` and sorts by name.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchtab::{ArtifactKind, Mode, ReportConfig, RowOrder};
    ///
    /// let config = ReportConfig::for_mode(Some(Mode::Decode));
    /// assert_eq!(config.artifact, ArtifactKind::Estimates);
    /// assert_eq!(config.order, RowOrder::Name);
    /// assert_eq!(config.implementation_dir("flate2"), "flate2_decode");
    /// ```
    pub fn for_mode(mode: Option<Mode>) -> Self {
        let (artifact, order) = match mode {
            None => (ArtifactKind::Raw, RowOrder::Discovery),
            Some(_) => (ArtifactKind::Estimates, RowOrder::Name),
        };

        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            baseline: DEFAULT_BASELINE.to_string(),
            challenger: DEFAULT_CHALLENGER.to_string(),
            mode,
            artifact,
            order,
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Apply the `BENCHTAB_*` environment overrides.
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(dir) = get(ENV_RESULTS_DIR) {
            self.results_dir = PathBuf::from(dir);
        }
        if let Some(dir) = get(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(name) = get(ENV_BASELINE) {
            self.baseline = name;
        }
        if let Some(name) = get(ENV_CHALLENGER) {
            self.challenger = name;
        }
        self
    }

    /// Name of an implementation's result directory for the configured mode.
    pub fn implementation_dir(&self, implementation: &str) -> String {
        match self.mode {
            Some(mode) => format!("{}_{}", implementation, mode),
            None => implementation.to_string(),
        }
    }

    /// Full path of an implementation's artifact inside a group directory.
    pub fn artifact_path(&self, group_dir: &Path, implementation: &str) -> PathBuf {
        group_dir
            .join(self.implementation_dir(implementation))
            .join("new")
            .join(self.artifact.file_name())
    }

    /// Whether a directory under the results root should be skipped.
    ///
    /// Names compare lower-cased, the same way group names are derived.
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        let name = dir_name.to_lowercase();
        self.exclude.iter().any(|e| e.to_lowercase() == name)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::for_mode(None)
    }
}
