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

//! Command-line definition and execution.
//!
//! The only positional argument is the optional mode. Everything else
//! refines the [`ReportConfig`] assembled from defaults and the
//! `BENCHTAB_*` environment variables; flags take precedence over both.

use crate::error::CliError;
use benchtab::{collector, ArtifactKind, Mode, ReportConfig, RowOrder};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// Artifact selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArtifactArg {
    /// Average the samples in `new/raw.csv`
    Raw,
    /// Use the mean point estimate in `new/estimates.json`
    Estimates,
}

impl From<ArtifactArg> for ArtifactKind {
    fn from(arg: ArtifactArg) -> Self {
        match arg {
            ArtifactArg::Raw => ArtifactKind::Raw,
            ArtifactArg::Estimates => ArtifactKind::Estimates,
        }
    }
}

/// Criterion comparison tables
///
/// Reads the results of two competing implementations for every benchmark
/// group under the results directory and prints an aligned table with
/// their mean times and the speedup of the challenger over the baseline.
///
/// # Examples
///
/// ```bash
/// # Average raw samples, groups in directory order
/// benchtab
///
/// # Compression results from estimates.json, sorted by name
/// benchtab encode
///
/// # Custom locations
/// benchtab decode --results-dir out/criterion --data-dir corpus
/// ```
#[derive(Parser, Debug)]
#[command(name = "benchtab")]
#[command(author, version, about = "benchtab - Criterion comparison tables", long_about = None)]
pub struct Cli {
    /// Operation whose results are tabulated: encode or decode
    #[arg(value_name = "MODE")]
    pub mode: Option<String>,

    /// Directory with one subdirectory per benchmark group [default: target/criterion]
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Directory with one dataset file per group [default: bench_data]
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Baseline implementation, the speedup numerator [default: flate2]
    #[arg(long, value_name = "NAME")]
    pub baseline: Option<String>,

    /// Challenger implementation, the speedup denominator [default: libdeflate]
    #[arg(long, value_name = "NAME")]
    pub challenger: Option<String>,

    /// Artifact to read [default: raw without a mode, estimates with one]
    #[arg(long, value_enum)]
    pub artifact: Option<ArtifactArg>,

    /// Sort rows by bench name
    #[arg(long, conflicts_with = "no_sort")]
    pub sort: bool,

    /// Keep rows in directory enumeration order
    #[arg(long)]
    pub no_sort: bool,

    /// Additional directory name under the results directory to ignore
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Print the collected measurements as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Build the report configuration.
    ///
    /// # Errors
    ///
    /// Returns an invalid-mode error if the positional argument is present
    /// and is not exactly `encode` or `decode`.
    pub fn config(&self) -> Result<ReportConfig, CliError> {
        let mode = self
            .mode
            .as_deref()
            .map(str::parse::<Mode>)
            .transpose()?;

        let mut config = ReportConfig::for_mode(mode).with_env();

        if let Some(dir) = &self.results_dir {
            config.results_dir = dir.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(name) = &self.baseline {
            config.baseline = name.clone();
        }
        if let Some(name) = &self.challenger {
            config.challenger = name.clone();
        }
        if let Some(artifact) = self.artifact {
            config.artifact = artifact.into();
        }
        if self.sort {
            config.order = RowOrder::Name;
        } else if self.no_sort {
            config.order = RowOrder::Discovery;
        }
        config.exclude.extend(self.exclude.iter().cloned());

        Ok(config)
    }

    /// Collect, render and print.
    ///
    /// Nothing is written to standard output unless every group was
    /// collected successfully.
    pub fn execute(self) -> Result<(), CliError> {
        let config = self.config()?;
        debug!(?config, "resolved configuration");

        let measurements = collector::collect(&config)?;
        let output = if self.json {
            let mut json = serde_json::to_string_pretty(&measurements)?;
            json.push('\n');
            json
        } else {
            benchtab::build_table(&config, &measurements).to_string()
        };

        let mut stdout = io::stdout().lock();
        stdout
            .write_all(output.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(CliError::output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchtab::ReportError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("benchtab").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_no_mode_defaults() {
        let config = parse(&[]).config().unwrap();
        assert_eq!(config.mode, None);
        assert_eq!(config.artifact, ArtifactKind::Raw);
    }

    #[test]
    fn test_mode_selects_estimates_and_sorting() {
        let config = parse(&["decode"]).config().unwrap();
        assert_eq!(config.mode, Some(Mode::Decode));
        assert_eq!(config.artifact, ArtifactKind::Estimates);
        assert_eq!(config.order, RowOrder::Name);
    }

    #[test]
    fn test_invalid_mode() {
        let err = parse(&["compress"]).config().unwrap_err();
        assert!(matches!(err, CliError::Report(ReportError::InvalidMode(ref m)) if m == "compress"));
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "encode",
            "--results-dir",
            "out/criterion",
            "--data-dir",
            "corpus",
            "--baseline",
            "miniz",
            "--challenger",
            "zlib-rs",
            "--artifact",
            "raw",
            "--no-sort",
            "--exclude",
            "tmp",
        ])
        .config()
        .unwrap();

        assert_eq!(config.results_dir, PathBuf::from("out/criterion"));
        assert_eq!(config.data_dir, PathBuf::from("corpus"));
        assert_eq!(config.baseline, "miniz");
        assert_eq!(config.challenger, "zlib-rs");
        assert_eq!(config.artifact, ArtifactKind::Raw);
        assert_eq!(config.order, RowOrder::Discovery);
        assert!(config.is_excluded("report"));
        assert!(config.is_excluded("tmp"));
    }

    #[test]
    fn test_sort_flags_conflict() {
        let result = Cli::try_parse_from(["benchtab", "--sort", "--no-sort"]);
        assert!(result.is_err());
    }
}
