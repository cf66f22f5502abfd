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

//! Result collection.
//!
//! Walks the results root, treats every immediate subdirectory as one
//! benchmark group and reduces both implementations' artifacts to a
//! [`Measurement`]. Any missing file or malformed artifact aborts the whole
//! collection; a group is never dropped.

use crate::artifact::read_mean_ns;
use crate::config::{ReportConfig, RowOrder};
use crate::error::{ReportError, Result};
use crate::row::Measurement;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// One benchmarked dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGroup {
    /// Group name: the directory name, lower-cased.
    pub name: String,
    /// The group's directory under the results root, as found on disk.
    pub dir: PathBuf,
    /// Size of the dataset file named after the group.
    pub input_size_bytes: u64,
}

/// List the group directories under `config.results_dir`.
///
/// Returns `(name, dir)` pairs ordered by on-disk directory name, or by
/// bench name when the configuration asks for it. Plain files, hidden
/// entries and excluded directory names are skipped.
pub fn discover_groups(config: &ReportConfig) -> Result<Vec<(String, PathBuf)>> {
    let root = &config.results_dir;
    let mut entries = fs::read_dir(root)
        .map_err(|e| ReportError::io(root, e))?
        .map(|entry| {
            let entry = entry.map_err(|e| ReportError::io(root, e))?;
            Ok((entry.file_name(), entry.path()))
        })
        .collect::<Result<Vec<_>>>()?;

    // read_dir order depends on the filesystem
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut seen: HashMap<String, String> = HashMap::new();
    let mut groups = Vec::new();

    for (file_name, path) in entries {
        let dir_name = file_name.to_string_lossy().into_owned();

        if dir_name.starts_with('.') {
            debug!(path = %path.display(), "skipping hidden entry");
            continue;
        }
        if !path.is_dir() {
            warn!(path = %path.display(), "skipping non-directory entry in results root");
            continue;
        }
        if config.is_excluded(&dir_name) {
            debug!(dir = %dir_name, "skipping excluded directory");
            continue;
        }

        let name = dir_name.to_lowercase();
        if let Some(first) = seen.insert(name.clone(), dir_name.clone()) {
            return Err(ReportError::DuplicateGroup {
                name,
                first,
                second: dir_name,
            });
        }
        groups.push((name, path));
    }

    if config.order == RowOrder::Name {
        groups.sort_by(|a, b| a.0.cmp(&b.0));
    }

    Ok(groups)
}

/// Resolve a discovered group's dataset size.
pub fn resolve_group(config: &ReportConfig, name: String, dir: PathBuf) -> Result<ResultGroup> {
    let data_file = config.data_dir.join(&name);
    let metadata = fs::metadata(&data_file).map_err(|e| ReportError::io(&data_file, e))?;

    Ok(ResultGroup {
        name,
        dir,
        input_size_bytes: metadata.len(),
    })
}

/// Read both implementations' means for one group.
pub fn measure_group(config: &ReportConfig, group: &ResultGroup) -> Result<Measurement> {
    let baseline_ns = implementation_mean(config, group, &config.baseline)?;
    let challenger_ns = implementation_mean(config, group, &config.challenger)?;

    let measurement = Measurement::new(
        group.name.clone(),
        group.input_size_bytes,
        baseline_ns,
        challenger_ns,
    );
    debug!(
        bench = %measurement.bench,
        size_bytes = measurement.size_bytes,
        baseline_ns,
        challenger_ns,
        speedup = measurement.speedup,
        "collected group"
    );
    Ok(measurement)
}

fn implementation_mean(config: &ReportConfig, group: &ResultGroup, implementation: &str) -> Result<f64> {
    let path = config.artifact_path(&group.dir, implementation);
    let mean = read_mean_ns(&path, config.artifact)?;

    if !(mean.is_finite() && mean > 0.0) {
        return Err(ReportError::InvalidMean {
            group: group.name.clone(),
            implementation: implementation.to_string(),
            value: mean,
        });
    }
    Ok(mean)
}

/// Collect one measurement per group directory under the results root.
///
/// # Errors
///
/// Fails on the first group whose dataset file or artifacts are missing or
/// malformed, whose mean time is not positive, or whose name collides with
/// another group after lower-casing.
pub fn collect(config: &ReportConfig) -> Result<Vec<Measurement>> {
    let groups = discover_groups(config)?;
    debug!(root = %config.results_dir.display(), groups = groups.len(), "discovered groups");

    let measurements = groups
        .into_iter()
        .map(|(name, dir)| {
            let group = resolve_group(config, name, dir)?;
            measure_group(config, &group)
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        rows = measurements.len(),
        baseline = %config.baseline,
        challenger = %config.challenger,
        "collected benchmark results"
    );
    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ArtifactKind, Mode};
    use std::path::Path;
    use tempfile::TempDir;

    const HEADER: &str =
        "group,function,value,throughput_num,throughput_type,sample_measured_value,unit,iteration_count\n";

    struct Fixture {
        _tmp: TempDir,
        config: ReportConfig,
    }

    impl Fixture {
        fn new(mode: Option<Mode>) -> Self {
            let tmp = TempDir::new().unwrap();
            let mut config = ReportConfig::for_mode(mode);
            config.results_dir = tmp.path().join("criterion");
            config.data_dir = tmp.path().join("bench_data");
            fs::create_dir_all(&config.results_dir).unwrap();
            fs::create_dir_all(&config.data_dir).unwrap();
            Self { _tmp: tmp, config }
        }

        fn dataset(&self, name: &str, size: usize) {
            fs::write(self.config.data_dir.join(name), vec![b'x'; size]).unwrap();
        }

        fn artifact(&self, dir: &str, implementation: &str, mean_ns: f64) {
            let path = self
                .config
                .artifact_path(&self.config.results_dir.join(dir), implementation);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            let body = match self.config.artifact {
                ArtifactKind::Raw => format!(
                    "{}{dir},{implementation},,,,{},ns,1\n{dir},{implementation},,,,{},ns,1\n",
                    HEADER,
                    mean_ns * 0.5,
                    mean_ns * 1.5
                ),
                ArtifactKind::Estimates => {
                    format!(r#"{{"Mean":{{"point_estimate":{}}}}}"#, mean_ns)
                }
            };
            fs::write(path, body).unwrap();
        }

        fn group(&self, dir: &str, size: usize, a: f64, b: f64) {
            self.dataset(&dir.to_lowercase(), size);
            self.artifact(dir, "flate2", a);
            self.artifact(dir, "libdeflate", b);
        }
    }

    #[test]
    fn test_collect_sample_scenario() {
        let fx = Fixture::new(None);
        fx.group("Sample", 4000, 2_000_000.0, 500_000.0);

        let rows = collect(&fx.config).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].bench, "sample");
        assert_eq!(rows[0].size_bytes, 4000);
        assert_eq!(rows[0].baseline_ns, 2_000_000.0);
        assert_eq!(rows[0].challenger_ns, 500_000.0);
        assert_eq!(rows[0].speedup, 4.0);
    }

    #[test]
    fn test_collect_estimates_with_mode() {
        let fx = Fixture::new(Some(Mode::Encode));
        fx.group("beta", 10, 10.0, 1.0);
        fx.group("alpha", 10, 2.0, 1.0);

        let rows = collect(&fx.config).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.bench.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
        assert!(fx
            .config
            .results_dir
            .join("alpha/flate2_encode/new/estimates.json")
            .exists());
    }

    #[test]
    fn test_report_directory_and_files_are_skipped() {
        let fx = Fixture::new(None);
        fx.group("sample", 1000, 1.0, 1.0);
        fs::create_dir_all(fx.config.results_dir.join("report")).unwrap();
        fs::write(fx.config.results_dir.join("index.html"), "").unwrap();

        let groups = discover_groups(&fx.config).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "sample");
    }

    #[test]
    fn test_discovery_order_follows_directory_names() {
        let fx = Fixture::new(None);
        for dir in ["zeta", "Mid", "alpha", "Beta"] {
            fx.group(dir, 1000, 2.0, 1.0);
        }

        let names: Vec<String> = collect(&fx.config)
            .unwrap()
            .into_iter()
            .map(|m| m.bench)
            .collect();
        assert_eq!(names, vec!["beta", "mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_hidden_entries_are_skipped() {
        let fx = Fixture::new(None);
        fs::create_dir_all(fx.config.results_dir.join(".cache")).unwrap();
        fs::write(fx.config.results_dir.join(".lock"), "").unwrap();

        assert!(discover_groups(&fx.config).unwrap().is_empty());
        assert!(collect(&fx.config).unwrap().is_empty());
    }

    #[test]
    fn test_exclusion_ignores_case() {
        let fx = Fixture::new(None);
        fs::create_dir_all(fx.config.results_dir.join("Report")).unwrap();
        fx.group("sample", 1000, 1.0, 1.0);

        let groups = discover_groups(&fx.config).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "sample");
    }

    #[test]
    fn test_missing_dataset_is_fatal() {
        let fx = Fixture::new(None);
        fx.group("present", 1000, 1.0, 1.0);
        fx.artifact("absent", "flate2", 1.0);
        fx.artifact("absent", "libdeflate", 1.0);

        let err = collect(&fx.config).unwrap_err();
        match err {
            ReportError::Io { path, .. } => assert!(path.ends_with(Path::new("bench_data/absent"))),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_artifact_is_fatal() {
        let fx = Fixture::new(None);
        fx.dataset("sample", 1000);
        fx.artifact("sample", "flate2", 1.0);

        let err = collect(&fx.config).unwrap_err();
        match err {
            ReportError::Io { path, .. } => {
                assert!(path.ends_with(Path::new("sample/libdeflate/new/raw.csv")))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_challenger_mean_is_rejected() {
        let fx = Fixture::new(Some(Mode::Decode));
        fx.group("sample", 1000, 1.0, 0.0);

        let err = collect(&fx.config).unwrap_err();
        assert!(matches!(
            err,
            ReportError::InvalidMean { ref implementation, .. } if implementation == "libdeflate"
        ));
    }

    #[test]
    fn test_case_colliding_groups_are_rejected() {
        let fx = Fixture::new(None);
        fx.group("Sample", 1000, 1.0, 1.0);
        fx.artifact("SAMPLE", "flate2", 1.0);
        fx.artifact("SAMPLE", "libdeflate", 1.0);

        let err = collect(&fx.config).unwrap_err();
        assert!(matches!(err, ReportError::DuplicateGroup { ref name, .. } if name == "sample"));
    }

    #[test]
    fn test_missing_results_root() {
        let mut config = ReportConfig::default();
        config.results_dir = PathBuf::from("/nonexistent/criterion");
        assert!(matches!(collect(&config), Err(ReportError::Io { .. })));
    }
}
