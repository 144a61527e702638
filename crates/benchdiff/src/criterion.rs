// Dweve Benchdiff - Benchmark Baseline Comparison
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

//! Current results from a criterion output tree.
//!
//! Criterion stores the latest run of every benchmark as
//! `<...>/criterion/<group>/<bench>/new/estimates.json`. The benchmark name is
//! the path between the `criterion` and `new` directories, joined with `/`:
//!
//! ```text
//! target/criterion/mailbox_throughput/bounded_1000/new/estimates.json
//!                  └──────────── name ────────────┘
//! ```
//!
//! One bad file never aborts the scan. Files that cannot be read, parsed,
//! or named are skipped and reported as [`ScanWarning`]s alongside the
//! results that did parse.

use crate::model::{BenchmarkResult, BenchmarkSet};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File name criterion writes point estimates to.
pub const ESTIMATES_FILE: &str = "estimates.json";
/// Directory holding the most recent run.
pub const NEW_DIR: &str = "new";
/// Root directory of criterion output.
pub const CRITERION_DIR: &str = "criterion";

/// A single statistic in `estimates.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Estimate {
    /// Best-guess value of the statistic, in nanoseconds.
    #[serde(default)]
    pub point_estimate: Option<f64>,
}

/// The subset of `estimates.json` benchdiff reads.
///
/// Missing statistics default to zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Estimates {
    #[serde(default)]
    pub mean: Option<Estimate>,
    #[serde(default)]
    pub std_dev: Option<Estimate>,
}

impl Estimates {
    /// Mean point estimate, or `0.0` when absent.
    pub fn mean(&self) -> f64 {
        point_or_zero(self.mean.as_ref())
    }

    /// Standard deviation point estimate, or `0.0` when absent.
    pub fn std_dev(&self) -> f64 {
        point_or_zero(self.std_dev.as_ref())
    }
}

fn point_or_zero(estimate: Option<&Estimate>) -> f64 {
    estimate.and_then(|e| e.point_estimate).unwrap_or(0.0)
}

/// A file skipped during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// The path lacks a `criterion` ancestor or `new` directory, so no
    /// benchmark name could be derived.
    UnresolvedName {
        /// Offending file
        path: PathBuf,
    },
    /// The file exists but could not be read.
    Unreadable {
        /// Offending file or directory
        path: PathBuf,
        /// Underlying error message
        message: String,
    },
    /// The file is not a valid estimates document.
    InvalidEstimates {
        /// Offending file
        path: PathBuf,
        /// Underlying error message
        message: String,
    },
}

impl ScanWarning {
    /// Path of the skipped file.
    pub fn path(&self) -> &Path {
        match self {
            ScanWarning::UnresolvedName { path }
            | ScanWarning::Unreadable { path, .. }
            | ScanWarning::InvalidEstimates { path, .. } => path,
        }
    }
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::UnresolvedName { path } => {
                write!(f, "Could not parse benchmark name from {}", path.display())
            }
            ScanWarning::Unreadable { path, message } => {
                write!(f, "Failed to read {}: {}", path.display(), message)
            }
            ScanWarning::InvalidEstimates { path, message } => {
                write!(f, "Failed to parse {}: {}", path.display(), message)
            }
        }
    }
}

/// Outcome of scanning a criterion directory.
#[derive(Debug, Clone, Default)]
pub struct CriterionScan {
    /// Successfully parsed benchmarks.
    pub results: BenchmarkSet,
    /// Files that were skipped.
    pub warnings: Vec<ScanWarning>,
}

/// Scan a directory tree for criterion `new/estimates.json` files.
///
/// The walk is recursive and follows no particular order; results are keyed
/// by name. A directory with no estimates files yields an empty scan.
///
/// # Examples
///
/// ```no_run
/// use benchdiff::criterion::parse_criterion_dir;
///
/// let scan = parse_criterion_dir("target/criterion");
/// for warning in &scan.warnings {
///     eprintln!("Warning: {}", warning);
/// }
/// println!("{} current benchmarks", scan.results.len());
/// ```
pub fn parse_criterion_dir(dir: impl AsRef<Path>) -> CriterionScan {
    let mut scan = CriterionScan::default();

    for entry in WalkDir::new(dir.as_ref()) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                scan.warnings.push(ScanWarning::Unreadable {
                    path,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !is_estimates_file(path) {
            continue;
        }

        let Some(name) = benchmark_name(path) else {
            scan.warnings.push(ScanWarning::UnresolvedName {
                path: path.to_path_buf(),
            });
            continue;
        };

        match read_estimates(path) {
            Ok(estimates) => {
                debug!("Parsed {} from {}", name, path.display());
                scan.results.insert(BenchmarkResult::new(
                    name,
                    estimates.mean(),
                    estimates.std_dev(),
                ));
            }
            Err(warning) => scan.warnings.push(warning),
        }
    }

    scan
}

/// Returns whether `path` ends in `new/estimates.json`.
fn is_estimates_file(path: &Path) -> bool {
    path.file_name().is_some_and(|n| n == ESTIMATES_FILE)
        && path
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|n| n == NEW_DIR)
}

/// Derive a benchmark name from an estimates path.
///
/// Takes the components strictly between the first `criterion` directory and
/// the `new` directory that holds the file. Returns `None` when there is no
/// `criterion` component or nothing lies between the two anchors.
pub fn benchmark_name(path: &Path) -> Option<String> {
    let parts: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    // [.., criterion, <name parts>.., new, estimates.json]
    let new_idx = parts.len().checked_sub(2)?;
    if parts[new_idx] != NEW_DIR {
        return None;
    }
    let criterion_idx = parts[..new_idx].iter().position(|p| p == CRITERION_DIR)?;

    let name_parts = &parts[criterion_idx + 1..new_idx];
    if name_parts.is_empty() {
        return None;
    }
    Some(name_parts.join("/"))
}

fn read_estimates(path: &Path) -> Result<Estimates, ScanWarning> {
    let content = fs::read_to_string(path).map_err(|e| ScanWarning::Unreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| ScanWarning::InvalidEstimates {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_estimates(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    const ESTIMATES: &str = r#"{
        "mean": {"confidence_interval": {"confidence_level": 0.95, "lower_bound": 118.0, "upper_bound": 122.0}, "point_estimate": 120.0, "standard_error": 0.5},
        "median": {"point_estimate": 119.0},
        "std_dev": {"point_estimate": 2.5}
    }"#;

    #[test]
    fn test_benchmark_name_nested() {
        let path = Path::new("target/criterion/mailbox_throughput/bounded_1000/new/estimates.json");
        assert_eq!(
            benchmark_name(path).as_deref(),
            Some("mailbox_throughput/bounded_1000")
        );
    }

    #[test]
    fn test_benchmark_name_group_called_new() {
        let path = Path::new("target/criterion/Vec/new/new/estimates.json");
        assert_eq!(benchmark_name(path).as_deref(), Some("Vec/new"));
    }

    #[test]
    fn test_benchmark_name_group_called_criterion() {
        let path = Path::new("target/criterion/criterion/a/new/estimates.json");
        assert_eq!(benchmark_name(path).as_deref(), Some("criterion/a"));
    }

    #[test]
    fn test_benchmark_name_missing_criterion() {
        let path = Path::new("target/bench/group/a/new/estimates.json");
        assert_eq!(benchmark_name(path), None);
    }

    #[test]
    fn test_benchmark_name_nothing_between_anchors() {
        let path = Path::new("target/criterion/new/estimates.json");
        assert_eq!(benchmark_name(path), None);
    }

    #[test]
    fn test_scan_reads_point_estimates() {
        let dir = TempDir::new().unwrap();
        write_estimates(dir.path(), "criterion/group/a/new/estimates.json", ESTIMATES);

        let scan = parse_criterion_dir(dir.path());
        assert!(scan.warnings.is_empty());

        let a = scan.results.get("group/a").unwrap();
        assert_eq!(a.mean, 120.0);
        assert_eq!(a.std_dev, 2.5);
    }

    #[test]
    fn test_scan_ignores_base_and_change_dirs() {
        let dir = TempDir::new().unwrap();
        write_estimates(dir.path(), "criterion/g/a/new/estimates.json", ESTIMATES);
        write_estimates(dir.path(), "criterion/g/a/base/estimates.json", ESTIMATES);
        write_estimates(dir.path(), "criterion/g/a/change/estimates.json", ESTIMATES);
        write_estimates(dir.path(), "criterion/g/a/new/sample.json", "{}");

        let scan = parse_criterion_dir(dir.path());
        assert_eq!(scan.results.len(), 1);
        assert!(scan.warnings.is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let dir = TempDir::new().unwrap();
        write_estimates(dir.path(), "criterion/only_mean/new/estimates.json", r#"{"mean": {"point_estimate": 7.0}}"#);
        write_estimates(dir.path(), "criterion/empty/new/estimates.json", "{}");
        write_estimates(dir.path(), "criterion/null_mean/new/estimates.json", r#"{"mean": null}"#);

        let scan = parse_criterion_dir(dir.path());
        assert!(scan.warnings.is_empty());
        assert_eq!(scan.results.get("only_mean").unwrap().mean, 7.0);
        assert_eq!(scan.results.get("only_mean").unwrap().std_dev, 0.0);
        assert_eq!(scan.results.get("empty").unwrap().mean, 0.0);
        assert_eq!(scan.results.get("null_mean").unwrap().mean, 0.0);
    }

    #[test]
    fn test_malformed_file_is_skipped_with_warning() {
        let dir = TempDir::new().unwrap();
        write_estimates(dir.path(), "criterion/good/new/estimates.json", ESTIMATES);
        write_estimates(dir.path(), "criterion/bad/new/estimates.json", "{ this is not json");

        let scan = parse_criterion_dir(dir.path());
        assert_eq!(scan.results.len(), 1);
        assert!(scan.results.contains("good"));

        assert_eq!(scan.warnings.len(), 1);
        assert!(matches!(scan.warnings[0], ScanWarning::InvalidEstimates { .. }));
        assert!(scan.warnings[0].path().ends_with("bad/new/estimates.json"));
    }

    #[test]
    fn test_wrong_shape_is_skipped_with_warning() {
        let dir = TempDir::new().unwrap();
        write_estimates(dir.path(), "criterion/array/new/estimates.json", "[1, 2, 3]");
        write_estimates(dir.path(), "criterion/text/new/estimates.json", r#"{"mean": {"point_estimate": "fast"}}"#);

        let scan = parse_criterion_dir(dir.path());
        assert!(scan.results.is_empty());
        assert_eq!(scan.warnings.len(), 2);
    }

    #[test]
    fn test_unanchored_file_warns() {
        let dir = TempDir::new().unwrap();
        write_estimates(dir.path(), "results/a/new/estimates.json", ESTIMATES);

        let scan = parse_criterion_dir(dir.path());
        assert!(scan.results.is_empty());
        assert_eq!(scan.warnings.len(), 1);
        assert!(scan.warnings[0]
            .to_string()
            .starts_with("Could not parse benchmark name from"));
    }

    #[test]
    fn test_empty_dir() {
        let dir = TempDir::new().unwrap();
        let scan = parse_criterion_dir(dir.path());
        assert!(scan.results.is_empty());
        assert!(scan.warnings.is_empty());
    }
}
