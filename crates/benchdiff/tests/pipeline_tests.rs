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

//! Pipeline tests: parse both inputs from disk, compare, render.

use benchdiff::reporters::{render_json, render_markdown};
use benchdiff::{compare, parse_baseline, parse_criterion_dir, ComparisonSummary, EntryStatus};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

#[test]
fn test_single_regression() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "baseline.md", "| group/a | 100.00 ns | 1.00 ns |\n");
    write(
        dir.path(),
        "out/criterion/group/a/new/estimates.json",
        r#"{"mean": {"point_estimate": 120.0}, "std_dev": {"point_estimate": 1.5}}"#,
    );

    let baseline = parse_baseline(dir.path().join("baseline.md")).unwrap();
    let scan = parse_criterion_dir(dir.path().join("out"));
    let entries = compare(&baseline, &scan.results);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "group/a");
    assert!((entries[0].change_percent.unwrap() - 20.0).abs() < 1e-9);
    assert!(entries[0].is_regression);
    assert!(ComparisonSummary::from_entries(&entries).has_regressions());
}

#[test]
fn test_baseline_only_counts_as_regression() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "baseline.md", "| group/a | 100.00 ns | 1.00 ns |\n");
    fs::create_dir_all(dir.path().join("out")).unwrap();

    let baseline = parse_baseline(dir.path().join("baseline.md")).unwrap();
    let scan = parse_criterion_dir(dir.path().join("out"));
    let entries = compare(&baseline, &scan.results);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].change_percent, None);
    assert!(entries[0].is_regression);
    assert_eq!(entries[0].status(), EntryStatus::NewOrRemoved);
    assert!(render_markdown(&entries).contains("| group/a | N/A | ⚠️ New or Removed |"));
}

#[test]
fn test_both_empty() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "baseline.md", "");
    fs::create_dir_all(dir.path().join("out")).unwrap();

    let baseline = parse_baseline(dir.path().join("baseline.md")).unwrap();
    let scan = parse_criterion_dir(dir.path().join("out"));
    let entries = compare(&baseline, &scan.results);

    assert!(entries.is_empty());
    assert_eq!(
        ComparisonSummary::from_entries(&entries),
        ComparisonSummary::default()
    );
    assert!(render_json(&entries).unwrap().contains("\"total\": 0"));
}

#[test]
fn test_corrupt_file_does_not_hide_others() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "criterion/ok/new/estimates.json",
        r#"{"mean": {"point_estimate": 10.0}}"#,
    );
    write(dir.path(), "criterion/corrupt/new/estimates.json", "\u{0}\u{1}garbage");

    let scan = parse_criterion_dir(dir.path());

    let names: Vec<&str> = scan.results.names().collect();
    assert_eq!(names, vec!["ok"]);
    assert_eq!(scan.warnings.len(), 1);
    assert!(scan.warnings[0].to_string().starts_with("Failed to parse"));
}
