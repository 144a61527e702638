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

//! Markdown export for comparison reports.

use crate::comparator::{ComparisonEntry, ComparisonSummary, EntryStatus};
use crate::error::{BenchdiffError, Result};
use std::fs;
use std::path::Path;

/// Placeholder shown when a benchmark has no change value.
pub const MISSING_CHANGE: &str = "N/A";

/// Renders the comparison report as markdown.
///
/// Rows are ordered by change, slowest first; benchmarks without a change
/// sort as 0% and keep their name order among ties.
pub fn render_markdown(entries: &[ComparisonEntry]) -> String {
    let summary = ComparisonSummary::from_entries(entries);
    let mut md = String::new();

    md.push_str("# Benchmark Comparison Report\n\n");
    md.push_str("## Summary\n\n");
    md.push_str(&format!("- **Total Benchmarks**: {}\n", summary.total));
    md.push_str(&format!(
        "- **Regressions (>5% slower)**: {}\n",
        summary.regressions
    ));
    md.push_str(&format!(
        "- **Improvements (>5% faster)**: {}\n\n",
        summary.improvements
    ));

    md.push_str("## Detailed Results\n\n");
    md.push_str("| Benchmark | Change | Status |\n");
    md.push_str("|-----------|--------|--------|\n");

    for entry in super::sorted_by_change_desc(entries) {
        let status = entry.status();
        md.push_str(&format!(
            "| {} | {} | {} {} |\n",
            entry.name,
            format_change(entry),
            status.icon(),
            status.label()
        ));
    }

    md.push_str("\n---\n");
    md.push_str("Generated by benchdiff\n");
    md
}

/// Formats the change column for one row.
fn format_change(entry: &ComparisonEntry) -> String {
    match (entry.status(), entry.change_percent) {
        (_, None) => MISSING_CHANGE.to_string(),
        (EntryStatus::Regression, Some(c)) => format!("+{:.2}%", c),
        (EntryStatus::Improvement, Some(c)) => format!("{:.2}%", c),
        (_, Some(c)) => format!("{:+.2}%", c),
    }
}

/// Writes the markdown report to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`BenchdiffError::Io`] if the file cannot be written.
pub fn export_markdown(entries: &[ComparisonEntry], path: &Path) -> Result<()> {
    fs::write(path, render_markdown(entries)).map_err(|e| BenchdiffError::io_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn entry(name: &str, change: Option<f64>, is_regression: bool) -> ComparisonEntry {
        ComparisonEntry {
            name: name.to_string(),
            change_percent: change,
            is_regression,
        }
    }

    fn rows(md: &str) -> Vec<&str> {
        md.lines()
            .filter(|l| l.starts_with("| ") && !l.starts_with("| Benchmark"))
            .collect()
    }

    #[test]
    fn test_empty_report() {
        let md = render_markdown(&[]);
        assert!(md.contains("- **Total Benchmarks**: 0"));
        assert!(md.contains("- **Regressions (>5% slower)**: 0"));
        assert!(md.contains("- **Improvements (>5% faster)**: 0"));
        assert!(rows(&md).is_empty());
        assert!(md.ends_with("Generated by benchdiff\n"));
    }

    #[test]
    fn test_row_formats() {
        let md = render_markdown(&[
            entry("fast", Some(-12.345), false),
            entry("gone", None, true),
            entry("same", Some(1.5), false),
            entry("same_neg", Some(-2.0), false),
            entry("slow", Some(20.0), true),
        ]);

        assert!(md.contains("| slow | +20.00% | 🔴 Regression |"));
        assert!(md.contains("| fast | -12.35% | 🟢 Improvement |"));
        assert!(md.contains("| same | +1.50% | ⚪ No Change |"));
        assert!(md.contains("| same_neg | -2.00% | ⚪ No Change |"));
        assert!(md.contains("| gone | N/A | ⚠️ New or Removed |"));
    }

    #[test]
    fn test_rows_sorted_by_change_desc() {
        let md = render_markdown(&[
            entry("a_new", None, false),
            entry("b_fast", Some(-30.0), false),
            entry("c_slow", Some(40.0), true),
            entry("d_small", Some(1.0), false),
            entry("e_removed", None, true),
            entry("f_small_neg", Some(-1.0), false),
        ]);

        let names: Vec<&str> = rows(&md)
            .iter()
            .map(|r| r.split('|').nth(1).unwrap().trim())
            .collect();
        assert_eq!(
            names,
            vec!["c_slow", "d_small", "a_new", "e_removed", "f_small_neg", "b_fast"]
        );
    }

    #[test]
    fn test_summary_counts_removed_as_regression() {
        let md = render_markdown(&[entry("gone", None, true), entry("b", Some(-6.0), false)]);
        assert!(md.contains("- **Total Benchmarks**: 2"));
        assert!(md.contains("- **Regressions (>5% slower)**: 1"));
        assert!(md.contains("- **Improvements (>5% faster)**: 1"));
    }

    #[test]
    fn test_export_overwrites() {
        let temp = NamedTempFile::new().unwrap();
        fs::write(temp.path(), "stale content that must disappear").unwrap();

        export_markdown(&[entry("a", Some(0.0), false)], temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.starts_with("# Benchmark Comparison Report"));
        assert!(!content.contains("stale content"));
    }

    #[test]
    fn test_export_to_missing_dir_fails() {
        let result = export_markdown(&[], Path::new("/nonexistent/dir/report.md"));
        assert!(matches!(result, Err(BenchdiffError::Io { .. })));
    }
}
