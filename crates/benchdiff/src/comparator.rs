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

//! Baseline vs. current comparison.
//!
//! Positive change means the current run is slower than the baseline.

use crate::model::BenchmarkSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Slowdown, in percent, above which a benchmark counts as regressed.
///
/// Fixed: the CLI `--threshold` value does not change it.
pub const REGRESSION_THRESHOLD_PERCENT: f64 = 5.0;

/// Speedup, in percent, below which a benchmark counts as improved.
pub const IMPROVEMENT_THRESHOLD_PERCENT: f64 = -5.0;

/// Comparison outcome for one benchmark name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// Benchmark name.
    pub name: String,
    /// Percentage change of the mean (positive = slower). `None` when the
    /// benchmark exists on only one side.
    pub change_percent: Option<f64>,
    /// Whether this entry counts toward a failing exit status.
    ///
    /// Benchmarks missing from the current run are regressions; new ones
    /// are not.
    pub is_regression: bool,
}

impl ComparisonEntry {
    /// Returns `true` for a measured speedup beyond the improvement cutoff.
    pub fn is_improvement(&self) -> bool {
        self.change_percent
            .is_some_and(|c| c < IMPROVEMENT_THRESHOLD_PERCENT)
    }

    /// Report status of this entry.
    ///
    /// A missing change takes precedence, so removed benchmarks show as
    /// [`EntryStatus::NewOrRemoved`] even though they count as regressions.
    pub fn status(&self) -> EntryStatus {
        match self.change_percent {
            None => EntryStatus::NewOrRemoved,
            Some(_) if self.is_regression => EntryStatus::Regression,
            Some(c) if c < IMPROVEMENT_THRESHOLD_PERCENT => EntryStatus::Improvement,
            Some(_) => EntryStatus::NoChange,
        }
    }

    /// Change used for ordering; a missing change sorts as zero.
    pub fn sort_key(&self) -> f64 {
        self.change_percent.unwrap_or(0.0)
    }
}

/// Mutually exclusive per-row status in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Present in only one of the two sets.
    NewOrRemoved,
    /// Slower than baseline beyond the cutoff.
    Regression,
    /// Faster than baseline beyond the cutoff.
    Improvement,
    /// Within the cutoffs.
    NoChange,
}

impl EntryStatus {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::NewOrRemoved => "New or Removed",
            EntryStatus::Regression => "Regression",
            EntryStatus::Improvement => "Improvement",
            EntryStatus::NoChange => "No Change",
        }
    }

    /// Status marker used in the markdown report.
    pub fn icon(&self) -> &'static str {
        match self {
            EntryStatus::NewOrRemoved => "⚠️",
            EntryStatus::Regression => "🔴",
            EntryStatus::Improvement => "🟢",
            EntryStatus::NoChange => "⚪",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headline counts of a comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Number of compared benchmark names.
    pub total: usize,
    /// Entries flagged as regressions, including removed benchmarks.
    pub regressions: usize,
    /// Entries faster than the improvement cutoff.
    pub improvements: usize,
}

impl ComparisonSummary {
    /// Tallies a comparison.
    pub fn from_entries(entries: &[ComparisonEntry]) -> Self {
        Self {
            total: entries.len(),
            regressions: entries.iter().filter(|e| e.is_regression).count(),
            improvements: entries.iter().filter(|e| e.is_improvement()).count(),
        }
    }

    /// Returns `true` if any entry is a regression.
    pub fn has_regressions(&self) -> bool {
        self.regressions > 0
    }
}

/// Compare a baseline against current results.
///
/// Produces one entry per name in either set, ordered by name.
///
/// # Examples
///
/// ```
/// use benchdiff::comparator::compare;
/// use benchdiff::model::{BenchmarkResult, BenchmarkSet};
///
/// let baseline: BenchmarkSet = [BenchmarkResult::new("group/a", 100.0, 1.0)].into_iter().collect();
/// let current: BenchmarkSet = [BenchmarkResult::new("group/a", 120.0, 1.0)].into_iter().collect();
///
/// let entries = compare(&baseline, &current);
/// assert_eq!(entries.len(), 1);
/// assert!(entries[0].is_regression);
/// ```
pub fn compare(baseline: &BenchmarkSet, current: &BenchmarkSet) -> Vec<ComparisonEntry> {
    let names: BTreeSet<&str> = baseline.names().chain(current.names()).collect();

    names
        .into_iter()
        .map(|name| match (baseline.get(name), current.get(name)) {
            (Some(base), Some(cur)) => {
                let change = percent_change(base.mean, cur.mean);
                ComparisonEntry {
                    name: name.to_string(),
                    change_percent: Some(change),
                    is_regression: change > REGRESSION_THRESHOLD_PERCENT,
                }
            }
            // Removed since the baseline
            (Some(_), None) => ComparisonEntry {
                name: name.to_string(),
                change_percent: None,
                is_regression: true,
            },
            // New, or (unreachable) in neither
            _ => ComparisonEntry {
                name: name.to_string(),
                change_percent: None,
                is_regression: false,
            },
        })
        .collect()
}

/// Percentage change from `baseline` to `current`; zero when the baseline
/// mean is not positive.
pub fn percent_change(baseline: f64, current: f64) -> f64 {
    if baseline > 0.0 {
        (current - baseline) / baseline * 100.0
    } else {
        0.0
    }
}
