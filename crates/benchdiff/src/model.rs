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

//! Benchmark measurement types shared by both parsers.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Time unit of a measurement.
///
/// Criterion reports estimates in nanoseconds and baseline tables carry a
/// literal `ns` suffix, so nanoseconds is the only unit in use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Nanoseconds (`ns`).
    #[default]
    #[serde(rename = "ns")]
    Nanoseconds,
}

impl TimeUnit {
    /// Returns the unit suffix as written in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One measured benchmark: point estimates of mean and standard deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Hierarchical benchmark name, e.g. `mailbox_throughput/bounded_1000`.
    pub name: String,
    /// Mean duration.
    pub mean: f64,
    /// Standard deviation of the duration.
    pub std_dev: f64,
    /// Unit of `mean` and `std_dev`.
    pub unit: TimeUnit,
}

impl BenchmarkResult {
    /// Creates a result measured in nanoseconds.
    pub fn new(name: impl Into<String>, mean: f64, std_dev: f64) -> Self {
        Self {
            name: name.into(),
            mean,
            std_dev,
            unit: TimeUnit::Nanoseconds,
        }
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} ±{:.2} {}",
            self.name, self.mean, self.std_dev, self.unit
        )
    }
}

/// Benchmark results keyed by name.
///
/// Names are unique; inserting an existing name replaces the earlier result.
/// Iteration is in lexicographic name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkSet {
    results: BTreeMap<String, BenchmarkResult>,
}

impl BenchmarkSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a result, returning the one it replaced, if any.
    pub fn insert(&mut self, result: BenchmarkResult) -> Option<BenchmarkResult> {
        self.results.insert(result.name.clone(), result)
    }

    /// Looks up a result by benchmark name.
    pub fn get(&self, name: &str) -> Option<&BenchmarkResult> {
        self.results.get(name)
    }

    /// Returns whether a benchmark with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.results.contains_key(name)
    }

    /// Number of distinct benchmarks.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if the set holds no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Benchmark names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }

    /// Results in lexicographic name order.
    pub fn iter(&self) -> btree_map::Values<'_, String, BenchmarkResult> {
        self.results.values()
    }
}

impl FromIterator<BenchmarkResult> for BenchmarkSet {
    fn from_iter<I: IntoIterator<Item = BenchmarkResult>>(iter: I) -> Self {
        let mut set = BenchmarkSet::new();
        for result in iter {
            set.insert(result);
        }
        set
    }
}

impl<'a> IntoIterator for &'a BenchmarkSet {
    type Item = &'a BenchmarkResult;
    type IntoIter = btree_map::Values<'a, String, BenchmarkResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
