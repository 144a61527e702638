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

//! Benchdiff: baseline vs. criterion benchmark comparison.
//!
//! Compares a recorded markdown baseline against the latest criterion run
//! and reports per-benchmark change, regressions and improvements.
//!
//! ## Pipeline
//!
//! 1. [`baseline::parse_baseline`] reads `| name | mean ns | std_dev ns |` rows
//! 2. [`criterion::parse_criterion_dir`] collects `new/estimates.json` files
//! 3. [`comparator::compare`] merges both sets by name
//! 4. [`reporters`] render the markdown report, console summary and JSON
//!
//! ## Usage
//!
//! ```no_run
//! use benchdiff::{compare, parse_baseline, parse_criterion_dir, ComparisonSummary};
//! use std::path::Path;
//!
//! let baseline = parse_baseline("benchmarks/baseline.md")?;
//! let current = parse_criterion_dir("target/criterion").results;
//!
//! let entries = compare(&baseline, &current);
//! benchdiff::reporters::export_markdown(&entries, Path::new("benchmark_comparison.md"))?;
//! benchdiff::reporters::print_summary(&entries);
//!
//! if ComparisonSummary::from_entries(&entries).has_regressions() {
//!     std::process::exit(1);
//! }
//! # Ok::<(), benchdiff::BenchdiffError>(())
//! ```

pub mod baseline;
pub mod comparator;
pub mod criterion;
pub mod error;
pub mod model;
pub mod reporters;

pub use baseline::{parse_baseline, parse_baseline_str, parse_baseline_with_limit};
pub use comparator::{
    compare, ComparisonEntry, ComparisonSummary, EntryStatus, REGRESSION_THRESHOLD_PERCENT,
};
pub use criterion::{parse_criterion_dir, CriterionScan, ScanWarning};
pub use error::{BenchdiffError, Result};
pub use model::{BenchmarkResult, BenchmarkSet, TimeUnit};
