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

//! Benchdiff CLI library.
//!
//! Provides the argument surface and orchestration behind the `benchdiff`
//! binary: parse the baseline, scan the criterion directory, compare, write
//! the report, print the summary, and derive the exit status.
//!
//! # Exit Status
//!
//! - `0`: no regressions
//! - `1`: at least one regression (including benchmarks missing from the
//!   current run)
//! - `2`: missing input path, unreadable baseline, or report write failure
//!
//! # Examples
//!
//! ```no_run
//! use benchdiff_cli::cli::CompareArgs;
//!
//! # fn main() -> Result<(), benchdiff_cli::error::CliError> {
//! let args = CompareArgs {
//!     baseline: "benchmarks/baseline_before_refactor.md".into(),
//!     current: "target/criterion".into(),
//!     output: "benchmark_comparison.md".into(),
//!     threshold: 5.0,
//!     json: Some("benchmark_comparison.json".into()),
//! };
//! let outcome = args.execute()?;
//! println!("{} regressions", outcome.summary.regressions);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
