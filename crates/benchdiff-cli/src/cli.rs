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

//! Command-line arguments.

use crate::commands::{self, CompareOutcome};
use crate::error::CliError;
use clap::Args;
use std::path::PathBuf;

/// Default report file name.
pub const DEFAULT_OUTPUT: &str = "benchmark_comparison.md";

/// Arguments of a comparison run.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use benchdiff_cli::cli::CompareArgs;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     args: CompareArgs,
/// }
/// ```
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Path to baseline markdown file (e.g., benchmarks/baseline_before_refactor.md)
    #[arg(long, value_name = "FILE")]
    pub baseline: PathBuf,

    /// Path to current criterion output directory (e.g., target/criterion/)
    #[arg(long, value_name = "DIR")]
    pub current: PathBuf,

    /// Output report file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Regression threshold percentage (recorded only; classification uses a fixed 5%)
    #[arg(long, value_name = "PCT", default_value_t = 5.0, value_parser = parse_threshold)]
    pub threshold: f64,

    /// Also write a JSON summary to this file
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,
}

impl CompareArgs {
    /// Run the comparison.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an input path is missing, the baseline cannot be
    /// read, or a report cannot be written.
    pub fn execute(&self) -> Result<CompareOutcome, CliError> {
        commands::compare(self)
    }
}

/// Accepts finite, non-negative percentages.
fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("threshold must be a non-negative number, got {}", s));
    }
    Ok(value)
}
