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

//! Compare command - baseline vs. criterion results

use crate::cli::CompareArgs;
use crate::error::{CliError, EXIT_OK, EXIT_REGRESSION};
use benchdiff::reporters::{export_json, export_markdown, print_summary};
use benchdiff::{compare as compare_sets, parse_baseline, parse_criterion_dir};
use benchdiff::{ComparisonEntry, ComparisonSummary, REGRESSION_THRESHOLD_PERCENT};
use colored::Colorize;
use tracing::{debug, info};

/// Result of a completed comparison run.
#[derive(Debug, Clone)]
pub struct CompareOutcome {
    /// All compared benchmarks, in name order.
    pub entries: Vec<ComparisonEntry>,
    /// Headline counts.
    pub summary: ComparisonSummary,
    /// Number of criterion files skipped with a warning.
    pub skipped_files: usize,
}

impl CompareOutcome {
    /// Process exit status: 1 if any benchmark regressed, else 0.
    pub fn exit_code(&self) -> u8 {
        if self.summary.has_regressions() {
            EXIT_REGRESSION
        } else {
            EXIT_OK
        }
    }
}

/// Compare a baseline file against a criterion results directory.
///
/// Prints progress and the console summary to stdout, skipped-file
/// warnings to stderr, and writes the markdown report (plus the JSON
/// summary when requested).
///
/// # Errors
///
/// Returns `Err` if:
/// - The baseline file or results directory does not exist
/// - The baseline cannot be read
/// - A report file cannot be written
///
/// # Examples
///
/// ```no_run
/// use benchdiff_cli::cli::CompareArgs;
/// use benchdiff_cli::commands::compare;
///
/// # fn main() -> Result<(), benchdiff_cli::error::CliError> {
/// let args = CompareArgs {
///     baseline: "benchmarks/baseline.md".into(),
///     current: "target/criterion".into(),
///     output: "benchmark_comparison.md".into(),
///     threshold: 5.0,
///     json: None,
/// };
/// let outcome = compare(&args)?;
/// std::process::exit(outcome.exit_code().into());
/// # }
/// ```
pub fn compare(args: &CompareArgs) -> Result<CompareOutcome, CliError> {
    if args.threshold != REGRESSION_THRESHOLD_PERCENT {
        debug!(
            "--threshold {} is recorded only; regressions use the fixed {}% cutoff",
            args.threshold, REGRESSION_THRESHOLD_PERCENT
        );
    }

    if !args.baseline.exists() {
        return Err(CliError::BaselineNotFound(args.baseline.clone()));
    }

    println!("Parsing baseline: {}", args.baseline.display());
    let baseline = parse_baseline(&args.baseline)?;
    println!("  Found {} baseline benchmarks", baseline.len());

    if !args.current.exists() {
        return Err(CliError::CurrentNotFound(args.current.clone()));
    }

    println!("Parsing current results: {}", args.current.display());
    let scan = parse_criterion_dir(&args.current);
    for warning in &scan.warnings {
        eprintln!("{} {}", "Warning:".yellow().bold(), warning);
    }
    println!("  Found {} current benchmarks", scan.results.len());

    let entries = compare_sets(&baseline, &scan.results);
    let summary = ComparisonSummary::from_entries(&entries);
    info!(
        "Compared {} benchmarks: {} regressions, {} improvements",
        summary.total, summary.regressions, summary.improvements
    );

    export_markdown(&entries, &args.output)?;
    println!("\nReport generated: {}", args.output.display());

    if let Some(json_path) = &args.json {
        export_json(&entries, json_path)?;
        println!("JSON summary written: {}", json_path.display());
    }

    print_summary(&entries);

    Ok(CompareOutcome {
        entries,
        summary,
        skipped_files: scan.warnings.len(),
    })
}
