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

//! Console summary of a comparison.

use crate::comparator::ComparisonEntry;
use colored::Colorize;
use std::cmp::Ordering;
use std::io::{self, Write};
use tracing::debug;

const BANNER_WIDTH: usize = 70;

/// Prints the comparison summary to stdout.
pub fn print_summary(entries: &[ComparisonEntry]) {
    let stdout = io::stdout();
    if let Err(e) = write_summary(entries, &mut stdout.lock()) {
        debug!("Failed to write summary to stdout: {}", e);
    }
}

/// Writes the comparison summary to `out`.
///
/// Lists measured regressions, slowest first, then improvements, fastest
/// first. Removed benchmarks have no change value and are left to the full
/// report.
pub fn write_summary<W: Write>(entries: &[ComparisonEntry], out: &mut W) -> io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);
    writeln!(out, "\n{}", banner)?;
    writeln!(out, "BENCHMARK COMPARISON SUMMARY")?;
    writeln!(out, "{}\n", banner)?;

    let mut regressions: Vec<(&str, f64)> = entries
        .iter()
        .filter(|e| e.is_regression)
        .filter_map(|e| e.change_percent.map(|c| (e.name.as_str(), c)))
        .collect();
    regressions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    if regressions.is_empty() {
        writeln!(out, "{}\n", "✅ No significant regressions detected.".green())?;
    } else {
        writeln!(
            out,
            "{}\n",
            "⚠️  REGRESSIONS DETECTED (>5% slower):".red().bold()
        )?;
        for (name, change) in &regressions {
            writeln!(out, "  🔴 {}: +{:.2}%", name, change)?;
        }
        writeln!(out)?;
    }

    let mut improvements: Vec<(&str, f64)> = entries
        .iter()
        .filter(|e| e.is_improvement())
        .filter_map(|e| e.change_percent.map(|c| (e.name.as_str(), c)))
        .collect();
    improvements.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    if !improvements.is_empty() {
        writeln!(out, "{}\n", "IMPROVEMENTS (>5% faster):".green().bold())?;
        for (name, change) in &improvements {
            writeln!(out, "  🟢 {}: {:.2}%", name, change)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}\n", banner)?;
    Ok(())
}
