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

//! Baseline parsing from markdown benchmark tables.
//!
//! A baseline is any text document containing table rows of the form:
//!
//! ```text
//! | Benchmark | Mean | Std Dev |
//! |-----------|------|---------|
//! | mailbox_throughput/bounded_1000 | 1234.56 ns | 12.34 ns |
//! ```
//!
//! Everything that does not match the row pattern (prose, headings, other
//! tables) is ignored. A document without matching rows yields an empty set.

use crate::error::{BenchdiffError, Result, DEFAULT_MAX_FILE_SIZE};
use crate::model::{BenchmarkResult, BenchmarkSet};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

/// `| <name> | <mean> ns | <std_dev> ns |`
///
/// Padding is horizontal only so a match never starts on the previous line.
static ROW_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\|[ \t]*(.+?)[ \t]*\|[ \t]*([\d.]+)[ \t]*ns[ \t]*\|[ \t]*([\d.]+)[ \t]*ns[ \t]*\|",
    )
    .expect("baseline row pattern is valid")
});

/// Header cell text of the benchmark name column.
const HEADER_NAME: &str = "Benchmark";

/// Reads `BENCHDIFF_MAX_FILE_SIZE`, falling back to [`DEFAULT_MAX_FILE_SIZE`]
/// when unset or unparseable.
fn get_max_file_size() -> u64 {
    std::env::var("BENCHDIFF_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Parse a baseline markdown file.
///
/// # Errors
///
/// Returns [`BenchdiffError::Io`] if the file cannot be read and
/// [`BenchdiffError::FileTooLarge`] if it exceeds the size limit. A file
/// without any benchmark rows is not an error.
///
/// # Examples
///
/// ```no_run
/// use benchdiff::baseline::parse_baseline;
///
/// let baseline = parse_baseline("benchmarks/baseline_before_refactor.md")?;
/// println!("{} baseline benchmarks", baseline.len());
/// # Ok::<(), benchdiff::error::BenchdiffError>(())
/// ```
pub fn parse_baseline(path: impl AsRef<Path>) -> Result<BenchmarkSet> {
    parse_baseline_with_limit(path, get_max_file_size())
}

/// Parse a baseline markdown file, rejecting files over `max_file_size` bytes.
///
/// # Errors
///
/// Same as [`parse_baseline`].
pub fn parse_baseline_with_limit(
    path: impl AsRef<Path>,
    max_file_size: u64,
) -> Result<BenchmarkSet> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|e| BenchdiffError::io_error(path, e))?;
    if metadata.len() > max_file_size {
        return Err(BenchdiffError::file_too_large(
            path,
            metadata.len(),
            max_file_size,
        ));
    }

    let content = fs::read_to_string(path).map_err(|e| BenchdiffError::io_error(path, e))?;
    Ok(parse_baseline_str(&content))
}

/// Parse baseline table rows out of in-memory text.
///
/// Rows whose name is the `Benchmark` header or starts with `-` are skipped.
/// When a name occurs more than once, the last row wins.
pub fn parse_baseline_str(content: &str) -> BenchmarkSet {
    let mut results = BenchmarkSet::new();

    for caps in ROW_PATTERN.captures_iter(content) {
        let name = caps[1].trim();
        if name == HEADER_NAME || name.starts_with('-') {
            continue;
        }

        // `[\d.]+` still admits text such as `1.2.3`
        let (mean, std_dev) = match (caps[2].parse::<f64>(), caps[3].parse::<f64>()) {
            (Ok(mean), Ok(std_dev)) => (mean, std_dev),
            _ => {
                debug!("Skipping baseline row with malformed numbers: {}", &caps[0]);
                continue;
            }
        };

        results.insert(BenchmarkResult::new(name, mean, std_dev));
    }

    results
}
