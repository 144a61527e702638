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

//! Structured error types for the benchdiff CLI.
//!
//! Every error ends the run before an exit status can be derived from the
//! comparison, so all of them map to [`EXIT_ERROR`].

use benchdiff::BenchdiffError;
use std::path::PathBuf;
use thiserror::Error;

/// No regressions found.
pub const EXIT_OK: u8 = 0;
/// At least one regression found.
pub const EXIT_REGRESSION: u8 = 1;
/// Input validation or I/O failure.
pub const EXIT_ERROR: u8 = 2;

/// The main error type for benchdiff CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// The baseline markdown file does not exist.
    #[error("Baseline file not found: {}", .0.display())]
    BaselineNotFound(PathBuf),

    /// The criterion results directory does not exist.
    #[error("Current results directory not found: {}", .0.display())]
    CurrentNotFound(PathBuf),

    /// Reading the baseline or writing a report failed.
    #[error(transparent)]
    Compare(#[from] BenchdiffError),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        EXIT_ERROR
    }
}
