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

//! Error types for benchmark comparison operations.
//!
//! Only whole-run failures live here. A single unreadable or malformed
//! criterion file is not an error: the directory scan records it as a
//! [`ScanWarning`](crate::criterion::ScanWarning) and keeps going.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Default maximum baseline file size (100 MB).
///
/// Can be overridden via the `BENCHDIFF_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Result type for benchdiff operations
pub type Result<T> = std::result::Result<T, BenchdiffError>;

/// Errors that abort a comparison run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchdiffError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Baseline file exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// JSON serialization failed while exporting a summary.
    #[error("JSON error: {0}")]
    Json(String),
}

impl BenchdiffError {
    /// Create an I/O error with file path context.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use benchdiff::error::BenchdiffError;
    ///
    /// let result = std::fs::read_to_string("baseline.md")
    ///     .map_err(|e| BenchdiffError::io_error("baseline.md", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }
}

impl From<serde_json::Error> for BenchdiffError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source.to_string())
    }
}
