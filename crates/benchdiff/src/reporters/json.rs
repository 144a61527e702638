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

//! JSON export for comparison summaries.

use crate::comparator::{ComparisonEntry, ComparisonSummary, EntryStatus};
use crate::error::{BenchdiffError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Machine-readable comparison document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    /// Headline counts.
    pub summary: ComparisonSummary,
    /// Every compared benchmark, in name order.
    pub entries: Vec<JsonEntry>,
}

/// One benchmark in a [`JsonReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonEntry {
    pub name: String,
    pub change_percent: Option<f64>,
    pub is_regression: bool,
    pub status: EntryStatus,
}

impl JsonReport {
    /// Builds the document from a comparison.
    pub fn from_entries(entries: &[ComparisonEntry]) -> Self {
        Self {
            summary: ComparisonSummary::from_entries(entries),
            entries: entries
                .iter()
                .map(|e| JsonEntry {
                    name: e.name.clone(),
                    change_percent: e.change_percent,
                    is_regression: e.is_regression,
                    status: e.status(),
                })
                .collect(),
        }
    }
}

/// Renders the comparison as pretty-printed JSON.
pub fn render_json(entries: &[ComparisonEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::from_entries(
        entries,
    ))?)
}

/// Writes the JSON summary to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`BenchdiffError::Io`] if the file cannot be written.
pub fn export_json(entries: &[ComparisonEntry], path: &Path) -> Result<()> {
    let json = render_json(entries)?;
    fs::write(path, json).map_err(|e| BenchdiffError::io_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_json() {
        let entries = vec![
            ComparisonEntry {
                name: "group/a".to_string(),
                change_percent: Some(20.0),
                is_regression: true,
            },
            ComparisonEntry {
                name: "group/b".to_string(),
                change_percent: None,
                is_regression: false,
            },
        ];
        let temp = NamedTempFile::new().unwrap();

        export_json(&entries, temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["summary"]["total"], 2);
        assert_eq!(value["summary"]["regressions"], 1);
        assert_eq!(value["entries"][0]["status"], "regression");
        assert_eq!(value["entries"][1]["change_percent"], serde_json::Value::Null);
        assert_eq!(value["entries"][1]["status"], "new_or_removed");
    }

    #[test]
    fn test_empty_report() {
        let json = render_json(&[]).unwrap();
        let report: JsonReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.summary, ComparisonSummary::default());
        assert!(report.entries.is_empty());
    }
}
