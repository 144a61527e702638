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

//! Comparison reporters for various output formats.
//!
//! All reporters consume the same comparison sequence and are independent
//! of one another.
//!
//! # Modules
//!
//! - `console`: condensed summary on stdout
//! - `markdown`: full report file
//! - `json`: machine-readable summary file

pub mod console;
pub mod json;
pub mod markdown;

pub use console::{print_summary, write_summary};
pub use json::{export_json, render_json, JsonReport};
pub use markdown::{export_markdown, render_markdown};

use crate::comparator::ComparisonEntry;
use std::cmp::Ordering;

/// Entries ordered by change, largest first. Stable: ties keep input order.
fn sorted_by_change_desc(entries: &[ComparisonEntry]) -> Vec<&ComparisonEntry> {
    let mut sorted: Vec<&ComparisonEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        b.sort_key()
            .partial_cmp(&a.sort_key())
            .unwrap_or(Ordering::Equal)
    });
    sorted
}
