// Treebench - Balanced Tree Benchmark Reporting
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

//! Benchmark measurement records.

use serde::{Deserialize, Serialize};

/// One measured data point: the total time a structure took to run one
/// operation over `n` elements.
///
/// Field names map to the measurement file's header (`Structure`,
/// `Operation`, `N`, `Time_microseconds`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Data structure under test, e.g. `AVL`.
    #[serde(rename = "Structure")]
    pub structure: String,
    /// Operation category, normally `insert`, `search` or `erase`.
    #[serde(rename = "Operation")]
    pub operation: String,
    /// Input size.
    #[serde(rename = "N")]
    pub n: u64,
    /// Total measured duration in microseconds.
    #[serde(rename = "Time_microseconds")]
    pub time_microseconds: f64,
}

impl BenchmarkRecord {
    /// Creates a record without validating it.
    pub fn new(
        structure: impl Into<String>,
        operation: impl Into<String>,
        n: u64,
        time_microseconds: f64,
    ) -> Self {
        Self {
            structure: structure.into(),
            operation: operation.into(),
            n,
            time_microseconds,
        }
    }

    /// Checks the record invariants, returning the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.structure.is_empty() {
            return Err("structure is empty".to_string());
        }
        if self.operation.is_empty() {
            return Err("operation is empty".to_string());
        }
        if self.n == 0 {
            return Err("N must be positive".to_string());
        }
        if !self.time_microseconds.is_finite() || self.time_microseconds < 0.0 {
            return Err(format!(
                "time must be a non-negative number, got {}",
                self.time_microseconds
            ));
        }
        Ok(())
    }
}

/// Immutable, load-ordered collection of benchmark records.
///
/// Grouping never copies or merges records; every view borrows from here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<BenchmarkRecord>,
}

impl RecordSet {
    /// Wraps already-validated records, keeping their order.
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }

    /// All records in source order.
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Iterates records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records were loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct operations in order of first appearance.
    pub fn operations(&self) -> Vec<&str> {
        first_seen(self.records.iter().map(|r| r.operation.as_str()))
    }

    /// Distinct structures in order of first appearance.
    pub fn structures(&self) -> Vec<&str> {
        first_seen(self.records.iter().map(|r| r.structure.as_str()))
    }

    /// Distinct input sizes, ascending.
    pub fn sizes(&self) -> Vec<u64> {
        let mut sizes: Vec<u64> = self.records.iter().map(|r| r.n).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}

impl From<Vec<BenchmarkRecord>> for RecordSet {
    fn from(records: Vec<BenchmarkRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a BenchmarkRecord;
    type IntoIter = std::slice::Iter<'a, BenchmarkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

pub(crate) fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
