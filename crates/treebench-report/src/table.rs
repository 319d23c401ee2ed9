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

//! Ranked comparison of structures at one input size.

use crate::format::format_thousands;
use std::fmt;
use treebench_core::{display_label, NSlice, RecordSet, Result, CANONICAL_OPERATIONS};

const LABEL_WIDTH: usize = 12;
const TIME_WIDTH: usize = 20;
const MIN_STRUCTURE_WIDTH: usize = 10;

/// One structure's time in a section.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Structure identifier.
    pub structure: String,
    /// Measured time in microseconds.
    pub time_microseconds: f64,
}

/// Rows for one operation, fastest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSection {
    /// Operation identifier.
    pub operation: String,
    /// Display label for the operation.
    pub label: String,
    /// Ranked rows; empty if the operation was not measured at this size.
    pub rows: Vec<TableRow>,
}

/// Structures ranked by time for each canonical operation at one `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparativeTable {
    /// Input size the table covers.
    pub n: u64,
    /// One section per canonical operation, in `insert`, `search`,
    /// `erase` order.
    pub sections: Vec<TableSection>,
}

impl ComparativeTable {
    /// Builds the table for `n`.
    ///
    /// # Errors
    ///
    /// Returns [`treebench_core::TreebenchError::EmptySelection`] if
    /// nothing was measured at `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treebench_core::{BenchmarkRecord, RecordSet};
    /// use treebench_report::ComparativeTable;
    ///
    /// let records = RecordSet::new(vec![
    ///     BenchmarkRecord::new("StructA", "insert", 100, 5.0),
    ///     BenchmarkRecord::new("StructB", "insert", 100, 3.0),
    /// ]);
    /// let table = ComparativeTable::build(&records, 100).unwrap();
    /// assert_eq!(table.sections[0].rows[0].structure, "StructB");
    /// ```
    pub fn build(records: &RecordSet, n: u64) -> Result<Self> {
        let slice = NSlice::new(records, n)?;

        let sections = CANONICAL_OPERATIONS
            .iter()
            .map(|&operation| TableSection {
                operation: operation.to_string(),
                label: display_label(operation).to_string(),
                rows: slice
                    .section(operation)
                    .iter()
                    .map(|r| TableRow {
                        structure: r.structure.clone(),
                        time_microseconds: r.time_microseconds,
                    })
                    .collect(),
            })
            .collect();

        Ok(Self { n, sections })
    }

    fn structure_width(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .map(|r| r.structure.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_STRUCTURE_WIDTH)
    }
}

impl fmt::Display for ComparativeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let structure_width = self.structure_width();
        let total = LABEL_WIDTH + structure_width + TIME_WIDTH + 2;

        writeln!(f, "Comparative table for N = {}", format_thousands(self.n as f64, 0))?;
        writeln!(f, "{}", "=".repeat(total))?;
        writeln!(
            f,
            "{:<lw$} {:<sw$} {:>tw$}",
            "Operation",
            "Structure",
            "Time [microseconds]",
            lw = LABEL_WIDTH,
            sw = structure_width,
            tw = TIME_WIDTH
        )?;
        writeln!(f, "{}", "-".repeat(total))?;

        for section in &self.sections {
            if section.rows.is_empty() {
                writeln!(f, "{:<lw$} (no measurements)", section.label, lw = LABEL_WIDTH)?;
                continue;
            }
            for (i, row) in section.rows.iter().enumerate() {
                let label = if i == 0 { section.label.as_str() } else { "" };
                writeln!(
                    f,
                    "{:<lw$} {:<sw$} {:>tw$}",
                    label,
                    row.structure,
                    format_thousands(row.time_microseconds, 2),
                    lw = LABEL_WIDTH,
                    sw = structure_width,
                    tw = TIME_WIDTH
                )?;
            }
        }

        write!(f, "{}", "=".repeat(total))
    }
}
