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

//! Console and JSON output for summary statistics.

use crate::error::{ReportError, Result};
use crate::format::format_thousands;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use treebench_core::{summarize, RecordSet, StructureOperationSummary};

const NUMBER_WIDTH: usize = 14;

/// Summary rows for every `(structure, operation)` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    /// Rows ordered by structure, then operation.
    pub rows: Vec<StructureOperationSummary>,
}

impl SummaryTable {
    /// Computes the summary of `records`.
    pub fn build(records: &RecordSet) -> Self {
        Self {
            rows: summarize(records),
        }
    }

    fn key_widths(&self) -> (usize, usize) {
        let structure = self
            .rows
            .iter()
            .map(|r| r.structure.chars().count())
            .chain(std::iter::once("Structure".len()))
            .max()
            .unwrap_or(0);
        let operation = self
            .rows
            .iter()
            .map(|r| r.operation.chars().count())
            .chain(std::iter::once("Operation".len()))
            .max()
            .unwrap_or(0);
        (structure, operation)
    }
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sw, ow) = self.key_widths();
        let total = sw + ow + 8 + 8 * (NUMBER_WIDTH + 1) + 1;

        writeln!(f, "{}", "=".repeat(total))?;
        writeln!(f, "SUMMARY STATISTICS [microseconds]")?;
        writeln!(f, "{}", "=".repeat(total))?;
        write!(f, "{:<sw$} {:<ow$} {:>7}", "Structure", "Operation", "count")?;
        for header in ["mean", "std", "min", "25%", "50%", "75%", "max"] {
            write!(f, " {:>w$}", header, w = NUMBER_WIDTH)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(total))?;

        for row in &self.rows {
            write!(
                f,
                "{:<sw$} {:<ow$} {:>7}",
                row.structure, row.operation, row.count
            )?;
            let std_dev = row
                .std_dev
                .map(|v| format_thousands(v, 2))
                .unwrap_or_else(|| "-".to_string());
            let cells = [
                format_thousands(row.mean, 2),
                std_dev,
                format_thousands(row.min, 2),
                format_thousands(row.p25, 2),
                format_thousands(row.median, 2),
                format_thousands(row.p75, 2),
                format_thousands(row.max, 2),
            ];
            for cell in &cells {
                write!(f, " {:>w$}", cell, w = NUMBER_WIDTH)?;
            }
            writeln!(f)?;
        }

        write!(f, "{}", "=".repeat(total))
    }
}

/// Writes the summary as pretty-printed JSON.
pub fn export_summary_json(table: &SummaryTable, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(table).map_err(|e| ReportError::Export(e.to_string()))?;
    fs::write(path, json).map_err(|e| ReportError::io_error(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use treebench_core::BenchmarkRecord;

    fn table() -> SummaryTable {
        SummaryTable::build(&RecordSet::new(vec![
            BenchmarkRecord::new("StructA", "insert", 100, 5.0),
            BenchmarkRecord::new("StructB", "insert", 100, 3.0),
            BenchmarkRecord::new("StructA", "insert", 200, 9.0),
        ]))
    }

    #[test]
    fn test_display_contains_every_group() {
        let text = table().to_string();
        assert!(text.contains("SUMMARY STATISTICS"));
        assert!(text.contains("StructA"));
        assert!(text.contains("StructB"));
        assert!(text.contains("7.00"));
        assert!(text.contains("9.00"));
        // single measurement has no standard deviation
        assert!(text.lines().any(|l| l.starts_with("StructB") && l.contains(" - ")));
    }

    #[test]
    fn test_export_json() {
        let temp = NamedTempFile::new().unwrap();
        export_summary_json(&table(), temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let rows = value["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["structure"], "StructA");
        assert_eq!(rows[0]["count"], 2);
        assert_eq!(rows[0]["mean"], 7.0);
        assert!(rows[1]["std_dev"].is_null());
    }
}
