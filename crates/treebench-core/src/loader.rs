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

//! Load benchmark measurement files into a [`RecordSet`].
//!
//! The whole file is read at once. Any undecodable or invalid row fails the
//! load, so a report is never produced from a partially read file.

use crate::error::{Result, TreebenchError};
use crate::record::{BenchmarkRecord, RecordSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Default measurement file name written by the benchmark harness.
pub const DEFAULT_SOURCE: &str = "benchmark_results.csv";

/// Default row limit.
///
/// Keeps a corrupt or unexpected input from exhausting memory. The
/// harness writes a few dozen rows per run, so this is generous.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Header names every measurement file must carry. Matching is exact and
/// case-sensitive; order does not matter.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Structure", "Operation", "N", "Time_microseconds"];

/// Configuration for reading measurement files.
///
/// # Examples
///
/// ```
/// # use treebench_core::LoaderConfig;
/// let config = LoaderConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert_eq!(config.max_rows, 1_000_000);
///
/// let tsv = LoaderConfig {
///     delimiter: b'\t',
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,

    /// Maximum number of data rows accepted (default: 1,000,000).
    pub max_rows: usize,

    /// Program named in the diagnostic when the source is missing.
    pub producer: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            max_rows: DEFAULT_MAX_ROWS,
            producer: "the benchmark harness (main.cpp)".to_string(),
        }
    }
}

/// Loads a measurement file with the default configuration.
///
/// # Errors
///
/// Returns [`TreebenchError::SourceNotFound`] if the file cannot be opened,
/// and a parse or validation error for the first bad row.
pub fn load_records(path: impl AsRef<Path>) -> Result<RecordSet> {
    load_records_with_config(path, &LoaderConfig::default())
}

/// Loads a measurement file.
pub fn load_records_with_config(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<RecordSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        debug!("cannot open {}: {}", path.display(), e);
        TreebenchError::SourceNotFound {
            path: path.to_path_buf(),
            producer: config.producer.clone(),
        }
    })?;

    let records = read_records(file, path, config)?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Loads measurements from any reader, e.g. an in-memory buffer.
///
/// # Examples
///
/// ```
/// use treebench_core::{load_from_reader, LoaderConfig};
///
/// let data = "N,Structure,Operation,Time_microseconds\n1000,AVL,insert,152.5\n";
/// let records = load_from_reader(data.as_bytes(), &LoaderConfig::default()).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records.records()[0].structure, "AVL");
/// ```
pub fn load_from_reader<R: Read>(reader: R, config: &LoaderConfig) -> Result<RecordSet> {
    read_records(reader, Path::new("<reader>"), config)
}

fn read_records<R: Read>(reader: R, source: &Path, config: &LoaderConfig) -> Result<RecordSet> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| from_csv_error(source, e))?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(TreebenchError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        if index >= config.max_rows {
            return Err(TreebenchError::TooManyRows {
                max: config.max_rows,
            });
        }

        let row = row.map_err(|e| from_csv_error(source, e))?;
        // Header occupies line 1.
        let line = row
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);

        let record: BenchmarkRecord =
            row.deserialize(Some(&headers))
                .map_err(|e| TreebenchError::Parse {
                    line,
                    message: e.to_string(),
                })?;
        record
            .validate()
            .map_err(|reason| TreebenchError::InvalidRecord { line, reason })?;

        records.push(record);
    }

    Ok(RecordSet::new(records))
}

fn from_csv_error(source: &Path, err: csv::Error) -> TreebenchError {
    if err.is_io_error() {
        return TreebenchError::Io {
            path: source.to_path_buf(),
            message: err.to_string(),
        };
    }
    TreebenchError::Parse {
        line: err.position().map(|p| p.line()).unwrap_or(0),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "N,Structure,Operation,Time_microseconds\n";

    fn load(data: &str) -> Result<RecordSet> {
        load_from_reader(data.as_bytes(), &LoaderConfig::default())
    }

    #[test]
    fn test_load_preserves_order() {
        let data = format!(
            "{}1000,std::set,insert,10.5\n1000,AVL,insert,12\n100,Splay,erase,3.25\n",
            HEADER
        );
        let records = load(&data).unwrap();
        let structures: Vec<&str> = records.iter().map(|r| r.structure.as_str()).collect();
        assert_eq!(structures, vec!["std::set", "AVL", "Splay"]);
        assert_eq!(records.records()[2].n, 100);
        assert_eq!(records.records()[2].time_microseconds, 3.25);
    }

    #[test]
    fn test_column_order_is_irrelevant() {
        let data = "Time_microseconds,Operation,Structure,N\n4.5,search,AVL,10\n";
        let records = load(data).unwrap();
        assert_eq!(records.records()[0], BenchmarkRecord::new("AVL", "search", 10, 4.5));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let data = "Run,N,Structure,Operation,Time_microseconds\n3,10,AVL,insert,1.0\n";
        assert_eq!(load(data).unwrap().len(), 1);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let data = format!("{} 10 , AVL , insert , 2.5 \n", HEADER);
        let records = load(&data).unwrap();
        assert_eq!(records.records()[0], BenchmarkRecord::new("AVL", "insert", 10, 2.5));
    }

    #[test]
    fn test_missing_column() {
        let data = "N,Structure,Time_microseconds\n10,AVL,1.0\n";
        assert_eq!(
            load(data).unwrap_err(),
            TreebenchError::MissingColumn("Operation".to_string())
        );
    }

    #[test]
    fn test_column_names_are_case_sensitive() {
        let data = "n,Structure,Operation,Time_microseconds\n10,AVL,insert,1.0\n";
        assert_eq!(
            load(data).unwrap_err(),
            TreebenchError::MissingColumn("N".to_string())
        );
    }

    #[test]
    fn test_non_numeric_n_is_parse_error() {
        let data = format!("{}10,AVL,insert,1.0\nten,AVL,insert,2.0\n", HEADER);
        match load(&data).unwrap_err() {
            TreebenchError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_short_row_is_parse_error() {
        let data = format!("{}10,AVL,insert\n", HEADER);
        assert!(matches!(load(&data), Err(TreebenchError::Parse { .. })));
    }

    #[test]
    fn test_zero_n_is_invalid() {
        let data = format!("{}0,AVL,insert,1.0\n", HEADER);
        match load(&data).unwrap_err() {
            TreebenchError::InvalidRecord { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("N"));
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_time_is_invalid() {
        let data = format!("{}10,AVL,insert,-1.0\n", HEADER);
        assert!(matches!(
            load(&data),
            Err(TreebenchError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_unknown_operation_tolerated() {
        let data = format!("{}10,AVL,rank,1.0\n", HEADER);
        assert_eq!(load(&data).unwrap().records()[0].operation, "rank");
    }

    #[test]
    fn test_row_limit() {
        let config = LoaderConfig {
            max_rows: 1,
            ..Default::default()
        };
        let data = format!("{}10,AVL,insert,1.0\n10,AVL,erase,1.0\n", HEADER);
        assert_eq!(
            load_from_reader(data.as_bytes(), &config).unwrap_err(),
            TreebenchError::TooManyRows { max: 1 }
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let config = LoaderConfig {
            delimiter: b';',
            ..Default::default()
        };
        let data = "N;Structure;Operation;Time_microseconds\n10;AVL;insert;1.5\n";
        assert_eq!(load_from_reader(data.as_bytes(), &config).unwrap().len(), 1);
    }

    #[test]
    fn test_header_only_is_empty_set() {
        assert!(load(HEADER).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_records("/nonexistent/dir/benchmark_results.csv").unwrap_err();
        assert!(matches!(err, TreebenchError::SourceNotFound { .. }));
        assert!(err.to_string().contains("benchmark harness"));
    }
}
