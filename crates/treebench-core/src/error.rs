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

//! Error types for loading and slicing benchmark measurements.
//!
//! Every variant except [`TreebenchError::EmptySelection`] is fatal to a
//! report run. `EmptySelection` is returned when a requested grouping has
//! no data; callers log it and move on.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for treebench core operations.
pub type Result<T> = std::result::Result<T, TreebenchError>;

/// Errors produced while loading or querying benchmark records.
///
/// # Examples
///
/// ```
/// use treebench_core::TreebenchError;
///
/// let err = TreebenchError::Parse {
///     line: 7,
///     message: "invalid digit found in string".to_string(),
/// };
/// assert!(err.to_string().contains("line 7"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreebenchError {
    /// The measurement file could not be located or opened.
    ///
    /// The message tells the user which program is expected to produce it.
    #[error("'{path}' not found. Run {producer} first to generate it")]
    SourceNotFound {
        /// Path that was looked up
        path: PathBuf,
        /// Human readable name of the program that writes the file
        producer: String,
    },

    /// The source was opened but reading from it failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error message
        message: String,
    },

    /// A required column is absent from the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A data row could not be decoded into a record.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// Line number in the source (1-based, header is line 1)
        line: u64,
        /// Decoder message
        message: String,
    },

    /// A row decoded but violates a record invariant.
    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord {
        /// Line number in the source (1-based, header is line 1)
        line: u64,
        /// Violated invariant
        reason: String,
    },

    /// The source holds more data rows than the configured limit.
    #[error("Too many rows: limit is {max}")]
    TooManyRows {
        /// Configured row limit
        max: usize,
    },

    /// No records match the requested input size.
    #[error("No measurements recorded for N = {n}")]
    EmptySelection {
        /// The requested input size
        n: u64,
    },
}

impl TreebenchError {
    /// Returns true if the error should abort a report run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, TreebenchError::EmptySelection { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_names_producer() {
        let err = TreebenchError::SourceNotFound {
            path: PathBuf::from("benchmark_results.csv"),
            producer: "the benchmark harness".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("benchmark_results.csv"));
        assert!(msg.contains("the benchmark harness"));
    }

    #[test]
    fn test_only_empty_selection_is_recoverable() {
        assert!(!TreebenchError::EmptySelection { n: 10 }.is_fatal());
        assert!(TreebenchError::MissingColumn("N".to_string()).is_fatal());
        assert!(TreebenchError::TooManyRows { max: 1 }.is_fatal());
    }
}
