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

//! Treebench core: the measurement model and everything computed from it.
//!
//! A benchmark harness times `insert`, `search` and `erase` on several
//! ordered-set implementations at increasing input sizes and writes one CSV
//! row per measurement. This crate loads that file and answers the
//! questions the reports ask of it.
//!
//! # Modules
//!
//! - `record`: [`BenchmarkRecord`] and the immutable [`RecordSet`]
//! - `loader`: CSV loading with header-name column matching
//! - `labels`: display labels for operation identifiers
//! - `palette`: fixed per-structure chart colors
//! - `views`: [`OperationGroup`] and [`NSlice`] groupings
//! - `stats`: per `(structure, operation)` descriptive statistics
//!
//! # Example
//!
//! ```no_run
//! use treebench_core::{load_records, summarize, OperationGroup};
//!
//! let records = load_records("benchmark_results.csv")?;
//! for operation in records.operations() {
//!     let group = OperationGroup::new(&records, operation);
//!     println!("{}: {} structures", operation, group.series.len());
//! }
//! for row in summarize(&records) {
//!     println!("{} {} mean={}", row.structure, row.operation, row.mean);
//! }
//! # Ok::<(), treebench_core::TreebenchError>(())
//! ```

pub mod error;
pub mod labels;
pub mod loader;
pub mod palette;
pub mod record;
pub mod stats;
pub mod views;

pub use error::{Result, TreebenchError};
pub use labels::{display_label, CANONICAL_OPERATIONS};
pub use loader::{
    load_from_reader, load_records, load_records_with_config, LoaderConfig, DEFAULT_MAX_ROWS,
    DEFAULT_SOURCE, REQUIRED_COLUMNS,
};
pub use palette::{structure_color, Palette, Rgb, DEFAULT_PALETTE};
pub use record::{BenchmarkRecord, RecordSet};
pub use stats::{round2, summarize, StructureOperationSummary};
pub use views::{representative_sizes, NSlice, OperationGroup, Series};
