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

//! Treebench reports: charts, comparative tables and summary statistics.
//!
//! Given the measurements loaded by `treebench-core`, this crate produces
//! the artifacts a reader uses to compare tree implementations:
//!
//! - one line chart per operation (`benchmark_<operation>.png`)
//! - a composite chart with one panel per operation
//!   (`benchmark_all_operations.png`)
//! - comparative tables ranking structures at selected input sizes
//! - a summary statistics table, optionally exported as JSON
//!
//! [`ReportDriver`] runs all of them in order.
//!
//! # Example
//!
//! ```no_run
//! use treebench_report::{ReportConfig, ReportDriver};
//!
//! let config = ReportConfig::default()
//!     .with_input("benchmark_results.csv")
//!     .with_output_dir("charts");
//! let outcome = ReportDriver::new(config).run()?;
//! println!("wrote {} charts", outcome.charts.len());
//! # Ok::<(), treebench_report::ReportError>(())
//! ```

pub mod chart;
pub mod config;
pub mod driver;
pub mod error;
pub mod format;
pub mod panel;
pub mod render;
pub mod summary;
pub mod table;
pub mod viewer;

pub use chart::{
    chart_file_name, render_operation_chart, render_operation_chart_to, ChartNames,
};
pub use config::{ChartStyle, ReportConfig, FONT_FAMILY};
pub use driver::{ReportDriver, ReportOutcome};
pub use error::{ReportError, Result};
pub use format::format_thousands;
pub use panel::{render_all_operations_chart, COMPOSITE_FILE_NAME};
pub use render::{ChartRenderer, PlottersRenderer};
pub use summary::{export_summary_json, SummaryTable};
pub use table::{ComparativeTable, TableRow, TableSection};
pub use viewer::{ChartViewer, NoViewer, SystemViewer};
