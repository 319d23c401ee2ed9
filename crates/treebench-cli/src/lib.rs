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

//! Treebench CLI library for argument parsing and execution.
//!
//! The `treebench` binary reads the CSV written by the benchmark harness
//! and produces every report in one run:
//!
//! - a line chart per operation and a composite chart, as PNG files
//! - comparative tables for representative (or requested) input sizes
//! - summary statistics per structure and operation
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use treebench_cli::cli::Cli;
//!
//! let cli = Cli::parse_from(["treebench", "results.csv", "-o", "charts"]);
//! cli.execute()?;
//! # Ok::<(), String>(())
//! ```

pub mod cli;
