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

//! Command-line arguments and their execution.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use treebench_core::{LoaderConfig, DEFAULT_MAX_ROWS, DEFAULT_SOURCE};
use treebench_report::{ReportConfig, ReportDriver};

const INFO_FILTER: &str = "treebench_cli=info,treebench_core=info,treebench_report=info";
const DEBUG_FILTER: &str = "treebench_cli=debug,treebench_core=debug,treebench_report=debug";

/// Treebench - charts and tables for balanced tree benchmarks
///
/// Reads the measurements written by the benchmark harness, writes one
/// chart per operation plus a composite chart, and prints comparative
/// tables and summary statistics.
///
/// # Examples
///
/// ```bash
/// # Report on ./benchmark_results.csv, charts in the current directory
/// treebench
///
/// # Charts into ./charts, tables for two sizes, JSON summary
/// treebench results.csv -o charts -n 1000 -n 100000 --summary-json summary.json
/// ```
#[derive(Debug, Parser)]
#[command(name = "treebench")]
#[command(author, version, about = "Treebench - charts and tables for balanced tree benchmarks", long_about = None)]
pub struct Cli {
    /// Measurement CSV written by the benchmark harness
    #[arg(value_name = "INPUT", default_value = DEFAULT_SOURCE)]
    pub input: PathBuf,

    /// Directory chart images are written to
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "TREEBENCH_OUTPUT_DIR",
        default_value = "."
    )]
    pub output_dir: PathBuf,

    /// Input size to print a comparative table for (repeatable; default:
    /// representative sizes from the data)
    #[arg(short = 'n', long = "size", value_name = "N", value_delimiter = ',')]
    pub sizes: Vec<u64>,

    /// Open each chart in the system image viewer
    #[arg(long)]
    pub show: bool,

    /// Also write summary statistics as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Field delimiter of the input file (a single character, or `tab`)
    #[arg(long, value_name = "C", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Maximum number of data rows to accept
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_ROWS)]
    pub max_rows: usize,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            DEBUG_FILTER
        } else {
            INFO_FILTER
        }
    }

    /// Builds the report configuration from the parsed arguments.
    pub fn to_config(&self) -> ReportConfig {
        let loader = LoaderConfig {
            delimiter: self.delimiter,
            max_rows: self.max_rows,
            ..Default::default()
        };

        let mut config = ReportConfig::default()
            .with_input(&self.input)
            .with_output_dir(&self.output_dir)
            .with_show(self.show)
            .with_loader(loader);
        if !self.sizes.is_empty() {
            config = config.with_sizes(self.sizes.clone());
        }
        if let Some(path) = &self.summary_json {
            config = config.with_summary_json(path);
        }
        config
    }

    /// Runs every report.
    ///
    /// # Errors
    ///
    /// Returns the message of the first fatal error: a missing or
    /// malformed input file, or a chart or export that could not be
    /// written.
    pub fn execute(self) -> Result<(), String> {
        let outcome = ReportDriver::new(self.to_config())
            .run()
            .map_err(|e| e.to_string())?;

        info!(
            "Wrote {} charts to {}",
            outcome.charts.len(),
            self.output_dir.display()
        );
        if !outcome.skipped_sizes.is_empty() {
            info!("Skipped sizes without measurements: {:?}", outcome.skipped_sizes);
        }
        Ok(())
    }
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    value
                )),
            }
        }
    }
}
