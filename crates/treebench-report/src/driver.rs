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

//! End-to-end report run.
//!
//! Steps run strictly in order, each reading the same record set:
//!
//! 1. one chart per operation
//! 2. the composite chart
//! 3. comparative tables for the selected sizes
//! 4. the summary statistics table (and optional JSON export)
//!
//! A size with no measurements is logged and skipped. Every other error
//! ends the run.

use crate::chart::{render_operation_chart_to, ChartNames};
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::panel::render_all_operations_chart;
use crate::render::{ChartRenderer, PlottersRenderer};
use crate::summary::{export_summary_json, SummaryTable};
use crate::table::ComparativeTable;
use crate::viewer::{ChartViewer, NoViewer, SystemViewer};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use treebench_core::{
    display_label, load_records_with_config, representative_sizes, RecordSet, DEFAULT_PALETTE,
};

/// What a report run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOutcome {
    /// Chart files written, per-operation charts first, composite last.
    pub charts: Vec<PathBuf>,
    /// Sizes a comparative table was printed for.
    pub tables: Vec<u64>,
    /// Requested sizes with no measurements.
    pub skipped_sizes: Vec<u64>,
    /// Number of rows in the summary table.
    pub summary_rows: usize,
    /// Path of the JSON summary, if one was written.
    pub summary_json: Option<PathBuf>,
}

/// Runs every report step over one measurement file.
pub struct ReportDriver {
    config: ReportConfig,
    renderer: Box<dyn ChartRenderer>,
    viewer: Box<dyn ChartViewer>,
}

impl ReportDriver {
    /// Creates a driver that renders PNGs with the default palette and,
    /// if `config.show` is set, opens them in the system viewer.
    pub fn new(config: ReportConfig) -> Self {
        let renderer = Box::new(PlottersRenderer::new(DEFAULT_PALETTE, config.style));
        let viewer: Box<dyn ChartViewer> = if config.show {
            Box::new(SystemViewer)
        } else {
            Box::new(NoViewer)
        };
        Self {
            config,
            renderer,
            viewer,
        }
    }

    /// Replaces the chart renderer.
    pub fn with_renderer(mut self, renderer: impl ChartRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Replaces the chart viewer.
    pub fn with_viewer(mut self, viewer: impl ChartViewer + 'static) -> Self {
        self.viewer = Box::new(viewer);
        self
    }

    /// The run configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Loads the configured input and writes every report, printing
    /// tables to stdout.
    pub fn run(&self) -> Result<ReportOutcome> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Loads the configured input and writes every report, printing
    /// tables to `out`.
    ///
    /// # Errors
    ///
    /// Fails before producing anything if the input cannot be loaded.
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<ReportOutcome> {
        let records = load_records_with_config(&self.config.input, &self.config.loader)?;
        self.report(&records, out)
    }

    /// Writes every report for already-loaded records.
    pub fn report<W: Write>(&self, records: &RecordSet, out: &mut W) -> Result<ReportOutcome> {
        let mut outcome = ReportOutcome::default();
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| ReportError::io_error(output_dir, e))?;

        let mut names = ChartNames::new();
        for operation in records.operations() {
            info!("Generating chart for {}", display_label(operation));
            let path = output_dir.join(names.claim(operation));
            render_operation_chart_to(records, operation, self.renderer.as_ref(), &path)?;
            self.display(&path);
            outcome.charts.push(path);
        }

        info!("Generating composite chart");
        let path = render_all_operations_chart(records, self.renderer.as_ref(), output_dir)?;
        self.display(&path);
        outcome.charts.push(path);

        for n in self.selected_sizes(records) {
            match ComparativeTable::build(records, n) {
                Ok(table) => {
                    writeln!(out, "\n{}", table).map_err(ReportError::console)?;
                    outcome.tables.push(n);
                }
                Err(e) if !e.is_fatal() => {
                    warn!("{}; skipping comparative table", e);
                    outcome.skipped_sizes.push(n);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let summary = SummaryTable::build(records);
        writeln!(out, "\n{}", summary).map_err(ReportError::console)?;
        outcome.summary_rows = summary.rows.len();

        if let Some(path) = &self.config.summary_json {
            export_summary_json(&summary, path)?;
            info!("Wrote summary to {}", path.display());
            outcome.summary_json = Some(path.clone());
        }

        Ok(outcome)
    }

    fn selected_sizes(&self, records: &RecordSet) -> Vec<u64> {
        match &self.config.sizes {
            Some(sizes) => sizes.clone(),
            None => representative_sizes(&records.sizes()),
        }
    }

    // Display is best effort; a missing viewer never fails the run.
    fn display(&self, path: &Path) {
        if let Err(e) = self.viewer.show(path) {
            warn!("{}", e);
        }
    }
}
