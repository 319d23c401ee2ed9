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

//! Report run configuration.

use std::path::PathBuf;
use treebench_core::{LoaderConfig, DEFAULT_SOURCE};

/// Font family used for every chart caption and label.
pub const FONT_FAMILY: &str = "sans-serif";

/// Chart geometry and font sizes, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    /// Width of a single-operation chart.
    pub width: u32,
    /// Height of every chart, including each panel of the composite.
    pub height: u32,
    /// Width of one panel in the composite chart.
    pub panel_width: u32,
    /// Caption font size.
    pub title_font_size: u32,
    /// Axis and legend font size.
    pub label_font_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            panel_width: 600,
            title_font_size: 22,
            label_font_size: 14,
        }
    }
}

/// Everything a report run needs.
///
/// # Example
///
/// ```
/// use treebench_report::ReportConfig;
///
/// let config = ReportConfig::default()
///     .with_input("results/benchmark_results.csv")
///     .with_output_dir("charts")
///     .with_sizes(vec![1_000, 100_000]);
/// assert_eq!(config.sizes, Some(vec![1_000, 100_000]));
/// assert!(!config.show);
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Measurement file.
    pub input: PathBuf,
    /// Directory chart images are written to.
    pub output_dir: PathBuf,
    /// Input sizes to tabulate; `None` picks representative sizes.
    pub sizes: Option<Vec<u64>>,
    /// Open each chart in the platform image viewer after writing it.
    ///
    /// Off by default: charts are only written to `output_dir`, never
    /// displayed, unless this is set (`--show` on the command line).
    pub show: bool,
    /// Also write the summary statistics as JSON to this path.
    pub summary_json: Option<PathBuf>,
    /// Loader settings.
    pub loader: LoaderConfig,
    /// Chart geometry.
    pub style: ChartStyle,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from("."),
            sizes: None,
            show: false,
            summary_json: None,
            loader: LoaderConfig::default(),
            style: ChartStyle::default(),
        }
    }
}

impl ReportConfig {
    /// Sets the measurement file.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Sets the chart output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Tabulates exactly these sizes instead of representative ones.
    pub fn with_sizes(mut self, sizes: Vec<u64>) -> Self {
        self.sizes = Some(sizes);
        self
    }

    /// Enables or disables the image viewer.
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Writes the summary as JSON to `path`.
    pub fn with_summary_json(mut self, path: impl Into<PathBuf>) -> Self {
        self.summary_json = Some(path.into());
        self
    }

    /// Replaces the loader settings.
    pub fn with_loader(mut self, loader: LoaderConfig) -> Self {
        self.loader = loader;
        self
    }

    /// Replaces the chart geometry.
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }
}
