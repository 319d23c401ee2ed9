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

//! Single-operation line charts.
//!
//! One chart per operation: time against N, one line per structure. The
//! panel drawing here is shared with the composite chart in
//! [`crate::panel`].

use crate::config::{ChartStyle, FONT_FAMILY};
use crate::error::{ReportError, Result};
use crate::format::format_thousands;
use crate::panel::COMPOSITE_FILE_NAME;
use crate::render::ChartRenderer;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::collections::HashSet;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use treebench_core::{display_label, OperationGroup, Palette, RecordSet, Rgb};

const MARKER_SIZE: u32 = 4;
const LINE_WIDTH: u32 = 2;

pub(crate) type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;
pub(crate) type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// File name of the chart for `operation`.
///
/// Characters outside `[A-Za-z0-9_-]` become `_` so any operation
/// identifier yields a plain file name.
///
/// # Examples
///
/// ```
/// use treebench_report::chart_file_name;
///
/// assert_eq!(chart_file_name("insert"), "benchmark_insert.png");
/// assert_eq!(chart_file_name("range/query"), "benchmark_range_query.png");
/// ```
pub fn chart_file_name(operation: &str) -> String {
    let sanitized: String = operation
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("benchmark_{}.png", sanitized)
}

/// Renders the chart for one operation into `output_dir`.
///
/// An operation with no records still produces an empty chart. The file
/// is named by [`chart_file_name`]; two operations that sanitize to the
/// same name overwrite each other, so a full report run names its charts
/// through [`ChartNames`] instead.
///
/// # Returns
///
/// Path of the written chart.
pub fn render_operation_chart(
    records: &RecordSet,
    operation: &str,
    renderer: &dyn ChartRenderer,
    output_dir: &Path,
) -> Result<PathBuf> {
    let path = output_dir.join(chart_file_name(operation));
    render_operation_chart_to(records, operation, renderer, &path)?;
    Ok(path)
}

/// Renders the chart for one operation to exactly `path`.
pub fn render_operation_chart_to(
    records: &RecordSet,
    operation: &str,
    renderer: &dyn ChartRenderer,
    path: &Path,
) -> Result<()> {
    let group = OperationGroup::new(records, operation);
    debug!(
        "Charting {} ({} structures) to {}",
        operation,
        group.series.len(),
        path.display()
    );
    renderer.render_operation(&group, path)
}

/// Chart file names that are unique within one report run.
///
/// The composite chart's name is reserved up front. An operation whose
/// sanitized name is already taken gets a numeric suffix, starting at
/// `_2`.
///
/// # Examples
///
/// ```
/// use treebench_report::ChartNames;
///
/// let mut names = ChartNames::new();
/// assert_eq!(names.claim("range query"), "benchmark_range_query.png");
/// assert_eq!(names.claim("range_query"), "benchmark_range_query_2.png");
/// assert_eq!(names.claim("all_operations"), "benchmark_all_operations_2.png");
/// ```
#[derive(Debug, Clone)]
pub struct ChartNames {
    used: HashSet<String>,
}

impl ChartNames {
    /// Creates a name set holding only the composite chart's name.
    pub fn new() -> Self {
        let mut used = HashSet::new();
        used.insert(COMPOSITE_FILE_NAME.to_string());
        Self { used }
    }

    /// Returns an unused file name for `operation` and marks it used.
    pub fn claim(&mut self, operation: &str) -> String {
        let name = chart_file_name(operation);
        if self.used.insert(name.clone()) {
            return name;
        }

        let stem = name.strip_suffix(".png").unwrap_or(&name);
        let mut suffix = 2;
        loop {
            let candidate = format!("{}_{}.png", stem, suffix);
            if self.used.insert(candidate.clone()) {
                warn!(
                    "Chart for operation '{}' written to {} ({} is already taken)",
                    operation, candidate, name
                );
                return candidate;
            }
            suffix += 1;
        }
    }
}

impl Default for ChartNames {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a white canvas at `path`, runs `draw` and flushes the image.
pub(crate) fn draw_to_file<F>(path: &Path, size: (u32, u32), draw: F) -> Result<()>
where
    F: FnOnce(&Canvas<'_>) -> DrawResult,
{
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ReportError::render(path, e))?;
    draw(&root).map_err(|e| ReportError::render(path, e))?;
    root.present().map_err(|e| ReportError::render(path, e))?;
    Ok(())
}

/// Draws one operation's lines, markers, axes and legend onto `area`.
pub(crate) fn draw_operation(
    area: &Canvas<'_>,
    group: &OperationGroup<'_>,
    palette: &Palette,
    style: &ChartStyle,
) -> DrawResult {
    let title = format!("Execution time - {}", display_label(&group.operation));
    let ((x_min, x_max), (y_min, y_max)) = group.bounds().unwrap_or(((0.0, 1.0), (0.0, 1.0)));

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT_FAMILY, style.title_font_size))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(padded(x_min, x_max), padded(y_min, y_max))?;

    chart
        .configure_mesh()
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.04))
        .x_labels(6)
        .y_labels(8)
        .x_label_formatter(&|x| format_thousands(*x, 0))
        .y_label_formatter(&|y| format_thousands(*y, 0))
        .x_desc("Input size (N)")
        .y_desc("Total time [microseconds]")
        .label_style((FONT_FAMILY, style.label_font_size))
        .axis_desc_style((FONT_FAMILY, style.label_font_size))
        .draw()?;

    for series in &group.series {
        let color = to_plotters(palette.color_for(series.structure));
        let points = series.coordinates();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(LINE_WIDTH)))?
            .label(series.structure)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
            });

        chart.draw_series(PointSeries::of_element(
            points,
            MARKER_SIZE,
            color.filled(),
            &|coord, size, shape| EmptyElement::at(coord) + Circle::new((0, 0), size, shape),
        ))?;
    }

    if !group.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((FONT_FAMILY, style.label_font_size))
            .draw()?;
    }

    Ok(())
}

fn to_plotters(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// Widens a range by 5% on each side, or by a fixed margin when all
/// values are equal.
fn padded(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        min.abs().max(1.0) * 0.1
    };
    (min - pad)..(max + pad)
}
