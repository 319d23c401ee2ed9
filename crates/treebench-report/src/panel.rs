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

//! Composite chart with one panel per operation.
//!
//! Panels sit in a single row, one per distinct operation in the data, in
//! order of first appearance. The image grows wider with the panel count
//! instead of squeezing panels into a fixed width.

use crate::chart::{draw_operation, Canvas, DrawResult};
use crate::config::{ChartStyle, FONT_FAMILY};
use crate::error::Result;
use crate::render::ChartRenderer;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use treebench_core::{OperationGroup, Palette, RecordSet, CANONICAL_OPERATIONS};

/// File name of the composite chart.
pub const COMPOSITE_FILE_NAME: &str = "benchmark_all_operations.png";

/// Height reserved above the panels for the composite caption.
const TITLE_BAND: u32 = 40;

/// Renders every operation side by side into `output_dir`.
///
/// # Returns
///
/// Path of the written chart.
pub fn render_all_operations_chart(
    records: &RecordSet,
    renderer: &dyn ChartRenderer,
    output_dir: &Path,
) -> Result<PathBuf> {
    let groups: Vec<OperationGroup<'_>> = records
        .operations()
        .into_iter()
        .map(|operation| OperationGroup::new(records, operation))
        .collect();

    if groups.len() != CANONICAL_OPERATIONS.len() {
        info!(
            "Composite chart has {} panels (expected {})",
            groups.len(),
            CANONICAL_OPERATIONS.len()
        );
    }

    let path = output_dir.join(COMPOSITE_FILE_NAME);
    debug!("Charting {} panels to {}", groups.len(), path.display());
    renderer.render_panels(&groups, &path)?;
    Ok(path)
}

/// Pixel size of a composite with `panels` panels. Zero panels still get
/// one panel's worth of blank canvas.
pub(crate) fn composite_size(panels: usize, style: &ChartStyle) -> (u32, u32) {
    let columns = panels.max(1) as u32;
    (style.panel_width * columns, style.height + TITLE_BAND)
}

pub(crate) fn draw_panels(
    root: &Canvas<'_>,
    groups: &[OperationGroup<'_>],
    palette: &Palette,
    style: &ChartStyle,
) -> DrawResult {
    let body = root.titled(
        "Execution time by operation",
        (FONT_FAMILY, style.title_font_size + 4),
    )?;
    if groups.is_empty() {
        return Ok(());
    }

    let panels = body.split_evenly((1, groups.len()));
    for (area, group) in panels.iter().zip(groups) {
        draw_operation(area, group, palette, style)?;
    }
    Ok(())
}
