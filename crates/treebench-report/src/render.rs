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

//! Chart rendering backends.
//!
//! The chart generators decide *what* to draw: which records, in which
//! order, under which file name. A [`ChartRenderer`] turns that into an
//! image file.

use crate::chart::{draw_operation, draw_to_file};
use crate::config::ChartStyle;
use crate::error::Result;
use crate::panel::{composite_size, draw_panels};
use std::path::Path;
use treebench_core::{OperationGroup, Palette};

/// Turns operation groups into image files.
pub trait ChartRenderer {
    /// Writes a single-operation chart to `path`.
    fn render_operation(&self, group: &OperationGroup<'_>, path: &Path) -> Result<()>;

    /// Writes one side-by-side panel per group to `path`.
    fn render_panels(&self, groups: &[OperationGroup<'_>], path: &Path) -> Result<()>;
}

/// PNG renderer built on `plotters`.
#[derive(Debug, Clone)]
pub struct PlottersRenderer {
    palette: Palette,
    style: ChartStyle,
}

impl PlottersRenderer {
    /// Creates a renderer drawing with `palette` and `style`.
    pub fn new(palette: Palette, style: ChartStyle) -> Self {
        Self { palette, style }
    }
}

impl Default for PlottersRenderer {
    fn default() -> Self {
        Self::new(Palette::default(), ChartStyle::default())
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render_operation(&self, group: &OperationGroup<'_>, path: &Path) -> Result<()> {
        let size = (self.style.width, self.style.height);
        draw_to_file(path, size, |root| {
            draw_operation(root, group, &self.palette, &self.style)
        })
    }

    fn render_panels(&self, groups: &[OperationGroup<'_>], path: &Path) -> Result<()> {
        let size = composite_size(groups.len(), &self.style);
        draw_to_file(path, size, |root| {
            draw_panels(root, groups, &self.palette, &self.style)
        })
    }
}
