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

//! Displaying written charts.

use crate::error::{ReportError, Result};
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Shows a chart file to the user.
pub trait ChartViewer {
    /// Displays the chart at `path`, returning once the viewer has been
    /// handed the file.
    fn show(&self, path: &Path) -> Result<()>;
}

/// Viewer that only logs the chart location.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoViewer;

impl ChartViewer for NoViewer {
    fn show(&self, path: &Path) -> Result<()> {
        debug!("Chart available at {}", path.display());
        Ok(())
    }
}

/// Opens charts with the platform's default image viewer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl SystemViewer {
    fn command(path: &Path) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(path);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl ChartViewer for SystemViewer {
    fn show(&self, path: &Path) -> Result<()> {
        info!("Opening {}", path.display());
        let status = Self::command(path).status().map_err(|e| ReportError::Viewer {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(ReportError::Viewer {
                path: path.to_path_buf(),
                message: format!("viewer exited with {}", status),
            })
        }
    }
}
