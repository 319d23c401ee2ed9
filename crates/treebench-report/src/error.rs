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

//! Error types for report generation.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use treebench_core::TreebenchError;

/// Result type for report generation.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while producing report artifacts.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Loading or slicing the measurements failed.
    #[error(transparent)]
    Core(#[from] TreebenchError),

    /// The chart backend failed to draw or encode an image.
    #[error("Failed to render '{path}': {message}")]
    Render {
        /// Chart file being written
        path: PathBuf,
        /// Backend error message
        message: String,
    },

    /// Writing an output file or the console failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// Target path, or `<stdout>` for console output
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Serializing an export failed.
    #[error("Export error: {0}")]
    Export(String),

    /// The chart viewer could not be launched.
    #[error("Could not display '{path}': {message}")]
    Viewer {
        /// Chart that was to be shown
        path: PathBuf,
        /// Launcher error message
        message: String,
    },
}

impl ReportError {
    /// Creates an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Creates a render error with path context.
    pub fn render(path: &Path, source: impl std::fmt::Display) -> Self {
        Self::Render {
            path: path.to_path_buf(),
            message: source.to_string(),
        }
    }

    /// I/O error for console output.
    pub(crate) fn console(source: io::Error) -> Self {
        Self::io_error("<stdout>", source)
    }
}
