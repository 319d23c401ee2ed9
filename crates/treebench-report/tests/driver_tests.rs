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

//! Report driver integration tests against files on disk.
//!
//! A stub renderer stands in for the PNG backend so these tests do not
//! depend on system fonts.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use treebench_core::{OperationGroup, TreebenchError};
use treebench_report::{
    ChartRenderer, ReportConfig, ReportDriver, ReportError, Result, COMPOSITE_FILE_NAME,
};

#[derive(Default)]
struct StubRenderer {
    written: RefCell<Vec<(PathBuf, Vec<String>)>>,
}

impl StubRenderer {
    fn touch(&self, path: &Path, operations: Vec<String>) -> Result<()> {
        fs::write(path, b"png").map_err(|e| ReportError::io_error(path, e))?;
        self.written.borrow_mut().push((path.to_path_buf(), operations));
        Ok(())
    }
}

impl ChartRenderer for StubRenderer {
    fn render_operation(&self, group: &OperationGroup<'_>, path: &Path) -> Result<()> {
        self.touch(path, vec![group.operation.clone()])
    }

    fn render_panels(&self, groups: &[OperationGroup<'_>], path: &Path) -> Result<()> {
        self.touch(path, groups.iter().map(|g| g.operation.clone()).collect())
    }
}

const RESULTS: &str = "\
Structure,Operation,N,Time_microseconds
AVL,insert,1000,88.1
Splay,insert,1000,70.6
AVL,search,1000,35.7
Splay,search,1000,52.0
AVL,erase,1000,97.4
Splay,erase,1000,64.8
AVL,insert,10000,1104.9
Splay,insert,10000,903.3
AVL,search,10000,468.3
Splay,search,10000,701.6
AVL,erase,10000,1250.2
Splay,erase,10000,821.7
AVL,insert,100000,14020.0
Splay,insert,100000,11890.4
";

fn setup(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("benchmark_results.csv");
    fs::write(&input, contents).unwrap();
    (dir, input)
}

#[test]
fn test_full_report() {
    let (dir, input) = setup(RESULTS);
    let charts = dir.path().join("charts");
    let summary_json = dir.path().join("summary.json");
    let config = ReportConfig::default()
        .with_input(&input)
        .with_output_dir(&charts)
        .with_summary_json(&summary_json);

    let mut out = Vec::new();
    let outcome = ReportDriver::new(config)
        .with_renderer(StubRenderer::default())
        .run_with_output(&mut out)
        .unwrap();

    let names: Vec<String> = outcome
        .charts
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "benchmark_insert.png",
            "benchmark_search.png",
            "benchmark_erase.png",
            COMPOSITE_FILE_NAME,
        ]
    );
    assert!(outcome.charts.iter().all(|p| p.exists()));

    // middle and largest of three sizes
    assert_eq!(outcome.tables, vec![10000, 100000]);
    assert_eq!(outcome.summary_rows, 6);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Comparative table for N = 10,000"));
    assert!(text.contains("Deletion"));
    assert!(text.contains("SUMMARY STATISTICS"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary_json).unwrap()).unwrap();
    assert_eq!(json["rows"].as_array().unwrap().len(), 6);
}

#[test]
fn test_faster_structure_listed_first() {
    let (dir, input) = setup(
        "Structure,Operation,N,Time_microseconds\n\
         StructA,insert,100,5.0\n\
         StructB,insert,100,3.0\n\
         StructA,insert,200,9.0\n",
    );
    let config = ReportConfig::default()
        .with_input(&input)
        .with_output_dir(dir.path())
        .with_sizes(vec![100]);

    let mut out = Vec::new();
    ReportDriver::new(config)
        .with_renderer(StubRenderer::default())
        .run_with_output(&mut out)
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let table_end = text.find("SUMMARY STATISTICS").unwrap();
    let table = &text[..table_end];
    assert!(table.find("StructB").unwrap() < table.find("StructA").unwrap());
}

#[test]
fn test_missing_source_writes_no_artifacts() {
    let dir = TempDir::new().unwrap();
    let charts = dir.path().join("charts");
    let config = ReportConfig::default()
        .with_input(dir.path().join("benchmark_results.csv"))
        .with_output_dir(&charts);

    let mut out = Vec::new();
    let err = ReportDriver::new(config)
        .with_renderer(StubRenderer::default())
        .run_with_output(&mut out)
        .unwrap_err();

    assert!(matches!(
        err,
        ReportError::Core(TreebenchError::SourceNotFound { .. })
    ));
    assert!(err.to_string().contains("not found"));
    assert!(!charts.exists());
    assert!(out.is_empty());
}

#[test]
fn test_unmeasured_size_is_skipped() {
    let (dir, input) = setup(RESULTS);
    let config = ReportConfig::default()
        .with_input(&input)
        .with_output_dir(dir.path())
        .with_sizes(vec![1000, 5000, 100000]);

    let mut out = Vec::new();
    let outcome = ReportDriver::new(config)
        .with_renderer(StubRenderer::default())
        .run_with_output(&mut out)
        .unwrap();

    assert_eq!(outcome.tables, vec![1000, 100000]);
    assert_eq!(outcome.skipped_sizes, vec![5000]);

    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("N = 5,000"));
    assert!(text.contains("SUMMARY STATISTICS"));
}

#[test]
fn test_malformed_input_is_fatal() {
    let (dir, input) = setup("Structure,Operation,N\nAVL,insert,10\n");
    let config = ReportConfig::default()
        .with_input(&input)
        .with_output_dir(dir.path().join("charts"));

    let mut out = Vec::new();
    let err = ReportDriver::new(config)
        .with_renderer(StubRenderer::default())
        .run_with_output(&mut out)
        .unwrap_err();

    assert!(matches!(
        err,
        ReportError::Core(TreebenchError::MissingColumn(ref c)) if c == "Time_microseconds"
    ));
}
