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

//! Loader integration tests against files on disk.

use std::fs;
use tempfile::TempDir;
use treebench_core::{load_records, summarize, NSlice, TreebenchError};

// Shape of the harness output: N first, three structures, three operations.
const HARNESS_OUTPUT: &str = "\
N,Structure,Operation,Time_microseconds
1000,std::set,insert,61.3
1000,std::set,search,40.2
1000,std::set,erase,55.9
1000,AVL,insert,88.1
1000,AVL,search,35.7
1000,AVL,erase,97.4
1000,Splay,insert,70.6
1000,Splay,search,52.0
1000,Splay,erase,64.8
10000,std::set,insert,812.5
10000,std::set,search,530.1
10000,std::set,erase,744.0
10000,AVL,insert,1104.9
10000,AVL,search,468.3
10000,AVL,erase,1250.2
10000,Splay,insert,903.3
10000,Splay,search,701.6
10000,Splay,erase,821.7
";

#[test]
fn test_load_harness_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("benchmark_results.csv");
    fs::write(&path, HARNESS_OUTPUT).unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 18);
    assert_eq!(records.operations(), vec!["insert", "search", "erase"]);
    assert_eq!(records.structures(), vec!["std::set", "AVL", "Splay"]);
    assert_eq!(records.sizes(), vec![1000, 10000]);

    let slice = NSlice::new(&records, 1000).unwrap();
    let search: Vec<&str> = slice
        .section("search")
        .iter()
        .map(|r| r.structure.as_str())
        .collect();
    assert_eq!(search, vec!["AVL", "std::set", "Splay"]);

    let summary = summarize(&records);
    assert_eq!(summary.len(), 9);
    assert!(summary.iter().all(|s| s.count == 2));
}

#[test]
fn test_missing_source_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("benchmark_results.csv");

    match load_records(&path) {
        Err(TreebenchError::SourceNotFound { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected SourceNotFound, got {:?}", other),
    }
}

#[test]
fn test_malformed_time_fails_whole_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(
        &path,
        "N,Structure,Operation,Time_microseconds\n10,AVL,insert,1.5\n10,AVL,erase,fast\n",
    )
    .unwrap();

    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, TreebenchError::Parse { line: 3, .. }));
    assert!(err.is_fatal());
}
