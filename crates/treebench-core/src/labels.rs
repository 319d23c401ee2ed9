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

//! Display labels for operation identifiers.

/// Operations the benchmark harness measures, in report order.
pub const CANONICAL_OPERATIONS: [&str; 3] = ["insert", "search", "erase"];

const OPERATION_LABELS: &[(&str, &str)] = &[
    ("insert", "Insertion"),
    ("search", "Search"),
    ("erase", "Deletion"),
];

/// Returns the display label for an operation.
///
/// Unknown operations are returned unchanged.
///
/// # Examples
///
/// ```
/// use treebench_core::display_label;
///
/// assert_eq!(display_label("erase"), "Deletion");
/// assert_eq!(display_label("rank"), "rank");
/// ```
pub fn display_label(operation: &str) -> &str {
    OPERATION_LABELS
        .iter()
        .find(|(id, _)| *id == operation)
        .map(|(_, label)| *label)
        .unwrap_or(operation)
}
