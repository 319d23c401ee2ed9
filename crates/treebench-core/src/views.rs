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

//! Read-only groupings of a [`RecordSet`].
//!
//! Views borrow records and are rebuilt on every call. Sorting is always
//! stable, so records that tie keep their source order.

use crate::error::{Result, TreebenchError};
use crate::record::{first_seen, BenchmarkRecord, RecordSet};

/// The points one structure contributes to a chart line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<'a> {
    /// Structure this line belongs to.
    pub structure: &'a str,
    /// Records ordered by ascending `n`.
    pub points: Vec<&'a BenchmarkRecord>,
}

impl Series<'_> {
    /// `(n, time)` pairs ready for plotting.
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|r| (r.n as f64, r.time_microseconds))
            .collect()
    }
}

/// All records for one operation, split into one series per structure.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationGroup<'a> {
    /// Operation identifier.
    pub operation: String,
    /// One series per structure, in order of first appearance.
    pub series: Vec<Series<'a>>,
}

impl<'a> OperationGroup<'a> {
    /// Builds the group for `operation`. An unknown operation yields an
    /// empty group.
    pub fn new(records: &'a RecordSet, operation: &str) -> Self {
        let matching: Vec<&BenchmarkRecord> = records
            .iter()
            .filter(|r| r.operation == operation)
            .collect();

        let series = first_seen(matching.iter().copied().map(|r| r.structure.as_str()))
            .into_iter()
            .map(|structure| {
                let mut points: Vec<&BenchmarkRecord> = matching
                    .iter()
                    .copied()
                    .filter(|r| r.structure == structure)
                    .collect();
                points.sort_by_key(|r| r.n);
                Series { structure, points }
            })
            .collect();

        Self {
            operation: operation.to_string(),
            series,
        }
    }

    /// Returns true if no record matched the operation.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Smallest and largest `(n, time)` over every series, if any.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut points = self.series.iter().flat_map(|s| s.points.iter());
        let first = points.next()?;
        let init = (
            (first.n as f64, first.n as f64),
            (first.time_microseconds, first.time_microseconds),
        );
        Some(points.fold(init, |((x0, x1), (y0, y1)), r| {
            let x = r.n as f64;
            let y = r.time_microseconds;
            ((x0.min(x), x1.max(x)), (y0.min(y), y1.max(y)))
        }))
    }
}

/// All records measured at one input size, split by operation.
#[derive(Debug, Clone, PartialEq)]
pub struct NSlice<'a> {
    /// The input size.
    pub n: u64,
    sections: Vec<(&'a str, Vec<&'a BenchmarkRecord>)>,
}

impl<'a> NSlice<'a> {
    /// Builds the slice for `n`.
    ///
    /// # Errors
    ///
    /// Returns [`TreebenchError::EmptySelection`] if nothing was measured
    /// at `n`.
    pub fn new(records: &'a RecordSet, n: u64) -> Result<Self> {
        let matching: Vec<&BenchmarkRecord> = records.iter().filter(|r| r.n == n).collect();
        if matching.is_empty() {
            return Err(TreebenchError::EmptySelection { n });
        }

        let sections = first_seen(matching.iter().copied().map(|r| r.operation.as_str()))
            .into_iter()
            .map(|operation| {
                let mut rows: Vec<&BenchmarkRecord> = matching
                    .iter()
                    .copied()
                    .filter(|r| r.operation == operation)
                    .collect();
                rows.sort_by(|a, b| a.time_microseconds.total_cmp(&b.time_microseconds));
                (operation, rows)
            })
            .collect();

        Ok(Self { n, sections })
    }

    /// Records for `operation`, fastest first. Empty if the operation was
    /// not measured at this size.
    pub fn section(&self, operation: &str) -> &[&'a BenchmarkRecord] {
        self.sections
            .iter()
            .find(|(op, _)| *op == operation)
            .map(|(_, rows)| rows.as_slice())
            .unwrap_or(&[])
    }

    /// Operations present at this size, in order of first appearance.
    pub fn operations(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.sections.iter().map(|(op, _)| *op)
    }
}

/// Picks a few input sizes that represent the whole range.
///
/// With fewer than three distinct sizes every size is returned. Otherwise
/// the sizes at one third, two thirds and the maximum of the sorted list,
/// deduplicated.
///
/// # Examples
///
/// ```
/// use treebench_core::representative_sizes;
///
/// assert_eq!(
///     representative_sizes(&[1_000, 10_000, 100_000, 1_000_000]),
///     vec![10_000, 100_000, 1_000_000]
/// );
/// assert_eq!(representative_sizes(&[5, 10]), vec![5, 10]);
/// ```
pub fn representative_sizes(sizes: &[u64]) -> Vec<u64> {
    let mut sorted = sizes.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let k = sorted.len();
    if k < 3 {
        return sorted;
    }

    let mut picked = vec![sorted[k / 3], sorted[2 * k / 3], sorted[k - 1]];
    picked.dedup();
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> RecordSet {
        RecordSet::new(vec![
            BenchmarkRecord::new("AVL", "insert", 1000, 90.0),
            BenchmarkRecord::new("AVL", "insert", 100, 8.0),
            BenchmarkRecord::new("Splay", "insert", 100, 6.0),
            BenchmarkRecord::new("Splay", "search", 100, 4.0),
            BenchmarkRecord::new("std::set", "insert", 100, 6.0),
            BenchmarkRecord::new("Splay", "insert", 1000, 70.0),
        ])
    }

    #[test]
    fn test_operation_group_series_sorted_by_n() {
        let records = records();
        let group = OperationGroup::new(&records, "insert");
        let names: Vec<&str> = group.series.iter().map(|s| s.structure).collect();
        assert_eq!(names, vec!["AVL", "Splay", "std::set"]);

        let avl = &group.series[0];
        assert_eq!(avl.coordinates(), vec![(100.0, 8.0), (1000.0, 90.0)]);
    }

    #[test]
    fn test_operation_group_unknown_is_empty() {
        let records = records();
        let group = OperationGroup::new(&records, "erase");
        assert!(group.is_empty());
        assert_eq!(group.bounds(), None);
    }

    #[test]
    fn test_operation_group_bounds() {
        let records = records();
        let group = OperationGroup::new(&records, "insert");
        assert_eq!(group.bounds(), Some(((100.0, 1000.0), (6.0, 90.0))));
    }

    #[test]
    fn test_n_slice_fastest_first_with_stable_ties() {
        let records = records();
        let slice = NSlice::new(&records, 100).unwrap();
        let insert: Vec<&str> = slice
            .section("insert")
            .iter()
            .map(|r| r.structure.as_str())
            .collect();
        // Splay and std::set tie at 6.0; source order decides
        assert_eq!(insert, vec!["Splay", "std::set", "AVL"]);
        assert_eq!(slice.section("search").len(), 1);
        assert!(slice.section("erase").is_empty());
        assert_eq!(slice.operations().collect::<Vec<_>>(), vec!["insert", "search"]);
    }

    #[test]
    fn test_n_slice_empty_selection() {
        let records = records();
        assert_eq!(
            NSlice::new(&records, 42).unwrap_err(),
            TreebenchError::EmptySelection { n: 42 }
        );
    }

    #[test]
    fn test_representative_sizes() {
        assert_eq!(representative_sizes(&[]), Vec::<u64>::new());
        assert_eq!(representative_sizes(&[7]), vec![7]);
        assert_eq!(representative_sizes(&[3, 1, 2]), vec![2, 3]);
        assert_eq!(
            representative_sizes(&[10, 20, 30, 40, 50, 60]),
            vec![30, 50, 60]
        );
    }
}
