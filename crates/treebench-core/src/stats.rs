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

//! Descriptive statistics per `(structure, operation)` pair.

use crate::record::RecordSet;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of every measurement for one structure and operation.
///
/// All figures are in microseconds, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureOperationSummary {
    /// Structure identifier.
    pub structure: String,
    /// Operation identifier.
    pub operation: String,
    /// Number of measurements.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation; `None` for a single measurement.
    pub std_dev: Option<f64>,
    /// Minimum.
    pub min: f64,
    /// 25th percentile.
    pub p25: f64,
    /// Median.
    pub median: f64,
    /// 75th percentile.
    pub p75: f64,
    /// Maximum.
    pub max: f64,
}

/// Computes one summary per `(structure, operation)` pair, ordered by
/// structure and then operation.
///
/// # Examples
///
/// ```
/// use treebench_core::{summarize, BenchmarkRecord, RecordSet};
///
/// let records = RecordSet::new(vec![
///     BenchmarkRecord::new("AVL", "insert", 100, 5.0),
///     BenchmarkRecord::new("AVL", "insert", 200, 9.0),
/// ]);
/// let summary = summarize(&records);
/// assert_eq!(summary[0].count, 2);
/// assert_eq!(summary[0].mean, 7.0);
/// ```
pub fn summarize(records: &RecordSet) -> Vec<StructureOperationSummary> {
    let mut grouped: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    for record in records {
        grouped
            .entry((record.structure.as_str(), record.operation.as_str()))
            .or_default()
            .push(record.time_microseconds);
    }

    grouped
        .into_iter()
        .map(|((structure, operation), mut times)| {
            times.sort_by(f64::total_cmp);
            describe(structure, operation, &times)
        })
        .collect()
}

// `times` is sorted and never empty.
fn describe(structure: &str, operation: &str, times: &[f64]) -> StructureOperationSummary {
    let count = times.len();
    // Summation error must not push the mean outside the observed range.
    let mean = (times.iter().sum::<f64>() / count as f64).clamp(times[0], times[count - 1]);

    let std_dev = (count > 1).then(|| {
        let variance = times
            .iter()
            .map(|t| {
                let diff = t - mean;
                diff * diff
            })
            .sum::<f64>()
            / (count - 1) as f64;
        round2(variance.sqrt())
    });

    StructureOperationSummary {
        structure: structure.to_string(),
        operation: operation.to_string(),
        count,
        mean: round2(mean),
        std_dev,
        min: round2(times[0]),
        p25: round2(percentile(times, 0.25)),
        median: round2(percentile(times, 0.5)),
        p75: round2(percentile(times, 0.75)),
        max: round2(times[count - 1]),
    }
}

/// Linear interpolation between the closest ranks.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Magnitude above which an `f64` has no fractional digits left to round.
const ROUND2_LIMIT: f64 = 1e15;

/// Rounds half away from zero to two decimals.
///
/// Values of magnitude `1e15` or more are returned unchanged; scaling them
/// by 100 could overflow to infinity.
pub fn round2(value: f64) -> f64 {
    if value.abs() >= ROUND2_LIMIT {
        return value;
    }
    (value * 100.0).round() / 100.0
}
