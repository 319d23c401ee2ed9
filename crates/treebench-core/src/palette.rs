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

//! Fixed colors for benchmarked structures.
//!
//! Every chart in a report takes its colors from one [`Palette`], so a
//! structure keeps the same color across all of them.

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Immutable structure-to-color table with a single fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    entries: &'static [(&'static str, Rgb)],
    fallback: Rgb,
}

/// Baseline ordered set first, then the self-balancing tree variants.
pub const DEFAULT_PALETTE: Palette = Palette::new(
    &[
        ("std::set", Rgb(31, 119, 180)), // blue
        ("AVL", Rgb(255, 127, 14)),      // orange
        ("Splay", Rgb(44, 160, 44)),     // green
        ("RedBlack", Rgb(214, 39, 40)),  // red
        ("Treap", Rgb(148, 103, 189)),   // purple
        ("BTree", Rgb(140, 86, 75)),     // brown
    ],
    Rgb(127, 127, 127),
);

impl Palette {
    /// Builds a palette from a static table.
    pub const fn new(entries: &'static [(&'static str, Rgb)], fallback: Rgb) -> Self {
        Self { entries, fallback }
    }

    /// Color for a structure, or the fallback if it is not in the table.
    pub fn color_for(&self, structure: &str) -> Rgb {
        self.entries
            .iter()
            .find(|(name, _)| *name == structure)
            .map(|(_, color)| *color)
            .unwrap_or(self.fallback)
    }

    /// The color given to unknown structures.
    pub fn fallback(&self) -> Rgb {
        self.fallback
    }
}

impl Default for Palette {
    fn default() -> Self {
        DEFAULT_PALETTE
    }
}

/// Color for a structure in the default palette.
pub fn structure_color(structure: &str) -> Rgb {
    DEFAULT_PALETTE.color_for(structure)
}
