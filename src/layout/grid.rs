//! Exhaustive enumeration of candidate layouts.
//!
//! Candidates are visited columns-outer, rows-inner, both ascending from 1. The ranking
//! fold breaks exact ties in favour of the earlier candidate, so this order decides
//! which layout wins a tie.

use crate::foundation::core::{Animation, Layout};

/// Every layout with `1..=max_columns` columns and `1..=max_rows` rows.
///
/// Each value is an independent traversal; cloning it or calling [`layouts`] again
/// starts over from `1x1`.
#[derive(Clone, Debug)]
pub struct LayoutGrid {
    max_columns: u32,
    max_rows: u32,
    columns: u32,
    rows: u32,
}

impl LayoutGrid {
    fn new(max_columns: u32, max_rows: u32) -> Self {
        Self {
            max_columns,
            max_rows,
            columns: 1,
            rows: 1,
        }
    }

    /// Total number of candidates this grid yields from a fresh start.
    pub fn candidate_count(&self) -> u64 {
        u64::from(self.max_columns) * u64::from(self.max_rows)
    }
}

impl Iterator for LayoutGrid {
    type Item = Layout;

    fn next(&mut self) -> Option<Layout> {
        if self.max_rows == 0 || self.columns > self.max_columns {
            return None;
        }
        let out = Layout::new(self.columns, self.rows);
        if self.rows == self.max_rows {
            self.rows = 1;
            self.columns += 1;
        } else {
            self.rows += 1;
        }
        Some(out)
    }
}

/// Full candidate grid bounded by the atlas side length.
pub fn layouts(anim: &Animation) -> LayoutGrid {
    LayoutGrid::new(anim.max_columns(), anim.max_rows())
}

/// Candidates whose capacity does not exceed the frame count.
pub fn dense_layouts(anim: &Animation) -> impl Iterator<Item = Layout> + Clone + use<> {
    let anim = *anim;
    layouts(&anim).filter(move |layout| layout.is_dense(&anim))
}

/// Candidates whose capacity exceeds the frame count.
pub fn sparse_layouts(anim: &Animation) -> impl Iterator<Item = Layout> + Clone + use<> {
    let anim = *anim;
    layouts(&anim).filter(move |layout| layout.is_sparse(&anim))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
