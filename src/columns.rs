//! The column set: the ordered list of candidate columns the reduction
//! engine walks for a given dimension.

use crate::cell::{sort_ascending, Cell};
use crate::grid::Grid2;

/// Candidate columns for one working dimension, plus the union-find sizing
/// constant derived from the grid's index layout.
#[derive(Debug, Clone)]
pub struct ColumnSet {
    pub columns: Vec<Cell>,
    pub dim: i8,
    pub max_of_index: usize,
}

impl ColumnSet {
    /// Seed the dimension-0 column set: every non-threshold 0-cell, sorted
    /// ascending in the primary order.
    pub fn dim0(grid: &Grid2) -> Self {
        let mut columns = Vec::new();
        for y in 1..=grid.ay() {
            for x in 1..=grid.ax() {
                let index = crate::grid::pack_index(x, y, 0);
                let birth = grid.birth(index, 0);
                if birth != grid.threshold() {
                    columns.push(Cell::new(birth, index, 0));
                }
            }
        }
        sort_ascending(&mut columns);
        ColumnSet { columns, dim: 0, max_of_index: grid.max_of_index() }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
