//! The reduction engine: standard cohomology-style matrix reduction over
//! the coboundary, column by column in ascending filtration order, with
//! the apparent-pair shortcut and persistent recording of working
//! coboundaries.

use std::collections::{BinaryHeap, HashMap};

use crate::cell::{sort_ascending, Cell};
use crate::coboundary::CoboundaryEnumerator;
use crate::columns::ColumnSet;
use crate::engine::PersistencePair;
use crate::grid::{pack_index, Grid2};

/// Reduce every column in `columns`, returning the emitted pairs and the
/// pivot index built along the way (the caller reuses it to assemble the
/// next dimension's columns in `compute-pairs` mode).
pub fn reduce(grid: &Grid2, columns: &ColumnSet) -> (Vec<PersistencePair>, HashMap<i32, usize>) {
    let dim = columns.dim;
    let n = columns.len();
    let threshold = grid.threshold();

    let mut pivot_column_index: HashMap<i32, usize> = HashMap::with_capacity(n);
    let mut recorded_wc: HashMap<usize, BinaryHeap<Cell>> = HashMap::with_capacity(n);
    let mut pairs = Vec::new();

    for i in 0..n {
        let birth = columns.columns[i].birth;
        let mut j = i;
        let mut might_be_apparent_pair = true;
        let mut working_coboundary: BinaryHeap<Cell> = BinaryHeap::new();

        loop {
            let simplex = columns.columns[j];
            let mut coface_entries = Vec::new();
            let mut apparent_pivot = Cell::none();
            let mut found_apparent_pair = false;

            for coface in CoboundaryEnumerator::new(simplex, grid) {
                coface_entries.push(coface);
                if might_be_apparent_pair && simplex.birth == coface.birth {
                    if pivot_column_index.contains_key(&coface.index) {
                        might_be_apparent_pair = false;
                    } else {
                        apparent_pivot = coface;
                        found_apparent_pair = true;
                        break;
                    }
                }
            }

            if found_apparent_pair {
                emit_pair(&mut pairs, dim, birth, apparent_pivot.birth, threshold);
                pivot_column_index.insert(apparent_pivot.index, i);
                break;
            }

            // recorded_wc entries are reused by value, never drained: a
            // later column may need the same saved coboundary again.
            if let Some(wc) = recorded_wc.get(&j) {
                for entry in wc.iter().copied() {
                    working_coboundary.push(entry);
                }
            } else {
                for entry in coface_entries {
                    working_coboundary.push(entry);
                }
            }

            let pivot = get_pivot(&mut working_coboundary);
            if pivot.is_none() {
                emit_pair(&mut pairs, -1, birth, threshold, threshold);
                break;
            }

            if let Some(&owner) = pivot_column_index.get(&pivot.index) {
                j = owner;
                continue;
            } else {
                recorded_wc.insert(i, working_coboundary.clone());
                emit_pair(&mut pairs, dim, birth, pivot.birth, threshold);
                pivot_column_index.insert(pivot.index, i);
                break;
            }
        }
    }

    (pairs, pivot_column_index)
}

/// Emit a pair, applying §7's suppression/recoding rules: `birth == death`
/// pairs are dropped, and `death == threshold` pairs are recoded to the
/// essential dimension tag `-1`.
fn emit_pair(pairs: &mut Vec<PersistencePair>, dim: i8, birth: f64, death: f64, threshold: f64) {
    if birth == death {
        return;
    }
    if death == threshold {
        pairs.push(PersistencePair { dim: -1, birth, death: threshold });
    } else {
        pairs.push(PersistencePair { dim, birth, death });
    }
}

/// Pop the surviving top of `column`, cancelling mod-2 pairs of entries
/// sharing an index as they're popped. Returns [`Cell::none`] if the column
/// empties out entirely.
fn pop_pivot(column: &mut BinaryHeap<Cell>) -> Cell {
    let mut pivot = match column.pop() {
        Some(c) => c,
        None => return Cell::none(),
    };
    while let Some(top) = column.peek().copied() {
        if top.index != pivot.index {
            break;
        }
        column.pop();
        pivot = match column.pop() {
            Some(c) => c,
            None => return Cell::none(),
        };
    }
    pivot
}

/// [`pop_pivot`], then push the survivor back so later callers see it too.
fn get_pivot(column: &mut BinaryHeap<Cell>) -> Cell {
    let result = pop_pivot(column);
    if !result.is_none() {
        column.push(result);
    }
    result
}

/// Assemble the dimension-1 column set between the dim-0 and dim-1 passes
/// in `compute-pairs` mode: every 1-cell whose index is not already a
/// registered pivot and whose birth isn't the threshold, sorted ascending.
pub fn assemble_dim1_columns(grid: &Grid2, pivot_column_index: &HashMap<i32, usize>) -> ColumnSet {
    let mut columns = Vec::new();
    for y in 1..=grid.ay() {
        for x in 1..=grid.ax() {
            for m in 0..2u32 {
                let index = pack_index(x, y, m);
                if pivot_column_index.contains_key(&index) {
                    continue;
                }
                let birth = grid.birth(index, 1);
                if birth != grid.threshold() {
                    columns.push(Cell::new(birth, index, 1));
                }
            }
        }
    }
    sort_ascending(&mut columns);
    ColumnSet { columns, dim: 1, max_of_index: grid.max_of_index() }
}
