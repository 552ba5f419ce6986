//! The coboundary enumerator: given a `d`-cell, walks its `(d+1)`-cofaces
//! whose birth is not the threshold.
//!
//! Enumeration is stateful and resumable: each call to [`Iterator::next`]
//! resumes where the previous one stopped. For dimension-0 cells the four
//! candidate cofaces are tried in the fixed order **(y+, y-, x+, x-)** —
//! this order seeds the apparent-pair shortcut in [`crate::reduction`].

use crate::cell::Cell;
use crate::grid::{pack_index, Grid2};

/// Enumerates the cofaces of one simplex, one at a time.
pub struct CoboundaryEnumerator<'a> {
    grid: &'a Grid2,
    cx: usize,
    cy: usize,
    cm: u32,
    dim: i8,
    count: u8,
}

impl<'a> CoboundaryEnumerator<'a> {
    pub fn new(simplex: Cell, grid: &'a Grid2) -> Self {
        let (cx, cy, cm) = crate::grid::unpack_index(simplex.index);
        CoboundaryEnumerator { grid, cx, cy, cm, dim: simplex.dim, count: 0 }
    }

    fn next_dim0(&mut self) -> Option<Cell> {
        // fixed order: y+, y-, x+, x-
        while self.count < 4 {
            let i = self.count;
            self.count += 1;
            let index = match i {
                0 => pack_index(self.cx, self.cy, 1),
                1 => pack_index(self.cx, self.cy - 1, 1),
                2 => pack_index(self.cx, self.cy, 0),
                3 => pack_index(self.cx - 1, self.cy, 0),
                _ => unreachable!(),
            };
            let birth = self.grid.birth(index, 1);
            if birth != self.grid.threshold() {
                return Some(Cell::new(birth, index, 1));
            }
        }
        None
    }

    fn next_dim1(&mut self) -> Option<Cell> {
        match self.cm {
            0 => {
                // horizontal edge: upper square then lower square
                while self.count < 2 {
                    let i = self.count;
                    self.count += 1;
                    let index = match i {
                        0 => pack_index(self.cx, self.cy, 0),
                        1 => pack_index(self.cx, self.cy - 1, 0),
                        _ => unreachable!(),
                    };
                    let birth = self.grid.birth(index, 2);
                    if birth != self.grid.threshold() {
                        return Some(Cell::new(birth, index, 2));
                    }
                }
                None
            }
            _ => {
                // vertical edge: right square then left square
                while self.count < 2 {
                    let i = self.count;
                    self.count += 1;
                    let index = match i {
                        0 => pack_index(self.cx, self.cy, 0),
                        1 => pack_index(self.cx - 1, self.cy, 0),
                        _ => unreachable!(),
                    };
                    let birth = self.grid.birth(index, 2);
                    if birth != self.grid.threshold() {
                        return Some(Cell::new(birth, index, 2));
                    }
                }
                None
            }
        }
    }
}

impl<'a> Iterator for CoboundaryEnumerator<'a> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        match self.dim {
            0 => self.next_dim0(),
            1 => self.next_dim1(),
            // 2-cells have no cofaces in a 2-D filtration.
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_has_up_to_four_cofaces() {
        let grid = Grid2::from_rows(
            &[vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0]],
            9.0,
        )
        .unwrap();
        let index = pack_index(2, 2, 0);
        let simplex = Cell::new(grid.birth(index, 0), index, 0);
        let cofaces: Vec<_> = CoboundaryEnumerator::new(simplex, &grid).collect();
        assert_eq!(cofaces.len(), 4);
    }

    #[test]
    fn corner_vertex_has_two_cofaces() {
        let grid = Grid2::from_rows(
            &[vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0]],
            9.0,
        )
        .unwrap();
        let index = pack_index(1, 1, 0);
        let simplex = Cell::new(grid.birth(index, 0), index, 0);
        let cofaces: Vec<_> = CoboundaryEnumerator::new(simplex, &grid).collect();
        assert_eq!(cofaces.len(), 2);
    }

    #[test]
    fn edge_has_up_to_two_cofaces() {
        let grid = Grid2::from_rows(
            &[vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0]],
            9.0,
        )
        .unwrap();
        let index = pack_index(2, 1, 0);
        let simplex = Cell::new(grid.birth(index, 1), index, 1);
        let cofaces: Vec<_> = CoboundaryEnumerator::new(simplex, &grid).collect();
        assert_eq!(cofaces.len(), 2);
    }
}
