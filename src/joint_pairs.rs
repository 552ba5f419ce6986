//! The joint-pairs (link-find) engine: dimension-0 persistence computed by
//! scanning every dimension-1 edge in increasing birth order against a
//! birth/death-aware union-find.

use crate::cell::{sort_ascending, Cell};
use crate::columns::ColumnSet;
use crate::engine::PersistencePair;
use crate::grid::{pack_index, unpack_index, Grid2};
use crate::union_find::UnionFind;

/// Run the link-find scan. Returns the dimension-0 (and essential)
/// persistence pairs plus the dimension-1 column set — every edge that
/// closed a loop rather than merging two components — sorted ascending for
/// the reduction engine to consume next.
pub fn joint_pairs(grid: &Grid2) -> (Vec<PersistencePair>, ColumnSet) {
    let ax = grid.ax();
    let ay = grid.ay();
    let threshold = grid.threshold();

    let mut edges = Vec::new();
    let mut min_birth = threshold;
    for x in 1..=ax {
        for y in 1..=ay {
            let vertex_birth = grid.birth(pack_index(x, y, 0), 0);
            if vertex_birth < threshold {
                min_birth = min_birth.min(vertex_birth);
            }
            for m in 0..2u32 {
                let index = pack_index(x, y, m);
                let birth = grid.birth(index, 1);
                if birth < threshold {
                    edges.push(Cell::new(birth, index, 1));
                }
            }
        }
    }
    sort_ascending(&mut edges);

    let mut dset = UnionFind::new(grid.max_of_index(), grid);
    let mut pairs = Vec::new();
    let mut dim1_columns = Vec::new();

    for e in edges {
        let (cx, cy, cm) = unpack_index(e.index);
        let (ce0, ce1) = match cm {
            0 => (pack_index(cx, cy, 0), pack_index(cx + 1, cy, 0)),
            _ => (pack_index(cx, cy, 0), pack_index(cx, cy + 1, 0)),
        };

        let u = dset.find(ce0);
        let v = dset.find(ce1);
        min_birth = min_birth.min(dset.birthtime(u)).min(dset.birthtime(v));

        if u != v {
            let birth = dset.birthtime(u).max(dset.birthtime(v));
            let death = dset.time_max(u).max(dset.time_max(v));
            if birth != death {
                pairs.push(PersistencePair { dim: 0, birth, death });
            }
            dset.link(u, v);
        } else {
            // u == v: this edge closes a loop, a candidate dimension-1 column.
            dim1_columns.push(e);
        }
    }

    pairs.push(PersistencePair { dim: -1, birth: min_birth, death: threshold });
    sort_ascending(&mut dim1_columns);

    let columns = ColumnSet { columns: dim1_columns, dim: 1, max_of_index: grid.max_of_index() };
    (pairs, columns)
}
