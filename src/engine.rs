//! The top-level driver: wires the grid, the joint-pairs engine, and the
//! reduction engine together and emits the ordered pair list.

use tracing::debug;

use crate::columns::ColumnSet;
use crate::error::Result;
use crate::grid::Grid2;
use crate::{joint_pairs, reduction};

/// One birth/death pair. `dim` is 0 or 1 for a finite pair, or `-1` for an
/// essential class whose death is the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistencePair {
    pub dim: i8,
    pub birth: f64,
    pub death: f64,
}

/// Which algorithm computes the dimension-0 pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Joint-pairs (dual union-find) scan for dim-0, matrix reduction for dim-1.
    LinkFind,
    /// Matrix reduction for both dim-0 and dim-1.
    ComputePairs,
}

/// Compute the persistent homology of the 2-D cubical filtration of
/// `rows` (an `ax`-row by `ay`-column grid) at `threshold`, using `method`.
///
/// Preconditions: `1 <= ax < 2048`, `1 <= ay < 1024`, every pixel and the
/// threshold finite — violations return [`crate::error::CubicalError`]
/// before any pair is emitted.
pub fn persistence_2d(
    rows: &[Vec<f64>],
    threshold: f64,
    method: Method,
) -> Result<Vec<PersistencePair>> {
    let grid = Grid2::from_rows(rows, threshold)?;
    Ok(persistence_2d_grid(&grid, method))
}

/// Same as [`persistence_2d`], but operating on an already-validated
/// [`Grid2`] — useful when the caller wants to run both methods, or reuse
/// the grid across several calls, without re-validating each time.
pub fn persistence_2d_grid(grid: &Grid2, method: Method) -> Vec<PersistencePair> {
    debug!(ax = grid.ax(), ay = grid.ay(), threshold = grid.threshold(), ?method, "persistence_2d");

    match method {
        Method::LinkFind => {
            let (mut pairs, dim1_columns) = joint_pairs::joint_pairs(grid);
            let (dim1_pairs, _pivots) = reduction::reduce(grid, &dim1_columns);
            pairs.extend(dim1_pairs);
            pairs
        }
        Method::ComputePairs => {
            let dim0_columns = ColumnSet::dim0(grid);
            let (mut pairs, pivots) = reduction::reduce(grid, &dim0_columns);
            let dim1_columns = reduction::assemble_dim1_columns(grid, &pivots);
            let (dim1_pairs, _pivots) = reduction::reduce(grid, &dim1_columns);
            pairs.extend(dim1_pairs);
            pairs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn multiset_close(a: &[PersistencePair], b: &[PersistencePair]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        let mut used = vec![false; b.len()];
        'outer: for x in a {
            for (k, y) in b.iter().enumerate() {
                if used[k] {
                    continue;
                }
                if x.dim == y.dim
                    && (x.birth - y.birth).abs() < 1e-9
                    && (x.death - y.death).abs() < 1e-9
                {
                    used[k] = true;
                    continue 'outer;
                }
            }
            return false;
        }
        true
    }

    #[test]
    fn single_pixel_is_one_essential_class() {
        let pairs = persistence_2d(&[vec![1.0]], 9.0, Method::LinkFind).unwrap();
        assert_eq!(pairs, vec![PersistencePair { dim: -1, birth: 1.0, death: 9.0 }]);
    }

    #[test]
    fn single_bump_has_no_dim1_pair() {
        let rows = vec![vec![0.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 0.0]];
        for method in [Method::LinkFind, Method::ComputePairs] {
            let pairs = persistence_2d(&rows, 2.0, method).unwrap();
            let dim0: Vec<_> = pairs.iter().filter(|p| p.dim <= 0).collect();
            assert_eq!(dim0.len(), 1);
            assert_eq!(dim0[0].dim, -1);
            assert_eq!(dim0[0].birth, 0.0);
            assert!(!pairs.iter().any(|p| p.dim == 1));
        }
    }

    #[test]
    fn strict_minimum_at_centre() {
        let rows = vec![vec![2.0, 2.0, 2.0], vec![2.0, 0.0, 2.0], vec![2.0, 2.0, 2.0]];
        for method in [Method::LinkFind, Method::ComputePairs] {
            let pairs = persistence_2d(&rows, 3.0, method).unwrap();
            let essential: Vec<_> = pairs.iter().filter(|p| p.dim == -1).collect();
            assert_eq!(essential.len(), 1);
            assert_eq!(essential[0].birth, 0.0);
            assert_eq!(essential[0].death, 3.0);
        }
    }

    #[test]
    fn ring_emits_essential_dim1_at_birth_of_central_pixel() {
        let rows = vec![vec![0.0, 0.0, 0.0], vec![0.0, 2.0, 0.0], vec![0.0, 0.0, 0.0]];
        for method in [Method::LinkFind, Method::ComputePairs] {
            let pairs = persistence_2d(&rows, 3.0, method).unwrap();
            let dim1: Vec<_> = pairs.iter().filter(|p| p.dim == -1 && p.birth == 2.0).collect();
            assert_eq!(dim1.len(), 1, "method {method:?} should emit the essential loop class");
        }
    }

    #[test]
    fn methods_agree_on_random_image() {
        use rand::{rngs::StdRng, Rng, SeedableRng};
        let mut rng = StdRng::seed_from_u64(42);
        let ax = 8;
        let ay = 8;
        let rows: Vec<Vec<f64>> =
            (0..ax).map(|_| (0..ay).map(|_| rng.gen_range(0.0..10.0)).collect()).collect();
        let threshold = 10.0;
        let link_find = persistence_2d(&rows, threshold, Method::LinkFind).unwrap();
        let compute_pairs = persistence_2d(&rows, threshold, Method::ComputePairs).unwrap();
        assert!(multiset_close(&link_find, &compute_pairs));
    }

    #[test]
    fn translation_equivariance() {
        let rows = vec![vec![0.2, 1.4, 3.3], vec![2.1, 0.0, 5.5], vec![1.1, 2.2, 0.9]];
        let threshold = 6.0;
        let c = 5.0;
        let shifted: Vec<Vec<f64>> = rows.iter().map(|r| r.iter().map(|v| v + c).collect()).collect();

        let base = persistence_2d(&rows, threshold, Method::LinkFind).unwrap();
        let moved = persistence_2d(&shifted, threshold + c, Method::LinkFind).unwrap();

        assert_eq!(base.len(), moved.len());
        for (a, b) in base.iter().zip(moved.iter()) {
            assert_eq!(a.dim, b.dim);
            assert_relative_eq!(a.birth + c, b.birth, epsilon = 1e-9);
            assert_relative_eq!(a.death + c, b.death, epsilon = 1e-9);
        }
    }

    #[test]
    fn scale_equivariance() {
        let rows = vec![vec![0.2, 1.4, 3.3], vec![2.1, 0.0, 5.5], vec![1.1, 2.2, 0.9]];
        let threshold = 6.0;
        let alpha = 2.0;
        let scaled: Vec<Vec<f64>> = rows.iter().map(|r| r.iter().map(|v| v * alpha).collect()).collect();

        let base = persistence_2d(&rows, threshold, Method::LinkFind).unwrap();
        let scaled_pairs = persistence_2d(&scaled, threshold * alpha, Method::LinkFind).unwrap();

        assert_eq!(base.len(), scaled_pairs.len());
        for (a, b) in base.iter().zip(scaled_pairs.iter()) {
            assert_eq!(a.dim, b.dim);
            assert_relative_eq!(a.birth * alpha, b.birth, epsilon = 1e-9);
            assert_relative_eq!(a.death * alpha, b.death, epsilon = 1e-9);
        }
    }

    #[test]
    fn rejects_invalid_dimensions() {
        let rows: Vec<Vec<f64>> = vec![];
        assert!(persistence_2d(&rows, 1.0, Method::LinkFind).is_err());
    }
}
