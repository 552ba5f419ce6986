//! Persistent homology of 2-D cubical filtrations.
//!
//! Given a rectangular array of grayscale pixels and a global ceiling
//! threshold, this crate computes the complete list of birth/death pairs
//! in homological dimensions 0 and 1 for the lower-star filtration of the
//! 2-D cubical complex whose top-dimensional cells are the pixels.
//!
//! # Theory background
//!
//! ## Cubical complexes and the lower-star filtration
//!
//! The pixels of an image form the 2-cells of a cubical complex; the
//! edges between adjacent pixels are its 1-cells, and the pixel corners
//! are its 0-cells. Each cell's birth value is the max of its vertices'
//! pixel values (the lower-star filtration), so sublevel sets of the
//! image form an increasing filtration of the complex as the threshold
//! sweeps up.
//!
//! ## Two algorithms, one engine
//!
//! Dimension-0 classes (connected components) can be computed two ways,
//! and this crate implements both so they can be cross-checked against
//! each other:
//!
//! - [`Method::LinkFind`] scans every edge in increasing birth order
//!   against a birth/death-aware union-find (the "dual" algorithm) —
//!   see [`joint_pairs`].
//! - [`Method::ComputePairs`] runs the same matrix-reduction engine used
//!   for dimension-1 classes, with an apparent-pair shortcut that avoids
//!   materializing most of the coboundary — see [`reduction`].
//!
//! # Example
//!
//! ```rust
//! use cubical_ph::engine::{persistence_2d, Method};
//!
//! // A single high pixel surrounded by lower ones: a 0-dimensional class
//! // born at the background level that never dies below the threshold.
//! let image = vec![
//!     vec![0.0, 0.0, 0.0],
//!     vec![0.0, 1.0, 0.0],
//!     vec![0.0, 0.0, 0.0],
//! ];
//! let pairs = persistence_2d(&image, 2.0, Method::LinkFind).unwrap();
//! assert!(pairs.iter().any(|p| p.dim == -1 && p.birth == 0.0));
//! ```

pub mod cell;
pub mod coboundary;
pub mod columns;
#[cfg(feature = "cli")]
pub mod dipha;
pub mod engine;
pub mod error;
pub mod grid;
pub mod joint_pairs;
pub mod reduction;
pub mod union_find;

pub use engine::{persistence_2d, persistence_2d_grid, Method, PersistencePair};
pub use error::{CubicalError, Result};
pub use grid::Grid2;

/// Convenient imports for consumers of the library.
pub mod prelude {
    pub use crate::engine::{persistence_2d, Method, PersistencePair};
    pub use crate::error::{CubicalError, Result};
    pub use crate::grid::Grid2;
}
