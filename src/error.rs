//! Error types for the cubical persistent homology engine.

use thiserror::Error;

/// Result type for cubical persistence operations.
pub type Result<T> = std::result::Result<T, CubicalError>;

/// Precondition and I/O failures. `persistence_2d` either runs to completion
/// or returns one of these before any pair is emitted — there is no partial
/// result and no retry path.
#[derive(Error, Debug)]
pub enum CubicalError {
    #[error("image width/height out of range: ax={ax}, ay={ay} (need 1 <= ax < 2048, 1 <= ay < 1024)")]
    Dimensions { ax: usize, ay: usize },

    #[error("non-finite pixel value at ({x}, {y}): {value}")]
    NonFinitePixel { x: usize, y: usize, value: f64 },

    #[error("non-finite threshold: {0}")]
    NonFiniteThreshold(f64),

    #[error("image row {row} has {actual} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, actual: usize },

    #[error("empty image: grid must have at least one row and column")]
    EmptyImage,

    #[error("I/O error reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed input file: {0}")]
    Format(String),
}
