//! Error types for the simulation engine.
//!
//! The engine is a pure computation, so the taxonomy is deliberately narrow:
//! a grid that cannot exist, or a pair of grids that cannot be compared.

use thiserror::Error;

/// Main error type for tessella_core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Grid side length below the minimum required by an operation.
    #[error("Invalid dimension: side {side} is below the minimum of {min}")]
    InvalidDimension { side: usize, min: usize },

    /// Cell buffer length does not match the declared square dimensions.
    #[error("Invalid dimension: {len} cells cannot form a {side}x{side} grid")]
    NotSquare { side: usize, len: usize },

    /// Two grids passed to a pairwise operation differ in size.
    #[error("Dimension mismatch: expected side {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type alias for tessella_core operations.
pub type Result<T> = std::result::Result<T, EngineError>;
