//! Error types for checked matrix operations

use core::fmt;

use thiserror::Error;

use crate::Shape;

/// Binary operation that rejected its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Elementwise addition
    Add,
    /// Elementwise subtraction
    Sub,
    /// Matrix product
    MatMul,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "addition",
            Operation::Sub => "subtraction",
            Operation::MatMul => "matrix product",
        };
        write!(f, "{name}")
    }
}

/// Errors reported by the checked (`try_*`) matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the operation
    #[error("incompatible shapes for {op}: {left} and {right}")]
    ShapeMismatch {
        op: Operation,
        left: Shape,
        right: Shape,
    },
    /// A flat buffer does not hold `rows * cols` elements
    #[error("expected {expected} elements, got {actual}")]
    DataLength { expected: usize, actual: usize },
    /// Element index outside the matrix
    #[error("index ({row}, {col}) out of bounds for {shape} matrix")]
    IndexOutOfBounds { row: usize, col: usize, shape: Shape },
    /// `rows * cols` does not fit in `usize`
    #[error("{rows}x{cols} matrix exceeds the addressable element count")]
    DimensionOverflow { rows: usize, cols: usize },
    /// The element buffer could not be allocated
    #[error("failed to allocate storage for {len} elements")]
    Allocation { len: usize },
}

/// Broad classification of [`MatrixError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Operand or buffer shapes disagree
    Shape,
    /// An index lies outside the matrix
    Bounds,
    /// Dimensions or memory exceed what the process can hold
    Resource,
}

impl MatrixError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::ShapeMismatch { .. } | MatrixError::DataLength { .. } => {
                ErrorCategory::Shape
            }
            MatrixError::IndexOutOfBounds { .. } => ErrorCategory::Bounds,
            MatrixError::DimensionOverflow { .. } | MatrixError::Allocation { .. } => {
                ErrorCategory::Resource
            }
        }
    }
}

/// Result type for checked matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
