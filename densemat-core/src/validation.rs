//! Shape and bounds validation
//!
//! Pure functions backing the checked matrix operations. None of them
//! allocate or touch element data.

use crate::{MatrixError, Operation, Result, Shape};

/// Number of elements in a `rows x cols` matrix, with overflow protection.
pub const fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    match rows.checked_mul(cols) {
        Some(len) => Ok(len),
        None => Err(MatrixError::DimensionOverflow { rows, cols }),
    }
}

/// Validate that two operands of an elementwise operation share a shape.
pub fn validate_same_shape(op: Operation, left: Shape, right: Shape) -> Result<()> {
    if left != right {
        return Err(MatrixError::ShapeMismatch { op, left, right });
    }
    Ok(())
}

/// Validate the inner dimensions of a matrix product and return the shape of
/// the result.
///
/// Because empty shapes are canonical, a non-empty left operand never
/// conforms to an empty right operand.
pub fn validate_product_shapes(left: Shape, right: Shape) -> Result<Shape> {
    if left.cols() != right.rows() {
        return Err(MatrixError::ShapeMismatch {
            op: Operation::MatMul,
            left,
            right,
        });
    }
    Ok(Shape::new(left.rows(), right.cols()))
}

/// Validate that a flat buffer of `actual` elements fills a `rows x cols` matrix.
pub fn validate_data_len(rows: usize, cols: usize, actual: usize) -> Result<usize> {
    let expected = checked_len(rows, cols)?;
    if expected != actual {
        return Err(MatrixError::DataLength { expected, actual });
    }
    Ok(expected)
}

/// Validate an element index and return its linear offset.
pub fn validate_index(shape: Shape, row: usize, col: usize) -> Result<usize> {
    if !shape.contains(row, col) {
        return Err(MatrixError::IndexOutOfBounds { row, col, shape });
    }
    Ok(shape.offset(row, col))
}
