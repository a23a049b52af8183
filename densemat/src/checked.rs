//! Checked arithmetic
//!
//! Counterparts of the arithmetic operators that validate operand shapes and
//! report a [`MatrixError`] instead of relying on the caller.

use densemat_core::{
    validate_product_shapes, validate_same_shape, MatrixElement, MatrixError, Operation,
    Result,
};

use crate::Matrix;

fn rejected(err: MatrixError) -> MatrixError {
    tracing::debug!(error = %err, "rejected matrix operands");
    err
}

impl<T: MatrixElement> Matrix<T> {
    /// Elementwise sum, or [`MatrixError::ShapeMismatch`] if the shapes differ.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        validate_same_shape(Operation::Add, self.shape(), other.shape()).map_err(rejected)?;
        Ok(self + other)
    }

    /// Elementwise difference, or [`MatrixError::ShapeMismatch`] if the
    /// shapes differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        validate_same_shape(Operation::Sub, self.shape(), other.shape()).map_err(rejected)?;
        Ok(self - other)
    }

    /// In-place elementwise sum. `self` is untouched on error.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<()> {
        validate_same_shape(Operation::Add, self.shape(), other.shape()).map_err(rejected)?;
        *self += other;
        Ok(())
    }

    /// In-place elementwise difference. `self` is untouched on error.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<()> {
        validate_same_shape(Operation::Sub, self.shape(), other.shape()).map_err(rejected)?;
        *self -= other;
        Ok(())
    }

    /// Matrix product, or [`MatrixError::ShapeMismatch`] unless
    /// `self.cols() == other.rows()`.
    pub fn try_matmul(&self, other: &Self) -> Result<Self> {
        validate_product_shapes(self.shape(), other.shape()).map_err(rejected)?;
        Ok(self * other)
    }
}
