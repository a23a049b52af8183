//! densemat - dense row-major matrices
//!
//! This library provides an owning, generic, two-dimensional numeric
//! container with row-major storage, strided row and column traversal, and
//! elementwise and matrix arithmetic.
//!
//! ## Architecture
//!
//! - **densemat-core**: shapes, the element bound, errors and contract checks
//!   (`no_std`, no allocation)
//! - **densemat**: the owning [`Matrix`], its iterators and operators
//!
//! ## Quick Start
//!
//! ```rust
//! use densemat::Matrix;
//!
//! let left = Matrix::from([[1, 2], [3, 4]]);
//! let right = Matrix::from([[5, 6], [7, 8]]);
//!
//! let product = &left * &right;
//! assert_eq!(product, Matrix::from([[19, 22], [43, 50]]));
//!
//! // Columns are strided iterators over the same buffer.
//! let second: Vec<i32> = product.col(1).copied().collect();
//! assert_eq!(second, vec![22, 50]);
//!
//! // Checked operations report shape mismatches instead of trusting the caller.
//! assert!(left.try_matmul(&Matrix::from([[1, 2, 3]])).is_err());
//! ```
//!
//! ## Preconditions
//!
//! Indexing, row/column selection and the arithmetic operators trust the
//! caller to pass in-range indices and conforming shapes. These preconditions
//! are verified by `contract_assert!` in debug builds (or with the
//! `checked-contracts` feature) and skipped otherwise. A violated
//! precondition never causes undefined behaviour, only an unspecified result
//! or a panic.
//!
//! ## Features
//!
//! - **bytemuck** (default): zero-copy byte views of `Pod` element buffers
//! - **checked-contracts**: keep precondition checks in release builds

// Re-export core abstractions
pub use densemat_core::{
    checked_len, contract, contract_assert, contract_assert_eq, ErrorCategory, MatrixElement,
    MatrixError, Operation, Result, Shape,
};

pub mod checked;
pub mod matrix;
pub mod ops;
pub mod strided;

pub use matrix::Matrix;
pub use ops::inner_product;
pub use strided::{Strided, StridedMut};
