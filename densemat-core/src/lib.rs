#![no_std]

//! densemat core - shape, element and error definitions
//!
//! This crate holds the pieces of the dense matrix container that need no
//! allocation: the [`Shape`] of a matrix, the [`MatrixElement`] bound on
//! stored values, the [`MatrixError`] type reported by checked operations,
//! and the [`contract_assert!`] facility used for debug-only precondition
//! checks.

pub mod contract;
pub mod element;
pub mod error;
pub mod shape;
pub mod validation;

pub use element::MatrixElement;
pub use error::*;
pub use shape::Shape;
pub use validation::{
    checked_len, validate_data_len, validate_index, validate_product_shapes,
    validate_same_shape,
};
