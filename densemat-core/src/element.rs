//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be stored
//! in a dense matrix and take part in its arithmetic.

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// Trait for types that can be stored as matrix elements
///
/// Matrix elements must be:
/// - Clone: copying a matrix deep-copies every element
/// - Default: the default value is the additive zero used to fill new
///   matrices and to seed inner products
/// - PartialEq: matrices compare elementwise
/// - closed under `+`, `-` and `*`, in both binary and compound forms
///
/// The trait is implemented automatically for every type meeting these
/// bounds, so all primitive numeric types qualify, as do user-defined
/// numeric types such as complex numbers or wrapping integers.
pub trait MatrixElement:
    Clone
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// The additive identity, which is the default value
    fn zero() -> Self {
        Self::default()
    }
}

impl<T> MatrixElement for T where
    T: Clone
        + Default
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + AddAssign
        + SubAssign
        + MulAssign
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accumulate<T: MatrixElement>(values: &[T]) -> T {
        values.iter().cloned().fold(T::zero(), |acc, v| acc + v)
    }

    #[test]
    fn test_primitive_elements() {
        assert_eq!(accumulate(&[1i32, 2, 3]), 6);
        assert_eq!(accumulate(&[0.5f64, 0.25]), 0.75);
        assert_eq!(accumulate::<u8>(&[]), 0);
    }

    #[test]
    fn test_size_bytes() {
        assert_eq!(<f32 as MatrixElement>::size_bytes(), 4);
        assert_eq!(<u64 as MatrixElement>::size_bytes(), 8);
    }

    #[test]
    fn test_wrapping_elements() {
        use core::num::Wrapping;
        let total = accumulate(&[Wrapping(250u8), Wrapping(10)]);
        assert_eq!(total, Wrapping(4));
    }
}
