//! Arithmetic operators
//!
//! Elementwise `+`/`-`, scalar `*` and the matrix product. Operand shapes are
//! a caller precondition here: they are checked with `contract_assert!` in
//! debug builds and trusted in release builds. Mismatched operands never read
//! outside either buffer (every loop is bounded by `zip`), but the result is
//! unspecified. The `try_*` methods in [`checked`](crate::checked) validate
//! instead.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use densemat_core::{contract_assert, MatrixElement};

use crate::Matrix;

/// Sum of `left[k] * right[k]` over the common length, starting from `init`.
///
/// Works on any pair of element iterators, so a matrix row (a slice) and a
/// matrix column (a [`Strided`](crate::Strided) iterator) combine directly.
pub fn inner_product<'a, T, L, R>(left: L, right: R, init: T) -> T
where
    T: MatrixElement + 'a,
    L: IntoIterator<Item = &'a T>,
    R: IntoIterator<Item = &'a T>,
{
    left.into_iter()
        .zip(right)
        .fold(init, |acc, (l, r)| acc + l.clone() * r.clone())
}

/// Naive `O(m * k * n)` product of an `m x k` and a `k x n` matrix.
fn matmul<T: MatrixElement>(left: &Matrix<T>, right: &Matrix<T>) -> Matrix<T> {
    contract_assert!(
        left.cols() == right.rows(),
        "matrix product of {} and {} matrices",
        left.shape(),
        right.shape()
    );
    tracing::trace!(left = %left.shape(), right = %right.shape(), "matrix product");

    let mut result = Matrix::new(left.rows(), right.cols());
    for i in 0..left.rows() {
        for j in 0..right.cols() {
            result[(i, j)] = inner_product(left.row(i), right.col(j), T::zero());
        }
    }
    result
}

// Elementwise

impl<T: MatrixElement> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, other: &Matrix<T>) {
        contract_assert!(
            self.shape() == other.shape(),
            "elementwise addition of {} and {} matrices",
            self.shape(),
            other.shape()
        );
        for (lhs, rhs) in self.iter_mut().zip(other) {
            *lhs += rhs.clone();
        }
    }
}

impl<T: MatrixElement> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, other: &Matrix<T>) {
        contract_assert!(
            self.shape() == other.shape(),
            "elementwise subtraction of {} and {} matrices",
            self.shape(),
            other.shape()
        );
        for (lhs, rhs) in self.iter_mut().zip(other) {
            *lhs -= rhs.clone();
        }
    }
}

/// Implement the by-value compound form and every owned/borrowed combination
/// of the binary operator on top of `$assign_trait<&Matrix<T>>`.
macro_rules! impl_elementwise {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<T: MatrixElement> $assign_trait<Matrix<T>> for Matrix<T> {
            fn $assign_method(&mut self, other: Matrix<T>) {
                $assign_trait::$assign_method(self, &other);
            }
        }

        impl<T: MatrixElement> $trait<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, other: &Matrix<T>) -> Matrix<T> {
                let mut result = self.clone();
                $assign_trait::$assign_method(&mut result, other);
                result
            }
        }

        impl<T: MatrixElement> $trait<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(mut self, other: &Matrix<T>) -> Matrix<T> {
                $assign_trait::$assign_method(&mut self, other);
                self
            }
        }

        impl<T: MatrixElement> $trait<Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, other: Matrix<T>) -> Matrix<T> {
                $trait::$method(self, &other)
            }
        }

        impl<T: MatrixElement> $trait<Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, other: Matrix<T>) -> Matrix<T> {
                $trait::$method(self, &other)
            }
        }
    };
}

impl_elementwise!(Add, add, AddAssign, add_assign);
impl_elementwise!(Sub, sub, SubAssign, sub_assign);

// Scalar

impl<T: MatrixElement> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, factor: T) {
        for value in self.iter_mut() {
            *value *= factor.clone();
        }
    }
}

impl<T: MatrixElement> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, factor: T) -> Matrix<T> {
        self *= factor;
        self
    }
}

impl<T: MatrixElement> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, factor: T) -> Matrix<T> {
        self.clone() * factor
    }
}

// Scalar on the left. Coherence rules out a blanket `impl<T> Mul<Matrix<T>> for T`,
// so the primitive numeric types are listed.
macro_rules! impl_scalar_lhs {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Mul<Matrix<$scalar>> for $scalar {
                type Output = Matrix<$scalar>;

                fn mul(self, matrix: Matrix<$scalar>) -> Matrix<$scalar> {
                    matrix * self
                }
            }

            impl Mul<&Matrix<$scalar>> for $scalar {
                type Output = Matrix<$scalar>;

                fn mul(self, matrix: &Matrix<$scalar>) -> Matrix<$scalar> {
                    matrix * self
                }
            }
        )*
    };
}

impl_scalar_lhs!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// Matrix product

impl<T: MatrixElement> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, other: &Matrix<T>) -> Matrix<T> {
        matmul(self, other)
    }
}

impl<T: MatrixElement> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, other: &Matrix<T>) -> Matrix<T> {
        matmul(&self, other)
    }
}

impl<T: MatrixElement> Mul<Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, other: Matrix<T>) -> Matrix<T> {
        matmul(&self, &other)
    }
}

impl<T: MatrixElement> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, other: Matrix<T>) -> Matrix<T> {
        matmul(self, &other)
    }
}

/// The product generally has a different shape, so `self` is replaced rather
/// than updated in place.
impl<T: MatrixElement> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, other: &Matrix<T>) {
        *self = matmul(self, other);
    }
}

impl<T: MatrixElement> MulAssign<Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, other: Matrix<T>) {
        *self = matmul(self, &other);
    }
}

// Negation

impl<T: MatrixElement + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(mut self) -> Matrix<T> {
        for value in self.iter_mut() {
            *value = -value.clone();
        }
        self
    }
}

impl<T: MatrixElement + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -self.clone()
    }
}
