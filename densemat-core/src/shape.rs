//! Matrix dimensions

use core::fmt;

/// Dimensions of a row-major matrix.
///
/// A shape with either extent equal to zero is normalised to the canonical
/// empty shape `0x0`, so `rows() == 0` holds exactly when `cols() == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// The canonical empty shape.
    pub const EMPTY: Shape = Shape { rows: 0, cols: 0 };

    /// Create a shape, collapsing to [`Shape::EMPTY`] if either extent is zero.
    pub const fn new(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            Self::EMPTY
        } else {
            Self { rows, cols }
        }
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of elements, `rows * cols`.
    ///
    /// Shapes built by a matrix never overflow here; see
    /// [`checked_len`](crate::checked_len) for untrusted dimensions.
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the shape holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Linear row-major offset of `(row, col)`.
    pub const fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Whether `(row, col)` addresses an element of this shape.
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// The shape with rows and columns exchanged.
    pub const fn transposed(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Whether the shape has as many rows as columns.
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl From<Shape> for (usize, usize) {
    fn from(shape: Shape) -> Self {
        (shape.rows, shape.cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
