//! Owned dense matrix storage
//!
//! [`Matrix`] owns exactly one contiguous buffer of `rows * cols` elements in
//! row-major order. Element `(r, c)` lives at linear offset `r * cols + c`.

use std::{
    mem,
    ops::{Index, IndexMut},
    slice,
};

use densemat_core::{
    checked_len, contract_assert, contract_assert_eq, validate_data_len, validate_index,
    MatrixElement, MatrixError, Result, Shape,
};

use crate::strided::{Strided, StridedMut};

/// A dense, row-major, owning matrix.
///
/// ```text
///            |<---- cols ---->|
///            +----------------+
///   row 0 -> | 0   1   2   3  |     ^
///   row 1 -> | 4   5   6   7  |   rows
///   row 2 -> | 8   9   10  11 |     v
///            +----------------+
/// ```
///
/// The buffer is a boxed slice, so its capacity always equals
/// [`len`](Self::len). A matrix with either extent equal to zero is stored in
/// the canonical empty state: zero rows, zero columns and no allocation.
///
/// Cloning deep-copies the buffer. [`take`](Self::take) moves the contents
/// out and leaves the source empty.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    // Field order matters for the derived comparisons: dimensions are compared
    // before any element.
    rows: usize,
    cols: usize,
    data: Box<[T]>,
}

impl<T> Matrix<T> {
    /// Create an empty matrix without allocating.
    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Box::default(),
        }
    }

    /// Create a `rows x cols` matrix with every element set to its default
    /// value (zero for numeric types).
    ///
    /// Either extent being zero yields the empty matrix.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`. Allocation failure aborts;
    /// use [`try_new`](Self::try_new) to observe either condition as an error.
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(rows, cols, |_, _| T::default())
    }

    /// Fallible form of [`new`](Self::new).
    pub fn try_new(rows: usize, cols: usize) -> Result<Self>
    where
        T: Default,
    {
        let shape = Shape::new(rows, cols);
        let len = checked_len(rows, cols)?;

        let mut data = Vec::new();
        if data.try_reserve_exact(len).is_err() {
            tracing::debug!(%shape, len, "matrix allocation failed");
            return Err(MatrixError::Allocation { len });
        }
        data.resize_with(len, T::default);

        Ok(Self::from_parts(shape, data.into_boxed_slice()))
    }

    /// Create a `rows x cols` matrix whose element `(r, c)` is `f(r, c)`.
    ///
    /// `f` is called in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let len = match checked_len(rows, cols) {
            Ok(len) => len,
            Err(err) => panic!("{err}"),
        };
        let data = (0..len).map(|i| f(i / cols, i % cols)).collect();
        Self::from_parts(Shape::new(rows, cols), data)
    }

    /// Wrap a row-major buffer of exactly `rows * cols` elements.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        validate_data_len(rows, cols, data.len())?;
        Ok(Self::from_parts(Shape::new(rows, cols), data.into_boxed_slice()))
    }

    fn from_parts(shape: Shape, data: Box<[T]>) -> Self {
        contract_assert_eq!(shape.len(), data.len(), "buffer length for {shape} matrix");
        Self {
            rows: shape.rows(),
            cols: shape.cols(),
            data,
        }
    }

    /// Consume the matrix and return its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /// Move the contents out, leaving `self` in the empty state.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchange the contents of two matrices without allocating.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    // Size

    /// Return the number of rows in the matrix.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of columns in the matrix.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the dimensions as a [`Shape`].
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Return the number of elements, `rows * cols`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return `true` if the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Element access

    /// Return the underlying data as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Return the underlying data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Return a pointer to the base of the matrix.
    ///
    /// The pointer is dangling (but non-null) for an empty matrix.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Return a mutable pointer to the base of the matrix.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Return the element at `(row, col)`, or `None` if it lies outside the
    /// matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if self.shape().contains(row, col) {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Mutable form of [`get`](Self::get).
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if self.shape().contains(row, col) {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Return the element at `(row, col)`, reporting an out-of-range index as
    /// an error.
    pub fn try_get(&self, row: usize, col: usize) -> Result<&T> {
        let offset = validate_index(self.shape(), row, col)?;
        Ok(&self.data[offset])
    }

    /// Returns a reference to an element without boundschecking.
    ///
    /// # Safety
    ///
    /// The following conditions must hold to avoid undefined behavior:
    /// * `row < self.rows()`.
    /// * `col < self.cols()`.
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        contract_assert!(row < self.rows && col < self.cols);
        // SAFETY: the caller guarantees `(row, col)` is in-bounds, so the
        // offset is below `rows * cols == self.data.len()`.
        unsafe { self.data.get_unchecked(row * self.cols + col) }
    }

    /// Returns a mutable reference to an element without boundschecking.
    ///
    /// # Safety
    ///
    /// The following conditions must hold to avoid undefined behavior:
    /// * `row < self.rows()`.
    /// * `col < self.cols()`.
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        contract_assert!(row < self.rows && col < self.cols);
        let cols = self.cols;
        // SAFETY: see `get_unchecked`.
        unsafe { self.data.get_unchecked_mut(row * cols + col) }
    }

    /// View the buffer as raw bytes.
    #[cfg(feature = "bytemuck")]
    pub fn as_bytes(&self) -> &[u8]
    where
        T: bytemuck::Pod,
    {
        bytemuck::cast_slice(&self.data)
    }

    /// View the buffer as mutable raw bytes.
    #[cfg(feature = "bytemuck")]
    pub fn as_bytes_mut(&mut self) -> &mut [u8]
    where
        T: bytemuck::Pod,
    {
        bytemuck::cast_slice_mut(&mut self.data)
    }

    // Iterators

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutably iterate over all elements in row-major order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Return row `row` as a slice.
    ///
    /// The caller must ensure `row < self.rows()`; this is verified only when
    /// contract checks are enabled.
    pub fn row(&self, row: usize) -> &[T] {
        contract_assert!(
            row < self.rows,
            "tried to access row {row} of a matrix with {} rows",
            self.rows
        );
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Return row `row` as a mutable slice.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        contract_assert!(
            row < self.rows,
            "tried to access row {row} of a matrix with {} rows",
            self.rows
        );
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Return row `row` as a unit-stride iterator.
    ///
    /// Each row is its own traversal: [`Strided::distance_to`] and the
    /// comparison operators only relate iterators taken from the same row.
    /// To relate positions across rows, use [`iter`](Self::iter) over the
    /// whole buffer.
    pub fn row_iter(&self, row: usize) -> Strided<'_, T> {
        Strided::new(self.row(row), 1)
    }

    /// Mutable form of [`row_iter`](Self::row_iter).
    pub fn row_iter_mut(&mut self, row: usize) -> StridedMut<'_, T> {
        StridedMut::new(self.row_mut(row), 1)
    }

    /// Return column `col` as an iterator with stride `self.cols()`.
    ///
    /// The caller must ensure `col < self.cols()`; this is verified only when
    /// contract checks are enabled.
    pub fn col(&self, col: usize) -> Strided<'_, T> {
        contract_assert!(
            col < self.cols,
            "tried to access column {col} of a matrix with {} columns",
            self.cols
        );
        Strided::new(&self.data[col..], self.cols)
    }

    /// Mutable form of [`col`](Self::col).
    pub fn col_mut(&mut self, col: usize) -> StridedMut<'_, T> {
        contract_assert!(
            col < self.cols,
            "tried to access column {col} of a matrix with {} columns",
            self.cols
        );
        let cols = self.cols;
        StridedMut::new(&mut self.data[col..], cols)
    }

    /// Return an iterator over all rows in the matrix.
    ///
    /// Rows are yielded sequentially beginning with row 0.
    pub fn rows_iter(&self) -> slice::ChunksExact<'_, T> {
        // An empty buffer yields no chunks whatever the chunk size.
        self.data.chunks_exact(self.cols.max(1))
    }

    /// Return a mutable iterator over all rows in the matrix.
    pub fn rows_iter_mut(&mut self) -> slice::ChunksExactMut<'_, T> {
        let cols = self.cols.max(1);
        self.data.chunks_exact_mut(cols)
    }

    /// Return an iterator over all columns in the matrix.
    pub fn cols_iter(&self) -> impl ExactSizeIterator<Item = Strided<'_, T>> + '_ {
        (0..self.cols).map(move |col| self.col(col))
    }

    /// Return the transpose, built by reading the matrix column by column.
    pub fn transpose(&self) -> Self
    where
        T: Clone,
    {
        let data: Box<[T]> = self.cols_iter().flat_map(|col| col.cloned()).collect();
        Self::from_parts(self.shape().transposed(), data)
    }
}

impl<T: MatrixElement> Matrix<T> {
    /// Create a square matrix with `one` on the diagonal and zero elsewhere.
    pub fn diagonal(size: usize, one: T) -> Self {
        let mut matrix = Self::new(size, size);
        for i in 0..size {
            matrix[(i, i)] = one.clone();
        }
        matrix
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.clone(),
        }
    }

    /// Copy `source` into `self`, reusing the existing buffer when it already
    /// holds the right number of elements.
    fn clone_from(&mut self, source: &Self) {
        if self.data.len() == source.data.len() {
            self.data.clone_from_slice(&source.data);
        } else {
            self.data = source.data.clone();
        }
        self.rows = source.rows;
        self.cols = source.cols;
    }
}

/// Construct from a rectangular literal. The extents come from the array
/// type, so every row has exactly `C` elements.
impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(rows: [[T; C]; R]) -> Self {
        let data: Box<[T]> = rows.into_iter().flatten().collect();
        Self::from_parts(Shape::new(R, C), data)
    }
}

/// Return a reference to the element at `(row, col)`.
///
/// The caller must ensure the index lies inside the matrix. This is verified
/// only when contract checks are enabled; otherwise an out-of-range column
/// that still falls inside the buffer aliases another element, and an offset
/// past the buffer panics.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        contract_assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {} matrix",
            self.shape()
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        contract_assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {} matrix",
            self.shape()
        );
        &mut self.data[row * self.cols + col]
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Matrix<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Matrix<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
