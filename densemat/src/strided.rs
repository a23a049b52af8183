//! Strided traversal over a contiguous buffer
//!
//! A row of a row-major matrix is a contiguous run of elements, a column is
//! every `cols`-th element starting at the column index. Both are served by
//! the same iterator types parameterised by a stride, so generic algorithms
//! (inner products, comparisons, copies) run unmodified along either axis.
//!
//! ```text
//!   stride = 4
//!            +-------------+
//!   row 0 -> | a0 a1 a2 a3 |
//!   row 1 -> | b0 b1 b2 b3 |     col(1) yields a1, b1, c1
//!   row 2 -> | c0 c1 c2 c3 |
//!            +-------------+
//!               ^
//!               col(1)
//! ```
//!
//! Logical element `n` of a traversal lives at buffer offset `n * stride`.
//! Every stepping operation (`next`, `next_back`, `nth`, `nth_back`,
//! `retreat`) and the indexed accessors scale by the stride internally.

use std::{cmp::Ordering, fmt, iter::FusedIterator, mem, ops::Index, ptr};

use densemat_core::contract_assert;

/// Number of logical elements of a traversal over `len` buffer elements.
pub fn strided_len(len: usize, stride: usize) -> usize {
    len.div_ceil(stride)
}

/// An immutable strided iterator.
///
/// Yields every `stride`-th element of the underlying slice, beginning with
/// the first. Besides the [`Iterator`] interface it supports O(1) indexed
/// access relative to the current front ([`get`](Self::get)), stepping the
/// front back ([`retreat`](Self::retreat)) and the distance between two
/// iterators over the same traversal ([`distance_to`](Self::distance_to)).
///
/// Equality and ordering compare the front position of two iterators over
/// the same traversal. The remaining back end does not take part.
pub struct Strided<'a, T> {
    data: &'a [T],
    stride: usize,
    // Logical index of the element `data[0]` within the whole traversal.
    origin: usize,
    // Remaining logical range is `front..back`, relative to `data[0]`.
    front: usize,
    back: usize,
}

impl<'a, T> Strided<'a, T> {
    /// Construct a strided iterator over `data`.
    ///
    /// # Panics
    ///
    /// Panics if `stride == 0`.
    pub fn new(data: &'a [T], stride: usize) -> Self {
        assert!(stride != 0, "stride must be non-zero");
        Self {
            data,
            stride,
            origin: 0,
            front: 0,
            back: strided_len(data.len(), stride),
        }
    }

    /// The buffer distance between logically consecutive elements.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Logical index of the next element yielded from the front.
    pub fn position(&self) -> usize {
        self.origin + self.front
    }

    /// Return the element `n` steps past the current front without advancing.
    pub fn get(&self, n: usize) -> Option<&'a T> {
        if n < self.len() {
            Some(&self.data[(self.front + n) * self.stride])
        } else {
            None
        }
    }

    /// Move the front back by `n` elements, undoing earlier calls to
    /// [`next`](Iterator::next) or [`nth`](Iterator::nth).
    ///
    /// The front cannot move before the first element of the slice the
    /// iterator was built over, which is logical element 0 for matrix rows
    /// and columns. Stepping further is checked only when contract checks are
    /// enabled; otherwise the front stops at that first element.
    pub fn retreat(&mut self, n: usize) {
        contract_assert!(
            n <= self.front,
            "cannot retreat {n} steps from position {}",
            Self::position(self)
        );
        self.front = self.front.saturating_sub(n);
    }

    /// Number of steps from `self` to `other`, positive when `other` is
    /// further along the traversal.
    ///
    /// Both iterators must walk the same traversal: the same buffer, the same
    /// starting element (column or row) and the same stride. This is checked
    /// only when contract checks are enabled; otherwise the result is
    /// meaningless for unrelated iterators.
    pub fn distance_to(&self, other: &Strided<'a, T>) -> isize {
        self.check_same_traversal(other);
        other.position() as isize - self.position() as isize
    }

    fn check_same_traversal(&self, other: &Strided<'_, T>) {
        contract_assert!(
            self.stride == other.stride && ptr::eq(self.base(), other.base()),
            "strided iterators of different traversals"
        );
    }

    // Address of logical element 0 of the traversal. Only compared, never read.
    fn base(&self) -> *const T {
        self.data
            .as_ptr()
            .wrapping_sub(self.origin.wrapping_mul(self.stride))
    }
}

impl<T> Clone for Strided<'_, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            stride: self.stride,
            origin: self.origin,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T> fmt::Debug for Strided<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strided")
            .field("stride", &self.stride)
            .field("position", &self.position())
            .field("len", &self.len())
            .finish()
    }
}

// `Eq`/`Ord` are left out: `Ord::max`/`Ord::min` would shadow the iterator
// methods of the same name.
impl<T> PartialEq for Strided<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.check_same_traversal(other);
        self.position() == other.position()
    }
}

impl<T> PartialOrd for Strided<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.check_same_traversal(other);
        Some(self.position().cmp(&other.position()))
    }
}

impl<'a, T> Iterator for Strided<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = &self.data[self.front * self.stride];
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.len() {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }

    fn count(self) -> usize {
        self.len()
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Strided<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(&self.data[self.back * self.stride])
    }

    fn nth_back(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.len() {
            self.back = self.front;
            return None;
        }
        self.back -= n;
        self.next_back()
    }
}

impl<T> ExactSizeIterator for Strided<'_, T> {}

impl<T> FusedIterator for Strided<'_, T> {}

/// Indexed access relative to the current front.
///
/// # Panics
///
/// Panics if `n >= self.len()` and contract checks are enabled. Otherwise an
/// index past the end reads a later element of the buffer, or panics if it
/// falls outside the buffer.
impl<T> Index<usize> for Strided<'_, T> {
    type Output = T;

    fn index(&self, n: usize) -> &T {
        contract_assert!(
            n < self.len(),
            "strided index {n} out of range for length {}",
            self.len()
        );
        &self.data[(self.front + n) * self.stride]
    }
}

/// A mutable strided iterator.
///
/// The mutable counterpart of [`Strided`]. Yielded references are disjoint,
/// so the front only moves forward; freeze the iterator into a [`Strided`]
/// with `From`/`Into` to compare positions.
pub struct StridedMut<'a, T> {
    // Starts at the current front element.
    data: &'a mut [T],
    stride: usize,
    position: usize,
    len: usize,
}

impl<'a, T> StridedMut<'a, T> {
    /// Construct a mutable strided iterator over `data`.
    ///
    /// # Panics
    ///
    /// Panics if `stride == 0`.
    pub fn new(data: &'a mut [T], stride: usize) -> Self {
        assert!(stride != 0, "stride must be non-zero");
        let len = strided_len(data.len(), stride);
        Self {
            data,
            stride,
            position: 0,
            len,
        }
    }

    /// The buffer distance between logically consecutive elements.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Logical index of the next element yielded from the front.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Return the element `n` steps past the current front without advancing.
    pub fn get(&self, n: usize) -> Option<&T> {
        if n < self.len {
            Some(&self.data[n * self.stride])
        } else {
            None
        }
    }

    /// Mutable form of [`get`](Self::get).
    pub fn get_mut(&mut self, n: usize) -> Option<&mut T> {
        if n < self.len {
            Some(&mut self.data[n * self.stride])
        } else {
            None
        }
    }

    fn clear(&mut self) {
        self.position += self.len;
        self.len = 0;
        self.data = &mut [];
    }
}

impl<T> fmt::Debug for StridedMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StridedMut")
            .field("stride", &self.stride)
            .field("position", &self.position)
            .field("len", &self.len)
            .finish()
    }
}

impl<'a, T> Iterator for StridedMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        let data = mem::take(&mut self.data);
        let (first, rest) = data.split_first_mut()?;
        self.len -= 1;
        self.position += 1;
        self.data = if self.len == 0 {
            &mut []
        } else {
            &mut rest[self.stride - 1..]
        };
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn nth(&mut self, n: usize) -> Option<&'a mut T> {
        if n >= self.len {
            self.clear();
            return None;
        }
        let data = mem::take(&mut self.data);
        self.data = &mut data[n * self.stride..];
        self.len -= n;
        self.position += n;
        self.next()
    }

    fn count(self) -> usize {
        self.len
    }

    fn last(mut self) -> Option<&'a mut T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for StridedMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let data = mem::take(&mut self.data);
        let (head, tail) = data.split_at_mut(self.len * self.stride);
        self.data = head;
        tail.first_mut()
    }

    fn nth_back(&mut self, n: usize) -> Option<&'a mut T> {
        if n >= self.len {
            self.clear();
            return None;
        }
        self.len -= n;
        self.next_back()
    }
}

impl<T> ExactSizeIterator for StridedMut<'_, T> {}

impl<T> FusedIterator for StridedMut<'_, T> {}

/// Freeze a mutable strided iterator, keeping its position.
impl<'a, T> From<StridedMut<'a, T>> for Strided<'a, T> {
    fn from(iter: StridedMut<'a, T>) -> Self {
        Self {
            data: iter.data,
            stride: iter.stride,
            origin: iter.position,
            front: 0,
            back: iter.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3x4 row-major buffer: element (r, c) holds 10 * r + c.
    fn buffer() -> Vec<i32> {
        (0..3)
            .flat_map(|r| (0..4).map(move |c| 10 * r + c))
            .collect()
    }

    #[test]
    fn test_strided_len() {
        assert_eq!(strided_len(12, 4), 3);
        assert_eq!(strided_len(11, 4), 3);
        assert_eq!(strided_len(9, 4), 3);
        assert_eq!(strided_len(0, 4), 0);
        assert_eq!(strided_len(5, 1), 5);
    }

    #[test]
    fn test_column_traversal() {
        let data = buffer();
        let col: Vec<i32> = Strided::new(&data[2..], 4).copied().collect();
        assert_eq!(col, vec![2, 12, 22]);

        let col: Vec<i32> = Strided::new(&data[3..], 4).rev().copied().collect();
        assert_eq!(col, vec![23, 13, 3]);
    }

    #[test]
    fn test_unit_stride_matches_slice() {
        let data = buffer();
        let row = &data[4..8];
        assert!(Strided::new(row, 1).eq(row.iter()));
    }

    #[test]
    fn test_random_access() {
        let data = buffer();
        let mut col = Strided::new(&data[1..], 4);
        assert_eq!(col.len(), 3);
        assert_eq!(col.get(2), Some(&21));
        assert_eq!(col[1], 11);
        assert_eq!(col.get(3), None);

        assert_eq!(col.nth(1), Some(&11));
        assert_eq!(col.position(), 2);
        assert_eq!(col.len(), 1);
        assert_eq!(col[0], 21);
        assert_eq!(col.nth(5), None);
        assert_eq!(col.len(), 0);
        assert_eq!(col.next(), None);
    }

    #[test]
    fn test_nth_back() {
        let data = buffer();
        let mut col = Strided::new(&data[0..], 4);
        assert_eq!(col.nth_back(1), Some(&10));
        assert_eq!(col.len(), 1);
        assert_eq!(col.next_back(), Some(&0));
        assert_eq!(col.next_back(), None);
        assert_eq!(Strided::new(&data[0..], 4).last(), Some(&20));
    }

    #[test]
    fn test_distance() {
        let data = buffer();
        let begin = Strided::new(&data[1..], 4);
        let mut end = begin.clone();
        end.by_ref().for_each(drop);
        assert_eq!(begin.distance_to(&end), 3);
        assert_eq!(end.distance_to(&begin), -3);

        let mut middle = begin.clone();
        middle.next();
        assert_eq!(begin.distance_to(&middle), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "different traversals")]
    fn test_distance_across_columns_panics() {
        let data = buffer();
        let first = Strided::new(&data[0..], 4);
        let second = Strided::new(&data[1..], 4);
        first.distance_to(&second);
    }

    #[test]
    fn test_retreat() {
        let data = buffer();
        let mut col = Strided::new(&data[1..], 4);
        assert_eq!(col.next(), Some(&1));
        assert_eq!(col.next(), Some(&11));
        assert_eq!(col.position(), 2);

        col.retreat(1);
        assert_eq!(col.position(), 1);
        assert_eq!(col.len(), 2);
        assert_eq!(col[0], 11);

        col.retreat(1);
        assert_eq!(col.position(), 0);
        assert_eq!(col.copied().collect::<Vec<_>>(), vec![1, 11, 21]);
    }

    #[test]
    fn test_retreat_after_exhaustion() {
        let data = buffer();
        let mut col = Strided::new(&data[2..], 4);
        col.by_ref().for_each(drop);
        assert_eq!(col.next(), None);
        col.retreat(3);
        assert_eq!(col.next(), Some(&2));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot retreat")]
    fn test_retreat_before_start_panics() {
        let data = buffer();
        let mut col = Strided::new(&data[0..], 4);
        col.next();
        col.retreat(2);
    }

    #[test]
    fn test_compare_positions() {
        let data = buffer();
        let begin = Strided::new(&data[3..], 4);
        let mut it = begin.clone();
        assert!(it == begin);
        assert!(it <= begin && it >= begin);

        it.next();
        assert!(it != begin);
        assert!(begin < it);
        assert!(it > begin);
        assert_eq!(PartialOrd::partial_cmp(&begin, &it), Some(Ordering::Less));

        it.retreat(1);
        assert!(it == begin);

        let mut end = begin.clone();
        end.nth(2);
        assert!(it < end);
        assert_eq!(it.distance_to(&end), 3);
        assert_eq!(begin.max(), Some(&23));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "different traversals")]
    fn test_compare_across_columns_panics() {
        let data = buffer();
        let first = Strided::new(&data[0..], 4);
        let second = Strided::new(&data[1..], 4);
        let _equal = first == second;
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "different traversals")]
    fn test_distance_across_rows_panics() {
        let data = buffer();
        let first = Strided::new(&data[0..4], 1);
        let second = Strided::new(&data[4..8], 1);
        first.distance_to(&second);
    }

    #[test]
    #[should_panic(expected = "stride must be non-zero")]
    fn test_zero_stride_panics() {
        let data = buffer();
        Strided::new(&data[..], 0);
    }

    #[test]
    fn test_mutable_column() {
        let mut data = buffer();
        for value in StridedMut::new(&mut data[1..], 4) {
            *value = -*value;
        }
        assert_eq!(data[1], -1);
        assert_eq!(data[5], -11);
        assert_eq!(data[9], -21);
        assert_eq!(data[0], 0);
        assert_eq!(data[2], 2);
    }

    #[test]
    fn test_mutable_both_ends() {
        let mut data = buffer();
        let mut col = StridedMut::new(&mut data[2..], 4);
        assert_eq!(col.len(), 3);
        *col.next_back().unwrap() = 100;
        *col.next().unwrap() = 200;
        assert_eq!(col.get(0), Some(&12));
        *col.get_mut(0).unwrap() = 300;
        assert_eq!(col.len(), 1);
        assert_eq!(col.next(), Some(&mut 300));
        assert_eq!(col.next(), None);
        assert_eq!(col.next_back(), None);
        assert_eq!(data[2], 200);
        assert_eq!(data[6], 300);
        assert_eq!(data[10], 100);
    }

    #[test]
    fn test_mutable_nth() {
        let mut data = buffer();
        let mut col = StridedMut::new(&mut data[0..], 4);
        assert_eq!(col.nth(1), Some(&mut 10));
        assert_eq!(col.position(), 2);
        assert_eq!(col.nth_back(0), Some(&mut 20));
        assert_eq!(col.nth(0), None);

        let mut col = StridedMut::new(&mut data[3..], 4);
        assert_eq!(col.nth(7), None);
        assert_eq!(col.position(), 3);
        assert_eq!(col.len(), 0);
    }

    #[test]
    fn test_freeze_keeps_position() {
        let mut data = buffer();
        let mut col = StridedMut::new(&mut data[1..], 4);
        col.next();
        let frozen: Strided<'_, i32> = col.into();
        assert_eq!(frozen.position(), 1);
        assert_eq!(frozen.len(), 2);
        assert_eq!(frozen.copied().collect::<Vec<_>>(), vec![11, 21]);
    }
}
