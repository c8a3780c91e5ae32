//! The fixed-size matrix container: construction and element access.

use std::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::step_iter::{StepSlice, StepSliceMut};
use crate::{MatrixError, Result};

/// Dense `H x W` matrix stored row-major in an inline array.
///
/// Both dimensions are compile-time constants and must be at least one;
/// constructing a `Matrix` with a zero dimension fails to compile.
///
/// # Example
///
/// ```rust
/// use strided_matrix::Matrix;
///
/// let m = Matrix::<i32, 2, 3>::from_fn(|i, j| (i * 3 + j) as i32);
/// assert_eq!(m[(1, 2)], 5);
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const H: usize, const W: usize> {
    data: [[T; W]; H],
}

impl<T, const H: usize, const W: usize> Matrix<T, H, W> {
    const SHAPE: () = assert!(H >= 1 && W >= 1, "matrix dimensions must be at least 1x1");

    /// Number of rows.
    pub const HEIGHT: usize = H;
    /// Number of columns.
    pub const WIDTH: usize = W;

    /// Wrap an array of rows.
    #[inline]
    pub fn from_rows(data: [[T; W]; H]) -> Self {
        let () = Self::SHAPE;
        Self { data }
    }

    /// Build a matrix by evaluating `f(i, j)` for every cell in row-major order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::from_rows(std::array::from_fn(|i| std::array::from_fn(|j| f(i, j))))
    }

    /// Matrix with every element set to `value`.
    pub fn from_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_, _| value.clone())
    }

    /// Matrix of zeros.
    pub fn zeros() -> Self
    where
        T: Zero,
    {
        Self::from_fn(|_, _| T::zero())
    }

    /// Build from a flat row-major array of exactly `H * W` elements.
    ///
    /// A length other than `H * W` is rejected at compile time.
    pub fn from_flat<const N: usize>(values: [T; N]) -> Self
    where
        T: Copy,
    {
        const {
            assert!(N == H * W, "flat array length must equal H * W");
        }
        Self::from_fn(|i, j| values[i * W + j])
    }

    /// Build from a flat row-major slice.
    ///
    /// # Errors
    /// Returns [`MatrixError::LengthMismatch`] if `values.len() != H * W`.
    pub fn from_slice(values: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        if values.len() != H * W {
            return Err(MatrixError::LengthMismatch {
                expected: H * W,
                actual: values.len(),
            });
        }
        Ok(Self::from_fn(|i, j| values[i * W + j]))
    }

    /// Number of rows.
    #[inline]
    pub const fn height(&self) -> usize {
        H
    }

    /// Number of columns.
    #[inline]
    pub const fn width(&self) -> usize {
        W
    }

    /// `(height, width)`.
    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (H, W)
    }

    /// Total number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        H * W
    }

    /// Always false: a matrix holds at least one element.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The backing storage as a flat row-major slice.
    #[inline]
    pub fn data(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// The backing storage as a mutable flat row-major slice.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Consume the matrix and return its rows.
    #[inline]
    pub fn into_rows(self) -> [[T; W]; H] {
        self.data
    }

    /// All rows as arrays.
    #[inline]
    pub fn rows(&self) -> &[[T; W]; H] {
        &self.data
    }

    /// Bounds-checked element access.
    ///
    /// # Errors
    /// - [`MatrixError::HeightOutOfRange`] if `i >= H`
    /// - [`MatrixError::WidthOutOfRange`] if `j >= W`
    pub fn at(&self, i: usize, j: usize) -> Result<&T> {
        check_index::<H, W>(i, j)?;
        Ok(&self.data[i][j])
    }

    /// Bounds-checked mutable element access.
    ///
    /// # Errors
    /// Same conditions as [`Matrix::at`].
    pub fn at_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        check_index::<H, W>(i, j)?;
        Ok(&mut self.data[i][j])
    }

    /// Element at row-major offset `i * W + j` without any bounds check.
    ///
    /// # Safety
    /// `i * W + j` must be less than `H * W`.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize, j: usize) -> &T {
        // SAFETY: the caller guarantees the offset lies inside the buffer.
        unsafe { self.data().get_unchecked(i * W + j) }
    }

    /// Mutable element at row-major offset `i * W + j` without any bounds check.
    ///
    /// # Safety
    /// `i * W + j` must be less than `H * W`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize, j: usize) -> &mut T {
        // SAFETY: the caller guarantees the offset lies inside the buffer.
        unsafe { self.data_mut().get_unchecked_mut(i * W + j) }
    }

    /// Element logically at `(i, j)` when this matrix is broadcast.
    ///
    /// A single-row matrix ignores `i`, a single-column matrix ignores `j`.
    #[inline]
    pub fn get_broadcast_value(&self, i: usize, j: usize) -> &T {
        let i = if H == 1 { 0 } else { i };
        let j = if W == 1 { 0 } else { j };
        &self.data[i][j]
    }

    /// Row `i` as a contiguous slice.
    ///
    /// # Errors
    /// Returns [`MatrixError::HeightOutOfRange`] if `i >= H`.
    pub fn row(&self, i: usize) -> Result<&[T]> {
        check_row::<H>(i)?;
        Ok(&self.data[i])
    }

    /// Row `i` as a mutable contiguous slice.
    ///
    /// # Errors
    /// Returns [`MatrixError::HeightOutOfRange`] if `i >= H`.
    pub fn row_mut(&mut self, i: usize) -> Result<&mut [T]> {
        check_row::<H>(i)?;
        Ok(&mut self.data[i])
    }

    /// Column `j` as a strided view with step `W`.
    ///
    /// # Errors
    /// Returns [`MatrixError::WidthOutOfRange`] if `j >= W`.
    pub fn column(&self, j: usize) -> Result<StepSlice<'_, T, W>> {
        check_column::<W>(j)?;
        Ok(self.column_view(j))
    }

    /// Column `j` as a mutable strided view with step `W`.
    ///
    /// # Errors
    /// Returns [`MatrixError::WidthOutOfRange`] if `j >= W`.
    pub fn column_mut(&mut self, j: usize) -> Result<StepSliceMut<'_, T, W>> {
        check_column::<W>(j)?;
        Ok(self.column_view_mut(j))
    }

    /// Column view for an index already known to be in range.
    #[inline]
    pub(crate) fn column_view(&self, j: usize) -> StepSlice<'_, T, W> {
        StepSlice::new_unchecked(self.data(), j, column_last::<H, W>(j))
    }

    #[inline]
    pub(crate) fn column_view_mut(&mut self, j: usize) -> StepSliceMut<'_, T, W> {
        StepSliceMut::new_unchecked(self.data_mut(), j, column_last::<H, W>(j))
    }
}

#[inline]
fn column_last<const H: usize, const W: usize>(j: usize) -> usize {
    j + (H - 1) * W
}

#[inline]
pub(crate) fn check_row<const H: usize>(i: usize) -> Result<()> {
    if i >= H {
        return Err(MatrixError::HeightOutOfRange {
            index: i,
            height: H,
        });
    }
    Ok(())
}

#[inline]
pub(crate) fn check_column<const W: usize>(j: usize) -> Result<()> {
    if j >= W {
        return Err(MatrixError::WidthOutOfRange { index: j, width: W });
    }
    Ok(())
}

#[inline]
fn check_index<const H: usize, const W: usize>(i: usize, j: usize) -> Result<()> {
    check_row::<H>(i)?;
    check_column::<W>(j)
}

impl<T: Default, const H: usize, const W: usize> Default for Matrix<T, H, W> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

/// Row-major offset indexing.
///
/// The index is not checked per axis: `(0, W)` addresses `(1, 0)`. Offsets
/// past the end of the buffer panic; [`Matrix::get_unchecked`] is the access
/// path that does no checking at all, and [`Matrix::at`] the one that checks
/// both axes.
impl<T, const H: usize, const W: usize> Index<(usize, usize)> for Matrix<T, H, W> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data()[i * W + j]
    }
}

impl<T, const H: usize, const W: usize> IndexMut<(usize, usize)> for Matrix<T, H, W> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data_mut()[i * W + j]
    }
}

impl<T, const H: usize, const W: usize> From<[[T; W]; H]> for Matrix<T, H, W> {
    fn from(data: [[T; W]; H]) -> Self {
        Self::from_rows(data)
    }
}

impl<T, const H: usize, const W: usize> AsRef<[T]> for Matrix<T, H, W> {
    fn as_ref(&self) -> &[T] {
        self.data()
    }
}

impl<'a, T, const H: usize, const W: usize> IntoIterator for &'a Matrix<T, H, W> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data().iter()
    }
}

impl<'a, T, const H: usize, const W: usize> IntoIterator for &'a mut Matrix<T, H, W> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data_mut().iter_mut()
    }
}
