//! In-place and value-returning sorts over the whole matrix, rows or columns.
//!
//! The default order is ascending with NaN placed last; the `_by` variants
//! take any comparator that is a total order over the elements.

use std::cmp::Ordering;

use crate::scalar::ascending;
use crate::Matrix;

impl<T, const H: usize, const W: usize> Matrix<T, H, W> {
    /// Sort the flat buffer ascending.
    pub fn sort(&mut self) -> &mut Self
    where
        T: PartialOrd,
    {
        self.sort_by(ascending)
    }

    /// Sort the flat buffer with `compare`.
    pub fn sort_by<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.data_mut().sort_by(compare);
        self
    }

    /// Sort each row independently, ascending.
    pub fn sort_rows(&mut self) -> &mut Self
    where
        T: PartialOrd,
    {
        self.sort_rows_by(ascending)
    }

    /// Sort each row independently with `compare`.
    pub fn sort_rows_by<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        for row in self.data_mut().chunks_exact_mut(W) {
            row.sort_by(&mut compare);
        }
        self
    }

    /// Sort each column independently, ascending.
    pub fn sort_columns(&mut self) -> &mut Self
    where
        T: PartialOrd + Clone,
    {
        self.sort_columns_by(ascending)
    }

    /// Sort each column independently with `compare`.
    pub fn sort_columns_by<F>(&mut self, mut compare: F) -> &mut Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        for j in 0..W {
            self.column_view_mut(j).sort_by(&mut compare);
        }
        self
    }
}

/// Sorted copy of the flat buffer.
pub fn sort<T, const H: usize, const W: usize>(matrix: &Matrix<T, H, W>) -> Matrix<T, H, W>
where
    T: PartialOrd + Clone,
{
    let mut result = matrix.clone();
    result.sort();
    result
}

/// Copy sorted with `compare`.
pub fn sort_by<T, F, const H: usize, const W: usize>(
    matrix: &Matrix<T, H, W>,
    compare: F,
) -> Matrix<T, H, W>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = matrix.clone();
    result.sort_by(compare);
    result
}

/// Copy with each row sorted.
pub fn sort_rows<T, const H: usize, const W: usize>(matrix: &Matrix<T, H, W>) -> Matrix<T, H, W>
where
    T: PartialOrd + Clone,
{
    let mut result = matrix.clone();
    result.sort_rows();
    result
}

/// Copy with each row sorted by `compare`.
pub fn sort_rows_by<T, F, const H: usize, const W: usize>(
    matrix: &Matrix<T, H, W>,
    compare: F,
) -> Matrix<T, H, W>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = matrix.clone();
    result.sort_rows_by(compare);
    result
}

/// Copy with each column sorted.
pub fn sort_columns<T, const H: usize, const W: usize>(
    matrix: &Matrix<T, H, W>,
) -> Matrix<T, H, W>
where
    T: PartialOrd + Clone,
{
    let mut result = matrix.clone();
    result.sort_columns();
    result
}

/// Copy with each column sorted by `compare`.
pub fn sort_columns_by<T, F, const H: usize, const W: usize>(
    matrix: &Matrix<T, H, W>,
    compare: F,
) -> Matrix<T, H, W>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = matrix.clone();
    result.sort_columns_by(compare);
    result
}
