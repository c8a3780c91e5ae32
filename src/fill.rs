//! Overwriting the whole matrix, one row or one column.
//!
//! Columns are written through a [`StepSliceMut`](crate::StepSliceMut) with
//! step `W`. Generator variants call the generator once per element, in
//! row-major order for the whole matrix and top to bottom for a column.

use crate::matrix::check_column;
use crate::{Matrix, Result};

impl<T, const H: usize, const W: usize> Matrix<T, H, W> {
    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) -> &mut Self
    where
        T: Clone,
    {
        self.data_mut().fill(value);
        self
    }

    /// Set every element of row `i` to `value`.
    ///
    /// # Errors
    /// Returns [`MatrixError::HeightOutOfRange`](crate::MatrixError::HeightOutOfRange)
    /// if `i >= H`.
    pub fn fill_row(&mut self, i: usize, value: T) -> Result<&mut Self>
    where
        T: Clone,
    {
        self.row_mut(i)?.fill(value);
        Ok(self)
    }

    /// Set every element of column `j` to `value`.
    ///
    /// # Errors
    /// Returns [`MatrixError::WidthOutOfRange`](crate::MatrixError::WidthOutOfRange)
    /// if `j >= W`.
    pub fn fill_column(&mut self, j: usize, value: T) -> Result<&mut Self>
    where
        T: Clone,
    {
        check_column::<W>(j)?;
        self.column_view_mut(j).fill(value);
        Ok(self)
    }

    /// Overwrite every element with successive values of `generator`.
    pub fn fill_generator<G>(&mut self, generator: G) -> &mut Self
    where
        G: FnMut() -> T,
    {
        self.data_mut().fill_with(generator);
        self
    }

    /// Overwrite row `i` with successive values of `generator`.
    ///
    /// # Errors
    /// Returns [`MatrixError::HeightOutOfRange`](crate::MatrixError::HeightOutOfRange)
    /// if `i >= H`; the generator is not called.
    pub fn fill_row_generator<G>(&mut self, i: usize, generator: G) -> Result<&mut Self>
    where
        G: FnMut() -> T,
    {
        self.row_mut(i)?.fill_with(generator);
        Ok(self)
    }

    /// Overwrite column `j` with successive values of `generator`.
    ///
    /// # Errors
    /// Returns [`MatrixError::WidthOutOfRange`](crate::MatrixError::WidthOutOfRange)
    /// if `j >= W`; the generator is not called.
    pub fn fill_column_generator<G>(&mut self, j: usize, generator: G) -> Result<&mut Self>
    where
        G: FnMut() -> T,
    {
        check_column::<W>(j)?;
        self.column_view_mut(j).fill_with(generator);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix, MatrixError};

    fn counter(start: i32) -> impl FnMut() -> i32 {
        let mut next = start;
        move || {
            let value = next;
            next += 1;
            value
        }
    }

    #[test]
    fn test_fill_whole_row_and_column() {
        let mut m = Matrix::<i32, 3, 3>::zeros();
        m.fill(1);
        assert_eq!(m.data(), &[1; 9]);

        m.fill_row(1, 2).unwrap().fill_column(2, 3).unwrap();
        assert_eq!(m.data(), &[1, 1, 3, 2, 2, 3, 1, 1, 3]);
    }

    #[test]
    fn test_fill_rejects_bad_index() {
        let mut m = Matrix::<i32, 2, 3>::zeros();
        assert_eq!(
            m.fill_row(2, 1).unwrap_err(),
            MatrixError::HeightOutOfRange {
                index: 2,
                height: 2
            }
        );
        assert_eq!(
            m.fill_column(3, 1).unwrap_err(),
            MatrixError::WidthOutOfRange { index: 3, width: 3 }
        );
        assert_eq!(m.data(), &[0; 6]);
    }

    #[test]
    fn test_generators_run_in_iteration_order() {
        let mut m = Matrix::<i32, 2, 3>::zeros();
        m.fill_generator(counter(0));
        assert_eq!(m.data(), &[0, 1, 2, 3, 4, 5]);

        m.fill_row_generator(0, counter(10)).unwrap();
        assert_eq!(m.data(), &[10, 11, 12, 3, 4, 5]);

        m.fill_column_generator(1, counter(20)).unwrap();
        assert_eq!(m.data(), &[10, 20, 12, 3, 21, 5]);
    }

    #[test]
    fn test_generator_not_called_on_error() {
        let mut calls = 0;
        let mut m = Matrix::<i32, 2, 2>::zeros();
        assert!(m
            .fill_column_generator(5, || {
                calls += 1;
                calls
            })
            .is_err());
        assert!(m
            .fill_row_generator(5, || {
                calls += 1;
                calls
            })
            .is_err());
        assert_eq!(calls, 0);
    }
}
