//! Element-wise transforms.

use crate::Matrix;

impl<T, const H: usize, const W: usize> Matrix<T, H, W> {
    /// Replace every element `x` with `f(x)`, in row-major order.
    pub fn apply<F>(&mut self, mut f: F) -> &mut Self
    where
        T: Copy,
        F: FnMut(T) -> T,
    {
        for element in self.data_mut() {
            *element = f(*element);
        }
        self
    }

    /// Matrix of `f(x)` for every element `x`, possibly of another type.
    pub fn map<U, F>(&self, mut f: F) -> Matrix<U, H, W>
    where
        F: FnMut(&T) -> U,
    {
        let rows = self.rows();
        Matrix::from_fn(|i, j| f(&rows[i][j]))
    }
}

/// Copy of `matrix` with `f` applied to every element.
///
/// # Example
///
/// ```rust
/// use strided_matrix::{apply, Matrix};
///
/// let m = Matrix::<i32, 1, 3>::from_flat([1, 2, 3]);
/// assert_eq!(apply(&m, |x| x * x).data(), &[1, 4, 9]);
/// ```
pub fn apply<T, F, const H: usize, const W: usize>(
    matrix: &Matrix<T, H, W>,
    f: F,
) -> Matrix<T, H, W>
where
    T: Copy,
    F: FnMut(T) -> T,
{
    let mut result = *matrix;
    result.apply(f);
    result
}
