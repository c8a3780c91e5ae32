//! Re-indexing copies: transpose, sub-matrix extraction and concatenation.

use crate::{Matrix, MatrixError, Result};

/// Transpose: `result(j, i) == matrix(i, j)`.
pub fn transpose<T: Copy, const H: usize, const W: usize>(
    matrix: &Matrix<T, H, W>,
) -> Matrix<T, W, H> {
    let rows = matrix.rows();
    Matrix::from_fn(|j, i| rows[i][j])
}

/// Join two matrices side by side.
///
/// Each result row is the `lhs` row followed by the `rhs` row. `RW` is
/// normally inferred from the binding and must equal `W1 + W2`; any other
/// width fails to compile.
///
/// # Example
///
/// ```rust
/// use strided_matrix::{horizontal_concatenate, Matrix};
///
/// let a = Matrix::<i32, 2, 1>::from_flat([1, 2]);
/// let b = Matrix::<i32, 2, 2>::from_flat([3, 4, 5, 6]);
/// let joined: Matrix<i32, 2, 3> = horizontal_concatenate(&a, &b);
/// assert_eq!(joined.data(), &[1, 3, 4, 2, 5, 6]);
/// ```
pub fn horizontal_concatenate<T, const H: usize, const W1: usize, const W2: usize, const RW: usize>(
    lhs: &Matrix<T, H, W1>,
    rhs: &Matrix<T, H, W2>,
) -> Matrix<T, H, RW>
where
    T: Copy,
{
    const {
        assert!(RW == W1 + W2, "result width must be the sum of the operand widths");
    }
    log::trace!("horizontal_concatenate {}x{} | {}x{}", H, W1, H, W2);

    let (left, right) = (lhs.rows(), rhs.rows());
    Matrix::from_fn(|i, j| if j < W1 { left[i][j] } else { right[i][j - W1] })
}

/// Stack two matrices on top of each other.
///
/// The result buffer is the `lhs` buffer followed by the `rhs` buffer. `RH`
/// must equal `H1 + H2`; any other height fails to compile.
pub fn vertical_concatenate<T, const H1: usize, const H2: usize, const W: usize, const RH: usize>(
    lhs: &Matrix<T, H1, W>,
    rhs: &Matrix<T, H2, W>,
) -> Matrix<T, RH, W>
where
    T: Copy,
{
    const {
        assert!(RH == H1 + H2, "result height must be the sum of the operand heights");
    }
    log::trace!("vertical_concatenate {}x{} over {}x{}", H1, W, H2, W);

    let (top, bottom) = (lhs.rows(), rhs.rows());
    Matrix::from_fn(|i, j| if i < H1 { top[i][j] } else { bottom[i - H1][j] })
}

impl<T: Copy, const H: usize, const W: usize> Matrix<T, H, W> {
    /// Transposed copy; see [`transpose`].
    pub fn transpose(&self) -> Matrix<T, W, H> {
        transpose(self)
    }

    /// Copy the `SUB_H x SUB_W` block whose top-left corner is
    /// `(START_H, START_W)`.
    ///
    /// # Errors
    /// Returns [`MatrixError::SubMatrixOutOfRange`] if
    /// `START_H + SUB_H > H` or `START_W + SUB_W > W`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strided_matrix::Matrix;
    ///
    /// let m = Matrix::<i32, 3, 3>::from_flat([1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// let block = m.sub_matrix::<1, 1, 2, 2>().unwrap();
    /// assert_eq!(block.data(), &[5, 6, 8, 9]);
    /// ```
    pub fn sub_matrix<
        const START_H: usize,
        const START_W: usize,
        const SUB_H: usize,
        const SUB_W: usize,
    >(
        &self,
    ) -> Result<Matrix<T, SUB_H, SUB_W>> {
        if START_H + SUB_H > H || START_W + SUB_W > W {
            return Err(MatrixError::SubMatrixOutOfRange {
                start_height: START_H,
                start_width: START_W,
                sub_height: SUB_H,
                sub_width: SUB_W,
                height: H,
                width: W,
            });
        }
        log::trace!(
            "sub_matrix {}x{} at ({}, {}) of {}x{}",
            SUB_H,
            SUB_W,
            START_H,
            START_W,
            H,
            W
        );

        let rows = self.rows();
        Ok(Matrix::from_fn(|i, j| rows[START_H + i][START_W + j]))
    }
}
