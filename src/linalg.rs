//! Matrix product.

use crate::{Matrix, Scalar};

/// Matrix product of an `M x N` and an `N x P` matrix.
///
/// Each result cell is `sum_k lhs(i, k) * rhs(k, j)`, accumulated in `T`
/// from zero in increasing `k`.
///
/// # Example
///
/// ```rust
/// use strided_matrix::{multiplies_matrix, Matrix};
///
/// let a = Matrix::<i32, 2, 3>::from_flat([1, 2, 3, 4, 5, 6]);
/// let b = Matrix::<i32, 3, 2>::from_flat([7, 8, 9, 10, 11, 12]);
/// assert_eq!(multiplies_matrix(&a, &b).data(), &[58, 64, 139, 154]);
/// ```
pub fn multiplies_matrix<T: Scalar, const M: usize, const N: usize, const P: usize>(
    lhs: &Matrix<T, M, N>,
    rhs: &Matrix<T, N, P>,
) -> Matrix<T, M, P> {
    log::trace!("multiplies_matrix {}x{} * {}x{}", M, N, N, P);

    let a = lhs.rows();
    let b = rhs.rows();
    Matrix::from_fn(|i, j| {
        let mut acc = T::zero();
        for k in 0..N {
            acc = acc + a[i][k] * b[k][j];
        }
        acc
    })
}

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Matrix product `self * rhs`; see [`multiplies_matrix`].
    pub fn multiplies_matrix<const P: usize>(&self, rhs: &Matrix<T, N, P>) -> Matrix<T, M, P> {
        multiplies_matrix(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_neutral() {
        let identity = Matrix::<f64, 3, 3>::from_fn(|i, j| if i == j { 1.0 } else { 0.0 });
        let m = Matrix::<f64, 3, 2>::from_flat([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(identity.multiplies_matrix(&m), m);
    }

    #[test]
    fn test_row_times_column_is_dot_product() {
        let row = Matrix::<i32, 1, 3>::from_flat([1, 2, 3]);
        let column = Matrix::<i32, 3, 1>::from_flat([4, 5, 6]);
        assert_eq!(multiplies_matrix(&row, &column).data(), &[32]);
        assert_eq!(
            multiplies_matrix(&column, &row).data(),
            &[4, 8, 12, 5, 10, 15, 6, 12, 18]
        );
    }

    #[test]
    fn test_product_against_transpose_identity() {
        let a = Matrix::<i64, 2, 3>::from_flat([1, -2, 3, 0, 4, -1]);
        let b = Matrix::<i64, 3, 2>::from_flat([2, 1, 0, -3, 5, 2]);
        let ab = a.multiplies_matrix(&b);
        let bt_at = b.transpose().multiplies_matrix(&a.transpose());
        assert_eq!(ab.transpose(), bt_at);
    }
}
