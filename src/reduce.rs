//! Statistics over a whole matrix, each column, or each row.
//!
//! Column results are packed into a `1 x W` row matrix, row results into an
//! `H x 1` column matrix. Columns are reduced through a strided view with
//! step `W`; rows are contiguous and reduced directly.
//!
//! Every statistic has a method shortcut on [`Matrix`] and a free function
//! here with the same name, for the whole matrix, for `_columns` and for
//! `_rows`.
//!
//! # Example
//!
//! ```rust
//! use strided_matrix::{reduce, Matrix, Statistic};
//!
//! let m = Matrix::<f64, 2, 3>::from_flat([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//!
//! assert_eq!(m.sum(), 21.0);
//! assert_eq!(m.mean_columns().data(), &[2.5, 3.5, 4.5]);
//! assert_eq!(reduce::max_rows(&m).data(), &[3.0, 6.0]);
//! assert_eq!(m.statistic_rows(Statistic::PeakToPeak).data(), &[2.0, 2.0]);
//! ```

use crate::{Matrix, Scalar, Statistic};

impl<T: Scalar, const H: usize, const W: usize> Matrix<T, H, W> {
    /// Reduce every element with `stat`.
    pub fn statistic(&self, stat: Statistic) -> T {
        stat.compute(self.data().iter().copied())
    }

    /// Reduce each column with `stat`.
    pub fn statistic_columns(&self, stat: Statistic) -> Matrix<T, 1, W> {
        Matrix::from_fn(|_, j| stat.compute(self.column_view(j).iter().copied()))
    }

    /// Reduce each row with `stat`.
    pub fn statistic_rows(&self, stat: Statistic) -> Matrix<T, H, 1> {
        let rows = self.rows();
        Matrix::from_fn(|i, _| stat.compute(rows[i].iter().copied()))
    }
}

macro_rules! statistic_entry_points {
    ($($whole:ident, $columns:ident, $rows:ident => $variant:ident $(($arg:ident))?;)*) => {
        impl<T: Scalar, const H: usize, const W: usize> Matrix<T, H, W> {
            $(
                #[doc = concat!("[`Statistic::", stringify!($variant), "`] of every element.")]
                #[inline]
                pub fn $whole(&self $(, $arg: usize)?) -> T {
                    self.statistic(Statistic::$variant $(($arg))?)
                }

                #[doc = concat!("[`Statistic::", stringify!($variant), "`] of each column.")]
                #[inline]
                pub fn $columns(&self $(, $arg: usize)?) -> Matrix<T, 1, W> {
                    self.statistic_columns(Statistic::$variant $(($arg))?)
                }

                #[doc = concat!("[`Statistic::", stringify!($variant), "`] of each row.")]
                #[inline]
                pub fn $rows(&self $(, $arg: usize)?) -> Matrix<T, H, 1> {
                    self.statistic_rows(Statistic::$variant $(($arg))?)
                }
            )*
        }

        $(
            #[doc = concat!("[`Statistic::", stringify!($variant), "`] of every element.")]
            pub fn $whole<T: Scalar, const H: usize, const W: usize>(
                matrix: &Matrix<T, H, W>
                $(, $arg: usize)?
            ) -> T {
                matrix.$whole($($arg)?)
            }

            #[doc = concat!("[`Statistic::", stringify!($variant), "`] of each column.")]
            pub fn $columns<T: Scalar, const H: usize, const W: usize>(
                matrix: &Matrix<T, H, W>
                $(, $arg: usize)?
            ) -> Matrix<T, 1, W> {
                matrix.$columns($($arg)?)
            }

            #[doc = concat!("[`Statistic::", stringify!($variant), "`] of each row.")]
            pub fn $rows<T: Scalar, const H: usize, const W: usize>(
                matrix: &Matrix<T, H, W>
                $(, $arg: usize)?
            ) -> Matrix<T, H, 1> {
                matrix.$rows($($arg)?)
            }
        )*
    };
}

statistic_entry_points! {
    sum, sum_columns, sum_rows => Sum;
    mean, mean_columns, mean_rows => Mean;
    median, median_columns, median_rows => Median;
    variance, variance_columns, variance_rows => Variance(ddof);
    standard_deviation, standard_deviation_columns, standard_deviation_rows => StandardDeviation(ddof);
    sum_product, sum_product_columns, sum_product_rows => SumProduct;
    peak_to_peak, peak_to_peak_columns, peak_to_peak_rows => PeakToPeak;
    min, min_columns, min_rows => Min;
    max, max_columns, max_rows => Max;
}
