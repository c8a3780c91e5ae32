//! Reduction kernels over sequences of [`Scalar`] values.
//!
//! Every kernel consumes an [`IntoIterator`] of values, so the same code
//! reduces a whole matrix buffer, a contiguous row, or a strided column view.
//! Kernels that need the element count (or a second pass) additionally
//! require the iterator to be [`ExactSizeIterator`] and [`Clone`], which every
//! slice and [`StepSlice`](crate::StepSlice) iterator is.
//!
//! The formulas are the naive ones: a single accumulation in `T` for sums
//! and products, and a two-pass mean-then-squared-deviations variance.
//!
//! # Example
//!
//! ```rust
//! use strided_matrix::statistic::{mean, median, variance};
//!
//! let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(mean(values), 5.0);
//! assert_eq!(median(values), 4.5);
//! assert_eq!(variance(values, 0), 4.0);
//! ```

use crate::scalar::ascending;
use crate::Scalar;

/// Sum of all values, starting from zero.
pub fn sum<T, I>(values: I) -> T
where
    T: Scalar,
    I: IntoIterator<Item = T>,
{
    values.into_iter().fold(T::zero(), |acc, x| acc + x)
}

/// `value / count` with truncating integer semantics, for any count.
///
/// A count above `T::MAX` has no representation in `T`. The quotient is then
/// zero, except for `T::MIN / (T::MAX + 1)` in signed types, which is -1.
fn divide_by_count<T: Scalar>(value: T, count: usize) -> T {
    match T::from_count(count) {
        Some(divisor) => value / divisor,
        None => match count.checked_sub(1).and_then(T::from_count) {
            Some(max) if value % max != T::zero() && value / max != T::zero() => value / max,
            _ => T::zero(),
        },
    }
}

/// Product of all values, starting from one.
pub fn sum_product<T, I>(values: I) -> T
where
    T: Scalar,
    I: IntoIterator<Item = T>,
{
    values.into_iter().fold(T::one(), |acc, x| acc * x)
}

/// `sum / count`, evaluated in `T` (integer means truncate).
///
/// # Panics
/// Integer element types panic on an empty sequence; floats return NaN.
pub fn mean<T, I>(values: I) -> T
where
    T: Scalar,
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
{
    let iter = values.into_iter();
    let count = iter.len();
    divide_by_count(sum(iter), count)
}

/// Middle value of a sorted copy of the sequence.
///
/// For an even count this is the mean of the two central values, computed
/// as `(a + b) / 2` in `T`. Sequences of one or two values are not sorted.
/// The input is never modified.
///
/// # Panics
/// Panics on an empty sequence.
pub fn median<T, I>(values: I) -> T
where
    T: Scalar,
    I: IntoIterator<Item = T>,
{
    let mut sorted: Vec<T> = values.into_iter().collect();
    let count = sorted.len();
    assert!(count > 0, "median of an empty sequence");
    if count > 2 {
        sorted.sort_by(ascending);
    }

    let upper = count / 2;
    if count % 2 == 0 {
        (sorted[upper - 1] + sorted[upper]) / (T::one() + T::one())
    } else {
        sorted[upper]
    }
}

/// Mean of squared deviations from the mean, divided by `count - ddof`.
///
/// The divisor `count - ddof` is computed on the count before it is
/// converted to `T`; `ddof == 0` gives the population variance and
/// `ddof == 1` the sample variance.
///
/// # Panics
/// Panics when `ddof > count`. For integer element types it also panics
/// when the divisor is zero, and for unsigned types when a value lies below
/// the (truncated) mean.
pub fn variance<T, I>(values: I, ddof: usize) -> T
where
    T: Scalar,
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator + Clone,
{
    let iter = values.into_iter();
    let count = iter.len();
    let center = mean(iter.clone());
    let squares = iter.fold(T::zero(), |acc, x| {
        let deviation = x - center;
        acc + deviation * deviation
    });
    let Some(divisor) = count.checked_sub(ddof) else {
        panic!("variance with ddof {ddof} of {count} values");
    };
    divide_by_count(squares, divisor)
}

/// Square root of [`variance`].
pub fn standard_deviation<T, I>(values: I, ddof: usize) -> T
where
    T: Scalar,
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator + Clone,
{
    variance(values, ddof).sqrt()
}

/// Smallest value; the first one wins among equals.
///
/// # Panics
/// Panics on an empty sequence.
pub fn min<T, I>(values: I) -> T
where
    T: Scalar,
    I: IntoIterator<Item = T>,
{
    let mut iter = values.into_iter();
    let Some(first) = iter.next() else {
        panic!("min of an empty sequence");
    };
    iter.fold(first, |best, x| if x < best { x } else { best })
}

/// Largest value; the first one wins among equals.
///
/// # Panics
/// Panics on an empty sequence.
pub fn max<T, I>(values: I) -> T
where
    T: Scalar,
    I: IntoIterator<Item = T>,
{
    let mut iter = values.into_iter();
    let Some(first) = iter.next() else {
        panic!("max of an empty sequence");
    };
    iter.fold(first, |best, x| if best < x { x } else { best })
}

/// `max - min`, found in a single pass.
///
/// # Panics
/// Panics on an empty sequence.
pub fn peak_to_peak<T, I>(values: I) -> T
where
    T: Scalar,
    I: IntoIterator<Item = T>,
{
    let mut iter = values.into_iter();
    let Some(first) = iter.next() else {
        panic!("peak_to_peak of an empty sequence");
    };
    let (low, high) = iter.fold((first, first), |(low, high), x| {
        (
            if x < low { x } else { low },
            if high < x { x } else { high },
        )
    });
    high - low
}

// ============================================================================
// Statistic tag
// ============================================================================

/// A reduction applied to a sequence, a row, a column or a whole matrix.
///
/// `Variance` and `StandardDeviation` carry their `ddof`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Sum,
    Mean,
    Median,
    Variance(usize),
    StandardDeviation(usize),
    SumProduct,
    PeakToPeak,
    Min,
    Max,
}

impl Statistic {
    /// Every statistic, with `ddof = 0` for the parameterized ones.
    pub const ALL: [Statistic; 9] = [
        Statistic::Sum,
        Statistic::Mean,
        Statistic::Median,
        Statistic::Variance(0),
        Statistic::StandardDeviation(0),
        Statistic::SumProduct,
        Statistic::PeakToPeak,
        Statistic::Min,
        Statistic::Max,
    ];

    /// Reduce `values` with this statistic.
    pub fn compute<T, I>(self, values: I) -> T
    where
        T: Scalar,
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator + Clone,
    {
        match self {
            Statistic::Sum => sum(values),
            Statistic::Mean => mean(values),
            Statistic::Median => median(values),
            Statistic::Variance(ddof) => variance(values, ddof),
            Statistic::StandardDeviation(ddof) => standard_deviation(values, ddof),
            Statistic::SumProduct => sum_product(values),
            Statistic::PeakToPeak => peak_to_peak(values),
            Statistic::Min => min(values),
            Statistic::Max => max(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sum_and_product_seeds() {
        assert_eq!(sum([1, 2, 3, 4]), 10);
        assert_eq!(sum_product([1, 2, 3, 4]), 24);
        assert_eq!(sum(Vec::<i32>::new()), 0);
        assert_eq!(sum_product(Vec::<i32>::new()), 1);
    }

    #[test]
    fn test_mean_truncates_for_integers() {
        assert_eq!(mean([1, 2]), 1);
        assert_eq!(mean([1.0, 2.0]), 1.5);
    }

    #[test]
    fn test_median_odd_and_even() {
        let odd = [5.0, 1.0, 3.0];
        let even = [4.0, 1.0, 3.0, 2.0];
        assert_eq!(median(odd.iter().copied()), 3.0);
        assert_eq!(median(even.iter().copied()), 2.5);
        assert_eq!(median([1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(odd, [5.0, 1.0, 3.0]);
        assert_eq!(even, [4.0, 1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_median_short_sequences() {
        assert_eq!(median([7]), 7);
        assert_eq!(median([9, 3]), 6);
        assert_eq!(median([3, 9]), 6);
    }

    #[test]
    #[should_panic(expected = "median of an empty sequence")]
    fn test_median_empty_panics() {
        median(Vec::<f64>::new());
    }

    #[test]
    fn test_variance_ddof() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(variance(values, 0), 4.0, epsilon = 1e-12);
        assert_relative_eq!(variance(values, 1), 32.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(standard_deviation(values, 0), 2.0, epsilon = 1e-12);
        assert_eq!(standard_deviation(values, 1), variance(values, 1).sqrt());
    }

    #[test]
    fn test_counts_wider_than_the_element_type() {
        let zeros = [0_u8; 256];
        assert_eq!(mean(zeros), 0);
        assert_eq!(variance(zeros, 0), 0);
        assert_eq!(variance(zeros, 1), 0);

        let mut one_max = [0_u8; 300];
        one_max[7] = u8::MAX;
        assert_eq!(mean(one_max), 0);

        assert_eq!(mean([-1_i8; 128]), -1);
        assert_eq!(mean([-1_i8; 127]), -1);
        let mut near_min = [-1_i8; 128];
        near_min[0] = 0;
        assert_eq!(mean(near_min), 0);
        assert_eq!(mean([1_i8; 127]), 1);
    }

    #[test]
    #[should_panic(expected = "variance with ddof 3 of 2 values")]
    fn test_variance_ddof_above_count_panics() {
        variance([1_u32, 2], 3);
    }

    #[test]
    fn test_min_max_peak_to_peak() {
        let values = [3, -2, 8, 0, 8, -2];
        assert_eq!(min(values), -2);
        assert_eq!(max(values), 8);
        assert_eq!(peak_to_peak(values), 10);
        assert_eq!(peak_to_peak([4]), 0);
    }

    #[test]
    fn test_statistic_compute_dispatch() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let expected = [10.0, 2.5, 2.5, 1.25, 1.25f64.sqrt(), 24.0, 3.0, 1.0, 4.0];
        for (stat, expected) in Statistic::ALL.into_iter().zip(expected) {
            assert_relative_eq!(stat.compute(values), expected, epsilon = 1e-12);
        }
        assert_relative_eq!(
            Statistic::Variance(1).compute(values),
            5.0 / 3.0,
            epsilon = 1e-12
        );
    }
}
