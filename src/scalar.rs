//! Element type bounds for matrix arithmetic and statistics.

use std::fmt::Debug;

/// Numeric element type usable in every matrix operation.
///
/// On top of the arithmetic provided by [`num_traits::Num`], the statistics
/// layer converts element counts into the element type (for `mean` and
/// `variance`) and takes square roots (for `standard_deviation`).
///
/// Integer square roots truncate: `Scalar::sqrt(10_i32) == 3`.
pub trait Scalar: Copy + PartialOrd + Debug + num_traits::Num + num_traits::NumCast {
    /// Convert an element count into the element type, or `None` if the
    /// count is not representable: `u8::from_count(256) == None`.
    #[inline(always)]
    fn from_count(count: usize) -> Option<Self> {
        <Self as num_traits::NumCast>::from(count)
    }

    /// Square root in the element type.
    fn sqrt(self) -> Self;
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as $t
                }
            }
        )*
    };
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Ascending order over a partial order, with incomparable values (NaN) last.
///
/// This is a total order for every `Scalar`, so it is safe to hand to the
/// standard sorting routines.
pub(crate) fn ascending<T: PartialOrd>(a: &T, b: &T) -> std::cmp::Ordering {
    use std::cmp::Ordering;

    match a.partial_cmp(b) {
        Some(ordering) => ordering,
        None => {
            let a_nan = a.partial_cmp(a).is_none();
            let b_nan = b.partial_cmp(b).is_none();
            match (a_nan, b_nan) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                _ => Ordering::Equal,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn assert_scalar<T: Scalar>() {}

    #[test]
    fn test_standard_types() {
        assert_scalar::<f32>();
        assert_scalar::<f64>();
        assert_scalar::<i32>();
        assert_scalar::<i64>();
        assert_scalar::<u8>();
        assert_scalar::<usize>();
    }

    #[test]
    fn test_from_count() {
        assert_eq!(i32::from_count(6), Some(6));
        assert_eq!(f64::from_count(4), Some(4.0));
        assert_eq!(u8::from_count(255), Some(255));
        assert_eq!(u8::from_count(256), None);
        assert_eq!(i8::from_count(128), None);
    }

    #[test]
    fn test_sqrt_truncates_for_integers() {
        assert_eq!(Scalar::sqrt(16_i32), 4);
        assert_eq!(Scalar::sqrt(10_i32), 3);
        assert_eq!(Scalar::sqrt(2.25_f64), 1.5);
    }

    #[test]
    fn test_ascending_puts_nan_last() {
        assert_eq!(ascending(&1.0, &2.0), Ordering::Less);
        assert_eq!(ascending(&f64::NAN, &2.0), Ordering::Greater);
        assert_eq!(ascending(&2.0, &f64::NAN), Ordering::Less);
        assert_eq!(ascending(&f64::NAN, &f64::NAN), Ordering::Equal);

        let mut values = [3.0, f64::NAN, -1.0, 2.0];
        values.sort_by(ascending);
        assert_eq!(&values[..3], &[-1.0, 2.0, 3.0]);
        assert!(values[3].is_nan());
    }
}
