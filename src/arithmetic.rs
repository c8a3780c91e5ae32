//! Same-shape and scalar element-wise arithmetic.
//!
//! The named methods are the implementation; the operator impls at the
//! bottom of this file forward to them.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::{Matrix, Scalar};

impl<T: Scalar, const H: usize, const W: usize> Matrix<T, H, W> {
    #[inline]
    fn zip_assign<F>(&mut self, other: &Self, f: F) -> &mut Self
    where
        F: Fn(T, T) -> T,
    {
        for (dst, &src) in self.data_mut().iter_mut().zip(other.data()) {
            *dst = f(*dst, src);
        }
        self
    }

    #[inline]
    fn scalar_assign<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(T) -> T,
    {
        for dst in self.data_mut() {
            *dst = f(*dst);
        }
        self
    }

    /// Element-wise `self += other`.
    pub fn plus(&mut self, other: &Self) -> &mut Self {
        self.zip_assign(other, |a, b| a + b)
    }

    /// Element-wise `self -= other`.
    pub fn minus(&mut self, other: &Self) -> &mut Self {
        self.zip_assign(other, |a, b| a - b)
    }

    /// Element-wise (Hadamard) `self *= other`.
    ///
    /// For the matrix product see [`Matrix::multiplies_matrix`].
    pub fn multiplies(&mut self, other: &Self) -> &mut Self {
        self.zip_assign(other, |a, b| a * b)
    }

    /// Element-wise `self /= other`.
    ///
    /// # Panics
    /// Integer element types panic on division by zero.
    pub fn divides(&mut self, other: &Self) -> &mut Self {
        self.zip_assign(other, |a, b| a / b)
    }

    /// Element-wise `self %= other`.
    ///
    /// # Panics
    /// Integer element types panic on a zero divisor.
    pub fn modulus(&mut self, other: &Self) -> &mut Self {
        self.zip_assign(other, |a, b| a % b)
    }

    /// Add `value` to every element.
    pub fn plus_scalar(&mut self, value: T) -> &mut Self {
        self.scalar_assign(|a| a + value)
    }

    /// Subtract `value` from every element.
    pub fn minus_scalar(&mut self, value: T) -> &mut Self {
        self.scalar_assign(|a| a - value)
    }

    /// Multiply every element by `value`.
    pub fn multiplies_scalar(&mut self, value: T) -> &mut Self {
        self.scalar_assign(|a| a * value)
    }

    /// Divide every element by `value`.
    pub fn divides_scalar(&mut self, value: T) -> &mut Self {
        self.scalar_assign(|a| a / value)
    }

    /// Replace every element by its remainder modulo `value`.
    pub fn modulus_scalar(&mut self, value: T) -> &mut Self {
        self.scalar_assign(|a| a % value)
    }

    /// Flip the sign of every element.
    pub fn negate(&mut self) -> &mut Self
    where
        T: Neg<Output = T>,
    {
        self.scalar_assign(|a| -a)
    }
}

// ============================================================================
// Value-returning scalar forms
// ============================================================================

/// `matrix + value`, element-wise.
pub fn plus_scalar<T: Scalar, const H: usize, const W: usize>(
    matrix: &Matrix<T, H, W>,
    value: T,
) -> Matrix<T, H, W> {
    let mut result = *matrix;
    result.plus_scalar(value);
    result
}

/// `matrix - value`, element-wise.
pub fn minus_scalar<T: Scalar, const H: usize, const W: usize>(
    matrix: &Matrix<T, H, W>,
    value: T,
) -> Matrix<T, H, W> {
    let mut result = *matrix;
    result.minus_scalar(value);
    result
}

/// `matrix * value`, element-wise.
pub fn multiplies_scalar<T: Scalar, const H: usize, const W: usize>(
    matrix: &Matrix<T, H, W>,
    value: T,
) -> Matrix<T, H, W> {
    let mut result = *matrix;
    result.multiplies_scalar(value);
    result
}

/// `matrix / value`, element-wise.
pub fn divides_scalar<T: Scalar, const H: usize, const W: usize>(
    matrix: &Matrix<T, H, W>,
    value: T,
) -> Matrix<T, H, W> {
    let mut result = *matrix;
    result.divides_scalar(value);
    result
}

/// `matrix % value`, element-wise.
pub fn modulus_scalar<T: Scalar, const H: usize, const W: usize>(
    matrix: &Matrix<T, H, W>,
    value: T,
) -> Matrix<T, H, W> {
    let mut result = *matrix;
    result.modulus_scalar(value);
    result
}

/// `-matrix`, element-wise.
pub fn negate<T, const H: usize, const W: usize>(matrix: &Matrix<T, H, W>) -> Matrix<T, H, W>
where
    T: Scalar + Neg<Output = T>,
{
    let mut result = *matrix;
    result.negate();
    result
}

// ============================================================================
// Operators
// ============================================================================

macro_rules! impl_matrix_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $method:ident) => {
        impl<T: Scalar, const H: usize, const W: usize> $OpAssign<Matrix<T, H, W>>
            for Matrix<T, H, W>
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Matrix<T, H, W>) {
                self.$method(&rhs);
            }
        }

        impl<T: Scalar, const H: usize, const W: usize> $OpAssign<&Matrix<T, H, W>>
            for Matrix<T, H, W>
        {
            #[inline]
            fn $op_assign(&mut self, rhs: &Matrix<T, H, W>) {
                self.$method(rhs);
            }
        }

        impl<T: Scalar, const H: usize, const W: usize> $Op<Matrix<T, H, W>> for Matrix<T, H, W> {
            type Output = Matrix<T, H, W>;

            #[inline]
            fn $op(mut self, rhs: Matrix<T, H, W>) -> Matrix<T, H, W> {
                self.$method(&rhs);
                self
            }
        }

        impl<T: Scalar, const H: usize, const W: usize> $Op<&Matrix<T, H, W>> for Matrix<T, H, W> {
            type Output = Matrix<T, H, W>;

            #[inline]
            fn $op(mut self, rhs: &Matrix<T, H, W>) -> Matrix<T, H, W> {
                self.$method(rhs);
                self
            }
        }

        impl<T: Scalar, const H: usize, const W: usize> $Op<&Matrix<T, H, W>> for &Matrix<T, H, W> {
            type Output = Matrix<T, H, W>;

            #[inline]
            fn $op(self, rhs: &Matrix<T, H, W>) -> Matrix<T, H, W> {
                let mut result = *self;
                result.$method(rhs);
                result
            }
        }
    };
}

impl_matrix_op!(Add, add, AddAssign, add_assign, plus);
impl_matrix_op!(Sub, sub, SubAssign, sub_assign, minus);
impl_matrix_op!(Mul, mul, MulAssign, mul_assign, multiplies);
impl_matrix_op!(Div, div, DivAssign, div_assign, divides);
impl_matrix_op!(Rem, rem, RemAssign, rem_assign, modulus);

// Scalar right-hand sides are implemented per primitive type: a blanket
// `impl<T> Add<T> for Matrix<T, H, W>` would overlap the matrix impls above.
macro_rules! impl_scalar_op {
    ($t:ty, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $method:ident) => {
        impl<const H: usize, const W: usize> $OpAssign<$t> for Matrix<$t, H, W> {
            #[inline]
            fn $op_assign(&mut self, rhs: $t) {
                self.$method(rhs);
            }
        }

        impl<const H: usize, const W: usize> $Op<$t> for Matrix<$t, H, W> {
            type Output = Matrix<$t, H, W>;

            #[inline]
            fn $op(mut self, rhs: $t) -> Matrix<$t, H, W> {
                self.$method(rhs);
                self
            }
        }

        impl<const H: usize, const W: usize> $Op<$t> for &Matrix<$t, H, W> {
            type Output = Matrix<$t, H, W>;

            #[inline]
            fn $op(self, rhs: $t) -> Matrix<$t, H, W> {
                let mut result = *self;
                result.$method(rhs);
                result
            }
        }
    };
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl_scalar_op!($t, Add, add, AddAssign, add_assign, plus_scalar);
            impl_scalar_op!($t, Sub, sub, SubAssign, sub_assign, minus_scalar);
            impl_scalar_op!($t, Mul, mul, MulAssign, mul_assign, multiplies_scalar);
            impl_scalar_op!($t, Div, div, DivAssign, div_assign, divides_scalar);
            impl_scalar_op!($t, Rem, rem, RemAssign, rem_assign, modulus_scalar);
        )*
    };
}

impl_scalar_ops!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T, const H: usize, const W: usize> Neg for Matrix<T, H, W>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Matrix<T, H, W>;

    #[inline]
    fn neg(mut self) -> Matrix<T, H, W> {
        self.negate();
        self
    }
}

impl<T, const H: usize, const W: usize> Neg for &Matrix<T, H, W>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Matrix<T, H, W>;

    #[inline]
    fn neg(self) -> Matrix<T, H, W> {
        negate(self)
    }
}
