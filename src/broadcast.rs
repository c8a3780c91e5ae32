//! Broadcasting element-wise arithmetic between matrices of different shapes.
//!
//! Two shapes `(H1, W1)` and `(H2, W2)` broadcast to
//! `(max(H1, H2), max(W1, W2))` when, on each axis, the extents are equal or
//! one of them is 1. A unit axis is stretched by repeating its only element,
//! which is what [`Matrix::get_broadcast_value`] answers.
//!
//! Stable Rust cannot name `max(H1, H2)` in a return type, so the result
//! dimensions `RH` and `RW` are ordinary const parameters: the caller fixes
//! them (usually through a type annotation) and they are checked against the
//! broadcast shape before any element is computed.
//!
//! # Example
//!
//! ```rust
//! use strided_matrix::{multiplies, Matrix};
//!
//! let column = Matrix::<i32, 3, 1>::from_flat([1, 2, 3]);
//! let row = Matrix::<i32, 1, 2>::from_flat([10, 100]);
//!
//! let outer: Matrix<i32, 3, 2> = multiplies(&column, &row).unwrap();
//! assert_eq!(outer.data(), &[10, 100, 20, 200, 30, 300]);
//! ```

use crate::{Matrix, MatrixError, Result, Scalar};

// ============================================================================
// Shape resolution
// ============================================================================

/// Compute the broadcast shape of two operand shapes.
///
/// # Errors
/// Returns [`MatrixError::IncompatibleShapes`] if an axis has two different
/// extents neither of which is 1.
pub fn broadcast_shape(lhs: (usize, usize), rhs: (usize, usize)) -> Result<(usize, usize)> {
    let (h1, w1) = lhs;
    let (h2, w2) = rhs;
    let rh = h1.max(h2);
    let rw = w1.max(w2);

    let bad_h = (h1 != rh || (h2 != 1 && h2 != h1)) && (h2 != rh || (h1 != 1 && h1 != h2));
    let bad_w = (w1 != rw || (w2 != 1 && w2 != w1)) && (w2 != rw || (w1 != 1 && w1 != w2));
    if bad_h || bad_w {
        return Err(MatrixError::IncompatibleShapes { lhs, rhs });
    }

    log::trace!("broadcast {:?} with {:?} -> {:?}", lhs, rhs, (rh, rw));
    Ok((rh, rw))
}

/// Combine two matrices cell by cell under broadcasting.
///
/// Every result cell `(i, j)` is
/// `op(lhs.get_broadcast_value(i, j), rhs.get_broadcast_value(i, j))`.
///
/// # Errors
/// - [`MatrixError::IncompatibleShapes`] if the operand shapes do not broadcast
/// - [`MatrixError::ResultShapeMismatch`] if `(RH, RW)` is not the broadcast shape
pub fn broadcast_with<
    T,
    U,
    F,
    const H1: usize,
    const W1: usize,
    const H2: usize,
    const W2: usize,
    const RH: usize,
    const RW: usize,
>(
    lhs: &Matrix<T, H1, W1>,
    rhs: &Matrix<T, H2, W2>,
    op: F,
) -> Result<Matrix<U, RH, RW>>
where
    T: Copy,
    F: Fn(T, T) -> U,
{
    let expected = broadcast_shape((H1, W1), (H2, W2))?;
    if expected != (RH, RW) {
        return Err(MatrixError::ResultShapeMismatch {
            expected,
            actual: (RH, RW),
        });
    }
    Ok(Matrix::from_fn(|i, j| {
        op(*lhs.get_broadcast_value(i, j), *rhs.get_broadcast_value(i, j))
    }))
}

// ============================================================================
// Operation tags
// ============================================================================

/// The five broadcasting element-wise operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Plus,
    Minus,
    Multiplies,
    Divides,
    Modulus,
}

impl ArithmeticOp {
    /// All operations, in declaration order.
    pub const ALL: [ArithmeticOp; 5] = [
        ArithmeticOp::Plus,
        ArithmeticOp::Minus,
        ArithmeticOp::Multiplies,
        ArithmeticOp::Divides,
        ArithmeticOp::Modulus,
    ];

    /// Apply the operation to one pair of elements.
    #[inline]
    pub fn apply<T: Scalar>(self, a: T, b: T) -> T {
        match self {
            ArithmeticOp::Plus => a + b,
            ArithmeticOp::Minus => a - b,
            ArithmeticOp::Multiplies => a * b,
            ArithmeticOp::Divides => a / b,
            ArithmeticOp::Modulus => a % b,
        }
    }

    /// Apply the operation to two matrices under broadcasting.
    ///
    /// # Errors
    /// Same conditions as [`broadcast_with`].
    pub fn broadcast<
        T: Scalar,
        const H1: usize,
        const W1: usize,
        const H2: usize,
        const W2: usize,
        const RH: usize,
        const RW: usize,
    >(
        self,
        lhs: &Matrix<T, H1, W1>,
        rhs: &Matrix<T, H2, W2>,
    ) -> Result<Matrix<T, RH, RW>> {
        broadcast_with(lhs, rhs, |a, b| self.apply(a, b))
    }
}

// ============================================================================
// Value-returning operations
// ============================================================================

macro_rules! broadcast_fn {
    ($(#[$meta:meta])* $name:ident, $op:expr) => {
        $(#[$meta])*
        ///
        /// # Errors
        /// - [`MatrixError::IncompatibleShapes`] if the operand shapes do not broadcast
        /// - [`MatrixError::ResultShapeMismatch`] if `(RH, RW)` is not the broadcast shape
        pub fn $name<
            T: Scalar,
            const H1: usize,
            const W1: usize,
            const H2: usize,
            const W2: usize,
            const RH: usize,
            const RW: usize,
        >(
            lhs: &Matrix<T, H1, W1>,
            rhs: &Matrix<T, H2, W2>,
        ) -> Result<Matrix<T, RH, RW>> {
            $op.broadcast(lhs, rhs)
        }
    };
}

broadcast_fn!(
    /// Broadcasting element-wise sum.
    plus,
    ArithmeticOp::Plus
);
broadcast_fn!(
    /// Broadcasting element-wise difference.
    minus,
    ArithmeticOp::Minus
);
broadcast_fn!(
    /// Broadcasting element-wise (Hadamard) product.
    multiplies,
    ArithmeticOp::Multiplies
);
broadcast_fn!(
    /// Broadcasting element-wise quotient.
    divides,
    ArithmeticOp::Divides
);
broadcast_fn!(
    /// Broadcasting element-wise remainder.
    modulus,
    ArithmeticOp::Modulus
);
