//! Compile-time sized dense matrices with broadcasting arithmetic.
//!
//! This crate provides [`Matrix<T, H, W>`], a fixed-size row-major 2-D
//! container whose height and width are const generics, together with
//! NumPy-style broadcasting arithmetic, per-row and per-column statistics,
//! and the structural operations of a small linear-algebra toolkit.
//!
//! # Core Types
//!
//! - [`Matrix`]: Owned `H x W` matrix stored inline as `[[T; W]; H]`
//! - [`StepIterator`]: Strided cursor with clamped sentinel positions
//! - [`StepSlice`] / [`StepSliceMut`]: Strided views used to walk matrix columns
//! - [`Scalar`]: Element type bound shared by arithmetic and statistics
//!
//! # Primary API
//!
//! ## Arithmetic
//!
//! - [`plus`], [`minus`], [`multiplies`], [`divides`], [`modulus`]: Broadcasting
//!   element-wise operations between matrices of compatible shapes
//! - [`plus_scalar`] and friends: Element-wise operations with a scalar
//! - [`negate`]: Element-wise sign flip
//! - [`multiplies_matrix`]: Matrix product
//! - Operators `+ - * / %` (and their `*Assign` forms) for same-shape
//!   matrices and for scalars, unary `-`
//!
//! ## Statistics
//!
//! - [`Statistic`]: Reduction tag (sum, mean, median, variance, ...)
//! - [`Matrix::statistic`], [`Matrix::statistic_columns`], [`Matrix::statistic_rows`]
//! - Shortcut methods (`sum`, `mean_columns`, `variance_rows`, ...) and the
//!   matching free functions in [`reduce`]
//! - Sequence kernels in [`statistic`]
//!
//! ## Structure
//!
//! - [`transpose`], [`Matrix::sub_matrix`], [`horizontal_concatenate`], [`vertical_concatenate`]
//! - `fill`, `fill_row`, `fill_column` and their generator variants
//! - `sort`, `sort_rows`, `sort_columns`, [`apply`]
//!
//! # Example
//!
//! ```rust
//! use strided_matrix::{plus, Matrix};
//!
//! let matrix = Matrix::<i32, 3, 2>::from_flat([1, 2, 3, 4, 5, 6]);
//! let row = Matrix::<i32, 1, 2>::from_flat([1, 2]);
//!
//! // The row is broadcast over every row of the 3x2 matrix.
//! let result: Matrix<i32, 3, 2> = plus(&matrix, &row).unwrap();
//! assert_eq!(result.data(), &[2, 4, 4, 6, 6, 8]);
//!
//! assert_eq!(matrix.sum_columns().data(), &[9, 12]);
//! assert_eq!(matrix.transpose().data(), &[1, 3, 5, 2, 4, 6]);
//! ```
//!
//! # Checked and unchecked access
//!
//! [`Matrix::at`] validates each index against its own axis and returns
//! [`MatrixError`]; indexing with `matrix[(i, j)]` computes the row-major
//! offset `i * W + j` directly, and [`Matrix::get_unchecked`] skips every
//! check.

mod arithmetic;
pub mod broadcast;
mod fill;
mod linalg;
mod map;
mod matrix;
mod print;
#[cfg(feature = "random")]
mod random;
pub mod reduce;
mod scalar;
mod sort;
pub mod statistic;
pub mod step_iter;
mod structure;

// ============================================================================
// Core types
// ============================================================================
pub use matrix::Matrix;
pub use scalar::Scalar;
pub use step_iter::{Iter, IterMut, StepIterator, StepSlice, StepSliceMut};

// ============================================================================
// Arithmetic
// ============================================================================
pub use arithmetic::{
    divides_scalar, minus_scalar, modulus_scalar, multiplies_scalar, negate, plus_scalar,
};
pub use broadcast::{
    broadcast_shape, broadcast_with, divides, minus, modulus, multiplies, plus, ArithmeticOp,
};
pub use linalg::multiplies_matrix;

// ============================================================================
// Statistics
// ============================================================================
pub use statistic::Statistic;

// ============================================================================
// Structural operations
// ============================================================================
pub use map::apply;
pub use sort::{sort, sort_by, sort_columns, sort_columns_by, sort_rows, sort_rows_by};
pub use structure::{horizontal_concatenate, transpose, vertical_concatenate};

// ============================================================================
// Presentation and generators
// ============================================================================
pub use print::{MatrixDisplay, PrintOptions};
#[cfg(feature = "random")]
pub use random::UniformRandom;

// ============================================================================
// Error types
// ============================================================================

/// Failure classes reported by [`MatrixError::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument violates a precondition (misaligned bounds, incompatible shapes).
    InvalidArgument,
    /// An index or extent reaches outside the matrix or sequence.
    OutOfRange,
}

/// Errors that can occur during matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Step cursor bounds are not a non-negative multiple of the step apart.
    #[error("step bounds [{first}, {last}] are not aligned to step {step}")]
    MisalignedStepBounds {
        first: isize,
        last: isize,
        step: usize,
    },

    /// Step view bounds reach past the end of the base sequence.
    #[error("step bounds [{first}, {last}] exceed sequence of length {len}")]
    StepBoundsOutOfRange {
        first: usize,
        last: usize,
        len: usize,
    },

    /// Operand shapes cannot be broadcast together.
    #[error("incompatible shapes for broadcasting: {lhs:?} vs {rhs:?}")]
    IncompatibleShapes {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// The requested result type does not have the broadcast shape.
    #[error("result shape {actual:?} does not match broadcast shape {expected:?}")]
    ResultShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// A flat buffer does not hold exactly `H * W` elements.
    #[error("expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A sampling range is empty (`minimum >= maximum`).
    #[error("invalid sampling range: minimum must be less than maximum")]
    EmptyRange,

    /// Row index past the matrix height.
    #[error("height index {index} out of range for height {height}")]
    HeightOutOfRange { index: usize, height: usize },

    /// Column index past the matrix width.
    #[error("width index {index} out of range for width {width}")]
    WidthOutOfRange { index: usize, width: usize },

    /// Sub-matrix extent reaches outside the source matrix.
    #[error(
        "sub matrix {sub_height}x{sub_width} at ({start_height}, {start_width}) \
         exceeds {height}x{width} matrix"
    )]
    SubMatrixOutOfRange {
        start_height: usize,
        start_width: usize,
        sub_height: usize,
        sub_width: usize,
        height: usize,
        width: usize,
    },
}

impl MatrixError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatrixError::MisalignedStepBounds { .. }
            | MatrixError::IncompatibleShapes { .. }
            | MatrixError::ResultShapeMismatch { .. }
            | MatrixError::LengthMismatch { .. }
            | MatrixError::EmptyRange => ErrorKind::InvalidArgument,
            MatrixError::StepBoundsOutOfRange { .. }
            | MatrixError::HeightOutOfRange { .. }
            | MatrixError::WidthOutOfRange { .. }
            | MatrixError::SubMatrixOutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
