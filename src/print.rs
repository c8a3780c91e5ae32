//! Fixed-width text rendering.
//!
//! Each row is printed as `"| "`, the elements right-aligned in fields of
//! [`PrintOptions::width`] characters with [`PrintOptions::precision`]
//! fractional digits and separated by single spaces, then `" |"` and a
//! newline:
//!
//! ```text
//! |  1.0000  2.0000 |
//! |  3.0000  4.0000 |
//! ```
//!
//! The precision only affects floating-point elements.

use std::fmt;

use crate::Matrix;

/// Field layout for [`MatrixDisplay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Minimum width of each field.
    pub width: usize,
    /// Digits after the decimal point.
    pub precision: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            width: 7,
            precision: 4,
        }
    }
}

impl PrintOptions {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// [`fmt::Display`] adapter returned by [`Matrix::display_with`].
#[derive(Debug, Clone, Copy)]
pub struct MatrixDisplay<'a, T, const H: usize, const W: usize> {
    matrix: &'a Matrix<T, H, W>,
    options: PrintOptions,
}

impl<T, const H: usize, const W: usize> Matrix<T, H, W> {
    /// Render with custom field options.
    ///
    /// ```rust
    /// use strided_matrix::{Matrix, PrintOptions};
    ///
    /// let m = Matrix::<f64, 1, 2>::from_flat([0.5, -1.25]);
    /// let text = m.display_with(PrintOptions::default().with_precision(2)).to_string();
    /// assert_eq!(text, "|    0.50   -1.25 |\n");
    /// ```
    pub fn display_with(&self, options: PrintOptions) -> MatrixDisplay<'_, T, H, W> {
        MatrixDisplay {
            matrix: self,
            options,
        }
    }
}

impl<T: fmt::Display, const H: usize, const W: usize> fmt::Display for MatrixDisplay<'_, T, H, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let PrintOptions { width, precision } = self.options;
        for row in self.matrix.rows() {
            f.write_str("|")?;
            for value in row {
                write!(f, " {value:>width$.precision$}")?;
            }
            f.write_str(" |\n")?;
        }
        Ok(())
    }
}

impl<T: fmt::Display, const H: usize, const W: usize> fmt::Display for Matrix<T, H, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(PrintOptions::default()), f)
    }
}
