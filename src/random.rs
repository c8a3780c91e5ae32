//! Uniform random generator for the `fill_*_generator` family.

use std::cmp::Ordering;
use std::fmt;

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{MatrixError, Result};

/// Values drawn uniformly from `[minimum, maximum)`.
///
/// Usable as a generator closure through [`UniformRandom::generate`] or as an
/// endless [`Iterator`].
///
/// # Example
///
/// ```rust
/// use strided_matrix::{Matrix, UniformRandom};
///
/// let mut random = UniformRandom::with_seed(0.0, 1.0, 42).unwrap();
/// let mut m = Matrix::<f64, 4, 4>::zeros();
/// m.fill_generator(|| random.generate());
/// assert!(m.data().iter().all(|&x| (0.0..1.0).contains(&x)));
/// ```
pub struct UniformRandom<T: SampleUniform> {
    minimum: T,
    maximum: T,
    distribution: Uniform<T>,
    rng: StdRng,
}

impl<T> UniformRandom<T>
where
    T: SampleUniform + PartialOrd + Copy,
{
    /// Generator seeded from operating-system entropy.
    ///
    /// # Errors
    /// Returns [`MatrixError::EmptyRange`] unless `minimum < maximum`.
    pub fn new(minimum: T, maximum: T) -> Result<Self> {
        Self::from_rng(minimum, maximum, StdRng::from_entropy())
    }

    /// Deterministic generator: equal seeds yield equal sequences.
    ///
    /// # Errors
    /// Returns [`MatrixError::EmptyRange`] unless `minimum < maximum`.
    pub fn with_seed(minimum: T, maximum: T, seed: u64) -> Result<Self> {
        Self::from_rng(minimum, maximum, StdRng::seed_from_u64(seed))
    }

    fn from_rng(minimum: T, maximum: T, rng: StdRng) -> Result<Self> {
        if minimum.partial_cmp(&maximum) != Some(Ordering::Less) {
            return Err(MatrixError::EmptyRange);
        }
        Ok(Self {
            minimum,
            maximum,
            distribution: Uniform::new(minimum, maximum),
            rng,
        })
    }

    /// Lower bound (inclusive).
    pub fn minimum(&self) -> T {
        self.minimum
    }

    /// Upper bound (exclusive).
    pub fn maximum(&self) -> T {
        self.maximum
    }

    /// Draw the next value.
    #[inline]
    pub fn generate(&mut self) -> T {
        self.distribution.sample(&mut self.rng)
    }
}

impl<T> Iterator for UniformRandom<T>
where
    T: SampleUniform + PartialOrd + Copy,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        Some(self.generate())
    }
}

impl<T: SampleUniform + fmt::Debug> fmt::Debug for UniformRandom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniformRandom")
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .finish_non_exhaustive()
    }
}
