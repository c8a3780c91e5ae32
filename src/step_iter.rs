//! Strided cursors and views over contiguous sequences.
//!
//! A [`StepIterator`] is a position into a base sequence that moves by a
//! compile-time stride `STEP`. It knows the offsets of the first and last
//! logical elements of the sequence it walks, and clamps every overrun to
//! exactly one sentinel position on each side:
//!
//! ```text
//!   first - 1      first     first + STEP   ...      last      last + 1
//!   [before]  <-   [0]   ->  [1]            ...  ->  [n - 1] ->  [after]
//! ```
//!
//! The cursor owns nothing and borrows nothing: dereferencing takes the base
//! slice as an argument. [`StepSlice`] and [`StepSliceMut`] bundle a borrowed
//! slice with a pair of cursors and expose the strided sequence through the
//! standard iterator traits, which is how matrix columns are traversed.
//!
//! # Example
//!
//! ```rust
//! use strided_matrix::StepSlice;
//!
//! // Column 1 of a row-major 3x2 matrix.
//! let data = [1, 2, 3, 4, 5, 6];
//! let column: StepSlice<'_, i32, 2> = StepSlice::new(&data, 1, 5).unwrap();
//!
//! assert_eq!(column.len(), 3);
//! assert_eq!(column.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
//! ```

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{MatrixError, Result};

// ============================================================================
// StepIterator
// ============================================================================

/// Random-access cursor advancing by `STEP` positions at a time.
///
/// Equality and ordering compare the current position only, so two cursors
/// with different bounds at the same raw position are equal.
#[derive(Debug, Clone, Copy)]
pub struct StepIterator<const STEP: usize> {
    position: isize,
    first: isize,
    last: isize,
}

impl<const STEP: usize> StepIterator<STEP> {
    const STRIDE: isize = {
        assert!(STEP > 0, "StepIterator requires a non-zero step");
        STEP as isize
    };

    /// Create a cursor at `position` walking the sequence `[first, last]`.
    ///
    /// A position past `last` is normalized to the after-last sentinel
    /// `last + 1`, a position before `first` to the before-first sentinel
    /// `first - 1`.
    ///
    /// # Errors
    /// Returns [`MatrixError::MisalignedStepBounds`] if `last - first` is not
    /// a multiple of `STEP`, or if `first > last`.
    pub fn new(position: isize, first: isize, last: isize) -> Result<Self> {
        if last < first || (last - first) % Self::STRIDE != 0 {
            return Err(MatrixError::MisalignedStepBounds {
                first,
                last,
                step: STEP,
            });
        }
        Ok(Self::new_unchecked(position, first, last))
    }

    /// Create a cursor without validating the bounds.
    ///
    /// Callers must guarantee `first <= last` and `(last - first) % STEP == 0`.
    pub(crate) fn new_unchecked(position: isize, first: isize, last: isize) -> Self {
        let position = if position > last {
            last + 1
        } else if position < first {
            first - 1
        } else {
            position
        };
        Self {
            position,
            first,
            last,
        }
    }

    /// The stride of this cursor type.
    #[inline]
    pub const fn step() -> usize {
        STEP
    }

    /// Current raw position in the base sequence.
    #[inline]
    pub fn position(&self) -> isize {
        self.position
    }

    /// Raw position of the first logical element.
    #[inline]
    pub fn first(&self) -> isize {
        self.first
    }

    /// Raw position of the last logical element.
    #[inline]
    pub fn last(&self) -> isize {
        self.last
    }

    /// Returns true if the cursor sits on the before-first sentinel.
    #[inline]
    pub fn is_before_first(&self) -> bool {
        self.position < self.first
    }

    /// Returns true if the cursor sits on the after-last sentinel.
    #[inline]
    pub fn is_after_last(&self) -> bool {
        self.position > self.last
    }

    /// Element under the cursor.
    ///
    /// # Panics
    /// Panics if the cursor is outside `data`, which includes both sentinels
    /// when they fall outside the slice.
    #[inline]
    pub fn get<'a, T>(&self, data: &'a [T]) -> &'a T {
        &data[raw_index(self.position)]
    }

    /// Mutable element under the cursor.
    ///
    /// # Panics
    /// Same conditions as [`StepIterator::get`].
    #[inline]
    pub fn get_mut<'a, T>(&self, data: &'a mut [T]) -> &'a mut T {
        &mut data[raw_index(self.position)]
    }

    /// Element `n` strides away from the cursor, without clamping.
    ///
    /// # Panics
    /// Panics if `position + n * STEP` is outside `data`.
    #[inline]
    pub fn get_at<'a, T>(&self, data: &'a [T], n: isize) -> &'a T {
        &data[raw_index(self.position + n * Self::STRIDE)]
    }

    /// Mutable element `n` strides away from the cursor, without clamping.
    #[inline]
    pub fn get_at_mut<'a, T>(&self, data: &'a mut [T], n: isize) -> &'a mut T {
        &mut data[raw_index(self.position + n * Self::STRIDE)]
    }

    /// Advance by one stride and return the advanced cursor.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.advance(1)
    }

    /// Advance by one stride and return the cursor as it was before.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let before = *self;
        self.advance(1);
        before
    }

    /// Retreat by one stride and return the retreated cursor.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.advance(-1)
    }

    /// Retreat by one stride and return the cursor as it was before.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let before = *self;
        self.advance(-1);
        before
    }

    /// Move by `n` strides, clamping to the sentinels.
    ///
    /// A forward move from the before-first sentinel first snaps to `first`
    /// and consumes one unit of `n`; a backward move from the after-last
    /// sentinel snaps to `last` the same way. Stepping off a sentinel by
    /// exactly one therefore lands on the first (or last) real element.
    pub fn advance(&mut self, n: isize) -> &mut Self {
        let mut n = n;
        if n > 0 && self.position < self.first {
            self.position = self.first;
            n -= 1;
        } else if n < 0 && self.position > self.last {
            self.position = self.last;
            n += 1;
        }

        self.position += n * Self::STRIDE;

        if self.position > self.last {
            self.position = self.last + 1;
        } else if self.position < self.first {
            self.position = self.first - 1;
        }
        self
    }
}

#[inline]
fn raw_index(position: isize) -> usize {
    // Negative positions map past any slice length and fail the bounds check.
    position as usize
}

impl<const STEP: usize> AddAssign<isize> for StepIterator<STEP> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.advance(n);
    }
}

impl<const STEP: usize> SubAssign<isize> for StepIterator<STEP> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.advance(-n);
    }
}

impl<const STEP: usize> Add<isize> for StepIterator<STEP> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<const STEP: usize> Add<StepIterator<STEP>> for isize {
    type Output = StepIterator<STEP>;

    #[inline]
    fn add(self, iterator: StepIterator<STEP>) -> StepIterator<STEP> {
        iterator + self
    }
}

impl<const STEP: usize> Sub<isize> for StepIterator<STEP> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

/// Distance in strides, `ceil(raw / STEP)`.
///
/// The raw distance is not a multiple of `STEP` when exactly one operand is
/// a sentinel. A positive partial stride counts as a whole one; a negative
/// one is dropped, so `a - b` and `b - a` may differ by more than a sign.
impl<const STEP: usize> Sub for StepIterator<STEP> {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: Self) -> isize {
        let raw = self.position - rhs.position;
        let count = raw / Self::STRIDE;
        if raw > 0 && raw % Self::STRIDE != 0 {
            count + 1
        } else {
            count
        }
    }
}

impl<const STEP: usize> PartialEq for StepIterator<STEP> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<const STEP: usize> Eq for StepIterator<STEP> {}

impl<const STEP: usize> PartialOrd for StepIterator<STEP> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const STEP: usize> Ord for StepIterator<STEP> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.position.cmp(&other.position)
    }
}

// ============================================================================
// Strided views
// ============================================================================

fn check_bounds(first: usize, last: usize, len: usize) -> Result<()> {
    if last >= len {
        return Err(MatrixError::StepBoundsOutOfRange { first, last, len });
    }
    Ok(())
}

fn cursor_pair<const STEP: usize>(
    first: usize,
    last: usize,
) -> Result<(StepIterator<STEP>, StepIterator<STEP>)> {
    let (first, last) = (first as isize, last as isize);
    let begin = StepIterator::new(first, first, last)?;
    let end = StepIterator::new(last + 1, first, last)?;
    Ok((begin, end))
}

fn cursor_pair_unchecked<const STEP: usize>(
    first: usize,
    last: usize,
) -> (StepIterator<STEP>, StepIterator<STEP>) {
    let (first, last) = (first as isize, last as isize);
    (
        StepIterator::new_unchecked(first, first, last),
        StepIterator::new_unchecked(last + 1, first, last),
    )
}

/// Immutable strided view: every `STEP`-th element of `data` from `first`
/// through `last`.
#[derive(Debug)]
pub struct StepSlice<'a, T, const STEP: usize> {
    data: &'a [T],
    begin: StepIterator<STEP>,
    end: StepIterator<STEP>,
}

impl<T, const STEP: usize> Clone for StepSlice<'_, T, STEP> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const STEP: usize> Copy for StepSlice<'_, T, STEP> {}

impl<'a, T, const STEP: usize> StepSlice<'a, T, STEP> {
    /// Create a view over `data[first], data[first + STEP], ..., data[last]`.
    ///
    /// # Errors
    /// - [`MatrixError::StepBoundsOutOfRange`] if `last >= data.len()`
    /// - [`MatrixError::MisalignedStepBounds`] if `last - first` is not a
    ///   non-negative multiple of `STEP`
    pub fn new(data: &'a [T], first: usize, last: usize) -> Result<Self> {
        check_bounds(first, last, data.len())?;
        let (begin, end) = cursor_pair(first, last)?;
        Ok(Self { data, begin, end })
    }

    /// Create a view whose bounds are known to be valid.
    pub(crate) fn new_unchecked(data: &'a [T], first: usize, last: usize) -> Self {
        let (begin, end) = cursor_pair_unchecked(first, last);
        Self { data, begin, end }
    }

    /// Number of logical elements.
    #[inline]
    pub fn len(&self) -> usize {
        (self.end - self.begin) as usize
    }

    /// Returns true if the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Cursor on the first logical element.
    #[inline]
    pub fn begin(&self) -> StepIterator<STEP> {
        self.begin
    }

    /// Cursor on the after-last sentinel.
    #[inline]
    pub fn end(&self) -> StepIterator<STEP> {
        self.end
    }

    /// Logical element `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        if index < self.len() {
            Some(self.begin.get_at(self.data, index as isize))
        } else {
            None
        }
    }

    /// Iterate over the logical elements in order.
    #[inline]
    pub fn iter(&self) -> Iter<'a, T, STEP> {
        Iter {
            data: self.data,
            front: self.begin,
            back: self.end,
        }
    }

    /// Copy the logical elements into a vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'a, T, const STEP: usize> IntoIterator for StepSlice<'a, T, STEP> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, STEP>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const STEP: usize> IntoIterator for &StepSlice<'a, T, STEP> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, STEP>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Mutable strided view; see [`StepSlice`].
#[derive(Debug)]
pub struct StepSliceMut<'a, T, const STEP: usize> {
    data: &'a mut [T],
    begin: StepIterator<STEP>,
    end: StepIterator<STEP>,
}

impl<'a, T, const STEP: usize> StepSliceMut<'a, T, STEP> {
    /// Create a mutable view over `data[first], data[first + STEP], ..., data[last]`.
    ///
    /// # Errors
    /// Same conditions as [`StepSlice::new`].
    pub fn new(data: &'a mut [T], first: usize, last: usize) -> Result<Self> {
        check_bounds(first, last, data.len())?;
        let (begin, end) = cursor_pair(first, last)?;
        Ok(Self { data, begin, end })
    }

    pub(crate) fn new_unchecked(data: &'a mut [T], first: usize, last: usize) -> Self {
        let (begin, end) = cursor_pair_unchecked(first, last);
        Self { data, begin, end }
    }

    /// Number of logical elements.
    #[inline]
    pub fn len(&self) -> usize {
        (self.end - self.begin) as usize
    }

    /// Returns true if the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Reborrow as an immutable view.
    pub fn as_step_slice(&self) -> StepSlice<'_, T, STEP> {
        StepSlice {
            data: &*self.data,
            begin: self.begin,
            end: self.end,
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            Some(self.begin.get_at(&*self.data, index as isize))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            Some(self.begin.get_at_mut(self.data, index as isize))
        } else {
            None
        }
    }

    /// Swap logical elements `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) {
        let len = self.len();
        assert!(a < len && b < len, "swap index out of range for step slice of length {len}");
        let raw_a = raw_index((self.begin + a as isize).position());
        let raw_b = raw_index((self.begin + b as isize).position());
        self.data.swap(raw_a, raw_b);
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T, STEP> {
        Iter {
            data: &*self.data,
            front: self.begin,
            back: self.end,
        }
    }

    /// Iterate mutably over the logical elements in order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, STEP> {
        let len = self.len();
        let start = raw_index(self.begin.position());
        IterMut {
            tail: &mut self.data[start..],
            remaining: len,
        }
    }

    /// Overwrite every logical element with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for element in self.iter_mut() {
            *element = value.clone();
        }
    }

    /// Overwrite every logical element with successive calls to `generator`.
    pub fn fill_with<G>(&mut self, mut generator: G)
    where
        G: FnMut() -> T,
    {
        for element in self.iter_mut() {
            *element = generator();
        }
    }

    /// Sort the logical elements with `compare`.
    ///
    /// The elements are gathered into a scratch buffer, sorted there and
    /// written back in order.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut scratch: Vec<T> = self.iter().cloned().collect();
        scratch.sort_by(compare);
        for (element, value) in self.iter_mut().zip(scratch) {
            *element = value;
        }
    }
}

// ============================================================================
// Iterators
// ============================================================================

/// Immutable iterator over a [`StepSlice`], driven by a pair of cursors.
#[derive(Debug)]
pub struct Iter<'a, T, const STEP: usize> {
    data: &'a [T],
    front: StepIterator<STEP>,
    back: StepIterator<STEP>,
}

impl<T, const STEP: usize> Clone for Iter<'_, T, STEP> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T, const STEP: usize> Iterator for Iter<'a, T, STEP> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let cursor = self.front.post_increment();
        Some(cursor.get(self.data))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.back - self.front) as usize;
        (remaining, Some(remaining))
    }
}

impl<T, const STEP: usize> DoubleEndedIterator for Iter<'_, T, STEP> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.decrement();
        Some(self.back.get(self.data))
    }
}

impl<T, const STEP: usize> ExactSizeIterator for Iter<'_, T, STEP> {}

impl<T, const STEP: usize> FusedIterator for Iter<'_, T, STEP> {}

/// Mutable iterator over a [`StepSliceMut`].
///
/// Holds the unvisited tail of the base slice, starting at the next element,
/// and splits one element off per step.
#[derive(Debug)]
pub struct IterMut<'a, T, const STEP: usize> {
    tail: &'a mut [T],
    remaining: usize,
}

impl<'a, T, const STEP: usize> Iterator for IterMut<'a, T, STEP> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let tail = std::mem::take(&mut self.tail);
        let (head, rest) = tail.split_first_mut()?;
        let skip = if self.remaining == 0 {
            rest.len()
        } else {
            (STEP - 1).min(rest.len())
        };
        self.tail = &mut rest[skip..];
        Some(head)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const STEP: usize> ExactSizeIterator for IterMut<'_, T, STEP> {}

impl<T, const STEP: usize> FusedIterator for IterMut<'_, T, STEP> {}
