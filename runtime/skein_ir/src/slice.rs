//! Slice descriptors.
//!
//! A slice descriptor knows how to enumerate the valid logical indices it
//! selects from a sequence of a given length. Sequence operations only see
//! the index stream, so any descriptor implementing [`SliceIndices`] can be
//! used for step-aware slicing.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

/// Error from resolving a slice against a length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// The step was zero.
    ZeroStep,
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroStep => f.write_str("slice step cannot be zero"),
        }
    }
}

impl std::error::Error for SliceError {}

/// Enumerates the logical indices a slice selects.
pub trait SliceIndices {
    /// Iterator over selected indices, in selection order.
    type Iter: Iterator<Item = usize>;

    /// Resolve against a sequence of `len` logical characters.
    fn indices(&self, len: usize) -> Result<Self::Iter, SliceError>;
}

/// `start:stop:step` with optional bounds. Negatives count from the end and
/// bounds clamp to the sequence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SliceRange {
    pub start: Option<i64>,
    pub stop: Option<i64>,
    pub step: Option<i64>,
}

impl SliceRange {
    pub fn new(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        SliceRange { start, stop, step }
    }

    /// Resolve to concrete `(start, stop, step)` for a sequence of `len`.
    ///
    /// For a negative step, `stop` may be `-1` meaning "before index 0".
    pub fn resolve(&self, len: usize) -> Result<(i64, i64, i64), SliceError> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(SliceError::ZeroStep);
        }
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };

        let clamp = |bound: Option<i64>, default: i64| match bound {
            None => default,
            Some(b) if b < 0 => (b.saturating_add(len)).max(lower),
            Some(b) => b.min(upper),
        };
        let start = clamp(self.start, if step < 0 { upper } else { lower });
        let stop = clamp(self.stop, if step < 0 { lower } else { upper });
        Ok((start, stop, step))
    }

    /// The selected range when the step is 1, for contiguous fast paths.
    pub fn contiguous(&self, len: usize) -> Option<Range<usize>> {
        let (start, stop, step) = self.resolve(len).ok()?;
        if step != 1 {
            return None;
        }
        let start = usize::try_from(start).ok()?;
        let stop = usize::try_from(stop).ok()?.max(start);
        Some(start..stop)
    }
}

impl SliceIndices for SliceRange {
    type Iter = SliceIter;

    fn indices(&self, len: usize) -> Result<SliceIter, SliceError> {
        let (start, stop, step) = self.resolve(len)?;
        let span = if step > 0 { stop - start } else { start - stop };
        let remaining = if span > 0 {
            (span.unsigned_abs() - 1) / step.unsigned_abs() + 1
        } else {
            0
        };
        Ok(SliceIter {
            next: start,
            step,
            remaining: usize::try_from(remaining).unwrap_or(0),
        })
    }
}

impl<T: SliceIndices> SliceIndices for &T {
    type Iter = T::Iter;

    fn indices(&self, len: usize) -> Result<T::Iter, SliceError> {
        (**self).indices(len)
    }
}

/// Index stream produced by [`SliceRange`].
#[derive(Clone, Debug)]
pub struct SliceIter {
    next: i64,
    step: i64,
    remaining: usize,
}

impl Iterator for SliceIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.next;
        self.next = self.next.saturating_add(self.step);
        usize::try_from(current).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SliceIter {}
impl FusedIterator for SliceIter {}
