//! Sequence algorithms shared by `Text` and `Bytes`.
//!
//! Each operation is implemented once, generically over [`Sequence`], and
//! exposed through the blanket extension trait [`SequenceOps`]. Public
//! arguments and results use logical character offsets; the helpers here
//! translate to storage offsets through the codepoint index.
//!
//! "Not found" results stay sentinels (`-1` / `None`); hard failures are
//! [`StrError`](crate::StrError)s.

mod case;
mod layout;
mod replace;
mod search;
mod split;
mod strip;

use skein_ir::{SliceIndices, SliceRange};
use std::ops::Range;

use crate::errors::{
    index_out_of_range, index_overflow, join_item, negative_repeat, substring_not_found,
    StrResult,
};
use crate::sequence::Sequence;
use crate::value::Value;

/// Shared sequence operations, available on every [`Sequence`].
pub trait SequenceOps: Sequence {
    /// Number of logical characters.
    fn len(&self) -> usize {
        self.codepoint_index().logical_len(self.units().len())
    }

    fn is_empty(&self) -> bool {
        self.units().is_empty()
    }

    /// Element at `index`; negative indices count from the end.
    fn get(&self, index: i64) -> StrResult<Self::Item> {
        let not_found = || index_out_of_range(Self::KIND.english_name());
        let logical = normalize_index(index, self.len()).ok_or_else(not_found)?;
        let storage = self
            .codepoint_index()
            .char_range(logical, self.units().len())
            .ok_or_else(not_found)?;
        Ok(self.make_item(storage))
    }

    /// Contiguous slice `[start, stop)` with clamped, end-relative bounds.
    fn slice(&self, start: Option<i64>, stop: Option<i64>) -> Self {
        let logical = SliceRange::new(start, stop, None)
            .contiguous(self.len())
            .unwrap_or(0..0);
        subsequence(self, storage_range(self, logical))
    }

    /// Concatenate the elements selected by a slice descriptor.
    fn slice_with<I: SliceIndices>(&self, indices: &I) -> StrResult<Self> {
        let index = self.codepoint_index();
        let units = self.units();
        let mut out = Vec::new();
        for logical in indices.indices(self.len())? {
            if let Some(range) = index.char_range(logical, units.len()) {
                out.extend_from_slice(&units[range]);
            }
        }
        Ok(Self::from_units(out))
    }

    fn concat(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.units().len() + other.units().len());
        out.extend_from_slice(self.units());
        out.extend_from_slice(other.units());
        Self::from_units(out)
    }

    /// `count` copies back to back. Negative counts are rejected.
    fn repeat(&self, count: i64) -> StrResult<Self> {
        let times = usize::try_from(count).map_err(|_| negative_repeat(count))?;
        let units = self.units();
        if times == 0 || units.is_empty() {
            return Ok(Self::from_units(Vec::new()));
        }
        let total = units.len().checked_mul(times).ok_or_else(index_overflow)?;
        let mut out = alloc_units(total)?;
        for _ in 0..times {
            out.extend_from_slice(units);
        }
        Ok(Self::from_units(out))
    }

    fn contains(&self, needle: &Self) -> bool {
        search::find(self, needle.units(), None, None, false).is_some()
    }

    /// Lowest logical offset of `needle` within `[start, end)`, or `-1`.
    fn find(&self, needle: &Self, start: Option<i64>, end: Option<i64>) -> i64 {
        sentinel(search::find(self, needle.units(), start, end, false))
    }

    /// Highest logical offset of `needle` within `[start, end)`, or `-1`.
    fn rfind(&self, needle: &Self, start: Option<i64>, end: Option<i64>) -> i64 {
        sentinel(search::find(self, needle.units(), start, end, true))
    }

    /// Like [`find`](Self::find), but a miss is a `ValueError`.
    fn index(&self, needle: &Self, start: Option<i64>, end: Option<i64>) -> StrResult<usize> {
        search::find(self, needle.units(), start, end, false).ok_or_else(substring_not_found)
    }

    fn rindex(&self, needle: &Self, start: Option<i64>, end: Option<i64>) -> StrResult<usize> {
        search::find(self, needle.units(), start, end, true).ok_or_else(substring_not_found)
    }

    /// Non-overlapping occurrences within `[start, end)`.
    fn count(&self, needle: &Self, start: Option<i64>, end: Option<i64>) -> usize {
        search::count(self, needle.units(), start, end)
    }

    fn startswith(&self, prefix: &Self) -> bool {
        search::starts_with(self, prefix.units())
    }

    fn endswith(&self, suffix: &Self) -> bool {
        search::ends_with(self, suffix.units())
    }

    /// Remove leading and trailing characters in `chars` (whitespace by default).
    fn strip(&self, chars: Option<&Self>) -> Self {
        strip::strip(self, chars, true, true)
    }

    fn lstrip(&self, chars: Option<&Self>) -> Self {
        strip::strip(self, chars, true, false)
    }

    fn rstrip(&self, chars: Option<&Self>) -> Self {
        strip::strip(self, chars, false, true)
    }

    /// Split on `sep`, or on whitespace runs when `sep` is `None`.
    ///
    /// `maxsplit` of `None` or a negative value means unlimited.
    fn split(&self, sep: Option<&Self>, maxsplit: Option<i64>) -> StrResult<Vec<Self>> {
        split::split(self, sep, maxsplit)
    }

    /// Split at `\n`, `\r` and `\r\n`.
    fn splitlines(&self, keepends: bool) -> Vec<Self> {
        split::splitlines(self, keepends)
    }

    fn partition(&self, sep: &Self) -> StrResult<(Self, Self, Self)> {
        split::partition(self, sep, false)
    }

    fn rpartition(&self, sep: &Self) -> StrResult<(Self, Self, Self)> {
        split::partition(self, sep, true)
    }

    /// Concatenate `items` with `self` between each pair.
    fn join(&self, items: &[Self]) -> Self {
        let mut out = Vec::new();
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.extend_from_slice(self.units());
            }
            out.extend_from_slice(item.units());
        }
        Self::from_units(out)
    }

    /// [`join`](Self::join) over runtime values, each of which must be this kind.
    fn join_values(&self, items: &[Value]) -> StrResult<Self> {
        let parts = items
            .iter()
            .enumerate()
            .map(|(position, item)| {
                Self::downcast(item)
                    .cloned()
                    .ok_or_else(|| join_item(position, Self::KIND.type_name(), item.type_name()))
            })
            .collect::<StrResult<Vec<Self>>>()?;
        Ok(self.join(&parts))
    }

    /// Replace occurrences of `old`; at most `count` when non-negative.
    fn replace(&self, old: &Self, new: &Self, count: Option<i64>) -> Self {
        replace::replace(self, old, new, count)
    }

    fn lower(&self) -> Self {
        case::map_ascii(self, |b| b.to_ascii_lowercase())
    }

    fn upper(&self) -> Self {
        case::map_ascii(self, |b| b.to_ascii_uppercase())
    }

    fn swapcase(&self) -> Self {
        case::map_ascii(self, case::swap_ascii)
    }

    fn capitalize(&self) -> Self {
        case::capitalize(self)
    }

    fn title(&self) -> Self {
        case::title(self)
    }

    fn isdigit(&self) -> bool {
        case::all_ascii(self, |b| b.is_ascii_digit())
    }

    fn isnumeric(&self) -> bool {
        case::all_ascii(self, |b| b.is_ascii_digit())
    }

    fn isalpha(&self) -> bool {
        case::all_ascii(self, |b| b.is_ascii_alphabetic())
    }

    fn isalnum(&self) -> bool {
        case::all_ascii(self, |b| b.is_ascii_alphanumeric())
    }

    fn isspace(&self) -> bool {
        !self.is_empty() && self.units().iter().all(|&u| Self::is_space(u))
    }

    fn islower(&self) -> bool {
        case::has_case(self, u8::is_ascii_lowercase) && !case::has_case(self, u8::is_ascii_uppercase)
    }

    fn isupper(&self) -> bool {
        case::has_case(self, u8::is_ascii_uppercase) && !case::has_case(self, u8::is_ascii_lowercase)
    }

    fn istitle(&self) -> bool {
        case::istitle(self)
    }

    fn ljust(&self, width: i64, fill: Option<&Self>) -> StrResult<Self> {
        layout::justify(self, width, fill, layout::Align::Left)
    }

    fn rjust(&self, width: i64, fill: Option<&Self>) -> StrResult<Self> {
        layout::justify(self, width, fill, layout::Align::Right)
    }

    /// Center within `width`; an odd extra fill goes on the right.
    fn center(&self, width: i64, fill: Option<&Self>) -> StrResult<Self> {
        layout::justify(self, width, fill, layout::Align::Center)
    }

    /// Left-pad with zeros to `width`, keeping a leading sign in front.
    fn zfill(&self, width: i64) -> StrResult<Self> {
        layout::zfill(self, width)
    }

    fn expandtabs(&self, tabsize: Option<i64>) -> StrResult<Self> {
        layout::expandtabs(self, tabsize)
    }
}

impl<S: Sequence> SequenceOps for S {}

/// Resolve a possibly negative index against `len`.
pub(crate) fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let index = if index < 0 { index + len } else { index };
    if (0..len).contains(&index) {
        usize::try_from(index).ok()
    } else {
        None
    }
}

/// Resolve optional `start`/`end` bounds to a logical window.
///
/// Negative bounds count from the end and clamp to zero; `end` clamps to the
/// length. `None` when `start` is past the end or `end < start`.
pub(crate) fn resolve_window(len: usize, start: Option<i64>, end: Option<i64>) -> Option<Range<usize>> {
    let len = i64::try_from(len).ok()?;
    let adjust = |v: i64| if v < 0 { v.saturating_add(len).max(0) } else { v };
    let start = start.map_or(0, adjust);
    let end = end.map_or(len, adjust).min(len);
    if start > len || end < start {
        return None;
    }
    Some(usize::try_from(start).ok()?..usize::try_from(end).ok()?)
}

/// Empty buffer with room for exactly `len` units.
///
/// Fails with an overflow error instead of aborting when the allocator
/// refuses the request.
pub(crate) fn alloc_units<U>(len: usize) -> StrResult<Vec<U>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len).map_err(|_| index_overflow())?;
    Ok(out)
}

/// Storage range covering a logical range.
pub(crate) fn storage_range<S: Sequence>(seq: &S, logical: Range<usize>) -> Range<usize> {
    let index = seq.codepoint_index();
    let len = seq.units().len();
    index.storage_offset_clamped(logical.start, len)..index.storage_offset_clamped(logical.end, len)
}

/// New value holding `units[storage]`.
pub(crate) fn subsequence<S: Sequence>(seq: &S, storage: Range<usize>) -> S {
    S::from_units(seq.units()[storage].to_vec())
}

fn sentinel(hit: Option<usize>) -> i64 {
    hit.and_then(|i| i64::try_from(i).ok()).unwrap_or(-1)
}

#[cfg(test)]
mod tests;
