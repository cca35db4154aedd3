//! Literal substring search over storage units.
//!
//! A hit must start and end on logical character boundaries, so a needle
//! never matches half of a surrogate pair.

use super::{resolve_window, storage_range, SequenceOps};
use crate::sequence::Sequence;

/// Whether `needle` sits at storage offset `pos`, covering whole characters.
fn matches_at<S: Sequence>(seq: &S, needle: &[S::Unit], pos: usize) -> bool {
    let hay = seq.units();
    let Some(end) = pos.checked_add(needle.len()) else {
        return false;
    };
    let index = seq.codepoint_index();
    hay.get(pos..end).is_some_and(|window| window == needle)
        && index.logical_offset(pos, hay.len()).is_some()
        && index.logical_offset(end, hay.len()).is_some()
}

pub(super) fn starts_with<S: Sequence>(seq: &S, prefix: &[S::Unit]) -> bool {
    matches_at(seq, prefix, 0)
}

pub(super) fn ends_with<S: Sequence>(seq: &S, suffix: &[S::Unit]) -> bool {
    seq.units()
        .len()
        .checked_sub(suffix.len())
        .is_some_and(|pos| matches_at(seq, suffix, pos))
}

/// First occurrence of `needle` inside `units[from..to]`.
pub(super) fn find_storage<S: Sequence>(
    seq: &S,
    needle: &[S::Unit],
    from: usize,
    to: usize,
) -> Option<usize> {
    let last = to.checked_sub(needle.len())?;
    (from..=last).find(|&pos| matches_at(seq, needle, pos))
}

/// Last occurrence of `needle` inside `units[from..to]`.
pub(super) fn rfind_storage<S: Sequence>(
    seq: &S,
    needle: &[S::Unit],
    from: usize,
    to: usize,
) -> Option<usize> {
    let last = to.checked_sub(needle.len())?;
    (from..=last).rev().find(|&pos| matches_at(seq, needle, pos))
}

/// Logical offset of the first (or last, when `reverse`) hit in the window.
pub(super) fn find<S: Sequence>(
    seq: &S,
    needle: &[S::Unit],
    start: Option<i64>,
    end: Option<i64>,
    reverse: bool,
) -> Option<usize> {
    let window = resolve_window(seq.len(), start, end)?;
    let storage = storage_range(seq, window);
    let hit = if reverse {
        rfind_storage(seq, needle, storage.start, storage.end)?
    } else {
        find_storage(seq, needle, storage.start, storage.end)?
    };
    seq.codepoint_index().logical_offset(hit, seq.units().len())
}

pub(super) fn count<S: Sequence>(
    seq: &S,
    needle: &[S::Unit],
    start: Option<i64>,
    end: Option<i64>,
) -> usize {
    let Some(window) = resolve_window(seq.len(), start, end) else {
        return 0;
    };
    // The empty needle matches between every pair of characters
    if needle.is_empty() {
        return window.len() + 1;
    }
    let storage = storage_range(seq, window);
    let mut pos = storage.start;
    let mut hits = 0;
    while let Some(hit) = find_storage(seq, needle, pos, storage.end) {
        hits += 1;
        pos = hit + needle.len();
    }
    hits
}
