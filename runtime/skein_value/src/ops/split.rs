//! split, splitlines and partition.

use super::search::{find_storage, rfind_storage};
use super::subsequence;
use crate::errors::{empty_separator, StrResult};
use crate::sequence::Sequence;

/// Number of splits allowed by a `maxsplit` argument.
fn split_limit(maxsplit: Option<i64>) -> usize {
    match maxsplit {
        Some(n) if n >= 0 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => usize::MAX,
    }
}

pub(super) fn split<S: Sequence>(
    seq: &S,
    sep: Option<&S>,
    maxsplit: Option<i64>,
) -> StrResult<Vec<S>> {
    let limit = split_limit(maxsplit);
    match sep {
        None => Ok(split_whitespace(seq, limit)),
        Some(sep) if sep.units().is_empty() => Err(empty_separator()),
        Some(sep) => Ok(split_on(seq, sep.units(), limit)),
    }
}

/// Split on runs of whitespace, dropping empty edge fragments.
fn split_whitespace<S: Sequence>(seq: &S, mut limit: usize) -> Vec<S> {
    let units = seq.units();
    let len = units.len();
    let mut parts = Vec::new();
    let mut pos = 0;

    while limit > 0 {
        while pos < len && S::is_space(units[pos]) {
            pos += 1;
        }
        if pos == len {
            break;
        }
        let start = pos;
        while pos < len && !S::is_space(units[pos]) {
            pos += 1;
        }
        parts.push(subsequence(seq, start..pos));
        limit -= 1;
    }

    // Remainder after the last allowed split keeps its trailing whitespace
    while pos < len && S::is_space(units[pos]) {
        pos += 1;
    }
    if pos < len {
        parts.push(subsequence(seq, pos..len));
    }
    parts
}

/// Split on literal occurrences of `sep`, keeping empty fragments.
fn split_on<S: Sequence>(seq: &S, sep: &[S::Unit], mut limit: usize) -> Vec<S> {
    let len = seq.units().len();
    let mut parts = Vec::new();
    let mut pos = 0;
    while limit > 0 {
        let Some(hit) = find_storage(seq, sep, pos, len) else {
            break;
        };
        parts.push(subsequence(seq, pos..hit));
        pos = hit + sep.len();
        limit -= 1;
    }
    parts.push(subsequence(seq, pos..len));
    parts
}

pub(super) fn splitlines<S: Sequence>(seq: &S, keepends: bool) -> Vec<S> {
    let units = seq.units();
    let cr = S::from_ascii(b'\r');
    let lf = S::from_ascii(b'\n');
    let mut lines = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < units.len() {
        let unit = units[pos];
        if unit != cr && unit != lf {
            pos += 1;
            continue;
        }
        let line_end = pos;
        pos += if unit == cr && units.get(pos + 1) == Some(&lf) {
            2
        } else {
            1
        };
        let end = if keepends { pos } else { line_end };
        lines.push(subsequence(seq, start..end));
        start = pos;
    }
    if start < units.len() {
        lines.push(subsequence(seq, start..units.len()));
    }
    lines
}

/// Split around the first (or last) `sep`.
pub(super) fn partition<S: Sequence>(seq: &S, sep: &S, reverse: bool) -> StrResult<(S, S, S)> {
    let needle = sep.units();
    if needle.is_empty() {
        return Err(empty_separator());
    }
    let len = seq.units().len();
    let hit = if reverse {
        rfind_storage(seq, needle, 0, len)
    } else {
        find_storage(seq, needle, 0, len)
    };
    let empty = || S::from_units(Vec::new());
    Ok(match hit {
        Some(at) => (
            subsequence(seq, 0..at),
            sep.clone(),
            subsequence(seq, at + needle.len()..len),
        ),
        None if reverse => (empty(), empty(), seq.clone()),
        None => (seq.clone(), empty(), empty()),
    })
}
