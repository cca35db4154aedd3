//! Logical-character index over a UTF-16 code-unit buffer.
//!
//! Text storage is a sequence of UTF-16 code units. Most text is pure BMP, so
//! logical offsets equal storage offsets and no index is needed. When a
//! surrogate unit is present, a table mapping each logical character to the
//! storage offset where it starts is built once and reused for indexing,
//! slicing, searching and iteration.

use std::ops::Range;

/// Start of the surrogate block (`[0xD800, 0xE000)`).
const SURROGATE_START: u16 = 0xD800;
/// Start of the low-surrogate half of the block.
const LOW_SURROGATE_START: u16 = 0xDC00;
/// One past the end of the surrogate block.
const SURROGATE_END: u16 = 0xE000;

/// Returns `true` for any unit in the surrogate block.
#[inline]
pub fn is_surrogate(unit: u16) -> bool {
    (SURROGATE_START..SURROGATE_END).contains(&unit)
}

/// Returns `true` for a leading (high) surrogate.
#[inline]
pub fn is_high_surrogate(unit: u16) -> bool {
    (SURROGATE_START..LOW_SURROGATE_START).contains(&unit)
}

/// Returns `true` for a trailing (low) surrogate.
#[inline]
pub fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_START..SURROGATE_END).contains(&unit)
}

/// Number of logical characters in a code-unit slice.
///
/// A well-formed surrogate pair counts once; an unpaired surrogate counts as
/// its own character.
pub fn codepoint_count(units: &[u16]) -> usize {
    let mut count = 0;
    let mut pos = 0;
    while pos < units.len() {
        pos += unit_width(units, pos);
        count += 1;
    }
    count
}

/// Storage width (1 or 2) of the logical character starting at `pos`.
#[inline]
fn unit_width(units: &[u16], pos: usize) -> usize {
    let paired = is_high_surrogate(units[pos])
        && units.get(pos + 1).is_some_and(|&next| is_low_surrogate(next));
    if paired {
        2
    } else {
        1
    }
}

/// Computed codepoint index for one text buffer.
///
/// `Present` holds `len + 1` offsets: `table[i]` is where logical character
/// `i` starts, and the final entry is the storage length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CodepointIndex {
    /// No surrogate units: logical offset == storage offset.
    Absent,
    /// Offset table for a buffer containing surrogate units.
    Present(Box<[usize]>),
}

impl CodepointIndex {
    /// Scan `units` once and build the index.
    pub fn compute(units: &[u16]) -> Self {
        if !units.iter().copied().any(is_surrogate) {
            return CodepointIndex::Absent;
        }

        let mut table = Vec::with_capacity(units.len() + 1);
        let mut pos = 0;
        while pos < units.len() {
            table.push(pos);
            pos += unit_width(units, pos);
        }
        table.push(units.len());

        tracing::trace!(
            storage_len = units.len(),
            logical_len = table.len() - 1,
            "built codepoint table"
        );
        CodepointIndex::Present(table.into_boxed_slice())
    }

    /// Offset table, if the buffer needed one.
    #[inline]
    pub fn table(&self) -> Option<&[usize]> {
        match self {
            CodepointIndex::Absent => None,
            CodepointIndex::Present(table) => Some(table),
        }
    }

    /// Number of logical characters in a buffer of `storage_len` units.
    #[inline]
    pub fn logical_len(&self, storage_len: usize) -> usize {
        match self {
            CodepointIndex::Absent => storage_len,
            CodepointIndex::Present(table) => table.len() - 1,
        }
    }

    /// Storage offset where logical character `logical` begins.
    ///
    /// `logical == len` maps to the storage length; anything past that
    /// returns `None`.
    #[inline]
    pub fn storage_offset(&self, logical: usize, storage_len: usize) -> Option<usize> {
        match self {
            CodepointIndex::Absent => (logical <= storage_len).then_some(logical),
            CodepointIndex::Present(table) => table.get(logical).copied(),
        }
    }

    /// Like [`storage_offset`](Self::storage_offset), clamping past-the-end
    /// offsets to the storage length.
    #[inline]
    pub fn storage_offset_clamped(&self, logical: usize, storage_len: usize) -> usize {
        self.storage_offset(logical, storage_len)
            .unwrap_or(storage_len)
    }

    /// Storage range occupied by logical character `logical`.
    pub fn char_range(&self, logical: usize, storage_len: usize) -> Option<Range<usize>> {
        match self {
            CodepointIndex::Absent => (logical < storage_len).then(|| logical..logical + 1),
            CodepointIndex::Present(table) => {
                let start = *table.get(logical)?;
                let end = *table.get(logical + 1)?;
                Some(start..end)
            }
        }
    }

    /// Reverse lookup: the logical character starting exactly at `storage`.
    ///
    /// Returns `None` when `storage` falls inside a surrogate pair.
    pub fn logical_offset(&self, storage: usize, storage_len: usize) -> Option<usize> {
        match self {
            CodepointIndex::Absent => (storage <= storage_len).then_some(storage),
            CodepointIndex::Present(table) => table.binary_search(&storage).ok(),
        }
    }
}

/// Observable state of a text buffer's lazily computed index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndexState<'a> {
    /// The index has never been requested.
    NotComputed,
    /// Computed; the buffer is pure BMP.
    Absent,
    /// Computed; the buffer has surrogate pairs.
    Present(&'a [usize]),
}

impl<'a> IndexState<'a> {
    /// View a computed index, or `NotComputed` if there is none yet.
    pub fn of(index: Option<&'a CodepointIndex>) -> Self {
        match index {
            None => IndexState::NotComputed,
            Some(CodepointIndex::Absent) => IndexState::Absent,
            Some(CodepointIndex::Present(table)) => IndexState::Present(table),
        }
    }
}
