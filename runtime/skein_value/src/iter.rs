//! Forward iteration over text and byte values.

use std::iter::FusedIterator;

use crate::ops::SequenceOps;
use crate::sequence::Sequence;

/// Single-pass cursor over a sequence.
///
/// Holds its own handle on the source, so the iterator stays valid however
/// the caller's value is used. Text yields one-character texts (a
/// supplementary character comes out whole); bytes yield `u8`.
#[derive(Clone, Debug)]
pub struct SequenceIterator<S: Sequence> {
    source: S,
    next: usize,
    len: usize,
}

impl<S: Sequence> SequenceIterator<S> {
    pub fn new(source: S) -> Self {
        let len = source.len();
        SequenceIterator {
            source,
            next: 0,
            len,
        }
    }

    /// Logical position of the next item.
    pub fn position(&self) -> usize {
        self.next
    }
}

impl<S: Sequence> Iterator for SequenceIterator<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.next >= self.len {
            return None;
        }
        let range = self
            .source
            .codepoint_index()
            .char_range(self.next, self.source.units().len())?;
        self.next += 1;
        Some(self.source.make_item(range))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<S: Sequence> ExactSizeIterator for SequenceIterator<S> {}
impl<S: Sequence> FusedIterator for SequenceIterator<S> {}
