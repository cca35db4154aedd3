//! strip / lstrip / rstrip.

use super::{subsequence, SequenceOps};
use crate::sequence::Sequence;

/// Remove a maximal run of matching characters from either or both ends.
///
/// Without `chars`, single-unit whitespace is removed. With `chars`, each
/// logical character of `chars` is matched literally, so a supplementary
/// character is stripped whole or not at all.
pub(super) fn strip<S: Sequence>(seq: &S, chars: Option<&S>, left: bool, right: bool) -> S {
    let units = seq.units();
    let index = seq.codepoint_index();
    let len = seq.len();

    let set: Vec<&[S::Unit]> = match chars {
        Some(chars) => {
            let cindex = chars.codepoint_index();
            let cunits = chars.units();
            (0..chars.len())
                .filter_map(|i| cindex.char_range(i, cunits.len()))
                .map(|r| &cunits[r])
                .collect()
        }
        None => Vec::new(),
    };
    let matches = |logical: usize| {
        let Some(range) = index.char_range(logical, units.len()) else {
            return false;
        };
        let ch = &units[range];
        match chars {
            Some(_) => set.contains(&ch),
            None => ch.len() == 1 && S::is_space(ch[0]),
        }
    };

    let mut start = 0;
    if left {
        while start < len && matches(start) {
            start += 1;
        }
    }
    let mut end = len;
    if right {
        while end > start && matches(end - 1) {
            end -= 1;
        }
    }
    if start == 0 && end == len {
        return seq.clone();
    }
    subsequence(seq, super::storage_range(seq, start..end))
}
