use super::search::find_storage;
use super::SequenceOps;
use crate::sequence::Sequence;

/// Literal replacement. `count` of `None` or a negative value is unlimited.
///
/// An empty `old` inserts `new` before every character and at the end.
pub(super) fn replace<S: Sequence>(seq: &S, old: &S, new: &S, count: Option<i64>) -> S {
    let mut remaining = match count {
        Some(n) if n >= 0 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => usize::MAX,
    };
    if remaining == 0 {
        return seq.clone();
    }

    let units = seq.units();
    let old_units = old.units();
    let new_units = new.units();
    let mut out = Vec::with_capacity(units.len());

    if old_units.is_empty() {
        let index = seq.codepoint_index();
        for logical in 0..seq.len() {
            if remaining > 0 {
                out.extend_from_slice(new_units);
                remaining -= 1;
            }
            if let Some(range) = index.char_range(logical, units.len()) {
                out.extend_from_slice(&units[range]);
            }
        }
        if remaining > 0 {
            out.extend_from_slice(new_units);
        }
        return S::from_units(out);
    }

    let mut pos = 0;
    while remaining > 0 {
        let Some(hit) = find_storage(seq, old_units, pos, units.len()) else {
            break;
        };
        out.extend_from_slice(&units[pos..hit]);
        out.extend_from_slice(new_units);
        pos = hit + old_units.len();
        remaining -= 1;
    }
    out.extend_from_slice(&units[pos..]);
    S::from_units(out)
}
