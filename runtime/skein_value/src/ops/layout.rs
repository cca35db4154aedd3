//! Padding, zero-fill and tab expansion. Widths count logical characters.

use super::{alloc_units, SequenceOps};
use crate::errors::{fill_char, index_overflow, StrResult};
use crate::sequence::Sequence;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Align {
    Left,
    Right,
    Center,
}

pub(super) fn justify<S: Sequence>(
    seq: &S,
    width: i64,
    fill: Option<&S>,
    align: Align,
) -> StrResult<S> {
    let fill_units: Vec<S::Unit> = match fill {
        Some(fill) if fill.len() == 1 => fill.units().to_vec(),
        Some(_) => return Err(fill_char()),
        None => vec![S::from_ascii(b' ')],
    };

    let len = seq.len();
    let Some(pad) = usize::try_from(width).ok().and_then(|w| w.checked_sub(len)) else {
        return Ok(seq.clone());
    };
    if pad == 0 {
        return Ok(seq.clone());
    }

    let (left, right) = match align {
        Align::Left => (0, pad),
        Align::Right => (pad, 0),
        Align::Center => (pad / 2, pad - pad / 2),
    };

    let total = pad
        .checked_mul(fill_units.len())
        .and_then(|n| n.checked_add(seq.units().len()))
        .ok_or_else(index_overflow)?;
    let mut out = alloc_units(total)?;
    for _ in 0..left {
        out.extend_from_slice(&fill_units);
    }
    out.extend_from_slice(seq.units());
    for _ in 0..right {
        out.extend_from_slice(&fill_units);
    }
    Ok(S::from_units(out))
}

pub(super) fn zfill<S: Sequence>(seq: &S, width: i64) -> StrResult<S> {
    let len = seq.len();
    let Some(pad) = usize::try_from(width).ok().and_then(|w| w.checked_sub(len)) else {
        return Ok(seq.clone());
    };
    if pad == 0 {
        return Ok(seq.clone());
    }

    let units = seq.units();
    let zero = S::from_ascii(b'0');
    let mut out = alloc_units(units.len().checked_add(pad).ok_or_else(index_overflow)?)?;
    let signed = units
        .first()
        .and_then(|&u| S::ascii(u))
        .is_some_and(|b| b == b'+' || b == b'-');
    let body = if signed {
        out.push(units[0]);
        &units[1..]
    } else {
        units
    };
    out.extend(std::iter::repeat(zero).take(pad));
    out.extend_from_slice(body);
    Ok(S::from_units(out))
}

/// Replace each tab with spaces up to the next multiple of `tabsize`
/// (default 8), counting columns from the last line break.
pub(super) fn expandtabs<S: Sequence>(seq: &S, tabsize: Option<i64>) -> StrResult<S> {
    let tabsize = usize::try_from(tabsize.unwrap_or(8)).unwrap_or(0);
    let units = seq.units();
    let index = seq.codepoint_index();
    let space = S::from_ascii(b' ');
    let mut out = Vec::with_capacity(units.len());
    let mut column = 0usize;

    for logical in 0..seq.len() {
        let Some(range) = index.char_range(logical, units.len()) else {
            break;
        };
        let ch = &units[range];
        match S::ascii(ch[0]) {
            Some(b'\t') => {
                if tabsize > 0 {
                    let spaces = tabsize - column % tabsize;
                    out.try_reserve(spaces).map_err(|_| index_overflow())?;
                    out.extend(std::iter::repeat(space).take(spaces));
                    column += spaces;
                }
            }
            Some(b'\n' | b'\r') => {
                out.extend_from_slice(ch);
                column = 0;
            }
            _ => {
                out.extend_from_slice(ch);
                column += 1;
            }
        }
    }
    Ok(S::from_units(out))
}
