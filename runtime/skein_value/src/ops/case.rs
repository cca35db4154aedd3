//! ASCII case transforms and character-class predicates.
//!
//! Only ASCII letters change case; every other unit passes through.

use crate::sequence::Sequence;

pub(super) fn map_ascii<S: Sequence>(seq: &S, f: impl Fn(u8) -> u8) -> S {
    S::from_units(
        seq.units()
            .iter()
            .map(|&unit| S::ascii(unit).map_or(unit, |b| S::from_ascii(f(b))))
            .collect(),
    )
}

pub(super) fn swap_ascii(b: u8) -> u8 {
    if b.is_ascii_lowercase() {
        b.to_ascii_uppercase()
    } else {
        b.to_ascii_lowercase()
    }
}

/// First unit uppercased, the rest lowercased.
pub(super) fn capitalize<S: Sequence>(seq: &S) -> S {
    S::from_units(
        seq.units()
            .iter()
            .enumerate()
            .map(|(i, &unit)| {
                S::ascii(unit).map_or(unit, |b| {
                    S::from_ascii(if i == 0 {
                        b.to_ascii_uppercase()
                    } else {
                        b.to_ascii_lowercase()
                    })
                })
            })
            .collect(),
    )
}

/// Uppercase the first letter of each run of letters, lowercase the rest.
pub(super) fn title<S: Sequence>(seq: &S) -> S {
    let mut in_word = false;
    S::from_units(
        seq.units()
            .iter()
            .map(|&unit| match S::ascii(unit) {
                Some(b) if b.is_ascii_alphabetic() => {
                    let mapped = if in_word {
                        b.to_ascii_lowercase()
                    } else {
                        b.to_ascii_uppercase()
                    };
                    in_word = true;
                    S::from_ascii(mapped)
                }
                _ => {
                    in_word = false;
                    unit
                }
            })
            .collect(),
    )
}

/// Non-empty and every unit is an ASCII byte satisfying `pred`.
pub(super) fn all_ascii<S: Sequence>(seq: &S, pred: impl Fn(&u8) -> bool) -> bool {
    !seq.units().is_empty()
        && seq
            .units()
            .iter()
            .all(|&unit| S::ascii(unit).is_some_and(|b| pred(&b)))
}

/// Some unit is an ASCII byte satisfying `pred`.
pub(super) fn has_case<S: Sequence>(seq: &S, pred: impl Fn(&u8) -> bool) -> bool {
    seq.units()
        .iter()
        .any(|&unit| S::ascii(unit).is_some_and(|b| pred(&b)))
}

/// Uppercase letters only start words, lowercase letters only continue
/// them, and at least one cased letter exists.
pub(super) fn istitle<S: Sequence>(seq: &S) -> bool {
    let mut cased = false;
    let mut previous_is_cased = false;
    for &unit in seq.units() {
        match S::ascii(unit) {
            Some(b) if b.is_ascii_uppercase() => {
                if previous_is_cased {
                    return false;
                }
                previous_is_cased = true;
                cased = true;
            }
            Some(b) if b.is_ascii_lowercase() => {
                if !previous_is_cased {
                    return false;
                }
                cased = true;
            }
            _ => previous_is_cased = false,
        }
    }
    cased
}
