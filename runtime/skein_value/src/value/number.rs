//! Numeric abstraction used by formatting and conversions.

use num::bigint::BigInt;
use num::traits::{FromPrimitive, Signed, ToPrimitive};
use std::borrow::Cow;

use crate::errors::{float_to_int, StrResult};

/// An integer or float argument.
#[derive(Clone, Debug, PartialEq)]
pub enum Number<'a> {
    Int(Cow<'a, BigInt>),
    Float(f64),
}

impl<'a> From<&'a BigInt> for Number<'a> {
    fn from(n: &'a BigInt) -> Self {
        Number::Int(Cow::Borrowed(n))
    }
}

impl From<BigInt> for Number<'_> {
    fn from(n: BigInt) -> Self {
        Number::Int(Cow::Owned(n))
    }
}

impl Number<'_> {
    /// Sign test. Negative zero counts as negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Int(n) => n.is_negative(),
            Number::Float(x) => x.is_sign_negative() && !x.is_nan(),
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Coerce to a float; integers too large become infinities.
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Int(n) => n.to_f64().unwrap_or(if n.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            Number::Float(x) => *x,
        }
    }

    /// Coerce to an integer, truncating floats toward zero.
    pub fn to_int(&self) -> StrResult<BigInt> {
        match self {
            Number::Int(n) => Ok(n.as_ref().clone()),
            Number::Float(x) => {
                BigInt::from_f64(x.trunc()).ok_or_else(|| float_to_int(&float_repr(*x)))
            }
        }
    }
}

/// Digits of `|n|` in `radix`, lowercase, no sign or prefix.
pub fn magnitude_digits(n: &BigInt, radix: u32) -> String {
    n.magnitude().to_str_radix(radix)
}

/// Shortest round-trip representation, switching to exponent notation
/// outside `1e-4 <= |x| < 1e16`.
pub fn float_repr(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{x:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{x}");
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let mut fixed = format!("{x}");
        if !fixed.contains('.') {
            fixed.push_str(".0");
        }
        fixed
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
