//! Integer and float conversions (`d i u o x X e E f F g G`).
//!
//! Output is always ASCII: sign, optional base prefix, digits, then padding
//! to the field width.

use num::bigint::Sign;
use skein_ir::{CompatMode, Conversion, ConversionFlags, ConversionSpec};
use skein_value::{format_arg_type, index_overflow, magnitude_digits, Number, StrResult, Value};

fn number_arg<'a>(arg: &'a Value, spec: &ConversionSpec) -> StrResult<Number<'a>> {
    arg.as_number().ok_or_else(|| {
        let expected = if spec.conversion.is_integer() {
            "a number"
        } else {
            "a real number"
        };
        format_arg_type(spec.conversion.as_char(), expected, arg.type_name())
    })
}

/// Sign for a value: `-`, or `+`/space when the flags ask for one.
fn sign(negative: bool, flags: ConversionFlags) -> &'static str {
    if negative {
        "-"
    } else if flags.contains(ConversionFlags::PLUS_SIGN) {
        "+"
    } else if flags.blank_sign() {
        " "
    } else {
        ""
    }
}

/// Empty string with room for `len` bytes.
fn reserve(len: usize) -> StrResult<String> {
    let mut out = String::new();
    out.try_reserve_exact(len).map_err(|_| index_overflow())?;
    Ok(out)
}

fn push_fill(out: &mut String, fill: char, count: usize) {
    out.extend(std::iter::repeat(fill).take(count));
}

/// Join sign, prefix and body, padding to the field width.
///
/// Zero padding goes between the prefix and the body.
fn pad_number(
    sign: &str,
    prefix: &str,
    body: &str,
    spec: &ConversionSpec,
    zero_ok: bool,
) -> StrResult<String> {
    let len = sign.len() + prefix.len() + body.len();
    let width = spec.width.map_or(len, |width| width.max(len));
    let fill = width - len;
    let mut out = reserve(width)?;
    if spec.flags.contains(ConversionFlags::LEFT_ADJUST) {
        out.push_str(sign);
        out.push_str(prefix);
        out.push_str(body);
        push_fill(&mut out, ' ', fill);
    } else if zero_ok && spec.flags.zero_pad() {
        out.push_str(sign);
        out.push_str(prefix);
        push_fill(&mut out, '0', fill);
        out.push_str(body);
    } else {
        push_fill(&mut out, ' ', fill);
        out.push_str(sign);
        out.push_str(prefix);
        out.push_str(body);
    }
    Ok(out)
}

/// `d i u o x X`. Floats are truncated for decimal conversions only.
pub(super) fn format_integer(arg: &Value, spec: &ConversionSpec) -> StrResult<String> {
    let conversion = spec.conversion;
    let number = number_arg(arg, spec)?;
    if number.is_float() && conversion != Conversion::Decimal {
        return Err(format_arg_type(
            conversion.as_char(),
            "an integer",
            arg.type_name(),
        ));
    }
    let n = number.to_int()?;
    let negative = n.sign() == Sign::Minus;

    let (radix, alternate_prefix) = match conversion {
        Conversion::Octal => (8, "0"),
        Conversion::Hex | Conversion::HexUpper => (16, "0x"),
        _ => (10, ""),
    };

    let mut digits = magnitude_digits(&n, radix);
    if let Some(precision) = spec.precision {
        if digits.len() < precision {
            let mut padded = reserve(precision)?;
            push_fill(&mut padded, '0', precision - digits.len());
            padded.push_str(&digits);
            digits = padded;
        }
    }

    let prefix = if !spec.flags.contains(ConversionFlags::ALTERNATE) {
        ""
    } else if conversion == Conversion::Octal && digits.starts_with('0') {
        // Already led by a zero, from precision or the value itself
        ""
    } else {
        alternate_prefix
    };

    let rendered = pad_number(sign(negative, spec.flags), prefix, &digits, spec, true)?;
    Ok(if conversion.is_uppercase() {
        rendered.to_ascii_uppercase()
    } else {
        rendered
    })
}

/// `e E f F g G`.
pub(super) fn format_float(arg: &Value, spec: &ConversionSpec, mode: CompatMode) -> StrResult<String> {
    let conversion = spec.conversion;
    let number = number_arg(arg, spec)?;
    let x = number.to_f64();
    let alternate = spec.flags.contains(ConversionFlags::ALTERNATE);

    let (body, finite) = if x.is_nan() {
        ("nan".to_string(), false)
    } else if x.is_infinite() {
        ("inf".to_string(), false)
    } else {
        let abs = x.abs();
        let body = match conversion {
            Conversion::Exp | Conversion::ExpUpper => {
                exponent_notation(abs, spec.precision.unwrap_or(6), alternate)
            }
            Conversion::General | Conversion::GeneralUpper => {
                general_notation(abs, spec.precision.unwrap_or(6), alternate)
            }
            _ => fixed_notation(
                abs,
                spec.precision.unwrap_or(mode.default_fixed_precision()),
                alternate,
            ),
        };
        (body, true)
    };

    let negative = number.is_negative();
    let rendered = pad_number(sign(negative, spec.flags), "", &body, spec, finite)?;
    Ok(if conversion.is_uppercase() {
        rendered.to_ascii_uppercase()
    } else {
        rendered
    })
}

fn fixed_notation(abs: f64, precision: usize, alternate: bool) -> String {
    let mut out = format!("{abs:.precision$}");
    if alternate && precision == 0 {
        out.push('.');
    }
    out
}

/// `d.ddde±XX`, at least two exponent digits.
fn exponent_notation(abs: f64, precision: usize, alternate: bool) -> String {
    let raw = format!("{abs:.precision$e}");
    let (mantissa, exponent) = split_exponent(&raw);
    let point = if alternate && precision == 0 { "." } else { "" };
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}{point}e{exp_sign}{:02}", exponent.unsigned_abs())
}

/// Exponent notation when the exponent is below -4 or at least the
/// precision, fixed otherwise. Trailing zeros are removed unless `#`.
fn general_notation(abs: f64, precision: usize, alternate: bool) -> String {
    let significant = precision.max(1);
    let probe = format!("{abs:.prec$e}", prec = significant - 1);
    let (_, exponent) = split_exponent(&probe);

    let significant_i = i64::try_from(significant).unwrap_or(i64::MAX);
    let out = if exponent < -4 || i64::from(exponent) >= significant_i {
        exponent_notation(abs, significant - 1, alternate)
    } else {
        let decimals = usize::try_from(significant_i - 1 - i64::from(exponent)).unwrap_or(0);
        let mut fixed = format!("{abs:.decimals$}");
        if alternate && !fixed.contains('.') {
            fixed.push('.');
        }
        fixed
    };
    if alternate {
        out
    } else {
        strip_trailing_zeros(&out)
    }
}

/// Split Rust's `{:e}` output into mantissa and exponent.
fn split_exponent(raw: &str) -> (&str, i32) {
    match raw.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (raw, 0),
    }
}

/// Drop zeros after the decimal point, and the point itself if bare.
fn strip_trailing_zeros(s: &str) -> String {
    let (mantissa, suffix) = match s.find('e') {
        Some(at) => s.split_at(at),
        None => (s, ""),
    };
    if !mantissa.contains('.') {
        return s.to_string();
    }
    let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}{suffix}")
}
