//! The `%` operator: template formatting for text and bytes.
//!
//! The template is parsed once into literal runs and conversion tokens
//! (`skein_ir::parse_template`); each token then pulls its argument and
//! renders it. The output has the same kind as the template.
//!
//! Argument rules:
//! - a tuple supplies positional arguments in order
//! - a mapping serves `%(key)` tokens (and is itself the single positional)
//! - any other value is a single positional argument

mod numeric;

use skein_ir::{parse_template, CompatMode, Conversion, ConversionFlags, ConversionSpec, TemplatePiece};
use skein_value::{
    byte_out_of_range, char_out_of_range, format_arg_type, format_requires_mapping,
    format_spec_type, not_enough_format_args, unsupported_format_spec, Bytes, Sequence,
    SequenceOps, StrResult, Text, Value,
};

/// A sequence kind that can be a format template.
///
/// The kind decides how `%s`, `%r` and `%c` arguments become units; numeric
/// conversions always produce ASCII.
pub trait FormatTarget: Sequence {
    /// Units for `%s`.
    fn render_str(value: &Value, mode: CompatMode) -> StrResult<Vec<Self::Unit>>;

    /// Units for `%r`.
    fn render_repr(value: &Value, mode: CompatMode) -> Vec<Self::Unit>;

    /// Units for `%c`.
    fn render_char(value: &Value) -> StrResult<Vec<Self::Unit>>;

    /// Units for an ASCII string.
    fn ascii_units(s: &str) -> Vec<Self::Unit> {
        s.bytes().map(Self::from_ascii).collect()
    }
}

impl FormatTarget for Text {
    fn render_str(value: &Value, mode: CompatMode) -> StrResult<Vec<u16>> {
        Ok(match value {
            Value::Text(text) => text.as_units().to_vec(),
            other => other.to_str(mode).encode_utf16().collect(),
        })
    }

    fn render_repr(value: &Value, mode: CompatMode) -> Vec<u16> {
        value.to_repr(mode).encode_utf16().collect()
    }

    fn render_char(value: &Value) -> StrResult<Vec<u16>> {
        match value {
            Value::Int(_) | Value::Bool(_) => {
                let code = value
                    .as_index()
                    .and_then(|n| u32::try_from(n).ok())
                    .filter(|&n| n <= 0x10_FFFF)
                    .ok_or_else(char_out_of_range)?;
                // Surrogate code points are kept as a single unit
                Ok(match u16::try_from(code) {
                    Ok(unit) => vec![unit],
                    Err(_) => char::from_u32(code)
                        .map(|c| c.encode_utf16(&mut [0; 2]).to_vec())
                        .ok_or_else(char_out_of_range)?,
                })
            }
            Value::Text(text) if text.len() == 1 => Ok(text.as_units().to_vec()),
            other => Err(format_arg_type('c', "int or char", other.type_name())),
        }
    }
}

impl FormatTarget for Bytes {
    fn render_str(value: &Value, _mode: CompatMode) -> StrResult<Vec<u8>> {
        match value {
            Value::Bytes(bytes) => Ok(bytes.as_slice().to_vec()),
            Value::Object(obj) => match obj.to_bytes() {
                Some(bytes) => Ok(bytes?.as_slice().to_vec()),
                None => Err(format_arg_type('s', "a bytes-like object", obj.type_name())),
            },
            other => Err(format_arg_type('s', "a bytes-like object", other.type_name())),
        }
    }

    /// Always the ASCII-only representation.
    fn render_repr(value: &Value, _mode: CompatMode) -> Vec<u8> {
        value.to_repr(CompatMode::Legacy).into_bytes()
    }

    fn render_char(value: &Value) -> StrResult<Vec<u8>> {
        match value {
            Value::Int(_) | Value::Bool(_) => value
                .as_index()
                .and_then(|n| u8::try_from(n).ok())
                .map(|b| vec![b])
                .ok_or_else(|| byte_out_of_range("%c arg")),
            Value::Bytes(bytes) if bytes.len() == 1 => Ok(bytes.as_slice().to_vec()),
            other => Err(format_arg_type('c', "an integer or a byte", other.type_name())),
        }
    }
}

/// Source of conversion arguments.
struct ArgCursor<'a> {
    positional: &'a [Value],
    next: usize,
    mapping: Option<&'a Value>,
}

impl<'a> ArgCursor<'a> {
    fn new(args: &'a Value) -> Self {
        match args {
            Value::Tuple(items) => ArgCursor {
                positional: items,
                next: 0,
                mapping: None,
            },
            other => ArgCursor {
                positional: std::slice::from_ref(other),
                next: 0,
                mapping: other.is_mapping().then_some(other),
            },
        }
    }

    fn next_positional(&mut self) -> StrResult<&'a Value> {
        let arg = self
            .positional
            .get(self.next)
            .ok_or_else(not_enough_format_args)?;
        self.next += 1;
        Ok(arg)
    }

    fn keyed(&self, key: Text) -> StrResult<Value> {
        let mapping = self.mapping.ok_or_else(format_requires_mapping)?;
        mapping
            .get_item(&key)
            .unwrap_or_else(|| Err(format_requires_mapping()))
    }
}

/// Apply `template % args`.
#[tracing::instrument(level = "trace", skip_all)]
pub fn apply_format<S: FormatTarget>(template: &S, args: &Value, mode: CompatMode) -> StrResult<S> {
    let units = template.units();
    let pieces = parse_template(units)?;
    let mut cursor = ArgCursor::new(args);
    let mut out = Vec::with_capacity(units.len());

    for piece in &pieces {
        match piece {
            TemplatePiece::Literal(range) => out.extend_from_slice(&units[range.clone()]),
            TemplatePiece::Conversion(spec) => {
                let rendered = render_token(template, spec, &mut cursor, mode).inspect_err(|err| {
                    tracing::debug!(span = ?spec.span, error = %err, "format token failed");
                })?;
                out.extend(rendered);
            }
        }
    }

    Ok(S::from_units(out))
}

fn render_token<S: FormatTarget>(
    template: &S,
    spec: &ConversionSpec,
    cursor: &mut ArgCursor<'_>,
    mode: CompatMode,
) -> StrResult<Vec<S::Unit>> {
    if spec.conversion == Conversion::Percent {
        return Ok(vec![S::from_ascii(b'%')]);
    }

    let keyed;
    let arg = match &spec.mapping_key {
        Some(range) => {
            let key = template.units()[range.clone()]
                .iter()
                .map(|&unit| {
                    let code: u32 = unit.into();
                    u16::try_from(code).unwrap_or(u16::MAX)
                })
                .collect();
            keyed = cursor.keyed(Text::from_utf16(key))?;
            &keyed
        }
        None => cursor.next_positional()?,
    };

    let conversion = spec.conversion;
    if conversion.is_integer() {
        return Ok(S::ascii_units(&numeric::format_integer(arg, spec)?));
    }
    if conversion.is_float() {
        return Ok(S::ascii_units(&numeric::format_float(arg, spec, mode)?));
    }

    let body = match conversion {
        Conversion::Char => S::render_char(arg)?,
        Conversion::Repr => S::render_repr(arg, mode),
        _ => S::render_str(arg, mode)?,
    };
    let mut field = S::from_units(body);
    if let Some(precision) = spec.precision {
        if conversion != Conversion::Char {
            field = field.slice(None, Some(i64::try_from(precision).unwrap_or(i64::MAX)));
        }
    }
    pad_field(&field, spec.width, spec.flags).map(|padded| padded.units().to_vec())
}

/// Space-pad to `width`, right-justified unless `-` is set.
fn pad_field<S: Sequence>(field: &S, width: Option<usize>, flags: ConversionFlags) -> StrResult<S> {
    let Some(width) = width else {
        return Ok(field.clone());
    };
    let width = i64::try_from(width).unwrap_or(i64::MAX);
    if flags.contains(ConversionFlags::LEFT_ADJUST) {
        field.ljust(width, None)
    } else {
        field.rjust(width, None)
    }
}

/// `format(text, spec)`. Only the empty spec and `"s"` are supported.
pub fn format_with_spec(text: &Text, spec: &Value) -> StrResult<Text> {
    let Value::Text(spec) = spec else {
        return Err(format_spec_type(spec.type_name()));
    };
    if spec.is_empty() || *spec == "s" {
        Ok(text.clone())
    } else {
        Err(unsupported_format_spec(&spec.to_string_lossy()))
    }
}
