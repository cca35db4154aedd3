//! Immutable byte sequences.

use num::traits::{Signed, ToPrimitive};
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::errors::{
    byte_out_of_range, contains_operand, encoding_without_string, index_overflow, negative_count,
    not_an_integer, string_without_encoding, unknown_error_handler, wrong_arg_type, StrResult,
};
use crate::iter::SequenceIterator;
use crate::sequence::{SeqKind, Sequence, NO_INDEX};
use crate::text::Text;
use crate::value::Value;
use crate::{codec, repr};
use skein_ir::CodepointIndex;

/// Immutable byte sequence. Logical offsets always equal storage offsets.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bytes(Arc<[u8]>);

impl Bytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Bytes(Arc::from(bytes))
    }

    pub fn empty() -> Self {
        Bytes(Arc::from(Vec::new()))
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Construct from runtime arguments, following the `bytes(...)` rules:
    ///
    /// - no source: empty
    /// - text with an encoding: encoded
    /// - integer `n`: `n` zero bytes
    /// - bytes: copied
    /// - an object with a byte conversion: delegated
    /// - any other iterable of integers in `0..=255`: collected
    pub fn from_value(
        source: Option<&Value>,
        encoding: Option<&Value>,
        errors: Option<&Value>,
    ) -> StrResult<Bytes> {
        let encoding = optional_text_arg("bytes", "encoding", encoding)?;
        let errors = optional_text_arg("bytes", "errors", errors)?;
        check_error_handler(errors.as_ref())?;

        let Some(source) = source else {
            return match encoding {
                Some(_) => Err(encoding_without_string()),
                None => Ok(Bytes::empty()),
            };
        };

        if let Value::Text(text) = source {
            let Some(encoding) = encoding else {
                return Err(string_without_encoding());
            };
            return text.encode(Some(&encoding.to_string_lossy()));
        }
        if encoding.is_some() {
            return Err(encoding_without_string());
        }

        match source {
            Value::Int(n) => {
                if n.is_negative() {
                    return Err(negative_count());
                }
                let count = n.to_usize().ok_or_else(index_overflow)?;
                Ok(Bytes::new(vec![0; count]))
            }
            Value::Bytes(bytes) => Ok(bytes.clone()),
            Value::Object(obj) => match obj.to_bytes() {
                Some(result) => result,
                None => {
                    let items = source.iter_values()?;
                    collect_byte_values(&items)
                }
            },
            _ => {
                let items = source.iter_values()?;
                collect_byte_values(&items)
            }
        }
    }

    /// Whether `needle` occurs: a bytes needle or a single byte value.
    pub fn contains_value(&self, needle: &Value) -> StrResult<bool> {
        match needle {
            Value::Bytes(sub) => Ok(crate::ops::SequenceOps::contains(self, sub)),
            Value::Int(_) | Value::Bool(_) => {
                let byte = needle
                    .as_index()
                    .and_then(|n| u8::try_from(n).ok())
                    .ok_or_else(|| byte_out_of_range("byte"))?;
                Ok(self.0.contains(&byte))
            }
            other => Err(contains_operand(
                "bytes",
                "a bytes-like object",
                other.type_name(),
            )),
        }
    }

    /// Decode to text (`utf-8` only).
    pub fn decode(&self, encoding: Option<&str>) -> StrResult<Text> {
        codec::decode(self, encoding)
    }

    /// Two lowercase hex digits per byte.
    pub fn hex(&self) -> Text {
        codec::hex(self)
    }

    /// Parse hex pairs, ignoring whitespace between them.
    pub fn fromhex(text: &Text) -> StrResult<Bytes> {
        codec::fromhex(text)
    }

    /// `b'...'` representation.
    pub fn repr(&self) -> Text {
        Text::from(repr::bytes_repr(self))
    }

    /// Iterate byte values.
    pub fn iter(&self) -> SequenceIterator<Bytes> {
        SequenceIterator::new(self.clone())
    }
}

/// Collect integer values into bytes.
fn collect_byte_values(items: &[Value]) -> StrResult<Bytes> {
    items
        .iter()
        .map(|item| match item {
            Value::Int(_) | Value::Bool(_) => item
                .as_index()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| byte_out_of_range("bytes")),
            other => Err(not_an_integer(other.type_name())),
        })
        .collect::<StrResult<Vec<u8>>>()
        .map(Bytes::new)
}

fn optional_text_arg(method: &str, name: &str, arg: Option<&Value>) -> StrResult<Option<Text>> {
    match arg {
        None | Some(Value::None) => Ok(None),
        Some(Value::Text(text)) => Ok(Some(text.clone())),
        Some(other) => Err(wrong_arg_type(
            method,
            &format!("str for '{name}'"),
            other.type_name(),
        )),
    }
}

/// Only strict error handling is supported.
pub(crate) fn check_error_handler(errors: Option<&Text>) -> StrResult<()> {
    match errors {
        Some(handler) if *handler != "strict" => {
            Err(unknown_error_handler(&handler.to_string_lossy()))
        }
        _ => Ok(()),
    }
}

impl Sequence for Bytes {
    type Unit = u8;
    type Item = u8;
    const KIND: SeqKind = SeqKind::Bytes;

    #[inline]
    fn units(&self) -> &[u8] {
        &self.0
    }

    fn from_units(units: Vec<u8>) -> Self {
        Bytes::new(units)
    }

    #[inline]
    fn codepoint_index(&self) -> &CodepointIndex {
        &NO_INDEX
    }

    fn make_item(&self, storage: Range<usize>) -> u8 {
        self.0[storage.start]
    }

    #[inline]
    fn from_ascii(byte: u8) -> u8 {
        byte
    }

    #[inline]
    fn is_space(unit: u8) -> bool {
        matches!(unit, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
    }

    fn downcast(value: &Value) -> Option<&Self> {
        match value {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Bytes(self)
    }

    fn item_value(item: u8) -> Value {
        Value::int(i64::from(item))
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Bytes(Arc::from(bytes))
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Bytes::new(bytes)
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes({})", repr::bytes_repr(self))
    }
}

impl<'a> IntoIterator for &'a Bytes {
    type Item = u8;
    type IntoIter = SequenceIterator<Bytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
