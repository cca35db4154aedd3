//! Canonical text construction.
//!
//! `TextInterner` is the construction path for `Text.from(value)`: it
//! normalizes scalars to their string form and returns the single canonical
//! instance for the resulting content.

use skein_ir::{CompatMode, SharedContentInterner};
use std::fmt;

use crate::errors::{decoding_unsupported, StrResult};
use crate::text::Text;
use crate::value::{float_repr, Value};

/// Shared handle to the canonical-text cache.
///
/// Clones share one cache. Two texts built through the same interner with
/// equal content are the same instance.
#[derive(Clone, Default)]
pub struct TextInterner(SharedContentInterner<Text>);

impl TextInterner {
    pub fn new() -> Self {
        TextInterner(SharedContentInterner::new())
    }

    /// Canonical instance for `s`.
    pub fn intern(&self, s: &str) -> Text {
        let units: Vec<u16> = s.encode_utf16().collect();
        self.intern_units(&units)
    }

    /// Canonical instance for raw UTF-16 content.
    pub fn intern_units(&self, units: &[u16]) -> Text {
        self.0.intern_with(units, Text::from_boxed)
    }

    /// Register `text` as canonical unless equal content is already known.
    pub fn intern_text(&self, text: &Text) -> Text {
        self.0.intern_with(text.as_units(), |_| text.clone())
    }

    /// Canonical instance for `units`, if one was registered.
    pub fn get(&self, units: &[u16]) -> Option<Text> {
        self.0.get(units)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn same_interner(&self, other: &TextInterner) -> bool {
        self.0.same_interner(&other.0)
    }

    /// `str(value)`: scalars become their string form, bytes are decoded as
    /// UTF-8, and an existing text is returned as is.
    pub fn text_from(&self, value: &Value, mode: CompatMode) -> StrResult<Text> {
        let normalized = match value {
            Value::Text(text) => return Ok(text.clone()),
            Value::Bytes(bytes) => return Ok(self.intern_text(&bytes.decode(None)?)),
            Value::None => "None".to_string(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(x) => float_repr(*x),
            other => other.to_str(mode),
        };
        Ok(self.intern(&normalized))
    }

    /// `str(value, encoding)`: only bytes can be decoded.
    pub fn text_decoded(&self, value: &Value, encoding: &str) -> StrResult<Text> {
        match value {
            Value::Bytes(bytes) => Ok(self.intern_text(&bytes.decode(Some(encoding))?)),
            other => Err(decoding_unsupported(other.type_name())),
        }
    }
}

impl fmt::Debug for TextInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInterner")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "tests unwrap known-good results")]

    use num::BigInt;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::bytes::Bytes;
    use crate::errors::ErrorCategory;

    #[test]
    fn equal_content_is_one_instance() {
        let interner = TextInterner::new();
        let a = interner.intern("hello");
        let b = interner.intern("hello");
        assert!(a.is_same(&b));
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn clones_share_the_cache() {
        let interner = TextInterner::new();
        let other = interner.clone();
        assert!(interner.same_interner(&other));
        let a = interner.intern("x");
        assert!(other.intern("x").is_same(&a));
        assert!(!TextInterner::new().same_interner(&interner));
    }

    #[test]
    fn normalizes_scalars() {
        let interner = TextInterner::new();
        let mode = CompatMode::Modern;
        assert_eq!(interner.text_from(&Value::Bool(true), mode).unwrap(), "True");
        assert_eq!(interner.text_from(&Value::Bool(false), mode).unwrap(), "False");
        assert_eq!(interner.text_from(&Value::None, mode).unwrap(), "None");
        assert_eq!(interner.text_from(&Value::int(-42), mode).unwrap(), "-42");
        assert_eq!(
            interner.text_from(&Value::Float(f64::INFINITY), mode).unwrap(),
            "inf"
        );
        assert_eq!(
            interner.text_from(&Value::Float(f64::NEG_INFINITY), mode).unwrap(),
            "-inf"
        );
        assert_eq!(interner.text_from(&Value::Float(2.5), mode).unwrap(), "2.5");
        let big = BigInt::from(10).pow(30);
        assert_eq!(
            interner.text_from(&Value::Int(big), mode).unwrap(),
            "1000000000000000000000000000000"
        );
    }

    #[test]
    fn existing_text_is_returned_as_is() {
        let interner = TextInterner::new();
        let text = Text::from("abc");
        let out = interner.text_from(&Value::Text(text.clone()), CompatMode::Modern).unwrap();
        assert!(out.is_same(&text));
    }

    #[test]
    fn scalar_results_are_canonical() {
        let interner = TextInterner::new();
        let a = interner.text_from(&Value::int(7), CompatMode::Modern).unwrap();
        let b = interner.text_from(&Value::int(7), CompatMode::Modern).unwrap();
        assert!(a.is_same(&b));
        assert!(interner.intern("7").is_same(&a));
    }

    #[test]
    fn bytes_are_decoded() {
        let interner = TextInterner::new();
        let value = Value::bytes(Bytes::from("h\u{e9}".as_bytes()));
        let text = interner.text_from(&value, CompatMode::Modern).unwrap();
        assert_eq!(text, "h\u{e9}");
        assert!(interner.intern("h\u{e9}").is_same(&text));

        let bad = Value::bytes(Bytes::from(&[0xff_u8][..]));
        let err = interner.text_from(&bad, CompatMode::Modern).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::UnicodeDecodeError);
    }

    #[test]
    fn containers_use_their_repr() {
        let interner = TextInterner::new();
        let list = Value::list(vec![Value::int(1), Value::text("a")]);
        assert_eq!(
            interner.text_from(&list, CompatMode::Modern).unwrap(),
            "[1, 'a']"
        );
    }

    #[test]
    fn decoding_requires_bytes() {
        let interner = TextInterner::new();
        let err = interner.text_decoded(&Value::text("x"), "utf-8").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::TypeError);

        let value = Value::bytes(Bytes::from(&b"ok"[..]));
        assert_eq!(interner.text_decoded(&value, "UTF8").unwrap(), "ok");
        let err = interner.text_decoded(&value, "latin-1").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::ValueError);
    }
}
