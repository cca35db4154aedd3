#![allow(clippy::unwrap_used, reason = "tests unwrap known-good results")]

use pretty_assertions::assert_eq;

use super::*;
use crate::errors::{ErrorCategory, StrErrorKind};
use crate::ops::SequenceOps;
use crate::value::RuntimeObject;

fn b(raw: &[u8]) -> Bytes {
    Bytes::from(raw)
}

#[derive(Debug)]
struct Buffer(Vec<u8>);

impl RuntimeObject for Buffer {
    fn type_name(&self) -> &'static str {
        "buffer"
    }

    fn repr(&self) -> String {
        "<buffer>".to_string()
    }

    fn to_bytes(&self) -> Option<StrResult<Bytes>> {
        Some(Ok(Bytes::new(self.0.clone())))
    }
}

#[derive(Debug)]
struct Counter(i64);

impl RuntimeObject for Counter {
    fn type_name(&self) -> &'static str {
        "counter"
    }

    fn repr(&self) -> String {
        "<counter>".to_string()
    }

    fn iter_values(&self) -> Option<Vec<Value>> {
        Some((0..self.0).map(Value::int).collect())
    }
}

// Constructor

#[test]
fn no_source_is_empty() {
    assert_eq!(Bytes::from_value(None, None, None).unwrap(), Bytes::empty());
}

#[test]
fn text_needs_an_encoding() {
    let source = Value::text("hé");
    let err = Bytes::from_value(Some(&source), None, None).unwrap_err();
    assert_eq!(err.kind, StrErrorKind::StringWithoutEncoding);
    assert_eq!(err.category(), ErrorCategory::TypeError);

    let encoding = Value::text("utf-8");
    let bytes = Bytes::from_value(Some(&source), Some(&encoding), None).unwrap();
    assert_eq!(bytes.as_slice(), "hé".as_bytes());
}

#[test]
fn encoding_without_text_source() {
    let encoding = Value::text("utf8");
    let err = Bytes::from_value(None, Some(&encoding), None).unwrap_err();
    assert_eq!(err.kind, StrErrorKind::EncodingWithoutString);

    let err = Bytes::from_value(Some(&Value::int(3)), Some(&encoding), None).unwrap_err();
    assert_eq!(err.kind, StrErrorKind::EncodingWithoutString);
}

#[test]
fn unknown_encoding_is_value_error() {
    let source = Value::text("x");
    let encoding = Value::text("latin-1");
    let err = Bytes::from_value(Some(&source), Some(&encoding), None).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ValueError);
}

#[test]
fn only_strict_errors_handler() {
    let source = Value::text("x");
    let encoding = Value::text("utf-8");
    let strict = Value::text("strict");
    assert!(Bytes::from_value(Some(&source), Some(&encoding), Some(&strict)).is_ok());

    let ignore = Value::text("ignore");
    let err = Bytes::from_value(Some(&source), Some(&encoding), Some(&ignore)).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ValueError);
}

#[test]
fn encoding_must_be_text() {
    let source = Value::text("x");
    let err = Bytes::from_value(Some(&source), Some(&Value::int(8)), None).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeError);
}

#[test]
fn integer_gives_zero_bytes() {
    let bytes = Bytes::from_value(Some(&Value::int(3)), None, None).unwrap();
    assert_eq!(bytes.as_slice(), &[0, 0, 0]);

    let err = Bytes::from_value(Some(&Value::int(-1)), None, None).unwrap_err();
    assert_eq!(err.kind, StrErrorKind::NegativeCount);
}

#[test]
fn bytes_source_is_copied() {
    let source = b(b"abc");
    let out = Bytes::from_value(Some(&Value::Bytes(source.clone())), None, None).unwrap();
    assert_eq!(out, source);
}

#[test]
fn iterable_of_integers() {
    let source = Value::list(vec![Value::int(72), Value::int(105), Value::Bool(true)]);
    let bytes = Bytes::from_value(Some(&source), None, None).unwrap();
    assert_eq!(bytes.as_slice(), &[72, 105, 1]);
}

#[test]
fn out_of_range_element() {
    let source = Value::tuple(vec![Value::int(1), Value::int(256)]);
    let err = Bytes::from_value(Some(&source), None, None).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ValueError);
    assert_eq!(err.message, "bytes must be in range(0, 256)");
}

#[test]
fn non_integer_element() {
    let source = Value::list(vec![Value::int(1), Value::text("a")]);
    let err = Bytes::from_value(Some(&source), None, None).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeError);
}

#[test]
fn non_iterable_source() {
    let err = Bytes::from_value(Some(&Value::Float(1.5)), None, None).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeError);
}

#[test]
fn object_byte_conversion_is_delegated() {
    let source = Value::object(Buffer(vec![9, 8]));
    let bytes = Bytes::from_value(Some(&source), None, None).unwrap();
    assert_eq!(bytes.as_slice(), &[9, 8]);
}

#[test]
fn iterable_object_is_collected() {
    let source = Value::object(Counter(3));
    let bytes = Bytes::from_value(Some(&source), None, None).unwrap();
    assert_eq!(bytes.as_slice(), &[0, 1, 2]);
}

// Containment

#[test]
fn contains_subsequence_or_byte() {
    let hay = b(b"hello");
    assert!(hay.contains_value(&Value::bytes(b(b"ell"))).unwrap());
    assert!(hay.contains_value(&Value::int(i64::from(b'o'))).unwrap());
    assert!(!hay.contains_value(&Value::int(0)).unwrap());
}

#[test]
fn contains_rejects_out_of_range_byte() {
    let err = b(b"x").contains_value(&Value::int(300)).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ValueError);
    assert_eq!(err.message, "byte must be in range(0, 256)");
}

#[test]
fn contains_rejects_text() {
    let err = b(b"x").contains_value(&Value::text("x")).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeError);
}

// Element access

#[test]
fn indexing_yields_integers() {
    let bytes = b(b"AB");
    assert_eq!(bytes.get(0).unwrap(), 65);
    assert_eq!(bytes.get(-1).unwrap(), 66);
    let err = bytes.get(2).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::IndexError);
}

#[test]
fn high_bytes_are_plain_units() {
    let bytes = b(&[0xD8, 0x00, 0xff]);
    assert_eq!(bytes.len(), 3);
    assert_eq!(bytes.slice(Some(1), None).as_slice(), &[0x00, 0xff]);
}

#[test]
fn debug_and_repr() {
    assert_eq!(format!("{:?}", b(b"a\x00")), "Bytes(b'a\\x00')");
    assert_eq!(b(b"it's").repr(), "b\"it's\"");
}

#[test]
fn hex_helpers() {
    assert_eq!(b(&[0x4a, 0x6b]).hex(), "4a6b");
    assert_eq!(Bytes::fromhex(&Text::from("4a6b")).unwrap(), b(&[0x4a, 0x6b]));
}
