//! End-to-end checks through the public `StrRuntime` surface.

#![allow(clippy::unwrap_used, reason = "tests unwrap known-good results")]

use pretty_assertions::assert_eq;
use skein_eval::{init_tracing, CompatMode, ErrorCategory, StrRuntime, Text, Value};

fn runtime() -> StrRuntime {
    init_tracing();
    StrRuntime::new()
}

fn call(rt: &StrRuntime, receiver: &Value, method: &str, args: &[Value]) -> Value {
    rt.call_method(receiver, method, args).unwrap()
}

#[test]
fn format_examples() {
    let rt = runtime();
    let out = rt
        .format(
            &Value::text("%d-%s"),
            &Value::tuple(vec![Value::int(3), Value::text("x")]),
        )
        .unwrap();
    assert_eq!(out, Value::text("3-x"));

    let out = rt
        .format(
            &Value::text("%05.2f"),
            &Value::tuple(vec![Value::Float(3.14159)]),
        )
        .unwrap();
    assert_eq!(out, Value::text("03.14"));
}

#[test]
fn mapping_keys() {
    let rt = runtime();
    let args = Value::dict([
        (Text::from("name"), Value::text("ada")),
        (Text::from("n"), Value::int(7)),
    ]);
    let out = rt
        .format(&Value::text("%(name)s has %(n)03d"), &args)
        .unwrap();
    assert_eq!(out, Value::text("ada has 007"));

    let err = rt
        .format(&Value::text("%(missing)s"), &args)
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::KeyError);
}

#[test]
fn supplementary_characters_count_once() {
    let rt = runtime();
    let text = rt.text(&Value::text("a😀b")).unwrap();
    let value = Value::Text(text);
    assert_eq!(call(&rt, &value, "__len__", &[]), Value::int(3));
    assert_eq!(
        call(&rt, &value, "__getitem__", &[Value::int(1)]),
        Value::text("😀")
    );
    assert_eq!(call(&rt, &value, "find", &[Value::text("b")]), Value::int(2));
}

#[test]
fn split_examples() {
    let rt = runtime();
    let parts = call(&rt, &Value::text(" a  b "), "split", &[]);
    assert_eq!(parts, Value::list(vec![Value::text("a"), Value::text("b")]));
    let parts = call(&rt, &Value::text("a,,b"), "split", &[Value::text(",")]);
    assert_eq!(
        parts,
        Value::list(vec![Value::text("a"), Value::text(""), Value::text("b")])
    );
}

#[test]
fn codec_round_trip() {
    let rt = runtime();
    let original = Value::text("héllo 😀");
    let encoded = call(&rt, &original, "encode", &[Value::text("utf-8")]);
    let decoded = call(&rt, &encoded, "decode", &[]);
    assert_eq!(decoded, original);

    let bytes = rt
        .bytes(Some(&Value::text("4a6b")), None, None)
        .unwrap_err();
    assert_eq!(bytes.category(), ErrorCategory::TypeError);

    let parsed = call(&rt, &Value::bytes(&b""[..]), "fromhex", &[Value::text("4a6b")]);
    assert_eq!(parsed, Value::bytes(&[0x4a_u8, 0x6b][..]));
    assert_eq!(call(&rt, &parsed, "hex", &[]), Value::text("4a6b"));
}

#[test]
fn find_and_index_agree() {
    let rt = runtime();
    let hay = Value::text("abcabc");
    for needle in ["a", "c", "ca", "z", ""] {
        let needle = Value::text(needle);
        let found = call(&rt, &hay, "find", &[needle.clone()]);
        match rt.call_method(&hay, "index", &[needle]) {
            Ok(index) => assert_eq!(found, index),
            Err(err) => {
                assert_eq!(found, Value::int(-1));
                assert_eq!(err.category(), ErrorCategory::ValueError);
            }
        }
    }
}

#[test]
fn legacy_runtime() {
    let rt = StrRuntime::builder().mode(CompatMode::Legacy).build();
    assert_eq!(rt.repr(&Value::text("ü")), "'\\xfc'");
    let out = rt.format(&Value::text("%f"), &Value::int(1)).unwrap();
    assert_eq!(out, Value::text("1.0000000"));
}
