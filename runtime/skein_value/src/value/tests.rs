#![allow(clippy::unwrap_used, reason = "tests unwrap known-good results")]

use pretty_assertions::assert_eq;

use super::*;
use crate::errors::{ErrorCategory, StrErrorKind};

#[derive(Debug)]
struct Env;

impl RuntimeObject for Env {
    fn type_name(&self) -> &'static str {
        "env"
    }

    fn repr(&self) -> String {
        "<env>".to_string()
    }

    fn str(&self) -> String {
        "environment".to_string()
    }

    fn is_mapping(&self) -> bool {
        true
    }

    fn get_item(&self, key: &Text) -> Option<StrResult<Value>> {
        Some(if *key == "home" {
            Ok(Value::text("/root"))
        } else {
            Err(key_not_found(&key.to_string()))
        })
    }
}

// Type names and coercions

#[test]
fn type_names() {
    assert_eq!(Value::None.type_name(), "NoneType");
    assert_eq!(Value::Bool(true).type_name(), "bool");
    assert_eq!(Value::int(1).type_name(), "int");
    assert_eq!(Value::Float(1.0).type_name(), "float");
    assert_eq!(Value::text("a").type_name(), "str");
    assert_eq!(Value::bytes(Bytes::empty()).type_name(), "bytes");
    assert_eq!(Value::tuple(vec![]).type_name(), "tuple");
    assert_eq!(Value::list(vec![]).type_name(), "list");
    assert_eq!(Value::dict([]).type_name(), "dict");
    assert_eq!(Value::object(Env).type_name(), "env");
}

#[test]
fn as_index_accepts_ints_and_bools() {
    assert_eq!(Value::int(-3).as_index(), Some(-3));
    assert_eq!(Value::Bool(true).as_index(), Some(1));
    assert_eq!(Value::Float(1.0).as_index(), None);
    let huge = Value::Int(BigInt::from(2).pow(80));
    assert_eq!(huge.as_index(), None);
}

#[test]
fn as_number() {
    assert!(Value::int(5).as_number().is_some());
    assert!(Value::Float(0.5).as_number().unwrap().is_float());
    assert!(Value::Bool(false).as_number().is_some());
    assert!(Value::text("5").as_number().is_none());
}

// Iteration

#[test]
fn iter_values_by_kind() {
    let list = Value::list(vec![Value::int(1), Value::int(2)]);
    assert_eq!(list.iter_values().unwrap(), vec![Value::int(1), Value::int(2)]);

    let text = Value::text("a😀");
    assert_eq!(
        text.iter_values().unwrap(),
        vec![Value::text("a"), Value::text("😀")]
    );

    let bytes = Value::bytes(Bytes::from(&[7_u8, 8][..]));
    assert_eq!(bytes.iter_values().unwrap(), vec![Value::int(7), Value::int(8)]);

    let dict = Value::dict([(Text::from("k"), Value::int(1))]);
    assert_eq!(dict.iter_values().unwrap(), vec![Value::text("k")]);
}

#[test]
fn scalars_are_not_iterable() {
    let err = Value::int(3).iter_values().unwrap_err();
    assert_eq!(
        err.kind,
        StrErrorKind::NotIterable {
            got: "int".to_string()
        }
    );
    assert!(Value::object(Env).iter_values().is_err());
}

// Mappings

#[test]
fn dict_lookup() {
    let dict = Value::dict([(Text::from("a"), Value::int(1))]);
    assert!(dict.is_mapping());
    assert_eq!(dict.get_item(&Text::from("a")).unwrap().unwrap(), Value::int(1));

    let err = dict.get_item(&Text::from("b")).unwrap().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::KeyError);
    assert_eq!(err.message, "'b'");
}

#[test]
fn object_mapping_lookup() {
    let env = Value::object(Env);
    assert!(env.is_mapping());
    assert_eq!(
        env.get_item(&Text::from("home")).unwrap().unwrap(),
        Value::text("/root")
    );
    assert!(Value::tuple(vec![]).get_item(&Text::from("a")).is_none());
    assert!(!Value::list(vec![]).is_mapping());
}

// Comparison

#[test]
fn rich_compare_same_kind() {
    let a = Value::text("apple");
    let b = Value::text("banana");
    assert_eq!(a.rich_compare(&b, CompareOp::Lt), Some(true));
    assert_eq!(a.rich_compare(&b, CompareOp::Ge), Some(false));
    assert_eq!(a.rich_compare(&a, CompareOp::Eq), Some(true));
    assert_eq!(a.rich_compare(&b, CompareOp::Ne), Some(true));

    let x = Value::bytes(Bytes::from(&b"b"[..]));
    let y = Value::bytes(Bytes::from(&b"ab"[..]));
    assert_eq!(x.rich_compare(&y, CompareOp::Gt), Some(true));
    assert_eq!(x.rich_compare(&y, CompareOp::Le), Some(false));
}

#[test]
fn rich_compare_across_kinds_is_not_implemented() {
    let text = Value::text("a");
    let bytes = Value::bytes(Bytes::from(&b"a"[..]));
    assert_eq!(text.rich_compare(&bytes, CompareOp::Eq), None);
    assert_eq!(text.rich_compare(&Value::int(1), CompareOp::Lt), None);
}

// Rendering

#[test]
fn repr_of_containers() {
    let mode = CompatMode::Modern;
    assert_eq!(Value::tuple(vec![Value::int(1)]).to_repr(mode), "(1,)");
    assert_eq!(
        Value::tuple(vec![Value::int(1), Value::text("a")]).to_repr(mode),
        "(1, 'a')"
    );
    assert_eq!(Value::list(vec![]).to_repr(mode), "[]");
    let dict = Value::dict([
        (Text::from("a"), Value::Float(1.5)),
        (Text::from("b"), Value::None),
    ]);
    assert_eq!(dict.to_repr(mode), "{'a': 1.5, 'b': None}");
}

#[test]
fn str_vs_repr() {
    let mode = CompatMode::Modern;
    assert_eq!(Value::text("x").to_str(mode), "x");
    assert_eq!(Value::text("x").to_repr(mode), "'x'");
    assert_eq!(Value::Bool(true).to_str(mode), "True");
    assert_eq!(Value::object(Env).to_str(mode), "environment");
    assert_eq!(Value::object(Env).to_repr(mode), "<env>");
    assert_eq!(Value::Float(2.0).to_string(), "2.0");
}

#[test]
fn legacy_repr_reaches_nested_text() {
    let list = Value::list(vec![Value::text("\u{e9}")]);
    assert_eq!(list.to_repr(CompatMode::Legacy), "['\\xe9']");
    assert_eq!(list.to_repr(CompatMode::Modern), "['\u{e9}']");
}

// Equality

#[test]
fn objects_compare_by_identity() {
    let env = Value::object(Env);
    assert_eq!(env, env.clone());
    assert_ne!(env, Value::object(Env));
}

#[test]
fn different_variants_are_unequal() {
    assert_ne!(Value::int(1), Value::Bool(true));
    assert_ne!(Value::tuple(vec![]), Value::list(vec![]));
    assert_eq!(Value::from("a"), Value::text("a"));
}
