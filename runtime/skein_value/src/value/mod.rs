//! Runtime values seen by the string core.
//!
//! The surrounding runtime owns the full object model; this enum covers the
//! scalars and containers that text operations consume, plus an escape hatch
//! (`Object`) for everything else through the [`RuntimeObject`] trait.
//!
//! # Thread Safety
//!
//! All heap variants use `Arc`, and `RuntimeObject` requires `Send + Sync`,
//! so values can be shared freely between threads.

mod number;

use indexmap::IndexMap;
use num::bigint::BigInt;
use num::traits::ToPrimitive;
use rustc_hash::FxBuildHasher;
use skein_ir::CompatMode;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

pub use number::{float_repr, magnitude_digits, Number};

use crate::bytes::Bytes;
use crate::errors::{key_not_found, not_iterable, StrResult};
use crate::text::Text;

/// Insertion-ordered mapping with text keys.
pub type Mapping = IndexMap<Text, Value, FxBuildHasher>;

/// Capabilities of a value owned by the surrounding runtime.
///
/// Every method except the names has a default meaning "not supported".
pub trait RuntimeObject: Send + Sync + fmt::Debug {
    fn type_name(&self) -> &'static str;

    /// Debug representation.
    fn repr(&self) -> String;

    /// String form; defaults to the representation.
    fn str(&self) -> String {
        self.repr()
    }

    /// Byte conversion, if the object has one.
    fn to_bytes(&self) -> Option<StrResult<Bytes>> {
        None
    }

    /// Whether the object supports lookup by text key.
    fn is_mapping(&self) -> bool {
        false
    }

    /// Lookup by text key. Only called when [`is_mapping`](Self::is_mapping).
    fn get_item(&self, key: &Text) -> Option<StrResult<Value>> {
        let _ = key;
        None
    }

    /// Elements, if the object is iterable.
    fn iter_values(&self) -> Option<Vec<Value>> {
        None
    }
}

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    None,
    Bool(bool),
    /// Arbitrary-precision integer.
    Int(BigInt),
    Float(f64),
    Text(Text),
    Bytes(Bytes),
    Tuple(Arc<[Value]>),
    List(Arc<[Value]>),
    Dict(Arc<Mapping>),
    Object(Arc<dyn RuntimeObject>),
}

/// Comparison operator for [`Value::rich_compare`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Le,
    Eq,
    Ne,
    Gt,
    Ge,
}

impl CompareOp {
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Lt => ordering.is_lt(),
            CompareOp::Le => ordering.is_le(),
            CompareOp::Eq => ordering.is_eq(),
            CompareOp::Ne => ordering.is_ne(),
            CompareOp::Gt => ordering.is_gt(),
            CompareOp::Ge => ordering.is_ge(),
        }
    }
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(BigInt::from(n))
    }

    #[inline]
    pub fn text(s: impl Into<Text>) -> Self {
        Value::Text(s.into())
    }

    #[inline]
    pub fn bytes(b: impl Into<Bytes>) -> Self {
        Value::Bytes(b.into())
    }

    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Arc::from(items))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::from(items))
    }

    /// Build a mapping, keeping the first-seen order of keys.
    pub fn dict(entries: impl IntoIterator<Item = (Text, Value)>) -> Self {
        Value::Dict(Arc::new(entries.into_iter().collect()))
    }

    pub fn object(obj: impl RuntimeObject + 'static) -> Self {
        Value::Object(Arc::new(obj))
    }
}

impl Value {
    /// Runtime type name, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::Tuple(_) => "tuple",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
            Value::Object(obj) => obj.type_name(),
        }
    }

    /// The value as an index, if it is an integer that fits in `i64`.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Value::Int(n) => n.to_i64(),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// The value as a number (booleans count as integers).
    pub fn as_number(&self) -> Option<Number<'_>> {
        match self {
            Value::Int(n) => Some(Number::from(n)),
            Value::Bool(b) => Some(Number::from(BigInt::from(u8::from(*b)))),
            Value::Float(x) => Some(Number::Float(*x)),
            _ => None,
        }
    }

    /// Whether `%(key)` lookups apply to this value.
    pub fn is_mapping(&self) -> bool {
        match self {
            Value::Dict(_) => true,
            Value::Object(obj) => obj.is_mapping(),
            _ => false,
        }
    }

    /// Look up `key` in a mapping value. `None` when this is not a mapping.
    pub fn get_item(&self, key: &Text) -> Option<StrResult<Value>> {
        match self {
            Value::Dict(map) => Some(
                map.get(key)
                    .cloned()
                    .ok_or_else(|| key_not_found(&key.repr(CompatMode::Modern).to_string())),
            ),
            Value::Object(obj) if obj.is_mapping() => obj.get_item(key),
            _ => None,
        }
    }

    /// Elements of an iterable value.
    ///
    /// Text yields one-character texts, bytes yield integers and mappings
    /// yield their keys.
    pub fn iter_values(&self) -> StrResult<Vec<Value>> {
        match self {
            Value::Tuple(items) | Value::List(items) => Ok(items.to_vec()),
            Value::Dict(map) => Ok(map.keys().cloned().map(Value::Text).collect()),
            Value::Text(text) => Ok(text.iter().map(Value::Text).collect()),
            Value::Bytes(bytes) => Ok(bytes.iter().map(|b| Value::int(i64::from(b))).collect()),
            Value::Object(obj) => obj
                .iter_values()
                .ok_or_else(|| not_iterable(obj.type_name())),
            other => Err(not_iterable(other.type_name())),
        }
    }

    /// Same-kind sequence comparison. Different kinds are not comparable
    /// (`None`), leaving the decision to the caller.
    pub fn rich_compare(&self, other: &Value, op: CompareOp) -> Option<bool> {
        let ordering = match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
            _ => return None,
        };
        Some(op.holds(ordering))
    }

    /// String form (`str()`).
    pub fn to_str(&self, mode: CompatMode) -> String {
        match self {
            Value::Text(text) => text.to_string_lossy(),
            Value::Object(obj) => obj.str(),
            other => other.to_repr(mode),
        }
    }

    /// Debug representation (`repr()`).
    pub fn to_repr(&self, mode: CompatMode) -> String {
        match self {
            Value::None => "None".to_string(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(x) => float_repr(*x),
            Value::Text(text) => crate::repr::text_repr(text, mode),
            Value::Bytes(bytes) => crate::repr::bytes_repr(bytes),
            Value::Tuple(items) if items.len() == 1 => {
                format!("({},)", items[0].to_repr(mode))
            }
            Value::Tuple(items) => format!("({})", join_reprs(items.iter(), mode)),
            Value::List(items) => format!("[{}]", join_reprs(items.iter(), mode)),
            Value::Dict(map) => {
                let entries: Vec<String> = map
                    .iter()
                    .map(|(k, v)| {
                        format!(
                            "{}: {}",
                            crate::repr::text_repr(k, mode),
                            v.to_repr(mode)
                        )
                    })
                    .collect();
                format!("{{{}}}", entries.join(", "))
            }
            Value::Object(obj) => obj.repr(),
        }
    }
}

fn join_reprs<'a>(items: impl Iterator<Item = &'a Value>, mode: CompatMode) -> String {
    items
        .map(|v| v.to_repr(mode))
        .collect::<Vec<_>>()
        .join(", ")
}

impl PartialEq for Value {
    #[allow(clippy::float_cmp, reason = "value equality is exact float equality")]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) | (Value::List(a), Value::List(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str(CompatMode::Modern))
    }
}

impl From<Text> for Value {
    fn from(text: Text) -> Self {
        Value::Text(text)
    }
}

impl From<Bytes> for Value {
    fn from(bytes: Bytes) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(Text::from(s))
    }
}

#[cfg(test)]
mod tests;
