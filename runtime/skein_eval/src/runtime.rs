//! `StrRuntime`: the entry point a host runtime uses for text and bytes.
//!
//! Holds the shared [`TextInterner`] and the [`CompatMode`]; every
//! value-level operation goes through it so that text construction is
//! interned and mode-dependent rendering is consistent.

mod builder;

pub use builder::StrRuntimeBuilder;

use skein_ir::CompatMode;
use skein_value::{
    no_such_method, wrong_arg_type, Bytes, CompareOp, StrResult, Text, TextInterner, Value,
};

use crate::format::{apply_format, format_with_spec};
use crate::methods;

/// Text and bytes operations for one host runtime.
///
/// Cloning is cheap and shares the interner.
#[derive(Clone, Debug, Default)]
pub struct StrRuntime {
    interner: TextInterner,
    mode: CompatMode,
}

impl StrRuntime {
    /// Runtime in the default (modern) mode with a fresh interner.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> StrRuntimeBuilder {
        StrRuntimeBuilder::new()
    }

    pub fn mode(&self) -> CompatMode {
        self.mode
    }

    pub fn interner(&self) -> &TextInterner {
        &self.interner
    }

    /// `str(value)`, interned.
    pub fn text(&self, value: &Value) -> StrResult<Text> {
        self.interner.text_from(value, self.mode)
    }

    /// `str(bytes, encoding)`, interned.
    pub fn text_decoded(&self, value: &Value, encoding: &str) -> StrResult<Text> {
        self.interner.text_decoded(value, encoding)
    }

    /// `bytes(source, encoding, errors)`.
    pub fn bytes(
        &self,
        source: Option<&Value>,
        encoding: Option<&Value>,
        errors: Option<&Value>,
    ) -> StrResult<Bytes> {
        Bytes::from_value(source, encoding, errors)
    }

    /// `template % args` for a text or bytes template.
    pub fn format(&self, template: &Value, args: &Value) -> StrResult<Value> {
        match template {
            Value::Text(text) => Ok(Value::Text(apply_format(text, args, self.mode)?)),
            Value::Bytes(bytes) => Ok(Value::Bytes(apply_format(bytes, args, self.mode)?)),
            other => Err(no_such_method("__mod__", other.type_name())),
        }
    }

    /// `format(value, spec)` for a text value.
    pub fn format_with_spec(&self, value: &Value, spec: &Value) -> StrResult<Text> {
        match value {
            Value::Text(text) => format_with_spec(text, spec),
            other => Err(wrong_arg_type("format", "str", other.type_name())),
        }
    }

    /// `receiver.method(*args)`.
    pub fn call_method(&self, receiver: &Value, method: &str, args: &[Value]) -> StrResult<Value> {
        methods::call_method(receiver, method, args, self.mode)
    }

    /// Rich comparison; `None` when the operands are not the same kind.
    pub fn compare(&self, left: &Value, right: &Value, op: CompareOp) -> Option<bool> {
        left.rich_compare(right, op)
    }

    /// `repr(value)` under this runtime's mode, interned.
    pub fn repr(&self, value: &Value) -> Text {
        self.interner.intern(&value.to_repr(self.mode))
    }
}
