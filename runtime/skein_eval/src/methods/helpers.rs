//! Argument validation and shared utility functions.

use skein_value::{
    index_overflow, not_an_integer, unknown_error_handler, wrong_arg_count, wrong_arg_type,
    Sequence, StrResult, Value,
};

/// All methods reachable through [`call_method`](super::call_method).
///
/// Each entry is `(type_name, method_name)`, sorted by type then method.
pub const SEQUENCE_METHODS: &[(&str, &str)] = &[
    // bytes - operators
    ("bytes", "__add__"),
    ("bytes", "__contains__"),
    ("bytes", "__getitem__"),
    ("bytes", "__len__"),
    ("bytes", "__mod__"),
    ("bytes", "__mul__"),
    ("bytes", "__repr__"),
    ("bytes", "__str__"),
    // bytes - methods
    ("bytes", "capitalize"),
    ("bytes", "center"),
    ("bytes", "count"),
    ("bytes", "decode"),
    ("bytes", "endswith"),
    ("bytes", "expandtabs"),
    ("bytes", "find"),
    ("bytes", "fromhex"),
    ("bytes", "hex"),
    ("bytes", "index"),
    ("bytes", "isalnum"),
    ("bytes", "isalpha"),
    ("bytes", "isdigit"),
    ("bytes", "islower"),
    ("bytes", "isnumeric"),
    ("bytes", "isspace"),
    ("bytes", "istitle"),
    ("bytes", "isupper"),
    ("bytes", "join"),
    ("bytes", "ljust"),
    ("bytes", "lower"),
    ("bytes", "lstrip"),
    ("bytes", "partition"),
    ("bytes", "replace"),
    ("bytes", "rfind"),
    ("bytes", "rindex"),
    ("bytes", "rjust"),
    ("bytes", "rpartition"),
    ("bytes", "rstrip"),
    ("bytes", "slice"),
    ("bytes", "split"),
    ("bytes", "splitlines"),
    ("bytes", "startswith"),
    ("bytes", "strip"),
    ("bytes", "swapcase"),
    ("bytes", "title"),
    ("bytes", "upper"),
    ("bytes", "zfill"),
    // str - operators
    ("str", "__add__"),
    ("str", "__contains__"),
    ("str", "__format__"),
    ("str", "__getitem__"),
    ("str", "__len__"),
    ("str", "__mod__"),
    ("str", "__mul__"),
    ("str", "__repr__"),
    ("str", "__str__"),
    // str - methods
    ("str", "capitalize"),
    ("str", "center"),
    ("str", "count"),
    ("str", "encode"),
    ("str", "endswith"),
    ("str", "expandtabs"),
    ("str", "find"),
    ("str", "index"),
    ("str", "isalnum"),
    ("str", "isalpha"),
    ("str", "isdigit"),
    ("str", "islower"),
    ("str", "isnumeric"),
    ("str", "isspace"),
    ("str", "istitle"),
    ("str", "isupper"),
    ("str", "join"),
    ("str", "ljust"),
    ("str", "lower"),
    ("str", "lstrip"),
    ("str", "partition"),
    ("str", "replace"),
    ("str", "rfind"),
    ("str", "rindex"),
    ("str", "rjust"),
    ("str", "rpartition"),
    ("str", "rstrip"),
    ("str", "slice"),
    ("str", "split"),
    ("str", "splitlines"),
    ("str", "startswith"),
    ("str", "strip"),
    ("str", "swapcase"),
    ("str", "title"),
    ("str", "upper"),
    ("str", "zfill"),
];

/// Validate the argument count against `min..=max`.
#[inline]
pub fn require_args(method: &str, min: usize, max: usize, actual: usize) -> StrResult<()> {
    if (min..=max).contains(&actual) {
        Ok(())
    } else {
        Err(wrong_arg_count(method, min, max, actual))
    }
}

/// The argument at `index`, treating an explicit `None` as absent.
#[inline]
pub fn optional_arg(args: &[Value], index: usize) -> Option<&Value> {
    args.get(index).filter(|arg| !matches!(arg, Value::None))
}

/// Extract an argument of the receiver's kind.
#[inline]
pub fn require_same_kind<'a, S: Sequence>(
    method: &str,
    args: &'a [Value],
    index: usize,
) -> StrResult<&'a S> {
    let arg = args.get(index);
    arg.and_then(S::downcast).ok_or_else(|| {
        wrong_arg_type(
            method,
            S::KIND.type_name(),
            arg.map_or("nothing", Value::type_name),
        )
    })
}

/// Extract an optional argument of the receiver's kind.
#[inline]
pub fn optional_same_kind<'a, S: Sequence>(
    method: &str,
    args: &'a [Value],
    index: usize,
) -> StrResult<Option<&'a S>> {
    match optional_arg(args, index) {
        None => Ok(None),
        Some(arg) => S::downcast(arg)
            .map(Some)
            .ok_or_else(|| wrong_arg_type(method, S::KIND.type_name(), arg.type_name())),
    }
}

/// An integer value that fits in `i64`.
pub fn int_value(value: &Value) -> StrResult<i64> {
    match value {
        Value::Int(_) | Value::Bool(_) => value.as_index().ok_or_else(index_overflow),
        other => Err(not_an_integer(other.type_name())),
    }
}

/// Extract an integer argument at the given index.
#[inline]
pub fn require_int_arg(method: &str, args: &[Value], index: usize) -> StrResult<i64> {
    match args.get(index) {
        Some(arg) => int_value(arg),
        None => Err(wrong_arg_type(method, "int", "nothing")),
    }
}

/// Extract an optional integer argument at the given index.
#[inline]
pub fn optional_int_arg(args: &[Value], index: usize) -> StrResult<Option<i64>> {
    optional_arg(args, index).map(int_value).transpose()
}

/// Extract an optional flag; integers count by truthiness.
#[inline]
pub fn optional_bool_arg(method: &str, args: &[Value], index: usize) -> StrResult<bool> {
    match optional_arg(args, index) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(arg @ Value::Int(_)) => Ok(arg.as_index() != Some(0)),
        Some(other) => Err(wrong_arg_type(method, "bool", other.type_name())),
    }
}

/// Extract an optional text argument, such as an encoding name.
#[inline]
pub fn optional_str_arg(method: &str, args: &[Value], index: usize) -> StrResult<Option<String>> {
    match optional_arg(args, index) {
        None => Ok(None),
        Some(Value::Text(text)) => Ok(Some(text.to_string_lossy())),
        Some(other) => Err(wrong_arg_type(method, "str", other.type_name())),
    }
}

/// Only the `strict` error handler is available.
pub fn require_strict(handler: Option<&str>) -> StrResult<()> {
    match handler {
        None | Some("strict") => Ok(()),
        Some(other) => Err(unknown_error_handler(other)),
    }
}

/// Convert a length or offset to a value, with overflow check.
#[inline]
pub fn len_to_value(len: usize) -> StrResult<Value> {
    i64::try_from(len)
        .map(Value::int)
        .map_err(|_| index_overflow())
}
