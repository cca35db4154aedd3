//! Method dispatch for text and bytes receivers.
//!
//! The receiver set is fixed (`str` and `bytes`), so dispatch is a match on
//! the method name. Methods specific to one kind are handled first; every
//! shared method goes through one generic dispatcher over [`FormatTarget`].

mod helpers;

use num::Signed;
use skein_ir::{CompatMode, SliceRange};
use skein_value::{
    concat_kind, contains_operand, index_out_of_range, index_overflow, index_type,
    negative_repeat, no_such_method, repeat_count, Bytes, Sequence, SequenceOps, StrResult,
    Text, Value,
};

use crate::format::{apply_format, format_with_spec, FormatTarget};

pub use helpers::SEQUENCE_METHODS;
use helpers::{
    len_to_value, optional_bool_arg, optional_int_arg, optional_same_kind,
    optional_str_arg, require_args, require_int_arg, require_same_kind, require_strict,
};

/// Call `method` on a text or bytes receiver.
///
/// Unknown names, and receivers of any other type, raise an
/// `AttributeError`.
pub fn call_method(
    receiver: &Value,
    method: &str,
    args: &[Value],
    mode: CompatMode,
) -> StrResult<Value> {
    tracing::trace!(receiver = receiver.type_name(), method, args = args.len(), "call_method");
    match receiver {
        Value::Text(text) => dispatch_text_method(text, method, args, mode),
        Value::Bytes(bytes) => dispatch_bytes_method(bytes, method, args, mode),
        other => Err(no_such_method(method, other.type_name())),
    }
}

fn dispatch_text_method(
    text: &Text,
    method: &str,
    args: &[Value],
    mode: CompatMode,
) -> StrResult<Value> {
    match method {
        "__contains__" => {
            require_args(method, 1, 1, args.len())?;
            match &args[0] {
                Value::Text(needle) => Ok(Value::Bool(text.contains(needle))),
                other => Err(contains_operand("string", "string", other.type_name())),
            }
        }
        "__format__" => {
            require_args(method, 1, 1, args.len())?;
            Ok(Value::Text(format_with_spec(text, &args[0])?))
        }
        "encode" => {
            require_args(method, 0, 2, args.len())?;
            let encoding = optional_str_arg(method, args, 0)?;
            require_strict(optional_str_arg(method, args, 1)?.as_deref())?;
            Ok(Value::Bytes(text.encode(encoding.as_deref())?))
        }
        _ => dispatch_sequence(text, method, args, mode),
    }
}

fn dispatch_bytes_method(
    bytes: &Bytes,
    method: &str,
    args: &[Value],
    mode: CompatMode,
) -> StrResult<Value> {
    match method {
        "__contains__" => {
            require_args(method, 1, 1, args.len())?;
            Ok(Value::Bool(bytes.contains_value(&args[0])?))
        }
        "decode" => {
            require_args(method, 0, 2, args.len())?;
            let encoding = optional_str_arg(method, args, 0)?;
            require_strict(optional_str_arg(method, args, 1)?.as_deref())?;
            Ok(Value::Text(bytes.decode(encoding.as_deref())?))
        }
        "hex" => {
            require_args(method, 0, 0, args.len())?;
            Ok(Value::Text(bytes.hex()))
        }
        "fromhex" => {
            require_args(method, 1, 1, args.len())?;
            let digits = require_same_kind::<Text>(method, args, 0)?;
            Ok(Value::Bytes(Bytes::fromhex(digits)?))
        }
        _ => dispatch_sequence(bytes, method, args, mode),
    }
}

/// Methods shared by both kinds.
fn dispatch_sequence<S: FormatTarget>(
    seq: &S,
    method: &str,
    args: &[Value],
    mode: CompatMode,
) -> StrResult<Value> {
    let kind = S::KIND;
    match method {
        // Operators
        "__len__" => {
            require_args(method, 0, 0, args.len())?;
            len_to_value(seq.len())
        }
        "__getitem__" => {
            require_args(method, 1, 1, args.len())?;
            match &args[0] {
                index @ (Value::Int(_) | Value::Bool(_)) => {
                    let index = index
                        .as_index()
                        .ok_or_else(|| index_out_of_range(kind.english_name()))?;
                    Ok(S::item_value(seq.get(index)?))
                }
                other => Err(index_type(kind.english_name(), other.type_name())),
            }
        }
        "__add__" => {
            require_args(method, 1, 1, args.len())?;
            match S::downcast(&args[0]) {
                Some(other) => Ok(seq.concat(other).into_value()),
                None => Err(concat_kind(kind.type_name(), args[0].type_name())),
            }
        }
        "__mul__" => {
            require_args(method, 1, 1, args.len())?;
            let count = repeat_argument(&args[0])?;
            Ok(seq.repeat(count)?.into_value())
        }
        "__mod__" => {
            require_args(method, 1, 1, args.len())?;
            Ok(apply_format(seq, &args[0], mode)?.into_value())
        }
        "__repr__" | "__str__" => {
            require_args(method, 0, 0, args.len())?;
            let value = seq.clone().into_value();
            let rendered = if method == "__repr__" {
                value.to_repr(mode)
            } else {
                value.to_str(mode)
            };
            Ok(Value::text(rendered))
        }

        // Slicing
        "slice" => {
            require_args(method, 0, 3, args.len())?;
            let start = optional_int_arg(args, 0)?;
            let stop = optional_int_arg(args, 1)?;
            match optional_int_arg(args, 2)? {
                None => Ok(seq.slice(start, stop).into_value()),
                step => Ok(seq
                    .slice_with(&SliceRange::new(start, stop, step))?
                    .into_value()),
            }
        }

        // Searching
        "find" | "rfind" => {
            require_args(method, 1, 3, args.len())?;
            let (needle, start, end) = search_args::<S>(method, args)?;
            let hit = if method == "find" {
                seq.find(needle, start, end)
            } else {
                seq.rfind(needle, start, end)
            };
            Ok(Value::int(hit))
        }
        "index" | "rindex" => {
            require_args(method, 1, 3, args.len())?;
            let (needle, start, end) = search_args::<S>(method, args)?;
            let hit = if method == "index" {
                seq.index(needle, start, end)?
            } else {
                seq.rindex(needle, start, end)?
            };
            len_to_value(hit)
        }
        "count" => {
            require_args(method, 1, 3, args.len())?;
            let (needle, start, end) = search_args::<S>(method, args)?;
            len_to_value(seq.count(needle, start, end))
        }
        "startswith" => {
            require_args(method, 1, 1, args.len())?;
            let prefix = require_same_kind::<S>(method, args, 0)?;
            Ok(Value::Bool(seq.startswith(prefix)))
        }
        "endswith" => {
            require_args(method, 1, 1, args.len())?;
            let suffix = require_same_kind::<S>(method, args, 0)?;
            Ok(Value::Bool(seq.endswith(suffix)))
        }

        // Stripping
        "strip" | "lstrip" | "rstrip" => {
            require_args(method, 0, 1, args.len())?;
            let chars = optional_same_kind::<S>(method, args, 0)?;
            let stripped = match method {
                "lstrip" => seq.lstrip(chars),
                "rstrip" => seq.rstrip(chars),
                _ => seq.strip(chars),
            };
            Ok(stripped.into_value())
        }

        // Splitting and joining
        "split" => {
            require_args(method, 0, 2, args.len())?;
            let sep = optional_same_kind::<S>(method, args, 0)?;
            let maxsplit = optional_int_arg(args, 1)?;
            Ok(list_of(seq.split(sep, maxsplit)?))
        }
        "splitlines" => {
            require_args(method, 0, 1, args.len())?;
            let keepends = optional_bool_arg(method, args, 0)?;
            Ok(list_of(seq.splitlines(keepends)))
        }
        "partition" | "rpartition" => {
            require_args(method, 1, 1, args.len())?;
            let sep = require_same_kind::<S>(method, args, 0)?;
            let (head, found, tail) = if method == "partition" {
                seq.partition(sep)?
            } else {
                seq.rpartition(sep)?
            };
            Ok(Value::tuple(vec![
                head.into_value(),
                found.into_value(),
                tail.into_value(),
            ]))
        }
        "join" => {
            require_args(method, 1, 1, args.len())?;
            let items = args[0].iter_values()?;
            Ok(seq.join_values(&items)?.into_value())
        }
        "replace" => {
            require_args(method, 2, 3, args.len())?;
            let old = require_same_kind::<S>(method, args, 0)?;
            let new = require_same_kind::<S>(method, args, 1)?;
            let count = optional_int_arg(args, 2)?;
            Ok(seq.replace(old, new, count).into_value())
        }

        // Case transforms
        "lower" => transform(method, args, || seq.lower()),
        "upper" => transform(method, args, || seq.upper()),
        "swapcase" => transform(method, args, || seq.swapcase()),
        "capitalize" => transform(method, args, || seq.capitalize()),
        "title" => transform(method, args, || seq.title()),

        // Predicates
        "isdigit" => predicate(method, args, || seq.isdigit()),
        "isnumeric" => predicate(method, args, || seq.isnumeric()),
        "isalpha" => predicate(method, args, || seq.isalpha()),
        "isalnum" => predicate(method, args, || seq.isalnum()),
        "isspace" => predicate(method, args, || seq.isspace()),
        "islower" => predicate(method, args, || seq.islower()),
        "isupper" => predicate(method, args, || seq.isupper()),
        "istitle" => predicate(method, args, || seq.istitle()),

        // Layout
        "ljust" | "rjust" | "center" => {
            require_args(method, 1, 2, args.len())?;
            let width = require_int_arg(method, args, 0)?;
            let fill = optional_same_kind::<S>(method, args, 1)?;
            let padded = match method {
                "ljust" => seq.ljust(width, fill)?,
                "rjust" => seq.rjust(width, fill)?,
                _ => seq.center(width, fill)?,
            };
            Ok(padded.into_value())
        }
        "zfill" => {
            require_args(method, 1, 1, args.len())?;
            let width = require_int_arg(method, args, 0)?;
            Ok(seq.zfill(width)?.into_value())
        }
        "expandtabs" => {
            require_args(method, 0, 1, args.len())?;
            let tabsize = optional_int_arg(args, 0)?;
            Ok(seq.expandtabs(tabsize)?.into_value())
        }

        _ => Err(no_such_method(method, kind.type_name())),
    }
}

/// `(sub[, start[, end]])` for the search family.
fn search_args<'a, S: Sequence>(
    method: &str,
    args: &'a [Value],
) -> StrResult<(&'a S, Option<i64>, Option<i64>)> {
    let needle = require_same_kind::<S>(method, args, 0)?;
    Ok((needle, optional_int_arg(args, 1)?, optional_int_arg(args, 2)?))
}

/// Count for `*`. Integers too large for `i64` are still rejected by sign.
fn repeat_argument(arg: &Value) -> StrResult<i64> {
    match arg {
        Value::Int(n) => match arg.as_index() {
            Some(count) => Ok(count),
            None if n.is_negative() => Err(negative_repeat(n)),
            None => Err(index_overflow()),
        },
        Value::Bool(b) => Ok(i64::from(*b)),
        other => Err(repeat_count(other.type_name())),
    }
}

fn transform<S: Sequence>(method: &str, args: &[Value], f: impl FnOnce() -> S) -> StrResult<Value> {
    require_args(method, 0, 0, args.len())?;
    Ok(f().into_value())
}

fn predicate(method: &str, args: &[Value], f: impl FnOnce() -> bool) -> StrResult<Value> {
    require_args(method, 0, 0, args.len())?;
    Ok(Value::Bool(f()))
}

fn list_of<S: Sequence>(parts: Vec<S>) -> Value {
    Value::list(parts.into_iter().map(Sequence::into_value).collect())
}
