//! Skein Value - text and byte values for an embedded scripting runtime.
//!
//! This crate provides:
//! - `Text` (UTF-16 storage, logical codepoint offsets) and `Bytes`
//! - The `Sequence` kind trait and the shared `SequenceOps` algorithms
//! - UTF-8 and hex codecs, quoted representations
//! - `TextInterner`, the canonical-instance construction path
//! - The runtime `Value` model the string core consumes
//! - Structured errors (`StrError`, `StrResult`)
//!
//! # Offsets
//!
//! Public positions are logical characters. A supplementary-plane character
//! stored as a surrogate pair counts once; an unpaired surrogate counts as its
//! own character. Bytes have no such distinction.

mod bytes;
pub mod codec;
mod errors;
mod interning;
mod iter;
mod ops;
pub mod repr;
mod sequence;
mod text;
mod value;

pub use bytes::Bytes;
pub use errors::{ErrorCategory, StrError, StrErrorKind, StrResult};
pub use interning::TextInterner;
pub use iter::SequenceIterator;
pub use ops::SequenceOps;
pub use sequence::{SeqKind, Sequence};
pub use text::Text;
pub use value::{
    float_repr, magnitude_digits, CompareOp, Mapping, Number, RuntimeObject, Value,
};

// Re-export error constructors for use by other crates
pub use errors::{
    // Unicode errors
    invalid_utf8,
    unpaired_surrogate,
    // Argument errors
    contains_operand,
    fill_char,
    index_type,
    join_item,
    not_an_integer,
    not_iterable,
    wrong_arg_count,
    wrong_arg_type,
    // Operator errors
    concat_kind,
    negative_repeat,
    repeat_count,
    // Construction errors
    byte_out_of_range,
    decoding_unsupported,
    encoding_without_string,
    index_overflow,
    negative_count,
    string_without_encoding,
    unknown_encoding,
    unknown_error_handler,
    // Format errors
    char_out_of_range,
    float_to_int,
    format_arg_type,
    format_requires_mapping,
    format_spec_type,
    format_template,
    not_enough_format_args,
    unsupported_format_spec,
    // Lookup errors
    empty_separator,
    index_out_of_range,
    key_not_found,
    no_such_method,
    non_hex_digit,
    substring_not_found,
    zero_step,
};
