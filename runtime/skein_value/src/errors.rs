//! Error types for text and byte operations.
//!
//! # Structured Error Categories
//!
//! `StrErrorKind` carries the structured data for each failure; `category()`
//! maps it onto the exception class the surrounding runtime raises. Factory
//! functions (e.g. `empty_separator()`) are the public constructors and
//! populate both `kind` and `message`.

use skein_ir::{PercentSpecError, SliceError};
use std::fmt;

/// Result of a text or byte operation.
pub type StrResult<T> = Result<T, StrError>;

/// Exception class a failure surfaces as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    TypeError,
    ValueError,
    IndexError,
    KeyError,
    AttributeError,
    UnicodeEncodeError,
    UnicodeDecodeError,
    NotImplementedError,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TypeError => "TypeError",
            Self::ValueError => "ValueError",
            Self::IndexError => "IndexError",
            Self::KeyError => "KeyError",
            Self::AttributeError => "AttributeError",
            Self::UnicodeEncodeError => "UnicodeEncodeError",
            Self::UnicodeDecodeError => "UnicodeDecodeError",
            Self::NotImplementedError => "NotImplementedError",
        }
    }

    /// Both Unicode categories are subclasses of one `UnicodeError`.
    pub fn is_unicode_error(self) -> bool {
        matches!(self, Self::UnicodeEncodeError | Self::UnicodeDecodeError)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed failure with the data needed to render its message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StrErrorKind {
    // Kind/argument mismatches
    ConcatKind {
        left: &'static str,
        right: String,
    },
    RepeatCount {
        got: String,
    },
    NegativeRepeat {
        count: String,
    },
    WrongArgType {
        method: String,
        expected: String,
        got: String,
    },
    ArityMismatch {
        method: String,
        min: usize,
        max: usize,
        got: usize,
    },
    JoinItem {
        position: usize,
        expected: &'static str,
        got: String,
    },
    ContainsOperand {
        container: &'static str,
        expected: &'static str,
        got: String,
    },
    FillChar,
    NotAnInteger {
        got: String,
    },
    StringWithoutEncoding,
    EncodingWithoutString,
    DecodingUnsupported {
        got: String,
    },
    NotIterable {
        got: String,
    },
    IndexType {
        container: &'static str,
        got: String,
    },

    // Format engine
    NotEnoughFormatArgs,
    FormatRequiresMapping,
    FormatArgType {
        conversion: char,
        expected: &'static str,
        got: String,
    },
    FormatTemplate {
        detail: String,
    },
    FormatSpecType {
        got: String,
    },

    // Values
    EmptySeparator,
    SubstringNotFound,
    ByteOutOfRange {
        context: &'static str,
    },
    UnknownEncoding {
        encoding: String,
    },
    UnknownErrorHandler {
        handler: String,
    },
    NonHexDigit {
        position: usize,
    },
    CharOutOfRange,
    ZeroStep,
    NegativeCount,
    IndexOverflow,
    FloatToInt {
        value: String,
    },

    // Lookup
    IndexOutOfRange {
        container: &'static str,
    },
    KeyNotFound {
        key: String,
    },
    NoSuchMethod {
        method: String,
        type_name: &'static str,
    },

    // Codec
    UnpairedSurrogate {
        position: usize,
        unit: u16,
    },
    InvalidUtf8 {
        position: usize,
        byte: u8,
    },

    // Unsupported
    UnsupportedFormatSpec {
        spec: String,
    },
}

impl StrErrorKind {
    /// Exception class for this failure.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConcatKind { .. }
            | Self::RepeatCount { .. }
            | Self::NegativeRepeat { .. }
            | Self::WrongArgType { .. }
            | Self::ArityMismatch { .. }
            | Self::JoinItem { .. }
            | Self::ContainsOperand { .. }
            | Self::FillChar
            | Self::NotAnInteger { .. }
            | Self::StringWithoutEncoding
            | Self::EncodingWithoutString
            | Self::DecodingUnsupported { .. }
            | Self::NotIterable { .. }
            | Self::IndexType { .. }
            | Self::NotEnoughFormatArgs
            | Self::FormatRequiresMapping
            | Self::FormatArgType { .. }
            | Self::FormatTemplate { .. }
            | Self::FormatSpecType { .. } => ErrorCategory::TypeError,

            Self::EmptySeparator
            | Self::SubstringNotFound
            | Self::ByteOutOfRange { .. }
            | Self::UnknownEncoding { .. }
            | Self::UnknownErrorHandler { .. }
            | Self::NonHexDigit { .. }
            | Self::CharOutOfRange
            | Self::ZeroStep
            | Self::NegativeCount
            | Self::IndexOverflow
            | Self::FloatToInt { .. } => ErrorCategory::ValueError,

            Self::IndexOutOfRange { .. } => ErrorCategory::IndexError,
            Self::KeyNotFound { .. } => ErrorCategory::KeyError,
            Self::NoSuchMethod { .. } => ErrorCategory::AttributeError,
            Self::UnpairedSurrogate { .. } => ErrorCategory::UnicodeEncodeError,
            Self::InvalidUtf8 { .. } => ErrorCategory::UnicodeDecodeError,
            Self::UnsupportedFormatSpec { .. } => ErrorCategory::NotImplementedError,
        }
    }
}

impl fmt::Display for StrErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConcatKind { left, right } => {
                write!(f, "can only concatenate {left} (not \"{right}\") to {left}")
            }
            Self::RepeatCount { got } => {
                write!(f, "can't multiply sequence by non-int of type '{got}'")
            }
            Self::NegativeRepeat { count } => {
                write!(f, "repeat count must be non-negative, got {count}")
            }
            Self::WrongArgType {
                method,
                expected,
                got,
            } => write!(f, "{method}() argument must be {expected}, not {got}"),
            Self::ArityMismatch {
                method,
                min,
                max,
                got,
            } => {
                let arg_word = if *max == 1 { "argument" } else { "arguments" };
                if min == max {
                    write!(f, "{method}() takes exactly {max} {arg_word} ({got} given)")
                } else if *got < *min {
                    write!(f, "{method}() takes at least {min} arguments ({got} given)")
                } else {
                    write!(f, "{method}() takes at most {max} {arg_word} ({got} given)")
                }
            }
            Self::JoinItem {
                position,
                expected,
                got,
            } => write!(
                f,
                "sequence item {position}: expected {expected} instance, {got} found"
            ),
            Self::ContainsOperand {
                container,
                expected,
                got,
            } => write!(
                f,
                "'in <{container}>' requires {expected} as left operand, not {got}"
            ),
            Self::FillChar => {
                write!(f, "the fill character must be exactly one character long")
            }
            Self::NotAnInteger { got } => {
                write!(f, "'{got}' object cannot be interpreted as an integer")
            }
            Self::StringWithoutEncoding => write!(f, "string argument without an encoding"),
            Self::EncodingWithoutString => write!(f, "encoding without a string argument"),
            Self::DecodingUnsupported { got } => write!(f, "decoding {got} is not supported"),
            Self::NotIterable { got } => write!(f, "'{got}' object is not iterable"),
            Self::IndexType { container, got } => {
                write!(f, "{container} indices must be integers, not {got}")
            }
            Self::NotEnoughFormatArgs => write!(f, "not enough arguments for format string"),
            Self::FormatRequiresMapping => write!(f, "format requires a mapping"),
            Self::FormatArgType {
                conversion,
                expected,
                got,
            } => write!(f, "%{conversion} format: {expected} is required, not {got}"),
            Self::FormatTemplate { detail } => write!(f, "invalid format string: {detail}"),
            Self::FormatSpecType { got } => {
                write!(f, "format spec must be a str, not {got}")
            }
            Self::EmptySeparator => write!(f, "empty separator"),
            Self::SubstringNotFound => write!(f, "substring not found"),
            Self::ByteOutOfRange { context } => {
                write!(f, "{context} must be in range(0, 256)")
            }
            Self::UnknownEncoding { encoding } => write!(f, "unknown encoding: {encoding}"),
            Self::UnknownErrorHandler { handler } => {
                write!(f, "unsupported error handler '{handler}'")
            }
            Self::NonHexDigit { position } => write!(
                f,
                "non-hexadecimal number found in fromhex() arg at position {position}"
            ),
            Self::CharOutOfRange => write!(f, "%c arg not in range(0x110000)"),
            Self::ZeroStep => write!(f, "slice step cannot be zero"),
            Self::NegativeCount => write!(f, "negative count"),
            Self::IndexOverflow => {
                write!(f, "cannot fit 'int' into an index-sized integer")
            }
            Self::FloatToInt { value } => {
                write!(f, "cannot convert float {value} to integer")
            }
            Self::IndexOutOfRange { container } => write!(f, "{container} index out of range"),
            Self::KeyNotFound { key } => write!(f, "{key}"),
            Self::NoSuchMethod { method, type_name } => {
                write!(f, "'{type_name}' object has no attribute '{method}'")
            }
            Self::UnpairedSurrogate { position, unit } => write!(
                f,
                "'utf-8' codec can't encode character '\\u{unit:04x}' in position {position}: surrogates not allowed"
            ),
            Self::InvalidUtf8 { position, byte } => write!(
                f,
                "'utf-8' codec can't decode byte 0x{byte:02x} in position {position}: invalid utf-8 sequence"
            ),
            Self::UnsupportedFormatSpec { spec } => {
                write!(f, "format spec '{spec}' is not supported")
            }
        }
    }
}

/// Failure of a text or byte operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrError {
    /// Structured failure data.
    pub kind: StrErrorKind,
    /// Human-readable message (equals `kind.to_string()`).
    pub message: String,
}

impl StrError {
    /// Create an error from a structured kind.
    fn from_kind(kind: StrErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    /// Exception class this error surfaces as.
    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl fmt::Display for StrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.message)
    }
}

impl std::error::Error for StrError {}

impl From<SliceError> for StrError {
    fn from(err: SliceError) -> Self {
        match err {
            SliceError::ZeroStep => zero_step(),
        }
    }
}

impl From<PercentSpecError> for StrError {
    fn from(err: PercentSpecError) -> Self {
        format_template(&err.to_string())
    }
}

// Kind and argument errors

/// `+` between different kinds.
#[cold]
pub fn concat_kind(left: &'static str, right: &str) -> StrError {
    StrError::from_kind(StrErrorKind::ConcatKind {
        left,
        right: right.to_string(),
    })
}

/// `*` with a non-integer count.
#[cold]
pub fn repeat_count(got: &str) -> StrError {
    StrError::from_kind(StrErrorKind::RepeatCount {
        got: got.to_string(),
    })
}

/// `*` with a negative count.
#[cold]
pub fn negative_repeat(count: impl fmt::Display) -> StrError {
    StrError::from_kind(StrErrorKind::NegativeRepeat {
        count: count.to_string(),
    })
}

/// Argument of the wrong type for a method.
#[cold]
pub fn wrong_arg_type(method: &str, expected: &str, got: &str) -> StrError {
    StrError::from_kind(StrErrorKind::WrongArgType {
        method: method.to_string(),
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Wrong number of arguments for a method.
#[cold]
pub fn wrong_arg_count(method: &str, min: usize, max: usize, got: usize) -> StrError {
    StrError::from_kind(StrErrorKind::ArityMismatch {
        method: method.to_string(),
        min,
        max,
        got,
    })
}

/// `join` element of the wrong kind.
#[cold]
pub fn join_item(position: usize, expected: &'static str, got: &str) -> StrError {
    StrError::from_kind(StrErrorKind::JoinItem {
        position,
        expected,
        got: got.to_string(),
    })
}

/// `in` with an unsupported left operand.
#[cold]
pub fn contains_operand(container: &'static str, expected: &'static str, got: &str) -> StrError {
    StrError::from_kind(StrErrorKind::ContainsOperand {
        container,
        expected,
        got: got.to_string(),
    })
}

/// Padding fill that is not exactly one character.
#[cold]
pub fn fill_char() -> StrError {
    StrError::from_kind(StrErrorKind::FillChar)
}

/// Value that cannot be used as an integer.
#[cold]
pub fn not_an_integer(got: &str) -> StrError {
    StrError::from_kind(StrErrorKind::NotAnInteger {
        got: got.to_string(),
    })
}

#[cold]
pub fn string_without_encoding() -> StrError {
    StrError::from_kind(StrErrorKind::StringWithoutEncoding)
}

#[cold]
pub fn encoding_without_string() -> StrError {
    StrError::from_kind(StrErrorKind::EncodingWithoutString)
}

/// Decoding requested for a non-bytes source.
#[cold]
pub fn decoding_unsupported(got: &str) -> StrError {
    StrError::from_kind(StrErrorKind::DecodingUnsupported {
        got: got.to_string(),
    })
}

#[cold]
pub fn not_iterable(got: &str) -> StrError {
    StrError::from_kind(StrErrorKind::NotIterable {
        got: got.to_string(),
    })
}

/// Subscript with something other than an integer or slice.
#[cold]
pub fn index_type(container: &'static str, got: &str) -> StrError {
    StrError::from_kind(StrErrorKind::IndexType {
        container,
        got: got.to_string(),
    })
}

// Format engine errors

#[cold]
pub fn not_enough_format_args() -> StrError {
    StrError::from_kind(StrErrorKind::NotEnoughFormatArgs)
}

#[cold]
pub fn format_requires_mapping() -> StrError {
    StrError::from_kind(StrErrorKind::FormatRequiresMapping)
}

/// Argument of the wrong type for a conversion.
#[cold]
pub fn format_arg_type(conversion: char, expected: &'static str, got: &str) -> StrError {
    StrError::from_kind(StrErrorKind::FormatArgType {
        conversion,
        expected,
        got: got.to_string(),
    })
}

/// Template that cannot be interpreted.
#[cold]
pub fn format_template(detail: &str) -> StrError {
    StrError::from_kind(StrErrorKind::FormatTemplate {
        detail: detail.to_string(),
    })
}

/// `__format__` spec that is not text.
#[cold]
pub fn format_spec_type(got: &str) -> StrError {
    StrError::from_kind(StrErrorKind::FormatSpecType {
        got: got.to_string(),
    })
}

// Value errors

#[cold]
pub fn empty_separator() -> StrError {
    StrError::from_kind(StrErrorKind::EmptySeparator)
}

/// `index`/`rindex` miss.
#[cold]
pub fn substring_not_found() -> StrError {
    StrError::from_kind(StrErrorKind::SubstringNotFound)
}

/// Byte value outside `0..=255`. `context` is `"byte"` or `"bytes"`.
#[cold]
pub fn byte_out_of_range(context: &'static str) -> StrError {
    StrError::from_kind(StrErrorKind::ByteOutOfRange { context })
}

#[cold]
pub fn unknown_encoding(encoding: &str) -> StrError {
    StrError::from_kind(StrErrorKind::UnknownEncoding {
        encoding: encoding.to_string(),
    })
}

#[cold]
pub fn unknown_error_handler(handler: &str) -> StrError {
    StrError::from_kind(StrErrorKind::UnknownErrorHandler {
        handler: handler.to_string(),
    })
}

/// Malformed `fromhex` input.
#[cold]
pub fn non_hex_digit(position: usize) -> StrError {
    StrError::from_kind(StrErrorKind::NonHexDigit { position })
}

/// `%c` with a code point outside the Unicode range.
#[cold]
pub fn char_out_of_range() -> StrError {
    StrError::from_kind(StrErrorKind::CharOutOfRange)
}

#[cold]
pub fn zero_step() -> StrError {
    StrError::from_kind(StrErrorKind::ZeroStep)
}

/// Negative size passed to a constructor.
#[cold]
pub fn negative_count() -> StrError {
    StrError::from_kind(StrErrorKind::NegativeCount)
}

/// Integer too large for a size or index.
#[cold]
pub fn index_overflow() -> StrError {
    StrError::from_kind(StrErrorKind::IndexOverflow)
}

/// Non-finite float where an integer is needed.
#[cold]
pub fn float_to_int(value: &str) -> StrError {
    StrError::from_kind(StrErrorKind::FloatToInt {
        value: value.to_string(),
    })
}

// Lookup errors

/// Index outside `[0, len)`. `container` is `"string"` or `"bytes"`.
#[cold]
pub fn index_out_of_range(container: &'static str) -> StrError {
    StrError::from_kind(StrErrorKind::IndexOutOfRange { container })
}

/// Missing mapping key; `key` is already rendered as a repr.
#[cold]
pub fn key_not_found(key: &str) -> StrError {
    StrError::from_kind(StrErrorKind::KeyNotFound {
        key: key.to_string(),
    })
}

#[cold]
pub fn no_such_method(method: &str, type_name: &'static str) -> StrError {
    StrError::from_kind(StrErrorKind::NoSuchMethod {
        method: method.to_string(),
        type_name,
    })
}

// Codec errors

#[cold]
pub fn unpaired_surrogate(position: usize, unit: u16) -> StrError {
    StrError::from_kind(StrErrorKind::UnpairedSurrogate { position, unit })
}

#[cold]
pub fn invalid_utf8(position: usize, byte: u8) -> StrError {
    StrError::from_kind(StrErrorKind::InvalidUtf8 { position, byte })
}

// Unsupported

#[cold]
pub fn unsupported_format_spec(spec: &str) -> StrError {
    StrError::from_kind(StrErrorKind::UnsupportedFormatSpec {
        spec: spec.to_string(),
    })
}
