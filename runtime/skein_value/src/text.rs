//! Immutable text values backed by UTF-16 code units.
//!
//! A `Text` owns its units behind an `Arc`, so clones are cheap and the lazily
//! computed codepoint index is shared by every clone of the same instance.

use skein_ir::{CodepointIndex, CompatMode, IndexState};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::sync::{Arc, OnceLock};

use crate::bytes::Bytes;
use crate::errors::StrResult;
use crate::iter::SequenceIterator;
use crate::sequence::{SeqKind, Sequence};
use crate::value::Value;
use crate::{codec, repr};

struct TextData {
    units: Box<[u16]>,
    /// Computed at most once; never changes afterwards.
    index: OnceLock<CodepointIndex>,
}

/// Immutable character sequence.
///
/// Equality, hashing and ordering compare storage content, never identity.
/// Use [`Text::is_same`] for identity.
#[derive(Clone)]
pub struct Text(Arc<TextData>);

impl Text {
    /// Build from owned UTF-16 units.
    pub fn from_boxed(units: Box<[u16]>) -> Self {
        Text(Arc::new(TextData {
            units,
            index: OnceLock::new(),
        }))
    }

    /// Build from a vector of UTF-16 units.
    pub fn from_utf16(units: Vec<u16>) -> Self {
        Self::from_boxed(units.into_boxed_slice())
    }

    /// The empty text.
    pub fn empty() -> Self {
        Self::from_boxed(Box::default())
    }

    /// Storage units.
    #[inline]
    pub fn as_units(&self) -> &[u16] {
        &self.0.units
    }

    /// Number of storage units (not characters).
    #[inline]
    pub fn storage_len(&self) -> usize {
        self.0.units.len()
    }

    /// Current index state, without forcing computation.
    pub fn index_state(&self) -> IndexState<'_> {
        IndexState::of(self.0.index.get())
    }

    /// Whether both handles point at the same instance.
    #[inline]
    pub fn is_same(&self, other: &Text) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Decode to a Rust string, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        char::decode_utf16(self.0.units.iter().copied())
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }

    /// The single character this text holds, if it holds exactly one.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = char::decode_utf16(self.0.units.iter().copied());
        let first = chars.next()?.ok()?;
        chars.next().is_none().then_some(first)
    }

    /// Encode to bytes (`utf-8` only).
    pub fn encode(&self, encoding: Option<&str>) -> StrResult<Bytes> {
        codec::encode(self, encoding)
    }

    /// Quoted, escaped representation.
    pub fn repr(&self, mode: CompatMode) -> Text {
        Text::from(repr::text_repr(self, mode))
    }

    /// Iterate single-character texts.
    pub fn iter(&self) -> SequenceIterator<Text> {
        SequenceIterator::new(self.clone())
    }
}

impl Sequence for Text {
    type Unit = u16;
    type Item = Text;
    const KIND: SeqKind = SeqKind::Text;

    #[inline]
    fn units(&self) -> &[u16] {
        self.as_units()
    }

    fn from_units(units: Vec<u16>) -> Self {
        Text::from_utf16(units)
    }

    /// Computed on first call and cached for every clone.
    fn codepoint_index(&self) -> &CodepointIndex {
        self.0
            .index
            .get_or_init(|| CodepointIndex::compute(&self.0.units))
    }

    fn make_item(&self, storage: Range<usize>) -> Text {
        Text::from_boxed(Box::from(&self.0.units[storage]))
    }

    #[inline]
    fn from_ascii(byte: u8) -> u16 {
        u16::from(byte)
    }

    #[inline]
    fn is_space(unit: u16) -> bool {
        char::from_u32(u32::from(unit)).is_some_and(char::is_whitespace)
    }

    fn downcast(value: &Value) -> Option<&Self> {
        match value {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn item_value(item: Text) -> Value {
        Value::Text(item)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::from_utf16(s.encode_utf16().collect())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::from(s.as_str())
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other) || self.0.units == other.0.units
    }
}

impl Eq for Text {}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.0.units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialOrd for Text {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Text {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.units.cmp(&other.0.units)
    }
}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.units.hash(state);
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({})", repr::text_repr(self, CompatMode::Modern))
    }
}

impl<'a> IntoIterator for &'a Text {
    type Item = Text;
    type IntoIter = SequenceIterator<Text>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
