//! The kind trait shared by `Text` and `Bytes`.
//!
//! Every sequence algorithm is written once against [`Sequence`]; the two
//! value types only describe their storage unit, how to rebuild themselves
//! from units, and how they map to and from runtime values.

use skein_ir::CodepointIndex;
use std::fmt;
use std::hash::Hash;
use std::ops::Range;

use crate::value::Value;

/// Kind discriminator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SeqKind {
    Text,
    Bytes,
}

impl SeqKind {
    /// Runtime type name.
    pub fn type_name(self) -> &'static str {
        match self {
            SeqKind::Text => "str",
            SeqKind::Bytes => "bytes",
        }
    }

    /// Name used in messages such as "string index out of range".
    pub fn english_name(self) -> &'static str {
        match self {
            SeqKind::Text => "string",
            SeqKind::Bytes => "bytes",
        }
    }
}

impl fmt::Display for SeqKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Codepoint index for kinds whose storage never needs one.
pub(crate) static NO_INDEX: CodepointIndex = CodepointIndex::Absent;

/// A sequence kind: its storage unit and how to move between values and units.
pub trait Sequence: Clone + Sized {
    /// One storage element (`u16` for text, `u8` for bytes).
    type Unit: Copy + Eq + Ord + Hash + fmt::Debug + Into<u32>;
    /// What indexing and iteration yield.
    type Item;
    /// Which kind this is.
    const KIND: SeqKind;

    /// Storage units.
    fn units(&self) -> &[Self::Unit];

    /// Build a new value of this kind from owned units.
    fn from_units(units: Vec<Self::Unit>) -> Self;

    /// Logical-character index over the storage (computed on first use).
    fn codepoint_index(&self) -> &CodepointIndex;

    /// The element occupying `storage`.
    fn make_item(&self, storage: Range<usize>) -> Self::Item;

    /// Unit for an ASCII byte.
    fn from_ascii(byte: u8) -> Self::Unit;

    /// Whether `unit` is whitespace for splitting and stripping.
    fn is_space(unit: Self::Unit) -> bool;

    /// Borrow this kind out of a runtime value.
    fn downcast(value: &Value) -> Option<&Self>;

    /// Wrap into a runtime value.
    fn into_value(self) -> Value;

    /// Runtime value for an indexed element.
    fn item_value(item: Self::Item) -> Value;

    /// The unit as an ASCII byte, if it is one.
    #[inline]
    fn ascii(unit: Self::Unit) -> Option<u8> {
        u8::try_from(unit.into()).ok().filter(u8::is_ascii)
    }
}
