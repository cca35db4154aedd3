//! Skein IR - leaf data structures for the string value core.
//!
//! This crate holds the pieces with no dependency on runtime values:
//! - `CodepointIndex`: logical-character offsets over UTF-16 storage
//! - `ContentInterner`: sharded canonical-instance cache
//! - `parse_template`: the `%` format mini-language parser
//! - `SliceRange`: slice descriptors yielding logical indices
//! - `CompatMode`: modern vs. legacy string semantics
//!
//! # Design Philosophy
//!
//! - **Storage vs. logical**: every offset is either a storage unit or a
//!   logical character; conversion goes through `CodepointIndex` only.
//! - **Explicit services**: the interner is a value handed to constructors,
//!   never a global.

mod codepoint_index;
mod compat;
mod interner;
pub mod percent_spec;
mod slice;

pub use codepoint_index::{
    codepoint_count, is_high_surrogate, is_low_surrogate, is_surrogate, CodepointIndex, IndexState,
};
pub use compat::{CompatMode, UnknownCompatMode};
pub use interner::{ContentInterner, SharedContentInterner, NUM_SHARDS};
pub use percent_spec::{
    parse_template, Conversion, ConversionFlags, ConversionSpec, PercentSpecError, TemplatePiece,
    TemplatePieces,
};
pub use slice::{SliceError, SliceIndices, SliceIter, SliceRange};
