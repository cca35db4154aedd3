//! Parser for `%`-style format templates.
//!
//! Recognizes conversion tokens of the form
//! `%[(key)][flags][width][.precision][length]type` inside a template made of
//! code units. A `%` that does not start a complete token is left in the
//! literal text unchanged.
//!
//! The parsed pieces are consumed by the format engine, which resolves
//! arguments and renders each conversion.

use bitflags::bitflags;
use smallvec::SmallVec;
use std::fmt;
use std::ops::Range;

bitflags! {
    /// Conversion flags (`# 0 + - space`).
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ConversionFlags: u8 {
        /// `#`: alternate form (`0x` / leading `0`).
        const ALTERNATE = 1 << 0;
        /// `0`: zero-pad to the field width.
        const ZERO_PAD = 1 << 1;
        /// `-`: left-justify within the field width.
        const LEFT_ADJUST = 1 << 2;
        /// `+`: always show a sign.
        const PLUS_SIGN = 1 << 3;
        /// ` `: blank before non-negative numbers.
        const BLANK_SIGN = 1 << 4;
    }
}

impl ConversionFlags {
    /// Effective zero padding: `-` overrides `0`.
    #[inline]
    pub fn zero_pad(self) -> bool {
        self.contains(Self::ZERO_PAD) && !self.contains(Self::LEFT_ADJUST)
    }

    /// Effective blank sign: `+` overrides ` `.
    #[inline]
    pub fn blank_sign(self) -> bool {
        self.contains(Self::BLANK_SIGN) && !self.contains(Self::PLUS_SIGN)
    }
}

/// Conversion type character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// `d`, `i`, `u`: signed decimal integer.
    Decimal,
    /// `o`: octal integer.
    Octal,
    /// `x`: lowercase hexadecimal.
    Hex,
    /// `X`: uppercase hexadecimal.
    HexUpper,
    /// `e`: lowercase exponent notation.
    Exp,
    /// `E`: uppercase exponent notation.
    ExpUpper,
    /// `f`: fixed-point decimal.
    Fixed,
    /// `F`: fixed-point decimal, uppercase specials.
    FixedUpper,
    /// `g`: general format.
    General,
    /// `G`: general format, uppercase.
    GeneralUpper,
    /// `c`: single character.
    Char,
    /// `r`: debug representation.
    Repr,
    /// `s`: string form.
    Str,
    /// `%`: literal percent sign.
    Percent,
}

impl Conversion {
    /// Map a conversion character to its type.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'd' | 'i' | 'u' => Self::Decimal,
            'o' => Self::Octal,
            'x' => Self::Hex,
            'X' => Self::HexUpper,
            'e' => Self::Exp,
            'E' => Self::ExpUpper,
            'f' => Self::Fixed,
            'F' => Self::FixedUpper,
            'g' => Self::General,
            'G' => Self::GeneralUpper,
            'c' => Self::Char,
            'r' => Self::Repr,
            's' => Self::Str,
            '%' => Self::Percent,
            _ => return None,
        })
    }

    /// Canonical conversion character, for error messages.
    pub fn as_char(self) -> char {
        match self {
            Self::Decimal => 'd',
            Self::Octal => 'o',
            Self::Hex => 'x',
            Self::HexUpper => 'X',
            Self::Exp => 'e',
            Self::ExpUpper => 'E',
            Self::Fixed => 'f',
            Self::FixedUpper => 'F',
            Self::General => 'g',
            Self::GeneralUpper => 'G',
            Self::Char => 'c',
            Self::Repr => 'r',
            Self::Str => 's',
            Self::Percent => '%',
        }
    }

    /// Integer conversions (`d i u o x X`).
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Decimal | Self::Octal | Self::Hex | Self::HexUpper
        )
    }

    /// Float conversions (`e E f F g G`).
    pub fn is_float(self) -> bool {
        matches!(
            self,
            Self::Exp
                | Self::ExpUpper
                | Self::Fixed
                | Self::FixedUpper
                | Self::General
                | Self::GeneralUpper
        )
    }

    /// Conversions whose output is uppercased after rendering.
    pub fn is_uppercase(self) -> bool {
        matches!(
            self,
            Self::HexUpper | Self::ExpUpper | Self::FixedUpper | Self::GeneralUpper
        )
    }

    /// Whether this conversion consumes a positional argument.
    pub fn consumes_argument(self) -> bool {
        !matches!(self, Self::Percent)
    }
}

/// One parsed conversion token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConversionSpec {
    /// Unit range of the mapping key between the parentheses.
    pub mapping_key: Option<Range<usize>>,
    /// Conversion flags.
    pub flags: ConversionFlags,
    /// Minimum field width.
    pub width: Option<usize>,
    /// Digits after the decimal point (floats), minimum digits (integers),
    /// or maximum length (strings).
    pub precision: Option<usize>,
    /// Conversion type.
    pub conversion: Conversion,
    /// Unit range of the whole token, `%` included.
    pub span: Range<usize>,
}

/// A template split into literal runs and conversion tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TemplatePiece {
    /// Units copied to the output unchanged.
    Literal(Range<usize>),
    /// A conversion token.
    Conversion(ConversionSpec),
}

/// Pieces of a parsed template. Most templates have a handful of tokens.
pub type TemplatePieces = SmallVec<[TemplatePiece; 8]>;

/// Error from parsing a template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PercentSpecError {
    /// `*` width or precision (taken from the argument list) is not supported.
    StarNotSupported { position: usize },
    /// Width or precision does not fit in `usize`.
    NumberTooLarge { position: usize },
}

impl fmt::Display for PercentSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StarNotSupported { position } => {
                write!(f, "* width or precision is not supported (at index {position})")
            }
            Self::NumberTooLarge { position } => {
                write!(f, "width or precision too large (at index {position})")
            }
        }
    }
}

impl std::error::Error for PercentSpecError {}

const PERCENT: u32 = '%' as u32;

/// Parse a template of code units into literal runs and conversion tokens.
///
/// # Examples
///
/// ```text
/// parse_template("%d-%s")      // [Conversion(d), Literal("-"), Conversion(s)]
/// parse_template("%(name)05.2f") // mapping key "name", zero-pad, width 5, precision 2
/// parse_template("100%")       // [Literal("100%")], no complete token
/// ```
pub fn parse_template<U>(units: &[U]) -> Result<TemplatePieces, PercentSpecError>
where
    U: Copy + Into<u32>,
{
    let mut pieces = TemplatePieces::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < units.len() {
        if units[pos].into() != PERCENT {
            pos += 1;
            continue;
        }
        match parse_token(units, pos)? {
            Some(spec) => {
                if literal_start < pos {
                    pieces.push(TemplatePiece::Literal(literal_start..pos));
                }
                pos = spec.span.end;
                literal_start = pos;
                pieces.push(TemplatePiece::Conversion(spec));
            }
            // Not a token: the `%` stays literal
            None => pos += 1,
        }
    }

    if literal_start < units.len() {
        pieces.push(TemplatePiece::Literal(literal_start..units.len()));
    }
    Ok(pieces)
}

/// Try to parse one token starting at the `%` at `start`.
///
/// Returns `Ok(None)` when the units do not form a complete token.
fn parse_token<U>(units: &[U], start: usize) -> Result<Option<ConversionSpec>, PercentSpecError>
where
    U: Copy + Into<u32>,
{
    let at = |i: usize| units.get(i).map(|&u| u.into()).and_then(char::from_u32);
    let mut pos = start + 1;

    // (key)
    let mut mapping_key = None;
    if at(pos) == Some('(') {
        let key_start = pos + 1;
        let mut key_end = key_start;
        while at(key_end).is_some_and(is_key_char) {
            key_end += 1;
        }
        if key_end == key_start || at(key_end) != Some(')') {
            return Ok(None);
        }
        mapping_key = Some(key_start..key_end);
        pos = key_end + 1;
    }

    // flags
    let mut flags = ConversionFlags::empty();
    while let Some(flag) = at(pos).and_then(flag_for) {
        flags |= flag;
        pos += 1;
    }

    // width
    if at(pos) == Some('*') {
        return Err(PercentSpecError::StarNotSupported { position: pos });
    }
    let (width, next) = parse_number(units, pos)?;
    pos = next;

    // .precision
    let mut precision = None;
    if at(pos) == Some('.') {
        if at(pos + 1) == Some('*') {
            return Err(PercentSpecError::StarNotSupported { position: pos + 1 });
        }
        let (digits, next) = parse_number(units, pos + 1)?;
        if digits.is_none() {
            return Ok(None);
        }
        precision = digits;
        pos = next;
    }

    // length modifier (ignored)
    if matches!(at(pos), Some('h' | 'l' | 'L')) {
        pos += 1;
    }

    let Some(conversion) = at(pos).and_then(Conversion::from_char) else {
        return Ok(None);
    };

    Ok(Some(ConversionSpec {
        mapping_key,
        flags,
        width,
        precision,
        conversion,
        span: start..pos + 1,
    }))
}

/// Largest accepted width or precision, `i32::MAX`.
pub const MAX_FIELD_NUMBER: usize = 0x7FFF_FFFF;

/// Parse a run of ASCII digits at `pos`, up to [`MAX_FIELD_NUMBER`].
fn parse_number<U>(units: &[U], pos: usize) -> Result<(Option<usize>, usize), PercentSpecError>
where
    U: Copy + Into<u32>,
{
    let mut end = pos;
    let mut value: usize = 0;
    while let Some(digit) = units
        .get(end)
        .and_then(|&u| char::from_u32(u.into()))
        .and_then(|c| c.to_digit(10))
    {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit as usize))
            .filter(|&v| v <= MAX_FIELD_NUMBER)
            .ok_or(PercentSpecError::NumberTooLarge { position: pos })?;
        end += 1;
    }
    Ok(((end > pos).then_some(value), end))
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn flag_for(c: char) -> Option<ConversionFlags> {
    Some(match c {
        '#' => ConversionFlags::ALTERNATE,
        '0' => ConversionFlags::ZERO_PAD,
        '-' => ConversionFlags::LEFT_ADJUST,
        '+' => ConversionFlags::PLUS_SIGN,
        ' ' => ConversionFlags::BLANK_SIGN,
        _ => return None,
    })
}
