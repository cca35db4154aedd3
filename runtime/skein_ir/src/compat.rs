//! Compatibility modes for string semantics.
//!
//! The value core reproduces the string behavior of two generations of the
//! source language. They differ only in a handful of observable places, each
//! exposed as a policy method here so call sites never match on the variant.

use std::fmt;
use std::str::FromStr;

/// Which generation of string semantics to reproduce.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompatMode {
    /// Current semantics: non-ASCII text is printable in `repr`.
    #[default]
    Modern,
    /// Older semantics: `repr` escapes everything outside printable ASCII,
    /// and `%f` defaults to seven digits.
    Legacy,
}

impl CompatMode {
    /// Whether text `repr` escapes non-ASCII characters.
    #[inline]
    pub fn escapes_non_ascii(self) -> bool {
        matches!(self, Self::Legacy)
    }

    /// Default precision for the `%f`/`%F` conversions.
    #[inline]
    pub fn default_fixed_precision(self) -> usize {
        match self {
            Self::Modern => 6,
            Self::Legacy => 7,
        }
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for CompatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a mode name is not recognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCompatMode(pub String);

impl fmt::Display for UnknownCompatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown compatibility mode '{}' (expected modern, legacy, py3 or py2)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCompatMode {}

impl FromStr for CompatMode {
    type Err = UnknownCompatMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" | "py3" => Ok(Self::Modern),
            "legacy" | "py2" => Ok(Self::Legacy),
            _ => Err(UnknownCompatMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_modern() {
        assert_eq!(CompatMode::default(), CompatMode::Modern);
        assert!(!CompatMode::default().escapes_non_ascii());
    }

    #[test]
    fn legacy_policies() {
        assert!(CompatMode::Legacy.escapes_non_ascii());
        assert_eq!(CompatMode::Legacy.default_fixed_precision(), 7);
        assert_eq!(CompatMode::Modern.default_fixed_precision(), 6);
    }

    #[test]
    fn parse_names() {
        assert_eq!("py2".parse(), Ok(CompatMode::Legacy));
        assert_eq!(" Modern ".parse(), Ok(CompatMode::Modern));
        assert_eq!(
            "py4".parse::<CompatMode>(),
            Err(UnknownCompatMode("py4".to_string()))
        );
    }

    #[test]
    fn display_roundtrips() {
        for mode in [CompatMode::Modern, CompatMode::Legacy] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }
}
