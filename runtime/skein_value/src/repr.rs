//! Quoted debug representations.
//!
//! Single quotes are preferred; double quotes are used when the content has
//! a `'` and no `"`. Quote, backslash, tab, newline and carriage return are
//! always escaped. What else is escaped depends on the kind and on
//! [`CompatMode`].

use skein_ir::CompatMode;
use std::fmt::Write;

use crate::bytes::Bytes;
use crate::text::Text;

fn choose_quote(units: impl Iterator<Item = u32> + Clone) -> char {
    let has = |c: char| units.clone().any(|u| u == u32::from(c));
    if has('\'') && !has('"') {
        '"'
    } else {
        '\''
    }
}

/// Escape for the characters every mode escapes.
fn common_escape(c: u32, quote: char) -> Option<&'static str> {
    match char::from_u32(c)? {
        '\\' => Some("\\\\"),
        '\t' => Some("\\t"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\'' if quote == '\'' => Some("\\'"),
        '"' if quote == '"' => Some("\\\""),
        _ => None,
    }
}

pub fn text_repr(text: &Text, mode: CompatMode) -> String {
    let units = text.as_units();
    let quote = choose_quote(units.iter().map(|&u| u32::from(u)));
    let mut out = String::with_capacity(units.len() + 2);
    out.push(quote);

    for decoded in char::decode_utf16(units.iter().copied()) {
        let c = match decoded {
            Ok(c) => c,
            Err(e) => {
                // Lone surrogate
                let _ = write!(out, "\\u{:04x}", e.unpaired_surrogate());
                continue;
            }
        };
        let cp = u32::from(c);
        if let Some(escaped) = common_escape(cp, quote) {
            out.push_str(escaped);
        } else if cp < 0x20 || cp == 0x7f {
            let _ = write!(out, "\\x{cp:02x}");
        } else if !mode.escapes_non_ascii() || cp < 0x7f {
            out.push(c);
        } else if cp <= 0xff {
            let _ = write!(out, "\\x{cp:02x}");
        } else if cp <= 0xffff {
            let _ = write!(out, "\\u{cp:04x}");
        } else {
            let _ = write!(out, "\\U{cp:08x}");
        }
    }

    out.push(quote);
    out
}

/// `b'...'`: everything outside printable ASCII becomes `\xHH`.
pub fn bytes_repr(bytes: &Bytes) -> String {
    let raw = bytes.as_slice();
    let quote = choose_quote(raw.iter().map(|&b| u32::from(b)));
    let mut out = String::with_capacity(raw.len() + 3);
    out.push('b');
    out.push(quote);
    for &b in raw {
        if let Some(escaped) = common_escape(u32::from(b), quote) {
            out.push_str(escaped);
        } else if b < 0x20 || b >= 0x7f {
            let _ = write!(out, "\\x{b:02x}");
        } else {
            out.push(char::from(b));
        }
    }
    out.push(quote);
    out
}
