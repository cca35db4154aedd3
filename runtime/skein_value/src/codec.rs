//! UTF-8 and hex codecs between `Text` and `Bytes`.

use crate::bytes::Bytes;
use crate::errors::{invalid_utf8, non_hex_digit, unknown_encoding, unpaired_surrogate, StrResult};
use crate::text::Text;

/// Accept `utf8` / `utf-8` in any case; `None` means the default.
pub fn check_encoding(encoding: Option<&str>) -> StrResult<()> {
    match encoding {
        None => Ok(()),
        Some(name) if name.eq_ignore_ascii_case("utf-8") || name.eq_ignore_ascii_case("utf8") => {
            Ok(())
        }
        Some(name) => Err(unknown_encoding(name)),
    }
}

/// Encode text as UTF-8. An unpaired surrogate is a Unicode-encode error
/// reporting its logical position.
pub fn encode(text: &Text, encoding: Option<&str>) -> StrResult<Bytes> {
    check_encoding(encoding)?;
    let mut out = Vec::with_capacity(text.storage_len());
    let mut buf = [0u8; 4];
    for (position, decoded) in char::decode_utf16(text.as_units().iter().copied()).enumerate() {
        let ch = decoded.map_err(|e| {
            tracing::debug!(position, unit = e.unpaired_surrogate(), "unpaired surrogate on encode");
            unpaired_surrogate(position, e.unpaired_surrogate())
        })?;
        out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    }
    Ok(Bytes::new(out))
}

/// Decode UTF-8 bytes. Malformed input is a Unicode-decode error reporting
/// the offset of the first bad byte.
pub fn decode(bytes: &Bytes, encoding: Option<&str>) -> StrResult<Text> {
    check_encoding(encoding)?;
    let raw = bytes.as_slice();
    match std::str::from_utf8(raw) {
        Ok(s) => Ok(Text::from(s)),
        Err(e) => {
            let position = e.valid_up_to();
            tracing::debug!(position, len = raw.len(), "utf-8 decode failed");
            Err(invalid_utf8(position, raw.get(position).copied().unwrap_or(0)))
        }
    }
}

/// Two lowercase hex digits per byte.
pub fn hex(bytes: &Bytes) -> Text {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    let units = bytes
        .as_slice()
        .iter()
        .flat_map(|&b| [DIGITS[usize::from(b >> 4)], DIGITS[usize::from(b & 0x0f)]])
        .map(u16::from)
        .collect();
    Text::from_utf16(units)
}

/// Parse hex digit pairs. ASCII whitespace is allowed between pairs; any
/// other character, or a dangling digit, is a `ValueError` at its position.
pub fn fromhex(text: &Text) -> StrResult<Bytes> {
    let chars: Vec<Option<char>> = char::decode_utf16(text.as_units().iter().copied())
        .map(Result::ok)
        .collect();
    let digit_at = |pos: usize| {
        chars
            .get(pos)
            .copied()
            .flatten()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(|| non_hex_digit(pos))
    };

    let mut out = Vec::with_capacity(chars.len() / 2);
    let mut pos = 0;
    while pos < chars.len() {
        if chars[pos].is_some_and(|c| c.is_ascii_whitespace()) {
            pos += 1;
            continue;
        }
        let high = digit_at(pos)?;
        let low = digit_at(pos + 1)?;
        // Both digits are < 16, so the pair fits in a byte
        out.push(u8::try_from(high * 16 + low).map_err(|_| non_hex_digit(pos))?);
        pos += 2;
    }
    Ok(Bytes::new(out))
}
