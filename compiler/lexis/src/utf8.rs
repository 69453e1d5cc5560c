//! UTF-8 decoding for hooks that classify multi-byte characters.
//!
//! The scan loop itself works on raw bytes. Identifier hooks that want to
//! accept non-ASCII letters call [`decode`] on the remaining input.

/// Sequence length by the high nibble of the lead byte.
///
/// Continuation bytes (`0x8_`..`0xB_`) map to 1; [`decode`] rejects them
/// as leads.
const SEQUENCE_LEN: [u8; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 3, 4];

/// Smallest codepoint each sequence length may encode (overlong guard).
const MIN_CODEPOINT: [u32; 5] = [0, 0, 0x80, 0x800, 0x1_0000];

/// Byte length of the sequence a lead byte announces.
#[inline]
pub fn sequence_len(lead: u8) -> usize {
    usize::from(SEQUENCE_LEN[usize::from(lead >> 4)])
}

/// Returns `true` for `10xx_xxxx` bytes.
#[inline]
pub fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Width of the character at the start of `bytes`: the sequence length when
/// it decodes, otherwise one byte.
pub fn char_width(bytes: &[u8]) -> usize {
    decode(bytes).map_or(1, |(_, len)| len)
}

/// Decode the character at the start of `bytes`.
///
/// Returns the character and the number of bytes it occupies, or `None`
/// for empty input, truncated sequences, stray continuation bytes,
/// overlong encodings, surrogates and values above `U+10FFFF`.
pub fn decode(bytes: &[u8]) -> Option<(char, usize)> {
    let (&lead, _) = bytes.split_first()?;
    if lead < 0x80 {
        return Some((char::from(lead), 1));
    }
    if is_continuation(lead) || lead > 0xF4 {
        return None;
    }

    let len = sequence_len(lead);
    let mask = match len {
        2 => 0x1F,
        3 => 0x0F,
        _ => 0x07,
    };
    let mut codepoint = u32::from(lead & mask);
    for &byte in bytes.get(1..len)? {
        if !is_continuation(byte) {
            return None;
        }
        codepoint = (codepoint << 6) | u32::from(byte & 0x3F);
    }
    if codepoint < MIN_CODEPOINT[len] {
        return None;
    }
    char::from_u32(codepoint).map(|c| (c, len))
}
