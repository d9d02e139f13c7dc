//! Bit-width regrouping between byte data and 5-bit words.

use super::error::CodecError;

/// Regroup a stream of `from`-bit values into `to`-bit values.
///
/// With `pad` set, a trailing partial group is zero-filled on the low side
/// and emitted. Without it, leftover bits must be fewer than `from` and all
/// zero, otherwise the input was not produced by a padded conversion and
/// [`CodecError::InvalidPadding`] is returned.
///
/// Input values wider than `from` bits are masked.
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, CodecError> {
    debug_assert!((1..=8).contains(&from) && (1..=8).contains(&to));

    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max_value: u32 = (1 << to) - 1;
    let in_mask: u32 = (1 << from) - 1;
    let mut out = Vec::with_capacity((data.len() * from as usize + to as usize - 1) / to as usize);

    for &value in data {
        acc = ((acc << from) | (u32::from(value) & in_mask)) & 0xffff;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & max_value) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & max_value) != 0 {
        return Err(CodecError::InvalidPadding);
    }

    Ok(out)
}

/// Bytes to 5-bit words, zero-padding the last word.
pub fn bytes_to_words(data: &[u8]) -> Vec<u8> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity((data.len() * 8 + 4) / 5);
    for &byte in data {
        acc = ((acc << 8) | u32::from(byte)) & 0xfff;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(((acc >> bits) & 0x1f) as u8);
        }
    }
    if bits > 0 {
        out.push(((acc << (5 - bits)) & 0x1f) as u8);
    }
    out
}

/// 5-bit words back to bytes, rejecting nonzero or oversized padding.
pub fn words_to_bytes(words: &[u8]) -> Result<Vec<u8>, CodecError> {
    convert_bits(words, 5, 8, false)
}
