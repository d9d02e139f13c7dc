//! # PolyMod Checksum
//!
//! The 40-bit BCH-style checksum that protects every address. It is
//! computed over the expanded prefix, the payload words, and eight zero
//! placeholders; the resulting 40 bits become the eight checksum words.
//! Verification runs the same function over the full word stream (checksum
//! included) and expects exactly zero.
//!
//! The code detects any single substituted character. It does not promise
//! anything about arbitrary insertions or deletions.
//!
//! ```text
//! expand("bitcoincash") = [2, 9, 20, 3, 15, 9, 14, 3, 1, 19, 8] ++ [0]
//! ```

use crate::config::CHECKSUM_WORDS;

/// Generator constants, one per bit of the accumulator's top word.
/// Published with the address format; never re-derive these.
pub const GENERATORS: [u64; 5] = [
    0x98_f2bc_8e61,
    0x79_b76d_99e2,
    0xf3_3e5f_b3c4,
    0xae_2eab_e2a8,
    0x1e_4f43_e470,
];

/// Mask for the 35 bits that survive a 5-bit left shift of a 40-bit value.
const SHIFT_MASK: u64 = 0x07_ffff_ffff;

/// Run PolyMod over a stream of 5-bit words.
///
/// The accumulator starts at 1 and is XORed with 1 at the end, so a valid
/// codeword yields 0.
pub fn polymod<I>(words: I) -> u64
where
    I: IntoIterator<Item = u8>,
{
    let mut c: u64 = 1;
    for d in words {
        let c0 = (c >> 35) as u8;
        c = ((c & SHIFT_MASK) << 5) ^ u64::from(d);

        for (i, generator) in GENERATORS.iter().enumerate() {
            if c0 & (1 << i) != 0 {
                c ^= generator;
            }
        }
    }
    c ^ 1
}

/// Expand a prefix for checksumming: the low 5 bits of each character,
/// then a single zero separator.
pub fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut expanded = Vec::with_capacity(prefix.len() + 1);
    expanded.extend(prefix.bytes().map(|b| b & 0x1f));
    expanded.push(0);
    expanded
}

/// Compute the 40-bit checksum of `payload` under an expanded prefix.
pub fn checksum(expanded_prefix: &[u8], payload: &[u8]) -> u64 {
    polymod(
        expanded_prefix
            .iter()
            .chain(payload)
            .copied()
            .chain(std::iter::repeat(0).take(CHECKSUM_WORDS)),
    )
}

/// Split a 40-bit checksum into eight words, most significant first.
pub fn checksum_words(value: u64) -> [u8; CHECKSUM_WORDS] {
    let mut words = [0u8; CHECKSUM_WORDS];
    for (i, word) in words.iter_mut().enumerate() {
        *word = ((value >> (5 * (CHECKSUM_WORDS - 1 - i))) & 0x1f) as u8;
    }
    words
}

/// Checksum words for `payload` under `prefix`.
pub fn create_checksum(prefix: &str, payload: &[u8]) -> [u8; CHECKSUM_WORDS] {
    checksum_words(checksum(&expand_prefix(prefix), payload))
}

/// True when `words` (payload followed by its eight checksum words) is a
/// valid codeword under `prefix`.
pub fn verify_checksum(prefix: &str, words: &[u8]) -> bool {
    let expanded = expand_prefix(prefix);
    polymod(expanded.iter().chain(words).copied()) == 0
}
