//! # Address Codec
//!
//! Top-level string encoding: `prefix ":" body`, where the body is the
//! payload regrouped into 5-bit words followed by eight checksum words,
//! rendered through the alphabet.
//!
//! ```text
//! payload (bytes) -> 5-bit words -> ++ checksum(prefix, words) -> chars
//! "bitcoincash" + ":" + "qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2"
//! ```
//!
//! Two layers are exposed. The word-level pair ([`encode_words`],
//! [`decode_words`]) deals in raw 5-bit words and never regroups. The
//! byte-level pair ([`encode`], [`decode`] and friends) converts to and
//! from bytes and enforces strict zero padding on the way back.
//!
//! Decoding never trusts a single bit of the payload before the checksum
//! has verified to zero.

use super::bits::{bytes_to_words, words_to_bytes};
use super::charset::{check_case, string_to_words, words_to_string};
use super::checksum::{create_checksum, verify_checksum};
use super::error::CodecError;
use crate::config::{CHECKSUM_WORDS, PREFIX_SEPARATOR};

/// Result alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode raw 5-bit words under `prefix`. The output is lowercase.
pub fn encode_words(prefix: &str, words: &[u8]) -> Result<String> {
    validate_prefix(prefix)?;
    let prefix = prefix.to_ascii_lowercase();

    let checksum = create_checksum(&prefix, words);
    let mut out = String::with_capacity(prefix.len() + 1 + words.len() + CHECKSUM_WORDS);
    out.push_str(&prefix);
    out.push(PREFIX_SEPARATOR);
    out.push_str(&words_to_string(words)?);
    out.push_str(&words_to_string(&checksum)?);
    Ok(out)
}

/// Encode a byte payload (usually version byte followed by hash) under
/// `prefix`.
pub fn encode(prefix: &str, payload: &[u8]) -> Result<String> {
    encode_words(prefix, &bytes_to_words(payload))
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode a `prefix:body` string into its lowercase prefix and payload
/// words, without regrouping to bytes.
pub fn decode_words(s: &str) -> Result<(String, Vec<u8>)> {
    check_case(s)?;
    let (prefix, body) = split_prefix(s);
    let prefix = prefix.ok_or(CodecError::MissingPrefix)?;
    validate_prefix(prefix)?;
    let prefix = prefix.to_ascii_lowercase();
    let words = decode_body(&prefix, body)?;
    Ok((prefix, words))
}

/// Decode a `prefix:body` string into its lowercase prefix and byte payload.
pub fn decode(s: &str) -> Result<(String, Vec<u8>)> {
    let (prefix, words) = decode_words(s)?;
    Ok((prefix, words_to_bytes(&words)?))
}

/// Decode a string that may omit its prefix, using `prefix` when it does.
///
/// A string that carries its own prefix must carry this one (compared
/// case-insensitively), otherwise [`CodecError::UnknownPrefix`].
pub fn decode_with_prefix(s: &str, prefix: &str) -> Result<(String, Vec<u8>)> {
    decode_with_known_prefixes(s, &[prefix])
}

/// Decode a string against a caller-supplied set of acceptable prefixes.
///
/// An explicit prefix is looked up in `known` case-insensitively. A bare
/// body is tried under each known prefix in order and the first one whose
/// checksum verifies wins. Errors that do not depend on the prefix (bad
/// characters, short body, bad padding) end the search immediately.
pub fn decode_with_known_prefixes(s: &str, known: &[&str]) -> Result<(String, Vec<u8>)> {
    check_case(s)?;
    let (prefix, body) = split_prefix(s);

    if let Some(prefix) = prefix {
        validate_prefix(prefix)?;
        let resolved = resolve_prefix(prefix, known)?;
        let words = decode_body(&resolved, body)?;
        return Ok((resolved, words_to_bytes(&words)?));
    }

    for candidate in known {
        validate_prefix(candidate)?;
        let candidate = candidate.to_ascii_lowercase();
        match decode_body(&candidate, body) {
            Ok(words) => return Ok((candidate, words_to_bytes(&words)?)),
            Err(CodecError::ChecksumMismatch) => continue,
            Err(e) => return Err(e),
        }
    }

    Err(CodecError::UnknownPrefix(format!(
        "no match among [{}]",
        known.join(", ")
    )))
}

/// Case-insensitive lookup of `prefix` in `known`. Returns the lowercase
/// form of the match.
pub fn resolve_prefix(prefix: &str, known: &[&str]) -> Result<String> {
    known
        .iter()
        .find(|k| k.eq_ignore_ascii_case(prefix))
        .map(|k| k.to_ascii_lowercase())
        .ok_or_else(|| CodecError::UnknownPrefix(prefix.to_ascii_lowercase()))
}

/// Split on the last separator. No separator means a bare body.
pub fn split_prefix(s: &str) -> (Option<&str>, &str) {
    match s.rfind(PREFIX_SEPARATOR) {
        Some(i) => (Some(&s[..i]), &s[i + PREFIX_SEPARATOR.len_utf8()..]),
        None => (None, s),
    }
}

/// Validate and checksum-verify a body under an already lowercased prefix.
/// Returns the payload words with the checksum stripped.
fn decode_body(prefix: &str, body: &str) -> Result<Vec<u8>> {
    let len = body.chars().count();
    if len < CHECKSUM_WORDS {
        return Err(CodecError::TooShort(len));
    }

    let mut words = string_to_words(body)?;
    if !verify_checksum(prefix, &words) {
        return Err(CodecError::ChecksumMismatch);
    }

    words.truncate(words.len() - CHECKSUM_WORDS);
    Ok(words)
}

fn validate_prefix(prefix: &str) -> Result<()> {
    // Letters only: digits, punctuation and a second separator are all out.
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CodecError::InvalidPrefix(prefix.to_string()));
    }
    Ok(())
}
