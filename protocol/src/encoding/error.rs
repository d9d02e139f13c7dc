//! Error types for the address codec.
//!
//! Every codec operation that can fail returns a [`CodecError`]. Errors are
//! terminal: nothing here is silently corrected or retried.

use thiserror::Error;

/// Errors that can occur while encoding or decoding an address string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A body character is not part of the 32-character alphabet.
    #[error("invalid character '{0}' in address body")]
    InvalidCharacter(char),

    /// The string mixes upper- and lowercase letters.
    #[error("address mixes upper and lower case")]
    MixedCase,

    /// The checksum did not verify to zero.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// Leftover bits after regrouping were nonzero or too many.
    #[error("invalid padding in 5-bit to 8-bit conversion")]
    InvalidPadding,

    /// The hash length is not one of the eight encodable sizes.
    #[error("unsupported hash length: {0} bytes")]
    UnsupportedLength(usize),

    /// The version byte has its reserved bit set or names an unknown type.
    #[error("unknown version byte: 0x{0:02x}")]
    UnknownVersion(u8),

    /// The prefix is not among the prefixes the caller accepts.
    #[error("unknown prefix: {0}")]
    UnknownPrefix(String),

    /// The body is shorter than the checksum alone.
    #[error("address body too short: {0} characters")]
    TooShort(usize),

    /// No `prefix:` part and no prefix supplied by the caller.
    #[error("address has no prefix")]
    MissingPrefix,

    /// The prefix is empty or holds something other than ASCII letters.
    #[error("invalid prefix: {0:?}")]
    InvalidPrefix(String),

    /// A word handed to the word-level encoder does not fit in 5 bits.
    #[error("word value {0} does not fit in 5 bits")]
    InvalidWord(u8),
}
