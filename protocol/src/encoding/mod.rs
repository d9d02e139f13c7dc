//! # Address Encoding
//!
//! The checksum-protected string format, built bottom-up:
//!
//! 1. **charset**: the 32-character alphabet and the case rule.
//! 2. **bits**: regrouping between bytes and 5-bit words.
//! 3. **checksum**: the 40-bit PolyMod code over prefix and words.
//! 4. **version**: address type and hash length packed into one byte.
//! 5. **codec**: `prefix:body` assembly and verified decoding.
//!
//! Everything here is a pure function over its inputs. The alphabet and
//! generator tables are compile-time constants, so every call is reentrant
//! and safe to run from any number of threads at once.

pub mod bits;
pub mod charset;
pub mod checksum;
pub mod codec;
pub mod error;
pub mod version;

pub use codec::{
    decode, decode_with_known_prefixes, decode_with_prefix, decode_words, encode, encode_words,
};
pub use error::CodecError;
pub use version::{pack, unpack, AddressType};
