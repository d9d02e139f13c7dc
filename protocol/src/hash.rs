//! # Hashing Utilities
//!
//! The one hash construction addresses care about: HASH160, i.e.
//! RIPEMD-160 over SHA-256. A script hash address commits to
//! `HASH160(serialized_script)`.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::config::HASH160_LENGTH;

/// Compute the SHA-256 hash and return a fixed-size array.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute `RIPEMD-160(SHA-256(data))`.
///
/// # Example
///
/// ```
/// use cashaddr_protocol::hash::hash160;
///
/// let digest = hash160(b"");
/// assert_eq!(hex::encode(digest), "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb");
/// ```
pub fn hash160(data: &[u8]) -> [u8; HASH160_LENGTH] {
    let digest = Ripemd160::digest(sha256(data));
    let mut output = [0u8; HASH160_LENGTH];
    output.copy_from_slice(&digest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_vector() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn hash160_of_op_true() {
        assert_eq!(
            hex::encode(hash160(&[0x51])),
            "da1745e9b549bd0bfa1a569971c77eba30cd5a4b"
        );
    }

    #[test]
    fn hash160_is_deterministic() {
        assert_eq!(hash160(b"script"), hash160(b"script"));
        assert_ne!(hash160(b"script"), hash160(b"scripT"));
    }
}
