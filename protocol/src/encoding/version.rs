//! # Version Byte
//!
//! The first payload byte packs the address type and the hash length:
//!
//! ```text
//!   bit  7    : reserved, must be 0
//!   bits 6..3 : address type (0 = pubkey hash, 1 = script hash)
//!   bits 2..0 : size index into HASH_SIZES
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::CodecError;
use crate::config::HASH_SIZES;

const RESERVED_BIT: u8 = 0x80;
const TYPE_SHIFT: u8 = 3;
const TYPE_MASK: u8 = 0x0f;
const SIZE_MASK: u8 = 0x07;

/// What a hash in an address commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressType {
    /// Pay to pubkey hash.
    #[serde(rename = "p2pkh")]
    PubKeyHash,
    /// Pay to script hash.
    #[serde(rename = "p2sh")]
    ScriptHash,
}

impl AddressType {
    /// The 4-bit type code stored in the version byte.
    pub fn code(&self) -> u8 {
        match self {
            AddressType::PubKeyHash => 0,
            AddressType::ScriptHash => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(AddressType::PubKeyHash),
            1 => Some(AddressType::ScriptHash),
            _ => None,
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressType::PubKeyHash => f.write_str("p2pkh"),
            AddressType::ScriptHash => f.write_str("p2sh"),
        }
    }
}

impl std::str::FromStr for AddressType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "p2pkh" | "pubkeyhash" => Ok(AddressType::PubKeyHash),
            "p2sh" | "scripthash" => Ok(AddressType::ScriptHash),
            other => Err(format!("unknown address type: {}", other)),
        }
    }
}

/// Size index for a hash length, if the length is encodable.
pub fn size_index(hash_len: usize) -> Option<u8> {
    HASH_SIZES
        .iter()
        .position(|&size| size == hash_len)
        .map(|i| i as u8)
}

/// Pack an address type and hash length into a version byte.
pub fn pack(address_type: AddressType, hash_len: usize) -> Result<u8, CodecError> {
    let index = size_index(hash_len).ok_or(CodecError::UnsupportedLength(hash_len))?;
    Ok((address_type.code() << TYPE_SHIFT) | index)
}

/// Unpack a version byte into the address type and the hash length it
/// announces.
pub fn unpack(version: u8) -> Result<(AddressType, usize), CodecError> {
    if version & RESERVED_BIT != 0 {
        return Err(CodecError::UnknownVersion(version));
    }
    let address_type = AddressType::from_code((version >> TYPE_SHIFT) & TYPE_MASK)
        .ok_or(CodecError::UnknownVersion(version))?;
    let hash_len = HASH_SIZES[(version & SIZE_MASK) as usize];
    Ok((address_type, hash_len))
}
