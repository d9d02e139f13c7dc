//! # Address Value Types
//!
//! Typed, network-bound addresses on top of the raw codec. Each variant
//! owns a 20-byte hash and the prefix it resolved at construction time;
//! the encoded string is re-derived on demand rather than cached.
//!
//! The capability surface shared by every variant is the [`CashAddress`]
//! trait. [`Address`] is the closed set of variants, the thing you get back
//! from decoding a string when you don't know ahead of time what it is.
//!
//! ```
//! use cashaddr_protocol::address::{Address, AddressPubKeyHash, CashAddress};
//! use cashaddr_protocol::config::{Flavor, Network};
//!
//! let hash = [0x11u8; 20];
//! let addr = AddressPubKeyHash::new(&hash, Network::Mainnet, Flavor::Cash).unwrap();
//! let encoded = addr.encode_address();
//! assert!(encoded.starts_with("bitcoincash:q"));
//!
//! let decoded = Address::decode(&encoded, Network::Mainnet).unwrap();
//! assert_eq!(decoded.script_address(), &hash);
//! ```

mod pubkey_hash;
mod script_hash;

pub use pubkey_hash::AddressPubKeyHash;
pub use script_hash::AddressScriptHash;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::{Flavor, Network, HASH160_LENGTH};
use crate::encoding::codec::{self, split_prefix};
use crate::encoding::version::{self, AddressType};
use crate::encoding::CodecError;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while building or decoding a typed address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The string itself failed to decode.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The hash handed to a constructor has the wrong length.
    #[error("invalid hash length: expected {expected} bytes, got {got}")]
    InvalidHashLength {
        /// Length this address variant requires.
        expected: usize,
        /// Length that was supplied.
        got: usize,
    },

    /// The version byte announces a different hash length than the payload carries.
    #[error("hash length mismatch: version byte announces {expected} bytes, payload carries {got}")]
    HashLengthMismatch {
        /// Length announced by the size index.
        expected: usize,
        /// Length actually decoded.
        got: usize,
    },

    /// The network registers no prefix for the requested flavor.
    #[error("network {network} has no registered {flavor} prefix")]
    UnsupportedNetwork {
        /// The network asked for.
        network: Network,
        /// The flavor asked for.
        flavor: Flavor,
    },

    /// No network registers this prefix.
    #[error("prefix {0:?} is not registered by any network")]
    UnknownNetworkPrefix(String),

    /// The payload decoded fine but holds no version byte.
    #[error("address payload is empty")]
    EmptyPayload,
}

// ---------------------------------------------------------------------------
// Capability surface
// ---------------------------------------------------------------------------

/// What every address variant can do.
pub trait CashAddress {
    /// The full `prefix:body` string, derived fresh on each call.
    fn encode_address(&self) -> String;

    /// The raw hash that goes into a locking script.
    fn script_address(&self) -> &[u8];

    /// Whether this address uses the prefix `network` registers for its flavor.
    fn is_for_network(&self, network: Network) -> bool;

    /// The kind of hash this address commits to.
    fn address_type(&self) -> AddressType;
}

/// Encode a HASH160 under a registered prefix.
///
/// Registered prefixes are valid by construction and a 20-byte hash always
/// has a size index, so this cannot fail.
pub(crate) fn encode_hash160(
    hash: &[u8; HASH160_LENGTH],
    prefix: &str,
    address_type: AddressType,
) -> String {
    let version = version::pack(address_type, HASH160_LENGTH)
        .expect("HASH160 length is always encodable");
    let mut payload = Vec::with_capacity(1 + HASH160_LENGTH);
    payload.push(version);
    payload.extend_from_slice(hash);
    codec::encode(prefix, &payload).expect("registered prefixes are valid")
}

/// Resolve the prefix a network registers for `flavor`.
pub(crate) fn resolve_prefix(network: Network, flavor: Flavor) -> Result<&'static str, AddressError> {
    network
        .prefix(flavor)
        .ok_or(AddressError::UnsupportedNetwork { network, flavor })
}

/// Copy a slice into a HASH160 array, checking its length.
pub(crate) fn hash160_from_slice(hash: &[u8]) -> Result<[u8; HASH160_LENGTH], AddressError> {
    <[u8; HASH160_LENGTH]>::try_from(hash).map_err(|_| AddressError::InvalidHashLength {
        expected: HASH160_LENGTH,
        got: hash.len(),
    })
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// Any decoded address, tagged by what it pays to.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Address {
    /// Pay to pubkey hash.
    PubKeyHash(AddressPubKeyHash),
    /// Pay to script hash.
    ScriptHash(AddressScriptHash),
}

/// A decoded address of any encodable hash length, before it is narrowed
/// to one of the 20-byte value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHash {
    /// Lowercase prefix the address carried or was resolved to.
    pub prefix: String,
    /// Flavor registered for that prefix.
    pub flavor: Flavor,
    /// Type announced by the version byte.
    pub address_type: AddressType,
    /// The hash, already checked against the version byte's size index.
    pub hash: Vec<u8>,
}

/// Decode an address string for `network` without restricting the hash
/// length to 20 bytes.
///
/// The prefix may be omitted, in which case each prefix the network
/// registers is tried (base ledger first). An explicit prefix must be one
/// the network registers. The version byte must be known and its size
/// index must match the hash that follows it.
pub fn decode_hash(s: &str, network: Network) -> Result<DecodedHash, AddressError> {
    let known = network.prefixes();
    let (prefix, payload) = codec::decode_with_known_prefixes(s, &known).map_err(|e| {
        tracing::debug!(%network, error = %e, "address rejected by codec");
        e
    })?;

    let (&version_byte, hash) = payload.split_first().ok_or(AddressError::EmptyPayload)?;
    let (address_type, expected) = version::unpack(version_byte)?;
    if hash.len() != expected {
        return Err(AddressError::HashLengthMismatch {
            expected,
            got: hash.len(),
        });
    }

    let flavor = Flavor::ALL
        .into_iter()
        .find(|f| network.prefix(*f) == Some(prefix.as_str()))
        .ok_or_else(|| AddressError::UnknownNetworkPrefix(prefix.clone()))?;

    tracing::trace!(%prefix, %network, %flavor, %address_type, len = hash.len(), "address decoded");

    Ok(DecodedHash {
        flavor,
        address_type,
        hash: hash.to_vec(),
        prefix,
    })
}

/// Encode a hash of any allowed length under the prefix `network` registers
/// for `flavor`.
///
/// The 20-byte value types cover the common case; this is for the longer
/// hashes the version byte can announce.
pub fn encode_hash(
    hash: &[u8],
    address_type: AddressType,
    network: Network,
    flavor: Flavor,
) -> Result<String, AddressError> {
    let prefix = resolve_prefix(network, flavor)?;
    let version = version::pack(address_type, hash.len())?;
    let mut payload = Vec::with_capacity(1 + hash.len());
    payload.push(version);
    payload.extend_from_slice(hash);
    Ok(codec::encode(prefix, &payload)?)
}

impl Address {
    /// Decode an address string for `network` into a typed address.
    ///
    /// Same rules as [`decode_hash`], and the hash must be 20 bytes.
    pub fn decode(s: &str, network: Network) -> Result<Self, AddressError> {
        let decoded = decode_hash(s, network)?;
        match decoded.address_type {
            AddressType::PubKeyHash => {
                AddressPubKeyHash::new(&decoded.hash, network, decoded.flavor)
                    .map(Address::PubKeyHash)
            }
            AddressType::ScriptHash => {
                AddressScriptHash::from_hash(&decoded.hash, network, decoded.flavor)
                    .map(Address::ScriptHash)
            }
        }
    }

    /// The raw 20-byte hash.
    pub fn hash160(&self) -> &[u8; HASH160_LENGTH] {
        match self {
            Address::PubKeyHash(a) => a.hash160(),
            Address::ScriptHash(a) => a.hash160(),
        }
    }

    pub fn prefix(&self) -> &str {
        match self {
            Address::PubKeyHash(a) => a.prefix(),
            Address::ScriptHash(a) => a.prefix(),
        }
    }

    pub fn flavor(&self) -> Flavor {
        match self {
            Address::PubKeyHash(a) => a.flavor(),
            Address::ScriptHash(a) => a.flavor(),
        }
    }

    /// The network whose registered prefix this address carries.
    pub fn network(&self) -> Network {
        match self {
            Address::PubKeyHash(a) => a.network(),
            Address::ScriptHash(a) => a.network(),
        }
    }
}

impl CashAddress for Address {
    fn encode_address(&self) -> String {
        match self {
            Address::PubKeyHash(a) => a.encode_address(),
            Address::ScriptHash(a) => a.encode_address(),
        }
    }

    fn script_address(&self) -> &[u8] {
        match self {
            Address::PubKeyHash(a) => a.script_address(),
            Address::ScriptHash(a) => a.script_address(),
        }
    }

    fn is_for_network(&self, network: Network) -> bool {
        match self {
            Address::PubKeyHash(a) => a.is_for_network(network),
            Address::ScriptHash(a) => a.is_for_network(network),
        }
    }

    fn address_type(&self) -> AddressType {
        match self {
            Address::PubKeyHash(_) => AddressType::PubKeyHash,
            Address::ScriptHash(_) => AddressType::ScriptHash,
        }
    }
}

impl From<AddressPubKeyHash> for Address {
    fn from(a: AddressPubKeyHash) -> Self {
        Address::PubKeyHash(a)
    }
}

impl From<AddressScriptHash> for Address {
    fn from(a: AddressScriptHash) -> Self {
        Address::ScriptHash(a)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_address())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::PubKeyHash(a) => fmt::Debug::fmt(a, f),
            Address::ScriptHash(a) => fmt::Debug::fmt(a, f),
        }
    }
}

/// Parses a string that carries an explicit prefix; the network and flavor
/// are inferred from the prefix table.
impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let prefix = split_prefix(s).0.ok_or(CodecError::MissingPrefix)?;
        let (network, _) = Network::from_prefix(prefix)
            .ok_or_else(|| AddressError::UnknownNetworkPrefix(prefix.to_ascii_lowercase()))?;
        Address::decode(s, network)
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode_address())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
