//! Pay-to-pubkey-hash addresses.

use std::fmt;

use super::{encode_hash160, hash160_from_slice, resolve_prefix, AddressError, CashAddress};
use crate::config::{Flavor, Network, HASH160_LENGTH};
use crate::encoding::AddressType;

/// A P2PKH address: the HASH160 of a public key plus the prefix of the
/// network and flavor it was built for.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AddressPubKeyHash {
    hash: [u8; HASH160_LENGTH],
    prefix: &'static str,
    network: Network,
    flavor: Flavor,
}

impl AddressPubKeyHash {
    /// Build an address from a 20-byte pubkey hash.
    ///
    /// Fails if the hash is not exactly 20 bytes or if `network` registers
    /// no prefix for `flavor`.
    pub fn new(pk_hash: &[u8], network: Network, flavor: Flavor) -> Result<Self, AddressError> {
        let hash = hash160_from_slice(pk_hash)?;
        let prefix = resolve_prefix(network, flavor)?;
        Ok(Self {
            hash,
            prefix,
            network,
            flavor,
        })
    }

    /// The underlying hash as a fixed array, handy as a map key.
    pub fn hash160(&self) -> &[u8; HASH160_LENGTH] {
        &self.hash
    }

    pub fn prefix(&self) -> &str {
        self.prefix
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }
}

impl CashAddress for AddressPubKeyHash {
    fn encode_address(&self) -> String {
        encode_hash160(&self.hash, self.prefix, AddressType::PubKeyHash)
    }

    fn script_address(&self) -> &[u8] {
        &self.hash
    }

    fn is_for_network(&self, network: Network) -> bool {
        network.prefix(self.flavor) == Some(self.prefix)
    }

    fn address_type(&self) -> AddressType {
        AddressType::PubKeyHash
    }
}

impl fmt::Display for AddressPubKeyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_address())
    }
}

impl fmt::Debug for AddressPubKeyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressPubKeyHash({})", self.encode_address())
    }
}
