//! Pay-to-script-hash addresses.

use std::fmt;

use super::{encode_hash160, hash160_from_slice, resolve_prefix, AddressError, CashAddress};
use crate::config::{Flavor, Network, HASH160_LENGTH};
use crate::encoding::AddressType;
use crate::hash::hash160;

/// A P2SH address: the HASH160 of a serialized redeem script plus the
/// prefix of the network and flavor it was built for.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AddressScriptHash {
    hash: [u8; HASH160_LENGTH],
    prefix: &'static str,
    network: Network,
    flavor: Flavor,
}

impl AddressScriptHash {
    /// Hash a serialized script and build the address paying to it.
    pub fn from_script(script: &[u8], network: Network, flavor: Flavor) -> Result<Self, AddressError> {
        Self::from_hash(&hash160(script), network, flavor)
    }

    /// Build an address from an existing 20-byte script hash.
    pub fn from_hash(script_hash: &[u8], network: Network, flavor: Flavor) -> Result<Self, AddressError> {
        let hash = hash160_from_slice(script_hash)?;
        let prefix = resolve_prefix(network, flavor)?;
        Ok(Self {
            hash,
            prefix,
            network,
            flavor,
        })
    }

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

impl CashAddress for AddressScriptHash {
    fn encode_address(&self) -> String {
        encode_hash160(&self.hash, self.prefix, AddressType::ScriptHash)
    }

    fn script_address(&self) -> &[u8] {
        &self.hash
    }

    fn is_for_network(&self, network: Network) -> bool {
        network.prefix(self.flavor) == Some(self.prefix)
    }

    fn address_type(&self) -> AddressType {
        AddressType::ScriptHash
    }
}

impl fmt::Display for AddressScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_address())
    }
}

impl fmt::Debug for AddressScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressScriptHash({})", self.encode_address())
    }
}
