//! # Format Constants & Network Prefixes
//!
//! Every fixed number of the address format lives here, together with the
//! table that maps a network to the prefix it registers for each address
//! flavor. These values are part of the wire format: change one and every
//! address you produce is rejected by every other wallet on the planet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Wire Format
// ---------------------------------------------------------------------------

/// Separator between the prefix and the encoded body.
pub const PREFIX_SEPARATOR: char = ':';

/// Number of 5-bit words the checksum occupies at the end of the body.
/// 8 words = 40 bits, which is exactly the width of the PolyMod accumulator.
pub const CHECKSUM_WORDS: usize = 8;

/// Hash lengths (in bytes) selectable by the 3-bit size index of the
/// version byte. Index `i` selects `HASH_SIZES[i]`.
pub const HASH_SIZES: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

/// Length of a HASH160 digest, the only size the address value types carry.
pub const HASH160_LENGTH: usize = 20;

// ---------------------------------------------------------------------------
// Registered Prefixes
// ---------------------------------------------------------------------------

/// Base-ledger prefixes.
pub const MAINNET_CASH_PREFIX: &str = "bitcoincash";
pub const TESTNET_CASH_PREFIX: &str = "bchtest";
pub const REGTEST_CASH_PREFIX: &str = "bchreg";

/// Token-ledger (SLP) prefixes. Regtest has no registered token prefix.
pub const MAINNET_SLP_PREFIX: &str = "simpleledger";
pub const TESTNET_SLP_PREFIX: &str = "slptest";

// ---------------------------------------------------------------------------
// Networks
// ---------------------------------------------------------------------------

/// The networks an address can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network.
    Mainnet,
    /// Public test network.
    Testnet,
    /// Local regression-test network.
    Regtest,
}

/// Which ledger an address targets: the base chain or the token overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Plain base-ledger addresses.
    Cash,
    /// Simple Ledger Protocol token addresses.
    Slp,
}

impl Network {
    /// All known networks, in lookup order.
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Regtest];

    /// Short lowercase name, mainly for logging and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        }
    }

    /// The prefix this network registers for `flavor`, if any.
    pub fn prefix(&self, flavor: Flavor) -> Option<&'static str> {
        prefix_for_network(*self, flavor)
    }

    /// Every prefix this network registers, base ledger first.
    pub fn prefixes(&self) -> Vec<&'static str> {
        Flavor::ALL
            .iter()
            .filter_map(|flavor| self.prefix(*flavor))
            .collect()
    }

    /// Reverse lookup: which network and flavor registered `prefix`.
    /// Case-insensitive. Returns `None` for prefixes nobody registered.
    pub fn from_prefix(prefix: &str) -> Option<(Network, Flavor)> {
        Network::ALL.iter().find_map(|network| {
            Flavor::ALL.iter().find_map(|flavor| {
                network
                    .prefix(*flavor)
                    .filter(|p| p.eq_ignore_ascii_case(prefix))
                    .map(|_| (*network, *flavor))
            })
        })
    }
}

impl Flavor {
    /// Both flavors, base ledger first.
    pub const ALL: [Flavor; 2] = [Flavor::Cash, Flavor::Slp];

    pub fn name(&self) -> &'static str {
        match self {
            Flavor::Cash => "cash",
            Flavor::Slp => "slp",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" | "testnet3" => Ok(Network::Testnet),
            "regtest" | "reg" => Ok(Network::Regtest),
            other => Err(format!("unknown network: {}", other)),
        }
    }
}

impl FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cash" => Ok(Flavor::Cash),
            "slp" => Ok(Flavor::Slp),
            other => Err(format!("unknown address flavor: {}", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Utility
// ---------------------------------------------------------------------------

/// Returns the registered prefix for a network and flavor.
/// Returns `None` when the network has no prefix for that flavor.
pub fn prefix_for_network(network: Network, flavor: Flavor) -> Option<&'static str> {
    match (network, flavor) {
        (Network::Mainnet, Flavor::Cash) => Some(MAINNET_CASH_PREFIX),
        (Network::Testnet, Flavor::Cash) => Some(TESTNET_CASH_PREFIX),
        (Network::Regtest, Flavor::Cash) => Some(REGTEST_CASH_PREFIX),
        (Network::Mainnet, Flavor::Slp) => Some(MAINNET_SLP_PREFIX),
        (Network::Testnet, Flavor::Slp) => Some(TESTNET_SLP_PREFIX),
        (Network::Regtest, Flavor::Slp) => None,
    }
}
