// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # CashAddr Protocol: Address Codec
//!
//! Human-readable, checksum-protected addresses for a UTXO ledger and its
//! token overlay. An address binds a hash to a type (pubkey hash or script
//! hash) and a network prefix, and serializes the lot as
//! `prefix:base32-body-with-checksum`.
//!
//! This is a bit-exact format. An implementation that is off by one
//! generator constant still produces strings that *look* fine and are
//! rejected by every other wallet, which is the worst kind of bug. The
//! tests pin published vectors for exactly that reason.
//!
//! ## Architecture
//!
//! - **config**: format constants and the network prefix tables.
//! - **encoding**: alphabet, bit regrouping, PolyMod checksum, version
//!   byte, and the `prefix:body` codec itself.
//! - **address**: typed P2PKH / P2SH addresses bound to a network.
//! - **hash**: HASH160 for turning scripts into script hashes.
//!
//! ## Quick start
//!
//! ```
//! use cashaddr_protocol::encoding::{decode, encode};
//!
//! let s = "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2";
//! let (prefix, payload) = decode(s).unwrap();
//! assert_eq!(encode(&prefix, &payload).unwrap(), s);
//! ```

pub mod address;
pub mod config;
pub mod encoding;
pub mod hash;

pub use address::{Address, AddressError, AddressPubKeyHash, AddressScriptHash, CashAddress};
pub use config::{Flavor, Network};
pub use encoding::{AddressType, CodecError};
