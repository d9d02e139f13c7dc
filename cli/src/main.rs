// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # CashAddr CLI
//!
//! Entry point for the `cashaddr` binary. Parses CLI arguments, initializes
//! logging, and runs one codec operation per invocation.
//!
//! The binary supports four subcommands:
//!
//! - `encode`      : hash to address
//! - `decode`      : address to prefix, network, type and hash
//! - `script-hash` : serialized script to P2SH address
//! - `version`     : print build version information
//!
//! Results go to stdout, logs go to stderr.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use cashaddr_protocol::address::{decode_hash, encode_hash, AddressScriptHash, CashAddress};
use cashaddr_protocol::{AddressType, Flavor, Network};

use cli::{CashAddrCli, Commands};

fn main() -> Result<()> {
    let cli = CashAddrCli::parse();
    logging::init_logging(&cli.log_level, cli.log_format);

    match cli.command {
        Commands::Encode(args) => encode_address(args),
        Commands::Decode(args) => decode_address(args),
        Commands::ScriptHash(args) => script_hash_address(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Encodes a hex hash under the prefix of the selected network and flavor.
fn encode_address(args: cli::EncodeArgs) -> Result<()> {
    let hash = hex::decode(args.hash.trim()).context("hash is not valid hex")?;
    let cli::NetworkArgs { network, flavor } = args.target;

    tracing::debug!(%network, %flavor, address_type = %args.address_type, len = hash.len(), "encoding hash");

    let address = encode_hash(&hash, args.address_type, network, flavor)
        .with_context(|| format!("failed to encode {}-byte hash", hash.len()))?;

    println!("{}", address);
    Ok(())
}

/// What `decode` reports about a valid address.
#[derive(Debug, Serialize)]
struct DecodeReport {
    address: String,
    prefix: String,
    network: Network,
    flavor: Flavor,
    #[serde(rename = "type")]
    address_type: AddressType,
    hash: String,
}

/// Decodes and validates an address against the selected network.
fn decode_address(args: cli::DecodeArgs) -> Result<()> {
    let input = args.address.trim();
    let decoded = decode_hash(input, args.network)
        .with_context(|| format!("invalid {} address: {}", args.network, input))?;

    // Re-encode so a bare body is shown with the prefix it matched.
    let address = encode_hash(&decoded.hash, decoded.address_type, args.network, decoded.flavor)
        .context("failed to re-encode decoded address")?;

    tracing::info!(%address, "address decoded");

    let report = DecodeReport {
        address,
        prefix: decoded.prefix,
        network: args.network,
        flavor: decoded.flavor,
        address_type: decoded.address_type,
        hash: hex::encode(&decoded.hash),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Address : {}", report.address);
        println!("Prefix  : {}", report.prefix);
        println!("Network : {}", report.network);
        println!("Flavor  : {}", report.flavor);
        println!("Type    : {}", report.address_type);
        println!("Hash    : {}", report.hash);
    }

    Ok(())
}

/// Hashes a hex-encoded script with HASH160 and prints its P2SH address.
fn script_hash_address(args: cli::ScriptHashArgs) -> Result<()> {
    let script = hex::decode(args.script.trim()).context("script is not valid hex")?;
    let cli::NetworkArgs { network, flavor } = args.target;

    let address = AddressScriptHash::from_script(&script, network, flavor)
        .with_context(|| format!("no {} address for network {}", flavor, network))?;

    tracing::debug!(
        script_len = script.len(),
        script_hash = %hex::encode(address.script_address()),
        "script hashed"
    );

    println!("{}", address.encode_address());
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("cashaddr {}", env!("CARGO_PKG_VERSION"));
    println!("rustc    {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}
