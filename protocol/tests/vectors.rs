//! Known-vector tests for the address codec.
//!
//! These pin the format against strings produced by other implementations.
//! If any of them breaks, the codec is no longer interoperable, regardless
//! of whether our own round trips still pass.

use cashaddr_protocol::address::{Address, AddressPubKeyHash, AddressScriptHash, CashAddress};
use cashaddr_protocol::config::{Flavor, Network, HASH_SIZES};
use cashaddr_protocol::encoding::charset::CHARSET;
use cashaddr_protocol::encoding::{
    decode, decode_words, encode, encode_words, pack, unpack, AddressType, CodecError,
};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

/// Strings that must pass word-level decoding.
const VALID: &[&str] = &[
    "prefix:x64nx6hz",
    "PREFIX:X64NX6HZ",
    "p:gpf8m4h7",
    "bitcoincash:qpzry9x8gf2tvdw0s3jn54khce6mua7lcw20ayyn",
    "bchtest:testnetaddress4d6njnut",
    "bchreg:555555555555555555555555555555555555555555555udxmlmrz",
];

/// Strings that must fail decoding.
const INVALID: &[&str] = &[
    "prefix:x32nx6hz",
    "prEfix:x64nx6hz",
    "prefix:x64nx6Hz",
    "pref1x:6m8cxv73",
    "prefix:",
    ":u9wsx07j",
    "bchreg:555555555555555555x55555555555555555555555555udxmlmrz",
    "bchreg:555555555555555555555555555555551555555555555udxmlmrz",
    "pre:fix:x32nx6hz",
    "prefixx64nx6hz",
];

fn payload(address_type: AddressType, hash: &[u8]) -> Vec<u8> {
    let mut out = vec![pack(address_type, hash.len()).unwrap()];
    out.extend_from_slice(hash);
    out
}

// ---------------------------------------------------------------------------
// Word level
// ---------------------------------------------------------------------------

#[test]
fn valid_strings_decode_and_reencode() {
    for s in VALID {
        let (prefix, words) = decode_words(s).unwrap_or_else(|e| panic!("{}: {}", s, e));
        assert_eq!(encode_words(&prefix, &words).unwrap(), s.to_ascii_lowercase());
    }
}

#[test]
fn invalid_strings_fail() {
    for s in INVALID {
        assert!(decode_words(s).is_err(), "{} should not decode", s);
        assert!(decode(s).is_err(), "{} should not decode", s);
    }
}

// ---------------------------------------------------------------------------
// Byte level
// ---------------------------------------------------------------------------

#[test]
fn reference_vector_reencodes_exactly() {
    let s = "bitcoincash:qpzry9x8gf2tvdw0s3jn5grmq650p";
    let (prefix, payload) = decode(s).unwrap();
    assert_eq!(prefix, "bitcoincash");
    assert_eq!(payload.len(), 13);
    assert_eq!(encode(&prefix, &payload).unwrap(), s);
}

#[test]
fn reference_vector_on_every_network() {
    for s in [
        "bchtest:qpzry9x8gf2tvdw0s3jn5839nranq",
        "bchreg:qpzry9x8gf2tvdw0s3jn5tgutzngm",
    ] {
        let (prefix, payload) = decode(s).unwrap();
        assert_eq!(encode(&prefix, &payload).unwrap(), s);
    }
}

#[test]
fn published_hash160_vectors() {
    let hash = hex::decode("f5bf48b397dae70be82b3cca4793f8eb2b6cdac9").unwrap();
    let cases = [
        ("bitcoincash", AddressType::PubKeyHash, "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2"),
        ("bitcoincash", AddressType::ScriptHash, "bitcoincash:pr6m7j9njldwwzlg9v7v53unlr4jkmx6eyguug74nh"),
        ("bchtest", AddressType::PubKeyHash, "bchtest:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eymt9qmp0k"),
        ("bchreg", AddressType::ScriptHash, "bchreg:pr6m7j9njldwwzlg9v7v53unlr4jkmx6eykjwwl3hd"),
    ];
    for (prefix, address_type, expected) in cases {
        let encoded = encode(prefix, &payload(address_type, &hash)).unwrap();
        assert_eq!(encoded, expected);

        let (_, decoded) = decode(&encoded).unwrap();
        assert_eq!(unpack(decoded[0]).unwrap(), (address_type, 20));
        assert_eq!(&decoded[1..], hash.as_slice());
    }
}

#[test]
fn longer_hash_vectors() {
    let hash32: Vec<u8> = (0u8..32).collect();
    assert_eq!(
        encode("bchtest", &payload(AddressType::ScriptHash, &hash32)).unwrap(),
        "bchtest:pvqqzqsrqszsvpcgpy9qkrqdpc83qygjzv2p29shrqv35xcur50p75dfqqc8x"
    );

    let hash64 = [0xabu8; 64];
    let encoded = encode("bitcoincash", &payload(AddressType::PubKeyHash, &hash64)).unwrap();
    assert!(encoded.starts_with("bitcoincash:q7"));
    assert!(encoded.ends_with("wztaqx4d"));
}

#[test]
fn every_allowed_length_roundtrips() {
    for &len in HASH_SIZES.iter() {
        for address_type in [AddressType::PubKeyHash, AddressType::ScriptHash] {
            let hash: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();
            let p = payload(address_type, &hash);
            let encoded = encode("bchtest", &p).unwrap();
            assert_eq!(decode(&encoded).unwrap(), ("bchtest".to_string(), p));
        }
    }
}

#[test]
fn unsupported_length_cannot_be_packed() {
    assert_eq!(
        pack(AddressType::PubKeyHash, 21),
        Err(CodecError::UnsupportedLength(21))
    );
}

// ---------------------------------------------------------------------------
// Error detection
// ---------------------------------------------------------------------------

#[test]
fn any_single_substitution_is_caught() {
    let s = "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2";
    let body_start = s.find(':').unwrap() + 1;

    for pos in body_start..s.len() {
        for &replacement in CHARSET.iter() {
            if replacement == s.as_bytes()[pos] {
                continue;
            }
            let mut corrupted = s.as_bytes().to_vec();
            corrupted[pos] = replacement;
            let corrupted = String::from_utf8(corrupted).unwrap();
            assert_eq!(
                decode(&corrupted),
                Err(CodecError::ChecksumMismatch),
                "corruption at {} went undetected",
                pos
            );
        }
    }
}

#[test]
fn characters_outside_alphabet_are_reported() {
    assert_eq!(
        decode("bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekgb"),
        Err(CodecError::InvalidCharacter('b'))
    );
}

#[test]
fn mixed_case_is_rejected_but_uniform_case_agrees() {
    let lower = "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2";
    let upper = lower.to_ascii_uppercase();
    assert_eq!(decode(lower).unwrap(), decode(&upper).unwrap());

    let mixed = "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekG2";
    assert_eq!(decode(mixed), Err(CodecError::MixedCase));
}

#[test]
fn nonzero_padding_fails_after_valid_checksum() {
    // Words [0, 1] carry 10 bits: one byte plus 2 leftover bits "01".
    let s = "bitcoincash:qphr8v22e0";
    assert!(decode_words(s).is_ok());
    assert_eq!(decode(s), Err(CodecError::InvalidPadding));
}

// ---------------------------------------------------------------------------
// Typed addresses
// ---------------------------------------------------------------------------

#[test]
fn typed_addresses_match_codec_output() {
    let hash = hex::decode("f5bf48b397dae70be82b3cca4793f8eb2b6cdac9").unwrap();
    let p2pkh = AddressPubKeyHash::new(&hash, Network::Mainnet, Flavor::Cash).unwrap();
    assert_eq!(
        p2pkh.encode_address(),
        encode("bitcoincash", &payload(AddressType::PubKeyHash, &hash)).unwrap()
    );

    let p2sh = AddressScriptHash::from_hash(&hash, Network::Testnet, Flavor::Slp).unwrap();
    assert_eq!(
        p2sh.encode_address(),
        "slptest:pr6m7j9njldwwzlg9v7v53unlr4jkmx6eyh6l5x4xk"
    );
}

#[test]
fn typed_decode_roundtrip_on_every_registered_prefix() {
    let hash = [0x42u8; 20];
    for network in Network::ALL {
        for flavor in Flavor::ALL {
            if network.prefix(flavor).is_none() {
                continue;
            }
            let built: Address = AddressPubKeyHash::new(&hash, network, flavor).unwrap().into();
            let decoded = Address::decode(&built.encode_address(), network).unwrap();
            assert_eq!(decoded, built);
            assert!(decoded.is_for_network(network));
        }
    }
}
