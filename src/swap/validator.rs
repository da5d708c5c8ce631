//! Address and numeric field validation
//!
//! Format checkers for every chain in [`Chain`]. They only answer yes/no:
//! malformed input, a foreign network prefix or an empty string all return
//! `false`. Checks are independent per chain, so an address is never
//! accepted on the strength of looking like another chain's.
//!
//! - bech32 account chains (BNB, THOR): exact prefix, BIP-173 checksum,
//!   20-byte payload, lowercase only
//! - Bitcoin: segwit (`bc`, bech32 for v0 / bech32m for v1+) or base58check
//!   P2PKH/P2SH
//! - Ethereum: `0x` + 40 hex digits, EIP-55 checksum when mixed case

use bech32::{FromBase32, Variant};
use tiny_keccak::{Hasher, Keccak};

use crate::swap::chain::Chain;
use crate::swap::errors::SwapError;

pub const BNB_HRP: &str = "bnb";
pub const THOR_HRP: &str = "thor";
pub const BTC_HRP: &str = "bc";

const ACCOUNT_ADDRESS_LEN: usize = 20;
const BTC_P2PKH_VERSION: u8 = 0x00;
const BTC_P2SH_VERSION: u8 = 0x05;
const ETH_HEX_LEN: usize = 40;

/// Validate `address` against `chain`'s native address format
pub fn validate_address(chain: Chain, address: &str) -> bool {
    chain.support().validate_address(address)
}

/// bech32 account address with human-readable prefix `hrp` and a 20-byte key hash
pub fn is_valid_bech32_account(address: &str, hrp: &str) -> bool {
    // Transactions carry the address text verbatim, so only the canonical
    // lowercase form is accepted.
    if address.bytes().any(|b| b.is_ascii_uppercase()) {
        return false;
    }
    match bech32::decode(address) {
        Ok((decoded_hrp, data, Variant::Bech32)) if decoded_hrp == hrp => {
            Vec::<u8>::from_base32(&data)
                .map(|payload| payload.len() == ACCOUNT_ADDRESS_LEN)
                .unwrap_or(false)
        }
        _ => false,
    }
}

/// Bitcoin mainnet address, segwit or legacy
pub fn is_valid_bitcoin(address: &str) -> bool {
    is_valid_segwit(address) || is_valid_base58_legacy(address)
}

fn is_valid_segwit(address: &str) -> bool {
    let Ok((hrp, data, variant)) = bech32::decode(address) else {
        return false;
    };
    if hrp != BTC_HRP {
        return false;
    }
    let Some((version, program)) = data.split_first() else {
        return false;
    };
    let Ok(program) = Vec::<u8>::from_base32(program) else {
        return false;
    };
    match (version.to_u8(), variant) {
        (0, Variant::Bech32) => program.len() == 20 || program.len() == 32,
        (1..=16, Variant::Bech32m) => (2..=40).contains(&program.len()),
        _ => false,
    }
}

fn is_valid_base58_legacy(address: &str) -> bool {
    match bs58::decode(address).with_check(None).into_vec() {
        Ok(payload) => {
            payload.len() == 1 + ACCOUNT_ADDRESS_LEN
                && matches!(payload[0], BTC_P2PKH_VERSION | BTC_P2SH_VERSION)
        }
        Err(_) => false,
    }
}

/// Ethereum hex address
pub fn is_valid_ethereum(address: &str) -> bool {
    let Some(body) = address.strip_prefix("0x") else {
        return false;
    };
    if body.len() != ETH_HEX_LEN || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }
    let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return body == eip55_checksum(body);
    }
    true
}

/// EIP-55 mixed-case form of a 40-digit hex address body (no `0x`)
pub fn eip55_checksum(body: &str) -> String {
    let lower = body.to_ascii_lowercase();
    let mut hash = [0u8; 32];
    let mut keccak = Keccak::v256();
    keccak.update(lower.as_bytes());
    keccak.finalize(&mut hash);

    lower
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

/// Non-empty string of ASCII digits: no sign, no decimal point
pub fn is_decimal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a smallest-unit amount into the signed 64-bit wire amount
pub fn parse_amount(amount: &str) -> Result<i64, SwapError> {
    if !is_decimal(amount) {
        return Err(SwapError::InvalidAmount);
    }
    amount.parse::<i64>().map_err(|_| SwapError::InvalidAmount)
}
