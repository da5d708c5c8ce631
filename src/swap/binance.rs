//! Binance Chain unsigned transfer assembly
//!
//! Produces the protobuf `SigningInput` consumed by the Binance signer: a
//! single-input, single-output `SendOrder` of the native denom, the swap memo,
//! and an empty private key. The signer fills in the key, signs and
//! re-encodes; nothing here touches key material.
//!
//! Proto3 omits zero and empty fields, so account number, sequence, source
//! and private key do not appear in the encoded bytes.

use prost::Message;
use tracing::debug;

use crate::config::NetworkConfig;
use crate::swap::errors::SwapError;
use crate::swap::validator::parse_amount;

/// Coin amount in the smallest unit of `denom`
#[derive(Clone, PartialEq, Message)]
pub struct Token {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(int64, tag = "2")]
    pub amount: i64,
}

/// Debited side of a send order; `address` is the bech32 text as bytes
#[derive(Clone, PartialEq, Message)]
pub struct SendInput {
    #[prost(bytes = "vec", tag = "1")]
    pub address: Vec<u8>,
    #[prost(message, repeated, tag = "2")]
    pub coins: Vec<Token>,
}

/// Credited side of a send order
#[derive(Clone, PartialEq, Message)]
pub struct SendOutput {
    #[prost(bytes = "vec", tag = "1")]
    pub address: Vec<u8>,
    #[prost(message, repeated, tag = "2")]
    pub coins: Vec<Token>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SendOrder {
    #[prost(message, repeated, tag = "1")]
    pub inputs: Vec<SendInput>,
    #[prost(message, repeated, tag = "2")]
    pub outputs: Vec<SendOutput>,
}

/// Unsigned Binance Chain transaction
#[derive(Clone, PartialEq, Message)]
pub struct SigningInput {
    #[prost(string, tag = "1")]
    pub chain_id: String,
    #[prost(int64, tag = "2")]
    pub account_number: i64,
    #[prost(int64, tag = "3")]
    pub sequence: i64,
    #[prost(int64, tag = "4")]
    pub source: i64,
    #[prost(string, tag = "5")]
    pub memo: String,
    #[prost(bytes = "vec", tag = "6")]
    pub private_key: Vec<u8>,
    #[prost(message, optional, tag = "10")]
    pub send_order: Option<SendOrder>,
}

// Lossy only for bytes no validated address can hold
fn address_text(address: &[u8]) -> String {
    String::from_utf8_lossy(address).into_owned()
}

impl SendInput {
    /// Debited address as text
    pub fn address_str(&self) -> String {
        address_text(&self.address)
    }
}

impl SendOutput {
    /// Credited (vault) address as text
    pub fn address_str(&self) -> String {
        address_text(&self.address)
    }
}

/// Builds unsigned transfers for one Binance Chain network
#[derive(Debug, Clone)]
pub struct BinanceAssembler<'a> {
    network: &'a NetworkConfig,
}

impl<'a> BinanceAssembler<'a> {
    pub fn new(network: &'a NetworkConfig) -> Self {
        Self { network }
    }

    /// Build the unsigned transaction message
    ///
    /// Addresses are taken as already validated.
    ///
    /// # Errors
    ///
    /// [`SwapError::InvalidAmount`] if `amount` is not a base-10 integer in
    /// `0..=i64::MAX`.
    pub fn signing_input(
        &self,
        from_address: &str,
        vault_address: &str,
        amount: &str,
        memo: &str,
    ) -> Result<SigningInput, SwapError> {
        let amount = parse_amount(amount)?;
        let coins = vec![Token {
            denom: self.network.native_denom.clone(),
            amount,
        }];

        let send_order = SendOrder {
            inputs: vec![SendInput {
                address: from_address.as_bytes().to_vec(),
                coins: coins.clone(),
            }],
            outputs: vec![SendOutput {
                address: vault_address.as_bytes().to_vec(),
                coins,
            }],
        };

        Ok(SigningInput {
            chain_id: self.network.chain_id.clone(),
            memo: memo.to_string(),
            send_order: Some(send_order),
            ..Default::default()
        })
    }

    /// Build and serialize the unsigned transaction
    pub fn assemble(
        &self,
        from_address: &str,
        vault_address: &str,
        amount: &str,
        memo: &str,
    ) -> Result<Vec<u8>, SwapError> {
        let input = self.signing_input(from_address, vault_address, amount, memo)?;
        let bytes = input.encode_to_vec();
        debug!(
            chain_id = %self.network.chain_id,
            encoded_len = bytes.len(),
            "Assembled unsigned Binance transfer"
        );
        Ok(bytes)
    }
}

/// Decode bytes produced by [`BinanceAssembler::assemble`]
pub fn decode_signing_input(bytes: &[u8]) -> Result<SigningInput, SwapError> {
    Ok(SigningInput::decode(bytes)?)
}
