//! Chain identifiers and per-chain capabilities
//!
//! [`Chain`] is the closed set of networks the swap protocol routes between.
//! Each variant is backed by a [`ChainSupport`] implementation that knows the
//! chain's address format, its protocol ticker and, for source chains, how
//! to assemble a native transfer. Chains without an assembler fail with
//! [`SwapError::InvalidFromChain`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::NetworkConfig;
use crate::swap::binance::BinanceAssembler;
use crate::swap::errors::SwapError;
use crate::swap::validator;

/// Network taking part in a swap
///
/// The discriminants are the protocol's numeric chain codes and appear in
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Chain {
    Thor = 0,
    Bnb = 1,
    Btc = 2,
    Eth = 3,
}

impl Chain {
    pub const ALL: [Chain; 4] = [Chain::Thor, Chain::Bnb, Chain::Btc, Chain::Eth];

    /// Numeric chain code
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Canonical protocol ticker used in memos
    pub fn ticker(self) -> &'static str {
        match self {
            Chain::Thor => "THOR",
            Chain::Bnb => "BNB",
            Chain::Btc => "BTC",
            Chain::Eth => "ETH",
        }
    }

    /// Capability object for this chain
    pub fn support(self) -> &'static dyn ChainSupport {
        match self {
            Chain::Thor => &Thorchain,
            Chain::Bnb => &BinanceChain,
            Chain::Btc => &Bitcoin,
            Chain::Eth => &Ethereum,
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker())
    }
}

impl FromStr for Chain {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::ALL
            .into_iter()
            .find(|chain| chain.ticker().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SwapError::UnknownChain(s.to_string()))
    }
}

impl TryFrom<u8> for Chain {
    type Error = SwapError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Chain::ALL
            .into_iter()
            .find(|chain| chain.code() == code)
            .ok_or_else(|| SwapError::UnknownChain(code.to_string()))
    }
}

/// What the swap builder needs to know about a chain
pub trait ChainSupport: Send + Sync {
    fn chain(&self) -> Chain;

    /// Check `address` against this chain's native format. Never panics.
    fn validate_address(&self, address: &str) -> bool;

    fn ticker(&self) -> &'static str {
        self.chain().ticker()
    }

    /// Whether swaps may originate on this chain
    fn supports_source(&self) -> bool {
        false
    }

    /// Build the serialized unsigned transfer of `amount` from `from_address`
    /// to `vault_address` with `memo` attached.
    fn assemble_transfer(
        &self,
        _network: &NetworkConfig,
        _from_address: &str,
        _vault_address: &str,
        _amount: &str,
        _memo: &str,
    ) -> Result<Vec<u8>, SwapError> {
        Err(SwapError::InvalidFromChain(self.chain().code()))
    }
}

struct Thorchain;

impl ChainSupport for Thorchain {
    fn chain(&self) -> Chain {
        Chain::Thor
    }

    fn validate_address(&self, address: &str) -> bool {
        validator::is_valid_bech32_account(address, validator::THOR_HRP)
    }
}

struct BinanceChain;

impl ChainSupport for BinanceChain {
    fn chain(&self) -> Chain {
        Chain::Bnb
    }

    fn validate_address(&self, address: &str) -> bool {
        validator::is_valid_bech32_account(address, validator::BNB_HRP)
    }

    fn supports_source(&self) -> bool {
        true
    }

    fn assemble_transfer(
        &self,
        network: &NetworkConfig,
        from_address: &str,
        vault_address: &str,
        amount: &str,
        memo: &str,
    ) -> Result<Vec<u8>, SwapError> {
        BinanceAssembler::new(network).assemble(from_address, vault_address, amount, memo)
    }
}

struct Bitcoin;

impl ChainSupport for Bitcoin {
    fn chain(&self) -> Chain {
        Chain::Btc
    }

    fn validate_address(&self, address: &str) -> bool {
        validator::is_valid_bitcoin(address)
    }
}

struct Ethereum;

impl ChainSupport for Ethereum {
    fn chain(&self) -> Chain {
        Chain::Eth
    }

    fn validate_address(&self, address: &str) -> bool {
        validator::is_valid_ethereum(address)
    }
}
