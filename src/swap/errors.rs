//! Error types for the swap builder
//!
//! Every failure of the validation → memo → assembly pipeline is reported as
//! a [`SwapError`] value. The `Display` strings of the validation variants are
//! part of the external contract: wallets match on them verbatim, so they must
//! not change.

use thiserror::Error;

/// Error taxonomy for swap transaction building
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    /// The source chain has no transaction assembler
    ///
    /// Carries the chain's numeric code, e.g. `Invalid from chain: 2` for BTC.
    #[error("Invalid from chain: {0}")]
    InvalidFromChain(u8),

    /// `from_address` does not match the source chain's address format
    #[error("Invalid from address")]
    InvalidFromAddress,

    /// `to_address` does not match the destination chain's address format
    #[error("Invalid to address")]
    InvalidToAddress,

    /// Amount is not a base-10 integer that fits the native token amount
    #[error("Invalid amount")]
    InvalidAmount,

    /// Supplied or quoted limit is not a base-10 integer
    #[error("Invalid limit")]
    InvalidLimit,

    /// No limit was supplied and the quoter could not provide one
    #[error("No price limit available")]
    QuoteUnavailable,

    /// Chain ticker or numeric code not recognized
    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    /// Transaction bytes could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

impl SwapError {
    /// Short tag for logs
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidFromChain(_) => "chain",
            Self::InvalidFromAddress | Self::InvalidToAddress => "address",
            Self::InvalidAmount => "amount",
            Self::InvalidLimit | Self::QuoteUnavailable => "limit",
            Self::UnknownChain(_) => "input",
            Self::Decode(_) => "decode",
        }
    }
}

impl From<prost::DecodeError> for SwapError {
    fn from(err: prost::DecodeError) -> Self {
        Self::Decode(err.to_string())
    }
}
