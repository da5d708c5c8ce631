//! THORChain swap transaction builder
//!
//! Turns a swap intent into an unsigned source-chain transfer whose memo
//! tells THORChain what to do with the funds sent to its vault.
//!
//! ## Architecture
//!
//! - **chain**: closed [`Chain`] set with per-chain [`ChainSupport`] capabilities
//! - **validator**: address format checks per chain, amount parsing
//! - **memo**: byte-exact `SWAP:` memo composition
//! - **binance**: Binance Chain `SigningInput` assembly and decoding
//! - **quote**: default limit strategy for requests without one
//! - **builder**: the validation → memo → assembly pipeline
//! - **legacy**: `(bytes, error)` tuple wrapper for wallet bindings
//! - **errors**: [`SwapError`] taxonomy
//!
//! Only Binance Chain is a supported source; every other source chain fails
//! fast with `Invalid from chain: <code>`.
//!
//! ## Usage Example
//!
//! ```rust
//! use thorswap::config::NetworkConfig;
//! use thorswap::swap::{Chain, FixedLimitQuoter, SwapBuilder, SwapRequest};
//!
//! let builder = SwapBuilder::new(NetworkConfig::default(), FixedLimitQuoter::new("343050111"));
//! let output = builder
//!     .build(&SwapRequest {
//!         from_chain: Chain::Bnb,
//!         to_chain: Chain::Btc,
//!         from_address: "bnb1z53wwe7md6cewz9sqwqzn0aavpaun0gwt6qy7j".into(),
//!         to_asset_symbol: "BTC".into(),
//!         limit: None,
//!         to_address: "bc1qpjult34k9spjfym8hss2jrwjgf0xjf40ze0pp8".into(),
//!         vault_address: "bnb1ksxqxurvejkndenuv0alqawpr3e4vtqk855aal".into(),
//!         amount: "10000000".into(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(
//!     output.memo,
//!     "SWAP:BTC.BTC:bc1qpjult34k9spjfym8hss2jrwjgf0xjf40ze0pp8:343050111"
//! );
//! ```

pub mod binance;
pub mod chain;
pub mod errors;
pub mod legacy;
pub mod memo;
pub mod quote;
pub mod validator;

mod builder;

pub use binance::{decode_signing_input, BinanceAssembler, SigningInput};
pub use builder::{SwapBuilder, SwapOutput, SwapRequest};
pub use chain::{Chain, ChainSupport};
pub use errors::SwapError;
pub use memo::{build_memo, build_memo_with_optional_limit};
pub use quote::{FixedLimitQuoter, LimitQuoter, NoLimitQuoter};
pub use validator::validate_address;
