//! thorswap - unsigned THORChain swap transactions for wallets
//!
//! Validates swap addresses, composes the protocol memo and assembles the
//! unsigned Binance Chain transfer that an external signer completes.

pub mod config;
pub mod observability;
pub mod structured_logging;
pub mod swap;

// Re-export commonly used types
pub use config::Config;
pub use swap::{Chain, SwapBuilder, SwapError, SwapOutput, SwapRequest};
