//! Swap memo composition
//!
//! Memo wire format (byte-exact, case-sensitive):
//!
//! ```text
//! SWAP:<TO_CHAIN_TICKER>.<TO_ASSET_SYMBOL>:<TO_ADDRESS>:<LIMIT>
//! SWAP:<TO_CHAIN_TICKER>.<TO_ASSET_SYMBOL>:<TO_ADDRESS>
//! ```
//!
//! The composer performs no validation; callers pass checked inputs.

use std::fmt::Display;

use crate::swap::chain::Chain;

const SWAP_PREFIX: &str = "SWAP";

/// Compose the swap memo with a price limit as the final segment
///
/// `limit` is inserted verbatim, so both `"1234"` and `1234u64` work.
pub fn build_memo(
    to_chain: Chain,
    to_asset_symbol: &str,
    to_address: &str,
    limit: impl Display,
) -> String {
    format!(
        "{SWAP_PREFIX}:{}.{to_asset_symbol}:{to_address}:{limit}",
        to_chain.ticker()
    )
}

/// Compose the swap memo, omitting the limit segment when there is none
pub fn build_memo_with_optional_limit(
    to_chain: Chain,
    to_asset_symbol: &str,
    to_address: &str,
    limit: Option<&str>,
) -> String {
    match limit {
        Some(limit) => build_memo(to_chain, to_asset_symbol, to_address, limit),
        None => format!(
            "{SWAP_PREFIX}:{}.{to_asset_symbol}:{to_address}",
            to_chain.ticker()
        ),
    }
}
