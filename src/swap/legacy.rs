//! Tuple-returning wrapper for wallet bindings
//!
//! Wallet bindings expect `(bytes, error)` with exactly one side non-empty
//! and an empty string meaning "no limit". This module maps that calling
//! convention onto [`SwapBuilder::build`].

use crate::swap::builder::{SwapBuilder, SwapRequest};
use crate::swap::chain::Chain;

/// Build a swap transaction, reporting failure as a message
///
/// Returns `(tx, "")` on success and `(vec![], message)` on failure.
#[allow(clippy::too_many_arguments)]
pub fn build(
    builder: &SwapBuilder,
    from_chain: Chain,
    to_chain: Chain,
    from_address: &str,
    to_asset_symbol: &str,
    limit: &str,
    to_address: &str,
    vault_address: &str,
    amount: &str,
) -> (Vec<u8>, String) {
    let request = SwapRequest {
        from_chain,
        to_chain,
        from_address: from_address.to_string(),
        to_asset_symbol: to_asset_symbol.to_string(),
        limit: (!limit.is_empty()).then(|| limit.to_string()),
        to_address: to_address.to_string(),
        vault_address: vault_address.to_string(),
        amount: amount.to_string(),
    };

    match builder.build(&request) {
        Ok(output) => (output.into_tx(), String::new()),
        Err(err) => (Vec::new(), err.to_string()),
    }
}
