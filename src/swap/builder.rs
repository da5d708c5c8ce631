//! Swap builder orchestration
//!
//! [`SwapBuilder`] runs the pipeline top-down and stops at the first failure:
//!
//! 1. source chain must have an assembler (`InvalidFromChain`)
//! 2. `from_address` checked against the source chain (`InvalidFromAddress`)
//! 3. `to_address` checked against the destination chain (`InvalidToAddress`)
//! 4. amount must be a base-10 integer in range (`InvalidAmount`)
//! 5. limit taken from the request, or from the quoter when absent
//! 6. memo composed
//! 7. unsigned transfer assembled on the source chain
//!
//! The builder keeps no state between calls. It is `Send + Sync` and can be
//! shared across threads without locking.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{Config, NetworkConfig};
use crate::observability::CorrelationId;
use crate::structured_logging::StructuredLogger;
use crate::swap::chain::Chain;
use crate::swap::errors::SwapError;
use crate::swap::memo::build_memo;
use crate::swap::quote::{FixedLimitQuoter, LimitQuoter, NoLimitQuoter};
use crate::swap::validator::{is_decimal, parse_amount};

/// Parameters of one swap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    pub from_chain: Chain,
    pub to_chain: Chain,
    pub from_address: String,
    pub to_asset_symbol: String,
    /// Price limit; `None` asks the quoter for a default
    #[serde(default)]
    pub limit: Option<String>,
    pub to_address: String,
    pub vault_address: String,
    /// Smallest-unit amount as a base-10 integer string
    pub amount: String,
}

/// Result of a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutput {
    /// Serialized unsigned transaction, ready for the signer
    pub tx: Vec<u8>,

    /// Memo embedded in the transaction
    pub memo: String,

    /// Limit used in the memo, supplied or quoted
    pub limit: String,

    pub correlation_id: CorrelationId,
}

impl SwapOutput {
    pub fn tx_hex(&self) -> String {
        hex::encode(&self.tx)
    }

    pub fn into_tx(self) -> Vec<u8> {
        self.tx
    }
}

/// Validates swap requests and assembles their unsigned transactions
#[derive(Clone)]
pub struct SwapBuilder {
    network: NetworkConfig,
    quoter: Arc<dyn LimitQuoter>,
}

impl std::fmt::Debug for SwapBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapBuilder")
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

impl SwapBuilder {
    pub fn new(network: NetworkConfig, quoter: impl LimitQuoter + 'static) -> Self {
        Self {
            network,
            quoter: Arc::new(quoter),
        }
    }

    /// Builder for the configured network; the quoter returns
    /// `quote.fixed_limit` or fails when it is unset.
    pub fn from_config(config: &Config) -> Self {
        match &config.quote.fixed_limit {
            Some(limit) => Self::new(config.network.clone(), FixedLimitQuoter::new(limit.clone())),
            None => Self::new(config.network.clone(), NoLimitQuoter),
        }
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    /// Validate `request` and assemble its unsigned transaction
    pub fn build(&self, request: &SwapRequest) -> Result<SwapOutput, SwapError> {
        let logger = StructuredLogger::new(CorrelationId::for_swap(
            request.from_chain,
            request.to_chain,
        ));
        logger.log_build_attempt(request);

        match self.run_pipeline(request, &logger) {
            Ok(output) => {
                logger.log_build_success(request, &output.memo, output.tx.len());
                Ok(output)
            }
            Err(err) => {
                logger.log_build_failure(request, &err);
                Err(err)
            }
        }
    }

    fn run_pipeline(
        &self,
        request: &SwapRequest,
        logger: &StructuredLogger,
    ) -> Result<SwapOutput, SwapError> {
        let source = request.from_chain.support();
        if !source.supports_source() {
            return Err(SwapError::InvalidFromChain(request.from_chain.code()));
        }

        if !source.validate_address(&request.from_address) {
            return Err(SwapError::InvalidFromAddress);
        }
        if !request.to_chain.support().validate_address(&request.to_address) {
            return Err(SwapError::InvalidToAddress);
        }
        parse_amount(&request.amount)?;
        logger.log_stage("validated");

        let limit = self.resolve_limit(request, logger)?;
        let memo = build_memo(
            request.to_chain,
            &request.to_asset_symbol,
            &request.to_address,
            &limit,
        );
        logger.log_stage("memo");

        let tx = source.assemble_transfer(
            &self.network,
            &request.from_address,
            &request.vault_address,
            &request.amount,
            &memo,
        )?;

        Ok(SwapOutput {
            tx,
            memo,
            limit,
            correlation_id: logger.correlation_id().clone(),
        })
    }

    fn resolve_limit(
        &self,
        request: &SwapRequest,
        logger: &StructuredLogger,
    ) -> Result<String, SwapError> {
        // An empty limit means "none supplied"
        let limit = match request.limit.as_deref().filter(|limit| !limit.is_empty()) {
            Some(limit) => limit.to_string(),
            None => {
                let quoted = self.quoter.resolve_default_limit(request)?;
                logger.log_limit_quoted(&quoted);
                quoted
            }
        };
        if !is_decimal(&limit) {
            return Err(SwapError::InvalidLimit);
        }
        Ok(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const BNB_ADDR: &str = "bnb1z53wwe7md6cewz9sqwqzn0aavpaun0gwt6qy7j";
    const BNB_VAULT: &str = "bnb1ksxqxurvejkndenuv0alqawpr3e4vtqk855aal";
    const BTC_ADDR: &str = "bc1qpjult34k9spjfym8hss2jrwjgf0xjf40ze0pp8";

    fn builder() -> SwapBuilder {
        SwapBuilder::new(NetworkConfig::default(), FixedLimitQuoter::new("343050111"))
    }

    fn bnb_to_btc() -> SwapRequest {
        SwapRequest {
            from_chain: Chain::Bnb,
            to_chain: Chain::Btc,
            from_address: BNB_ADDR.into(),
            to_asset_symbol: "BTC".into(),
            limit: None,
            to_address: BTC_ADDR.into(),
            vault_address: BNB_VAULT.into(),
            amount: "10000000".into(),
        }
    }

    #[test]
    fn test_build_uses_quoted_limit() {
        let output = builder().build(&bnb_to_btc()).unwrap();
        assert_eq!(output.limit, "343050111");
        assert_eq!(
            output.memo,
            "SWAP:BTC.BTC:bc1qpjult34k9spjfym8hss2jrwjgf0xjf40ze0pp8:343050111"
        );
        assert!(!output.tx.is_empty());
    }

    #[test]
    fn test_supplied_limit_skips_quoter() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let quoter = move |_: &SwapRequest| -> Result<String, SwapError> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok("1".to_string())
        };
        let builder = SwapBuilder::new(NetworkConfig::default(), quoter);

        let mut request = bnb_to_btc();
        request.limit = Some("777".into());
        let output = builder.build(&request).unwrap();

        assert_eq!(output.limit, "777");
        assert!(output.memo.ends_with(":777"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_limit_is_quoted() {
        let mut request = bnb_to_btc();
        request.limit = Some(String::new());
        let output = builder().build(&request).unwrap();
        assert_eq!(output.limit, "343050111");
        assert_eq!(
            output.memo,
            "SWAP:BTC.BTC:bc1qpjult34k9spjfym8hss2jrwjgf0xjf40ze0pp8:343050111"
        );
    }

    #[test]
    fn test_empty_limit_in_json_is_quoted() {
        let mut json = serde_json::to_value(bnb_to_btc()).unwrap();
        json["limit"] = serde_json::Value::String(String::new());
        let request: SwapRequest = serde_json::from_value(json).unwrap();

        let output = builder().build(&request).unwrap();
        assert!(output.memo.ends_with(":343050111"));
    }

    #[test]
    fn test_correlation_id_names_route() {
        let output = builder().build(&bnb_to_btc()).unwrap();
        assert!(output.correlation_id.as_str().starts_with("bnb-btc-"));
    }

    #[test]
    fn test_chain_check_comes_first() {
        let mut request = bnb_to_btc();
        request.from_chain = Chain::Btc;
        request.from_address = "garbage".into();
        request.to_address = "garbage".into();
        assert_eq!(builder().build(&request), Err(SwapError::InvalidFromChain(2)));
    }

    #[test]
    fn test_from_address_checked_before_to_address() {
        let mut request = bnb_to_btc();
        request.from_address = "DummyAddress".into();
        request.to_address = "DummyAddress".into();
        assert_eq!(builder().build(&request), Err(SwapError::InvalidFromAddress));
    }

    #[test]
    fn test_to_address_uses_destination_rules() {
        let mut request = bnb_to_btc();
        request.to_address = BNB_ADDR.into();
        assert_eq!(builder().build(&request), Err(SwapError::InvalidToAddress));
    }

    #[test]
    fn test_bad_amount() {
        let mut request = bnb_to_btc();
        request.amount = "-10".into();
        assert_eq!(builder().build(&request), Err(SwapError::InvalidAmount));
    }

    #[test]
    fn test_bad_limits() {
        let mut request = bnb_to_btc();
        request.limit = Some("12.5".into());
        assert_eq!(builder().build(&request), Err(SwapError::InvalidLimit));

        let builder = SwapBuilder::new(NetworkConfig::default(), FixedLimitQuoter::new("n/a"));
        assert_eq!(builder.build(&bnb_to_btc()), Err(SwapError::InvalidLimit));
    }

    #[test]
    fn test_missing_quote() {
        let builder = SwapBuilder::new(NetworkConfig::default(), NoLimitQuoter);
        assert_eq!(builder.build(&bnb_to_btc()), Err(SwapError::QuoteUnavailable));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        assert_eq!(
            SwapBuilder::from_config(&config).build(&bnb_to_btc()),
            Err(SwapError::QuoteUnavailable)
        );

        config.quote.fixed_limit = Some("5".into());
        let output = SwapBuilder::from_config(&config).build(&bnb_to_btc()).unwrap();
        assert_eq!(output.limit, "5");
    }

    #[test]
    fn test_builder_is_shareable_across_threads() {
        let builder = Arc::new(builder());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let builder = Arc::clone(&builder);
                std::thread::spawn(move || builder.build(&bnb_to_btc()).unwrap().tx)
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_request_deserializes_from_json() {
        let request: SwapRequest = serde_json::from_str(&format!(
            r#"{{"from_chain":"BNB","to_chain":"BTC","from_address":"{BNB_ADDR}",
                "to_asset_symbol":"BTC","to_address":"{BTC_ADDR}",
                "vault_address":"{BNB_VAULT}","amount":"10000000"}}"#
        ))
        .unwrap();
        assert_eq!(request, bnb_to_btc());
    }
}
