//! Structured logging for swap builds

use crate::observability::CorrelationId;
use crate::swap::{SwapError, SwapRequest};

/// Emits the pipeline events of one build, all tagged with its correlation ID
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    correlation_id: CorrelationId,
}

impl StructuredLogger {
    pub fn new(correlation_id: CorrelationId) -> Self {
        Self { correlation_id }
    }

    pub fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }

    pub fn log_build_attempt(&self, request: &SwapRequest) {
        tracing::debug!(
            correlation_id = %self.correlation_id,
            from_chain = %request.from_chain,
            to_chain = %request.to_chain,
            to_asset = %request.to_asset_symbol,
            amount = %request.amount,
            has_limit = request.limit.is_some(),
            "Building swap transaction"
        );
    }

    pub fn log_stage(&self, stage: &str) {
        tracing::debug!(
            correlation_id = %self.correlation_id,
            stage = %stage,
            "Swap pipeline stage passed"
        );
    }

    pub fn log_limit_quoted(&self, limit: &str) {
        tracing::debug!(
            correlation_id = %self.correlation_id,
            limit = %limit,
            "Default limit resolved by quoter"
        );
    }

    pub fn log_build_success(&self, request: &SwapRequest, memo: &str, tx_len: usize) {
        tracing::info!(
            correlation_id = %self.correlation_id,
            from_address = %request.from_address,
            vault_address = %request.vault_address,
            memo = %memo,
            tx_len = tx_len,
            "Swap transaction built"
        );
    }

    pub fn log_build_failure(&self, request: &SwapRequest, error: &SwapError) {
        tracing::warn!(
            correlation_id = %self.correlation_id,
            from_chain = %request.from_chain,
            to_chain = %request.to_chain,
            category = error.category(),
            error = %error,
            "Swap transaction rejected"
        );
    }
}
