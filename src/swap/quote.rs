//! Default price-limit resolution
//!
//! When a request carries no limit, the builder asks a [`LimitQuoter`] for
//! one. How a quote is derived (pool depth, slippage tolerance) belongs to
//! the quoter; the builder only checks that the answer is a base-10 integer.

use crate::swap::builder::SwapRequest;
use crate::swap::errors::SwapError;

/// Supplies a default limit for requests that omit one
pub trait LimitQuoter: Send + Sync {
    fn resolve_default_limit(&self, request: &SwapRequest) -> Result<String, SwapError>;
}

impl<F> LimitQuoter for F
where
    F: Fn(&SwapRequest) -> Result<String, SwapError> + Send + Sync,
{
    fn resolve_default_limit(&self, request: &SwapRequest) -> Result<String, SwapError> {
        self(request)
    }
}

/// Returns the same configured limit for every request
#[derive(Debug, Clone)]
pub struct FixedLimitQuoter {
    limit: String,
}

impl FixedLimitQuoter {
    pub fn new(limit: impl Into<String>) -> Self {
        Self {
            limit: limit.into(),
        }
    }
}

impl LimitQuoter for FixedLimitQuoter {
    fn resolve_default_limit(&self, _request: &SwapRequest) -> Result<String, SwapError> {
        Ok(self.limit.clone())
    }
}

/// Quoter for setups without a quote source; callers must pass a limit
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLimitQuoter;

impl LimitQuoter for NoLimitQuoter {
    fn resolve_default_limit(&self, _request: &SwapRequest) -> Result<String, SwapError> {
        Err(SwapError::QuoteUnavailable)
    }
}
