//! Correlation of the log events emitted by one swap build

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::swap::chain::Chain;

/// Identifier shared by every log event of one build
///
/// Formatted as `<from>-<to>-<uuid>` so that log lines can be filtered by
/// route before the request fields are parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Fresh ID for a swap from `from` to `to`
    pub fn for_swap(from: Chain, to: Chain) -> Self {
        let route = format!("{from}-{to}").to_ascii_lowercase();
        Self(format!("{route}-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
