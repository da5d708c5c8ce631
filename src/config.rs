//! Configuration for the swap builder
//!
//! Loaded from a TOML file, with `.env` and `THORSWAP_*` environment
//! variable overrides. Every field has a default, so an empty file is a
//! valid configuration for the Binance Chain testnet.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::swap::validator::is_decimal;

pub const ENV_CHAIN_ID: &str = "THORSWAP_CHAIN_ID";
pub const ENV_NATIVE_DENOM: &str = "THORSWAP_NATIVE_DENOM";
pub const ENV_FIXED_LIMIT: &str = "THORSWAP_FIXED_LIMIT";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Source chain network parameters
    #[serde(default)]
    pub network: NetworkConfig,

    /// Default limit source
    #[serde(default)]
    pub quote: QuoteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Binance Chain network the unsigned transactions target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Chain ID written into every transaction
    #[serde(default = "default_chain_id")]
    pub chain_id: String,

    /// Denom of the native asset moved to the vault
    #[serde(default = "default_native_denom")]
    pub native_denom: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Limit used when a request omits one; unset means such requests fail
    #[serde(default)]
    pub fixed_limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_chain_id() -> String {
    "Binance-Chain-Nile".to_string()
}
fn default_native_denom() -> String {
    "BNB".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            chain_id: default_chain_id(),
            native_denom: default_native_denom(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` and environment variable overrides
    pub fn from_file_with_env(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `THORSWAP_*` overrides looked up through `lookup`
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(chain_id) = lookup(ENV_CHAIN_ID) {
            self.network.chain_id = chain_id;
        }
        if let Some(denom) = lookup(ENV_NATIVE_DENOM) {
            self.network.native_denom = denom;
        }
        if let Some(limit) = lookup(ENV_FIXED_LIMIT) {
            self.quote.fixed_limit = Some(limit);
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.network.chain_id.trim().is_empty() {
            anyhow::bail!("network.chain_id must not be empty");
        }
        if self.network.native_denom.trim().is_empty() {
            anyhow::bail!("network.native_denom must not be empty");
        }
        if let Some(limit) = &self.quote.fixed_limit {
            if !is_decimal(limit) {
                anyhow::bail!("quote.fixed_limit must be a base-10 integer, got {:?}", limit);
            }
        }
        Ok(())
    }
}
