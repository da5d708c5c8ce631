//! thorswap - command line front end for the swap builder
//!
//! Builds unsigned Binance Chain transactions carrying THORChain swap memos
//! and prints them as hex for an external signer.

#![deny(unused_imports)]
#![deny(unused_mut)]
#![deny(unused_variables)]
#![warn(unused_must_use)]

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use thorswap::config::{Config, LoggingConfig};
use thorswap::swap::{build_memo_with_optional_limit, Chain, SwapBuilder, SwapRequest};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "thorswap.toml", env = "THORSWAP_CONFIG")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build an unsigned swap transaction
    Build(BuildArgs),
    /// Print the swap memo only
    Memo(MemoArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Source chain ticker (only BNB is supported)
    #[arg(long = "from")]
    from_chain: Chain,
    /// Destination chain ticker
    #[arg(long = "to")]
    to_chain: Chain,
    #[arg(long)]
    from_address: String,
    /// Asset symbol to receive on the destination chain
    #[arg(long)]
    to_asset: String,
    #[arg(long)]
    to_address: String,
    /// Protocol vault address on the source chain
    #[arg(long)]
    vault: String,
    /// Amount in the smallest unit of the native asset
    #[arg(long)]
    amount: String,
    /// Price limit; quoted from configuration when omitted
    #[arg(long)]
    limit: Option<String>,
}

#[derive(Args, Debug)]
struct MemoArgs {
    #[arg(long = "to")]
    to_chain: Chain,
    #[arg(long)]
    to_asset: String,
    #[arg(long)]
    to_address: String,
    #[arg(long)]
    limit: Option<String>,
}

#[derive(Serialize)]
struct BuildReport<'a> {
    correlation_id: &'a str,
    memo: &'a str,
    limit: &'a str,
    tx_hex: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, loaded) = load_config(&cli.config)?;
    init_logging(cli.verbose, &config.logging)?;
    if !loaded {
        warn!("Config file '{}' not found, using defaults", cli.config);
    }

    match cli.command {
        Command::Build(args) => run_build(&config, args, cli.json),
        Command::Memo(args) => {
            let memo = build_memo_with_optional_limit(
                args.to_chain,
                &args.to_asset,
                &args.to_address,
                args.limit.as_deref(),
            );
            if cli.json {
                println!("{}", serde_json::json!({ "memo": memo }));
            } else {
                println!("{memo}");
            }
            Ok(())
        }
    }
}

fn run_build(config: &Config, args: BuildArgs, json: bool) -> Result<()> {
    let builder = SwapBuilder::from_config(config);
    let request = SwapRequest {
        from_chain: args.from_chain,
        to_chain: args.to_chain,
        from_address: args.from_address,
        to_asset_symbol: args.to_asset,
        limit: args.limit,
        to_address: args.to_address,
        vault_address: args.vault,
        amount: args.amount,
    };

    let output = builder
        .build(&request)
        .context("Failed to build swap transaction")?;
    info!(
        correlation_id = %output.correlation_id,
        chain_id = %builder.network().chain_id,
        "Unsigned transaction ready for signing"
    );

    if json {
        let report = BuildReport {
            correlation_id: output.correlation_id.as_str(),
            memo: &output.memo,
            limit: &output.limit,
            tx_hex: output.tx_hex(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("memo: {}", output.memo);
        println!("tx:   {}", output.tx_hex());
    }
    Ok(())
}

/// Initialize logging; `RUST_LOG` wins over the configured level
fn init_logging(verbose: bool, logging: &LoggingConfig) -> Result<()> {
    let default_filter = if verbose {
        "thorswap=debug,info".to_string()
    } else {
        logging.level.clone()
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&default_filter))
        .with_context(|| format!("Invalid log filter: {}", default_filter))?;

    // Logs go to stderr so stdout stays machine-readable
    let registry = tracing_subscriber::registry().with(env_filter);
    if logging.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}

/// Load configuration from file with fallback to defaults
fn load_config(path: &str) -> Result<(Config, bool)> {
    if std::path::Path::new(path).exists() {
        let config = Config::from_file_with_env(path)
            .with_context(|| format!("Failed to load config from {}", path))?;
        Ok((config, true))
    } else {
        let mut config = Config::default();
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok((config, false))
    }
}
