use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::block_engine::Network;

#[derive(Parser)]
#[command(name = "jito-searcher")]
#[command(about = "Jito block engine searcher client", long_about = None)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        help = "Path to the configuration file",
        default_value = "config/config.toml"
    )]
    pub config: PathBuf,
    #[command(flatten)]
    pub connection: ConnectionArgs,
    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for the values in the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    #[arg(long, global = true, help = "The Solana cluster (mainnet or testnet)")]
    pub network: Option<Network>,
    #[arg(short = 'u', long, global = true, help = "Base URL of the block engine")]
    pub block_engine_url: Option<String>,
    #[arg(short, long, global = true, help = "Block engine region, e.g. Frankfurt")]
    pub region: Option<String>,
    #[arg(long, global = true, help = "Base URL of the tip floor statistics host")]
    pub tip_floor_url: Option<String>,
    #[arg(long, global = true, help = "Retries for transient HTTP failures")]
    pub max_retries: Option<u32>,
    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the status of submitted bundles (at most 5 ids)
    BundleStatuses {
        #[arg(required = true, help = "Bundle ids")]
        bundle_ids: Vec<String>,
    },
    /// List the tip accounts
    TipAccounts,
    /// Pick one tip account at random
    RandomTipAccount,
    /// Submit a bundle of base-58 encoded signed transactions (at most 5)
    SendBundle {
        #[arg(required = true, help = "Signed transactions, base-58 encoded")]
        transactions: Vec<String>,
    },
    /// Submit a single base-58 encoded signed transaction
    SendTransaction {
        #[arg(help = "Signed transaction, base-58 encoded")]
        transaction: String,
        #[arg(long, help = "Only submit the transaction as a bundle")]
        bundle_only: bool,
    },
    /// Show the latest tip floor statistics in lamports
    TipFloors,
    /// List the known block engines of a network
    BlockEngines,
}
