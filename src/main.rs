use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use jito_searcher::block_engine::block_engines;
use jito_searcher::cli::{Cli, Commands};
use jito_searcher::config::{SearcherConfig, load_configuration};
use jito_searcher::log::init_logging;
use jito_searcher::searcher::SearcherClient;
use jito_searcher::utils::timestamp::format_utc_timestamp;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = load_configuration(&cli.config)?;
    config.apply_connection(&cli.connection);

    match cli.command {
        Commands::BundleStatuses { bundle_ids } => {
            let statuses = connect(&config)?.get_bundle_statuses(&bundle_ids).await?;
            print_json(&statuses)
        },
        Commands::TipAccounts => {
            let accounts = connect(&config)?.get_tip_accounts().await?;
            print_json(&accounts)
        },
        Commands::RandomTipAccount => {
            let account = connect(&config)?.get_random_tip_account().await?;
            print_json(&account)
        },
        Commands::SendBundle { transactions } => {
            let bundle_id = connect(&config)?.send_bundle(&transactions).await?;
            print_json(&bundle_id)
        },
        Commands::SendTransaction {
            transaction,
            bundle_only,
        } => {
            let client = connect(&config)?;
            let signature = if bundle_only {
                client.send_transaction_bundle_only(&transaction).await?
            } else {
                client.send_transaction(&transaction).await?
            };
            print_json(&signature)
        },
        Commands::TipFloors => {
            let floors = connect(&config)?.get_tip_floors().await?;
            info!(time = &*format_utc_timestamp(&floors.time); "Tip floor snapshot");
            print_json(&floors)
        },
        Commands::BlockEngines => print_json(block_engines(config.network)),
    }
}

fn connect(config: &SearcherConfig) -> Result<SearcherClient> {
    let block_engine_url = config.resolve_block_engine_url()?;
    let client = SearcherClient::with_options(&block_engine_url, config.client_options())
        .context("Could not create searcher client")?;

    info!(
        block_engine = &*block_engine_url,
        tip_floor = client.tip_floor_url(),
        network:% = config.network;
        "Searcher client ready"
    );
    Ok(client)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
