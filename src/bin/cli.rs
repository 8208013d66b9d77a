//! # intent-mint CLI
//!
//! Command-line interface over the mint engine. Results are printed to
//! stdout as JSON so the output stays machine-parseable; diagnostics go
//! to stderr.

use clap::{Parser, Subcommand};
use intent_mint::application::services::{
    BatchJob, BatchMinter, ChainSelector, MintOrchestrator, MintRequest,
};
use intent_mint::config::AppConfig;
use intent_mint::infrastructure::blockchain::HttpGasOracle;
use intent_mint::infrastructure::content::{ContentPublisher, IpfsContentStore};
use intent_mint::infrastructure::http_client::HttpClient;
use intent_mint::infrastructure::persistence::FileLedger;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "intent-mint", version, about = "Mint NFT records via intents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Mint an NFT
    Mint {
        /// NFT name
        name: String,
        /// Local image path
        image_path: String,
        /// Force a specific chain instead of cost-based selection
        #[arg(short, long)]
        chain: Option<String>,
    },
    /// Print the full persisted ledger
    List,
    /// Mint a batch of NFTs from a JSON file of `{name, image}` entries
    Batch {
        /// Path of the batch file
        file: String,
        /// Pause between jobs, in seconds
        #[arg(long, default_value_t = 2)]
        pause_secs: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    let http = HttpClient::new(config.http_timeout_ms)?;
    let selector = ChainSelector::new(Arc::new(HttpGasOracle::new(http.clone())));
    let publisher = ContentPublisher::new(Arc::new(IpfsContentStore::new(
        http,
        &config.ipfs_api_url,
    )));
    let ledger = Arc::new(FileLedger::new(&config.ledger_path));
    let orchestrator = Arc::new(MintOrchestrator::new(
        selector,
        publisher,
        ledger,
        config.chains.clone(),
        config.default_owner.clone(),
    ));

    match Cli::parse().command {
        Command::Mint {
            name,
            image_path,
            chain,
        } => {
            let mut request = MintRequest::new(name, image_path);
            request.chain = chain;

            match orchestrator.mint(request).await {
                Ok(receipt) => {
                    println!("{}", json!({ "success": true, "nft": receipt }));
                }
                Err(e) => {
                    println!("{}", json!({ "success": false, "error": e.to_string() }));
                    std::process::exit(1);
                }
            }
        }
        Command::List => {
            let records = orchestrator.list_all().await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Batch { file, pause_secs } => {
            let raw = tokio::fs::read_to_string(&file).await?;
            let jobs: Vec<BatchJob> = serde_json::from_str(&raw)?;

            let minter = BatchMinter::new(orchestrator, Duration::from_secs(pause_secs));
            let outcomes = minter.mint_all(jobs).await;

            let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(receipt) => {
                        println!("{}", json!({ "success": true, "name": outcome.job.name, "id": receipt.id }));
                    }
                    Err(e) => {
                        println!("{}", json!({ "success": false, "name": outcome.job.name, "error": e.to_string() }));
                    }
                }
            }
            if failed > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
