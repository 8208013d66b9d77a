//! # intent-mint service
//!
//! Main entry point: wires configuration, the gas oracle, the IPFS
//! content store and the file ledger into the mint orchestrator, then
//! serves the REST API.

use intent_mint::api::rest::{AppState, create_router};
use intent_mint::application::services::{ChainSelector, MintOrchestrator};
use intent_mint::config::AppConfig;
use intent_mint::infrastructure::blockchain::HttpGasOracle;
use intent_mint::infrastructure::content::{ContentPublisher, IpfsContentStore};
use intent_mint::infrastructure::http_client::HttpClient;
use intent_mint::infrastructure::persistence::FileLedger;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = AppConfig::load()?;
    info!(
        ledger = %config.ledger_path,
        ipfs = %config.ipfs_api_url,
        chains = config.chains.len(),
        "starting intent-mint v{}",
        env!("CARGO_PKG_VERSION")
    );

    let http = HttpClient::new(config.http_timeout_ms)?;
    let selector = ChainSelector::new(Arc::new(HttpGasOracle::new(http.clone())));
    let publisher = ContentPublisher::new(Arc::new(IpfsContentStore::new(
        http,
        &config.ipfs_api_url,
    )));
    let ledger = Arc::new(FileLedger::new(&config.ledger_path));

    let orchestrator = MintOrchestrator::new(
        selector,
        publisher,
        ledger,
        config.chains.clone(),
        config.default_owner.clone(),
    );

    let state = Arc::new(AppState {
        orchestrator: Arc::new(orchestrator),
    });
    let router = create_router(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "api server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
