//! # REST API
//!
//! REST endpoints using axum for minting and ledger queries.
//!
//! # Endpoints
//!
//! - `POST /api/mint` - Mint an NFT record
//! - `GET /api/nfts` - List the full persisted ledger
//! - `GET /api/health` - Health check endpoint
//!
//! Every fatal mint error is reported as a structured failure payload
//! (`{"success": false, "error": ...}`); the service keeps running and
//! stays available for subsequent calls.
//!
//! # Usage
//!
//! ```ignore
//! use intent_mint::api::rest::{AppState, create_router};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState { orchestrator });
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, ErrorResponse, HealthResponse, MintApiRequest, MintResponse};
pub use routes::create_router;
