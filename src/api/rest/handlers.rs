//! # REST Handlers
//!
//! Request/response types and handler functions for the REST API.

use crate::application::error::MintError;
use crate::application::services::mint_orchestrator::{
    MintOrchestrator, MintReceipt, MintRequest,
};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Shared state for REST handlers.
#[derive(Debug)]
pub struct AppState {
    /// The mint orchestrator.
    pub orchestrator: Arc<MintOrchestrator>,
}

/// Body of `POST /api/mint`.
#[derive(Debug, Deserialize)]
pub struct MintApiRequest {
    /// Display name for the NFT.
    #[serde(default)]
    pub name: String,
    /// Path of the local image file to publish.
    #[serde(default)]
    pub image_path: String,
    /// Optional explicit chain override.
    #[serde(default)]
    pub chain: Option<String>,
}

/// Successful mint response.
#[derive(Debug, Serialize)]
pub struct MintResponse {
    /// Always `true`.
    pub success: bool,
    /// Public fields of the minted record.
    pub nft: MintReceipt,
}

/// Structured failure payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    /// Creates a failure payload.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// `POST /api/mint`
pub async fn mint(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MintApiRequest>,
) -> Response {
    let mut request = MintRequest::new(body.name, body.image_path);
    request.chain = body.chain;

    match state.orchestrator.mint(request).await {
        Ok(nft) => (
            StatusCode::OK,
            Json(MintResponse { success: true, nft }),
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, "mint request failed");
            (status_for(&e), Json(ErrorResponse::new(e.to_string()))).into_response()
        }
    }
}

/// `GET /api/nfts`
pub async fn list_nfts(State(state): State<Arc<AppState>>) -> Response {
    match state.orchestrator.list_all().await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => {
            warn!(error = %e, "ledger read failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// `GET /api/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Maps a mint error to an HTTP status code.
fn status_for(error: &MintError) -> StatusCode {
    if error.is_input_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
