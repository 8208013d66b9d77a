//! # Batch Minting
//!
//! Drives a list of mint jobs through the orchestrator as a rate-limited
//! sequential queue: each job completes before the next starts, with a
//! fixed pause in between to stay under remote rate limits. One failed
//! job does not stop the batch.

use crate::application::error::MintError;
use crate::application::services::mint_orchestrator::{
    MintOrchestrator, MintReceipt, MintRequest,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// A single batch entry.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchJob {
    /// Display name for the NFT.
    pub name: String,
    /// Path of the local image file.
    pub image: String,
}

/// Outcome of one batch entry.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The job that was attempted.
    pub job: BatchJob,
    /// The mint result.
    pub result: Result<MintReceipt, MintError>,
}

/// Rate-limited sequential batch minter.
#[derive(Debug, Clone)]
pub struct BatchMinter {
    orchestrator: Arc<MintOrchestrator>,
    pause: Duration,
}

impl BatchMinter {
    /// Default pause between jobs.
    pub const DEFAULT_PAUSE: Duration = Duration::from_secs(2);

    /// Creates a batch minter with the given pause between jobs.
    #[must_use]
    pub fn new(orchestrator: Arc<MintOrchestrator>, pause: Duration) -> Self {
        Self { orchestrator, pause }
    }

    /// Creates a batch minter with the default pause.
    #[must_use]
    pub fn with_default_pause(orchestrator: Arc<MintOrchestrator>) -> Self {
        Self::new(orchestrator, Self::DEFAULT_PAUSE)
    }

    /// Mints every job in order, pausing between jobs. Failures are
    /// collected per job and never abort the remainder of the batch.
    pub async fn mint_all(&self, jobs: Vec<BatchJob>) -> Vec<BatchOutcome> {
        let total = jobs.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, job) in jobs.into_iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.pause).await;
            }

            info!(name = %job.name, position = index + 1, total, "batch minting");
            let request = MintRequest::new(job.name.clone(), job.image.clone());
            let result = self.orchestrator.mint(request).await;

            match &result {
                Ok(receipt) => info!(id = %receipt.id, name = %job.name, "batch mint succeeded"),
                Err(e) => error!(name = %job.name, error = %e, "batch mint failed"),
            }

            outcomes.push(BatchOutcome { job, result });
        }

        outcomes
    }
}
