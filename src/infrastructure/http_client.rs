//! # HTTP Client Utilities
//!
//! Shared HTTP client wrapper for the remote collaborators this engine
//! talks to: per-chain gas price sources (JSON GET) and the IPFS HTTP API
//! (multipart POST).

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Error type for HTTP operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request timed out.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection-level failure.
    #[error("connection error: {0}")]
    Connection(String),

    /// Non-success status code.
    #[error("http status {status}: {body}")]
    Status {
        /// The returned status code.
        status: StatusCode,
        /// Response body, if readable.
        body: String,
    },

    /// Response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Client construction failure.
    #[error("client error: {0}")]
    Client(String),
}

/// Result type for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Thin wrapper over [`reqwest::Client`] with a fixed request timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Client`] if the underlying client cannot be
    /// built.
    pub fn new(timeout_ms: u64) -> HttpResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| HttpError::Client(e.to_string()))?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] or [`HttpError::Timeout`] if the
    /// request fails, [`HttpError::Status`] on a non-2xx response, and
    /// [`HttpError::Decode`] if the body cannot be parsed.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> HttpResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        decode_response(response).await
    }

    /// Posts a single multipart file part and deserializes the JSON
    /// response. This is the shape the IPFS HTTP API `add` endpoint
    /// expects.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] or [`HttpError::Timeout`] if the
    /// request fails, [`HttpError::Status`] on a non-2xx response, and
    /// [`HttpError::Decode`] if the body cannot be parsed.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        url: &str,
        part_name: &str,
        bytes: Vec<u8>,
    ) -> HttpResult<T> {
        let part = reqwest::multipart::Part::bytes(bytes);
        let form = reqwest::multipart::Form::new().part(part_name.to_string(), part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        decode_response(response).await
    }
}

/// Checks the status and deserializes the JSON body.
async fn decode_response<T: DeserializeOwned>(response: Response) -> HttpResult<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| HttpError::Decode(e.to_string()))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(HttpError::Status { status, body })
    }
}

/// Maps a reqwest error to an [`HttpError`].
fn map_reqwest_error(error: reqwest::Error) -> HttpError {
    if error.is_timeout() {
        HttpError::Timeout(error.to_string())
    } else {
        HttpError::Connection(error.to_string())
    }
}
