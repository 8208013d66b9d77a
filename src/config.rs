//! # Configuration
//!
//! Explicit application configuration, passed into the orchestrator and
//! publisher at construction. No component performs ambient environment
//! lookups at call time.
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Default values
//! 2. `intent-mint.toml` in the working directory, if present
//! 3. Environment variables prefixed with `INTENT_MINT_`
//!    (e.g. `INTENT_MINT_DEFAULT_OWNER`, `INTENT_MINT_SERVER__PORT`)

use crate::domain::chain::ChainProfile;
use serde::Deserialize;
use std::net::SocketAddr;
use thiserror::Error;

/// Owner address used when no default owner is configured.
pub const FALLBACK_OWNER: &str = "atest1d9khqw36xcx3p3v27s330g7g8n36g53v27s330g7g8n36g5";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or parse a configuration source.
    #[error("failed to load config: {0}")]
    Load(#[from] config::ConfigError),

    /// A configuration value is invalid.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if host and port do not form
    /// a valid address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "server.host:port".to_string(),
                message: e.to_string(),
            })
    }
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Default owner address recorded on minted records.
    #[serde(default = "default_owner")]
    pub default_owner: String,

    /// Path of the ledger backing file.
    #[serde(default = "default_ledger_path")]
    pub ledger_path: String,

    /// Base URL of the IPFS HTTP API.
    #[serde(default = "default_ipfs_api_url")]
    pub ipfs_api_url: String,

    /// Timeout for outbound HTTP calls, in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Supported chain profiles, in comparison order.
    #[serde(default = "ChainProfile::builtin")]
    pub chains: Vec<ChainProfile>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            default_owner: default_owner(),
            ledger_path: default_ledger_path(),
            ipfs_api_url: default_ipfs_api_url(),
            http_timeout_ms: default_http_timeout_ms(),
            chains: ChainProfile::builtin(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from defaults, an optional `intent-mint.toml`
    /// file and `INTENT_MINT_`-prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if a source cannot be read or a
    /// value cannot be deserialized.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("intent-mint").required(false))
            .add_source(
                config::Environment::with_prefix("INTENT_MINT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_owner() -> String {
    FALLBACK_OWNER.to_string()
}

fn default_ledger_path() -> String {
    "./db/nfts.json".to_string()
}

fn default_ipfs_api_url() -> String {
    "https://ipfs.infura.io:5001".to_string()
}

fn default_http_timeout_ms() -> u64 {
    10_000
}
