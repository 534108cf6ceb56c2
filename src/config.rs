//! Configuration module
//!
//! Layered configuration: optional `bolserver.toml`, `BOL_*` environment
//! variables, and coded defaults matching the reference deployment.

use serde::Deserialize;
use std::net::SocketAddr;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticConfig,
    pub mock: MockConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Static file serving configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StaticConfig {
    /// Root directory the scanner assets are served from
    pub root: String,
    /// Files tried, in order, when a directory is requested
    pub index_files: Vec<String>,
}

/// Mock JDE endpoint configuration
///
/// The canned response fields are configuration, not inline literals, so the
/// mock's contract is explicit and the latency can be tuned down in tests.
#[derive(Debug, Deserialize, Clone)]
pub struct MockConfig {
    pub message: String,
    pub order_number: String,
    /// Simulated downstream latency applied to every submission
    pub latency_ms: u64,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl Config {
    /// Load configuration from the default file name (`bolserver.toml`)
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("bolserver")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("BOL"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("static_files.root", ".")?
            .set_default(
                "static_files.index_files",
                vec!["index.html".to_string(), "index.htm".to_string()],
            )?
            .set_default("mock.message", "Sales order created successfully")?
            .set_default("mock.order_number", "SO-2025-001234")?
            .set_default("mock.latency_ms", 1000)?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared application state, read-only after startup
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}
