// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub wasm: WasmConfig,
}

/// Runtime configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Tokio worker threads, CPU cores when unset
    pub workers: Option<usize>,
    /// Seconds a single connection may stay open
    pub connection_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            workers: None,
            connection_timeout: 300,
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (`common` or `combined`)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "common".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            access_log: false,
            access_log_format: default_access_log_format(),
        }
    }
}

/// `.wasm` fast path configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct WasmConfig {
    #[serde(default)]
    pub missing: MissingWasmPolicy,
}

/// What to do when a `.wasm` file on the fast path cannot be opened
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingWasmPolicy {
    /// Fail the request; the connection is dropped without a response
    #[default]
    Abort,
    /// Answer with the regular 404 page
    NotFound,
}
