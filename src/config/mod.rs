// Configuration module entry point
// Built-in defaults plus `COI_*` environment overrides; there is no config file.

mod types;

use std::net::{Ipv4Addr, SocketAddr};

pub use types::{Config, LoggingConfig, MissingWasmPolicy, ServerConfig, WasmConfig};

/// Fixed listening port
pub const PORT: u16 = 8000;

/// Environment variable prefix, e.g. `COI_WASM__MISSING=not_found`
const ENV_PREFIX: &str = "COI";

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from the given environment source on top of the defaults
    pub fn load_from(env: config::Environment) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .set_default("server.connection_timeout", 300)?
            .set_default("logging.access_log", false)?
            .set_default("logging.access_log_format", "common")?
            .set_default("wasm.missing", "abort")?
            .build()?;

        settings.try_deserialize()
    }

    /// All interfaces, fixed port
    #[allow(clippy::unused_self)]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(std::net::IpAddr::V4(Ipv4Addr::UNSPECIFIED), PORT)
    }
}
