//! Application configuration loaded from environment variables.

use std::time::Duration;

use environment::{Environment, ProcessEnv};

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: &str = "8080";

/// Tracing filter used when `RUST_LOG` is unset or empty.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Period between heartbeat log lines.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(2);

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `PORT` — listen port (default: `"8080"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
///
/// The port is kept as text. A value that is not a valid port fails at bind time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: String,
    pub log_filter: String,
    pub heartbeat_interval: Duration,
}

impl Config {
    /// Loads configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_source(&ProcessEnv)
    }

    /// Loads configuration from an arbitrary environment source.
    pub fn from_source<E: Environment + ?Sized>(env: &E) -> Self {
        Self {
            port: env.var_or("PORT", DEFAULT_PORT),
            log_filter: env.var_or("RUST_LOG", DEFAULT_LOG_FILTER),
            heartbeat_interval: HEARTBEAT_INTERVAL,
        }
    }

    /// Returns the `"0.0.0.0:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            heartbeat_interval: HEARTBEAT_INTERVAL,
        }
    }
}
