//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup. Every variable has a default,
//! so the service runs with no environment at all.
//!
//! ## Variables
//!
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `PUBLIC_HOST` - host used in shortlinks when the request has no
//!   `Host` header (default: `localhost:3000`)
//! - `DEFAULT_VALIDITY_MINUTES` - TTL applied when a request omits
//!   `validity` (default: 30)
//! - `SWEEP_INTERVAL_SECONDS` - reaper schedule (default: 3600, min: 1)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)

use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub public_host: String,
    pub default_validity_minutes: i64,
    pub sweep_interval_seconds: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let public_host =
            env::var("PUBLIC_HOST").unwrap_or_else(|_| "localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let default_validity_minutes = env::var("DEFAULT_VALIDITY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|minutes| *minutes > 0)
            .unwrap_or(30);

        let sweep_interval_seconds = env::var("SWEEP_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600)
            .max(1);

        Self {
            listen_addr,
            public_host,
            default_validity_minutes,
            sweep_interval_seconds,
            log_level,
            log_format,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            public_host: "localhost:3000".to_string(),
            default_validity_minutes: 30,
            sweep_interval_seconds: 3600,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}
