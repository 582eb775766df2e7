//! # Lema Config
//!
//! Configuration types for the Lema API, loaded from environment variables.
//!
//! - [`app`]: top-level [`AppConfig`], [`Environment`] and log level
//! - [`database`]: connection string and pool bounds
//! - [`server`]: listen port, request deadline and body size limit
//!
//! # Example
//!
//! ```ignore
//! use lema_config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("listening on :{}", config.server.port);
//! ```

pub mod app;
pub mod database;
pub mod error;
pub mod server;

pub use app::{AppConfig, Environment, parse_log_level};
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::ServerConfig;

use std::str::FromStr;

/// Reads `key` through `lookup` and parses it, falling back to `default`
/// when the variable is unset or empty.
pub(crate) fn parse_var<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key, value })
        }
        _ => Ok(default),
    }
}
