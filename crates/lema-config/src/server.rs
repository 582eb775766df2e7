//! HTTP server configuration.
//!
//! # Environment Variables
//!
//! - `PORT`: listen port (default: 5001)
//! - `REQUEST_TIMEOUT_SECS`: deadline for each store call (default: 5)
//! - `BODY_LIMIT_BYTES`: maximum request body size (default: 1 MiB)

use std::time::Duration;

use crate::{ConfigError, parse_var};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5001,
            request_timeout: Duration::from_secs(5),
            body_limit_bytes: 1 << 20,
        }
    }
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            port: parse_var(&lookup, "PORT", defaults.port)?,
            request_timeout: Duration::from_secs(parse_var(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )?),
            body_limit_bytes: parse_var(&lookup, "BODY_LIMIT_BYTES", defaults.body_limit_bytes)?,
        })
    }
}
