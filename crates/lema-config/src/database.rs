//! Database connection configuration.
//!
//! # Environment Variables
//!
//! - `DSN`: SQLite connection string (default: `sqlite::memory:`)
//! - `MAX_OPEN_CONNS`: maximum pool size (default: 10)
//! - `MAX_IDLE_CONNS`: connections kept open while idle (default: 2)
//! - `CONN_MAX_LIFETIME`: seconds before a connection is recycled (default: 3600)

use std::time::Duration;

use crate::{ConfigError, parse_var};

pub const DEFAULT_DSN: &str = "sqlite::memory:";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_open_conns: u32,
    pub max_idle_conns: u32,
    pub conn_max_lifetime: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DSN.to_string(),
            max_open_conns: 10,
            max_idle_conns: 2,
            conn_max_lifetime: Duration::from_secs(3600),
        }
    }
}

impl DatabaseConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let max_open_conns = parse_var(&lookup, "MAX_OPEN_CONNS", defaults.max_open_conns)?;
        let max_idle_conns = parse_var(&lookup, "MAX_IDLE_CONNS", defaults.max_idle_conns)?;
        let lifetime_secs = parse_var(
            &lookup,
            "CONN_MAX_LIFETIME",
            defaults.conn_max_lifetime.as_secs(),
        )?;

        if max_open_conns == 0 {
            return Err(ConfigError::InvalidValue {
                key: "MAX_OPEN_CONNS",
                value: max_open_conns.to_string(),
            });
        }

        Ok(Self {
            url: lookup("DSN")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.url),
            max_open_conns,
            // The pool cannot keep more idle connections than it may open.
            max_idle_conns: max_idle_conns.min(max_open_conns),
            conn_max_lifetime: Duration::from_secs(lifetime_secs),
        })
    }

    /// Whether the database lives only as long as its connections do.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}
