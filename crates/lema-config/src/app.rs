//! Top-level application configuration.
//!
//! # Environment Variables
//!
//! - `ENV`: `development`, `test` or `production` (default: `development`)
//! - `LOG_LEVEL`: `trace`, `debug`, `info`, `warn`, `error` or `off` (default: `info`)
//!
//! plus everything read by [`DatabaseConfig`] and [`ServerConfig`].

use std::fmt;
use std::str::FromStr;

use crate::{ConfigError, DatabaseConfig, ServerConfig};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }

    #[must_use]
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Normalizes a log level name, rejecting anything `tracing` would not accept.
pub fn parse_log_level(level: &str) -> Result<String, ConfigError> {
    let level = level.trim().to_ascii_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(ConfigError::UnknownLogLevel(level))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    pub log_level: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: "info".to_string(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("ENV") {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => Environment::default(),
        };
        let log_level = match lookup("LOG_LEVEL") {
            Some(value) if !value.trim().is_empty() => parse_log_level(&value)?,
            _ => "info".to_string(),
        };

        Ok(Self {
            environment,
            log_level,
            server: ServerConfig::from_lookup(&lookup)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
        })
    }
}
