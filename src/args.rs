use clap::Parser;
use lema_config::{AppConfig, ConfigError, Environment, parse_log_level};

/// Command-line flags. Each one overrides its environment variable.
#[derive(Debug, Default, Parser)]
#[command(name = "lema", version, about = "REST API for users, addresses and posts")]
pub struct Cli {
    /// Runtime environment: development, test or production (overrides ENV)
    #[arg(long)]
    pub env: Option<Environment>,

    /// Log level: trace, debug, info, warn, error or off (overrides LOG_LEVEL)
    #[arg(long = "log-level", alias = "loglevel")]
    pub log_level: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Cli {
    /// The environment requested on the command line, else by `ENV`.
    pub fn environment(&self) -> Result<Environment, ConfigError> {
        if let Some(env) = self.env {
            return Ok(env);
        }
        match std::env::var("ENV") {
            Ok(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(Environment::default()),
        }
    }

    pub fn apply(&self, config: &mut AppConfig) -> Result<(), ConfigError> {
        if let Some(env) = self.env {
            config.environment = env;
        }
        if let Some(level) = &self.log_level {
            config.log_level = parse_log_level(level)?;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        Ok(())
    }
}
