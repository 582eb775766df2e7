use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("unknown environment '{0}' (expected development, test or production)")]
    UnknownEnvironment(String),
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}
