//! Environment-driven server configuration.
//!
//! # Responsibility
//! - Resolve bind address, database path and logging settings.
//! - Fall back to stable defaults for unset or blank variables.
//!
//! # Invariants
//! - `log_dir` is always absolute.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ENV_BIND_ADDR: &str = "TRIVIA_BIND_ADDR";
pub const ENV_DB_PATH: &str = "TRIVIA_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "TRIVIA_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TRIVIA_LOG_DIR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_DB_FILE_NAME: &str = "trivia.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "trivia-logs";

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBindAddr { value: String, message: String },
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBindAddr { value, message } => {
                write!(f, "{ENV_BIND_ADDR}=`{value}` is not a socket address: {message}")
            }
            Self::RelativeLogDir(value) => {
                write!(f, "{ENV_LOG_DIR}=`{value}` must be an absolute path")
            }
        }
    }
}

impl Error for ConfigError {}

impl ServerConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let raw_addr = read(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                message: err.to_string(),
            })?;

        let db_path = read(ENV_DB_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));

        let log_level = read(ENV_LOG_LEVEL)
            .unwrap_or_else(|| trivia_core::default_log_level().to_string());

        let log_dir = match read(ENV_LOG_DIR) {
            Some(value) => {
                let path = PathBuf::from(&value);
                if !path.is_absolute() {
                    return Err(ConfigError::RelativeLogDir(value));
                }
                path
            }
            None => std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        };

        Ok(Self {
            bind_addr,
            db_path,
            log_level,
            log_dir,
        })
    }
}
