//! Configuration loading and representation.

use std::path::PathBuf;

use stockroom_observability::{LogFormat, ParseLogFormatError};

/// Where the inventory logger keeps its file.
pub const LOG_PATH_VAR: &str = "STOCKROOM_LOG_PATH";
/// `json` or `pretty`.
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

pub const DEFAULT_LOG_PATH: &str = "inventory_log.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    InvalidLogFormat {
        var: &'static str,
        #[source]
        source: ParseLogFormatError,
    },
}

/// Process configuration, resolved from the environment and then overridden
/// by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockroomConfig {
    pub log_path: PathBuf,
    pub log_format: LogFormat,
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            log_format: LogFormat::default(),
        }
    }
}

impl StockroomConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(LOG_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.log_path = PathBuf::from(path);
        }

        if let Some(format) = lookup(LOG_FORMAT_VAR) {
            config.log_format = format
                .parse()
                .map_err(|source| ConfigError::InvalidLogFormat {
                    var: LOG_FORMAT_VAR,
                    source,
                })?;
        }

        Ok(config)
    }

    /// True when the log path was not configured explicitly.
    pub fn uses_default_log_path(&self) -> bool {
        self.log_path == PathBuf::from(DEFAULT_LOG_PATH)
    }
}
