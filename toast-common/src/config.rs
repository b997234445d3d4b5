//! Toast configuration

use std::time::Duration;
use thiserror::Error;

/// Auto-close delay used when nothing else is configured
pub const DEFAULT_AUTO_CLOSE_MS: u64 = 3000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid auto-close delay: {0:?} (expected milliseconds)")]
    InvalidDelay(String),
    #[error("Auto-close delay must be greater than zero")]
    ZeroDelay,
}

/// Settings shared by every toast of a queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastConfig {
    /// How long a toast stays visible before it closes itself
    pub auto_close: Duration,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            auto_close: Duration::from_millis(DEFAULT_AUTO_CLOSE_MS),
        }
    }
}

impl ToastConfig {
    pub fn new(auto_close: Duration) -> Self {
        Self { auto_close }
    }

    /// Parse an auto-close delay given in milliseconds, e.g. from a URL query.
    pub fn from_millis_str(raw: &str) -> Result<Self, ConfigError> {
        let ms: u64 = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidDelay(raw.to_string()))?;
        if ms == 0 {
            return Err(ConfigError::ZeroDelay);
        }
        Ok(Self::new(Duration::from_millis(ms)))
    }
}
