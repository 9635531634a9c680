//! Desktop configuration, read from `STOCKROOM_*` environment variables.

use std::env;

use stockroom_observability::{LogFormat, LogSettings, UnknownLogFormat};
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "Warehouse management";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    /// Window title.
    pub title: String,
    /// Label appended to prices and totals, e.g. "RUB". Empty for none.
    pub currency: String,
    pub logging: LogSettings,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid STOCKROOM_LOG_FORMAT: {0}")]
    LogFormat(#[from] UnknownLogFormat),

    #[error("{0} must not be blank")]
    Blank(&'static str),
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            currency: String::new(),
            logging: LogSettings::default(),
        }
    }
}

impl DesktopConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(title) = lookup("STOCKROOM_TITLE") {
            let title = title.trim();
            if title.is_empty() {
                return Err(ConfigError::Blank("STOCKROOM_TITLE"));
            }
            config.title = title.to_string();
        }
        if let Some(currency) = lookup("STOCKROOM_CURRENCY") {
            config.currency = currency.trim().to_string();
        }
        if let Some(filter) = lookup("STOCKROOM_LOG") {
            config.logging.filter = filter;
        }
        if let Some(format) = lookup("STOCKROOM_LOG_FORMAT") {
            config.logging.format = format.parse::<LogFormat>()?;
        }

        Ok(config)
    }
}
