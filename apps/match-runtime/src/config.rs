//! Runtime configuration loaded from the environment.

use std::str::FromStr;

use vocab_core::MatchConfig;

use crate::error::{Result, SessionError};

pub const ENV_MAX_PAIRS: &str = "MATCH_MAX_PAIRS";
pub const ENV_MISMATCH_DELAY_MS: &str = "MATCH_MISMATCH_DELAY_MS";
pub const ENV_TICK_MS: &str = "MATCH_TICK_MS";
pub const ENV_LOG: &str = "RUST_LOG";

/// Settings for hosting match sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub match_config: MatchConfig,
    pub log_filter: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            match_config: MatchConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load from process environment, reading `.env` first when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Missing keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(max_pairs) = parse_positive(&lookup, ENV_MAX_PAIRS)? {
            config.match_config.max_pairs = max_pairs;
        }
        if let Some(delay) = parse_positive(&lookup, ENV_MISMATCH_DELAY_MS)? {
            config.match_config.mismatch_delay_ms = delay;
        }
        if let Some(tick) = parse_positive(&lookup, ENV_TICK_MS)? {
            config.match_config.tick_interval_ms = tick;
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

fn parse_positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr + Default + PartialEq,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|_| SessionError::Config(format!("{} is not a valid number: {}", key, raw)))?;
    if value == T::default() {
        return Err(SessionError::Config(format!("{} must be positive", key)));
    }
    Ok(Some(value))
}
