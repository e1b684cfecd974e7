//! Host-side runtime for the vocabulary match game.
//!
//! Drives [`vocab_core::Round`] with real timers, loads configuration and
//! sets up logging.

pub mod config;
pub mod error;
pub mod generation;
pub mod session;
pub mod telemetry;

pub use config::RuntimeConfig;
pub use error::{Result, SessionError};
pub use generation::{generate_deck, DeckGenerator, Placement};
pub use session::MatchSession;

/// Load configuration and install logging.
pub fn bootstrap() -> anyhow::Result<RuntimeConfig> {
    let config = RuntimeConfig::from_env()?;
    telemetry::init_tracing(&config.log_filter)?;

    tracing::info!(
        max_pairs = config.match_config.max_pairs,
        mismatch_delay_ms = config.match_config.mismatch_delay_ms,
        tick_interval_ms = config.match_config.tick_interval_ms,
        "match runtime configured"
    );
    Ok(config)
}
