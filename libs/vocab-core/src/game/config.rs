//! Match game tuning.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing and board-size settings for a match round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Upper bound on pairs dealt per round.
    pub max_pairs: usize,
    /// How long a mismatched pair stays visible.
    pub mismatch_delay_ms: u64,
    /// Elapsed-time tick period.
    pub tick_interval_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_pairs: 6,
            mismatch_delay_ms: 800,
            tick_interval_ms: 100,
        }
    }
}

impl MatchConfig {
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Number of pairs dealt for a deck of `deck_size` cards.
    pub fn pairs_for(&self, deck_size: usize) -> usize {
        deck_size.min(self.max_pairs)
    }
}
