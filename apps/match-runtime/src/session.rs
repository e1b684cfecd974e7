//! Timed match session.
//!
//! Owns one [`Round`] together with the two timers that drive it: a
//! periodic task adding to the elapsed time and a one-shot task that clears
//! a displayed mismatch. Both are tokio tasks owned by the session, so
//! replacing the round or dropping the session stops them.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};
use vocab_core::{format_elapsed, Deck, MatchConfig, MatchRng, Round, RoundSnapshot, Selection};

use crate::error::{Result, SessionError};

/// Round plus a counter bumped on every restart.
///
/// Timer tasks remember the epoch they were spawned for and stand down
/// once it changes.
struct Shared {
    round: Round,
    epoch: u64,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A matching game in progress, with its timers.
pub struct MatchSession {
    shared: Arc<Mutex<Shared>>,
    rng: MatchRng,
    runtime: Handle,
    ticker: Option<JoinHandle<()>>,
    mismatch_clear: Option<JoinHandle<()>>,
}

impl MatchSession {
    /// Deal a round from `deck` and start its elapsed-time timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(deck: impl Into<Arc<Deck>>, mut rng: MatchRng, config: MatchConfig) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| SessionError::NoRuntime)?;
        let round = Round::start(deck, &mut rng, config)?;

        info!(
            deck_id = %round.deck().id,
            num_pairs = round.num_pairs(),
            "match round started"
        );

        let mut session = Self {
            shared: Arc::new(Mutex::new(Shared { round, epoch: 0 })),
            rng,
            runtime,
            ticker: None,
            mismatch_clear: None,
        };
        session.spawn_ticker(0);
        Ok(session)
    }

    /// Forward a tile click to the round and schedule whatever it requires.
    pub fn select_tile(&mut self, tile_id: &str) -> Selection {
        let (selection, epoch) = {
            let mut shared = lock(&self.shared);
            (shared.round.select_tile(tile_id), shared.epoch)
        };

        match &selection {
            Selection::Ignored(reason) => {
                debug!(tile_id, ?reason, "selection ignored");
            }
            Selection::Pending => {
                debug!(tile_id, "tile selected");
            }
            Selection::Matched { pair_id } => {
                info!(pair_id = %pair_id, "pair matched");
            }
            Selection::Mismatched { tile_ids } => {
                debug!(first = %tile_ids[0], second = %tile_ids[1], "pair mismatched");
                self.schedule_mismatch_clear(epoch);
            }
            Selection::Won { pair_id, elapsed } => {
                self.stop_ticker();
                info!(pair_id = %pair_id, elapsed = %format_elapsed(*elapsed), "round won");
            }
        }

        selection
    }

    /// Throw the current round away and deal a new one from the same deck.
    pub fn restart(&mut self) {
        self.cancel_timers();

        let epoch = {
            let mut shared = lock(&self.shared);
            shared.round.restart(&mut self.rng);
            shared.epoch += 1;
            info!(
                deck_id = %shared.round.deck().id,
                num_pairs = shared.round.num_pairs(),
                "match round restarted"
            );
            shared.epoch
        };

        self.spawn_ticker(epoch);
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        lock(&self.shared).round.snapshot()
    }

    /// Snapshot serialized as JSON for a webview host.
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Run `f` against the current round.
    pub fn with_round<R>(&self, f: impl FnOnce(&Round) -> R) -> R {
        f(&lock(&self.shared).round)
    }

    /// Whether the elapsed-time timer is still running.
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop all timers. The round stays readable.
    pub fn shutdown(&mut self) {
        if self.ticker.is_some() || self.mismatch_clear.is_some() {
            info!("match session shut down");
        }
        self.cancel_timers();
    }

    fn spawn_ticker(&mut self, epoch: u64) {
        let shared = Arc::clone(&self.shared);
        let period = lock(&self.shared).round.config().tick_interval();

        self.ticker = Some(self.runtime.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                let mut shared = lock(&shared);
                if shared.epoch != epoch || !shared.round.advance(period) {
                    break;
                }
            }
        }));
    }

    fn schedule_mismatch_clear(&mut self, epoch: u64) {
        let shared = Arc::clone(&self.shared);
        let delay = lock(&self.shared).round.config().mismatch_delay();

        if let Some(previous) = self.mismatch_clear.take() {
            previous.abort();
        }
        self.mismatch_clear = Some(self.runtime.spawn(async move {
            time::sleep(delay).await;
            let mut shared = lock(&shared);
            if shared.epoch == epoch && shared.round.clear_mismatch() {
                debug!("mismatch cleared");
            }
        }));
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }

    fn cancel_timers(&mut self) {
        self.stop_ticker();
        if let Some(pending) = self.mismatch_clear.take() {
            pending.abort();
        }
    }
}

impl Drop for MatchSession {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}
