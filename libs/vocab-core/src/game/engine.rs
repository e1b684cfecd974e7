//! Tile-matching round state machine.
//!
//! A [`Round`] is dealt from a deck, then driven by three inputs from the
//! host: tile clicks ([`Round::select_tile`]), elapsed-time ticks
//! ([`Round::advance`]) and the deferred mismatch clear
//! ([`Round::clear_mismatch`]). Scheduling those ticks and delays is the
//! host's job; the round itself never touches a clock.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use super::config::MatchConfig;
use super::rng::MatchRng;
use super::tile::{Tile, TileStatus, TileView};
use crate::error::{MatchError, Result};
use crate::types::Deck;

/// Lifecycle phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    Playing,
    Won,
}

/// Why a selection was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    Finished,
    UnknownTile,
    AlreadyMatched,
    AlreadySelected,
    /// Two tiles are already awaiting evaluation.
    PairPending,
}

/// Outcome of a tile selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Nothing changed.
    Ignored(Ignored),
    /// First tile of a comparison picked.
    Pending,
    Matched { pair_id: String },
    /// The host should call [`Round::clear_mismatch`] after the mismatch delay.
    Mismatched { tile_ids: [String; 2] },
    /// Final pair matched; the elapsed time is frozen.
    Won { pair_id: String, elapsed: Duration },
}

impl Selection {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// State of one matching round.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    deck: Arc<Deck>,
    config: MatchConfig,
    tiles: Vec<Tile>,
    num_pairs: usize,
    selected: Vec<Tile>,
    matched: BTreeSet<String>,
    mismatched: Vec<Tile>,
    elapsed: Duration,
    won: bool,
}

impl Round {
    /// Deal a new round from `deck`.
    ///
    /// Up to `config.max_pairs` cards are sampled without replacement, then
    /// their tiles are shuffled with an independent stream.
    pub fn start(deck: impl Into<Arc<Deck>>, rng: &mut MatchRng, config: MatchConfig) -> Result<Self> {
        let deck = deck.into();
        if config.max_pairs == 0 {
            return Err(MatchError::NoPairsAllowed);
        }
        if config.tick_interval_ms == 0 {
            return Err(MatchError::ZeroInterval {
                setting: "tick_interval_ms",
            });
        }
        if config.mismatch_delay_ms == 0 {
            return Err(MatchError::ZeroInterval {
                setting: "mismatch_delay_ms",
            });
        }
        if deck.cards.is_empty() {
            return Err(MatchError::EmptyDeck {
                deck_id: deck.id.clone(),
            });
        }

        // Tiles are paired by card ID, so IDs must be unique within the deck.
        let mut seen = HashSet::with_capacity(deck.cards.len());
        if let Some(card) = deck.cards.iter().find(|c| !seen.insert(c.id.as_str())) {
            return Err(MatchError::DuplicateCardId {
                deck_id: deck.id.clone(),
                card_id: card.id.clone(),
            });
        }

        Ok(Self::deal(deck, rng, config))
    }

    fn deal(deck: Arc<Deck>, rng: &mut MatchRng, config: MatchConfig) -> Self {
        let mut sample_rng = rng.fork();
        let mut shuffle_rng = rng.fork();

        let num_pairs = config.pairs_for(deck.cards.len());
        let mut tiles: Vec<Tile> = sample_rng
            .sample_indices(deck.cards.len(), num_pairs)
            .into_iter()
            .flat_map(|i| Tile::pair_from(&deck.cards[i]))
            .collect();
        shuffle_rng.shuffle(&mut tiles);

        Self {
            deck,
            config,
            tiles,
            num_pairs,
            selected: Vec::with_capacity(2),
            matched: BTreeSet::new(),
            mismatched: Vec::new(),
            elapsed: Duration::ZERO,
            won: false,
        }
    }

    /// Replace this round with a freshly dealt one from the same deck.
    pub fn restart(&mut self, rng: &mut MatchRng) {
        *self = Self::deal(Arc::clone(&self.deck), rng, self.config.clone());
    }

    /// Handle a click on `tile_id`.
    ///
    /// Invalid clicks are ignored and leave the round untouched.
    pub fn select_tile(&mut self, tile_id: &str) -> Selection {
        if self.won {
            return Selection::Ignored(Ignored::Finished);
        }
        let Some(tile) = self.tiles.iter().find(|t| t.tile_id == tile_id) else {
            return Selection::Ignored(Ignored::UnknownTile);
        };
        if self.matched.contains(&tile.pair_id) {
            return Selection::Ignored(Ignored::AlreadyMatched);
        }
        if self.selected.iter().any(|t| t.tile_id == tile_id) {
            return Selection::Ignored(Ignored::AlreadySelected);
        }
        if self.selected.len() >= 2 {
            return Selection::Ignored(Ignored::PairPending);
        }

        self.selected.push(tile.clone());
        if self.selected.len() < 2 {
            return Selection::Pending;
        }
        self.evaluate()
    }

    fn evaluate(&mut self) -> Selection {
        let (first, second) = (&self.selected[0], &self.selected[1]);

        if first.pair_id != second.pair_id {
            let tile_ids = [first.tile_id.clone(), second.tile_id.clone()];
            self.mismatched = self.selected.clone();
            return Selection::Mismatched { tile_ids };
        }

        let pair_id = first.pair_id.clone();
        self.matched.insert(pair_id.clone());
        self.selected.clear();

        // Checked in the same step so elapsed freezes at the final match.
        if self.matched.len() == self.num_pairs {
            self.won = true;
            return Selection::Won {
                pair_id,
                elapsed: self.elapsed,
            };
        }
        Selection::Matched { pair_id }
    }

    /// Drop a displayed mismatch. Returns `false` if none was showing.
    pub fn clear_mismatch(&mut self) -> bool {
        if self.mismatched.is_empty() {
            return false;
        }
        self.mismatched.clear();
        self.selected.clear();
        true
    }

    /// Add `delta` to the elapsed time. Returns `false` once the round is won.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.won {
            return false;
        }
        self.elapsed += delta;
        true
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn selected(&self) -> &[Tile] {
        &self.selected
    }

    pub fn matched(&self) -> &BTreeSet<String> {
        &self.matched
    }

    pub fn mismatched(&self) -> &[Tile] {
        &self.mismatched
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn num_pairs(&self) -> usize {
        self.num_pairs
    }

    pub fn phase(&self) -> RoundPhase {
        if self.won {
            RoundPhase::Won
        } else {
            RoundPhase::Playing
        }
    }

    /// Render status of a tile, or `None` for an unknown ID.
    pub fn tile_status(&self, tile_id: &str) -> Option<TileStatus> {
        self.tiles
            .iter()
            .find(|t| t.tile_id == tile_id)
            .map(|t| self.status_of(t))
    }

    fn status_of(&self, tile: &Tile) -> TileStatus {
        let is = |tiles: &[Tile]| tiles.iter().any(|t| t.tile_id == tile.tile_id);

        if self.matched.contains(&tile.pair_id) {
            TileStatus::Hidden
        } else if is(&self.mismatched) {
            TileStatus::Mismatched
        } else if is(&self.selected) {
            TileStatus::Selected
        } else {
            TileStatus::Neutral
        }
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            deck_id: self.deck.id.clone(),
            tiles: self
                .tiles
                .iter()
                .map(|t| TileView {
                    tile_id: t.tile_id.clone(),
                    content: t.content.clone(),
                    pronunciation: t.pronunciation.clone(),
                    kind: t.kind,
                    status: self.status_of(t),
                })
                .collect(),
            elapsed_ms: self.elapsed.as_millis() as u64,
            phase: self.phase(),
            matched_pairs: self.matched.len(),
            num_pairs: self.num_pairs(),
        }
    }
}

/// Everything a host needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub deck_id: String,
    pub tiles: Vec<TileView>,
    pub elapsed_ms: u64,
    pub phase: RoundPhase,
    pub matched_pairs: usize,
    pub num_pairs: usize,
}

impl RoundSnapshot {
    pub fn is_won(&self) -> bool {
        self.phase == RoundPhase::Won
    }

    pub fn elapsed_label(&self) -> String {
        format_elapsed(Duration::from_millis(self.elapsed_ms))
    }
}

/// Seconds with one decimal, e.g. `"12.3"`.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.1}", elapsed.as_secs_f64())
}
