//! Timed tile-matching game.

pub mod config;
pub mod engine;
pub mod rng;
pub mod tile;

pub use config::MatchConfig;
pub use engine::{format_elapsed, Ignored, Round, RoundPhase, RoundSnapshot, Selection};
pub use rng::MatchRng;
pub use tile::{tile_id, Tile, TileKind, TileStatus, TileView};
