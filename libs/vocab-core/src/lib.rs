//! Core vocabulary flashcard library.
//!
//! Provides:
//! - Card and deck types shared with the host application
//! - Deck assembly from manual or generated drafts
//! - The generation contract for AI-built decks
//! - The tile-matching game engine with an injectable RNG

pub mod deck;
pub mod error;
pub mod game;
pub mod generation;
pub mod types;

pub use deck::{retain_valid_drafts, DeckDraft, ExistingDeck};
pub use error::{DeckError, GenerationError, MatchError, Result};
pub use game::{
    format_elapsed, MatchConfig, MatchRng, Round, RoundPhase, RoundSnapshot, Selection, Tile,
    TileKind, TileStatus,
};
pub use generation::{CefrLevel, GeneratedDeck, GenerationParams};
pub use types::{Author, Card, CardDraft, Deck, DEFAULT_FOLDER, SYSTEM_USER_ID};
