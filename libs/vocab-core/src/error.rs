//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using MatchError.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors raised while setting up a matching round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("deck {deck_id} has no cards to match")]
    EmptyDeck { deck_id: String },

    #[error("max_pairs must be at least 1")]
    NoPairsAllowed,

    #[error("deck {deck_id} has more than one card with id {card_id}")]
    DuplicateCardId { deck_id: String, card_id: String },

    #[error("{setting} must be greater than zero")]
    ZeroInterval { setting: &'static str },
}

/// Errors raised while assembling a deck from drafts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck title is empty")]
    EmptyTitle,

    #[error("deck has no card with both a word and a definition")]
    NoValidCards,

    #[error("deck {deck_id} belongs to another user")]
    NotOwner { deck_id: String },
}

/// Errors surfaced by the deck generation contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid generation parameters: {0}")]
    InvalidParams(String),

    #[error("no content returned by the generator")]
    EmptyResponse,

    #[error("generation failed: {0}")]
    Failed(String),

    #[error("generated deck rejected: {0}")]
    Deck(#[from] DeckError),
}
