//! Common test utilities for the match runtime integration tests.
//!
//! - Deck and card fixtures
//! - Stub deck generators
//! - Tile ID helpers

#![allow(dead_code)]

pub mod fixtures;

use async_trait::async_trait;
use vocab_core::{GeneratedDeck, GenerationError, GenerationParams, TileKind};

/// Word tile ID for a fixture card.
pub fn word(card_id: &str) -> String {
    vocab_core::game::tile_id(card_id, TileKind::Word)
}

/// Definition tile ID for a fixture card.
pub fn def(card_id: &str) -> String {
    vocab_core::game::tile_id(card_id, TileKind::Definition)
}

/// Generator that always answers with the same deck.
pub struct FixedGenerator(pub GeneratedDeck);

#[async_trait]
impl vocab_match_runtime::DeckGenerator for FixedGenerator {
    async fn generate(&self, _params: &GenerationParams) -> Result<GeneratedDeck, GenerationError> {
        Ok(self.0.clone())
    }
}

/// Generator that always fails.
pub struct FailingGenerator;

#[async_trait]
impl vocab_match_runtime::DeckGenerator for FailingGenerator {
    async fn generate(&self, _params: &GenerationParams) -> Result<GeneratedDeck, GenerationError> {
        Err(GenerationError::Failed("quota exceeded".to_string()))
    }
}
