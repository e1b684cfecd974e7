//! Seam for AI deck generation.
//!
//! Implementations call out to a generative model; this crate only
//! validates the request and turns the answer into a [`Deck`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use vocab_core::{Author, Deck, GeneratedDeck, GenerationError, GenerationParams};

/// Produces deck content for a topic.
#[async_trait]
pub trait DeckGenerator: Send + Sync {
    async fn generate(&self, params: &GenerationParams) -> Result<GeneratedDeck, GenerationError>;
}

/// Where a generated deck should land.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub folder: String,
    pub is_public: bool,
}

/// Validate `params`, ask `generator` for content and build the deck.
pub async fn generate_deck(
    generator: &dyn DeckGenerator,
    params: &GenerationParams,
    author: &Author,
    placement: &Placement,
) -> Result<Deck, GenerationError> {
    params.validate()?;

    let generated = generator.generate(params).await.map_err(|e| {
        warn!(topic = %params.topic, levels = %params.level_label(), error = %e, "deck generation failed");
        e
    })?;
    if generated.cards.is_empty() {
        warn!(topic = %params.topic, "generator returned no cards");
        return Err(GenerationError::EmptyResponse);
    }

    let deck = generated
        .into_draft(&placement.folder, placement.is_public)
        .into_deck(author)?;

    info!(
        deck_id = %deck.id,
        topic = %params.topic,
        requested = params.count,
        cards = deck.cards.len(),
        "generated deck assembled"
    );
    Ok(deck)
}
