//! Contract for AI-generated decks.
//!
//! The generator itself lives outside this crate. It receives
//! [`GenerationParams`] and answers with a [`GeneratedDeck`].

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::deck::DeckDraft;
use crate::error::GenerationError;
use crate::types::CardDraft;

/// Allowed number of cards per generated deck.
pub const CARD_COUNT_RANGE: RangeInclusive<u32> = 5..=30;

/// CEFR proficiency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl Default for CefrLevel {
    fn default() -> Self {
        Self::B1
    }
}

impl CefrLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A1" => Some(Self::A1),
            "A2" => Some(Self::A2),
            "B1" => Some(Self::B1),
            "B2" => Some(Self::B2),
            "C1" => Some(Self::C1),
            "C2" => Some(Self::C2),
            _ => None,
        }
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request sent to a deck generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub topic: String,
    pub levels: Vec<CefrLevel>,
    pub count: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            topic: String::new(),
            levels: vec![CefrLevel::default()],
            count: 10,
        }
    }
}

impl GenerationParams {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.topic.trim().is_empty() {
            return Err(GenerationError::InvalidParams("topic is empty".to_string()));
        }
        if self.levels.is_empty() {
            return Err(GenerationError::InvalidParams(
                "at least one proficiency level is required".to_string(),
            ));
        }
        if !CARD_COUNT_RANGE.contains(&self.count) {
            return Err(GenerationError::InvalidParams(format!(
                "card count {} outside {}..={}",
                self.count,
                CARD_COUNT_RANGE.start(),
                CARD_COUNT_RANGE.end()
            )));
        }
        Ok(())
    }

    /// Levels as sent to the generator, e.g. `"B1, B2"`.
    pub fn level_label(&self) -> String {
        self.levels
            .iter()
            .map(CefrLevel::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Output of a deck generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDeck {
    pub title: String,
    pub description: String,
    pub cards: Vec<CardDraft>,
}

impl GeneratedDeck {
    /// Wrap the generated content into a draft with caller-chosen placement.
    pub fn into_draft(self, folder: &str, is_public: bool) -> DeckDraft {
        DeckDraft {
            title: self.title,
            description: self.description,
            folder: folder.to_string(),
            is_public,
            icon: None,
            cards: self.cards,
        }
    }
}
