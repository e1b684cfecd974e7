//! Core types for the vocabulary flashcard application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Folder used when a deck has none.
pub const DEFAULT_FOLDER: &str = "General";

/// Owner ID of the built-in sample decks.
pub const SYSTEM_USER_ID: &str = "system";

/// A single vocabulary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub word: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub example: String,
}

/// Card content before an ID has been assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDraft {
    pub word: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub example: String,
}

impl CardDraft {
    /// A draft is usable once both its word and definition are filled in.
    pub fn is_valid(&self) -> bool {
        !self.word.trim().is_empty() && !self.definition.trim().is_empty()
    }

    /// Attach an ID, turning the draft into a card.
    pub fn into_card(self, id: String) -> Card {
        let pronunciation = self
            .pronunciation
            .filter(|p| !p.trim().is_empty());

        Card {
            id,
            word: self.word,
            definition: self.definition,
            pronunciation,
            example: self.example,
        }
    }
}

/// Named collection of cards with ownership and visibility metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    pub cards: Vec<Card>,
    /// Milliseconds since the Unix epoch on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub user_id: String,
    pub author_name: String,
    #[serde(default)]
    pub is_public: bool,
}

impl Deck {
    /// Folder name, falling back to [`DEFAULT_FOLDER`] when unset or blank.
    pub fn folder_or_default(&self) -> &str {
        match self.folder.as_deref().map(str::trim) {
            Some(folder) if !folder.is_empty() => folder,
            _ => DEFAULT_FOLDER,
        }
    }

    /// Owners always see their decks; everyone else only sees public ones.
    pub fn is_visible_to(&self, user_id: &str) -> bool {
        self.is_public || self.user_id == user_id
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    pub fn is_system(&self) -> bool {
        self.user_id == SYSTEM_USER_ID
    }

    /// Whether the deck belongs in `viewer`'s community listing: system
    /// decks, plus public decks owned by someone else.
    pub fn in_community_feed(&self, viewer: &str) -> bool {
        self.is_system() || (self.is_public && !self.is_owned_by(viewer))
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }
}

/// Author attribution stamped onto decks a user creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub user_id: String,
    pub full_name: String,
}
