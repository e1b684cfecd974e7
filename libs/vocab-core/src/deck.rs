//! Deck assembly from user- or generator-supplied drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DeckError;
use crate::types::{Author, CardDraft, Deck, DEFAULT_FOLDER};

/// Deck content before IDs and authorship are assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub cards: Vec<CardDraft>,
}

/// Identity of a deck being edited, preserved across the rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingDeck {
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Current owner. Only this user may edit the deck.
    pub user_id: String,
}

impl From<&Deck> for ExistingDeck {
    fn from(deck: &Deck) -> Self {
        Self {
            id: deck.id.clone(),
            created_at: deck.created_at,
            user_id: deck.user_id.clone(),
        }
    }
}

/// Drop drafts that are missing a word or a definition.
pub fn retain_valid_drafts(cards: Vec<CardDraft>) -> Vec<CardDraft> {
    cards.into_iter().filter(CardDraft::is_valid).collect()
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl DeckDraft {
    /// Build a brand new deck owned by `author`.
    pub fn into_deck(self, author: &Author) -> Result<Deck, DeckError> {
        self.build(author, None)
    }

    /// Rebuild an existing deck, keeping its ID and creation time.
    ///
    /// Cards always receive fresh IDs. Fails with [`DeckError::NotOwner`]
    /// unless `author` owns the deck.
    pub fn into_edited_deck(self, author: &Author, existing: ExistingDeck) -> Result<Deck, DeckError> {
        if existing.user_id != author.user_id {
            return Err(DeckError::NotOwner { deck_id: existing.id });
        }
        self.build(author, Some(existing))
    }

    fn build(self, author: &Author, existing: Option<ExistingDeck>) -> Result<Deck, DeckError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DeckError::EmptyTitle);
        }

        let cards: Vec<_> = retain_valid_drafts(self.cards)
            .into_iter()
            .map(|draft| draft.into_card(new_id()))
            .collect();
        if cards.is_empty() {
            return Err(DeckError::NoValidCards);
        }

        let folder = self.folder.trim();
        let folder = if folder.is_empty() { DEFAULT_FOLDER } else { folder };

        let (id, created_at) = match existing {
            Some(e) => (e.id, e.created_at),
            None => (new_id(), Utc::now()),
        };

        Ok(Deck {
            id,
            title: title.to_string(),
            description: self.description,
            folder: Some(folder.to_string()),
            cards,
            created_at,
            icon: self.icon,
            user_id: author.user_id.clone(),
            author_name: author.full_name.clone(),
            is_public: self.is_public,
        })
    }
}
