//! Test fixtures and factory functions for creating test data.

use chrono::Utc;
use vocab_core::{Author, Card, CardDraft, CefrLevel, Deck, GeneratedDeck, GenerationParams};

/// Deck with `num_cards` cards with IDs `c0`, `c1`, ...
pub fn deck(num_cards: usize) -> Deck {
    Deck {
        id: "sample-1".to_string(),
        title: "Common Fruits".to_string(),
        description: "A simple collection of common fruits.".to_string(),
        folder: Some("English Basics".to_string()),
        cards: (0..num_cards).map(card).collect(),
        created_at: Utc::now(),
        icon: None,
        user_id: "system".to_string(),
        author_name: "System".to_string(),
        is_public: true,
    }
}

pub fn card(i: usize) -> Card {
    Card {
        id: format!("c{}", i),
        word: format!("word {}", i),
        definition: format!("definition {}", i),
        pronunciation: Some(format!("/w{}/", i)),
        example: format!("Example sentence {}.", i),
    }
}

pub fn author() -> Author {
    Author {
        user_id: "u1".to_string(),
        full_name: "Tran Thi B".to_string(),
    }
}

pub fn params(topic: &str, count: u32) -> GenerationParams {
    GenerationParams {
        topic: topic.to_string(),
        levels: vec![CefrLevel::B1, CefrLevel::B2],
        count,
    }
}

/// Generated deck with `num_cards` complete cards.
pub fn generated_deck(num_cards: usize) -> GeneratedDeck {
    GeneratedDeck {
        title: "At the Airport".to_string(),
        description: "Words you need when flying.".to_string(),
        cards: (0..num_cards)
            .map(|i| CardDraft {
                word: format!("term {}", i),
                definition: format!("nghĩa {}", i),
                pronunciation: Some(format!("/t{}/", i)),
                example: format!("Use term {} in a sentence.", i),
            })
            .collect(),
    }
}
