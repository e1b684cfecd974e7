//! Tiles dealt onto the matching board.

use serde::{Deserialize, Serialize};

use crate::types::Card;

/// Which face of a card a tile shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Word,
    Definition,
}

impl TileKind {
    fn suffix(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Definition => "def",
        }
    }
}

/// One face of a card on the board.
///
/// Both tiles of a card share its ID as `pair_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub tile_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    pub kind: TileKind,
    pub pair_id: String,
}

impl Tile {
    /// Split a card into its word tile and definition tile.
    pub fn pair_from(card: &Card) -> [Tile; 2] {
        [
            Tile {
                tile_id: tile_id(&card.id, TileKind::Word),
                content: card.word.clone(),
                pronunciation: card.pronunciation.clone(),
                kind: TileKind::Word,
                pair_id: card.id.clone(),
            },
            Tile {
                tile_id: tile_id(&card.id, TileKind::Definition),
                content: card.definition.clone(),
                pronunciation: None,
                kind: TileKind::Definition,
                pair_id: card.id.clone(),
            },
        ]
    }

    pub fn pairs_with(&self, other: &Tile) -> bool {
        self.pair_id == other.pair_id && self.tile_id != other.tile_id
    }
}

/// Tile ID for one face of a card, e.g. `42-word` or `42-def`.
pub fn tile_id(card_id: &str, kind: TileKind) -> String {
    format!("{}-{}", card_id, kind.suffix())
}

/// How the host should render a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileStatus {
    /// Pair already matched, tile leaves the board.
    Hidden,
    /// Part of a failed comparison still on display.
    Mismatched,
    Selected,
    Neutral,
}

/// Render-ready view of one tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileView {
    pub tile_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    pub kind: TileKind,
    pub status: TileStatus,
}
