//! Property tests for the matching round.
//!
//! Boards are dealt from decks of arbitrary size and seed, then driven by
//! random sequences of clicks, ticks and mismatch clears.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use proptest::prelude::*;
use vocab_core::{Card, Deck, MatchConfig, MatchRng, Round, Selection, TileKind, TileStatus};

fn deck_of(n: usize) -> Deck {
    Deck {
        id: "prop-deck".to_string(),
        title: "Generated".to_string(),
        description: String::new(),
        folder: None,
        cards: (0..n)
            .map(|i| Card {
                id: format!("card-{}", i),
                word: format!("word {}", i),
                // Duplicate content across cards must not confuse pairing.
                definition: format!("definition {}", i % 3),
                pronunciation: None,
                example: String::new(),
            })
            .collect(),
        created_at: Utc::now(),
        icon: None,
        user_id: "u1".to_string(),
        author_name: "User".to_string(),
        is_public: true,
    }
}

#[derive(Debug, Clone)]
enum Step {
    Click(usize),
    Tick,
    ClearMismatch,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => any::<usize>().prop_map(Step::Click),
        2 => Just(Step::Tick),
        2 => Just(Step::ClearMismatch),
    ]
}

proptest! {
    /// Property: board holds 2 x min(deck, 6) tiles, one word and one definition per card
    #[test]
    fn prop_board_pairs_every_card(size in 1usize..25, seed in any::<u64>()) {
        let deck = deck_of(size);
        let round = Round::start(deck.clone(), &mut MatchRng::new(seed), MatchConfig::default()).unwrap();

        prop_assert_eq!(round.tiles().len(), 2 * size.min(6));

        let mut kinds: HashMap<&str, Vec<TileKind>> = HashMap::new();
        for tile in round.tiles() {
            kinds.entry(tile.pair_id.as_str()).or_default().push(tile.kind);
        }
        prop_assert_eq!(kinds.len(), round.num_pairs());
        for (pair_id, mut pair_kinds) in kinds {
            pair_kinds.sort_by_key(|k| *k == TileKind::Definition);
            prop_assert_eq!(pair_kinds, vec![TileKind::Word, TileKind::Definition]);
            prop_assert!(deck.card(pair_id).is_some());
        }
    }

    /// Property: no click sequence breaks the selection or win invariants
    #[test]
    fn prop_random_play_keeps_invariants(
        size in 1usize..10,
        seed in any::<u64>(),
        steps in prop::collection::vec(step(), 0..120),
    ) {
        let mut round = Round::start(deck_of(size), &mut MatchRng::new(seed), MatchConfig::default()).unwrap();

        for step in steps {
            let before = round.clone();
            match step {
                Step::Click(i) => {
                    let tile_id = round.tiles()[i % round.tiles().len()].tile_id.clone();
                    let result = round.select_tile(&tile_id);
                    if result.is_ignored() {
                        prop_assert_eq!(&round, &before);
                    }
                    if let Selection::Won { .. } = result {
                        prop_assert!(!before.is_won());
                        prop_assert_eq!(before.matched().len() + 1, round.num_pairs());
                    }
                }
                Step::Tick => {
                    round.advance(Duration::from_millis(100));
                    if before.is_won() {
                        prop_assert_eq!(round.elapsed(), before.elapsed());
                    }
                }
                Step::ClearMismatch => {
                    round.clear_mismatch();
                }
            }

            prop_assert!(round.selected().len() <= 2);
            prop_assert_eq!(round.is_won(), round.matched().len() == round.num_pairs());
            for tile in round.tiles() {
                let hidden = round.tile_status(&tile.tile_id) == Some(TileStatus::Hidden);
                prop_assert_eq!(hidden, round.matched().contains(&tile.pair_id));
            }
        }
    }
}
