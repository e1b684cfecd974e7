//! Deck generation seam tests.

mod common;

use pretty_assertions::assert_eq;
use tokio_test::{assert_err, assert_ok, block_on};
use vocab_core::{GenerationError, MatchConfig, MatchRng};
use vocab_match_runtime::{generate_deck, MatchSession, Placement};

use common::{fixtures, FailingGenerator, FixedGenerator};

fn placement() -> Placement {
    Placement {
        folder: "Travel".to_string(),
        is_public: true,
    }
}

/// Test a generated deck is stamped with IDs, author and placement.
#[test]
fn test_generated_deck_assembled() {
    let generator = FixedGenerator(fixtures::generated_deck(8));
    let deck = assert_ok!(block_on(generate_deck(
        &generator,
        &fixtures::params("Airport", 8),
        &fixtures::author(),
        &placement(),
    )));

    assert_eq!(deck.title, "At the Airport");
    assert_eq!(deck.user_id, "u1");
    assert_eq!(deck.author_name, "Tran Thi B");
    assert_eq!(deck.folder.as_deref(), Some("Travel"));
    assert!(deck.is_public);
    assert_eq!(deck.cards.len(), 8);
    assert!(deck.cards.iter().all(|c| !c.id.is_empty()));
}

/// Test invalid parameters never reach the generator.
#[test]
fn test_invalid_params_rejected() {
    let generator = FixedGenerator(fixtures::generated_deck(8));
    let result = block_on(generate_deck(
        &generator,
        &fixtures::params("  ", 8),
        &fixtures::author(),
        &placement(),
    ));
    assert!(matches!(result, Err(GenerationError::InvalidParams(_))));
}

/// Test generator failures propagate.
#[test]
fn test_generator_failure_propagates() {
    let err = assert_err!(block_on(generate_deck(
        &FailingGenerator,
        &fixtures::params("Airport", 10),
        &fixtures::author(),
        &placement(),
    )));
    assert_eq!(err, GenerationError::Failed("quota exceeded".to_string()));
}

/// Test an empty answer is reported as such.
#[test]
fn test_empty_generation_rejected() {
    let generator = FixedGenerator(fixtures::generated_deck(0));
    let err = assert_err!(block_on(generate_deck(
        &generator,
        &fixtures::params("Airport", 10),
        &fixtures::author(),
        &placement(),
    )));
    assert_eq!(err, GenerationError::EmptyResponse);
}

/// Test a generated deck can be played right away.
#[tokio::test(start_paused = true)]
async fn test_generated_deck_playable() {
    let generator = FixedGenerator(fixtures::generated_deck(10));
    let deck = generate_deck(
        &generator,
        &fixtures::params("Airport", 10),
        &fixtures::author(),
        &placement(),
    )
    .await
    .unwrap();

    let session = MatchSession::start(deck, MatchRng::new(5), MatchConfig::default()).unwrap();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.num_pairs, 6);
    assert_eq!(snapshot.tiles.len(), 12);
}
