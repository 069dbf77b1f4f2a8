// tests/infra_test.rs

use std::collections::HashMap;
use std::time::Duration;

use deck_service::{
    api::dto::{CardDto, CreatedDeckDto},
    domain::{build_cards, Deck, DeckId, Suit, Value},
    infra::{
        config::{DrawLocking, ServiceConfig},
        ids::{IdSource, RandomIds, SequentialIds},
        mapping::{card_to_dto, deck_to_created_dto, deck_to_opened_dto, drawn_to_dto},
        persistence::{DeckStore, InMemoryDeckStore, StoreError},
    },
};
use tracing::Level;
use uuid::Uuid;

//
// ---------- helpers ----------
//

fn make_deck(codes: &[&str]) -> Deck {
    Deck::new(RandomIds.next_deck_id(), false, build_cards(codes))
}

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

//
// ---------- persistence.rs tests ----------
//

#[tokio::test]
async fn store_insert_then_find_returns_same_deck() {
    let store = InMemoryDeckStore::new();
    let deck = make_deck(&["AS", "KD"]);

    store.insert(&deck).await.unwrap();

    assert_eq!(store.find_by_id(deck.id).await.unwrap(), deck);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn store_insert_with_existing_id_is_conflict() {
    let store = InMemoryDeckStore::new();
    let deck = make_deck(&["AS"]);
    store.insert(&deck).await.unwrap();

    let mut other = make_deck(&["KD"]);
    other.id = deck.id;

    assert!(matches!(
        store.insert(&other).await,
        Err(StoreError::Conflict(id)) if id == deck.id
    ));
    // первый документ не перезаписан
    assert_eq!(store.find_by_id(deck.id).await.unwrap(), deck);
}

#[tokio::test]
async fn store_find_missing_is_not_found() {
    let store = InMemoryDeckStore::new();
    let id = DeckId(Uuid::new_v4());

    assert!(matches!(
        store.find_by_id(id).await,
        Err(StoreError::NotFound(missing)) if missing == id
    ));
}

#[tokio::test]
async fn store_replace_overwrites_whole_document() {
    let store = InMemoryDeckStore::new();
    let mut deck = make_deck(&["AS", "2H", "3D"]);
    store.insert(&deck).await.unwrap();

    deck.draw_cards(2).unwrap();
    store.replace_by_id(deck.id, &deck).await.unwrap();

    let stored = store.find_by_id(deck.id).await.unwrap();
    assert_eq!(stored.remaining(), 1);
    assert_eq!(stored, deck);
}

#[tokio::test]
async fn store_replace_missing_is_not_found() {
    let store = InMemoryDeckStore::new();
    let deck = make_deck(&["AS"]);

    assert!(matches!(
        store.replace_by_id(deck.id, &deck).await,
        Err(StoreError::NotFound(_))
    ));
    assert!(store.is_empty());
}

#[tokio::test]
async fn store_reads_are_independent_snapshots() {
    let store = InMemoryDeckStore::new();
    let deck = make_deck(&["AS", "2H"]);
    store.insert(&deck).await.unwrap();

    let mut copy = store.find_by_id(deck.id).await.unwrap();
    copy.draw_cards(2).unwrap();

    // пока нет replace, хранилище не видит изменений копии
    assert_eq!(store.find_by_id(deck.id).await.unwrap().remaining(), 2);
}

#[tokio::test(start_paused = true)]
async fn store_latency_delays_each_operation() {
    let store = InMemoryDeckStore::with_latency(Duration::from_millis(50));
    let deck = make_deck(&["AS"]);

    let started = tokio::time::Instant::now();
    store.insert(&deck).await.unwrap();
    store.find_by_id(deck.id).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(100));
}

//
// ---------- ids.rs tests ----------
//

#[test]
fn sequential_ids_are_predictable() {
    let ids = SequentialIds::new();

    assert_eq!(ids.next_deck_id(), DeckId(Uuid::from_u128(1)));
    assert_eq!(ids.next_deck_id(), DeckId(Uuid::from_u128(2)));

    let from_ten = SequentialIds::starting_at(10);
    assert_eq!(from_ten.next_deck_id(), DeckId(Uuid::from_u128(10)));
}

#[test]
fn random_ids_do_not_repeat() {
    let a = RandomIds.next_deck_id();
    let b = RandomIds.next_deck_id();
    assert_ne!(a, b);
    assert_eq!(a.as_uuid().get_version_num(), 4);
}

//
// ---------- mapping.rs tests ----------
//

#[test]
fn card_dto_carries_code() {
    let card = build_cards(&["10S"])[0];
    assert_eq!(
        card_to_dto(&card),
        CardDto {
            value: Value::Ten,
            suit: Suit::Spades,
            code: "10S".to_string(),
        }
    );
}

#[test]
fn created_dto_reports_remaining_not_cards() {
    let deck = make_deck(&["AS", "KD", "QH"]);
    assert_eq!(
        deck_to_created_dto(&deck),
        CreatedDeckDto {
            deck_id: deck.id,
            shuffled: false,
            remaining: 3,
        }
    );
}

#[test]
fn opened_dto_flattens_deck_fields() {
    let id: DeckId = "a251071b-662f-44b6-ba11-e24863039c59".parse().unwrap();
    let deck = Deck::new(id, false, build_cards(&["AS", "KH"]));

    let json = serde_json::to_value(deck_to_opened_dto(&deck)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "deck_id": "a251071b-662f-44b6-ba11-e24863039c59",
            "shuffled": false,
            "remaining": 2,
            "cards": [
                { "value": "ACE", "suit": "SPADES", "code": "AS" },
                { "value": "KING", "suit": "HEARTS", "code": "KH" },
            ],
        })
    );
}

#[test]
fn drawn_dto_keeps_draw_order() {
    let cards = build_cards(&["QH", "4D"]);
    let dto = drawn_to_dto(&cards);
    let codes: Vec<&str> = dto.cards.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["QH", "4D"]);
}

//
// ---------- config.rs tests ----------
//

#[test]
fn config_defaults_when_nothing_set() {
    let cfg = ServiceConfig::from_lookup(|_| None);

    assert_eq!(cfg.store_timeout, Duration::from_millis(5_000));
    assert_eq!(cfg.draw_locking, DrawLocking::Global);
    assert_eq!(cfg.log_level, Level::INFO);
    assert_eq!(cfg.store_latency, Duration::ZERO);
}

#[test]
fn config_reads_all_keys() {
    let cfg = ServiceConfig::from_lookup(lookup_from(&[
        ("DECKS_STORE_TIMEOUT_MS", "250"),
        ("DECKS_DRAW_LOCKING", "per-deck"),
        ("DECKS_LOG_LEVEL", "debug"),
        ("DECKS_STORE_LATENCY_MS", "3"),
    ]));

    assert_eq!(cfg.store_timeout, Duration::from_millis(250));
    assert_eq!(cfg.draw_locking, DrawLocking::PerDeck);
    assert_eq!(cfg.log_level, Level::DEBUG);
    assert_eq!(cfg.store_latency, Duration::from_millis(3));
}

#[test]
fn config_falls_back_on_garbage() {
    let cfg = ServiceConfig::from_lookup(lookup_from(&[
        ("DECKS_STORE_TIMEOUT_MS", "soon"),
        ("DECKS_DRAW_LOCKING", "optimistic"),
        ("DECKS_LOG_LEVEL", "loud"),
    ]));

    assert_eq!(cfg.store_timeout, Duration::from_millis(5_000));
    assert_eq!(cfg.draw_locking, DrawLocking::Global);
    assert_eq!(cfg.log_level, Level::INFO);
}

#[test]
fn draw_locking_parses_spellings() {
    assert_eq!("GLOBAL".parse::<DrawLocking>(), Ok(DrawLocking::Global));
    assert_eq!("per_deck".parse::<DrawLocking>(), Ok(DrawLocking::PerDeck));
    assert!("none".parse::<DrawLocking>().is_err());
}
