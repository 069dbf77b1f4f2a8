// src/bin/deck_dev_cli.rs
//
// Локальный прогон сервиса колод поверх in-memory хранилища:
// создание, открытие, снятие и стресс параллельного снятия с одной колоды.
// Настройки берутся из DECKS_* (см. infra::config).

use std::collections::HashSet;
use std::sync::Arc;

use deck_service::api::{
    ApiError, CreateDeckCommand, DeckApi, DrawCardsCommand, InvalidParam, OpenDeckQuery,
};
use deck_service::engine::{DeckService, DrawCoordinator, GlobalDrawLock, PerDeckDrawLock};
use deck_service::infra::{init_tracing, DrawLocking, InMemoryDeckStore, ServiceConfig};
use tracing::info;

/// Сколько параллельных draw-1 гоним в стресс-раунде (больше, чем карт в колоде).
const STRESS_DRAWS: usize = 64;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::from_env();
    init_tracing(config.log_level);
    info!(?config, "deck_dev_cli: стартуем");

    let store = InMemoryDeckStore::with_latency(config.store_latency);
    match config.draw_locking {
        DrawLocking::Global => run(&config, store, GlobalDrawLock::new()).await,
        DrawLocking::PerDeck => run(&config, store, PerDeckDrawLock::new()).await,
    }
}

async fn run<C>(
    config: &ServiceConfig,
    store: InMemoryDeckStore,
    coordinator: C,
) -> Result<(), Box<dyn std::error::Error>>
where
    C: DrawCoordinator + 'static,
{
    let service = DeckService::new(store, coordinator).with_store_timeout(config.store_timeout);
    let api = DeckApi::new(Arc::new(service));

    // 1. Частичная колода из кодов, без перемешивания.
    let partial = api
        .create_deck(CreateDeckCommand {
            cards: Some("AS,KD,AC,2C,KH".to_string()),
            shuffled: None,
        })
        .await
        .map_err(describe)?;
    println!("created: {}", serde_json::to_string(&partial)?);

    let opened = api
        .open_deck(OpenDeckQuery {
            deck_id: partial.deck_id.to_string(),
        })
        .await
        .map_err(describe)?;
    println!("opened: {}", serde_json::to_string_pretty(&opened)?);

    let drawn = api
        .draw_cards(DrawCardsCommand {
            deck_id: partial.deck_id.to_string(),
            count: Some("2".to_string()),
        })
        .await
        .map_err(describe)?;
    println!("drawn: {}", serde_json::to_string(&drawn)?);

    // 2. Неверный запрос: ошибки по каждому полю.
    if let Err(err) = api
        .create_deck(CreateDeckCommand {
            cards: Some("AS,ZZ".to_string()),
            shuffled: Some("maybe".to_string()),
        })
        .await
    {
        println!("rejected: {}", serde_json::to_string(&err)?);
    }

    // 3. Стресс: много параллельных draw-1 с одной полной перемешанной колоды.
    let full = api
        .create_deck(CreateDeckCommand {
            cards: None,
            shuffled: Some("true".to_string()),
        })
        .await
        .map_err(describe)?;

    let mut handles = Vec::with_capacity(STRESS_DRAWS);
    for _ in 0..STRESS_DRAWS {
        let api = api.clone();
        let deck_id = full.deck_id.to_string();
        handles.push(tokio::spawn(async move {
            api.draw_cards(DrawCardsCommand {
                deck_id,
                count: Some("1".to_string()),
            })
            .await
        }));
    }

    let mut seen = HashSet::new();
    let mut rejected = 0usize;
    for handle in handles {
        match handle.await? {
            Ok(dto) => {
                for card in dto.cards {
                    if !seen.insert(card.code.clone()) {
                        return Err(format!("card {} drawn twice", card.code).into());
                    }
                }
            }
            Err(_) => rejected += 1,
        }
    }

    println!(
        "[STRESS] draws={} succeeded={} rejected={} unique_cards={}",
        STRESS_DRAWS,
        STRESS_DRAWS - rejected,
        rejected,
        seen.len()
    );
    Ok(())
}

fn describe(err: ApiError) -> Box<dyn std::error::Error> {
    let params: Vec<String> = err
        .invalid_params()
        .iter()
        .map(|InvalidParam { name, reason }| format!("{name}: {reason}"))
        .collect();
    format!("{err:?} {}", params.join("; ")).into()
}
