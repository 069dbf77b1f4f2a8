// src/engine/service.rs

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::{build_cards, Card, Deck, DeckError, DeckId};
use crate::engine::coordinator::DrawCoordinator;
use crate::engine::errors::ServiceError;
use crate::engine::shuffle::{shuffle, ShuffleError};
use crate::engine::RandomSource;
use crate::infra::ids::{IdSource, RandomIds};
use crate::infra::persistence::{DeckStore, StoreError};
use crate::infra::rng::SystemRng;

/// Таймаут одного обращения к хранилищу по умолчанию.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Сервис колод: создание, открытие и снятие карт поверх `DeckStore`.
///
/// Создание и чтение идут без блокировок. Снятие выполняется целиком
/// внутри `DrawCoordinator`, поэтому параллельные снятия с одной колоды
/// не затирают друг друга.
pub struct DeckService<S, C> {
    store: S,
    coordinator: C,
    rng: Mutex<Box<dyn RandomSource>>,
    ids: Box<dyn IdSource>,
    store_timeout: Duration,
}

impl<S: DeckStore, C: DrawCoordinator> DeckService<S, C> {
    pub fn new(store: S, coordinator: C) -> Self {
        Self {
            store,
            coordinator,
            rng: Mutex::new(Box::new(SystemRng)),
            ids: Box::new(RandomIds),
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Mutex::new(Box::new(rng));
        self
    }

    pub fn with_ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn coordinator(&self) -> &C {
        &self.coordinator
    }

    /// Создать колоду.
    ///
    /// Пустой `codes` - полная колода, неизвестные коды молча пропускаются.
    /// Если перемешивание не удалось, в хранилище ничего не пишется.
    pub async fn create<T>(&self, codes: &[T], shuffled: bool) -> Result<Deck, ServiceError>
    where
        T: AsRef<str> + Sync,
    {
        let mut cards = build_cards(codes);
        if shuffled {
            self.shuffle_cards(&mut cards)?;
        }

        let deck = Deck::new(self.ids.next_deck_id(), shuffled, cards);
        self.timed(self.store.insert(&deck)).await?;

        info!(
            deck_id = %deck.id,
            shuffled = deck.shuffled,
            remaining = deck.remaining(),
            "deck created"
        );
        Ok(deck)
    }

    /// Прочитать колоду целиком.
    pub async fn open(&self, deck_id: DeckId) -> Result<Deck, ServiceError> {
        let deck = self.timed(self.store.find_by_id(deck_id)).await?;
        debug!(deck_id = %deck_id, remaining = deck.remaining(), "deck opened");
        Ok(deck)
    }

    /// Снять `count` карт сверху колоды.
    ///
    /// find → draw → replace выполняется под координатором. Если любой шаг
    /// упал, новое состояние не сохраняется и карты не возвращаются.
    pub async fn draw(&self, deck_id: DeckId, count: usize) -> Result<Vec<Card>, ServiceError> {
        if count == 0 {
            return Err(DeckError::InvalidCount(count).into());
        }

        let outcome = self
            .coordinator
            .coordinate(deck_id, async {
                let mut deck = self.timed(self.store.find_by_id(deck_id)).await?;
                let drawn = deck.draw_cards(count)?;
                self.timed(self.store.replace_by_id(deck_id, &deck)).await?;
                Ok::<_, ServiceError>((drawn, deck.remaining()))
            })
            .await;

        match outcome {
            Ok((drawn, remaining)) => {
                debug!(deck_id = %deck_id, drawn = drawn.len(), remaining, "cards drawn");
                Ok(drawn)
            }
            Err(err) => {
                warn!(deck_id = %deck_id, count, error = %err, "draw rejected");
                Err(err)
            }
        }
    }

    fn shuffle_cards(&self, cards: &mut [Card]) -> Result<(), ShuffleError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        shuffle(cards, &mut **rng)
    }

    /// Ограничить обращение к хранилищу таймаутом.
    async fn timed<T>(
        &self,
        op: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.store_timeout, op).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.store_timeout)),
        }
    }
}
