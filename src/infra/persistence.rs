use std::collections::HashMap;
use std::future::Future;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use thiserror::Error;

use crate::domain::{Deck, DeckId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Колода {0} не найдена")]
    NotFound(DeckId),

    #[error("Колода {0} уже существует")]
    Conflict(DeckId),

    #[error("Хранилище не ответило за {0:?}")]
    Timeout(Duration),

    #[error("Ошибка хранилища: {0}")]
    Backend(String),
}

/// Абстракция документного хранилища колод.
///
/// Контракт из трёх операций, ничего больше: ни транзакций, ни версий,
/// ни compare-and-swap. Защиту read-modify-write даёт `DrawCoordinator`.
pub trait DeckStore: Send + Sync {
    /// Сохранить новую колоду. Совпадение id - `Conflict`.
    fn insert(&self, deck: &Deck) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Загрузить колоду. Нет такой - `NotFound`.
    fn find_by_id(&self, id: DeckId) -> impl Future<Output = Result<Deck, StoreError>> + Send;

    /// Перезаписать колоду целиком. Нет такой - `NotFound`.
    fn replace_by_id(
        &self,
        id: DeckId,
        deck: &Deck,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// In-memory реализация для тестов и локального запуска.
///
/// Колоды лежат JSON-документами, поэтому каждое чтение отдаёт независимый
/// снимок, как настоящее документное хранилище. `latency` добавляет задержку
/// перед каждой операцией, чтобы окно гонки read-modify-write было видно.
#[derive(Debug, Default)]
pub struct InMemoryDeckStore {
    documents: RwLock<HashMap<DeckId, String>>,
    latency: Duration,
}

impl InMemoryDeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn encode(deck: &Deck) -> Result<String, StoreError> {
    serde_json::to_string(deck).map_err(|e| StoreError::Backend(e.to_string()))
}

fn decode(raw: &str) -> Result<Deck, StoreError> {
    serde_json::from_str(raw).map_err(|e| StoreError::Backend(e.to_string()))
}

impl DeckStore for InMemoryDeckStore {
    async fn insert(&self, deck: &Deck) -> Result<(), StoreError> {
        self.round_trip().await;
        let document = encode(deck)?;

        let mut documents = self.documents.write().unwrap_or_else(PoisonError::into_inner);
        if documents.contains_key(&deck.id) {
            return Err(StoreError::Conflict(deck.id));
        }
        documents.insert(deck.id, document);
        Ok(())
    }

    async fn find_by_id(&self, id: DeckId) -> Result<Deck, StoreError> {
        self.round_trip().await;
        let documents = self.documents.read().unwrap_or_else(PoisonError::into_inner);
        let raw = documents.get(&id).ok_or(StoreError::NotFound(id))?;
        decode(raw)
    }

    async fn replace_by_id(&self, id: DeckId, deck: &Deck) -> Result<(), StoreError> {
        self.round_trip().await;
        let document = encode(deck)?;

        let mut documents = self.documents.write().unwrap_or_else(PoisonError::into_inner);
        match documents.get_mut(&id) {
            Some(slot) => {
                *slot = document;
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}
