// src/engine/coordinator.rs

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::Mutex as AsyncMutex;

use crate::domain::DeckId;

/// Координатор снятия карт.
///
/// Хранилище не умеет атомарный read-modify-write, поэтому цепочка
/// find → draw → replace выполняется внутри `coordinate`, и два тела
/// для одной колоды никогда не выполняются одновременно.
///
/// `body` - ленивый future: он начинает выполняться только после захвата
/// блокировки. Если ожидающий вызов отменён (future дропнут), тело так и
/// не запустится.
pub trait DrawCoordinator: Send + Sync {
    fn coordinate<F>(&self, deck_id: DeckId, body: F) -> impl Future<Output = F::Output> + Send
    where
        F: Future + Send,
        F::Output: Send;
}

/// Одна блокировка на весь сервис: все снятия идут строго по очереди,
/// даже для разных колод.
#[derive(Debug, Default)]
pub struct GlobalDrawLock {
    lock: AsyncMutex<()>,
}

impl GlobalDrawLock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawCoordinator for GlobalDrawLock {
    async fn coordinate<F>(&self, _deck_id: DeckId, body: F) -> F::Output
    where
        F: Future + Send,
        F::Output: Send,
    {
        let _guard = self.lock.lock().await;
        body.await
    }
}

/// Таблица блокировок по id колоды: снятия с разных колод идут параллельно,
/// с одной колоды - по очереди.
///
/// Блокировка для колоды создаётся при первом обращении и дальше живёт
/// вместе с таблицей (колоды не удаляются).
#[derive(Debug, Default)]
pub struct PerDeckDrawLock {
    table: Mutex<HashMap<DeckId, Arc<AsyncMutex<()>>>>,
}

impl PerDeckDrawLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Сколько колод уже получили свою блокировку.
    pub fn tracked_decks(&self) -> usize {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn slot(&self, deck_id: DeckId) -> Arc<AsyncMutex<()>> {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(table.entry(deck_id).or_default())
    }
}

impl DrawCoordinator for PerDeckDrawLock {
    async fn coordinate<F>(&self, deck_id: DeckId, body: F) -> F::Output
    where
        F: Future + Send,
        F::Output: Send,
    {
        let slot = self.slot(deck_id);
        let _guard = slot.lock().await;
        body.await
    }
}
