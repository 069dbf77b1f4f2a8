use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::domain::DeckId;

/// Откуда берутся id новых колод.
pub trait IdSource: Send + Sync {
    fn next_deck_id(&self) -> DeckId;
}

/// Случайные UUID v4. Коллизии не ожидаются.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_deck_id(&self) -> DeckId {
        DeckId(Uuid::new_v4())
    }
}

/// Монотонный счётчик, упакованный в UUID.
/// Удобно для локальных тестов: id предсказуемы.
#[derive(Debug)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl SequentialIds {
    /// Начать с 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            counter: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    #[inline]
    fn next_deck_id(&self) -> DeckId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        DeckId(Uuid::from_u128(u128::from(n)))
    }
}
