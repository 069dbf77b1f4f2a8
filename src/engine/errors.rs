use thiserror::Error;

use crate::domain::{DeckError, DeckId};
use crate::engine::shuffle::ShuffleError;
use crate::infra::persistence::StoreError;

/// Ошибки сервиса колод.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Доменная ошибка: неверное количество или не хватает карт.
    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error("Колода {0} не найдена")]
    NotFound(DeckId),

    /// Перемешивание не удалось, колода не сохранена.
    #[error(transparent)]
    Shuffle(#[from] ShuffleError),

    /// Хранилище не ответило вовремя.
    #[error("Хранилище недоступно: {0}")]
    Unavailable(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ServiceError::NotFound(id),
            StoreError::Timeout(_) => ServiceError::Unavailable(err.to_string()),
            StoreError::Conflict(_) | StoreError::Backend(_) => {
                ServiceError::Internal(err.to_string())
            }
        }
    }
}
