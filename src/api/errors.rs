use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::DeckError;
use crate::engine::ServiceError;

/// Одно неверное поле запроса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvalidParam {
    pub name: String,
    pub reason: String,
}

impl InvalidParam {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiError {
    /// Неправильные входные данные, по каждому полю отдельно.
    BadRequest { invalid_params: Vec<InvalidParam> },

    /// Колода не найдена.
    NotFound { detail: String },

    /// Хранилище недоступно, запрос можно повторить целиком.
    ServiceUnavailable { detail: String },

    /// Внутренняя ошибка сервера. Подробности только в логах.
    Internal,
}

impl ApiError {
    pub fn bad_request(invalid_params: Vec<InvalidParam>) -> Self {
        ApiError::BadRequest { invalid_params }
    }

    pub fn invalid_params(&self) -> &[InvalidParam] {
        match self {
            ApiError::BadRequest { invalid_params } => invalid_params,
            _ => &[],
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Deck(DeckError::InsufficientCards { .. }) => {
                ApiError::bad_request(vec![InvalidParam::new(
                    "deck",
                    "deck does not have enough cards",
                )])
            }
            ServiceError::Deck(DeckError::InvalidCount(_)) => {
                ApiError::bad_request(vec![InvalidParam::new(
                    "count",
                    "count should be greater or equal to 1",
                )])
            }
            ServiceError::NotFound(id) => ApiError::NotFound {
                detail: format!("deck with ID {id} not found"),
            },
            ServiceError::Unavailable(detail) => ApiError::ServiceUnavailable { detail },
            other @ (ServiceError::Shuffle(_) | ServiceError::Internal(_)) => {
                error!(error = %other, "internal error");
                ApiError::Internal
            }
        }
    }
}
