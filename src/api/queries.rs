use serde::{Deserialize, Serialize};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Открыть колоду: все оставшиеся карты по порядку.
    OpenDeck(OpenDeckQuery),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OpenDeckQuery {
    pub deck_id: String,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Deck(super::dto::OpenedDeckDto),
}
