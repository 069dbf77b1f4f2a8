use serde::{Deserialize, Serialize};

use crate::domain::{DeckId, Suit, Value};

/// DTO карты: значение, масть и вычисленный код.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub value: Value,
    pub suit: Suit,
    pub code: String,
}

/// Ответ на создание колоды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedDeckDto {
    pub deck_id: DeckId,
    pub shuffled: bool,
    pub remaining: usize,
}

/// Ответ на открытие колоды: поля создания + оставшиеся карты по порядку.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenedDeckDto {
    #[serde(flatten)]
    pub deck: CreatedDeckDto,
    pub cards: Vec<CardDto>,
}

/// Ответ на снятие карт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawnCardsDto {
    pub cards: Vec<CardDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    DeckCreated(CreatedDeckDto),
    CardsDrawn(DrawnCardsDto),
}
