use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::card::Card;

/// Идентификатор колоды (UUID, назначается при создании и не меняется).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DeckId(pub Uuid);

impl DeckId {
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DeckId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(DeckId)
    }
}

/// Ошибки доменной операции над колодой.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("Количество карт должно быть не меньше 1, получено {0}")]
    InvalidCount(usize),

    #[error("В колоде недостаточно карт: запрошено {requested}, осталось {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
}

/// Колода: идентичность, признак перемешивания и оставшиеся карты.
///
/// `cards` после создания только уменьшается (снятие сверху).
/// `shuffled` фиксирует, перемешивалась ли колода при создании,
/// а не то, насколько она "перемешана" сейчас.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    #[serde(rename = "deck_id")]
    pub id: DeckId,
    pub shuffled: bool,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(id: DeckId, shuffled: bool, cards: Vec<Card>) -> Self {
        Self {
            id,
            shuffled,
            cards,
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Снять `count` карт сверху колоды.
    ///
    /// При ошибке колода не меняется (частичного снятия нет).
    /// Синхронизация - забота вызывающего (см. `engine::coordinator`).
    pub fn draw_cards(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count == 0 {
            return Err(DeckError::InvalidCount(count));
        }
        if count > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..count).collect())
    }
}
