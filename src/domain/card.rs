use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть карты. Порядок вариантов = порядок мастей в каталоге.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    #[serde(rename = "CLUBS")]
    Clubs,
    #[serde(rename = "DIAMONDS")]
    Diamonds,
    #[serde(rename = "HEARTS")]
    Hearts,
    #[serde(rename = "SPADES")]
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Название масти так, как оно уходит наружу (`"HEARTS"`).
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "CLUBS",
            Suit::Diamonds => "DIAMONDS",
            Suit::Hearts => "HEARTS",
            Suit::Spades => "SPADES",
        }
    }

    /// Первая буква названия масти.
    pub const fn code(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// Достоинство карты (туз идёт первым, как в каталоге).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Value {
    #[serde(rename = "ACE")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "JACK")]
    Jack,
    #[serde(rename = "QUEEN")]
    Queen,
    #[serde(rename = "KING")]
    King,
}

impl Value {
    pub const ALL: [Value; 13] = [
        Value::Ace,
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Value::Ace => "ACE",
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "JACK",
            Value::Queen => "QUEEN",
            Value::King => "KING",
        }
    }

    /// Часть кода карты: числовые достоинства целиком, остальные по первой букве.
    pub const fn code(self) -> &'static str {
        match self {
            Value::Ace => "A",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            numeric => numeric.name(),
        }
    }
}

/// Игральная карта французской колоды.
///
/// Код (`"10S"`, `"AH"`) не хранится, а вычисляется из пары `(value, suit)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub value: Value,
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    pub fn code(&self) -> String {
        format!("{}{}", self.value.code(), self.suit.code())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Card {
    /// Формат вида `AH`, `10S`, `QC`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.code(), self.suit.code())
    }
}

/// Ошибка разбора кода карты.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardCodeError {
    #[error("Код карты должен состоять из 2 или 3 символов: {0:?}")]
    BadLength(String),

    #[error("Неизвестное достоинство: {0:?}")]
    UnknownValue(String),

    #[error("Неизвестная масть: {0}")]
    UnknownSuit(char),
}

/// Строгий разбор кода вида "AH", "10S", "QC" (только верхний регистр).
impl FromStr for Card {
    type Err = CardCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(2..=3).contains(&s.len()) || !s.is_ascii() {
            return Err(CardCodeError::BadLength(s.to_string()));
        }
        let (value_part, suit_part) = s.split_at(s.len() - 1);

        let value = Value::ALL
            .into_iter()
            .find(|v| v.code() == value_part)
            .ok_or_else(|| CardCodeError::UnknownValue(value_part.to_string()))?;

        let suit_ch = suit_part.chars().next().unwrap_or_default();
        let suit = Suit::ALL
            .into_iter()
            .find(|s| s.code() == suit_ch)
            .ok_or(CardCodeError::UnknownSuit(suit_ch))?;

        Ok(Card { value, suit })
    }
}
