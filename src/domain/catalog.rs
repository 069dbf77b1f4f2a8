//! Каталог: все 52 карты в каноническом порядке и поиск карты по коду.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::domain::card::{Card, Suit, Value};

/// Размер стандартной колоды.
pub const FULL_DECK_SIZE: usize = 52;

/// Все карты в каноническом "нераспечатанном" порядке:
/// CLUBS, DIAMONDS, HEARTS, SPADES; внутри масти ACE, 2..10, JACK, QUEEN, KING.
pub fn all_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(FULL_DECK_SIZE);
    for suit in Suit::ALL {
        for value in Value::ALL {
            cards.push(Card::new(value, suit));
        }
    }
    cards
}

/// Код → карта. Строится один раз на процесс и больше не меняется,
/// поэтому чтение не требует синхронизации.
pub fn catalog_by_code() -> &'static HashMap<String, Card> {
    static CATALOG: OnceLock<HashMap<String, Card>> = OnceLock::new();
    CATALOG.get_or_init(|| all_cards().into_iter().map(|c| (c.code(), c)).collect())
}

/// Найти карту по коду.
pub fn lookup(code: &str) -> Option<Card> {
    catalog_by_code().get(code).copied()
}

/// Собрать карты новой колоды.
///
/// Пустой список кодов = полная колода. Иначе карты берутся в порядке кодов,
/// а неизвестные коды молча пропускаются (колода может оказаться меньше списка).
/// Отказ на неизвестный код делает только слой валидации запросов.
pub fn build_cards<S: AsRef<str>>(codes: &[S]) -> Vec<Card> {
    if codes.is_empty() {
        return all_cards();
    }
    codes.iter().filter_map(|code| lookup(code.as_ref())).collect()
}
