use crate::api::dto::{CardDto, CreatedDeckDto, DrawnCardsDto, OpenedDeckDto};
use crate::domain::{Card, Deck};

/// Маппинг доменной карты в DTO (с вычисленным кодом).
pub fn card_to_dto(card: &Card) -> CardDto {
    CardDto {
        value: card.value,
        suit: card.suit,
        code: card.code(),
    }
}

pub fn cards_to_dto(cards: &[Card]) -> Vec<CardDto> {
    cards.iter().map(card_to_dto).collect()
}

/// Ответ на создание: без списка карт, только остаток.
pub fn deck_to_created_dto(deck: &Deck) -> CreatedDeckDto {
    CreatedDeckDto {
        deck_id: deck.id,
        shuffled: deck.shuffled,
        remaining: deck.remaining(),
    }
}

pub fn deck_to_opened_dto(deck: &Deck) -> OpenedDeckDto {
    OpenedDeckDto {
        deck: deck_to_created_dto(deck),
        cards: cards_to_dto(&deck.cards),
    }
}

pub fn drawn_to_dto(cards: &[Card]) -> DrawnCardsDto {
    DrawnCardsDto {
        cards: cards_to_dto(cards),
    }
}
