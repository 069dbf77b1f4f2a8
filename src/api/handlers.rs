use std::sync::Arc;

use crate::api::commands::{Command, CreateDeckCommand, DrawCardsCommand};
use crate::api::dto::{CommandResponse, CreatedDeckDto, DrawnCardsDto, OpenedDeckDto};
use crate::api::errors::ApiError;
use crate::api::queries::{OpenDeckQuery, Query, QueryResponse};
use crate::api::validation::{parse_cards, parse_count, parse_id, parse_shuffled, InvalidParams};
use crate::engine::{DeckService, DrawCoordinator};
use crate::infra::mapping::{deck_to_created_dto, deck_to_opened_dto, drawn_to_dto};
use crate::infra::persistence::DeckStore;

/// Фасад для транспорта: проверка входа → сервис → DTO / `ApiError`.
pub struct DeckApi<S, C> {
    service: Arc<DeckService<S, C>>,
}

impl<S, C> Clone for DeckApi<S, C> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: DeckStore, C: DrawCoordinator> DeckApi<S, C> {
    pub fn new(service: Arc<DeckService<S, C>>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &DeckService<S, C> {
        &self.service
    }

    pub async fn execute(&self, command: Command) -> Result<CommandResponse, ApiError> {
        match command {
            Command::CreateDeck(cmd) => self.create_deck(cmd).await.map(CommandResponse::DeckCreated),
            Command::DrawCards(cmd) => self.draw_cards(cmd).await.map(CommandResponse::CardsDrawn),
        }
    }

    pub async fn query(&self, query: Query) -> Result<QueryResponse, ApiError> {
        match query {
            Query::OpenDeck(q) => self.open_deck(q).await.map(QueryResponse::Deck),
        }
    }

    pub async fn create_deck(&self, cmd: CreateDeckCommand) -> Result<CreatedDeckDto, ApiError> {
        let mut errors = InvalidParams::default();
        let shuffled = errors.check(parse_shuffled(cmd.shuffled.as_deref()));
        let cards = errors.check_all(parse_cards(cmd.cards.as_deref()));

        let (Some(shuffled), Some(cards)) = (shuffled, cards) else {
            return Err(errors.into_error());
        };

        let deck = self.service.create(cards.as_slice(), shuffled).await?;
        Ok(deck_to_created_dto(&deck))
    }

    pub async fn open_deck(&self, query: OpenDeckQuery) -> Result<OpenedDeckDto, ApiError> {
        let mut errors = InvalidParams::default();
        let Some(deck_id) = errors.check(parse_id(&query.deck_id)) else {
            return Err(errors.into_error());
        };

        let deck = self.service.open(deck_id).await?;
        Ok(deck_to_opened_dto(&deck))
    }

    pub async fn draw_cards(&self, cmd: DrawCardsCommand) -> Result<DrawnCardsDto, ApiError> {
        let mut errors = InvalidParams::default();
        let deck_id = errors.check(parse_id(&cmd.deck_id));
        let count = errors.check(parse_count(cmd.count.as_deref()));

        let (Some(deck_id), Some(count)) = (deck_id, count) else {
            return Err(errors.into_error());
        };

        let drawn = self.service.draw(deck_id, count).await?;
        Ok(drawn_to_dto(&drawn))
    }
}
