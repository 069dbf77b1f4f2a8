//! Сервис колод игральных карт.
//!
//! Колоду можно создать (полную или из выбранных карт, по желанию
//! перемешанную), открыть и снимать с неё карты сверху. Снятие безопасно
//! при параллельных вызовах: цепочка чтение → изменение → запись идёт
//! под `engine::DrawCoordinator`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::DeckApi;
pub use domain::{Card, Deck, DeckId, Suit, Value};
pub use engine::{DeckService, GlobalDrawLock, PerDeckDrawLock, ServiceError};
pub use infra::{InMemoryDeckStore, ServiceConfig};
