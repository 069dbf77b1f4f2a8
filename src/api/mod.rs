//! Внешний API сервиса колод.
//!
//! Здесь описываются:
//! - команды (commands.rs) - создать колоду, снять карты;
//! - запросы (queries.rs) - открыть колоду;
//! - DTO (dto.rs) - то, что уходит клиенту;
//! - ошибки (errors.rs) - то, что видит клиент;
//! - проверка параметров (validation.rs);
//! - фасад поверх сервиса (handlers.rs).

pub mod commands;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod queries;
pub mod validation;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use handlers::DeckApi;
pub use queries::*;
