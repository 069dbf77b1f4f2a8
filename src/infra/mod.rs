//! Инфраструктурный слой вокруг движка колод:
//! - генерация ID;
//! - RNG-реализации для перемешивания;
//! - абстракция хранения и in-memory реализация;
//! - маппинги domain → DTO;
//! - конфиг и логирование.

pub mod config;
pub mod ids;
pub mod logging;
pub mod mapping;
pub mod persistence;
pub mod rng;

pub use config::{DrawLocking, ServiceConfig};
pub use ids::*;
pub use logging::init_tracing;
pub use mapping::*;
pub use persistence::{DeckStore, InMemoryDeckStore, StoreError};
pub use rng::*;
