//! Движок колод: перемешивание, координация снятия карт, сервис
//! создания / открытия / снятия поверх хранилища.
//!
//! Высокоуровневый объект: `DeckService`
//! Основные операции:
//!   - `create`: собрать колоду (полную или по кодам), перемешать, сохранить
//!   - `open`: прочитать колоду
//!   - `draw`: снять N карт сверху под координатором

pub mod coordinator;
pub mod errors;
pub mod service;
pub mod shuffle;

pub use coordinator::{DrawCoordinator, GlobalDrawLock, PerDeckDrawLock};
pub use errors::ServiceError;
pub use service::DeckService;
pub use shuffle::{shuffle, ShuffleError};

/// Источник случайности для перемешивания.
///
/// Реализации живут в `infra::rng`. Для боевого режима источник обязан быть
/// криптографически стойким.
pub trait RandomSource: Send {
    /// Равномерно случайный индекс из `[0, upper]`.
    fn index_up_to(&mut self, upper: usize) -> Result<usize, ShuffleError>;
}
