use tracing::Level;

/// Поднять fmt-подписчика `tracing` с заданным максимальным уровнем.
///
/// Повторный вызов (например, из нескольких тестов) не паникует:
/// если глобальный подписчик уже стоит, возвращается `false`.
pub fn init_tracing(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
