use std::str::FromStr;
use std::time::Duration;

use tracing::Level;

/// Стратегия блокировки снятия карт.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DrawLocking {
    /// Одна блокировка на весь сервис (`GlobalDrawLock`).
    #[default]
    Global,
    /// Блокировка на каждую колоду (`PerDeckDrawLock`).
    PerDeck,
}

impl FromStr for DrawLocking {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(DrawLocking::Global),
            "per-deck" | "per_deck" | "perdeck" => Ok(DrawLocking::PerDeck),
            other => Err(format!("unknown draw locking strategy: {other}")),
        }
    }
}

/// Настройки сервиса колод.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Потолок на одно обращение к хранилищу.
    pub store_timeout: Duration,
    pub draw_locking: DrawLocking,
    pub log_level: Level,
    /// Искусственная задержка in-memory хранилища (для стресс-прогонов).
    pub store_latency: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_millis(5_000),
            draw_locking: DrawLocking::Global,
            log_level: Level::INFO,
            store_latency: Duration::ZERO,
        }
    }
}

impl ServiceConfig {
    /// Прочитать настройки из переменных окружения `DECKS_*`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// То же, но из произвольного источника ключ → значение.
    /// Нераспознанные значения заменяются значениями по умолчанию.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            store_timeout: read_ms(&lookup, "DECKS_STORE_TIMEOUT_MS", defaults.store_timeout),
            draw_locking: read_parsed(&lookup, "DECKS_DRAW_LOCKING", defaults.draw_locking),
            log_level: read_parsed(&lookup, "DECKS_LOG_LEVEL", defaults.log_level),
            store_latency: read_ms(&lookup, "DECKS_STORE_LATENCY_MS", defaults.store_latency),
        }
    }
}

fn read_ms(lookup: &impl Fn(&str) -> Option<String>, key: &str, fallback: Duration) -> Duration {
    lookup(key)
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(fallback)
}

fn read_parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, fallback: T) -> T {
    lookup(key)
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(fallback)
}
