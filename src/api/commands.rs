use serde::{Deserialize, Serialize};

/// Команды, меняющие состояние.
///
/// Поля приходят сырыми строками, как их отдаёт транспорт
/// (query-параметры, path-сегменты), и проверяются в `api::validation`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    CreateDeck(CreateDeckCommand),
    DrawCards(DrawCardsCommand),
}

/// Создать колоду.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CreateDeckCommand {
    /// Коды карт через запятую ("AS,KD,10H"). Нет - полная колода.
    pub cards: Option<String>,
    /// "true" / "false" и т.п. Нет - не перемешивать.
    pub shuffled: Option<String>,
}

/// Снять карты с колоды.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DrawCardsCommand {
    pub deck_id: String,
    pub count: Option<String>,
}
