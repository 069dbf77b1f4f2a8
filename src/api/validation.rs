//! Разбор и проверка сырых параметров запроса.
//!
//! В отличие от `domain::build_cards`, здесь неизвестный код карты - ошибка.

use crate::api::errors::{ApiError, InvalidParam};
use crate::domain::{lookup, DeckId};

/// Копилка ошибок по полям: все неверные поля запроса отдаются разом.
#[derive(Debug, Default)]
pub struct InvalidParams(Vec<InvalidParam>);

impl InvalidParams {
    pub fn check<T>(&mut self, parsed: Result<T, InvalidParam>) -> Option<T> {
        parsed.map_err(|e| self.0.push(e)).ok()
    }

    pub fn check_all<T>(&mut self, parsed: Result<T, Vec<InvalidParam>>) -> Option<T> {
        parsed.map_err(|mut e| self.0.append(&mut e)).ok()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_error(self) -> ApiError {
        ApiError::bad_request(self.0)
    }
}

pub fn parse_id(raw: &str) -> Result<DeckId, InvalidParam> {
    if raw.is_empty() {
        return Err(InvalidParam::new("id", "param not provided"));
    }
    raw.parse::<DeckId>()
        .map_err(|e| InvalidParam::new("id", e.to_string()))
}

/// Количество карт: обязательно, целое, не меньше 1.
pub fn parse_count(raw: Option<&str>) -> Result<usize, InvalidParam> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(InvalidParam::new("count", "parameter missing")),
    };
    let count: i64 = raw
        .parse()
        .map_err(|_| InvalidParam::new("count", format!("invalid number: {raw}")))?;
    if count < 1 {
        return Err(InvalidParam::new(
            "count",
            "count should be greater or equal to 1",
        ));
    }
    usize::try_from(count).map_err(|e| InvalidParam::new("count", e.to_string()))
}

/// Признак перемешивания. Нет параметра - `false`.
pub fn parse_shuffled(raw: Option<&str>) -> Result<bool, InvalidParam> {
    match raw {
        None => Ok(false),
        Some("1" | "t" | "T" | "TRUE" | "true" | "True") => Ok(true),
        Some("0" | "f" | "F" | "FALSE" | "false" | "False") => Ok(false),
        Some(other) => Err(InvalidParam::new(
            "shuffled",
            format!("invalid boolean: {other:?}"),
        )),
    }
}

/// Коды карт через запятую. Пустой параметр - пустой список (полная колода).
/// Каждый нераспознанный код даёт свою ошибку.
pub fn parse_cards(raw: Option<&str>) -> Result<Vec<String>, Vec<InvalidParam>> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(Vec::new()),
    };

    let codes: Vec<String> = raw.split(',').map(str::to_string).collect();
    let errors: Vec<InvalidParam> = codes
        .iter()
        .filter(|code| lookup(code.as_str()).is_none())
        .map(|code| InvalidParam::new("cards", format!("unrecognised card: {code}")))
        .collect();

    if errors.is_empty() {
        Ok(codes)
    } else {
        Err(errors)
    }
}
