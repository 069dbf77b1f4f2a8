//! Доменная модель: карты, каталог, колода.

pub mod card;
pub mod catalog;
pub mod deck;

pub use card::*;
pub use catalog::*;
pub use deck::*;
