//! Common types used across the application.

pub mod language;
pub mod money;

pub use language::Language;
pub use money::{CurrencyCode, Money, MoneyError};
