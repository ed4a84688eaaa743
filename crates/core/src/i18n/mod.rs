//! Language list and currency conversion queries.

pub mod error;
pub mod service;
pub mod types;

pub use error::I18nError;
pub use service::I18nService;
pub use types::{CurrencyConversion, CurrencyConversionDict, I18nInfo};
