//! Currency definitions, minor-unit formatting and exchange rates.

pub mod conversion;
pub mod definition;
pub mod error;
pub mod exchange;
pub mod format;
pub mod locale;

#[cfg(test)]
mod props;

pub use conversion::{convert_amount, convert_minor, round_bankers};
pub use definition::CurrencyDef;
pub use error::{CurrencyError, CurrencyResult};
pub use exchange::{ExchangeRate, RateLookup, RateLookupMethod, RateTable};
pub use format::{AmountInput, CurrencyFormatter, CurrencySettings, DecimalInput};
pub use locale::LocaleFormat;
