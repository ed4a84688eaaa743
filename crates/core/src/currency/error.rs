//! Currency error types.

use polyglot_shared::AppError;
use polyglot_shared::types::MoneyError;
use thiserror::Error;

/// Result type alias using `CurrencyError`.
pub type CurrencyResult<T> = Result<T, CurrencyError>;

/// Currency-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Currency code is not in the currency table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Numeric input could not be parsed.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Locale tag is malformed.
    #[error("Invalid locale: {0:?}")]
    InvalidLocale(String),

    /// No direct, inverse or triangulated rate exists for the pair.
    #[error("No exchange rate found for {from}/{to}")]
    RateNotFound {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
    },

    /// Exchange rate is zero or negative.
    #[error("Exchange rate must be positive: {from}/{to} = {rate}")]
    NonPositiveRate {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
        /// Offending rate.
        rate: String,
    },

    /// Result does not fit in the representable range.
    #[error("Amount overflow")]
    Overflow,

    /// Money value error (mismatch, overflow).
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::RateNotFound { .. } => Self::NotFound(err.to_string()),
            CurrencyError::Overflow | CurrencyError::Money(MoneyError::Overflow) => {
                Self::BusinessRule(err.to_string())
            }
            CurrencyError::NonPositiveRate { .. } => Self::Configuration(err.to_string()),
            CurrencyError::UnknownCurrency(_)
            | CurrencyError::InvalidAmount(_)
            | CurrencyError::InvalidLocale(_)
            | CurrencyError::Money(_) => Self::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_mapping() {
        let err: AppError = CurrencyError::UnknownCurrency("XYZ".into()).into();
        assert_eq!(err.status_code(), 400);

        let err: AppError = CurrencyError::RateNotFound {
            from: "USD".into(),
            to: "CHF".into(),
        }
        .into();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "Not found: No exchange rate found for USD/CHF");

        let err: AppError = CurrencyError::Money(MoneyError::Overflow).into();
        assert_eq!(err.status_code(), 422);
    }
}
