//! I18n error types.

use polyglot_shared::AppError;
use thiserror::Error;

use crate::currency::CurrencyError;

/// I18n-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// Currency lookup or conversion failed.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// Language tag is malformed.
    #[error("Invalid language tag: {0:?}")]
    InvalidLanguage(String),

    /// Language appears more than once in the list.
    #[error("Duplicate language: {0}")]
    DuplicateLanguage(String),
}

impl From<I18nError> for AppError {
    fn from(err: I18nError) -> Self {
        match err {
            I18nError::Currency(inner) => inner.into(),
            I18nError::InvalidLanguage(_) | I18nError::DuplicateLanguage(_) => {
                Self::Configuration(err.to_string())
            }
        }
    }
}
