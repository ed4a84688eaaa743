//! Internationalization routes.
//!
//! The routes are declared as a plain table: each [`I18nEndpoint`] carries its
//! path, description, declared response shape and handler. [`routes`] folds
//! the table into an axum router.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::{MethodRouter, get},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use polyglot_core::currency::{CurrencyDef, convert_minor};
use polyglot_core::i18n::CurrencyConversion;
use polyglot_shared::AppError;

use crate::{
    AppState,
    error::{ApiResult, query_rejection},
    schema::ResponseShape,
};

/// Read-only i18n endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I18nEndpoint {
    /// Rate between two currencies.
    CurrencyConversion,
    /// Rates from one currency to every known currency.
    CurrencyConversions,
    /// Supported languages.
    Languages,
    /// Conversions for the CMS currency plus languages.
    I18nInfo,
}

impl I18nEndpoint {
    /// Every endpoint, in registration order.
    pub const ALL: [Self; 4] = [
        Self::CurrencyConversion,
        Self::CurrencyConversions,
        Self::Languages,
        Self::I18nInfo,
    ];

    /// URL path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::CurrencyConversion => "/currencyConversion",
            Self::CurrencyConversions => "/currencyConversions",
            Self::Languages => "/languages",
            Self::I18nInfo => "/i18n-info",
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CurrencyConversion => {
                "Get currency conversion from source currency to target currency"
            }
            Self::CurrencyConversions => {
                "Get currency conversions for given source currency, defaulting to environment currency"
            }
            Self::Languages => "Get list of languages",
            Self::I18nInfo => {
                "Get combined response of currencyConversions for CMS currency and languages"
            }
        }
    }

    /// Declared shape of the 200 response.
    #[must_use]
    pub const fn response_shape(self) -> ResponseShape {
        match self {
            Self::CurrencyConversion => ResponseShape::CurrencyConversion,
            Self::CurrencyConversions => ResponseShape::CurrencyConversionDict,
            Self::Languages => ResponseShape::LanguageList,
            Self::I18nInfo => ResponseShape::I18nInfo,
        }
    }

    fn method_router(self) -> MethodRouter<AppState> {
        match self {
            Self::CurrencyConversion => get(get_currency_conversion),
            Self::CurrencyConversions => get(get_currency_conversions),
            Self::Languages => get(get_languages),
            Self::I18nInfo => get(get_i18n_info),
        }
    }

    /// Serializes `body` and checks it against the declared shape.
    fn respond<T: Serialize>(self, body: &T) -> ApiResult<Json<Value>> {
        let value = serde_json::to_value(body).map_err(|e| AppError::Internal(e.to_string()))?;
        self.response_shape()
            .validate(&value)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(Json(value))
    }
}

/// Creates the i18n routes from the endpoint table.
pub fn routes() -> Router<AppState> {
    I18nEndpoint::ALL
        .into_iter()
        .fold(Router::new(), |router, endpoint| {
            debug!(
                path = endpoint.path(),
                shape = ?endpoint.response_shape(),
                description = endpoint.description(),
                "Registering i18n route"
            );
            router.route(endpoint.path(), endpoint.method_router())
        })
}

/// Query parameters for a single conversion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConversionQuery {
    /// Source currency code (defaults to the CMS currency).
    pub source_currency: Option<String>,
    /// Target currency code.
    pub target_currency: String,
    /// Optional amount in minor units of the source currency to convert.
    pub amount: Option<i64>,
    /// Locale for `formattedAmount`.
    pub locale: Option<String>,
}

/// Query parameters for the conversion dictionary.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConversionsQuery {
    /// Source currency code (defaults to the CMS currency).
    pub source_currency: Option<String>,
}

/// Response for a single conversion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConversionResponse {
    /// Currency pair and rate.
    #[serde(flatten)]
    pub conversion: CurrencyConversion,
    /// Requested amount in minor units of the target currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_amount: Option<i64>,
    /// `converted_amount` rendered for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_amount: Option<String>,
}

/// GET `/currencyConversion` - Rate for a currency pair, optionally applied to an amount.
async fn get_currency_conversion(
    State(state): State<AppState>,
    query: Result<Query<CurrencyConversionQuery>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(query) = query.map_err(|e| query_rejection(&e))?;

    let conversion = state
        .i18n
        .currency_conversion(query.source_currency.as_deref(), &query.target_currency)?;

    let (converted_amount, formatted_amount) = match query.amount {
        Some(amount) => {
            let from = CurrencyDef::find(&conversion.source_currency)?;
            let to = CurrencyDef::find(&conversion.target_currency)?;
            let converted = convert_minor(amount, from, to, conversion.exchange_rate)?;
            let formatted =
                state
                    .formatter
                    .format_currency(converted, query.locale.as_deref(), Some(to.code))?;
            (Some(converted), Some(formatted))
        }
        None => (None, None),
    };

    debug!(
        from = %conversion.source_currency,
        to = %conversion.target_currency,
        rate = %conversion.exchange_rate,
        "Currency conversion served"
    );

    I18nEndpoint::CurrencyConversion.respond(&CurrencyConversionResponse {
        conversion,
        converted_amount,
        formatted_amount,
    })
}

/// GET `/currencyConversions` - Rates from a source currency to every known currency.
async fn get_currency_conversions(
    State(state): State<AppState>,
    query: Result<Query<CurrencyConversionsQuery>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(query) = query.map_err(|e| query_rejection(&e))?;
    let dict = state
        .i18n
        .currency_conversions(query.source_currency.as_deref())?;
    I18nEndpoint::CurrencyConversions.respond(&dict)
}

/// GET `/languages` - Supported languages in configured order.
async fn get_languages(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    I18nEndpoint::Languages.respond(&state.i18n.languages())
}

/// GET `/i18n-info` - Conversions for the CMS currency plus languages.
async fn get_i18n_info(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let info = state.i18n.i18n_info()?;
    I18nEndpoint::I18nInfo.respond(&info)
}
