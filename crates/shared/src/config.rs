//! Application configuration management.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Language;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Currency and language configuration.
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

/// Currency and language configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Default (CMS) currency code. Also settable through the bare `CURRENCY` variable.
    pub currency: String,
    /// Default locale used when a caller does not supply one.
    pub locale: String,
    /// Supported languages, in display order.
    pub languages: Vec<Language>,
    /// Static exchange rate table.
    pub rates: RatesConfig,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            locale: "en-US".to_string(),
            languages: vec![
                Language::new("en-US", "English"),
                Language::new("es-ES", "Español"),
                Language::new("fr-FR", "Français"),
            ],
            rates: RatesConfig::default(),
        }
    }
}

/// Exchange rates quoted against a single base currency.
///
/// `values["EUR"] = 0.92` reads as `1 base = 0.92 EUR`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RatesConfig {
    /// Base currency every rate is quoted against.
    pub base: String,
    /// Target currency code to rate.
    pub values: BTreeMap<String, Decimal>,
}

impl Default for RatesConfig {
    fn default() -> Self {
        let values = [
            ("EUR", Decimal::new(92, 2)),
            ("GBP", Decimal::new(79, 2)),
            ("JPY", Decimal::new(14950, 2)),
            ("CAD", Decimal::new(136, 2)),
            ("MXN", Decimal::new(1705, 2)),
            ("BRL", Decimal::new(497, 2)),
            ("INR", Decimal::new(8312, 2)),
            ("KWD", Decimal::new(308, 3)),
        ]
        .into_iter()
        .map(|(code, rate)| (code.to_string(), rate))
        .collect();

        Self {
            base: "USD".to_string(),
            values,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// `POLYGLOT__*` environment variables, then the bare `CURRENCY` variable.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("POLYGLOT").separator("__"))
            .set_override_option("i18n.currency", std::env::var("CURRENCY").ok())?
            .build()?;

        config.try_deserialize()
    }
}
