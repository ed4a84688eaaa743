//! Response shapes declared by routes.
//!
//! Each route names the shape of its 200 response. Handlers serialize their
//! result and check it against the shape before it leaves the service.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;
use thiserror::Error;

/// A response body that does not match its declared shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{shape:?} response invalid at {path}: {reason}")]
pub struct ShapeViolation {
    /// Shape that was checked.
    pub shape: ResponseShape,
    /// JSON path of the offending value.
    pub path: String,
    /// What was wrong.
    pub reason: &'static str,
}

/// Declared 200 response shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{ sourceCurrency, targetCurrency, exchangeRate, convertedAmount?, formattedAmount? }`
    CurrencyConversion,
    /// `{ [code]: rate }`
    CurrencyConversionDict,
    /// `[{ code, label }]`
    LanguageList,
    /// `{ currencyConversions, languages }`
    I18nInfo,
    /// `{ status, version }`
    Health,
}

impl ResponseShape {
    /// Checks `value` against this shape.
    pub fn validate(self, value: &Value) -> Result<(), ShapeViolation> {
        let checker = Checker { shape: self };
        match self {
            Self::CurrencyConversion => checker.conversion(value, "$"),
            Self::CurrencyConversionDict => checker.dict(value, "$"),
            Self::LanguageList => checker.languages(value, "$"),
            Self::I18nInfo => {
                let object = checker.object(value, "$")?;
                checker.dict(checker.field(object, "$", "currencyConversions")?, "$.currencyConversions")?;
                checker.languages(checker.field(object, "$", "languages")?, "$.languages")
            }
            Self::Health => {
                let object = checker.object(value, "$")?;
                checker.string(checker.field(object, "$", "status")?, "$.status")?;
                checker.string(checker.field(object, "$", "version")?, "$.version")?;
                Ok(())
            }
        }
    }
}

struct Checker {
    shape: ResponseShape,
}

type Object = serde_json::Map<String, Value>;

impl Checker {
    fn violation(&self, path: &str, reason: &'static str) -> ShapeViolation {
        ShapeViolation {
            shape: self.shape,
            path: path.to_string(),
            reason,
        }
    }

    fn fail<T>(&self, path: &str, reason: &'static str) -> Result<T, ShapeViolation> {
        Err(self.violation(path, reason))
    }

    fn object<'v>(&self, value: &'v Value, path: &str) -> Result<&'v Object, ShapeViolation> {
        value
            .as_object()
            .ok_or_else(|| self.violation(path, "expected object"))
    }

    fn field<'v>(&self, object: &'v Object, path: &str, key: &str) -> Result<&'v Value, ShapeViolation> {
        object
            .get(key)
            .ok_or_else(|| self.violation(&format!("{path}.{key}"), "missing field"))
    }

    fn string<'v>(&self, value: &'v Value, path: &str) -> Result<&'v str, ShapeViolation> {
        value
            .as_str()
            .ok_or_else(|| self.violation(path, "expected string"))
    }

    fn currency_code(&self, value: &str, path: &str) -> Result<(), ShapeViolation> {
        if value.len() == 3 && value.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(())
        } else {
            self.fail(path, "expected uppercase currency code")
        }
    }

    fn rate(&self, value: &Value, path: &str) -> Result<(), ShapeViolation> {
        match Decimal::from_str(self.string(value, path)?) {
            Ok(rate) if rate > Decimal::ZERO => Ok(()),
            _ => self.fail(path, "expected positive decimal string"),
        }
    }

    fn conversion(&self, value: &Value, path: &str) -> Result<(), ShapeViolation> {
        let object = self.object(value, path)?;
        for key in ["sourceCurrency", "targetCurrency"] {
            let code = self.string(self.field(object, path, key)?, &format!("{path}.{key}"))?;
            self.currency_code(code, &format!("{path}.{key}"))?;
        }
        self.rate(self.field(object, path, "exchangeRate")?, &format!("{path}.exchangeRate"))?;
        if let Some(amount) = object.get("convertedAmount") {
            if !amount.is_i64() {
                return self.fail(&format!("{path}.convertedAmount"), "expected integer");
            }
        }
        if let Some(formatted) = object.get("formattedAmount") {
            self.string(formatted, &format!("{path}.formattedAmount"))?;
        }
        Ok(())
    }

    fn dict(&self, value: &Value, path: &str) -> Result<(), ShapeViolation> {
        for (code, rate) in self.object(value, path)? {
            let entry = format!("{path}.{code}");
            self.currency_code(code, &entry)?;
            self.rate(rate, &entry)?;
        }
        Ok(())
    }

    fn languages(&self, value: &Value, path: &str) -> Result<(), ShapeViolation> {
        let Some(items) = value.as_array() else {
            return self.fail(path, "expected array");
        };
        for (i, item) in items.iter().enumerate() {
            let entry = format!("{path}[{i}]");
            let object = self.object(item, &entry)?;
            self.string(self.field(object, &entry, "code")?, &format!("{entry}.code"))?;
            self.string(self.field(object, &entry, "label")?, &format!("{entry}.label"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_currency_conversion_shape() {
        let valid = json!({
            "sourceCurrency": "USD",
            "targetCurrency": "EUR",
            "exchangeRate": "0.92"
        });
        assert!(ResponseShape::CurrencyConversion.validate(&valid).is_ok());

        let with_amount = json!({
            "sourceCurrency": "USD",
            "targetCurrency": "EUR",
            "exchangeRate": "0.92",
            "convertedAmount": 920,
            "formattedAmount": "€9.20"
        });
        assert!(ResponseShape::CurrencyConversion.validate(&with_amount).is_ok());
    }

    #[test]
    fn test_currency_conversion_violations() {
        let missing = json!({ "sourceCurrency": "USD", "targetCurrency": "EUR" });
        let err = ResponseShape::CurrencyConversion.validate(&missing).unwrap_err();
        assert_eq!(err.path, "$.exchangeRate");
        assert_eq!(err.reason, "missing field");

        let numeric_rate = json!({
            "sourceCurrency": "USD",
            "targetCurrency": "EUR",
            "exchangeRate": 0.92
        });
        assert!(ResponseShape::CurrencyConversion.validate(&numeric_rate).is_err());

        let lowercase = json!({
            "sourceCurrency": "usd",
            "targetCurrency": "EUR",
            "exchangeRate": "0.92"
        });
        let err = ResponseShape::CurrencyConversion.validate(&lowercase).unwrap_err();
        assert_eq!(err.path, "$.sourceCurrency");
    }

    #[test]
    fn test_dict_shape() {
        assert!(
            ResponseShape::CurrencyConversionDict
                .validate(&json!({ "USD": "1", "EUR": "0.92" }))
                .is_ok()
        );
        let err = ResponseShape::CurrencyConversionDict
            .validate(&json!({ "USD": "-1" }))
            .unwrap_err();
        assert_eq!(err.path, "$.USD");
        assert!(ResponseShape::CurrencyConversionDict.validate(&json!([])).is_err());
    }

    #[test]
    fn test_language_list_shape() {
        assert!(
            ResponseShape::LanguageList
                .validate(&json!([{ "code": "en-US", "label": "English" }]))
                .is_ok()
        );
        let err = ResponseShape::LanguageList
            .validate(&json!([{ "code": "en-US" }]))
            .unwrap_err();
        assert_eq!(err.path, "$[0].label");
    }

    #[test]
    fn test_i18n_info_shape() {
        let valid = json!({
            "currencyConversions": { "USD": "1" },
            "languages": [{ "code": "en-US", "label": "English" }]
        });
        assert!(ResponseShape::I18nInfo.validate(&valid).is_ok());

        let err = ResponseShape::I18nInfo
            .validate(&json!({ "currencyConversions": {} }))
            .unwrap_err();
        assert_eq!(err.path, "$.languages");
        assert_eq!(
            err.to_string(),
            "I18nInfo response invalid at $.languages: missing field"
        );
    }
}
