//! # Locale Codes
//!
//! Validated country, currency, and language code value objects.
//!
//! All three parse case-insensitively and normalize to their canonical
//! casing: countries and currencies uppercase (ISO 3166-1 alpha-2 and
//! ISO 4217), languages lowercase (primary subtag).
//!
//! # Examples
//!
//! ```
//! use bestoffer::domain::value_objects::{CountryCode, CurrencyCode, LanguageCode};
//!
//! let country = CountryCode::parse("us").unwrap();
//! assert_eq!(country.as_str(), "US");
//!
//! let currency = CurrencyCode::parse("eur").unwrap();
//! assert_eq!(currency.as_str(), "EUR");
//!
//! let language = LanguageCode::parse("EN").unwrap();
//! assert_eq!(language.as_str(), "en");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 3166-1 alpha-2 country code, normalized uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Parses a country code, accepting any casing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCountryCode` unless the input is exactly
    /// two ASCII letters.
    pub fn parse(code: &str) -> DomainResult<Self> {
        let trimmed = code.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::invalid_country_code(format!(
                "expected 2-letter alpha-2 code, got {code:?}"
            )));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the code as an uppercase string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISO 4217 currency code, normalized uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses a currency code, accepting any casing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCurrencyCode` unless the input is exactly
    /// three ASCII letters.
    pub fn parse(code: &str) -> DomainResult<Self> {
        let trimmed = code.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::invalid_currency_code(format!(
                "expected 3-letter ISO 4217 code, got {code:?}"
            )));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the code as an uppercase string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Primary language subtag (BCP 47), normalized lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parses a language code, accepting any casing.
    ///
    /// Region subtags are stripped: `"fr-FR"` parses to `fr`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLanguageCode` unless the primary subtag
    /// is two or three ASCII letters.
    pub fn parse(code: &str) -> DomainResult<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        if !(2..=3).contains(&primary.len())
            || !primary.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(DomainError::invalid_language_code(format!(
                "expected 2- or 3-letter primary subtag, got {code:?}"
            )));
        }
        Ok(Self(primary.to_ascii_lowercase()))
    }

    /// Returns the code as a lowercase string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn country_code_normalizes_uppercase() {
        assert_eq!(CountryCode::parse("us").unwrap().as_str(), "US");
        assert_eq!(CountryCode::parse("De").unwrap().as_str(), "DE");
    }

    #[test]
    fn country_code_rejects_wrong_length() {
        assert!(CountryCode::parse("USA").is_err());
        assert!(CountryCode::parse("U").is_err());
        assert!(CountryCode::parse("").is_err());
    }

    #[test]
    fn country_code_rejects_non_alphabetic() {
        assert!(CountryCode::parse("U1").is_err());
        assert!(CountryCode::parse("--").is_err());
    }

    #[test]
    fn currency_code_normalizes_uppercase() {
        assert_eq!(CurrencyCode::parse("usd").unwrap().as_str(), "USD");
        assert_eq!(CurrencyCode::parse("Eur").unwrap().as_str(), "EUR");
    }

    #[test]
    fn currency_code_rejects_invalid() {
        assert!(CurrencyCode::parse("US").is_err());
        assert!(CurrencyCode::parse("DOLLARS").is_err());
        assert!(CurrencyCode::parse("U$D").is_err());
    }

    #[test]
    fn language_code_strips_region_subtag() {
        assert_eq!(LanguageCode::parse("fr-FR").unwrap().as_str(), "fr");
        assert_eq!(LanguageCode::parse("en_US").unwrap().as_str(), "en");
    }

    #[test]
    fn language_code_normalizes_lowercase() {
        assert_eq!(LanguageCode::parse("AR").unwrap().as_str(), "ar");
    }

    #[test]
    fn language_code_rejects_invalid() {
        assert!(LanguageCode::parse("e").is_err());
        assert!(LanguageCode::parse("").is_err());
        assert!(LanguageCode::parse("1234").is_err());
    }
}
