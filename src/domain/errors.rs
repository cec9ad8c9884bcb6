//! # Domain Errors
//!
//! Error types for domain-level validation failures.
//!
//! Every entity and value-object constructor validates its invariants and
//! reports violations through [`DomainError`]. These errors surface to
//! callers as `ResolutionError::InvalidInput` at the application boundary.

use thiserror::Error;

/// Error type for domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Offer price is zero or negative.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Country code is not a 2-letter ISO 3166-1 alpha-2 code.
    #[error("invalid country code: {0}")]
    InvalidCountryCode(String),

    /// Currency code is not a 3-letter ISO 4217 code.
    #[error("invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    /// Language code is not a valid primary language subtag.
    #[error("invalid language code: {0}")]
    InvalidLanguageCode(String),

    /// Exchange rate is zero or negative.
    #[error("invalid exchange rate: {0}")]
    InvalidExchangeRate(String),
}

impl DomainError {
    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(message: impl Into<String>) -> Self {
        Self::InvalidPrice(message.into())
    }

    /// Creates an invalid country code error.
    #[must_use]
    pub fn invalid_country_code(message: impl Into<String>) -> Self {
        Self::InvalidCountryCode(message.into())
    }

    /// Creates an invalid currency code error.
    #[must_use]
    pub fn invalid_currency_code(message: impl Into<String>) -> Self {
        Self::InvalidCurrencyCode(message.into())
    }

    /// Creates an invalid language code error.
    #[must_use]
    pub fn invalid_language_code(message: impl Into<String>) -> Self {
        Self::InvalidLanguageCode(message.into())
    }

    /// Creates an invalid exchange rate error.
    #[must_use]
    pub fn invalid_exchange_rate(message: impl Into<String>) -> Self {
        Self::InvalidExchangeRate(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_price_display() {
        let err = DomainError::invalid_price("price must be positive, got -1");
        assert!(err.to_string().contains("invalid price"));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn invalid_country_code_display() {
        let err = DomainError::invalid_country_code("USA");
        assert!(err.to_string().contains("invalid country code"));
        assert!(err.to_string().contains("USA"));
    }

    #[test]
    fn invalid_currency_code_display() {
        let err = DomainError::invalid_currency_code("DOLLARS");
        assert!(err.to_string().contains("invalid currency code"));
    }

    #[test]
    fn invalid_exchange_rate_display() {
        let err = DomainError::invalid_exchange_rate("rate must be positive");
        assert!(err.to_string().contains("invalid exchange rate"));
    }
}
