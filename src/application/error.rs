//! # Application Errors
//!
//! Typed failure taxonomy for offer resolution.
//!
//! Every sub-component returns a typed result; the orchestrator forwards
//! failures unchanged and never re-labels an error into a different kind.
//! The predicate methods let the transport layer split "nothing matches"
//! (expected, e.g. [`ResolutionError::NoOfferAvailable`]) from "something is
//! broken" (operational, e.g. [`ResolutionError::ServiceUnavailable`]).
//!
//! # Error Hierarchy
//!
//! ```text
//! ResolutionError
//! ├── NotFound(String)                 - product missing or inactive
//! ├── InvalidInput(DomainError)        - malformed country/currency/language code
//! ├── NoOfferAvailable(String)         - offers exist but none eligible/in stock
//! ├── Conversion(RateError)            - no usable exchange rate for a pair
//! ├── Configuration(String)            - catalog missing defaults, bad config
//! └── ServiceUnavailable(CatalogError) - catalog read failed or timed out
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::catalog::traits::CatalogError;
use crate::infrastructure::rates::snapshot::RateError;
use thiserror::Error;

/// Application-level error for offer resolution.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The requested product does not exist or is inactive.
    #[error("not found: {0}")]
    NotFound(String),

    /// A request parameter failed domain validation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    /// Offers exist but none are eligible or in stock.
    #[error("no offer available: {0}")]
    NoOfferAvailable(String),

    /// No usable exchange rate for the required currency pair.
    #[error("conversion error: {0}")]
    Conversion(#[from] RateError),

    /// The catalog lacks a default language or currency, or the engine
    /// configuration is invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A catalog read failed transiently or timed out.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(#[from] CatalogError),
}

impl ResolutionError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Creates a no-offer-available error.
    #[must_use]
    pub fn no_offer_available(message: impl Into<String>) -> Self {
        Self::NoOfferAvailable(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true if the caller may retry the whole call.
    ///
    /// Only transient catalog failures are retryable; the engine itself
    /// never retries because its reads are idempotent.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable(_))
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true if this error indicates an operational problem rather
    /// than an expected empty result.
    #[must_use]
    pub fn is_operational(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::ServiceUnavailable(_))
    }
}

/// Result type for resolution operations.
pub type ResolutionResult<T> = Result<T, ResolutionError>;
