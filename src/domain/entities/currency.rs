//! # Currency Entity
//!
//! A display currency with its exchange rate against the base currency.
//!
//! The exchange rate is expressed as units of this currency per one unit of
//! the catalog's fixed base currency (the base currency itself carries a
//! rate of exactly 1). `decimal_places` is the display precision that
//! converted amounts are rounded to.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code.
    code: CurrencyCode,
    /// Display name.
    name: String,
    /// Display symbol, e.g. `$` or `€`.
    symbol: String,
    /// Units of this currency per one unit of the base currency.
    exchange_rate: Decimal,
    /// Display precision for converted amounts.
    decimal_places: u32,
    /// Whether the currency can be selected and converted into.
    is_active: bool,
    /// Whether this is the catalog-wide default currency.
    is_default: bool,
}

impl Currency {
    /// Creates a new active, non-default currency with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidExchangeRate` if the rate is not
    /// strictly positive.
    pub fn new(
        code: CurrencyCode,
        name: impl Into<String>,
        symbol: impl Into<String>,
        exchange_rate: Decimal,
        decimal_places: u32,
    ) -> DomainResult<Self> {
        if exchange_rate <= Decimal::ZERO {
            return Err(DomainError::invalid_exchange_rate(format!(
                "rate must be positive, got {exchange_rate}"
            )));
        }
        Ok(Self {
            code,
            name: name.into(),
            symbol: symbol.into(),
            exchange_rate,
            decimal_places,
            is_active: true,
            is_default: false,
        })
    }

    /// Sets the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Marks this currency as the catalog default.
    #[must_use]
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Returns the ISO 4217 code.
    #[must_use]
    pub fn code(&self) -> &CurrencyCode {
        &self.code
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the exchange rate against the base currency.
    #[must_use]
    pub fn exchange_rate(&self) -> Decimal {
        self.exchange_rate
    }

    /// Returns the display precision.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Returns true if the currency is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns true if this is the catalog default currency.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({} rate={})", self.code, self.exchange_rate)
    }
}
