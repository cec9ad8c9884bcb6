//! # Rate Snapshot
//!
//! Immutable exchange-rate table used for currency normalization.
//!
//! Each rate is expressed as units of the currency per one unit of the fixed
//! base currency, so converting `amount` from `X` to `Y` is
//! `amount * rate(Y) / rate(X)`. Conversion happens at presentation time
//! only; offer ranking always compares native prices.
//!
//! A snapshot is built once from the catalog's active currencies and never
//! mutated; [`super::cache::RateCache`] swaps whole snapshots atomically.
//!
//! # Examples
//!
//! ```
//! use bestoffer::domain::entities::Currency;
//! use bestoffer::domain::value_objects::CurrencyCode;
//! use bestoffer::infrastructure::rates::RateSnapshot;
//! use rust_decimal::Decimal;
//!
//! let usd = CurrencyCode::parse("USD").unwrap();
//! let eur = CurrencyCode::parse("EUR").unwrap();
//! let snapshot = RateSnapshot::from_currencies(vec![
//!     Currency::new(usd.clone(), "US Dollar", "$", Decimal::ONE, 2).unwrap(),
//!     Currency::new(eur.clone(), "Euro", "€", Decimal::new(92, 2), 2).unwrap(),
//! ]);
//!
//! let converted = snapshot.convert(Decimal::from(50), &usd, &eur).unwrap();
//! assert_eq!(converted, Decimal::new(4600, 2));
//! ```

use crate::domain::entities::Currency;
use crate::domain::value_objects::CurrencyCode;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use thiserror::Error;

/// Error type for currency conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateError {
    /// The currency is inactive or has no registered exchange rate.
    #[error("no usable exchange rate for {0}")]
    MissingRate(String),
}

impl RateError {
    /// Creates a missing rate error for a currency code.
    #[must_use]
    pub fn missing_rate(code: &CurrencyCode) -> Self {
        Self::MissingRate(code.to_string())
    }
}

/// Result type for rate operations.
pub type RateResult<T> = Result<T, RateError>;

#[derive(Debug, Clone)]
struct RateEntry {
    rate: Decimal,
    decimal_places: u32,
}

/// Immutable table of exchange rates for the currently active currencies.
#[derive(Debug, Clone, Default)]
pub struct RateSnapshot {
    entries: HashMap<CurrencyCode, RateEntry>,
}

impl RateSnapshot {
    /// Creates an empty snapshot with no convertible currencies.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a snapshot from the catalog's active currencies.
    ///
    /// Inactive currencies are excluded, so any conversion involving them
    /// fails with [`RateError::MissingRate`].
    #[must_use]
    pub fn from_currencies(currencies: impl IntoIterator<Item = Currency>) -> Self {
        let entries = currencies
            .into_iter()
            .filter(Currency::is_active)
            .map(|c| {
                (
                    c.code().clone(),
                    RateEntry {
                        rate: c.exchange_rate(),
                        decimal_places: c.decimal_places(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Converts an amount between currencies.
    ///
    /// `convert(amount, X, X)` returns `amount` unchanged regardless of
    /// rounding (identity law). Otherwise the result is
    /// `amount * rate(to) / rate(from)` rounded half-up to the target
    /// currency's display precision.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::MissingRate`] if either currency is inactive or
    /// has no registered rate.
    pub fn convert(
        &self,
        amount: Decimal,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> RateResult<Decimal> {
        if from == to {
            return Ok(amount);
        }

        let from_entry = self
            .entries
            .get(from)
            .ok_or_else(|| RateError::missing_rate(from))?;
        let to_entry = self
            .entries
            .get(to)
            .ok_or_else(|| RateError::missing_rate(to))?;

        let converted = amount * to_entry.rate / from_entry.rate;
        Ok(converted
            .round_dp_with_strategy(to_entry.decimal_places, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Returns true if a conversion between the two currencies would succeed.
    #[must_use]
    pub fn can_convert(&self, from: &CurrencyCode, to: &CurrencyCode) -> bool {
        from == to || (self.entries.contains_key(from) && self.entries.contains_key(to))
    }

    /// Returns the registered rate for a currency, if any.
    #[must_use]
    pub fn rate(&self, code: &CurrencyCode) -> Option<Decimal> {
        self.entries.get(code).map(|e| e.rate)
    }

    /// Returns the number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no currencies are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
