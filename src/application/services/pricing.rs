//! # Price Presentation Helpers
//!
//! Display formatting and simple price statistics.
//!
//! These helpers operate on already-converted amounts; they never touch
//! exchange rates. Formatting uses the currency's symbol and decimal
//! places from the rate snapshot's source catalog entry.

use crate::domain::entities::Currency;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fraction an offer must undercut the average by to count as a good deal.
const GOOD_DEAL_THRESHOLD: Decimal = Decimal::from_parts(10, 0, 0, false, 2); // 0.10

/// Stateless price formatting and statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceFormatter;

impl PriceFormatter {
    /// Formats an amount for display: symbol, then the amount rounded
    /// half-up to the currency's decimal places.
    ///
    /// `100` in a 2-decimal USD catalog formats as `$100.00`; the same
    /// amount in 0-decimal JPY formats as `¥100`.
    #[must_use]
    pub fn format(amount: Decimal, currency: &Currency) -> String {
        let rounded = amount.round_dp_with_strategy(
            currency.decimal_places(),
            RoundingStrategy::MidpointAwayFromZero,
        );
        format!("{}{:.*}", currency.symbol(), currency.decimal_places() as usize, rounded)
    }

    /// Percentage difference of `price` relative to `reference`, positive
    /// when `price` is higher. Returns `None` when `reference` is zero.
    #[must_use]
    pub fn difference_percent(price: Decimal, reference: Decimal) -> Option<Decimal> {
        if reference.is_zero() {
            return None;
        }
        Some(((price - reference) / reference * Decimal::ONE_HUNDRED).round_dp(2))
    }

    /// Returns true if `price` is strictly more than 10% below the average
    /// of `all_prices`. A price exactly at the threshold does not count; an
    /// empty slice is never a good deal.
    #[must_use]
    pub fn is_good_deal(price: Decimal, all_prices: &[Decimal]) -> bool {
        if all_prices.is_empty() {
            return false;
        }
        let sum: Decimal = all_prices.iter().copied().sum();
        let average = sum / Decimal::from(all_prices.len());
        if average.is_zero() {
            return false;
        }
        price < average * (Decimal::ONE - GOOD_DEAL_THRESHOLD)
    }
}
