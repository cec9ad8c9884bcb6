//! # Price Ranking Engine
//!
//! Selects the best eligible, in-stock offer.
//!
//! Ranking compares *native* prices, before any currency conversion:
//! conversion only affects presentation, not ranking correctness, provided
//! the winning candidate's currency is convertible into the display
//! currency. Candidates whose currency cannot be converted are skipped and
//! ranking continues with the next-best candidate.
//!
//! # Tie-break order
//!
//! Equal minimum prices are broken deterministically, in order:
//!
//! 1. lower store `priority` number wins
//! 2. earlier `last_updated_at` wins
//! 3. lowest store identifier (lexicographic) wins
//!
//! so identical inputs always produce the identical winner.

use crate::application::error::{ResolutionError, ResolutionResult};
use crate::application::services::eligibility::CandidateOffer;
use crate::domain::value_objects::CurrencyCode;
use crate::infrastructure::rates::snapshot::RateSnapshot;

/// Stateless best-offer ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceRankingEngine;

impl PriceRankingEngine {
    /// Selects the best in-stock offer among eligible candidates.
    ///
    /// # Errors
    ///
    /// - `ResolutionError::NoOfferAvailable` if no candidate is in stock
    ///   (or the slice is empty)
    /// - `ResolutionError::Conversion` if every in-stock candidate's
    ///   currency lacks a usable rate for `display_currency`
    pub fn select_best(
        eligible: &[CandidateOffer],
        display_currency: &CurrencyCode,
        rates: &RateSnapshot,
    ) -> ResolutionResult<CandidateOffer> {
        let mut in_stock: Vec<&CandidateOffer> =
            eligible.iter().filter(|c| c.offer.in_stock()).collect();

        if in_stock.is_empty() {
            return Err(ResolutionError::no_offer_available(
                "no eligible offer is in stock",
            ));
        }

        in_stock.sort_by(Self::compare);

        in_stock
            .into_iter()
            .find(|c| rates.can_convert(c.offer.currency(), display_currency))
            .cloned()
            .ok_or_else(|| {
                ResolutionError::Conversion(
                    crate::infrastructure::rates::snapshot::RateError::missing_rate(
                        display_currency,
                    ),
                )
            })
    }

    /// Ranks all candidates (in stock or not) by the documented ordering.
    ///
    /// Used by offer comparison, where out-of-stock offers are still shown.
    #[must_use]
    pub fn rank(mut candidates: Vec<CandidateOffer>) -> Vec<CandidateOffer> {
        candidates.sort_by(|a, b| Self::compare(&a, &b));
        candidates
    }

    fn compare(a: &&CandidateOffer, b: &&CandidateOffer) -> std::cmp::Ordering {
        a.offer
            .price()
            .cmp(&b.offer.price())
            .then_with(|| a.store.priority().cmp(&b.store.priority()))
            .then_with(|| a.offer.last_updated_at().cmp(&b.offer.last_updated_at()))
            .then_with(|| a.store.id().cmp(b.store.id()))
    }
}
