//! # Eligibility Filter
//!
//! Narrows a product's offers to those purchasable in a given country.
//!
//! An offer is eligible iff its store is active, the store serves the
//! requested country, and the offer belongs to the requested product.
//! An empty result is a normal outcome (distinguished from the product
//! itself being absent, which the orchestrator reports as `NotFound`).

use crate::application::error::ResolutionResult;
use crate::domain::entities::{PriceOffer, Store};
use crate::domain::value_objects::{CountryCode, ProductId};

/// A price offer paired with its publishing store.
///
/// Offers reference stores by identifier; the orchestrator joins them before
/// filtering so eligibility and ranking can see store attributes.
#[derive(Debug, Clone)]
pub struct CandidateOffer {
    /// The price offer.
    pub offer: PriceOffer,
    /// The store publishing it.
    pub store: Store,
}

impl CandidateOffer {
    /// Pairs an offer with its store.
    #[must_use]
    pub fn new(offer: PriceOffer, store: Store) -> Self {
        Self { offer, store }
    }
}

/// Stateless eligibility filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityFilter;

impl EligibilityFilter {
    /// Filters candidates down to offers purchasable in `country`.
    ///
    /// The raw country string is validated before any filtering; no
    /// eligible offers yields an empty vec, never an error.
    ///
    /// # Errors
    ///
    /// Returns `ResolutionError::InvalidInput` if `country` is not a
    /// 2-letter alpha-2 code.
    pub fn filter(
        candidates: Vec<CandidateOffer>,
        product_id: &ProductId,
        country: &str,
    ) -> ResolutionResult<Vec<CandidateOffer>> {
        let country = CountryCode::parse(country)?;

        Ok(candidates
            .into_iter()
            .filter(|c| {
                c.store.is_active()
                    && c.store.serves_country(&country)
                    && c.offer.product_id() == product_id
            })
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::error::ResolutionError;
    use crate::domain::value_objects::{CurrencyCode, StoreId};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn store(id: &str, active: bool, countries: &[&str]) -> Store {
        Store::new(StoreId::new(id), id)
            .with_active(active)
            .with_supported_countries(
                countries
                    .iter()
                    .map(|c| CountryCode::parse(c).unwrap())
                    .collect::<Vec<_>>(),
            )
    }

    fn candidate(product: &str, store: Store) -> CandidateOffer {
        let offer = PriceOffer::new(
            ProductId::new(product),
            store.id().clone(),
            Decimal::from(10),
            CurrencyCode::parse("USD").unwrap(),
            "https://shop.example/p",
            Utc::now(),
        )
        .unwrap();
        CandidateOffer::new(offer, store)
    }

    #[test]
    fn invalid_country_code_fails_before_filtering() {
        let result = EligibilityFilter::filter(vec![], &ProductId::new("p-1"), "USA");
        assert!(matches!(result, Err(ResolutionError::InvalidInput(_))));

        let result = EligibilityFilter::filter(vec![], &ProductId::new("p-1"), "");
        assert!(matches!(result, Err(ResolutionError::InvalidInput(_))));
    }

    #[test]
    fn inactive_store_is_excluded() {
        let product = ProductId::new("p-1");
        let candidates = vec![
            candidate("p-1", store("s-1", true, &["US"])),
            candidate("p-1", store("s-2", false, &["US"])),
        ];

        let eligible = EligibilityFilter::filter(candidates, &product, "US").unwrap();
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible.first().unwrap().store.id().as_str(), "s-1");
    }

    #[test]
    fn country_match_is_case_insensitive() {
        let product = ProductId::new("p-1");
        let candidates = vec![candidate("p-1", store("s-1", true, &["de"]))];

        let eligible = EligibilityFilter::filter(candidates, &product, "DE").unwrap();
        assert_eq!(eligible.len(), 1);
    }

    #[test]
    fn non_serving_store_is_excluded() {
        let product = ProductId::new("p-1");
        let candidates = vec![
            candidate("p-1", store("s-1", true, &["US"])),
            candidate("p-1", store("s-2", true, &["DE"])),
        ];

        let eligible = EligibilityFilter::filter(candidates, &product, "FR").unwrap();
        assert!(eligible.is_empty());
    }

    #[test]
    fn foreign_product_offer_is_excluded() {
        let product = ProductId::new("p-1");
        let candidates = vec![
            candidate("p-1", store("s-1", true, &["US"])),
            candidate("p-2", store("s-2", true, &["US"])),
        ];

        let eligible = EligibilityFilter::filter(candidates, &product, "US").unwrap();
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible.first().unwrap().offer.product_id(), &product);
    }
}
