//! # Price Resolution Service
//!
//! End-to-end best-offer resolution for one product in one country.
//!
//! One call walks the whole pipeline: validate the country, confirm the
//! product exists and is active, resolve the display locale, join offers
//! with their stores (fetched concurrently), filter by eligibility, rank,
//! convert the winning price into the display currency, and build the
//! outbound tracking link. Sub-step failures surface unchanged; the
//! service never re-labels an error into a different kind and never
//! retries internally.
//!
//! An offer referencing a store the catalog no longer knows is logged and
//! skipped rather than failing the whole resolution.

use crate::application::context::RequestContext;
use crate::application::error::{ResolutionError, ResolutionResult};
use crate::application::services::affiliate::AffiliateLinkBuilder;
use crate::application::services::eligibility::{CandidateOffer, EligibilityFilter};
use crate::application::services::locale_resolver::LocaleResolver;
use crate::application::services::pricing::PriceFormatter;
use crate::application::services::ranking::PriceRankingEngine;
use crate::domain::value_objects::{CountryCode, CurrencyCode, ProductId, StoreId};
use crate::infrastructure::catalog::traits::{CatalogError, CatalogReader};
use crate::infrastructure::rates::cache::RateCache;
use crate::infrastructure::rates::snapshot::RateError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Default per-request deadline for [`PriceResolutionService::resolve_best_offer_with_timeout`].
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(5000);

/// The winning offer for a product, priced in the display currency.
#[derive(Debug, Clone, Serialize)]
pub struct BestOffer {
    store_id: StoreId,
    store_name: String,
    price: Decimal,
    currency: CurrencyCode,
    in_stock: bool,
    tracking_url: String,
    last_updated_at: DateTime<Utc>,
}

impl BestOffer {
    /// Returns the winning store's identifier.
    #[must_use]
    pub fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    /// Returns the winning store's display name.
    #[must_use]
    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    /// Returns the price converted into the display currency.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the display currency.
    #[must_use]
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Returns true if the offer is in stock (always true for a best offer).
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    /// Returns the outbound tracking URL.
    #[must_use]
    pub fn tracking_url(&self) -> &str {
        &self.tracking_url
    }

    /// Returns when the catalog last refreshed the winning offer.
    #[must_use]
    pub fn last_updated_at(&self) -> DateTime<Utc> {
        self.last_updated_at
    }
}

/// One row of a store-by-store comparison, priced in the display currency.
#[derive(Debug, Clone, Serialize)]
pub struct ComparedOffer {
    /// Store identifier.
    pub store_id: StoreId,
    /// Store display name.
    pub store_name: String,
    /// Price converted into the display currency.
    pub price: Decimal,
    /// Stock status at the store.
    pub in_stock: bool,
    /// Outbound tracking URL.
    pub tracking_url: String,
    /// True if the price is more than 10% below the comparison average.
    pub is_good_deal: bool,
    /// Last catalog refresh for this offer.
    pub last_updated_at: DateTime<Utc>,
}

/// All eligible offers for a product with summary price statistics.
///
/// Prices are converted into the display currency; the average is left
/// unrounded because no single display precision fits every row count.
#[derive(Debug, Clone, Serialize)]
pub struct OfferComparison {
    /// Offers in ranked order (price, then the documented tie-breaks).
    pub offers: Vec<ComparedOffer>,
    /// Lowest converted price.
    pub lowest_price: Decimal,
    /// Highest converted price.
    pub highest_price: Decimal,
    /// Mean converted price.
    pub average_price: Decimal,
    /// Display currency all prices are expressed in.
    pub currency: CurrencyCode,
}

/// Orchestrates best-offer resolution over a catalog and a rate cache.
#[derive(Debug, Clone)]
pub struct PriceResolutionService {
    catalog: Arc<dyn CatalogReader>,
    locale: LocaleResolver,
    rates: RateCache,
    request_timeout: Duration,
}

impl PriceResolutionService {
    /// Creates a service over the given catalog and rate cache.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogReader>, rates: RateCache) -> Self {
        let locale = LocaleResolver::new(Arc::clone(&catalog));
        Self {
            catalog,
            locale,
            rates,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Sets the per-request deadline used by
    /// [`resolve_best_offer_with_timeout`](Self::resolve_best_offer_with_timeout).
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Resolves the best offer for a product in a country.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a malformed country code
    /// - `NotFound` if the product is absent or inactive
    /// - `NoOfferAvailable` if no eligible offer is in stock
    /// - `Conversion` if the winning candidates cannot be priced in the
    ///   display currency
    /// - `Configuration` if the catalog lacks locale defaults
    /// - `ServiceUnavailable` on catalog read failures
    pub async fn resolve_best_offer(
        &self,
        product_id: &ProductId,
        country: &str,
        ctx: &RequestContext,
    ) -> ResolutionResult<BestOffer> {
        CountryCode::parse(country)?;

        let product = self
            .catalog
            .get_active_product(product_id)
            .await?
            .ok_or_else(|| ResolutionError::not_found(format!("product {product_id}")))?;

        let locale = self.locale.resolve(ctx).await?;
        let candidates = self.load_candidates(product_id).await?;
        let eligible = EligibilityFilter::filter(candidates, product_id, country)?;

        let snapshot = self.rates.snapshot();
        let best = PriceRankingEngine::select_best(&eligible, locale.currency(), &snapshot)?;
        let price = snapshot.convert(best.offer.price(), best.offer.currency(), locale.currency())?;
        let tracking_url = AffiliateLinkBuilder::build(&best.store, best.offer.product_url());

        tracing::debug!(
            product = %product.id(),
            store = %best.store.id(),
            %price,
            currency = %locale.currency(),
            "best offer resolved"
        );

        Ok(BestOffer {
            store_id: best.store.id().clone(),
            store_name: best.store.name().to_owned(),
            price,
            currency: locale.currency().clone(),
            in_stock: best.offer.in_stock(),
            tracking_url,
            last_updated_at: best.offer.last_updated_at(),
        })
    }

    /// [`resolve_best_offer`](Self::resolve_best_offer) bounded by the
    /// configured request deadline.
    ///
    /// # Errors
    ///
    /// Elapsed time maps to `ServiceUnavailable` (retryable), never to
    /// `NoOfferAvailable`; all other errors are the inner call's.
    pub async fn resolve_best_offer_with_timeout(
        &self,
        product_id: &ProductId,
        country: &str,
        ctx: &RequestContext,
    ) -> ResolutionResult<BestOffer> {
        match tokio::time::timeout(
            self.request_timeout,
            self.resolve_best_offer(product_id, country, ctx),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(ResolutionError::ServiceUnavailable(CatalogError::timeout(
                format!("resolution exceeded {:?}", self.request_timeout),
            ))),
        }
    }

    /// Compares all eligible offers for a product, in stock or not.
    ///
    /// Offers whose currency cannot be converted into the display currency
    /// are logged and dropped from the comparison.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`resolve_best_offer`](Self::resolve_best_offer);
    /// `NoOfferAvailable` if no eligible offer exists, `Conversion` if none
    /// of them can be priced in the display currency.
    pub async fn compare_offers(
        &self,
        product_id: &ProductId,
        country: &str,
        ctx: &RequestContext,
    ) -> ResolutionResult<OfferComparison> {
        CountryCode::parse(country)?;

        self.catalog
            .get_active_product(product_id)
            .await?
            .ok_or_else(|| ResolutionError::not_found(format!("product {product_id}")))?;

        let locale = self.locale.resolve(ctx).await?;
        let candidates = self.load_candidates(product_id).await?;
        let eligible = EligibilityFilter::filter(candidates, product_id, country)?;
        if eligible.is_empty() {
            return Err(ResolutionError::no_offer_available(format!(
                "no eligible offer for product {product_id} in {country}"
            )));
        }

        let snapshot = self.rates.snapshot();
        let display = locale.currency();
        let mut priced = Vec::with_capacity(eligible.len());
        for candidate in PriceRankingEngine::rank(eligible) {
            match snapshot.convert(candidate.offer.price(), candidate.offer.currency(), display) {
                Ok(price) => priced.push((candidate, price)),
                Err(e) => tracing::warn!(
                    store = %candidate.store.id(),
                    error = %e,
                    "offer dropped from comparison, currency not convertible"
                ),
            }
        }
        if priced.is_empty() {
            return Err(ResolutionError::Conversion(RateError::missing_rate(display)));
        }

        let prices: Vec<Decimal> = priced.iter().map(|(_, p)| *p).collect();
        let lowest = prices.iter().copied().min().unwrap_or_default();
        let highest = prices.iter().copied().max().unwrap_or_default();
        let sum: Decimal = prices.iter().copied().sum();
        let average = sum / Decimal::from(prices.len());

        let offers = priced
            .into_iter()
            .map(|(candidate, price)| ComparedOffer {
                store_id: candidate.store.id().clone(),
                store_name: candidate.store.name().to_owned(),
                price,
                in_stock: candidate.offer.in_stock(),
                tracking_url: AffiliateLinkBuilder::build(
                    &candidate.store,
                    candidate.offer.product_url(),
                ),
                is_good_deal: PriceFormatter::is_good_deal(price, &prices),
                last_updated_at: candidate.offer.last_updated_at(),
            })
            .collect();

        Ok(OfferComparison {
            offers,
            lowest_price: lowest,
            highest_price: highest,
            average_price: average,
            currency: display.clone(),
        })
    }

    /// Loads a product's offers and joins each with its store.
    ///
    /// Stores are fetched concurrently, one catalog read per distinct store
    /// id. Offers whose store the catalog no longer knows are skipped with a
    /// warning.
    async fn load_candidates(
        &self,
        product_id: &ProductId,
    ) -> ResolutionResult<Vec<CandidateOffer>> {
        let offers = self.catalog.list_offers_for_product(product_id).await?;

        let mut store_ids: Vec<StoreId> = offers.iter().map(|o| o.store_id().clone()).collect();
        store_ids.sort();
        store_ids.dedup();

        let fetched =
            futures::future::join_all(store_ids.iter().map(|id| self.catalog.get_store(id))).await;

        let mut stores: HashMap<StoreId, _> = HashMap::with_capacity(store_ids.len());
        for (id, result) in store_ids.into_iter().zip(fetched) {
            if let Some(store) = result? {
                stores.insert(id, store);
            }
        }

        let mut candidates = Vec::with_capacity(offers.len());
        for offer in offers {
            match stores.get(offer.store_id()) {
                Some(store) => candidates.push(CandidateOffer::new(offer, store.clone())),
                None => tracing::warn!(
                    store = %offer.store_id(),
                    product = %product_id,
                    "offer references unknown store, skipping"
                ),
            }
        }
        Ok(candidates)
    }
}
