//! Property-based tests for conversion, filtering, ranking, and link
//! building, using `proptest` for input generation.

#![allow(clippy::unwrap_used)]

use bestoffer::application::services::eligibility::{CandidateOffer, EligibilityFilter};
use bestoffer::application::services::{AffiliateLinkBuilder, PriceRankingEngine};
use bestoffer::domain::entities::store::AffiliateConfig;
use bestoffer::domain::entities::{Currency, PriceOffer, Store};
use bestoffer::domain::value_objects::{CountryCode, CurrencyCode, ProductId, StoreId};
use bestoffer::infrastructure::rates::RateSnapshot;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// A strictly positive price with up to 4 decimal places.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000, 0u32..=4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// A syntactically valid ISO 4217 currency code.
fn arb_currency_code() -> impl Strategy<Value = CurrencyCode> {
    "[A-Z]{3}".prop_map(|s| CurrencyCode::parse(&s).unwrap())
}

/// A syntactically valid alpha-2 country code.
fn arb_country_code() -> impl Strategy<Value = CountryCode> {
    "[A-Z]{2}".prop_map(|s| CountryCode::parse(&s).unwrap())
}

/// A positive base-relative exchange rate.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000, 1u32..=4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn candidate(
    store_id: &str,
    active: bool,
    countries: Vec<CountryCode>,
    priority: i32,
    price: Decimal,
    in_stock: bool,
) -> CandidateOffer {
    let store = Store::new(StoreId::new(store_id), store_id)
        .with_active(active)
        .with_priority(priority)
        .with_supported_countries(countries);
    let offer = PriceOffer::new(
        ProductId::new("p-1"),
        store.id().clone(),
        price,
        CurrencyCode::parse("USD").unwrap(),
        "https://shop.example/p",
        Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
    )
    .unwrap()
    .with_in_stock(in_stock);
    CandidateOffer::new(offer, store)
}

fn arb_candidate_pool() -> impl Strategy<Value = Vec<CandidateOffer>> {
    prop::collection::vec(
        (
            any::<bool>(),          // store active
            any::<bool>(),          // serves US
            -10i32..10,             // priority
            arb_price(),
            any::<bool>(),          // in stock
        ),
        1..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (active, serves_us, priority, price, in_stock))| {
                let countries = if serves_us {
                    vec![CountryCode::parse("US").unwrap()]
                } else {
                    vec![CountryCode::parse("DE").unwrap()]
                };
                candidate(&format!("s-{i}"), active, countries, priority, price, in_stock)
            })
            .collect()
    })
}

fn usd_only_snapshot() -> RateSnapshot {
    RateSnapshot::from_currencies(vec![
        Currency::new(CurrencyCode::parse("USD").unwrap(), "US Dollar", "$", Decimal::ONE, 2)
            .unwrap(),
    ])
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Converting an amount to its own currency is always the identity,
    /// even for currencies the snapshot has never heard of.
    #[test]
    fn conversion_identity_law(amount in arb_price(), code in arb_currency_code()) {
        let snapshot = RateSnapshot::empty();
        prop_assert_eq!(snapshot.convert(amount, &code, &code).unwrap(), amount);
    }

    /// Conversion preserves order: a cheaper amount never converts to a
    /// more expensive one.
    #[test]
    fn conversion_is_monotone(
        a in arb_price(),
        b in arb_price(),
        from_rate in arb_rate(),
        to_rate in arb_rate(),
    ) {
        let from = CurrencyCode::parse("AAA").unwrap();
        let to = CurrencyCode::parse("BBB").unwrap();
        let snapshot = RateSnapshot::from_currencies(vec![
            Currency::new(from.clone(), "A", "a", from_rate, 2).unwrap(),
            Currency::new(to.clone(), "B", "b", to_rate, 2).unwrap(),
        ]);

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_converted = snapshot.convert(lo, &from, &to).unwrap();
        let hi_converted = snapshot.convert(hi, &from, &to).unwrap();
        prop_assert!(lo_converted <= hi_converted);
    }

    /// Every candidate surviving the filter has an active store that serves
    /// the country, and belongs to the requested product.
    #[test]
    fn filter_is_sound(pool in arb_candidate_pool()) {
        let product = ProductId::new("p-1");
        let eligible = EligibilityFilter::filter(pool, &product, "US").unwrap();

        let us = CountryCode::parse("US").unwrap();
        for c in &eligible {
            prop_assert!(c.store.is_active());
            prop_assert!(c.store.serves_country(&us));
            prop_assert_eq!(c.offer.product_id(), &product);
        }
    }

    /// The filter never invents candidates; its output is a subset of its
    /// input by store id.
    #[test]
    fn filter_never_adds_candidates(pool in arb_candidate_pool()) {
        let input_ids: Vec<String> =
            pool.iter().map(|c| c.store.id().as_str().to_owned()).collect();
        let eligible =
            EligibilityFilter::filter(pool, &ProductId::new("p-1"), "US").unwrap();
        for c in &eligible {
            prop_assert!(input_ids.iter().any(|id| id == c.store.id().as_str()));
        }
    }

    /// When selection succeeds, no in-stock eligible candidate is cheaper
    /// than the winner.
    #[test]
    fn winner_has_minimum_price(pool in arb_candidate_pool()) {
        let usd = CurrencyCode::parse("USD").unwrap();
        let snapshot = usd_only_snapshot();

        if let Ok(best) = PriceRankingEngine::select_best(&pool, &usd, &snapshot) {
            for c in pool.iter().filter(|c| c.offer.in_stock()) {
                prop_assert!(best.offer.price() <= c.offer.price());
            }
        }
    }

    /// The winner is independent of candidate order.
    #[test]
    fn selection_is_order_invariant(pool in arb_candidate_pool().prop_shuffle()) {
        let usd = CurrencyCode::parse("USD").unwrap();
        let snapshot = usd_only_snapshot();

        let mut sorted = pool.clone();
        sorted.sort_by(|a, b| a.store.id().cmp(b.store.id()));

        let from_shuffled = PriceRankingEngine::select_best(&pool, &usd, &snapshot);
        let from_sorted = PriceRankingEngine::select_best(&sorted, &usd, &snapshot);

        match (from_shuffled, from_sorted) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.store.id(), b.store.id()),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "one ordering succeeded, the other failed"),
        }
    }

    /// The link builder is a pure function of the store config and product
    /// URL, and without a config it is the identity on the URL.
    #[test]
    fn link_builder_is_pure(
        code in "[a-z0-9-]{1,16}",
        path in "[a-z0-9/-]{1,32}",
    ) {
        let url = format!("https://shop.example/{path}");

        let plain = Store::new(StoreId::new("s-1"), "Plain");
        prop_assert_eq!(AffiliateLinkBuilder::build(&plain, &url), url.clone());

        let tracked = Store::new(StoreId::new("s-2"), "Tracked").with_affiliate(
            AffiliateConfig::new("https://t.example/{AFFILIATE_CODE}?u={URL}", &code),
        );
        let first = AffiliateLinkBuilder::build(&tracked, &url);
        let second = AffiliateLinkBuilder::build(&tracked, &url);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.contains(&code));
    }

    /// Country codes parse case-insensitively to the same normalized value.
    #[test]
    fn country_parse_is_case_insensitive(country in arb_country_code()) {
        let lower = country.as_str().to_lowercase();
        prop_assert_eq!(CountryCode::parse(&lower).unwrap(), country);
    }
}
