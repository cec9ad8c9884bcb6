//! # bestoffer
//!
//! Price-offer aggregation engine: given a product, a shopper country, and
//! request-scoped locale preferences, it resolves the single best
//! purchasable offer with a converted display price and an outbound
//! tracking link.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │ application                                               │
//! │   PriceResolutionService                                  │
//! │     LocaleResolver → EligibilityFilter → PriceRanking     │
//! │     → RateSnapshot::convert → AffiliateLinkBuilder        │
//! ├───────────────────────────────────────────────────────────┤
//! │ domain                                                    │
//! │   Product, Store, PriceOffer, Currency, Language          │
//! │   ProductId, StoreId, CountryCode, CurrencyCode, ...      │
//! ├───────────────────────────────────────────────────────────┤
//! │ infrastructure                                            │
//! │   CatalogReader (port) + InMemoryCatalog                  │
//! │   RateSnapshot + RateCache (copy-on-write refresh)        │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is read-only over an external catalog: products, stores,
//! offers, currencies, and languages are owned elsewhere and consumed
//! through the [`infrastructure::catalog::traits::CatalogReader`] port.
//! Ranking always compares native prices; currency conversion happens at
//! presentation time only.
//!
//! # Examples
//!
//! ```
//! use bestoffer::application::context::RequestContext;
//! use bestoffer::application::services::PriceResolutionService;
//! use bestoffer::domain::entities::{Currency, Language, PriceOffer, Product, Store};
//! use bestoffer::domain::value_objects::{
//!     CountryCode, CurrencyCode, LanguageCode, ProductId, StoreId,
//! };
//! use bestoffer::infrastructure::catalog::InMemoryCatalog;
//! use bestoffer::infrastructure::rates::RateCache;
//! use chrono::Utc;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! tokio_test::block_on(async {
//!     let catalog = Arc::new(InMemoryCatalog::new());
//!     catalog
//!         .insert_language(Language::new(LanguageCode::parse("en").unwrap(), "English").as_default())
//!         .await;
//!     catalog
//!         .insert_currency(
//!             Currency::new(CurrencyCode::parse("USD").unwrap(), "US Dollar", "$", Decimal::ONE, 2)
//!                 .unwrap()
//!                 .as_default(),
//!         )
//!         .await;
//!     catalog
//!         .insert_product(Product::new(ProductId::new("p-1"), "Widget"))
//!         .await;
//!     catalog
//!         .insert_store(
//!             Store::new(StoreId::new("s-1"), "Acme")
//!                 .with_supported_countries(vec![CountryCode::parse("US").unwrap()]),
//!         )
//!         .await;
//!     catalog
//!         .insert_offer(
//!             PriceOffer::new(
//!                 ProductId::new("p-1"),
//!                 StoreId::new("s-1"),
//!                 Decimal::new(4999, 2),
//!                 CurrencyCode::parse("USD").unwrap(),
//!                 "https://acme.example/widget",
//!                 Utc::now(),
//!             )
//!             .unwrap(),
//!         )
//!         .await;
//!
//!     let rates = RateCache::new();
//!     rates.refresh(catalog.as_ref()).await.unwrap();
//!
//!     let service = PriceResolutionService::new(catalog, rates);
//!     let best = service
//!         .resolve_best_offer(&ProductId::new("p-1"), "US", &RequestContext::new())
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(best.store_name(), "Acme");
//!     assert_eq!(best.price(), Decimal::new(4999, 2));
//! });
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::context::{LocalePreference, LocaleSelection, RequestContext};
pub use application::error::{ResolutionError, ResolutionResult};
pub use application::services::resolution::{BestOffer, OfferComparison, PriceResolutionService};
pub use config::EngineConfig;
