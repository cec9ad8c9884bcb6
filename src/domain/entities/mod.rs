//! # Domain Entities
//!
//! Catalog-owned entities the engine reads during a resolution call.
//!
//! - [`Product`]: the item shoppers search for
//! - [`Store`]: a third-party store with eligibility and ranking attributes
//! - [`PriceOffer`]: one store's price for one product
//! - [`Currency`]: a display currency with its base-relative exchange rate
//! - [`Language`]: a display language
//!
//! All entities are immutable from the engine's perspective: the external
//! catalog creates and mutates them, the engine only reads snapshots.

pub mod currency;
pub mod language;
pub mod price_offer;
pub mod product;
pub mod store;

pub use currency::Currency;
pub use language::Language;
pub use price_offer::PriceOffer;
pub use product::Product;
pub use store::{AffiliateConfig, Store};
