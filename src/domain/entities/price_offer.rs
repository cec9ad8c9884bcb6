//! # Price Offer Entity
//!
//! A store's price for a product at a point in time.
//!
//! Offers are the input to eligibility filtering and ranking. The price is
//! kept in the store's native currency; conversion into the shopper's
//! display currency happens only after ranking, at presentation time.
//!
//! # Invariants
//!
//! - Price must be strictly positive
//! - The currency code must reference a catalog currency
//!
//! # Examples
//!
//! ```
//! use bestoffer::domain::entities::price_offer::PriceOffer;
//! use bestoffer::domain::value_objects::{CurrencyCode, ProductId, StoreId};
//! use chrono::Utc;
//! use rust_decimal::Decimal;
//!
//! let offer = PriceOffer::new(
//!     ProductId::new("p-1"),
//!     StoreId::new("s-1"),
//!     Decimal::new(4999, 2),
//!     CurrencyCode::parse("USD").unwrap(),
//!     "https://shop.example/p/widget",
//!     Utc::now(),
//! )
//! .unwrap();
//!
//! assert!(offer.in_stock());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{CurrencyCode, ProductId, StoreId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A price offer from one store for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceOffer {
    /// Product this offer belongs to.
    product_id: ProductId,
    /// Store publishing the offer.
    store_id: StoreId,
    /// Price in the store's native currency.
    price: Decimal,
    /// Native currency of the price.
    currency: CurrencyCode,
    /// Whether the product is currently in stock at this store.
    in_stock: bool,
    /// Raw product page URL at the store.
    product_url: String,
    /// When the catalog last refreshed this offer.
    last_updated_at: DateTime<Utc>,
}

impl PriceOffer {
    /// Creates a new in-stock offer with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the price is not strictly
    /// positive.
    pub fn new(
        product_id: ProductId,
        store_id: StoreId,
        price: Decimal,
        currency: CurrencyCode,
        product_url: impl Into<String>,
        last_updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if price <= Decimal::ZERO {
            return Err(DomainError::invalid_price(format!(
                "price must be positive, got {price}"
            )));
        }
        Ok(Self {
            product_id,
            store_id,
            price,
            currency,
            in_stock: true,
            product_url: product_url.into(),
            last_updated_at,
        })
    }

    /// Sets the in-stock flag.
    #[must_use]
    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Returns the product identifier.
    #[must_use]
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Returns the store identifier.
    #[must_use]
    pub fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    /// Returns the price in the offer's native currency.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the native currency.
    #[must_use]
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Returns true if the offer is in stock.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    /// Returns the raw product page URL.
    #[must_use]
    pub fn product_url(&self) -> &str {
        &self.product_url
    }

    /// Returns the last catalog refresh time for this offer.
    #[must_use]
    pub fn last_updated_at(&self) -> DateTime<Utc> {
        self.last_updated_at
    }
}

impl fmt::Display for PriceOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PriceOffer({} @ {} = {} {})",
            self.product_id, self.store_id, self.price, self.currency
        )
    }
}
