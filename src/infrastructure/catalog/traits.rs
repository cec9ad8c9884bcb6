//! # Catalog Port
//!
//! Read-only repository trait over the external product catalog.
//!
//! The catalog owns all entity lifecycles; the engine consumes consistent
//! snapshots through this port. Any storage technology can satisfy it —
//! the crate ships [`super::in_memory::InMemoryCatalog`] for tests and
//! embedding.
//!
//! Implementations are responsible for snapshot consistency within one
//! resolution call; the engine performs no retries on catalog failures.

use crate::domain::entities::{Currency, Language, PriceOffer, Product, Store};
use crate::domain::value_objects::{ProductId, StoreId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for catalog reads.
///
/// All variants represent transient infrastructure failures; callers may
/// retry the whole resolution call.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The catalog could not be reached or errored.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// A catalog read exceeded its deadline.
    #[error("catalog read timed out: {0}")]
    Timeout(String),
}

impl CatalogError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    /// Returns true if the operation may be retried.
    ///
    /// Catalog reads are idempotent, so every catalog failure is retryable
    /// from the caller's side.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        true
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read-only access to the external product catalog.
///
/// # Examples
///
/// ```ignore
/// use bestoffer::infrastructure::catalog::traits::CatalogReader;
///
/// async fn count_offers(catalog: &impl CatalogReader, id: &ProductId) -> usize {
///     catalog.list_offers_for_product(id).await.map(|v| v.len()).unwrap_or(0)
/// }
/// ```
#[async_trait]
pub trait CatalogReader: Send + Sync + fmt::Debug {
    /// Gets a product by identifier.
    ///
    /// Returns `None` if the product does not exist or is inactive.
    async fn get_active_product(&self, id: &ProductId) -> CatalogResult<Option<Product>>;

    /// Lists all price offers attached to a product.
    async fn list_offers_for_product(&self, id: &ProductId) -> CatalogResult<Vec<PriceOffer>>;

    /// Gets a store by identifier.
    ///
    /// Returns `None` if the store does not exist. Inactive stores are
    /// returned; eligibility filtering excludes them.
    async fn get_store(&self, id: &StoreId) -> CatalogResult<Option<Store>>;

    /// Lists all currently active currencies.
    async fn list_active_currencies(&self) -> CatalogResult<Vec<Currency>>;

    /// Lists all currently active languages.
    async fn list_active_languages(&self) -> CatalogResult<Vec<Language>>;
}
