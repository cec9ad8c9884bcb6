//! # In-Memory Catalog
//!
//! In-memory implementation of [`CatalogReader`] for tests and embedding.
//!
//! Uses thread-safe `HashMap`s for storage, making it suitable for unit and
//! integration tests without database dependencies.

use crate::domain::entities::{Currency, Language, PriceOffer, Product, Store};
use crate::domain::value_objects::{ProductId, StoreId};
use crate::infrastructure::catalog::traits::{CatalogReader, CatalogResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`CatalogReader`].
///
/// Clones share the same underlying storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
    stores: Arc<RwLock<HashMap<StoreId, Store>>>,
    offers: Arc<RwLock<Vec<PriceOffer>>>,
    currencies: Arc<RwLock<Vec<Currency>>>,
    languages: Arc<RwLock<Vec<Language>>>,
}

impl InMemoryCatalog {
    /// Creates a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a product.
    pub async fn insert_product(&self, product: Product) {
        let mut products = self.products.write().await;
        products.insert(product.id().clone(), product);
    }

    /// Inserts or replaces a store.
    pub async fn insert_store(&self, store: Store) {
        let mut stores = self.stores.write().await;
        stores.insert(store.id().clone(), store);
    }

    /// Adds a price offer.
    pub async fn insert_offer(&self, offer: PriceOffer) {
        let mut offers = self.offers.write().await;
        offers.push(offer);
    }

    /// Adds a currency.
    pub async fn insert_currency(&self, currency: Currency) {
        let mut currencies = self.currencies.write().await;
        currencies.push(currency);
    }

    /// Adds a language.
    pub async fn insert_language(&self, language: Language) {
        let mut languages = self.languages.write().await;
        languages.push(language);
    }

    /// Removes all stored data.
    pub async fn clear(&self) {
        self.products.write().await.clear();
        self.stores.write().await.clear();
        self.offers.write().await.clear();
        self.currencies.write().await.clear();
        self.languages.write().await.clear();
    }
}

#[async_trait]
impl CatalogReader for InMemoryCatalog {
    async fn get_active_product(&self, id: &ProductId) -> CatalogResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(id).filter(|p| p.is_active()).cloned())
    }

    async fn list_offers_for_product(&self, id: &ProductId) -> CatalogResult<Vec<PriceOffer>> {
        let offers = self.offers.read().await;
        Ok(offers
            .iter()
            .filter(|o| o.product_id() == id)
            .cloned()
            .collect())
    }

    async fn get_store(&self, id: &StoreId) -> CatalogResult<Option<Store>> {
        let stores = self.stores.read().await;
        Ok(stores.get(id).cloned())
    }

    async fn list_active_currencies(&self) -> CatalogResult<Vec<Currency>> {
        let currencies = self.currencies.read().await;
        Ok(currencies.iter().filter(|c| c.is_active()).cloned().collect())
    }

    async fn list_active_languages(&self) -> CatalogResult<Vec<Language>> {
        let languages = self.languages.read().await;
        Ok(languages.iter().filter(|l| l.is_active()).cloned().collect())
    }
}
