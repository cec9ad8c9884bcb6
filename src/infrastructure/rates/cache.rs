//! # Rate Cache
//!
//! Copy-on-write cache of the current [`RateSnapshot`].
//!
//! Single-writer, many-reader discipline: readers take an `Arc` clone of the
//! current snapshot and keep using it for the duration of one resolution
//! call; a periodic background task rebuilds the snapshot from the catalog
//! and atomically swaps it in. A refresh failure leaves the previous
//! snapshot in place (fail-open, stale-but-available), so no reader is ever
//! blocked or broken by a refresh.

use crate::infrastructure::catalog::traits::{CatalogReader, CatalogResult};
use crate::infrastructure::rates::snapshot::RateSnapshot;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Shared, atomically swappable exchange-rate cache.
#[derive(Debug, Clone, Default)]
pub struct RateCache {
    current: Arc<RwLock<Arc<RateSnapshot>>>,
}

impl RateCache {
    /// Creates a cache holding an empty snapshot.
    ///
    /// Until the first successful [`refresh`](Self::refresh), every
    /// non-identity conversion fails with a missing rate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current snapshot.
    ///
    /// The returned `Arc` stays valid and immutable even if a refresh swaps
    /// in a newer snapshot concurrently.
    #[must_use]
    pub fn snapshot(&self) -> Arc<RateSnapshot> {
        Arc::clone(&self.current.read())
    }

    /// Rebuilds the snapshot from the catalog's active currencies and swaps
    /// it in.
    ///
    /// # Errors
    ///
    /// Returns the catalog error on a failed read; the previous snapshot
    /// stays in place.
    pub async fn refresh(&self, catalog: &dyn CatalogReader) -> CatalogResult<()> {
        let currencies = catalog.list_active_currencies().await?;
        let next = Arc::new(RateSnapshot::from_currencies(currencies));
        tracing::debug!(currencies = next.len(), "exchange-rate snapshot refreshed");
        *self.current.write() = next;
        Ok(())
    }

    /// Spawns the periodic refresh task.
    ///
    /// The task refreshes immediately, then on every interval tick. Failed
    /// refreshes are logged and skipped; the task never stops on its own.
    /// Abort the returned handle to stop refreshing.
    pub fn spawn_refresher(
        &self,
        catalog: Arc<dyn CatalogReader>,
        interval: Duration,
    ) -> JoinHandle<()> {
        let cache = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                if let Err(e) = cache.refresh(catalog.as_ref()).await {
                    tracing::warn!(error = %e, "rate refresh failed, keeping previous snapshot");
                }
            }
        })
    }
}
