//! # Affiliate Link Builder
//!
//! Rewrites a store's raw product URL into a tracking URL.
//!
//! Stores with an affiliate configuration carry a URL template with two
//! placeholders: `{AFFILIATE_CODE}` is replaced with the store's code, and
//! `{URL}` with the percent-encoded product page URL, in that order. A
//! store without a configuration gets its raw product URL passed through
//! untouched, so the builder is total and never fails.

use crate::domain::entities::Store;

/// Stateless tracking-URL builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct AffiliateLinkBuilder;

impl AffiliateLinkBuilder {
    /// Builds the outbound tracking URL for an offer at `store`.
    ///
    /// A template missing a placeholder is still substituted for the ones
    /// it has; a template with neither placeholder is returned as-is.
    #[must_use]
    pub fn build(store: &Store, product_url: &str) -> String {
        match store.affiliate() {
            Some(config) => {
                let encoded = urlencoding::encode(product_url);
                config
                    .base_url()
                    .replace("{AFFILIATE_CODE}", config.affiliate_code())
                    .replace("{URL}", &encoded)
            }
            None => product_url.to_owned(),
        }
    }
}
