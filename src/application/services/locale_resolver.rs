//! # Locale Resolver
//!
//! Determines the effective display language and currency for a request.
//!
//! One deterministic fallback chain covers both language and currency,
//! evaluated in order with the first *active* match winning:
//!
//! 1. Authenticated user's stored preference
//! 2. Session-stored values
//! 3. Explicit request parameters (`lang`, `currency`)
//! 4. Accept-Language best match (language only; currency has no header
//!    equivalent and skips to 5)
//! 5. The catalog's default language / default currency
//!
//! A candidate that is unknown or inactive is treated as absent — the chain
//! falls through rather than failing. The resolver only fails with
//! `Configuration` when the catalog lacks a default language or currency,
//! making `resolve` total for well-configured catalogs.

use crate::application::context::{LocalePreference, RequestContext};
use crate::application::error::{ResolutionError, ResolutionResult};
use crate::domain::entities::{Currency, Language};
use crate::domain::value_objects::{CurrencyCode, LanguageCode};
use crate::infrastructure::catalog::traits::CatalogReader;
use std::collections::HashSet;
use std::sync::Arc;

/// Resolves the display locale for a request via the documented fallback
/// chain.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    catalog: Arc<dyn CatalogReader>,
}

impl LocaleResolver {
    /// Creates a resolver backed by the given catalog.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    /// Resolves the effective display language and currency.
    ///
    /// Pure given the request context and the catalog snapshot: no side
    /// effects, no retries.
    ///
    /// # Errors
    ///
    /// Returns `ResolutionError::Configuration` if the catalog has no
    /// default active language or no default active currency; catalog read
    /// failures surface as `ServiceUnavailable`.
    pub async fn resolve(&self, ctx: &RequestContext) -> ResolutionResult<LocalePreference> {
        let languages = self.catalog.list_active_languages().await?;
        let currencies = self.catalog.list_active_currencies().await?;

        let language = self.resolve_language(ctx, &languages)?;
        let currency = self.resolve_currency(ctx, &currencies)?;

        Ok(LocalePreference::new(language, currency))
    }

    fn resolve_language(
        &self,
        ctx: &RequestContext,
        active: &[Language],
    ) -> ResolutionResult<LanguageCode> {
        let active_codes: HashSet<&str> =
            active.iter().map(|l| l.code().as_str()).collect();

        let stored_candidates = [
            ctx.user().and_then(|u| u.language.as_deref()),
            ctx.session().and_then(|s| s.language.as_deref()),
            ctx.requested_language(),
        ];
        for candidate in stored_candidates.into_iter().flatten() {
            if let Some(code) = parse_active_language(candidate, &active_codes) {
                return Ok(code);
            }
        }

        if let Some(code) = preferred_accepted_language(ctx.accepted_languages(), &active_codes) {
            return Ok(code);
        }

        active
            .iter()
            .find(|l| l.is_default())
            .map(|l| l.code().clone())
            .ok_or_else(|| {
                ResolutionError::configuration("catalog has no default active language")
            })
    }

    fn resolve_currency(
        &self,
        ctx: &RequestContext,
        active: &[Currency],
    ) -> ResolutionResult<CurrencyCode> {
        let active_codes: HashSet<&str> =
            active.iter().map(|c| c.code().as_str()).collect();

        let stored_candidates = [
            ctx.user().and_then(|u| u.currency.as_deref()),
            ctx.session().and_then(|s| s.currency.as_deref()),
            ctx.requested_currency(),
        ];
        for candidate in stored_candidates.into_iter().flatten() {
            if let Ok(code) = CurrencyCode::parse(candidate) {
                if active_codes.contains(code.as_str()) {
                    return Ok(code);
                }
            }
        }

        active
            .iter()
            .find(|c| c.is_default())
            .map(|c| c.code().clone())
            .ok_or_else(|| {
                ResolutionError::configuration("catalog has no default active currency")
            })
    }
}

fn parse_active_language(candidate: &str, active: &HashSet<&str>) -> Option<LanguageCode> {
    LanguageCode::parse(candidate)
        .ok()
        .filter(|code| active.contains(code.as_str()))
}

/// Picks the highest-weighted Accept-Language entry whose primary subtag is
/// an active language.
///
/// Entries carry optional `;q=` weights (default 1.0); ordering between
/// equal weights follows the client's original order.
fn preferred_accepted_language(
    accepted: &[String],
    active: &HashSet<&str>,
) -> Option<LanguageCode> {
    let mut weighted: Vec<(f64, usize, &str)> = accepted
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() {
                return None;
            }
            let quality = parts
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.parse::<f64>().ok())
                .unwrap_or(1.0);
            Some((quality, position, tag))
        })
        .collect();

    // Stable order: quality descending, then the client's original order.
    weighted.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });

    weighted
        .into_iter()
        .find_map(|(_, _, tag)| parse_active_language(tag, active))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::context::LocaleSelection;
    use crate::infrastructure::catalog::InMemoryCatalog;
    use rust_decimal::Decimal;

    async fn catalog_with_defaults() -> InMemoryCatalog {
        let catalog = InMemoryCatalog::new();
        catalog
            .insert_language(
                Language::new(LanguageCode::parse("en").unwrap(), "English").as_default(),
            )
            .await;
        catalog
            .insert_language(Language::new(LanguageCode::parse("ar").unwrap(), "Arabic"))
            .await;
        catalog
            .insert_currency(
                Currency::new(
                    CurrencyCode::parse("USD").unwrap(),
                    "US Dollar",
                    "$",
                    Decimal::ONE,
                    2,
                )
                .unwrap()
                .as_default(),
            )
            .await;
        catalog
            .insert_currency(
                Currency::new(
                    CurrencyCode::parse("EUR").unwrap(),
                    "Euro",
                    "€",
                    Decimal::new(92, 2),
                    2,
                )
                .unwrap(),
            )
            .await;
        catalog
    }

    fn resolver(catalog: InMemoryCatalog) -> LocaleResolver {
        LocaleResolver::new(Arc::new(catalog))
    }

    #[tokio::test]
    async fn empty_context_resolves_to_defaults() {
        let resolver = resolver(catalog_with_defaults().await);
        let pref = resolver.resolve(&RequestContext::new()).await.unwrap();
        assert_eq!(pref.language().as_str(), "en");
        assert_eq!(pref.currency().as_str(), "USD");
    }

    #[tokio::test]
    async fn user_preference_wins_over_everything() {
        let resolver = resolver(catalog_with_defaults().await);
        let ctx = RequestContext::new()
            .with_user(
                LocaleSelection::new()
                    .with_language("ar")
                    .with_currency("EUR"),
            )
            .with_session(LocaleSelection::new().with_language("en"))
            .with_requested_language("en")
            .with_requested_currency("USD");

        let pref = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(pref.language().as_str(), "ar");
        assert_eq!(pref.currency().as_str(), "EUR");
    }

    #[tokio::test]
    async fn inactive_user_preference_falls_through_to_session() {
        let catalog = catalog_with_defaults().await;
        catalog
            .insert_language(
                Language::new(LanguageCode::parse("fr").unwrap(), "French").with_active(false),
            )
            .await;
        let resolver = resolver(catalog);

        let ctx = RequestContext::new()
            .with_user(LocaleSelection::new().with_language("fr"))
            .with_session(LocaleSelection::new().with_language("ar"));

        let pref = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(pref.language().as_str(), "ar");
    }

    #[tokio::test]
    async fn malformed_candidate_falls_through_without_error() {
        let resolver = resolver(catalog_with_defaults().await);
        let ctx = RequestContext::new()
            .with_requested_language("not-a-language-code-1234")
            .with_requested_currency("$$$");

        let pref = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(pref.language().as_str(), "en");
        assert_eq!(pref.currency().as_str(), "USD");
    }

    #[tokio::test]
    async fn query_parameter_is_used_when_active() {
        let resolver = resolver(catalog_with_defaults().await);
        let ctx = RequestContext::new()
            .with_requested_language("AR")
            .with_requested_currency("eur");

        let pref = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(pref.language().as_str(), "ar");
        assert_eq!(pref.currency().as_str(), "EUR");
    }

    #[tokio::test]
    async fn accepted_language_matches_active_language() {
        let resolver = resolver(catalog_with_defaults().await);
        let ctx = RequestContext::new()
            .with_accepted_languages(vec!["ar-EG".into(), "en;q=0.5".into()]);

        let pref = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(pref.language().as_str(), "ar");
    }

    #[tokio::test]
    async fn accepted_language_honors_quality_weights() {
        let resolver = resolver(catalog_with_defaults().await);
        // ar weighted below en despite appearing first.
        let ctx = RequestContext::new()
            .with_accepted_languages(vec!["ar;q=0.3".into(), "en;q=0.9".into()]);

        let pref = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(pref.language().as_str(), "en");
    }

    #[tokio::test]
    async fn no_accepted_language_active_falls_back_to_default() {
        // Scenario: accepted ["fr-FR", "de;q=0.8"], active {en, ar},
        // default en.
        let resolver = resolver(catalog_with_defaults().await);
        let ctx = RequestContext::new()
            .with_accepted_languages(vec!["fr-FR".into(), "de;q=0.8".into()]);

        let pref = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(pref.language().as_str(), "en");
    }

    #[tokio::test]
    async fn currency_ignores_accept_language() {
        let resolver = resolver(catalog_with_defaults().await);
        let ctx = RequestContext::new().with_accepted_languages(vec!["ar".into()]);

        let pref = resolver.resolve(&ctx).await.unwrap();
        // Language from the header, currency straight from the default.
        assert_eq!(pref.language().as_str(), "ar");
        assert_eq!(pref.currency().as_str(), "USD");
    }

    #[tokio::test]
    async fn missing_default_language_is_configuration_error() {
        let catalog = InMemoryCatalog::new();
        catalog
            .insert_language(Language::new(LanguageCode::parse("en").unwrap(), "English"))
            .await;
        catalog
            .insert_currency(
                Currency::new(
                    CurrencyCode::parse("USD").unwrap(),
                    "US Dollar",
                    "$",
                    Decimal::ONE,
                    2,
                )
                .unwrap()
                .as_default(),
            )
            .await;

        let resolver = resolver(catalog);
        let result = resolver.resolve(&RequestContext::new()).await;
        assert!(matches!(result, Err(ResolutionError::Configuration(_))));
    }

    #[tokio::test]
    async fn missing_default_currency_is_configuration_error() {
        let catalog = InMemoryCatalog::new();
        catalog
            .insert_language(
                Language::new(LanguageCode::parse("en").unwrap(), "English").as_default(),
            )
            .await;

        let resolver = resolver(catalog);
        let result = resolver.resolve(&RequestContext::new()).await;
        assert!(matches!(result, Err(ResolutionError::Configuration(_))));
    }

    #[tokio::test]
    async fn inactive_default_does_not_count() {
        let catalog = catalog_with_defaults().await;
        let resolver = resolver(catalog);
        // Defaults exist and are active; sanity-check totality.
        let ctx = RequestContext::new()
            .with_user(LocaleSelection::new())
            .with_session(LocaleSelection::new());
        assert!(resolver.resolve(&ctx).await.is_ok());
    }
}
