//! # Request Context
//!
//! Explicit request-scoped inputs to locale resolution.
//!
//! The source of each preference (user account, session, query parameter,
//! Accept-Language header) is carried as an explicit field rather than
//! reached for through ambient request state, which keeps the locale
//! resolver pure and testable.
//!
//! # Examples
//!
//! ```
//! use bestoffer::application::context::{LocaleSelection, RequestContext};
//!
//! let ctx = RequestContext::new()
//!     .with_requested_currency("EUR")
//!     .with_accepted_languages(vec!["fr-FR".into(), "de;q=0.8".into()]);
//!
//! assert_eq!(ctx.requested_currency(), Some("EUR"));
//! ```

use crate::domain::value_objects::{CurrencyCode, LanguageCode};
use serde::{Deserialize, Serialize};

/// A stored language/currency selection, e.g. from a user account or a
/// session cookie. Either half may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSelection {
    /// Selected language code, unvalidated.
    pub language: Option<String>,
    /// Selected currency code, unvalidated.
    pub currency: Option<String>,
}

impl LocaleSelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the language code.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the currency code.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

/// Request-scoped context consumed by locale resolution.
///
/// All fields hold raw, unvalidated strings as received from the transport
/// layer; the locale resolver validates them against the catalog's active
/// languages and currencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    requested_language: Option<String>,
    requested_currency: Option<String>,
    session: Option<LocaleSelection>,
    user: Option<LocaleSelection>,
    accepted_languages: Vec<String>,
}

impl RequestContext {
    /// Creates an empty context (anonymous request, no preferences).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the explicit `lang` request parameter.
    #[must_use]
    pub fn with_requested_language(mut self, language: impl Into<String>) -> Self {
        self.requested_language = Some(language.into());
        self
    }

    /// Sets the explicit `currency` request parameter.
    #[must_use]
    pub fn with_requested_currency(mut self, currency: impl Into<String>) -> Self {
        self.requested_currency = Some(currency.into());
        self
    }

    /// Sets the session-stored selection.
    #[must_use]
    pub fn with_session(mut self, session: LocaleSelection) -> Self {
        self.session = Some(session);
        self
    }

    /// Sets the authenticated user's stored preference.
    #[must_use]
    pub fn with_user(mut self, user: LocaleSelection) -> Self {
        self.user = Some(user);
        self
    }

    /// Sets the parsed Accept-Language entries, highest priority first as
    /// sent by the client (`;q=` weights are honored during resolution).
    #[must_use]
    pub fn with_accepted_languages(mut self, languages: Vec<String>) -> Self {
        self.accepted_languages = languages;
        self
    }

    /// Returns the explicit language parameter, if any.
    #[must_use]
    pub fn requested_language(&self) -> Option<&str> {
        self.requested_language.as_deref()
    }

    /// Returns the explicit currency parameter, if any.
    #[must_use]
    pub fn requested_currency(&self) -> Option<&str> {
        self.requested_currency.as_deref()
    }

    /// Returns the session selection, if any.
    #[must_use]
    pub fn session(&self) -> Option<&LocaleSelection> {
        self.session.as_ref()
    }

    /// Returns the authenticated user's selection, if any.
    #[must_use]
    pub fn user(&self) -> Option<&LocaleSelection> {
        self.user.as_ref()
    }

    /// Returns the Accept-Language entries.
    #[must_use]
    pub fn accepted_languages(&self) -> &[String] {
        &self.accepted_languages
    }
}

/// Resolved display locale for one resolution call.
///
/// Ephemeral and request-scoped; never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalePreference {
    language: LanguageCode,
    currency: CurrencyCode,
}

impl LocalePreference {
    /// Creates a resolved locale preference.
    #[must_use]
    pub fn new(language: LanguageCode, currency: CurrencyCode) -> Self {
        Self { language, currency }
    }

    /// Returns the resolved display language.
    #[must_use]
    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    /// Returns the resolved display currency.
    #[must_use]
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }
}
