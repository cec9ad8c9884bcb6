//! # Store Entity
//!
//! A third-party store that publishes price offers.
//!
//! A store carries the attributes eligibility and ranking depend on: the
//! active flag, the set of countries it serves, and its display priority
//! (lower number = more prominent, used as the first tie-break when two
//! offers share the minimum price). Stores with an affiliate configuration
//! get their outbound links rewritten by the link builder.
//!
//! # Examples
//!
//! ```
//! use bestoffer::domain::entities::store::{AffiliateConfig, Store};
//! use bestoffer::domain::value_objects::{CountryCode, StoreId};
//!
//! let store = Store::new(StoreId::new("store-a"), "Acme")
//!     .with_priority(5)
//!     .with_supported_countries(vec![CountryCode::parse("US").unwrap()])
//!     .with_affiliate(AffiliateConfig::new(
//!         "https://track.example/?aff={AFFILIATE_CODE}&target={URL}",
//!         "acme-42",
//!     ));
//!
//! assert!(store.serves_country(&CountryCode::parse("us").unwrap()));
//! ```

use crate::domain::value_objects::{CountryCode, StoreId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Affiliate tracking configuration for a store.
///
/// The base URL is a template; the link builder substitutes
/// `{AFFILIATE_CODE}` with the store's code and `{URL}` with the
/// percent-encoded product URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateConfig {
    /// Tracking URL template.
    base_url: String,
    /// Store-specific affiliate code.
    affiliate_code: String,
}

impl AffiliateConfig {
    /// Creates a new affiliate configuration.
    #[must_use]
    pub fn new(base_url: impl Into<String>, affiliate_code: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            affiliate_code: affiliate_code.into(),
        }
    }

    /// Returns the tracking URL template.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the affiliate code.
    #[must_use]
    pub fn affiliate_code(&self) -> &str {
        &self.affiliate_code
    }
}

/// A third-party store publishing price offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Unique identifier.
    id: StoreId,
    /// Display name.
    name: String,
    /// Whether the store currently participates in resolution.
    is_active: bool,
    /// Display priority; lower = more prominent.
    priority: i32,
    /// Countries this store ships to / serves.
    supported_countries: HashSet<CountryCode>,
    /// Optional affiliate tracking configuration.
    affiliate: Option<AffiliateConfig>,
}

impl Store {
    /// Creates a new active store with no supported countries.
    #[must_use]
    pub fn new(id: StoreId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_active: true,
            priority: 0,
            supported_countries: HashSet::new(),
            affiliate: None,
        }
    }

    /// Sets the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Sets the display priority.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the supported-country set.
    #[must_use]
    pub fn with_supported_countries(
        mut self,
        countries: impl IntoIterator<Item = CountryCode>,
    ) -> Self {
        self.supported_countries = countries.into_iter().collect();
        self
    }

    /// Sets the affiliate configuration.
    #[must_use]
    pub fn with_affiliate(mut self, affiliate: AffiliateConfig) -> Self {
        self.affiliate = Some(affiliate);
        self
    }

    /// Returns the store identifier.
    #[must_use]
    pub fn id(&self) -> &StoreId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the store is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the display priority (lower = more prominent).
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the supported-country set.
    #[must_use]
    pub fn supported_countries(&self) -> &HashSet<CountryCode> {
        &self.supported_countries
    }

    /// Returns the affiliate configuration, if any.
    #[must_use]
    pub fn affiliate(&self) -> Option<&AffiliateConfig> {
        self.affiliate.as_ref()
    }

    /// Returns true if the store serves the given country.
    ///
    /// Country codes are normalized at parse time, so membership is
    /// effectively case-insensitive.
    #[must_use]
    pub fn serves_country(&self, country: &CountryCode) -> bool {
        self.supported_countries.contains(country)
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Store({} {:?} priority={})", self.id, self.name, self.priority)
    }
}
