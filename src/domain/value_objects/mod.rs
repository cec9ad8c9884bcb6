//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ProductId`], [`StoreId`]: opaque string-based identifiers owned by the
//!   external catalog
//!
//! ## Locale Codes
//!
//! - [`CountryCode`]: ISO 3166-1 alpha-2, normalized uppercase
//! - [`CurrencyCode`]: ISO 4217, normalized uppercase
//! - [`LanguageCode`]: BCP 47 primary subtag, normalized lowercase

pub mod codes;
pub mod ids;

pub use codes::{CountryCode, CurrencyCode, LanguageCode};
pub use ids::{ProductId, StoreId};
