//! # Application Services
//!
//! The resolution pipeline, one service per stage:
//!
//! - [`locale_resolver`]: effective display language/currency
//! - [`eligibility`]: offers purchasable in the requested country
//! - [`ranking`]: best-offer selection with deterministic tie-breaks
//! - [`affiliate`]: outbound tracking-URL construction
//! - [`pricing`]: display formatting and price statistics
//! - [`resolution`]: end-to-end orchestration

pub mod affiliate;
pub mod eligibility;
pub mod locale_resolver;
pub mod pricing;
pub mod ranking;
pub mod resolution;

pub use affiliate::AffiliateLinkBuilder;
pub use eligibility::{CandidateOffer, EligibilityFilter};
pub use locale_resolver::LocaleResolver;
pub use pricing::PriceFormatter;
pub use ranking::PriceRankingEngine;
pub use resolution::{BestOffer, OfferComparison, PriceResolutionService};
