//! # Exchange Rates
//!
//! Immutable rate snapshots and the copy-on-write cache that refreshes them.

pub mod cache;
pub mod snapshot;

pub use cache::RateCache;
pub use snapshot::{RateError, RateResult, RateSnapshot};
