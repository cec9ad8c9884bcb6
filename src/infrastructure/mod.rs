//! # Infrastructure Layer
//!
//! Adapters and ports: catalog access and the exchange-rate cache.

pub mod catalog;
pub mod rates;
