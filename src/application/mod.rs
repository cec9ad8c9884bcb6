//! # Application Layer
//!
//! Request-scoped use cases over the domain: locale resolution,
//! eligibility filtering, ranking, link building, and the orchestrating
//! resolution service. All state lives in the catalog and the rate cache;
//! the services here are stateless and side-effect free apart from
//! tracing.

pub mod context;
pub mod error;
pub mod services;

pub use context::{LocalePreference, LocaleSelection, RequestContext};
pub use error::{ResolutionError, ResolutionResult};
