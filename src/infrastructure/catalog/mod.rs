//! # Catalog Access
//!
//! Port definition and in-memory implementation for the external catalog.

pub mod in_memory;
pub mod traits;

pub use in_memory::InMemoryCatalog;
pub use traits::{CatalogError, CatalogReader, CatalogResult};
