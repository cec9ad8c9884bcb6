//! # Product Entity
//!
//! A catalog product that price offers attach to.
//!
//! Products are created and mutated exclusively by the external catalog; the
//! engine only reads consistent snapshots of them during a resolution call.

use crate::domain::value_objects::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A product tracked by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    id: ProductId,
    /// Display name.
    name: String,
    /// Whether the product is visible to shoppers.
    is_active: bool,
}

impl Product {
    /// Creates a new product.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_active: true,
        }
    }

    /// Sets the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Returns the product identifier.
    #[must_use]
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the product is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product({} {:?})", self.id, self.name)
    }
}
