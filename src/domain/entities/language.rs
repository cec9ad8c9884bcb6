//! # Language Entity
//!
//! A display language known to the catalog.

use crate::domain::value_objects::LanguageCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A language shoppers can view the platform in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// BCP 47 primary subtag.
    code: LanguageCode,
    /// English display name.
    name: String,
    /// Whether the language can currently be selected.
    is_active: bool,
    /// Whether this is the catalog-wide default language.
    is_default: bool,
}

impl Language {
    /// Creates a new active, non-default language.
    #[must_use]
    pub fn new(code: LanguageCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            is_active: true,
            is_default: false,
        }
    }

    /// Sets the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Marks this language as the catalog default.
    #[must_use]
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Returns the language code.
    #[must_use]
    pub fn code(&self) -> &LanguageCode {
        &self.code
    }

    /// Returns the English display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the language is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns true if this is the catalog default language.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Language({})", self.code)
    }
}
