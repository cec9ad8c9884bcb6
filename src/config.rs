//! # Engine Configuration
//!
//! Runtime settings loaded from the environment.
//!
//! Settings come from `OFFER_ENGINE_`-prefixed environment variables, with
//! a `.env` file honored in development. Every setting has a default, so an
//! empty environment yields a working configuration.
//!
//! | Variable                           | Default | Meaning                          |
//! |------------------------------------|---------|----------------------------------|
//! | `OFFER_ENGINE_RATE_REFRESH_SECS`   | `300`   | Rate snapshot refresh interval   |
//! | `OFFER_ENGINE_REQUEST_TIMEOUT_MS`  | `5000`  | Per-resolution request deadline  |

use crate::application::error::{ResolutionError, ResolutionResult};
use serde::Deserialize;
use std::time::Duration;

/// Default rate snapshot refresh interval in seconds.
const DEFAULT_RATE_REFRESH_SECS: u64 = 300;

/// Default per-resolution request deadline in milliseconds.
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Runtime configuration for the resolution engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Interval between rate snapshot refreshes, in seconds.
    rate_refresh_secs: u64,
    /// Per-resolution deadline, in milliseconds.
    request_timeout_ms: u64,
}

impl EngineConfig {
    /// Loads configuration from the environment.
    ///
    /// Reads a `.env` file if present, then `OFFER_ENGINE_*` variables;
    /// unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ResolutionError::Configuration` if a variable cannot be
    /// parsed or a value is out of range.
    pub fn from_env() -> ResolutionResult<Self> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .set_default("rate_refresh_secs", DEFAULT_RATE_REFRESH_SECS)
            .map_err(|e| ResolutionError::configuration(e.to_string()))?
            .set_default("request_timeout_ms", DEFAULT_REQUEST_TIMEOUT_MS)
            .map_err(|e| ResolutionError::configuration(e.to_string()))?
            .add_source(config::Environment::with_prefix("OFFER_ENGINE"))
            .build()
            .map_err(|e| ResolutionError::configuration(e.to_string()))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| ResolutionError::configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the rate refresh interval in seconds.
    #[must_use]
    pub fn with_rate_refresh_secs(mut self, secs: u64) -> Self {
        self.rate_refresh_secs = secs;
        self
    }

    /// Sets the request deadline in milliseconds.
    #[must_use]
    pub fn with_request_timeout_ms(mut self, millis: u64) -> Self {
        self.request_timeout_ms = millis;
        self
    }

    /// Returns the rate snapshot refresh interval.
    #[must_use]
    pub fn rate_refresh(&self) -> Duration {
        Duration::from_secs(self.rate_refresh_secs)
    }

    /// Returns the per-resolution deadline.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    fn validate(&self) -> ResolutionResult<()> {
        if self.rate_refresh_secs == 0 {
            return Err(ResolutionError::configuration(
                "rate_refresh_secs must be positive",
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(ResolutionError::configuration(
                "request_timeout_ms must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rate_refresh_secs: DEFAULT_RATE_REFRESH_SECS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}
