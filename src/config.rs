//! Bootstrap configuration — explicit and injected, never ambient.

use crate::experiments::ExperimentSet;

pub const DEFAULT_API_BASE: &str = "https://public-api.wordpress.com";

/// Configuration for [`crate::BootstrapClient`].
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// HMAC signing key for the cookie auth path.
    pub api_key: String,
    /// Remote API origin, without a trailing slash.
    pub api_base: String,
    /// Experiments whose names are forwarded on the bootstrap URL.
    pub experiments: ExperimentSet,
}

impl BootstrapConfig {
    /// Build a config with the default API base and no experiments.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            experiments: ExperimentSet::default(),
        }
    }

    /// Load from `WPCOM_CALYPSO_REST_API_KEY` and optional `WPCOM_API_BASE`.
    /// Returns `None` if the key is missing (bootstrap will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("WPCOM_CALYPSO_REST_API_KEY").ok()?;
        let api_base = std::env::var("WPCOM_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        Some(Self { api_key, api_base, experiments: ExperimentSet::default() })
    }

    /// Replace the experiment set forwarded on the bootstrap URL.
    #[must_use]
    pub fn with_experiments(mut self, experiments: ExperimentSet) -> Self {
        self.experiments = experiments;
        self
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
