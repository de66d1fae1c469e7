//! Configuration for the provider fan-out.
//!
//! Tunable parameters live here instead of being scattered through the
//! service code.

use std::time::Duration;

/// Settings governing concurrent provider queries.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Per-provider answer deadline; slower providers are dropped for the run
    pub provider_timeout: Duration,
    /// Cap applied to each provider's result list before merging
    pub max_results_per_provider: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(10),
            max_results_per_provider: 50,
        }
    }
}
