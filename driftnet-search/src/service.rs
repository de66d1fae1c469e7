//! Concurrent provider fan-out and catalog assembly.

use driftnet_engine::{Catalog, RawResult, build_catalog};
use futures::future::join_all;
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::providers::SearchProvider;

/// Search service querying every registered provider concurrently.
///
/// A provider that fails or exceeds the configured timeout contributes an
/// empty result subset for that run; the catalog is always built from
/// whatever the remaining providers returned.
#[derive(Debug)]
pub struct SearchService {
    providers: Vec<Box<dyn SearchProvider>>,
    config: SearchConfig,
}

impl SearchService {
    /// Creates a service with no providers registered.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            providers: Vec::new(),
            config,
        }
    }

    /// Creates a service backed by the local demo provider.
    pub fn new_demo() -> Self {
        let mut service = Self::new(SearchConfig::default());
        service.add_provider(Box::new(crate::providers::DemoProvider::new()));
        service
    }

    /// Registers a provider. Merge order follows registration order.
    pub fn add_provider(&mut self, provider: Box<dyn SearchProvider>) {
        self.providers.push(provider);
    }

    /// Number of registered providers.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Queries all providers concurrently and builds the catalog views.
    ///
    /// Never fails: provider errors and timeouts degrade to empty subsets.
    pub async fn search(&self, query: &str) -> Catalog {
        let merged = self.fetch_merged(query).await;
        debug!(query, merged = merged.len(), "building catalog");
        build_catalog(merged, query)
    }

    /// Fetches from every provider with per-provider timeout and merges the
    /// subsets in registration order.
    async fn fetch_merged(&self, query: &str) -> Vec<RawResult> {
        let fetches = self.providers.iter().map(|provider| {
            let timeout = self.config.provider_timeout;
            let cap = self.config.max_results_per_provider;
            async move {
                match tokio::time::timeout(timeout, provider.search(query)).await {
                    Ok(Ok(mut results)) => {
                        results.truncate(cap);
                        debug!(
                            provider = provider.name(),
                            count = results.len(),
                            "provider answered"
                        );
                        results
                    }
                    Ok(Err(error)) => {
                        warn!(
                            provider = provider.name(),
                            %error,
                            "provider failed, continuing without it"
                        );
                        Vec::new()
                    }
                    Err(_) => {
                        warn!(
                            provider = provider.name(),
                            timeout_secs = timeout.as_secs(),
                            "provider timed out, continuing without it"
                        );
                        Vec::new()
                    }
                }
            }
        });

        join_all(fetches).await.into_iter().flatten().collect()
    }
}
