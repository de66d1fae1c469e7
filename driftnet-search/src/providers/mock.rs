//! Mock provider implementations for testing.

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use driftnet_engine::RawResult;

#[cfg(test)]
use super::SearchProvider;
#[cfg(test)]
use crate::errors::SearchError;

/// Scripted provider returning a fixed result list.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockProvider {
    results: Vec<RawResult>,
}

#[cfg(test)]
impl MockProvider {
    /// Creates a mock provider that returns the given results for any query.
    pub fn with_results(results: Vec<RawResult>) -> Self {
        Self { results }
    }
}

#[cfg(test)]
#[async_trait]
impl SearchProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, _query: &str) -> Result<Vec<RawResult>, SearchError> {
        Ok(self.results.clone())
    }
}

/// Provider that always fails, for degradation tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FailingProvider;

#[cfg(test)]
#[async_trait]
impl SearchProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn search(&self, query: &str) -> Result<Vec<RawResult>, SearchError> {
        Err(SearchError::SearchFailed {
            query: query.to_string(),
            reason: "scripted failure".to_string(),
        })
    }
}

/// Provider that never answers, for timeout tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct HangingProvider;

#[cfg(test)]
#[async_trait]
impl SearchProvider for HangingProvider {
    fn name(&self) -> &str {
        "hanging"
    }

    async fn search(&self, _query: &str) -> Result<Vec<RawResult>, SearchError> {
        std::future::pending().await
    }
}
