//! Provider implementations for raw result retrieval.

use async_trait::async_trait;
use driftnet_engine::RawResult;

use crate::errors::SearchError;

pub mod demo;
pub mod mock;

pub use demo::DemoProvider;
#[cfg(test)]
pub use mock::MockProvider;

/// Trait for search providers.
///
/// Implementations return one ordered sequence of raw listings per query.
/// Real network providers, local demo data, and test mocks all share this
/// boundary; the service treats them uniformly.
#[async_trait]
pub trait SearchProvider: Send + Sync + std::fmt::Debug {
    /// Provider identifier used in logs and result `source` fields.
    fn name(&self) -> &str;

    /// Fetch raw results for a query.
    ///
    /// # Errors
    /// - `SearchError::ProviderError` - Provider-specific failure
    /// - `SearchError::SearchFailed` - Search operation failed
    async fn search(&self, query: &str) -> Result<Vec<RawResult>, SearchError>;
}
