//! Error types for the provider boundary.

use thiserror::Error;

/// Errors that can occur while querying search providers.
///
/// None of these abort a catalog build: the service degrades a failed
/// provider to an empty result subset and keeps going.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Search operation failed with the specified query and reason.
    #[error("Search failed for query '{query}': {reason}")]
    SearchFailed {
        /// The search query that failed
        query: String,
        /// The reason for the failure
        reason: String,
    },

    /// A provider returned an error or is unavailable.
    #[error("Provider '{provider}' error: {reason}")]
    ProviderError {
        /// The provider that failed
        provider: String,
        /// The reason for the provider error
        reason: String,
    },

    /// A provider did not answer within the configured timeout.
    #[error("Provider '{provider}' timed out")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },
}
