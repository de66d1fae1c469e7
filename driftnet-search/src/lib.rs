//! Driftnet Search - Provider boundary and catalog orchestration

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Queries multiple search providers concurrently, degrades gracefully when
//! individual providers fail or time out, and hands the merged raw result
//! list to the classification engine to build the final catalog.

pub mod config;
pub mod errors;
pub mod providers;
pub mod service;

// Re-export main types
pub use config::SearchConfig;
pub use errors::SearchError;
pub use providers::{DemoProvider, SearchProvider};
pub use service::SearchService;

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
