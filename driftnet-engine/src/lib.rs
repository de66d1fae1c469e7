//! Driftnet Engine - Result classification and series aggregation

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Pure, deterministic transformations that turn a flat list of raw provider
//! results into a tier-filtered movie list and a nested season/episode/quality
//! series catalog. All classification is heuristic inference over free-text
//! titles; every function is total and degrades to sentinel values instead of
//! failing.

pub mod audio;
pub mod content;
pub mod pipeline;
pub mod quality;
pub mod ranking;
pub mod series;
pub mod types;

// Re-export main types
pub use content::ContentClass;
pub use pipeline::build_catalog;
pub use types::{
    AudioLanguage, Catalog, EpisodeCandidate, MovieCandidate, QualityTier, RawResult,
    SeriesEpisode, SeriesInfo,
};
