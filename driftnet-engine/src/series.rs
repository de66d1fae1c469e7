//! Series aggregation: episode-like results into per-series structures.

use std::collections::BTreeMap;

use crate::types::{EpisodeCandidate, SeriesEpisode, SeriesInfo};
use crate::{content, quality};

/// Groups episode-like results into one [`SeriesInfo`] per canonical name.
///
/// Deterministic given a fixed input order: grouping is keyed by canonical
/// name in a `BTreeMap`, so the output is sorted by series name, and a later
/// result with the same (season, episode, tier) overwrites the earlier
/// variant in that slot without affecting the episode count.
pub fn aggregate(episodes: Vec<EpisodeCandidate>) -> Vec<SeriesInfo> {
    let mut by_name: BTreeMap<String, SeriesInfo> = BTreeMap::new();

    for candidate in episodes {
        let name = content::canonical_series_name(&candidate.result.name);
        let tier = quality::classify(&candidate.result.name);

        let info = by_name
            .entry(name.clone())
            .or_insert_with(|| SeriesInfo::new(name));
        info.add_variant(SeriesEpisode {
            season: candidate.season,
            episode: candidate.episode,
            quality: tier,
            locator: candidate.result.locator,
            size: candidate.result.size,
        });
    }

    by_name.into_values().collect()
}
