//! Pipeline orchestration: merged raw results to the final catalog views.

use tracing::debug;

use crate::content::{self, ContentClass};
use crate::types::{Catalog, EpisodeCandidate, MovieCandidate, RawResult};
use crate::{audio, quality, ranking, series};

/// Builds the movie and series catalog views from one merged result list.
///
/// Synchronous and side-effect-free apart from diagnostics. The input may be
/// arbitrarily short (partial provider failure upstream just shrinks it);
/// titles carrying only one of the two season/episode markers are dropped
/// from both views.
pub fn build_catalog(results: Vec<RawResult>, query: &str) -> Catalog {
    let total = results.len();
    let mut movies = Vec::new();
    let mut episodes = Vec::new();
    let mut dropped = 0usize;

    for result in results {
        match content::classify(&result.name) {
            ContentClass::Movie => {
                let tier = quality::classify(&result.name);
                let languages = audio::extract(&result.name);
                movies.push(MovieCandidate {
                    result,
                    quality: tier,
                    languages,
                });
            }
            ContentClass::Episode { season, episode } => {
                episodes.push(EpisodeCandidate {
                    result,
                    season,
                    episode,
                });
            }
            ContentClass::PartialEpisode => {
                debug!(
                    title = %result.name,
                    "dropping title with partial season/episode marker"
                );
                dropped += 1;
            }
        }
    }

    ranking::rank(&mut movies, query);
    let movies = ranking::filter_tiers(&movies);
    let series = series::aggregate(episodes);

    debug!(
        total,
        movies = movies.len(),
        series = series.len(),
        dropped,
        "catalog built"
    );

    Catalog { movies, series }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AudioLanguage, QualityTier};

    fn raw(id: &str, name: &str) -> RawResult {
        RawResult {
            id: id.to_string(),
            name: name.to_string(),
            size: "1.0 GB".to_string(),
            source: "test".to_string(),
            locator: format!("magnet:?xt=urn:btih:{id}"),
        }
    }

    #[test]
    fn test_movie_branch_end_to_end() {
        let results = vec![
            raw("1", "Movie X 2160p BluRay"),
            raw("2", "Movie X 1080p WEB-DL"),
            raw("3", "Movie X 720p HD"),
            raw("4", "Movie X 480p SD"),
        ];
        let catalog = build_catalog(results, "Movie X");

        let names: Vec<_> = catalog
            .movies
            .iter()
            .map(|m| m.result.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["Movie X 2160p BluRay", "Movie X 1080p WEB-DL", "Movie X 720p HD"]
        );
        assert!(catalog.series.is_empty());
    }

    #[test]
    fn test_series_branch_end_to_end() {
        let results = vec![
            raw("1", "Show.Name.S01E01.1080p"),
            raw("2", "Show.Name.S01E01.720p"),
            raw("3", "Show.Name.S01E02.1080p"),
        ];
        let catalog = build_catalog(results, "Show Name");

        assert!(catalog.movies.is_empty());
        assert_eq!(catalog.series.len(), 1);
        let info = &catalog.series[0];
        assert_eq!(info.name, "Show.Name");
        assert_eq!(info.total_episodes(), 2);
        assert_eq!(info.seasons[&1][&1].len(), 2);
        assert_eq!(info.seasons[&1][&2].len(), 1);
    }

    #[test]
    fn test_partial_marker_excluded_from_both_views() {
        let catalog = build_catalog(vec![raw("1", "Show.Name.E05.1080p")], "Show Name");

        assert!(catalog.movies.is_empty());
        assert!(catalog.series.is_empty());
    }

    #[test]
    fn test_mixed_input_splits_cleanly() {
        let results = vec![
            raw("1", "Movie X 1080p English"),
            raw("2", "Show.Name.S01E01.720p"),
            raw("3", "Show.Name.S02.Complete"),
        ];
        let catalog = build_catalog(results, "Movie X");

        assert_eq!(catalog.movies.len(), 1);
        assert_eq!(catalog.movies[0].quality, QualityTier::P1080);
        assert!(catalog.movies[0]
            .languages
            .contains(&AudioLanguage::English));
        assert_eq!(catalog.series.len(), 1);
        assert_eq!(catalog.series[0].total_episodes(), 1);
    }

    #[test]
    fn test_empty_input() {
        let catalog = build_catalog(Vec::new(), "anything");
        assert!(catalog.movies.is_empty());
        assert!(catalog.series.is_empty());
    }
}
