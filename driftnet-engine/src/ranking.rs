//! Ranking and tier filtering for the movie view.

use std::cmp::Reverse;

use crate::types::{MovieCandidate, QualityTier};

/// Tiers eligible for the movie view, in fixed output order.
pub const MOVIE_TIERS: [QualityTier; 3] =
    [QualityTier::FourK, QualityTier::P1080, QualityTier::P720];

/// Sorts movie candidates into the catalog's total order, in place.
///
/// Priority: higher quality rank first, then exact case-insensitive title
/// match against the original query, then byte-wise (locale-independent)
/// order of the title. The sort is a permutation of its input and
/// idempotent: ranking an already-ranked list leaves it unchanged.
pub fn rank(movies: &mut [MovieCandidate], query: &str) {
    movies.sort_by_key(|m| {
        (
            Reverse(m.quality.rank()),
            !m.result.name.eq_ignore_ascii_case(query),
            m.result.name.clone(),
        )
    });
}

/// Reduces a ranked movie list to at most one representative per tier.
///
/// Only 4K, 1080p, and 720p survive; each contributes its first
/// (highest-ranked) candidate, emitted in fixed 4K, 1080p, 720p order.
/// Every other tier is dropped from the movie view entirely.
pub fn filter_tiers(ranked: &[MovieCandidate]) -> Vec<MovieCandidate> {
    MOVIE_TIERS
        .iter()
        .filter_map(|tier| ranked.iter().find(|m| m.quality == *tier).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::types::{AudioLanguage, RawResult};

    fn movie(name: &str, quality: QualityTier) -> MovieCandidate {
        MovieCandidate {
            result: RawResult {
                id: format!("id-{name}"),
                name: name.to_string(),
                size: "1.0 GB".to_string(),
                source: "test".to_string(),
                locator: format!("magnet:?xt=urn:btih:{name}"),
            },
            quality,
            languages: BTreeSet::from([AudioLanguage::Unknown]),
        }
    }

    #[test]
    fn test_higher_quality_sorts_first() {
        let mut movies = vec![
            movie("B 720p", QualityTier::P720),
            movie("A 2160p", QualityTier::FourK),
            movie("C 1080p", QualityTier::P1080),
        ];
        rank(&mut movies, "query");

        let names: Vec<_> = movies.iter().map(|m| m.result.name.as_str()).collect();
        assert_eq!(names, ["A 2160p", "C 1080p", "B 720p"]);
    }

    #[test]
    fn test_exact_query_match_breaks_quality_ties() {
        let mut movies = vec![
            movie("Another Film", QualityTier::P1080),
            movie("Movie X", QualityTier::P1080),
        ];
        rank(&mut movies, "movie x");

        assert_eq!(movies[0].result.name, "Movie X");
    }

    #[test]
    fn test_lexical_fallback() {
        let mut movies = vec![
            movie("Zeta", QualityTier::P720),
            movie("Alpha", QualityTier::P720),
            movie("Mid", QualityTier::P720),
        ];
        rank(&mut movies, "none of these");

        let names: Vec<_> = movies.iter().map(|m| m.result.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn test_rank_is_permutation_and_idempotent() {
        let mut movies = vec![
            movie("C", QualityTier::P720),
            movie("A", QualityTier::FourK),
            movie("B", QualityTier::Unknown),
            movie("D", QualityTier::FourK),
        ];
        let before_len = movies.len();
        rank(&mut movies, "A");
        assert_eq!(movies.len(), before_len);

        let once = movies.clone();
        rank(&mut movies, "A");
        assert_eq!(movies, once);
    }

    #[test]
    fn test_filter_keeps_first_per_tier_in_fixed_order() {
        let mut movies = vec![
            movie("Movie X 480p SD", QualityTier::P480),
            movie("Movie X 2160p BluRay", QualityTier::FourK),
            movie("Movie X 1080p WEB-DL", QualityTier::P1080),
            movie("Movie X 720p HD", QualityTier::P720),
        ];
        rank(&mut movies, "Movie X");
        let filtered = filter_tiers(&movies);

        let names: Vec<_> = filtered.iter().map(|m| m.result.name.as_str()).collect();
        assert_eq!(
            names,
            ["Movie X 2160p BluRay", "Movie X 1080p WEB-DL", "Movie X 720p HD"]
        );
    }

    #[test]
    fn test_filter_drops_ineligible_tiers() {
        let movies = vec![
            movie("A", QualityTier::BluRay),
            movie("B", QualityTier::WebDl),
            movie("C", QualityTier::P480),
            movie("D", QualityTier::Unknown),
        ];
        assert!(filter_tiers(&movies).is_empty());
    }

    #[test]
    fn test_filter_emits_at_most_one_per_tier() {
        let mut movies = vec![
            movie("A 1080p", QualityTier::P1080),
            movie("B 1080p", QualityTier::P1080),
            movie("C 1080p", QualityTier::P1080),
        ];
        rank(&mut movies, "A 1080p");
        let filtered = filter_tiers(&movies);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].result.name, "A 1080p");
    }

    #[test]
    fn test_filter_never_invents_tiers() {
        let movies = vec![movie("Only 720p", QualityTier::P720)];
        let filtered = filter_tiers(&movies);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].quality, QualityTier::P720);
    }
}
