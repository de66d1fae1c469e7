//! Property tests for the classification engine.
//!
//! These verify the engine's contract-level guarantees over generated
//! inputs: totality, determinism, the Multi collapse, ranking order laws,
//! and the derived episode-count invariant.

use std::collections::{BTreeSet, HashSet};

use driftnet_engine::{
    AudioLanguage, EpisodeCandidate, MovieCandidate, QualityTier, RawResult, audio, quality,
    ranking, series,
};
use proptest::prelude::*;

fn raw(name: &str) -> RawResult {
    RawResult {
        id: "p".to_string(),
        name: name.to_string(),
        size: "1.0 GB".to_string(),
        source: "prop".to_string(),
        locator: "magnet:?xt=urn:btih:prop".to_string(),
    }
}

fn tier_strategy() -> impl Strategy<Value = QualityTier> {
    prop_oneof![
        Just(QualityTier::FourK),
        Just(QualityTier::P1080),
        Just(QualityTier::P720),
        Just(QualityTier::P480),
        Just(QualityTier::BluRay),
        Just(QualityTier::WebDl),
        Just(QualityTier::Unknown),
    ]
}

fn movie_strategy() -> impl Strategy<Value = MovieCandidate> {
    ("[A-Za-z0-9 .]{0,30}", tier_strategy()).prop_map(|(name, tier)| MovieCandidate {
        result: raw(&name),
        quality: tier,
        languages: BTreeSet::from([AudioLanguage::Unknown]),
    })
}

proptest! {
    #[test]
    fn prop_quality_classification_is_total_and_deterministic(title in ".*") {
        let first = quality::classify(&title);
        let second = quality::classify(&title);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_language_set_is_never_empty(title in ".*") {
        prop_assert!(!audio::extract(&title).is_empty());
    }

    #[test]
    fn prop_multi_is_exclusive(title in ".*") {
        let tags = audio::extract(&title);
        if tags.contains(&AudioLanguage::Multi) {
            prop_assert_eq!(tags.len(), 1);
        }
    }

    #[test]
    fn prop_rank_is_a_permutation(
        mut movies in proptest::collection::vec(movie_strategy(), 0..20),
        query in "[A-Za-z ]{0,15}",
    ) {
        let mut before: Vec<String> =
            movies.iter().map(|m| m.result.name.clone()).collect();
        ranking::rank(&mut movies, &query);
        let mut after: Vec<String> =
            movies.iter().map(|m| m.result.name.clone()).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_rank_is_idempotent(
        mut movies in proptest::collection::vec(movie_strategy(), 0..20),
        query in "[A-Za-z ]{0,15}",
    ) {
        ranking::rank(&mut movies, &query);
        let once = movies.clone();
        ranking::rank(&mut movies, &query);
        prop_assert_eq!(movies, once);
    }

    #[test]
    fn prop_rank_orders_by_quality_rank(
        mut movies in proptest::collection::vec(movie_strategy(), 0..20),
        query in "[A-Za-z ]{0,15}",
    ) {
        ranking::rank(&mut movies, &query);
        for pair in movies.windows(2) {
            prop_assert!(pair[0].quality.rank() >= pair[1].quality.rank());
        }
    }

    #[test]
    fn prop_tier_filter_emits_at_most_one_per_tier(
        mut movies in proptest::collection::vec(movie_strategy(), 0..20),
    ) {
        ranking::rank(&mut movies, "query");
        let filtered = ranking::filter_tiers(&movies);

        prop_assert!(filtered.len() <= 3);
        let tiers: Vec<QualityTier> = filtered.iter().map(|m| m.quality).collect();
        let distinct: HashSet<_> = tiers.iter().copied().collect();
        prop_assert_eq!(distinct.len(), tiers.len());

        let input_tiers: HashSet<QualityTier> = movies.iter().map(|m| m.quality).collect();
        for tier in &tiers {
            prop_assert!(input_tiers.contains(tier));
        }
    }

    #[test]
    fn prop_total_episodes_counts_distinct_pairs(
        entries in proptest::collection::vec(
            (1u32..=20, 1u32..=50, prop_oneof![Just("1080p"), Just("720p"), Just("2160p")]),
            0..40,
        ),
    ) {
        let candidates: Vec<EpisodeCandidate> = entries
            .iter()
            .map(|(season, episode, tier)| EpisodeCandidate {
                result: raw(&format!("Show.S{season:02}E{episode:02}.{tier}")),
                season: *season,
                episode: *episode,
            })
            .collect();
        let distinct: HashSet<(u32, u32)> =
            entries.iter().map(|(s, e, _)| (*s, *e)).collect();

        let aggregated = series::aggregate(candidates);
        let total: usize = aggregated.iter().map(|info| info.total_episodes()).sum();
        prop_assert_eq!(total, distinct.len());
    }
}
