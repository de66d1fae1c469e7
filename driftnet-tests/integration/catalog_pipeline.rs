//! End-to-end catalog construction from a merged raw result list.

use driftnet_engine::{AudioLanguage, QualityTier, RawResult, build_catalog};

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
fn test_movie_ladder_filters_to_one_per_tier() {
    let results = vec![
        raw("1", "Movie X 2160p BluRay"),
        raw("2", "Movie X 1080p WEB-DL"),
        raw("3", "Movie X 720p HD"),
        raw("4", "Movie X 480p SD"),
    ];
    let catalog = build_catalog(results, "Movie X");

    let view: Vec<_> = catalog
        .movies
        .iter()
        .map(|m| (m.result.name.as_str(), m.quality))
        .collect();
    assert_eq!(
        view,
        [
            ("Movie X 2160p BluRay", QualityTier::FourK),
            ("Movie X 1080p WEB-DL", QualityTier::P1080),
            ("Movie X 720p HD", QualityTier::P720),
        ]
    );
}

#[test]
fn test_series_nesting_and_episode_count() {
    let results = vec![
        raw("1", "Show.Name.S01E01.1080p"),
        raw("2", "Show.Name.S01E01.720p"),
        raw("3", "Show.Name.S01E02.1080p"),
    ];
    let catalog = build_catalog(results, "Show Name");

    assert_eq!(catalog.series.len(), 1);
    let info = &catalog.series[0];
    assert_eq!(info.name, "Show.Name");
    assert_eq!(info.total_episodes(), 2);

    let season_one = &info.seasons[&1];
    assert_eq!(season_one[&1].len(), 2);
    assert!(season_one[&1].contains_key(&QualityTier::P1080));
    assert!(season_one[&1].contains_key(&QualityTier::P720));
    assert_eq!(season_one[&2].len(), 1);
    assert_eq!(
        info.qualities,
        [QualityTier::P720, QualityTier::P1080].into_iter().collect()
    );
}

#[test]
fn test_partial_marker_title_reaches_no_view() {
    let catalog = build_catalog(vec![raw("1", "Show.Name.E05.1080p")], "Show Name");
    assert!(catalog.movies.is_empty());
    assert!(catalog.series.is_empty());
}

#[test]
fn test_dual_audio_collapses_language_set() {
    let catalog = build_catalog(
        vec![raw("1", "Movie X 1080p dual audio english")],
        "Movie X",
    );

    assert_eq!(catalog.movies.len(), 1);
    assert_eq!(
        catalog.movies[0].languages,
        [AudioLanguage::Multi].into_iter().collect()
    );
}

#[test]
fn test_mixed_multi_provider_listing() {
    // Simulates the merged output of several providers, including overlap.
    let results = vec![
        raw("a1", "Movie X 2160p UHD BluRay"),
        raw("a2", "Show.Name.S01E01.1080p.WEB-DL"),
        raw("b1", "Movie X 1080p BluRay Hindi English"),
        raw("b2", "Show.Name.S01E01.1080p.WEB-DL"),
        raw("b3", "Other.Show.S03E09.720p"),
        raw("c1", "Movie X Season pack S05"),
    ];
    let catalog = build_catalog(results, "Movie X");

    assert_eq!(catalog.movies.len(), 2);
    assert_eq!(catalog.movies[0].quality, QualityTier::FourK);
    assert_eq!(catalog.movies[1].quality, QualityTier::P1080);
    assert_eq!(
        catalog.movies[1].languages,
        [AudioLanguage::English, AudioLanguage::Hindi]
            .into_iter()
            .collect()
    );

    assert_eq!(catalog.series.len(), 2);
    assert_eq!(catalog.series[0].name, "Other.Show");
    assert_eq!(catalog.series[1].name, "Show.Name");
    // Duplicate (season, episode, tier) from the second provider overwrote
    // the first variant rather than adding an episode.
    assert_eq!(catalog.series[1].total_episodes(), 1);
}

#[test]
fn test_catalog_serializes_for_presentation() {
    let catalog = build_catalog(
        vec![raw("1", "Movie X 1080p"), raw("2", "Show.S01E01.720p")],
        "Movie X",
    );
    let json = serde_json::to_string(&catalog).unwrap();
    assert!(json.contains("\"movies\""));
    assert!(json.contains("\"series\""));
}
