//! Provider fan-out behavior: merging, failure degradation, timeouts.

use std::time::Duration;

use async_trait::async_trait;
use driftnet_engine::{QualityTier, RawResult};
use driftnet_search::{SearchConfig, SearchError, SearchProvider, SearchService};

/// Opt-in log capture for debugging these tests (`RUST_LOG` controlled).
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn raw(id: &str, source: &str, name: &str) -> RawResult {
    RawResult {
        id: id.to_string(),
        name: name.to_string(),
        size: "1.0 GB".to_string(),
        source: source.to_string(),
        locator: format!("magnet:?xt=urn:btih:{source}-{id}"),
    }
}

#[derive(Debug)]
struct ScriptedProvider {
    name: &'static str,
    results: Vec<RawResult>,
}

#[async_trait]
impl SearchProvider for ScriptedProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn search(&self, _query: &str) -> Result<Vec<RawResult>, SearchError> {
        Ok(self.results.clone())
    }
}

#[derive(Debug)]
struct BrokenProvider;

#[async_trait]
impl SearchProvider for BrokenProvider {
    fn name(&self) -> &str {
        "broken"
    }

    async fn search(&self, query: &str) -> Result<Vec<RawResult>, SearchError> {
        Err(SearchError::ProviderError {
            provider: "broken".to_string(),
            reason: format!("refused query '{query}'"),
        })
    }
}

#[derive(Debug)]
struct StalledProvider;

#[async_trait]
impl SearchProvider for StalledProvider {
    fn name(&self) -> &str {
        "stalled"
    }

    async fn search(&self, _query: &str) -> Result<Vec<RawResult>, SearchError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn test_results_from_all_providers_are_merged() {
    let mut service = SearchService::new(SearchConfig::default());
    service.add_provider(Box::new(ScriptedProvider {
        name: "alpha",
        results: vec![raw("1", "alpha", "Movie X 2160p")],
    }));
    service.add_provider(Box::new(ScriptedProvider {
        name: "beta",
        results: vec![
            raw("1", "beta", "Movie X 1080p"),
            raw("2", "beta", "Show.S01E01.720p"),
        ],
    }));

    let catalog = service.search("Movie X").await;

    assert_eq!(catalog.movies.len(), 2);
    assert_eq!(catalog.movies[0].result.source, "alpha");
    assert_eq!(catalog.movies[1].result.source, "beta");
    assert_eq!(catalog.series.len(), 1);
}

#[tokio::test]
async fn test_one_broken_provider_does_not_abort_the_run() {
    init_tracing();
    let mut service = SearchService::new(SearchConfig::default());
    service.add_provider(Box::new(BrokenProvider));
    service.add_provider(Box::new(ScriptedProvider {
        name: "alpha",
        results: vec![raw("1", "alpha", "Movie X 720p")],
    }));

    let catalog = service.search("Movie X").await;

    assert_eq!(catalog.movies.len(), 1);
    assert_eq!(catalog.movies[0].quality, QualityTier::P720);
}

#[tokio::test]
async fn test_stalled_provider_is_cut_off_by_timeout() {
    init_tracing();
    let config = SearchConfig {
        provider_timeout: Duration::from_millis(50),
        ..SearchConfig::default()
    };
    let mut service = SearchService::new(config);
    service.add_provider(Box::new(StalledProvider));
    service.add_provider(Box::new(ScriptedProvider {
        name: "alpha",
        results: vec![raw("1", "alpha", "Movie X 1080p")],
    }));

    let catalog = service.search("Movie X").await;

    assert_eq!(catalog.movies.len(), 1);
}

#[tokio::test]
async fn test_no_providers_yields_empty_catalog() {
    let service = SearchService::new(SearchConfig::default());
    let catalog = service.search("Movie X").await;

    assert!(catalog.movies.is_empty());
    assert!(catalog.series.is_empty());
}

#[tokio::test]
async fn test_engine_tolerates_short_merged_list() {
    // Two of three providers degraded; the remaining subset still classifies.
    let mut service = SearchService::new(SearchConfig {
        provider_timeout: Duration::from_millis(50),
        ..SearchConfig::default()
    });
    service.add_provider(Box::new(BrokenProvider));
    service.add_provider(Box::new(StalledProvider));
    service.add_provider(Box::new(ScriptedProvider {
        name: "gamma",
        results: vec![raw("1", "gamma", "Show.Name.S02E04.1080p")],
    }));

    let catalog = service.search("Show Name").await;

    assert!(catalog.movies.is_empty());
    assert_eq!(catalog.series.len(), 1);
    assert_eq!(catalog.series[0].seasons[&2][&4].len(), 1);
}
