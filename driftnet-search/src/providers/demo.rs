//! Demo provider with deterministic local data.
//!
//! Returns a realistic quality ladder for the queried title plus a small
//! episode set, so the full catalog workflow can be exercised without any
//! network access.

use async_trait::async_trait;
use driftnet_engine::RawResult;

use super::SearchProvider;
use crate::errors::SearchError;

/// Local-data provider for development and demos.
#[derive(Debug, Default)]
pub struct DemoProvider;

impl DemoProvider {
    /// Creates a new demo provider.
    pub fn new() -> Self {
        Self
    }

    fn magnet(tag: &str, name: &str) -> String {
        format!(
            "magnet:?xt=urn:btih:demo{tag}&dn={}",
            urlencoding::encode(name)
        )
    }
}

#[async_trait]
impl SearchProvider for DemoProvider {
    fn name(&self) -> &str {
        "demo"
    }

    async fn search(&self, query: &str) -> Result<Vec<RawResult>, SearchError> {
        let dotted = query.replace(' ', ".");
        let entries = [
            (format!("{dotted}.2024.2160p.UHD.BluRay.x265"), "4.5 GB"),
            (format!("{dotted}.2024.1080p.BluRay.x264"), "1.5 GB"),
            (format!("{dotted}.2024.1080p.WEB-DL.Multi"), "1.3 GB"),
            (format!("{dotted}.2024.720p.WEB-DL.x264"), "800 MB"),
            (format!("{dotted}.2024.480p.SD"), "400 MB"),
            (format!("{dotted}.S01E01.1080p.WEB-DL"), "1.1 GB"),
            (format!("{dotted}.S01E01.720p.HDTV"), "600 MB"),
            (format!("{dotted}.S01E02.1080p.WEB-DL"), "1.1 GB"),
        ];

        let results = entries
            .into_iter()
            .enumerate()
            .map(|(index, (name, size))| RawResult {
                id: format!("demo-{index}"),
                locator: Self::magnet(&index.to_string(), &name),
                name,
                size: size.to_string(),
                source: self.name().to_string(),
            })
            .collect();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_provider_is_deterministic() {
        let provider = DemoProvider::new();
        let first = provider.search("Test Query").await.unwrap();
        let second = provider.search("Test Query").await.unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[tokio::test]
    async fn test_demo_results_carry_source_and_locator() {
        let provider = DemoProvider::new();
        let results = provider.search("Some Show").await.unwrap();

        for result in &results {
            assert_eq!(result.source, "demo");
            assert!(result.locator.starts_with("magnet:?xt=urn:btih:"));
            assert!(!result.size.is_empty());
        }
    }
}
