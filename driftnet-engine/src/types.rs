//! Data types for the classification and aggregation engine.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One raw listing as returned by a search provider.
///
/// The `name` field is the sole input to all classifiers; `size` and
/// `locator` are opaque to the engine and passed through to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResult {
    /// Identifier, stable within one provider response (not globally unique).
    pub id: String,
    /// Free-text title.
    pub name: String,
    /// Human-readable size string, passed through unmodified.
    pub size: String,
    /// Provider identifier.
    pub source: String,
    /// Opaque retrieval handle (magnet URI, download URL, ...).
    pub locator: String,
}

/// Quality tier inferred from a title.
///
/// Ordered roughly worst-to-best so the enum can key ordered maps; ranking
/// uses [`QualityTier::rank`], which is not injective (BluRay ties 1080p,
/// WEB-DL ties 720p).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum QualityTier {
    /// No quality signal detected in the title.
    Unknown,
    /// Standard definition (480p / "SD").
    P480,
    /// 720p or generic "HD".
    P720,
    /// WEB-DL source without an explicit resolution.
    WebDl,
    /// 1080p / "FHD".
    P1080,
    /// BluRay source without an explicit resolution.
    BluRay,
    /// 2160p / 4K / UHD.
    FourK,
}

impl QualityTier {
    /// Numeric rank for sorting; higher is better.
    pub fn rank(self) -> u8 {
        match self {
            QualityTier::FourK => 5,
            QualityTier::P1080 | QualityTier::BluRay => 4,
            QualityTier::P720 | QualityTier::WebDl => 3,
            QualityTier::P480 => 2,
            QualityTier::Unknown => 0,
        }
    }

    /// Display label for the tier.
    pub fn label(self) -> &'static str {
        match self {
            QualityTier::FourK => "4K",
            QualityTier::P1080 => "1080p",
            QualityTier::P720 => "720p",
            QualityTier::P480 => "480p",
            QualityTier::BluRay => "BluRay",
            QualityTier::WebDl => "WEB-DL",
            QualityTier::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Spoken-language tag inferred from a title.
///
/// `Multi` is synthetic: any multi-audio marker collapses the whole detected
/// set to `{Multi}`. `Unknown` is the sentinel for "no signal detected".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AudioLanguage {
    /// Multi-audio release ("multi", "dual audio", ...). Exclusive tag.
    Multi,
    /// English audio.
    English,
    /// Hindi audio.
    Hindi,
    /// Tamil audio.
    Tamil,
    /// Telugu audio.
    Telugu,
    /// Malayalam audio.
    Malayalam,
    /// Kannada audio.
    Kannada,
    /// Spanish audio.
    Spanish,
    /// French audio.
    French,
    /// German audio.
    German,
    /// Italian audio.
    Italian,
    /// Japanese audio.
    Japanese,
    /// Korean audio.
    Korean,
    /// No language signal detected in the title.
    Unknown,
}

impl std::fmt::Display for AudioLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AudioLanguage::Multi => "Multi",
            AudioLanguage::English => "English",
            AudioLanguage::Hindi => "Hindi",
            AudioLanguage::Tamil => "Tamil",
            AudioLanguage::Telugu => "Telugu",
            AudioLanguage::Malayalam => "Malayalam",
            AudioLanguage::Kannada => "Kannada",
            AudioLanguage::Spanish => "Spanish",
            AudioLanguage::French => "French",
            AudioLanguage::German => "German",
            AudioLanguage::Italian => "Italian",
            AudioLanguage::Japanese => "Japanese",
            AudioLanguage::Korean => "Korean",
            AudioLanguage::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// One quality-variant of one (season, episode) pair within a series.
///
/// Owned exclusively by the [`SeriesInfo`] that contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesEpisode {
    /// Season number extracted from the title.
    pub season: u32,
    /// Episode number extracted from the title.
    pub episode: u32,
    /// Quality tier of this variant.
    pub quality: QualityTier,
    /// Retrieval handle carried over from the raw result.
    pub locator: String,
    /// Size string carried over from the raw result.
    pub size: String,
}

/// Aggregate for one canonical series name.
///
/// Built additively within a single pipeline run and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesInfo {
    /// Canonical series title (episode markers stripped).
    pub name: String,
    /// season -> episode -> quality tier -> variant.
    pub seasons: BTreeMap<u32, BTreeMap<u32, BTreeMap<QualityTier, SeriesEpisode>>>,
    /// Quality tiers observed anywhere in the series.
    pub qualities: BTreeSet<QualityTier>,
}

impl SeriesInfo {
    /// Creates an empty aggregate for the given canonical name.
    pub fn new(name: String) -> Self {
        Self {
            name,
            seasons: BTreeMap::new(),
            qualities: BTreeSet::new(),
        }
    }

    /// Inserts one quality-variant, overwriting an earlier variant that
    /// carries the same (season, episode, tier) key.
    pub fn add_variant(&mut self, variant: SeriesEpisode) {
        self.qualities.insert(variant.quality);
        self.seasons
            .entry(variant.season)
            .or_default()
            .entry(variant.episode)
            .or_default()
            .insert(variant.quality, variant);
    }

    /// Count of distinct (season, episode) pairs with at least one variant.
    ///
    /// Derived from key presence on every call, never from a stored counter,
    /// so inserting extra quality variants for a seen pair cannot drift it.
    pub fn total_episodes(&self) -> usize {
        self.seasons.values().map(BTreeMap::len).sum()
    }
}

/// A movie-like raw result annotated with its inferred quality and languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCandidate {
    /// The underlying raw listing.
    pub result: RawResult,
    /// Quality tier inferred from the title.
    pub quality: QualityTier,
    /// Audio languages inferred from the title; never empty.
    pub languages: BTreeSet<AudioLanguage>,
}

/// An episode-like raw result with its extracted season/episode position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeCandidate {
    /// The underlying raw listing.
    pub result: RawResult,
    /// Season number extracted from the title.
    pub season: u32,
    /// Episode number extracted from the title.
    pub episode: u32,
}

/// Final pipeline output: the two catalog views handed to presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Tier-filtered movie list, at most one entry per qualifying tier in
    /// fixed 4K / 1080p / 720p order.
    pub movies: Vec<MovieCandidate>,
    /// Series aggregates, sorted by canonical name.
    pub series: Vec<SeriesInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_rank_ordering() {
        assert!(QualityTier::FourK.rank() > QualityTier::P1080.rank());
        assert_eq!(QualityTier::P1080.rank(), QualityTier::BluRay.rank());
        assert_eq!(QualityTier::P720.rank(), QualityTier::WebDl.rank());
        assert_eq!(QualityTier::Unknown.rank(), 0);
    }

    #[test]
    fn test_series_info_variant_overwrite_keeps_episode_count() {
        let mut info = SeriesInfo::new("Show".to_string());
        let variant = SeriesEpisode {
            season: 1,
            episode: 1,
            quality: QualityTier::P1080,
            locator: "magnet:?xt=urn:btih:aaa".to_string(),
            size: "1.2 GB".to_string(),
        };
        info.add_variant(variant.clone());
        info.add_variant(SeriesEpisode {
            locator: "magnet:?xt=urn:btih:bbb".to_string(),
            ..variant
        });

        assert_eq!(info.total_episodes(), 1);
        let slot = &info.seasons[&1][&1][&QualityTier::P1080];
        assert_eq!(slot.locator, "magnet:?xt=urn:btih:bbb");
    }

    #[test]
    fn test_series_info_distinct_pairs_counted_across_seasons() {
        let mut info = SeriesInfo::new("Show".to_string());
        for (season, episode) in [(1, 1), (1, 2), (2, 1)] {
            info.add_variant(SeriesEpisode {
                season,
                episode,
                quality: QualityTier::P720,
                locator: String::new(),
                size: String::new(),
            });
        }
        assert_eq!(info.total_episodes(), 3);
        assert_eq!(info.qualities.len(), 1);
    }

    #[test]
    fn test_quality_tier_serializes_as_variant_name() {
        let json = serde_json::to_string(&QualityTier::FourK).unwrap();
        assert_eq!(json, "\"FourK\"");
        assert_eq!(QualityTier::FourK.to_string(), "4K");
    }
}
