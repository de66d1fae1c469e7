//! Movie vs. series-episode classification from free-text titles.
//!
//! Season and episode numbers are probed independently; a title counts as a
//! genuine episode only when both extract. A title carrying exactly one of
//! the two markers is excluded from both catalog views rather than mis-filed
//! as a movie (the pipeline drops it with a debug log).

use std::sync::LazyLock;

use regex::Regex;

/// Season marker: `S01` or `Season 1` style, 1-2 digits.
static SEASON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:season[\s._-]*|s)(\d{1,2})").unwrap());

/// Episode marker: `E01` or `Episode 1` style, 1-2 digits.
static EPISODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:episode[\s._-]*|e)(\d{1,2})").unwrap());

/// Combined `SxxEyy` marker; everything from its first occurrence onward is
/// stripped when deriving the canonical series name.
static COMBINED_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)s\d{1,2}e\d{1,2}").unwrap());

/// Content classification of one title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentClass {
    /// No season or episode marker detected; treated as a movie.
    Movie,
    /// Both a season and an episode number were extracted.
    Episode {
        /// Extracted season number.
        season: u32,
        /// Extracted episode number.
        episode: u32,
    },
    /// Exactly one of the two marker types was found. Excluded from both
    /// the movie and series views.
    PartialEpisode,
}

/// Classifies a title as movie-like or episode-like.
///
/// Pure and total; 1-2 digit captures always parse, so extraction cannot
/// fail once a marker matches.
pub fn classify(name: &str) -> ContentClass {
    let season = SEASON_RE
        .captures(name)
        .and_then(|c| c[1].parse::<u32>().ok());
    let episode = EPISODE_RE
        .captures(name)
        .and_then(|c| c[1].parse::<u32>().ok());

    match (season, episode) {
        (Some(season), Some(episode)) => ContentClass::Episode { season, episode },
        (None, None) => ContentClass::Movie,
        _ => ContentClass::PartialEpisode,
    }
}

/// Derives the canonical series name used as the aggregation key.
///
/// Strips the title from the first `SxxEyy` marker onward, then trims
/// trailing whitespace and separator characters, so
/// "Show.Name.S01E01.1080p" becomes "Show.Name".
pub fn canonical_series_name(name: &str) -> String {
    let head = match COMBINED_MARKER_RE.find(name) {
        Some(m) => &name[..m.start()],
        None => name,
    };
    head.trim_end_matches(['.', ' ', '-', '_']).trim().to_string()
}
