//! Audio language extraction from free-text titles.
//!
//! A fixed ordered rule table of whole-word patterns; every matching rule
//! contributes its tag. Any multi-audio marker collapses the result to
//! exactly `{Multi}`, and a title with no signal yields `{Unknown}`, so the
//! returned set is never empty.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::AudioLanguage;

/// (whole-word pattern, tag) rules evaluated in order.
const LANGUAGE_PATTERNS: &[(&str, AudioLanguage)] = &[
    ("multi", AudioLanguage::Multi),
    (r"dual[\s._-]+audio", AudioLanguage::Multi),
    (r"multi[\s._-]*lang", AudioLanguage::Multi),
    (r"multi[\s._-]+language", AudioLanguage::Multi),
    ("english|eng", AudioLanguage::English),
    ("hindi|hin", AudioLanguage::Hindi),
    ("tamil", AudioLanguage::Tamil),
    ("telugu", AudioLanguage::Telugu),
    ("malayalam", AudioLanguage::Malayalam),
    ("kannada", AudioLanguage::Kannada),
    ("spanish|espanol", AudioLanguage::Spanish),
    ("french", AudioLanguage::French),
    ("german", AudioLanguage::German),
    ("italian", AudioLanguage::Italian),
    ("japanese", AudioLanguage::Japanese),
    ("korean", AudioLanguage::Korean),
];

/// Compiled rule table; patterns are anchored to word boundaries and matched
/// case-insensitively.
static LANGUAGE_RULES: LazyLock<Vec<(Regex, AudioLanguage)>> = LazyLock::new(|| {
    LANGUAGE_PATTERNS
        .iter()
        .map(|(pattern, tag)| {
            let re = Regex::new(&format!(r"(?i)\b(?:{pattern})\b"))
                .unwrap_or_else(|e| panic!("invalid language pattern '{pattern}': {e}"));
            (re, *tag)
        })
        .collect()
});

/// Extracts the set of detected audio language tags from a title.
///
/// Pure and total; the result is never empty.
pub fn extract(name: &str) -> BTreeSet<AudioLanguage> {
    let mut tags = BTreeSet::new();
    for (re, tag) in LANGUAGE_RULES.iter() {
        if re.is_match(name) {
            tags.insert(*tag);
        }
    }

    // A multi-audio marker overrides every individually detected language.
    if tags.contains(&AudioLanguage::Multi) {
        return BTreeSet::from([AudioLanguage::Multi]);
    }
    if tags.is_empty() {
        tags.insert(AudioLanguage::Unknown);
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tags: &[AudioLanguage]) -> BTreeSet<AudioLanguage> {
        tags.iter().copied().collect()
    }

    #[test]
    fn test_single_language() {
        assert_eq!(
            extract("Movie.2023.1080p.English.x264"),
            set(&[AudioLanguage::English])
        );
        assert_eq!(
            extract("Movie 2023 Hindi WEB-DL"),
            set(&[AudioLanguage::Hindi])
        );
    }

    #[test]
    fn test_multiple_languages_collected() {
        assert_eq!(
            extract("Movie.2023.Hindi.Tamil.Telugu.1080p"),
            set(&[
                AudioLanguage::Hindi,
                AudioLanguage::Tamil,
                AudioLanguage::Telugu
            ])
        );
    }

    #[test]
    fn test_multi_collapses_other_tags() {
        let result = extract("Movie 2023 dual audio english 1080p");
        assert_eq!(result, set(&[AudioLanguage::Multi]));

        let result = extract("Movie Multi-Lang Hindi English");
        assert_eq!(result, set(&[AudioLanguage::Multi]));
    }

    #[test]
    fn test_multi_marker_variants() {
        for title in [
            "Movie Multi 1080p",
            "Movie Dual Audio 720p",
            "Movie multi-lang rip",
            "Movie multi language rip",
        ] {
            assert_eq!(extract(title), set(&[AudioLanguage::Multi]), "{title}");
        }
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(extract("Movie.2023.1080p.x264"), set(&[AudioLanguage::Unknown]));
        assert_eq!(extract(""), set(&[AudioLanguage::Unknown]));
    }

    #[test]
    fn test_whole_word_matching() {
        // "multiplex" must not trigger the "multi" rule.
        assert_eq!(extract("Multiplex 2023 1080p"), set(&[AudioLanguage::Unknown]));
        // "England" must not trigger "eng".
        assert_eq!(extract("Made in England 720p"), set(&[AudioLanguage::Unknown]));
    }

    #[test]
    fn test_result_never_empty() {
        for title in ["", "x", "Movie 1080p", "Show S01E01 Multi"] {
            assert!(!extract(title).is_empty(), "{title}");
        }
    }

    #[test]
    fn test_short_code_matches() {
        assert_eq!(extract("Movie 2023 Eng 1080p"), set(&[AudioLanguage::English]));
        assert_eq!(extract("Movie 2023 Hin 720p"), set(&[AudioLanguage::Hindi]));
    }
}
