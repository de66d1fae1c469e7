//! Quality tier classification from free-text titles.
//!
//! Precedence lives in the rule table, not in control flow: resolution
//! tokens come before source tokens so "1080p BluRay" resolves to 1080p,
//! regardless of token position inside the title.

use crate::types::QualityTier;

/// Ordered classification rules; first matching row wins.
const TIER_RULES: &[(&[&str], QualityTier)] = &[
    (&["2160p", "4k", "uhd"], QualityTier::FourK),
    (&["1080p", "fhd"], QualityTier::P1080),
    (&["720p", "hd"], QualityTier::P720),
    (&["480p", "sd"], QualityTier::P480),
    (&["bluray", "blu-ray"], QualityTier::BluRay),
    (&["web-dl", "webdl"], QualityTier::WebDl),
];

/// Classifies a title into a quality tier.
///
/// Pure and total: any input, including the empty string, yields a tier;
/// titles without a recognized token map to [`QualityTier::Unknown`].
pub fn classify(name: &str) -> QualityTier {
    let lowered = name.to_lowercase();
    for (tokens, tier) in TIER_RULES {
        if tokens.iter().any(|token| lowered.contains(token)) {
            return *tier;
        }
    }
    QualityTier::Unknown
}
