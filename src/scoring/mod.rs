// Scoring pipeline — the core of Bluster.
//
// Data flow is strictly linear: raw text goes through the keyword matcher
// and the drama estimator independently, the aggregator combines both into
// a clamped score and category, and the dialogue selector draws a response
// line for that category. Every step except the dialogue draw is a pure
// function of the input text.

use rand::Rng;
use tracing::info;

use crate::dialogue;
use crate::models::{AnalysisMetrics, AnalysisResult, MatchedKeywords};
use crate::vocab;

pub mod danger;
pub mod drama;
pub mod keywords;

use danger::DangerWeights;

/// Analyze text with the default weights and the thread-local RNG.
pub fn analyze(text: &str) -> AnalysisResult {
    analyze_with(text, &DangerWeights::default(), &mut rand::rng())
}

/// Analyze text with explicit weights and an injectable random source.
///
/// The RNG only influences which dialogue line is chosen; score, category,
/// matched keywords, and metrics are deterministic for a given text.
pub fn analyze_with<R: Rng + ?Sized>(
    input: &str,
    weights: &DangerWeights,
    rng: &mut R,
) -> AnalysisResult {
    let text = input.trim();

    let danger_matches = keywords::match_keywords(text, vocab::DANGER_KEYWORDS);
    let noise_matches = keywords::match_keywords(text, vocab::NOISE_KEYWORDS);
    let drama_breakdown = drama::estimate(text);
    let drama_units = drama_breakdown.total_units();

    let (score, category) = danger::compute_danger_score(
        danger_matches.occurrences,
        noise_matches.occurrences,
        drama_units,
        weights,
    );

    let indices = danger::compute_display_indices(
        danger_matches.occurrences,
        noise_matches.occurrences,
        drama_units,
    );

    let chosen_dialogue = dialogue::choose(category, rng);

    info!(
        score = format!("{score:.1}"),
        category = category.as_str(),
        danger = danger_matches.occurrences,
        noise = noise_matches.occurrences,
        drama = drama_units,
        "Analyzed text"
    );

    AnalysisResult {
        score,
        category,
        matched_keywords: MatchedKeywords {
            danger: danger_matches.matched,
            noise: noise_matches.matched,
        },
        chosen_dialogue,
        metrics: AnalysisMetrics {
            danger_count: danger_matches.occurrences,
            noise_count: noise_matches.occurrences,
            drama_units,
            drama_breakdown,
            threat_index: indices.threat_index,
            noise_index: indices.noise_index,
            threat_percent: indices.threat_percent,
            noise_percent: indices.noise_percent,
        },
    }
}
