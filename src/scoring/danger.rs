// Danger score formula.
//
// The score starts from a neutral base, rises with danger keyword
// occurrences, and falls with noise keywords and drama penalty units:
//
// `score = base + danger_weight*D - noise_weight*N - drama_weight*U`
//
// clamped to [0, 100]. This module is the only place the business-rule
// constants live, so they stay independently testable and tunable.

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Scores below this are `low`; 35.0 itself belongs to `medium`.
pub const MEDIUM_SCORE_MIN: f64 = 35.0;

/// Scores at or above this are `high`; 70.0 itself belongs to `high`.
pub const HIGH_SCORE_MIN: f64 = 70.0;

/// Configurable weights for the danger score formula.
pub struct DangerWeights {
    /// Score of a text with no matches and no drama (default 30.0)
    pub base_score: f64,
    /// Added per danger keyword occurrence (default 15.0)
    pub danger_weight: f64,
    /// Subtracted per noise keyword occurrence (default 10.0)
    pub noise_weight: f64,
    /// Subtracted per drama penalty unit (default 5.0)
    pub drama_weight: f64,
}

impl Default for DangerWeights {
    fn default() -> Self {
        Self {
            base_score: 30.0,
            danger_weight: 15.0,
            noise_weight: 10.0,
            drama_weight: 5.0,
        }
    }
}

/// Compute the danger score from occurrence counts and drama units.
///
/// Returns the clamped score in [0.0, 100.0] and its category. Clamping
/// happens before categorization, so an out-of-range value can never reach
/// the threshold mapping.
pub fn compute_danger_score(
    danger_occurrences: u32,
    noise_occurrences: u32,
    drama_units: u32,
    weights: &DangerWeights,
) -> (f64, Category) {
    let raw = weights.base_score + weights.danger_weight * f64::from(danger_occurrences)
        - weights.noise_weight * f64::from(noise_occurrences)
        - weights.drama_weight * f64::from(drama_units);

    let score = raw.clamp(0.0, 100.0);
    let category = categorize(score);

    (score, category)
}

/// Map a clamped score to its category band.
pub fn categorize(score: f64) -> Category {
    match score {
        s if s >= HIGH_SCORE_MIN => Category::High,
        s if s >= MEDIUM_SCORE_MIN => Category::Medium,
        _ => Category::Low,
    }
}

/// Threat/noise split for UI display, independent of the category decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayIndices {
    pub threat_index: f64,
    pub noise_index: f64,
    pub threat_percent: f64,
    pub noise_percent: f64,
}

/// Derive the display indices from the same counts the score uses.
///
/// The denominator floors at 1 so a text with neither threat nor noise
/// yields 0/0 percentages instead of dividing by zero. That floor is a
/// required invariant, not an optimization.
pub fn compute_display_indices(
    danger_occurrences: u32,
    noise_occurrences: u32,
    drama_units: u32,
) -> DisplayIndices {
    let threat_index = f64::from(danger_occurrences);
    let noise_index = f64::from(noise_occurrences + drama_units);
    let total_index = (threat_index + noise_index).max(1.0);

    DisplayIndices {
        threat_index,
        noise_index,
        threat_percent: 100.0 * threat_index / total_index,
        noise_percent: 100.0 * noise_index / total_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_score_with_no_signals() {
        let w = DangerWeights::default();
        let (score, category) = compute_danger_score(0, 0, 0, &w);
        assert_eq!(score, 30.0);
        assert_eq!(category, Category::Medium);
    }

    #[test]
    fn two_danger_occurrences_score_sixty() {
        let w = DangerWeights::default();
        let (score, category) = compute_danger_score(2, 0, 0, &w);
        // 30 + 15*2 = 60
        assert_eq!(score, 60.0);
        assert_eq!(category, Category::Medium);
    }

    #[test]
    fn one_noise_occurrence_scores_twenty() {
        let w = DangerWeights::default();
        let (score, category) = compute_danger_score(0, 1, 0, &w);
        // 30 - 10 = 20
        assert_eq!(score, 20.0);
        assert_eq!(category, Category::Low);
    }

    #[test]
    fn drama_units_pull_the_score_down() {
        let w = DangerWeights::default();
        let (score, category) = compute_danger_score(1, 0, 1, &w);
        // 30 + 15 - 5 = 40
        assert_eq!(score, 40.0);
        assert_eq!(category, Category::Medium);
    }

    #[test]
    fn heavy_noise_clamps_to_zero() {
        let w = DangerWeights::default();
        let (score, category) = compute_danger_score(0, 10, 10, &w);
        // 30 - 100 - 50 = -120 -> clamped
        assert_eq!(score, 0.0);
        assert_eq!(category, Category::Low);
    }

    #[test]
    fn heavy_danger_clamps_to_one_hundred() {
        let w = DangerWeights::default();
        let (score, category) = compute_danger_score(20, 0, 0, &w);
        // 30 + 300 = 330 -> clamped
        assert_eq!(score, 100.0);
        assert_eq!(category, Category::High);
    }

    #[test]
    fn default_weights_match_documented_values() {
        let w = DangerWeights::default();
        assert_eq!(w.base_score, 30.0);
        assert_eq!(w.danger_weight, 15.0);
        assert_eq!(w.noise_weight, 10.0);
        assert_eq!(w.drama_weight, 5.0);
    }

    #[test]
    fn custom_weights_flow_through() {
        let w = DangerWeights {
            base_score: 50.0,
            danger_weight: 10.0,
            noise_weight: 5.0,
            drama_weight: 1.0,
        };
        let (score, _) = compute_danger_score(2, 2, 3, &w);
        // 50 + 20 - 10 - 3 = 57
        assert_eq!(score, 57.0);
    }
}
