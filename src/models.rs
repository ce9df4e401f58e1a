// Data models — the records one analysis produces.
//
// These types are separate from the scoring functions so the web handlers
// and terminal output can use them without depending on the pipeline
// internals. An AnalysisResult is built once, never mutated afterwards,
// and discarded after the caller renders it.

use serde::{Deserialize, Serialize};

use crate::scoring::drama::DramaSignals;

/// Score band driving dialogue selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Low,
    Medium,
    High,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Low => "low",
            Category::Medium => "medium",
            Category::High => "high",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unique keywords that matched, split by vocabulary, in vocabulary order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedKeywords {
    pub danger: Vec<String>,
    pub noise: Vec<String>,
}

/// Auxiliary numbers for UI display. None of these feed the category
/// decision — they exist so a frontend can draw the threat/noise split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    /// Total danger keyword occurrences (not unique keywords)
    pub danger_count: u32,
    /// Total noise keyword occurrences
    pub noise_count: u32,
    /// Sum of all drama signal counts
    pub drama_units: u32,
    pub drama_breakdown: DramaSignals,
    pub threat_index: f64,
    pub noise_index: f64,
    pub threat_percent: f64,
    pub noise_percent: f64,
}

/// The complete output of one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Danger score, always within [0, 100]
    pub score: f64,
    pub category: Category,
    pub matched_keywords: MatchedKeywords,
    /// One line drawn at random from the category's dialogue pool
    pub chosen_dialogue: String,
    pub metrics: AnalysisMetrics,
}
