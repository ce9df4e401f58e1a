// POST /analyze — score text, synthesize the dialogue, return both.
//
// The analysis itself is pure and cheap; the only await point is the TTS
// call. A synthesis failure returns 502 rather than discarding the scores,
// since the upstream endpoint is outside our control.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::models::{AnalysisMetrics, Category, MatchedKeywords};
use crate::scoring;
use crate::tts;
use crate::web::{api_error, AppState};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub dialogue: String,
    pub audio_url: String,
    pub score: f64,
    pub category: Category,
    pub matched_keywords: MatchedKeywords,
    pub metrics: AnalysisMetrics,
}

/// POST /analyze — run one analysis and narrate the result.
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let result = scoring::analyze(&body.text);

    let filename = tts::audio_filename(&result.chosen_dialogue);
    let dest = state.config.audio_dir.join(&filename);

    if let Err(e) = state.synthesizer.synthesize(&result.chosen_dialogue, &dest).await {
        error!(error = %e, "Speech synthesis failed");
        return api_error(StatusCode::BAD_GATEWAY, "Speech synthesis failed");
    }

    let audio_url = format!("{}/audio/{filename}", state.public_base);

    Json(AnalyzeResponse {
        dialogue: result.chosen_dialogue,
        audio_url,
        score: result.score,
        category: result.category,
        matched_keywords: result.matched_keywords,
        metrics: result.metrics,
    })
    .into_response()
}
