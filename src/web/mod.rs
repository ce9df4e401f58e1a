// Web server — Axum-based API around the scoring pipeline.
//
// POST /analyze scores the text, synthesizes the chosen dialogue to an mp3,
// and returns both. Generated files are served back under /audio. CORS is
// wide open so the browser overlay can call the API from any site.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::tts::SpeechSynthesizer;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    /// Base URL prepended to /audio paths in API responses
    pub public_base: String,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    config: Config,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    port: u16,
    bind: &str,
) -> Result<()> {
    tokio::fs::create_dir_all(&config.audio_dir).await?;

    let addr = format!("{bind}:{port}");
    let public_base = config
        .public_url
        .clone()
        .unwrap_or_else(|| format!("http://{addr}"));

    let state = AppState {
        config: Arc::new(config),
        synthesizer,
        public_base,
    };

    let app = build_router(state);

    info!("Bluster API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Public so tests can drive it with `tower::oneshot`.
pub fn build_router(state: AppState) -> Router {
    let audio_dir = state.config.audio_dir.clone();

    Router::new()
        .route("/analyze", post(handlers::analyze::analyze_text))
        .route("/health", get(health))
        .nest_service("/audio", ServeDir::new(audio_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
