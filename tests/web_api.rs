#![cfg(feature = "web")]

// Router round-trips driven with tower::oneshot — no sockets, no network.
// Synthesis is stubbed so /analyze never leaves the process.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use bluster::config::Config;
use bluster::tts::SpeechSynthesizer;
use bluster::web::{build_router, AppState};

/// Writes an empty file instead of calling the TTS endpoint.
struct StubSynthesizer;

#[async_trait]
impl SpeechSynthesizer for StubSynthesizer {
    async fn synthesize(&self, _text: &str, dest: &Path) -> Result<()> {
        tokio::fs::write(dest, b"").await?;
        Ok(())
    }
}

fn test_state() -> AppState {
    let audio_dir = std::env::temp_dir().join("bluster-web-tests");
    std::fs::create_dir_all(&audio_dir).expect("temp audio dir");

    let config = Config {
        audio_dir,
        tts_endpoint: "http://unused.invalid".to_string(),
        tts_lang: "ml".to_string(),
        public_url: None,
    };

    AppState {
        config: Arc::new(config),
        synthesizer: Arc::new(StubSynthesizer),
        public_base: "http://localhost:8000".to_string(),
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid JSON body")
}

#[tokio::test]
async fn health_returns_ok() {
    let app = build_router(test_state());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn analyze_returns_the_full_payload() {
    let app = build_router(test_state());

    let request = Request::post("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"text":"bomb bomb"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["score"], 60.0);
    assert_eq!(json["category"], "medium");
    assert_eq!(json["matched_keywords"]["danger"][0], "bomb");
    assert_eq!(json["metrics"]["danger_count"], 2);

    let audio_url = json["audio_url"].as_str().expect("audio_url");
    assert!(audio_url.starts_with("http://localhost:8000/audio/"));
    assert!(audio_url.ends_with(".mp3"));

    assert!(!json["dialogue"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn analyze_writes_the_audio_file() {
    let state = test_state();
    let audio_dir = state.config.audio_dir.clone();
    let app = build_router(state);

    let request = Request::post("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"text":"hostage"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let json = body_json(response).await;

    let audio_url = json["audio_url"].as_str().expect("audio_url");
    let filename = audio_url.rsplit('/').next().expect("filename");
    assert!(audio_dir.join(filename).exists());
}

#[tokio::test]
async fn analyze_rejects_a_missing_body() {
    let app = build_router(test_state());

    let request = Request::post("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}
