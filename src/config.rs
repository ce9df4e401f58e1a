use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Nothing here is secret; the TTS endpoint is unauthenticated. The .env
/// file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Directory where synthesized mp3 files are written and served from
    pub audio_dir: PathBuf,
    /// Speech synthesis endpoint (defaults to Google Translate TTS)
    pub tts_endpoint: String,
    /// Language code passed to the synthesizer (default: ml, Malayalam)
    pub tts_lang: String,
    /// Public base URL used to build audio links in API responses.
    /// When unset, the server falls back to its own bind address.
    pub public_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables. Every field has a
    /// default, so this only fails if a value is present but malformed.
    pub fn load() -> Result<Self> {
        Ok(Self {
            audio_dir: env::var("BLUSTER_AUDIO_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./audio")),
            tts_endpoint: env::var("BLUSTER_TTS_ENDPOINT").unwrap_or_else(|_| {
                crate::tts::gtts::DEFAULT_TTS_ENDPOINT.to_string()
            }),
            tts_lang: env::var("BLUSTER_TTS_LANG").unwrap_or_else(|_| "ml".to_string()),
            public_url: env::var("BLUSTER_PUBLIC_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string()),
        })
    }
}
