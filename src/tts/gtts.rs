// Google Translate TTS client.
//
// The translate_tts endpoint is the same one the gTTS tooling wraps: an
// unauthenticated GET that returns an mp3 for a short text in the given
// language. Dialogue lines are well under the endpoint's length cap, but
// the cap is enforced here anyway since the CLI accepts arbitrary text.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use super::SpeechSynthesizer;

pub const DEFAULT_TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// The endpoint rejects long inputs; gTTS splits at 100 characters.
const MAX_INPUT_CHARS: usize = 200;

pub struct GoogleTranslateSynthesizer {
    client: reqwest::Client,
    endpoint: String,
    lang: String,
}

impl GoogleTranslateSynthesizer {
    pub fn new(endpoint: &str, lang: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            lang: lang.to_string(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateSynthesizer {
    async fn synthesize(&self, text: &str, dest: &Path) -> Result<()> {
        let char_count = text.chars().count();
        if char_count > MAX_INPUT_CHARS {
            anyhow::bail!(
                "Text too long for speech synthesis ({char_count} chars, max {MAX_INPUT_CHARS})"
            );
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", self.lang.as_str()),
                ("client", "tw-ob"),
            ])
            .send()
            .await
            .context("TTS request failed")?
            .error_for_status()
            .context("TTS endpoint returned an error status")?;

        let bytes = response.bytes().await.context("Failed to read TTS audio")?;
        tokio::fs::write(dest, &bytes)
            .await
            .with_context(|| format!("Failed to write audio file {}", dest.display()))?;

        info!(
            chars = char_count,
            bytes = bytes.len(),
            file = %dest.display(),
            "Synthesized speech"
        );
        Ok(())
    }
}
