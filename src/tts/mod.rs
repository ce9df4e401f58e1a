// Speech synthesis trait — the swap-ready abstraction.
//
// The default implementation calls the Google Translate TTS endpoint. The
// trait keeps the pipeline testable and leaves room for a local engine
// later without touching the web handlers.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use sha2::{Digest, Sha256};

pub mod gtts;

/// Trait for turning a dialogue line into an audio file at `dest`.
/// Implementations are async because synthesis is an HTTP call.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, dest: &Path) -> Result<()>;
}

/// No-op synthesizer for paths that must never produce audio.
/// Panics if actually called, so a wiring mistake surfaces loudly.
pub struct NoopSynthesizer;

#[async_trait]
impl SpeechSynthesizer for NoopSynthesizer {
    async fn synthesize(&self, _text: &str, _dest: &Path) -> Result<()> {
        anyhow::bail!("NoopSynthesizer should never be called")
    }
}

/// Build a collision-proof mp3 filename for a dialogue line.
///
/// The audio directory is shared between concurrent requests, so the name
/// hashes both the content and the current millisecond timestamp. Two
/// requests for the same line still get distinct files.
pub fn audio_filename(text: &str) -> String {
    audio_filename_at(text, chrono::Utc::now().timestamp_millis())
}

fn audio_filename_at(text: &str, stamp_millis: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.update(b"-");
    hasher.update(stamp_millis.to_le_bytes());
    format!("{}.mp3", hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_hex_with_mp3_extension() {
        let name = audio_filename_at("ഇതൊക്കെ സാധാരണമാണ്.", 1_700_000_000_000);
        assert!(name.ends_with(".mp3"));
        let stem = name.trim_end_matches(".mp3");
        assert_eq!(stem.len(), 64);
        assert!(stem.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn same_text_different_stamp_yields_different_names() {
        let a = audio_filename_at("same line", 1);
        let b = audio_filename_at("same line", 2);
        assert_ne!(a, b);
    }

    #[test]
    fn same_text_same_stamp_is_deterministic() {
        let a = audio_filename_at("same line", 99);
        let b = audio_filename_at("same line", 99);
        assert_eq!(a, b);
    }
}
