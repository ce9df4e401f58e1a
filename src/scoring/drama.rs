// Drama estimation — stylistic signals of sensationalism.
//
// Four independent pattern scans over the same text. Each maximal run of a
// pattern counts once, so "!!!!!" is one exclaim group, not four. The
// signals feed the score as penalty units: loud framing lowers perceived
// danger.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Runs of two or more terminal shriek characters (`!`, `?`, or the Arabic
/// question mark, which shows up in pasted WhatsApp forwards).
static EXCLAIM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!?؟]{2,}").expect("exclaim pattern is valid"));

/// Case-insensitive whole-word hype tokens in Latin script.
static LATIN_HYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(OMG|BREAKING|MASS|HYPE)\b").expect("hype pattern is valid"));

/// Whole words of three or more uppercase Latin letters.
static CAPS_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{3,}\b").expect("caps pattern is valid"));

/// Every three shouted words contribute one penalty unit; the remainder is
/// discarded so shouting can't dominate the score.
const CAPS_WORDS_PER_UNIT: u32 = 3;

/// Per-signal counts produced fresh for each analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DramaSignals {
    /// Maximal runs of 2+ `!`/`?`/`؟` characters
    pub exclaim_groups: u32,
    /// Maximal runs of 3+ identical Malayalam vowel signs
    pub elongations: u32,
    /// Whole-word OMG/BREAKING/MASS/HYPE matches, any case
    pub latin_hype: u32,
    /// ALL-CAPS words of 3+ letters, scaled down by 3
    pub caps_shout: u32,
}

impl DramaSignals {
    /// Total drama penalty units.
    pub fn total_units(&self) -> u32 {
        self.exclaim_groups + self.elongations + self.latin_hype + self.caps_shout
    }
}

/// Scan `text` for all four drama signals.
///
/// Pure function; evaluation order of the scans does not matter.
pub fn estimate(text: &str) -> DramaSignals {
    let caps_words = CAPS_WORD.find_iter(text).count() as u32;

    DramaSignals {
        exclaim_groups: EXCLAIM_RUN.find_iter(text).count() as u32,
        elongations: count_elongations(text),
        latin_hype: LATIN_HYPE.find_iter(text).count() as u32,
        caps_shout: caps_words / CAPS_WORDS_PER_UNIT,
    }
}

/// Malayalam dependent vowel signs eligible for elongation detection.
fn is_vowel_sign(c: char) -> bool {
    matches!(
        c,
        'ാ' | 'ി' | 'ീ' | 'ു' | 'ൂ' | 'െ' | 'േ' | 'ൈ' | 'ോ' | 'ൌ'
    )
}

/// Count maximal runs of 3+ identical vowel signs.
///
/// A run of any length past the threshold still counts once: this tracks
/// elongation events, not extra characters. Written as a character walk
/// because the equivalent regex needs a backreference (identical repeats),
/// which regex-lite does not support.
fn count_elongations(text: &str) -> u32 {
    let mut events = 0u32;
    let mut run_char: Option<char> = None;
    let mut run_len = 0usize;

    for c in text.chars() {
        if Some(c) == run_char {
            run_len += 1;
            continue;
        }
        if let Some(prev) = run_char {
            if run_len >= 3 && is_vowel_sign(prev) {
                events += 1;
            }
        }
        run_char = Some(c);
        run_len = 1;
    }
    if let Some(prev) = run_char {
        if run_len >= 3 && is_vowel_sign(prev) {
            events += 1;
        }
    }

    events
}
