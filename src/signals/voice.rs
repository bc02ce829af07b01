// src/signals/voice.rs
// Headings phrased the way people ask voice assistants.

use super::Page;
use crate::config::ScoringPolicy;
use crate::core::{html, sanitize::contains_word_prefix};
use crate::score::SignalResult;

pub fn check(page: &Page<'_>, policy: &ScoringPolicy) -> SignalResult {
    let max = policy.weights.voice;
    let headings = html::select_all(page.doc(), "h1, h2, h3");

    for heading in &headings {
        let text = html::element_text(heading).to_lowercase();
        let hit = policy
            .voice_keywords
            .iter()
            .find(|kw| contains_word_prefix(&text, &kw.to_lowercase()));
        if let Some(kw) = hit {
            return SignalResult::full(max, format!("Conversational heading (\"{kw}\")"));
        }
    }

    if headings.is_empty() {
        SignalResult::zero(max, "No h1-h3 headings")
    } else {
        SignalResult::zero(max, "No question-style headings")
    }
}
