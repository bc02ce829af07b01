// src/signals/freshness.rs
use super::Page;
use crate::config::ScoringPolicy;
use crate::score::SignalResult;

/// The current year in visible text, or a script that prints it.
pub fn check(page: &Page<'_>, policy: &ScoringPolicy) -> SignalResult {
    let max = policy.weights.freshness;
    let year = page.year().to_string();

    if page.text_lower().contains(&year) {
        return SignalResult::full(max, format!("Mentions {year}"));
    }

    let raw = page.raw_lower();
    if policy
        .year_script_patterns
        .iter()
        .any(|p| raw.contains(&p.to_lowercase()))
    {
        return SignalResult::full(max, "Auto-updating copyright year");
    }

    SignalResult::zero(max, format!("No mention of {year}"))
}
