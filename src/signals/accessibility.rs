// src/signals/accessibility.rs
use super::Page;
use crate::config::ScoringPolicy;
use crate::core::html;
use crate::score::SignalResult;

/// Pass when the page has no images, or enough of them carry non-blank alt text.
pub fn check(page: &Page<'_>, policy: &ScoringPolicy) -> SignalResult {
    let max = policy.weights.accessibility;
    let images = html::select_all(page.doc(), "img");
    let total = images.len() as u32;

    if total == 0 {
        return SignalResult::full(max, "No images to describe");
    }

    let described = images
        .iter()
        .filter(|el| el.value().attr("alt").is_some_and(|a| !a.trim().is_empty()))
        .count() as u32;

    // integer math: described/total >= percent/100
    let note = format!("{described}/{total} images carry alt text");
    if described * 100 >= total * policy.alt_coverage_percent {
        SignalResult::full(max, note)
    } else {
        SignalResult::zero(max, note)
    }
}
