// src/signals/canonical.rs
use super::Page;
use crate::config::ScoringPolicy;
use crate::core::{html, sanitize::url_key};
use crate::score::SignalResult;

/// The first `<link rel="canonical" href>` must point back at the URL that was
/// fetched, ignoring case and trailing slashes.
pub fn check(page: &Page<'_>, policy: &ScoringPolicy) -> SignalResult {
    let w = &policy.weights;

    let href = html::select_all(page.doc(), "link[rel][href]")
        .into_iter()
        .find(|el| html::has_token(el, "rel", "canonical"))
        .and_then(|el| el.value().attr("href").map(str::to_string));

    let Some(href) = href else {
        return SignalResult::zero(w.canonical, "No canonical link");
    };

    if url_key(&href) == url_key(page.resolved_url()) {
        SignalResult::full(w.canonical, "Canonical link points here")
    } else {
        SignalResult::new(
            w.canonical_partial,
            w.canonical,
            format!("Canonical link points elsewhere ({})", href.trim()),
        )
    }
}
