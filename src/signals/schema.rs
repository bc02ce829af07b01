// src/signals/schema.rs
// JSON-LD structured data. Full credit needs an entity type the assistants
// can anchor a business to; any JSON-LD at all earns partial credit.

use super::Page;
use crate::config::ScoringPolicy;
use crate::core::html;
use crate::score::SignalResult;

const JSON_LD: &str = "application/ld+json";

pub fn check(page: &Page<'_>, policy: &ScoringPolicy) -> SignalResult {
    let w = &policy.weights;

    let blocks: Vec<String> = html::select_all(page.doc(), "script[type]")
        .into_iter()
        .filter(|el| {
            el.value()
                .attr("type")
                .is_some_and(|t| t.trim().to_ascii_lowercase().starts_with(JSON_LD))
        })
        .map(|el| html::raw_text(&el).to_lowercase())
        .collect();

    if blocks.is_empty() {
        return SignalResult::zero(w.schema, "No JSON-LD structured data");
    }

    let marker = policy
        .schema_markers
        .iter()
        .find(|m| {
            let m = m.to_lowercase();
            blocks.iter().any(|b| b.contains(&m))
        });

    match marker {
        Some(m) => SignalResult::full(w.schema, format!("Structured data declares {m}")),
        None => SignalResult::new(
            w.schema_partial,
            w.schema,
            format!("{} JSON-LD block(s) without a business entity type", blocks.len()),
        ),
    }
}
