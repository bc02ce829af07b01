// src/export.rs
// Presentation of a finished report: plain text for terminals and documents,
// CSV/TSV for spreadsheets, JSON for machines.

use crate::csv::to_delimited;
use crate::score::AuditReport;
use crate::signals::SignalKind;

pub const CSV_HEADERS: [&str; 4] = ["signal", "points", "max", "note"];

fn title_for(key: &str) -> &str {
    SignalKind::from_key(key).map_or(key, |k| k.title())
}

/// Human-readable breakdown. `display_name` is whatever the caller shows the
/// user (usually the URL as typed).
pub fn render_text(report: &AuditReport, display_name: &str) -> String {
    let mut out = String::new();
    let verdict = report.verdict();

    out.push_str(&format!("AI VISIBILITY SCORE: {}/100\n", report.score()));
    out.push_str(&format!(
        "Verdict: {} ({})\n",
        verdict.label(),
        report.severity().label()
    ));
    match report.resolved_url() {
        Some(url) => out.push_str(&format!("Site: {display_name} ({url})\n")),
        None => out.push_str(&format!("Site: {display_name}\n")),
    }
    out.push('\n');

    let width = report
        .breakdown()
        .keys()
        .map(|k| title_for(k).len())
        .max()
        .unwrap_or(0);

    for (key, r) in report.breakdown() {
        let mark = if r.points() == r.max() { "✓" } else if r.points() > 0 { "~" } else { "✗" };
        out.push_str(&format!(
            "  {mark} {:<width$}  {:>3}/{:<3} {}\n",
            title_for(key),
            r.points(),
            r.max(),
            r.note(),
        ));
    }

    if report.is_degraded() {
        out.push_str("\nThe page could not be read; this is a fixed fallback score.\n");
    } else if u32::from(report.score()) < report.raw_score() {
        out.push_str(&format!(
            "\nRaw total {} was capped at {}.\n",
            report.raw_score(),
            report.score()
        ));
    }
    out
}

/// One row per signal, then a `total` row carrying score and verdict.
pub fn render_csv(report: &AuditReport, sep: char) -> String {
    let mut rows: Vec<Vec<String>> = report
        .breakdown()
        .iter()
        .map(|(key, r)| vec![key.clone(), r.points().to_string(), r.max().to_string(), s!(r.note())])
        .collect();
    rows.push(vec![
        s!("total"),
        report.score().to_string(),
        s!("100"),
        s!(report.verdict().label()),
    ]);
    to_delimited(Some(&CSV_HEADERS[..]), &rows, sep)
}

pub fn render_json(report: &AuditReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
