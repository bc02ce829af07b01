// tests/export_render.rs
//
// Rendering of finished reports and the lead webhook payload.
//
mod common;

use std::cell::RefCell;

use chrono::{TimeZone, Utc};
use common::{BARE_HTML, READY_HTML, YEAR};
use visibility_audit::error::SinkError;
use visibility_audit::export::{render_csv, render_json, render_text};
use visibility_audit::sink::{LeadRecord, LeadSink, deliver_quietly, webhook_payload};
use visibility_audit::{AuditReport, ConnectError, Evaluator, ScoringPolicy, fallback_report};

fn scored(html: &str) -> AuditReport {
    Evaluator::new(ScoringPolicy::default())
        .with_year(YEAR)
        .evaluate(html, "https://example.com")
}

#[test]
fn text_report_lists_every_signal() {
    let out = render_text(&scored(READY_HTML), "example.com");

    assert!(out.starts_with("AI VISIBILITY SCORE: 100/100\n"));
    assert!(out.contains("Verdict: AI Ready (green)"));
    assert!(out.contains("Site: example.com (https://example.com)"));
    for title in ["Server Response", "SSL Security", "Schema Markup", "Voice Readiness",
                  "Accessibility", "Content Freshness", "Canonical Link", "Contact Details"] {
        assert!(out.contains(title), "missing {title}");
    }
    assert!(out.contains("Raw total 125 was capped at 100."));
}

#[test]
fn text_report_flags_fallback() {
    let err = ConnectError::Blocked { url: "https://example.com".into(), status: 403 };
    let out = render_text(&fallback_report(&err, &ScoringPolicy::default()), "example.com");

    assert!(out.contains("AI VISIBILITY SCORE: 35/100"));
    assert!(out.contains("AI Visibility Restricted (amber)"));
    assert!(out.contains("fixed fallback score"));
    assert!(!out.contains("capped"));
}

#[test]
fn csv_has_one_row_per_signal_plus_total() {
    let out = render_csv(&scored(BARE_HTML), ',');
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "signal,points,max,note");
    assert!(lines[1].starts_with("server_response,15,15,"));
    assert!(lines[9].starts_with("total,45,100,Invisible to AI"));
}

#[test]
fn tsv_uses_tabs() {
    let out = render_csv(&scored(BARE_HTML), '\t');
    assert!(out.starts_with("signal\tpoints\tmax\tnote\n"));
}

#[test]
fn json_uses_snake_case_values() {
    let json = render_json(&scored(BARE_HTML)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(v["status"], "scored");
    assert_eq!(v["verdict"], "invisible_to_ai");
    assert_eq!(v["severity"], "red");
    assert_eq!(v["score"], 45);
    assert_eq!(v["resolved_url"], "https://example.com");
    assert_eq!(v["breakdown"]["contact"]["points"], 5);
    assert_eq!(v["breakdown"]["contact"]["max"], 10);
}

fn lead() -> LeadRecord {
    let ts = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
    LeadRecord::from_report(" Ann Smith ", "ann@example.com ", "example.com", &scored(BARE_HTML), ts)
}

#[test]
fn webhook_payload_shape() {
    let p = webhook_payload(&lead());

    assert_eq!(p["name"], "Ann Smith");
    assert_eq!(p["email"], "ann@example.com");
    assert_eq!(p["website"], "example.com");
    assert_eq!(p["customData"]["audit_score"], 45);
    assert_eq!(p["customData"]["audit_verdict"], "Invisible to AI");
    assert_eq!(p["customData"]["audit_timestamp"], "2026-03-14T09:30:00+00:00");
}

struct Refusing;

impl LeadSink for Refusing {
    fn deliver(&self, _: &LeadRecord) -> Result<(), SinkError> {
        Err(SinkError::Status(500))
    }
}

#[derive(Default)]
struct Recording {
    seen: RefCell<Vec<LeadRecord>>,
}

impl LeadSink for Recording {
    fn deliver(&self, lead: &LeadRecord) -> Result<(), SinkError> {
        self.seen.borrow_mut().push(lead.clone());
        Ok(())
    }
}

#[test]
fn delivery_failures_are_swallowed() {
    assert!(!deliver_quietly(&Refusing, &lead()));

    let rec = Recording::default();
    assert!(deliver_quietly(&rec, &lead()));
    assert_eq!(rec.seen.borrow().len(), 1);
    assert_eq!(rec.seen.borrow()[0].score, 45);
}
