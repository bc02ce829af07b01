// src/signals/mod.rs
//! # Signal checks
//!
//! Each submodule scores one heuristic against a parsed page. Checks are
//! independent of each other and of their order; they read a shared [`Page`]
//! (parsed once) and the active [`ScoringPolicy`], and return a
//! [`SignalResult`] whose `points` never exceed its `max`.
//!
//! ## Conventions
//! - No check fails. Malformed HTML, a missing tag or a bad attribute just
//!   lands on the check's "fail" (or partial) branch.
//! - Text matching is done on lowercased text; keyword lists come from the
//!   policy and are lowercased at match time.
//! - Notes are short, human-readable, and name what was (or was not) found.
//!
//! ## Breakdown order
//! `server_response`, `ssl`, `schema`, `voice`, `accessibility`, `freshness`,
//! `canonical`, `contact`, which is [`SignalKind::ALL`].
use scraper::Html;

use crate::config::{ScoringPolicy, Weights};
use crate::core::html;
use crate::score::{Breakdown, SignalResult};

pub mod accessibility;
pub mod canonical;
pub mod connectivity;
pub mod contact;
pub mod freshness;
pub mod schema;
pub mod voice;

/// A document parsed once and shared by every check.
pub struct Page<'a> {
    doc: Html,
    raw_lower: String,
    text_lower: String,
    resolved_url: &'a str,
    year: i32,
}

impl<'a> Page<'a> {
    /// `year` is the calendar year the freshness check looks for.
    pub fn parse(html_src: &str, resolved_url: &'a str, year: i32) -> Self {
        let doc = Html::parse_document(html_src);
        let text_lower = html::visible_text(&doc).to_lowercase();
        Self {
            doc,
            raw_lower: html_src.to_lowercase(),
            text_lower,
            resolved_url,
            year,
        }
    }

    pub fn doc(&self) -> &Html { &self.doc }
    /// Raw markup, lowercased. For patterns that live in attributes or scripts.
    pub fn raw_lower(&self) -> &str { &self.raw_lower }
    /// Visible text, whitespace-collapsed and lowercased.
    pub fn text_lower(&self) -> &str { &self.text_lower }
    pub fn resolved_url(&self) -> &str { self.resolved_url }
    pub fn year(&self) -> i32 { self.year }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalKind {
    ServerResponse,
    Ssl,
    Schema,
    Voice,
    Accessibility,
    Freshness,
    Canonical,
    Contact,
}

impl SignalKind {
    pub const ALL: [SignalKind; 8] = [
        SignalKind::ServerResponse,
        SignalKind::Ssl,
        SignalKind::Schema,
        SignalKind::Voice,
        SignalKind::Accessibility,
        SignalKind::Freshness,
        SignalKind::Canonical,
        SignalKind::Contact,
    ];

    /// Breakdown key.
    pub fn key(self) -> &'static str {
        match self {
            SignalKind::ServerResponse => "server_response",
            SignalKind::Ssl => "ssl",
            SignalKind::Schema => "schema",
            SignalKind::Voice => "voice",
            SignalKind::Accessibility => "accessibility",
            SignalKind::Freshness => "freshness",
            SignalKind::Canonical => "canonical",
            SignalKind::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SignalKind::ServerResponse => "Server Response",
            SignalKind::Ssl => "SSL Security",
            SignalKind::Schema => "Schema Markup",
            SignalKind::Voice => "Voice Readiness",
            SignalKind::Accessibility => "Accessibility",
            SignalKind::Freshness => "Content Freshness",
            SignalKind::Canonical => "Canonical Link",
            SignalKind::Contact => "Contact Details",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    /// Full credit for this signal under `w`.
    pub fn max(self, w: &Weights) -> u32 {
        match self {
            SignalKind::ServerResponse => w.server_response,
            SignalKind::Ssl => w.ssl,
            SignalKind::Schema => w.schema,
            SignalKind::Voice => w.voice,
            SignalKind::Accessibility => w.accessibility,
            SignalKind::Freshness => w.freshness,
            SignalKind::Canonical => w.canonical,
            SignalKind::Contact => w.contact,
        }
    }

    /// Whether the check needs page content (as opposed to the connection alone).
    pub fn reads_content(self) -> bool {
        !matches!(self, SignalKind::ServerResponse | SignalKind::Ssl)
    }

    pub fn check(self, page: &Page<'_>, policy: &ScoringPolicy) -> SignalResult {
        match self {
            SignalKind::ServerResponse => connectivity::check_server(page, policy),
            SignalKind::Ssl => connectivity::check_ssl(page, policy),
            SignalKind::Schema => schema::check(page, policy),
            SignalKind::Voice => voice::check(page, policy),
            SignalKind::Accessibility => accessibility::check(page, policy),
            SignalKind::Freshness => freshness::check(page, policy),
            SignalKind::Canonical => canonical::check(page, policy),
            SignalKind::Contact => contact::check(page, policy),
        }
    }
}

/// Run every check, in breakdown order.
pub fn run_all(page: &Page<'_>, policy: &ScoringPolicy) -> Breakdown {
    SignalKind::ALL
        .into_iter()
        .map(|kind| (s!(kind.key()), kind.check(page, policy)))
        .collect()
}
