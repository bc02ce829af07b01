// src/evaluate.rs
use chrono::Datelike;

use crate::config::ScoringPolicy;
use crate::score::AuditReport;
use crate::signals::{self, Page};

/// Parses a fetched page once and scores it against a policy.
///
/// The only clock dependence is the freshness check's "current year"; pin it
/// with [`Evaluator::with_year`] to make results reproducible.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    policy: ScoringPolicy,
    year: Option<i32>,
}

impl Evaluator {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy, year: None }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Score `html` as fetched from `resolved_url`. Never fails.
    pub fn evaluate(&self, html: &str, resolved_url: &str) -> AuditReport {
        let year = self.year.unwrap_or_else(|| chrono::Local::now().year());
        let page = Page::parse(html, resolved_url, year);
        let breakdown = signals::run_all(&page, &self.policy);
        let report = AuditReport::scored(breakdown, resolved_url, &self.policy);
        logd!(
            "{resolved_url}: raw {} → {} ({})",
            report.raw_score(),
            report.score(),
            report.verdict().label()
        );
        report
    }
}
