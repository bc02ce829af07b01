// src/score.rs
use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{ScoringPolicy, Thresholds};
use crate::signals::SignalKind;

/// Outcome of one check. `points` never exceeds `max`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignalResult {
    points: u32,
    max: u32,
    note: String,
}

impl SignalResult {
    /// Points above `max` are cut down to `max`.
    pub fn new(points: u32, max: u32, note: impl Into<String>) -> Self {
        Self { points: points.min(max), max, note: note.into() }
    }

    pub fn full(max: u32, note: impl Into<String>) -> Self {
        Self::new(max, max, note)
    }

    pub fn zero(max: u32, note: impl Into<String>) -> Self {
        Self::new(0, max, note)
    }

    pub fn points(&self) -> u32 { self.points }
    pub fn max(&self) -> u32 { self.max }
    pub fn note(&self) -> &str { &self.note }
}

pub type Breakdown = IndexMap<String, SignalResult>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    InvisibleToAi,
    PartiallyVisible,
    AiReady,
    /// The page could not be read; the score is the fixed fallback.
    Restricted,
}

impl Verdict {
    /// Map a final score onto the three scored buckets.
    pub fn from_score(score: u8, t: &Thresholds) -> Self {
        if score >= t.ai_ready {
            Verdict::AiReady
        } else if score >= t.partially_visible {
            Verdict::PartiallyVisible
        } else {
            Verdict::InvisibleToAi
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::InvisibleToAi => "Invisible to AI",
            Verdict::PartiallyVisible => "Partially Visible",
            Verdict::AiReady => "AI Ready",
            Verdict::Restricted => "AI Visibility Restricted",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Verdict::InvisibleToAi => Severity::Red,
            Verdict::PartiallyVisible | Verdict::Restricted => Severity::Amber,
            Verdict::AiReady => Severity::Green,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Red,
    Amber,
    Green,
}

impl Severity {
    pub fn color(self) -> &'static str {
        match self {
            Severity::Red => "#FF4B4B",
            Severity::Amber => "#FFDA47",
            Severity::Green => "#28A745",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Red => "red",
            Severity::Amber => "amber",
            Severity::Green => "green",
        }
    }
}

/// How the report came to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Scored,
    Blocked,
    Unreachable,
    MalformedInput,
}

/// Result of one audit. Built once, read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    status: AuditStatus,
    resolved_url: Option<String>,
    score: u8,
    /// Sum of signal points before ceilings and clamping.
    raw_score: u32,
    verdict: Verdict,
    severity: Severity,
    breakdown: Breakdown,
}

impl AuditReport {
    /// Score a complete breakdown: raw sum → ceilings → clamp → verdict.
    pub(crate) fn scored(breakdown: Breakdown, resolved_url: &str, policy: &ScoringPolicy) -> Self {
        let (raw_score, score) = aggregate(&breakdown, policy);
        let verdict = Verdict::from_score(score, &policy.thresholds);
        Self {
            status: AuditStatus::Scored,
            resolved_url: Some(resolved_url.to_string()),
            score,
            raw_score,
            verdict,
            severity: verdict.severity(),
            breakdown,
        }
    }

    /// Degraded report with a fixed score.
    pub(crate) fn fallback(status: AuditStatus, breakdown: Breakdown, score: u8) -> Self {
        let raw_score = breakdown.values().map(SignalResult::points).sum();
        Self {
            status,
            resolved_url: None,
            score: score.min(100),
            raw_score,
            verdict: Verdict::Restricted,
            severity: Verdict::Restricted.severity(),
            breakdown,
        }
    }

    pub fn status(&self) -> AuditStatus { self.status }
    pub fn resolved_url(&self) -> Option<&str> { self.resolved_url.as_deref() }
    pub fn score(&self) -> u8 { self.score }
    pub fn raw_score(&self) -> u32 { self.raw_score }
    pub fn verdict(&self) -> Verdict { self.verdict }
    pub fn severity(&self) -> Severity { self.severity }
    pub fn breakdown(&self) -> &Breakdown { &self.breakdown }

    pub fn signal(&self, key: &str) -> Option<&SignalResult> {
        self.breakdown.get(key)
    }

    pub fn is_degraded(&self) -> bool {
        self.status != AuditStatus::Scored
    }
}

/// Returns `(raw, final)`. Ceilings apply to the raw sum before the clamp.
pub fn aggregate(breakdown: &Breakdown, policy: &ScoringPolicy) -> (u32, u8) {
    let raw: u32 = breakdown.values().map(SignalResult::points).sum();

    let scored_nothing = |key: &str| breakdown.get(key).is_some_and(|r| r.points() == 0);

    let mut capped = raw;
    if let Some(cap) = policy.ceilings.without_schema {
        if scored_nothing(SignalKind::Schema.key()) {
            capped = capped.min(cap);
        }
    }
    if let Some(cap) = policy.ceilings.without_voice {
        if scored_nothing(SignalKind::Voice.key()) {
            capped = capped.min(cap);
        }
    }

    // u32 cannot go below 0; only the top needs clamping.
    let clamped = capped.min(100) as u8;
    (raw, clamped)
}
