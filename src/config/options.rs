// src/config/options.rs
use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::PolicyError;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuditOptions {
    pub fetch: FetchOptions,
    pub policy: ScoringPolicy,
}

/* ---------------- Fetching ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Per-candidate timeout. Kept within 2.5..=12 seconds by `with_timeout`.
    pub timeout: Duration,
    pub user_agent: String,
    /// Try `http://{host}` after both HTTPS candidates failed.
    pub allow_http_fallback: bool,
    /// Skip TLS certificate verification. On by default: the sites we probe
    /// are small-business pages where expired or mismatched certificates are
    /// common, and the probe only reads public HTML.
    pub accept_invalid_certs: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            user_agent: s!(USER_AGENT),
            allow_http_fallback: true,
            accept_invalid_certs: true,
        }
    }
}

impl FetchOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let min = Duration::from_millis(MIN_TIMEOUT_MS);
        let max = Duration::from_millis(MAX_TIMEOUT_MS);
        self.timeout = timeout.clamp(min, max);
        self
    }
}

/* ---------------- Scoring policy ---------------- */

/// Everything the evaluator needs to turn signals into a score.
/// Variants of the audit (different weights, thresholds, keyword lists) are
/// expressed as different policies, loaded from JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringPolicy {
    pub weights: Weights,
    pub thresholds: Thresholds,
    pub ceilings: Ceilings,
    pub fallback_score: u8,
    pub alt_coverage_percent: u32,
    pub schema_markers: Vec<String>,
    pub voice_keywords: Vec<String>,
    pub contact_keywords: Vec<String>,
    pub year_script_patterns: Vec<String>,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            thresholds: Thresholds::default(),
            ceilings: Ceilings::default(),
            fallback_score: FALLBACK_SCORE,
            alt_coverage_percent: ALT_COVERAGE_PERCENT,
            schema_markers: owned(SCHEMA_MARKERS),
            voice_keywords: owned(VOICE_KEYWORDS),
            contact_keywords: owned(CONTACT_KEYWORDS),
            year_script_patterns: owned(YEAR_SCRIPT_PATTERNS),
        }
    }
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl ScoringPolicy {
    /// Read a JSON policy file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, PolicyError> {
        let text = fs::read_to_string(path).map_err(|source| PolicyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(text)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Reject tables that would break the report invariants
    /// (partial credit above full credit, unordered thresholds, ...).
    pub fn validate(&self) -> Result<(), PolicyError> {
        let w = &self.weights;
        if w.schema_partial > w.schema {
            return Err(PolicyError::Invalid(s!("schema_partial exceeds schema")));
        }
        if w.canonical_partial > w.canonical {
            return Err(PolicyError::Invalid(s!("canonical_partial exceeds canonical")));
        }
        if w.contact_partial > w.contact {
            return Err(PolicyError::Invalid(s!("contact_partial exceeds contact")));
        }

        let t = &self.thresholds;
        if t.partially_visible >= t.ai_ready {
            return Err(PolicyError::Invalid(format!(
                "partially_visible ({}) must be below ai_ready ({})",
                t.partially_visible, t.ai_ready
            )));
        }
        if t.ai_ready > 100 {
            return Err(PolicyError::Invalid(format!("ai_ready ({}) exceeds 100", t.ai_ready)));
        }
        if self.fallback_score > 100 {
            return Err(PolicyError::Invalid(format!(
                "fallback_score ({}) exceeds 100",
                self.fallback_score
            )));
        }
        if self.alt_coverage_percent > 100 {
            return Err(PolicyError::Invalid(format!(
                "alt_coverage_percent ({}) exceeds 100",
                self.alt_coverage_percent
            )));
        }
        if self.schema_markers.iter().any(|m| m.trim().is_empty()) {
            return Err(PolicyError::Invalid(s!("empty schema marker")));
        }
        if self.voice_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(PolicyError::Invalid(s!("empty voice keyword")));
        }
        if self.contact_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(PolicyError::Invalid(s!("empty contact keyword")));
        }
        Ok(())
    }
}

/// Points per signal. `*_partial` is the credit for the middle outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Weights {
    pub server_response: u32,
    pub ssl: u32,
    pub schema: u32,
    pub schema_partial: u32,
    pub voice: u32,
    pub accessibility: u32,
    pub freshness: u32,
    pub canonical: u32,
    pub canonical_partial: u32,
    pub contact: u32,
    pub contact_partial: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            server_response: 15,
            ssl: 10,
            schema: 30,
            schema_partial: 10,
            voice: 20,
            accessibility: 15,
            freshness: 15,
            canonical: 10,
            canonical_partial: 5,
            contact: 10,
            contact_partial: 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub partially_visible: u8,
    pub ai_ready: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { partially_visible: PARTIALLY_VISIBLE_AT, ai_ready: AI_READY_AT }
    }
}

/// Caps applied to the raw sum when a key signal scored nothing.
/// `None` disables the cap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Ceilings {
    pub without_schema: Option<u32>,
    pub without_voice: Option<u32>,
}

impl Default for Ceilings {
    fn default() -> Self {
        Self {
            without_schema: Some(CEILING_WITHOUT_SCHEMA),
            without_voice: Some(CEILING_WITHOUT_VOICE),
        }
    }
}
