// src/audit.rs
//! `run_audit`: raw URL in, report out. Fetch failures never escape; they
//! become a fallback report with a fixed score and the `Restricted` verdict,
//! crediting only what the connection itself proved.

use crate::config::{AuditOptions, ScoringPolicy};
use crate::core::{HttpTransport, Transport};
use crate::error::{AttemptFailure, ConnectError, TransportError};
use crate::evaluate::Evaluator;
use crate::fetch::Fetcher;
use crate::score::{AuditReport, AuditStatus, Breakdown, SignalResult};
use crate::signals::SignalKind;

pub struct Auditor<T: Transport = HttpTransport> {
    fetcher: Fetcher<T>,
    evaluator: Evaluator,
}

impl Auditor<HttpTransport> {
    /// Real network client. Fails only if the HTTP client cannot be built.
    pub fn new(options: AuditOptions) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&options.fetch)?;
        Ok(Self::with_transport(transport, options))
    }
}

impl<T: Transport> Auditor<T> {
    pub fn with_transport(transport: T, options: AuditOptions) -> Self {
        Self {
            fetcher: Fetcher::new(transport, options.fetch.allow_http_fallback),
            evaluator: Evaluator::new(options.policy),
        }
    }

    /// Pin the year used by the freshness check.
    pub fn with_year(mut self, year: i32) -> Self {
        self.evaluator = self.evaluator.with_year(year);
        self
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn run(&self, raw_url: &str) -> AuditReport {
        match self.fetcher.connect(raw_url) {
            Ok(page) => self.evaluator.evaluate(&page.body, &page.resolved_url),
            Err(e) => {
                logw!("audit of {raw_url:?} degraded: {e}");
                fallback_report(&e, self.evaluator.policy())
            }
        }
    }
}

/// Audit with default options and the system clock.
pub fn run_audit(raw_url: &str) -> AuditReport {
    let options = AuditOptions::default();
    match Auditor::new(options.clone()) {
        Ok(auditor) => auditor.run(raw_url),
        Err(e) => {
            loge!("cannot build HTTP client: {e}");
            let err = ConnectError::Unreachable {
                attempts: vec![AttemptFailure { url: s!(raw_url.trim()), reason: e.to_string() }],
            };
            fallback_report(&err, &options.policy)
        }
    }
}

/// Degraded report for a fetch that produced no HTML.
///
/// Content signals are all zero. `server_response` is credited only when a
/// server answered (with a blocking status); `ssl` only when that answer came
/// over HTTPS.
pub fn fallback_report(err: &ConnectError, policy: &ScoringPolicy) -> AuditReport {
    let (status, answered, over_https, reason) = match err {
        ConnectError::Blocked { url, status } => (
            AuditStatus::Blocked,
            Some(*status),
            url.starts_with("https://"),
            "Not checked: site blocks automated scans",
        ),
        ConnectError::Unreachable { .. } => {
            (AuditStatus::Unreachable, None, false, "Not checked: site unreachable")
        }
        ConnectError::MalformedInput { .. } => {
            (AuditStatus::MalformedInput, None, false, "Not checked: no usable host")
        }
    };

    let w = &policy.weights;
    let breakdown: Breakdown = SignalKind::ALL
        .into_iter()
        .map(|kind| {
            let max = kind.max(w);
            let result = match kind {
                k if k.reads_content() => SignalResult::zero(max, reason),
                SignalKind::ServerResponse => match answered {
                    Some(code) => SignalResult::full(max, format!("Server answered HTTP {code}")),
                    None => SignalResult::zero(max, "No server response"),
                },
                _ if over_https => SignalResult::full(max, "HTTPS connection succeeded"),
                _ => SignalResult::zero(max, "No HTTPS connection"),
            };
            (s!(kind.key()), result)
        })
        .collect();

    AuditReport::fallback(status, breakdown, policy.fallback_score)
}
