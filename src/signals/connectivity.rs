// src/signals/connectivity.rs
// Credit for having reached the page at all. Both signals are always
// awarded once a page was fetched; only the notes differ.

use url::Url;

use super::Page;
use crate::config::ScoringPolicy;
use crate::score::SignalResult;

pub fn check_server(_page: &Page<'_>, policy: &ScoringPolicy) -> SignalResult {
    SignalResult::full(policy.weights.server_response, "Server responded")
}

/// Certificates are not verified during the fetch. The note records which
/// scheme actually answered.
pub fn check_ssl(page: &Page<'_>, policy: &ScoringPolicy) -> SignalResult {
    let max = policy.weights.ssl;
    let https = Url::parse(page.resolved_url()).is_ok_and(|u| u.scheme() == "https");
    if https {
        SignalResult::full(max, "Served over HTTPS")
    } else {
        SignalResult::full(max, "Served over plain HTTP")
    }
}
