// src/fetch.rs
//! Turning free-form user input into a fetched page.
//!
//! `"HTTPS://WWW.Example.COM/"`, `"www.example.com"` and `"example.com"` all
//! normalize to the target `example.com` and produce the same candidates:
//!
//! ```text
//! https://example.com → https://www.example.com → http://example.com
//! ```
//!
//! Candidates are tried once each, in order. The first 2xx wins and its
//! candidate URL (not the post-redirect URL) is handed to the evaluator,
//! which compares it against the page's canonical link.

use url::Url;

use crate::config::consts::BLOCKING_STATUSES;
use crate::core::{Transport, sanitize::strip_prefix_ci};
use crate::error::{AttemptFailure, ConnectError};

const SCHEME_PREFIXES: &[&str] = &["https://", "http://", "www."];

/// A page that answered with a 2xx status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedPage {
    pub body: String,
    /// The candidate URL that produced `body`.
    pub resolved_url: String,
    pub status: u16,
}

pub type ConnectionOutcome = Result<FetchedPage, ConnectError>;

/// Strip scheme/`www.` prefixes and one trailing slash, lowercase the host.
/// The path keeps its case.
pub fn normalize_target(raw: &str) -> String {
    let mut rest = raw.trim();
    loop {
        let before = rest.len();
        for prefix in SCHEME_PREFIXES {
            if let Some(stripped) = strip_prefix_ci(rest, prefix) {
                rest = stripped;
            }
        }
        if rest.len() == before {
            break;
        }
    }
    let rest = rest.strip_suffix('/').unwrap_or(rest);

    match rest.find(['/', '?', '#']) {
        Some(i) => join!(&rest[..i].to_ascii_lowercase(), &rest[i..]),
        None => rest.to_ascii_lowercase(),
    }
}

/// Candidate URLs for `raw`, in the order they are tried.
pub fn candidate_urls(raw: &str, allow_http_fallback: bool) -> Result<Vec<String>, ConnectError> {
    let target = normalize_target(raw);
    let malformed = || ConnectError::MalformedInput { raw: raw.to_string() };

    if target.is_empty()
        || target.starts_with(['/', '?', '#', '.'])
        || target.contains(char::is_whitespace)
        || target.contains("://")
    {
        return Err(malformed());
    }

    let primary = join!("https://", &target);
    let host_ok = Url::parse(&primary)
        .ok()
        .and_then(|u| u.host_str().map(|h| !h.is_empty()))
        .unwrap_or(false);
    if !host_ok {
        return Err(malformed());
    }

    let mut out = vec![primary, join!("https://www.", &target)];
    if allow_http_fallback {
        out.push(join!("http://", &target));
    }
    Ok(out)
}

pub fn is_blocking_status(status: u16) -> bool {
    BLOCKING_STATUSES.contains(&status)
}

pub struct Fetcher<T: Transport> {
    transport: T,
    allow_http_fallback: bool,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, allow_http_fallback: bool) -> Self {
        Self { transport, allow_http_fallback }
    }

    /// Try each candidate once. Never panics; every failure is a value.
    pub fn connect(&self, raw_url: &str) -> ConnectionOutcome {
        let candidates = candidate_urls(raw_url, self.allow_http_fallback)?;

        let mut blocked: Option<(String, u16)> = None;
        let mut attempts = Vec::with_capacity(candidates.len());

        for url in candidates {
            logd!("GET {url}");
            match self.transport.get(&url) {
                Ok(resp) if (200..300).contains(&resp.status) => {
                    logf!("{url} answered HTTP {} ({} bytes)", resp.status, resp.body.len());
                    return Ok(FetchedPage {
                        body: resp.body,
                        resolved_url: url,
                        status: resp.status,
                    });
                }
                Ok(resp) => {
                    if is_blocking_status(resp.status) {
                        logf!("{url} blocked the scan (HTTP {})", resp.status);
                        blocked.get_or_insert_with(|| (url.clone(), resp.status));
                    } else {
                        logd!("{url} answered HTTP {}", resp.status);
                    }
                    attempts.push(AttemptFailure { url, reason: format!("HTTP {}", resp.status) });
                }
                Err(e) => {
                    logd!("{url} failed: {e}");
                    attempts.push(AttemptFailure { url, reason: e.to_string() });
                }
            }
        }

        match blocked {
            Some((url, status)) => Err(ConnectError::Blocked { url, status }),
            None => Err(ConnectError::Unreachable { attempts }),
        }
    }
}
