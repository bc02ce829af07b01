// src/error.rs
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// One candidate URL that did not produce a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttemptFailure {
    pub url: String,
    pub reason: String,
}

/// Why a raw URL did not yield HTML to evaluate.
/// The auditor turns every variant into a fallback report; nothing here
/// reaches the caller of `run_audit` as an error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("no usable host in {raw:?}")]
    MalformedInput { raw: String },

    #[error("{url} refused the scan with HTTP {status}")]
    Blocked { url: String, status: u16 },

    #[error("no candidate URL connected ({} tried)", .attempts.len())]
    Unreachable { attempts: Vec<AttemptFailure> },
}

/// Failure of a single HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e.to_string())
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("cannot read policy {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed policy: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid policy: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("webhook answered HTTP {0}")]
    Status(u16),
}
