// src/sink.rs
// Lead delivery. The engine never calls this; the CLI does, after the audit.
// A failed delivery is logged and dropped so it can never spoil a report.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::{SinkError, TransportError};
use crate::score::AuditReport;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadRecord {
    pub name: String,
    pub email: String,
    pub url: String,
    pub score: u8,
    pub verdict: String,
    pub timestamp: DateTime<Utc>,
}

impl LeadRecord {
    pub fn from_report(
        name: &str,
        email: &str,
        url: &str,
        report: &AuditReport,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            name: s!(name.trim()),
            email: s!(email.trim()),
            url: s!(url.trim()),
            score: report.score(),
            verdict: s!(report.verdict().label()),
            timestamp,
        }
    }
}

pub trait LeadSink {
    fn deliver(&self, lead: &LeadRecord) -> Result<(), SinkError>;
}

/// JSON body for CRM webhook triggers.
pub fn webhook_payload(lead: &LeadRecord) -> Value {
    json!({
        "name": lead.name,
        "email": lead.email,
        "website": lead.url,
        "customData": {
            "audit_score": lead.score,
            "audit_verdict": lead.verdict,
            "audit_timestamp": lead.timestamp.to_rfc3339(),
        },
    })
}

/// POSTs `webhook_payload` to an endpoint supplied by the caller.
pub struct WebhookSink {
    endpoint: String,
    client: Client,
}

impl WebhookSink {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SinkError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::from)?;
        Ok(Self { endpoint: endpoint.into(), client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LeadSink for WebhookSink {
    fn deliver(&self, lead: &LeadRecord) -> Result<(), SinkError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&webhook_payload(lead))
            .send()
            .map_err(TransportError::from)?;
        match resp.status().as_u16() {
            200 | 201 => Ok(()),
            other => Err(SinkError::Status(other)),
        }
    }
}

/// Deliver and swallow the error after logging it. Returns whether it went through.
pub fn deliver_quietly(sink: &dyn LeadSink, lead: &LeadRecord) -> bool {
    match sink.deliver(lead) {
        Ok(()) => {
            logf!("lead for {} delivered", lead.url);
            true
        }
        Err(e) => {
            loge!("lead for {} not delivered: {e}", lead.url);
            false
        }
    }
}
