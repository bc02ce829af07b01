// src/core/net.rs
// HTTP GET behind a trait so the fetcher can be driven by a fake in tests.

use reqwest::blocking::Client;

use crate::config::FetchOptions;
use crate::error::TransportError;

/// What the fetcher needs to know about a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// URL after redirects. Informational; the audit keeps the candidate URL.
    pub final_url: String,
    pub body: String,
}

pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

/// Blocking reqwest client configured from `FetchOptions`.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(opts: &FetchOptions) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .danger_accept_invalid_certs(opts.accept_invalid_certs)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let final_url = resp.url().to_string();
        // Non-2xx bodies are never evaluated.
        let body = if resp.status().is_success() { resp.text()? } else { s!() };
        Ok(HttpResponse { status, final_url, body })
    }
}
