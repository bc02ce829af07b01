// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use visibility_audit::core::{HttpResponse, Transport};
use visibility_audit::error::TransportError;

pub const YEAR: i32 = 2026;
pub const READY_HTML: &str = include_str!("../fixtures/ready.html");
pub const BARE_HTML: &str = include_str!("../fixtures/bare.html");

/// Canned responses per URL; anything unlisted fails to connect.
/// Records every URL it was asked for.
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, Result<HttpResponse, TransportError>>,
    calls: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, status: u16, body: &str) -> Self {
        let resp = HttpResponse { status, final_url: url.to_string(), body: body.to_string() };
        self.routes.insert(url.to_string(), Ok(resp));
        self
    }

    pub fn timeout(mut self, url: &str) -> Self {
        self.routes.insert(url.to_string(), Err(TransportError::Timeout(url.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.calls.borrow_mut().push(url.to_string());
        self.routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(TransportError::Connect(format!("no route to {url}"))))
    }
}

/// Minimal document with the given head and body markup.
pub fn page(head: &str, body: &str) -> String {
    format!("<!DOCTYPE html><html><head>{head}</head><body>{body}</body></html>")
}
