// src/lib.rs
//! Heuristic "AI visibility" scoring for business websites.
//!
//! ```no_run
//! let report = visibility_audit::run_audit("yourbusiness.com");
//! println!("{}/100 {}", report.score(), report.verdict().label());
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod audit;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod evaluate;
pub mod export;
pub mod fetch;
pub mod score;
pub mod signals;
pub mod sink;

pub use audit::{Auditor, fallback_report, run_audit};
pub use config::{AuditOptions, FetchOptions, ScoringPolicy};
pub use error::ConnectError;
pub use evaluate::Evaluator;
pub use fetch::{ConnectionOutcome, FetchedPage, Fetcher};
pub use score::{AuditReport, AuditStatus, Severity, SignalResult, Verdict};

#[doc(hidden)]
pub use tracing;
