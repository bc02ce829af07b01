// src/cli.rs
use std::{path::PathBuf, time::Duration};

use chrono::Utc;
use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, bail};

use crate::audit::Auditor;
use crate::config::{AuditOptions, FetchOptions, ScoringPolicy, consts::WEBHOOK_TIMEOUT_MS};
use crate::export;
use crate::fetch::normalize_target;
use crate::sink::{LeadRecord, WebhookSink, deliver_quietly};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
    Tsv,
}

/// Score how visible a business website is to AI assistants and search agents.
#[derive(Parser, Debug)]
#[command(name = "visibility_audit", version, about)]
pub struct Args {
    /// Website to audit, e.g. yourbusiness.com
    pub url: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Per-candidate timeout in seconds (kept within 2.5..12)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<f64>,

    #[arg(long)]
    pub user_agent: Option<String>,

    /// Do not try plain http:// after the HTTPS candidates
    #[arg(long)]
    pub no_http_fallback: bool,

    /// JSON scoring policy (weights, thresholds, ceilings, keywords)
    #[arg(long, value_name = "FILE")]
    pub policy: Option<PathBuf>,

    /// Year the freshness check looks for (default: current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Send the result as a lead to this webhook
    #[arg(long, value_name = "URL", requires_all = ["name", "email"])]
    pub webhook: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// -v info, -vv debug (logs go to stderr)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    crate::log::init(args.verbose);

    let options = build_options(&args)?;
    let mut auditor = Auditor::new(options).wrap_err("cannot build HTTP client")?;
    if let Some(year) = args.year {
        auditor = auditor.with_year(year);
    }

    let report = auditor.run(&args.url);
    let display = normalize_target(&args.url);

    let rendered = match args.format {
        OutputFormat::Text => export::render_text(&report, &display),
        OutputFormat::Json => export::render_json(&report)?,
        OutputFormat::Csv => export::render_csv(&report, ','),
        OutputFormat::Tsv => export::render_csv(&report, '\t'),
    };
    print!("{rendered}");
    if args.format == OutputFormat::Json {
        println!();
    }

    if let (Some(endpoint), Some(name), Some(email)) = (&args.webhook, &args.name, &args.email) {
        let sink = WebhookSink::new(endpoint.as_str(), Duration::from_millis(WEBHOOK_TIMEOUT_MS))?;
        let lead = LeadRecord::from_report(name, email, &args.url, &report, Utc::now());
        if !deliver_quietly(&sink, &lead) {
            eprintln!("Note: lead could not be delivered (see log with -v).");
        }
    }
    Ok(())
}

fn build_options(args: &Args) -> Result<AuditOptions> {
    let mut fetch = FetchOptions::default();
    if let Some(secs) = args.timeout {
        if !secs.is_finite() || secs <= 0.0 {
            bail!("--timeout must be a positive number of seconds");
        }
        let timeout = Duration::try_from_secs_f64(secs).wrap_err("--timeout out of range")?;
        fetch = fetch.with_timeout(timeout);
    }
    if let Some(ua) = &args.user_agent {
        fetch.user_agent = ua.clone();
    }
    fetch.allow_http_fallback = !args.no_http_fallback;

    let policy = match &args.policy {
        Some(path) => ScoringPolicy::load(path)?,
        None => ScoringPolicy::default(),
    };

    Ok(AuditOptions { fetch, policy })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&["visibility_audit", "example.com"]);
        assert_eq!(args.format, OutputFormat::Text);
        let opts = build_options(&args).unwrap();
        assert_eq!(opts, AuditOptions::default());
    }

    #[test]
    fn timeout_is_clamped_and_validated() {
        let args = parse(&["visibility_audit", "example.com", "--timeout", "60"]);
        let opts = build_options(&args).unwrap();
        assert_eq!(opts.fetch.timeout, Duration::from_secs(12));

        let args = parse(&["visibility_audit", "example.com", "--timeout", "1"]);
        let opts = build_options(&args).unwrap();
        assert_eq!(opts.fetch.timeout, Duration::from_millis(2_500));

        let args = parse(&["visibility_audit", "example.com", "--timeout", "0"]);
        assert!(build_options(&args).is_err());
    }

    #[test]
    fn webhook_needs_name_and_email() {
        let err = Args::try_parse_from(["visibility_audit", "example.com", "--webhook", "https://hook"]);
        assert!(err.is_err());
        let ok = Args::try_parse_from([
            "visibility_audit", "example.com", "--webhook", "https://hook",
            "--name", "Ann", "--email", "ann@example.com",
        ]);
        assert!(ok.is_ok());
    }

    #[test]
    fn no_http_fallback_flag() {
        let args = parse(&["visibility_audit", "example.com", "--no-http-fallback", "-f", "json"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(!build_options(&args).unwrap().fetch.allow_http_fallback);
    }
}
