// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "FoundByAI/2.0 (+visibility audit)";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const MIN_TIMEOUT_MS: u64 = 2_500;
pub const MAX_TIMEOUT_MS: u64 = 12_000;
pub const WEBHOOK_TIMEOUT_MS: u64 = 5_000;

// Statuses that mean "a server is there but refuses scripted clients".
pub const BLOCKING_STATUSES: &[u16] = &[403, 406, 429, 503];

// Verdict thresholds (inclusive lower bounds)
pub const PARTIALLY_VISIBLE_AT: u8 = 60;
pub const AI_READY_AT: u8 = 85;

// Ceilings
pub const CEILING_WITHOUT_SCHEMA: u32 = 55;
pub const CEILING_WITHOUT_VOICE: u32 = 75;

// Degraded mode
pub const FALLBACK_SCORE: u8 = 35;

// Accessibility: share of <img> that must carry alt text
pub const ALT_COVERAGE_PERCENT: u32 = 80;

pub const SCHEMA_MARKERS: &[&str] = &[
    "Organization",
    "LocalBusiness",
    "Person",
    "ProfessionalService",
];

pub const VOICE_KEYWORDS: &[&str] = &[
    "how", "cost", "price", "where", "faq", "what is", "best", "near",
    "why", "when", "who", "can i", "does",
];

pub const CONTACT_KEYWORDS: &[&str] = &["contact", "call", "tel:", "address", "phone", "email"];

// Matched against lowercased raw HTML.
pub const YEAR_SCRIPT_PATTERNS: &[&str] = &[
    "getfullyear(",
    "getyear(",
    "'now' | date",
    "\"now\" | date",
    "now()|date",
    "moment().year()",
    "dayjs().year()",
];
