// src/signals/contact.rs
// Local/contact presence. Never scores zero: a business without a visible
// phone number still most likely exists, so the miss earns partial credit.

use std::sync::LazyLock;

use regex::Regex;

use super::Page;
use crate::config::ScoringPolicy;
use crate::core::html;
use crate::core::sanitize::{contains_word_prefix, strip_prefix_ci};
use crate::score::SignalResult;

// North American (555) 123-4567 / 555.123.4567, leading +CC optional.
static PHONE_NANP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?1[\s.-]?)?\(?\b\d{3}\)?[\s.-]?\d{3}[\s.-]\d{4}\b").expect("valid phone pattern")
});

// International with explicit +CC, or trunk-prefixed national (UK/EU style).
static PHONE_INTL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+\d{1,3}[\s.-]?\(?\d{1,4}\)?(?:[\s.-]?\d{2,4}){2,4}|\b0\d{2,4}[\s-]\d{3,4}[\s-]?\d{3,4}\b)")
        .expect("valid intl phone pattern")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b").expect("valid email pattern")
});

// US ZIP / ZIP+4, UK postcode. Input is lowercased.
static POSTAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:\d{5}(?:-\d{4})?|[a-z]{1,2}\d[a-z\d]?\s?\d[a-z]{2})\b").expect("valid postal pattern")
});

const LINK_SCHEMES: &[&str] = &["tel:", "mailto:"];

fn has_contact_link(page: &Page<'_>) -> bool {
    html::select_all(page.doc(), "a[href]").iter().any(|a| {
        a.value()
            .attr("href")
            .is_some_and(|h| LINK_SCHEMES.iter().any(|p| strip_prefix_ci(h.trim(), p).is_some()))
    })
}

pub fn check(page: &Page<'_>, policy: &ScoringPolicy) -> SignalResult {
    let w = &policy.weights;
    let text = page.text_lower();

    let found = if PHONE_NANP.is_match(text) || PHONE_INTL.is_match(text) {
        Some(s!("Phone number found"))
    } else if EMAIL.is_match(text) {
        Some(s!("Email address found"))
    } else if has_contact_link(page) {
        Some(s!("tel:/mailto: link found"))
    } else if POSTAL.is_match(text) {
        Some(s!("Postal code found"))
    } else {
        policy
            .contact_keywords
            .iter()
            .find(|kw| contains_word_prefix(text, &kw.to_lowercase()))
            .map(|kw| format!("Contact keyword \"{kw}\""))
    };

    match found {
        Some(note) => SignalResult::full(w.contact, note),
        None => SignalResult::new(w.contact_partial, w.contact, "No contact details; partial credit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_patterns() {
        assert!(PHONE_NANP.is_match("call (555) 123-4567 today"));
        assert!(PHONE_NANP.is_match("555.123.4567"));
        assert!(PHONE_INTL.is_match("+44 20 7946 0958"));
        assert!(PHONE_INTL.is_match("tel 020 7946 0958"));
        assert!(!PHONE_NANP.is_match("since 2026-10-19"));
        assert!(!PHONE_INTL.is_match("since 2026-10-19"));
    }

    #[test]
    fn email_and_postal_patterns() {
        assert!(EMAIL.is_match("write to hello@acme-plumbing.co.uk"));
        assert!(!EMAIL.is_match("no at sign here"));
        assert!(POSTAL.is_match("springfield, il 62704"));
        assert!(POSTAL.is_match("london sw1a 1aa"));
        assert!(!POSTAL.is_match("est. 1998"));
    }
}
