// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// True when `needle` occurs in `haystack` starting at a word boundary.
/// `"how"` matches "How much" and "however" but not "show".
/// Both sides are expected lowercased.
pub fn contains_word_prefix(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(i, _)| {
        haystack[..i]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric())
    })
}

/// Comparison key for URLs: trimmed, ASCII-lowercased, trailing slashes dropped.
pub fn url_key(s: &str) -> String {
    let lower = s.trim().to_ascii_lowercase();
    lower.trim_end_matches('/').to_string()
}

/// Case-insensitive ASCII prefix strip.
pub fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let n = prefix.len();
    if s.len() >= n && s.as_bytes()[..n].eq_ignore_ascii_case(prefix.as_bytes()) {
        // prefix is ASCII, so `n` is a char boundary
        s.get(n..)
    } else {
        None
    }
}
