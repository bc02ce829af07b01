// src/core/html.rs
// Thin helpers over `scraper`. None of these fail: a bad selector or a
// missing tag just yields nothing.

use scraper::{ElementRef, Html, Node, Selector};

use super::sanitize::normalize_ws;

// Text under these elements is never shown to a visitor.
const HIDDEN_PARENTS: &[&str] = &["script", "style", "noscript", "template"];

/// All elements matching `css`, in document order.
pub fn select_all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(sel) => doc.select(&sel).collect(),
        Err(_) => Vec::new(),
    }
}

/// Text content of one element, pieces joined by a space, whitespace collapsed.
pub fn element_text(el: &ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<Vec<_>>().join(" "))
}

/// Raw (unnormalized) text of an element, e.g. the body of a `<script>`.
pub fn raw_text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

/// Visible text of the whole document: every text node except those inside
/// script/style-like elements.
pub fn visible_text(doc: &Html) -> String {
    let mut out = String::new();
    for node in doc.root_element().descendants() {
        let Node::Text(text) = node.value() else { continue };
        let hidden = node
            .parent()
            .and_then(|p| p.value().as_element())
            .is_some_and(|el| HIDDEN_PARENTS.contains(&el.name()));
        if !hidden {
            out.push_str(text);
            out.push(' ');
        }
    }
    normalize_ws(&out)
}

/// Whitespace-separated attribute tokens, e.g. `rel="canonical alternate"`.
pub fn has_token(el: &ElementRef<'_>, attr: &str, token: &str) -> bool {
    el.value()
        .attr(attr)
        .is_some_and(|v| v.split_ascii_whitespace().any(|t| t.eq_ignore_ascii_case(token)))
}
