//! Plain-text extraction from Wikipedia XML dumps
//!
//! Pulls the body of every `<text>` element, decodes entities, and strips
//! markup (tags, `{{templates}}`, `[[links]]`) so the result can be fed
//! straight into the word counter.

use regex::Regex;
use std::sync::OnceLock;

use crate::utils::normalize_whitespace;

/// `<text ...>body</text>`, across lines
fn text_element() -> &'static Regex {
    static TEXT_RE: OnceLock<Regex> = OnceLock::new();
    TEXT_RE.get_or_init(|| Regex::new(r"(?s)<text[^>]*>(.*?)</text>").expect("Invalid regex pattern"))
}

/// Markup tags and comments; a bare `<` or `>` in prose is left alone
fn tag() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| {
        Regex::new(r"(?s)<!--.*?-->|</?[A-Za-z][^<>]*>").expect("Invalid regex pattern")
    })
}

fn template() -> &'static Regex {
    static TEMPLATE_RE: OnceLock<Regex> = OnceLock::new();
    TEMPLATE_RE.get_or_init(|| Regex::new(r"(?s)\{\{.*?\}\}").expect("Invalid regex pattern"))
}

/// `[[target|display]]`
fn piped_link() -> &'static Regex {
    static PIPED_LINK_RE: OnceLock<Regex> = OnceLock::new();
    PIPED_LINK_RE
        .get_or_init(|| Regex::new(r"\[\[[^\]]*?\|(.*?)\]\]").expect("Invalid regex pattern"))
}

/// `[[target]]`
fn simple_link() -> &'static Regex {
    static SIMPLE_LINK_RE: OnceLock<Regex> = OnceLock::new();
    SIMPLE_LINK_RE.get_or_init(|| Regex::new(r"\[\[(.*?)\]\]").expect("Invalid regex pattern"))
}

/// Clean the markup out of a single page body
pub fn clean_page(body: &str) -> String {
    let decoded = html_escape::decode_html_entities(body);
    let text = tag().replace_all(&decoded, " ");
    let text = template().replace_all(&text, " ");
    let text = piped_link().replace_all(&text, "$1");
    let text = simple_link().replace_all(&text, "$1");
    normalize_whitespace(&text)
}

/// Extract the cleaned text of every page in a dump
///
/// Pages are separated by a blank line. A document without `<text>`
/// elements yields an empty string.
pub fn extract_text(xml: &str) -> String {
    let pages: Vec<String> = text_element()
        .captures_iter(xml)
        .filter_map(|caps| caps.get(1))
        .map(|body| clean_page(body.as_str()))
        .collect();

    tracing::debug!(pages = pages.len(), "Extracted wiki pages");
    pages.join("\n\n")
}
