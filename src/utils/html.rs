//! Markup helpers for catalog summaries.

use regex::Regex;
use std::sync::OnceLock;

/// Text shown in place of an absent or empty summary.
pub const NO_SUMMARY: &str = "No summary available.";

fn tag_pattern() -> Option<&'static Regex> {
    static TAG: OnceLock<Option<Regex>> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]+>").ok()).as_ref()
}

/// Remove all markup tags in a single pass. Absent input yields an empty string.
pub fn strip_tags(html: Option<&str>) -> String {
    let Some(html) = html else {
        return String::new();
    };
    match tag_pattern() {
        Some(re) => re.replace_all(html, "").into_owned(),
        None => html.to_string(),
    }
}

/// Plain-text summary for display, substituting the placeholder when empty.
pub fn display_summary(html: Option<&str>) -> String {
    let text = strip_tags(html);
    if text.is_empty() {
        NO_SUMMARY.to_string()
    } else {
        text
    }
}
