//! Shortcode extraction from markdown text.
//!
//! The extractor is a pure function: it scans a markdown blob for
//! colon-delimited emoji shortcodes (`:smile:`, `:+1:`) and returns them in
//! first-occurrence order with duplicates removed. It is deliberately not a
//! markdown parser — the only token it understands is the shortcode itself.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static SHORTCODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([A-Za-z0-9_+-]+):").expect("shortcode regex is valid"));

/// Extract emoji shortcodes from a markdown blob.
///
/// Tokens consist of letters, digits, underscore, plus and hyphen between
/// two colons. The literal token `---` is rejected so that markdown table
/// separator rows (`|---|---|`) never produce a phantom shortcode.
///
/// Deduplicates by first occurrence and preserves discovery order. An input
/// without matches yields an empty vec; there are no error conditions.
pub fn extract(markdown: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for captures in SHORTCODE_REGEX.captures_iter(markdown) {
        let code = &captures[1];
        if code == "---" {
            continue;
        }
        if seen.insert(code.to_string()) {
            found.push(code.to_string());
        }
    }

    found
}
