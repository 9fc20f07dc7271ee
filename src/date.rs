//! ISO date handling for route parameters.
//!
//! A path segment is accepted as a date when it contains a `YYYY-MM-DD`
//! pattern anywhere in the string; the first match is the canonical date.
//! The check is purely lexical — the calendar is not consulted, so
//! `2024-13-99` passes.

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("regex: iso date"));

/// Extract the first `YYYY-MM-DD` substring from a raw path segment.
/// `None` means the segment carries no date at all.
pub fn extract_date(raw: &str) -> Option<String> {
    ISO_DATE_RE.find(raw).map(|m| m.as_str().to_string())
}

/// Today's local date as `YYYY-MM-DD`, for the bare-token redirect.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
