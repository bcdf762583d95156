//! Text helpers shared by the view model and the HTML renderer.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::DateValue;

/// Titles longer than this many characters are cut in the modal heading.
pub const TITLE_PREVIEW_CHARS: usize = 50;
pub const ELLIPSIS: &str = "...";

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
];

/// Escape text for interpolation into markup, both as element content and
/// as a double- or single-quoted attribute value.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Display form of a backend date, e.g. `Jan 5, 2024`.
///
/// Text that cannot be parsed as a date is shown unchanged.
pub fn format_date(value: &DateValue) -> String {
    match value {
        DateValue::Text(raw) => parse_date_text(raw)
            .map(short_date)
            .unwrap_or_else(|| raw.clone()),
        DateValue::EpochMillis(millis) => DateTime::from_timestamp_millis(*millis)
            .map(|dt| short_date(dt.date_naive()))
            .unwrap_or_else(|| millis.to_string()),
        DateValue::Missing => String::new(),
    }
}

/// Long header form, e.g. `Monday, January 15, 2024`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
}

/// First [`TITLE_PREVIEW_CHARS`] characters of `title`, with [`ELLIPSIS`]
/// appended when anything was cut.
pub fn truncate_title(title: &str) -> String {
    match title.char_indices().nth(TITLE_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &title[..cut]),
        None => title.to_string(),
    }
}

/// Similarity score as a whole percentage, rounded half away from zero.
pub fn match_percent(score: f64) -> u32 {
    if !score.is_finite() || score <= 0.0 {
        return 0;
    }
    (score * 100.0).round() as u32
}

/// Loose email shape check: something, `@`, something, `.`, something.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_SHAPE.is_match(candidate)
}
