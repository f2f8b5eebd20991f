//! Display formatting for article fields: dates, card previews, paragraph
//! and sentence splitting. Everything here is permissive; bad input falls
//! back to something renderable instead of an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Card previews show at most this many characters of the summary.
pub const PREVIEW_LEN: usize = 150;

/// Parse a feed-supplied date string. The feed is not consistent about
/// formats, so try the common ones before giving up.
pub fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
    {
        return Some(DateTime::from_naive_utc_and_offset(ndt, Utc));
    }
    if let Ok(nd) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return nd
            .and_hms_opt(0, 0, 0)
            .map(|ndt| DateTime::from_naive_utc_and_offset(ndt, Utc));
    }
    None
}

/// Short card date, e.g. "Mar 15, 2024". Unparsable input renders as-is.
pub fn display_date_short(raw: &str) -> String {
    match parse_published(raw) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Long detail-page date, e.g. "March 15, 2024". Unparsable input renders
/// as-is.
pub fn display_date_long(raw: &str) -> String {
    match parse_published(raw) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Truncate a summary for the card preview: the first [`PREVIEW_LEN`]
/// characters plus an ellipsis when longer, the summary verbatim otherwise.
pub fn summary_preview(summary: &str) -> String {
    if summary.chars().count() > PREVIEW_LEN {
        let mut preview: String = summary.chars().take(PREVIEW_LEN).collect();
        preview.push_str("...");
        preview
    } else {
        summary.to_string()
    }
}

/// Split free text into paragraphs on line breaks, dropping blank lines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Split insight text into sentences. A sentence ends at `.`, `?` or `!`
/// followed by whitespace. Each sentence is trimmed and rendered with its
/// first character upper-cased; empty fragments are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut at_boundary = false;
    for c in text.chars() {
        if at_boundary && c.is_whitespace() {
            push_sentence(&mut sentences, &current);
            current.clear();
            at_boundary = false;
            continue;
        }
        current.push(c);
        at_boundary = matches!(c, '.' | '?' | '!');
    }
    push_sentence(&mut sentences, &current);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(capitalize_first(trimmed));
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
