//! Legacy marker grammar: markdown bold headers with no distinct closer.
//!
//! Earlier generator prompts emitted `**PROFESSIONAL SUMMARY**` section
//! headers and `**Name:** value` identity lines; a section body ran until
//! the next bold token or the end of the text. This adapter feeds the same
//! field record through the same formatters as the bracketed grammar; only
//! the marker syntax differs. The core extractor never branches into it.

use crate::models::record::FieldRecord;

use super::format;
use super::markers;
use super::sections::find_ignore_ascii_case;

/// Extracts the field record from bold-header generated text.
///
/// Same contract as [`super::extract`]: total, defaults on missing markers.
pub fn extract(raw: &str) -> FieldRecord {
    let mut record = FieldRecord::default();

    if let Some(value) = identity_line(raw, markers::NAME) {
        record.name = value;
    }
    if let Some(value) = identity_line(raw, markers::TITLE) {
        record.title = value;
    }
    if let Some(value) = identity_line(raw, markers::EMAIL) {
        record.email = value;
    }
    if let Some(value) = identity_line(raw, markers::PHONE) {
        record.phone = value;
    }
    if let Some(value) = identity_line(raw, markers::LOCATION) {
        record.location = value;
    }
    if let Some(body) = header_body(raw, markers::SUMMARY) {
        record.summary = format::with_line_breaks(&body);
    }
    if let Some(body) = header_body(raw, markers::SKILLS) {
        record.skills = format::skills(&body);
    }
    if let Some(body) = header_body(raw, markers::EXPERIENCE) {
        record.experience = format::experience(&body);
    }
    if let Some(body) = header_body(raw, markers::EDUCATION) {
        record.education = format::education(&body);
    }
    if let Some(body) = header_body(raw, markers::PROJECTS) {
        record.projects = format::projects(&body);
    }
    if let Some(body) = header_body(raw, markers::CERTIFICATIONS) {
        record.certifications = format::certifications(&body);
    }

    record
}

/// The text between `**header**` and the next `**` occurrence (or the end of
/// the input), trimmed. Unlike the bracketed grammar there is no distinct
/// closer, so a final section legitimately runs to the end of the text.
fn header_body(raw: &str, header: &str) -> Option<String> {
    let token = format!("**{header}**");
    let open = find_ignore_ascii_case(raw, &token, 0)?;
    let start = open + token.len();
    let end = find_ignore_ascii_case(raw, "**", start).unwrap_or(raw.len());
    Some(raw[start..end].trim().to_string())
}

/// The remainder of the line after `**label:**`, whitespace-skipped and
/// trimmed. An empty remainder counts as missing.
fn identity_line(raw: &str, label: &str) -> Option<String> {
    let token = format!("**{label}:**");
    let open = find_ignore_ascii_case(raw, &token, 0)?;
    let rest = raw[open + token.len()..].trim_start();
    let value = rest.lines().next().unwrap_or("").trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
