//! Section extraction: raw generated resume text into the eleven-field
//! record.
//!
//! Each section is located independently between paired bracketed markers.
//! A section whose opener is missing or never closed falls back to the
//! field's default; extraction is total and any input yields a complete
//! record.

pub mod cleanup;
pub mod format;
pub mod legacy;
pub mod sections;

use crate::models::record::FieldRecord;

use self::sections::section_body;

/// Canonical section marker names. Matching is ASCII-case-insensitive, so
/// the casing here mirrors the generator prompts rather than a rule.
pub mod markers {
    pub const NAME: &str = "Name";
    pub const TITLE: &str = "Title";
    pub const EMAIL: &str = "Email";
    pub const PHONE: &str = "Phone";
    pub const LOCATION: &str = "Location";
    pub const SUMMARY: &str = "PROFESSIONAL SUMMARY";
    pub const SKILLS: &str = "TECHNICAL SKILLS";
    pub const EXPERIENCE: &str = "PROFESSIONAL EXPERIENCE";
    pub const EDUCATION: &str = "EDUCATION";
    pub const PROJECTS: &str = "PROJECTS";
    pub const CERTIFICATIONS: &str = "CERTIFICATIONS";
}

/// Extracts the field record from bracket-delimited generated text.
///
/// Never fails. The record starts from its defaults and each located section
/// overwrites its field: identity fields verbatim (trimmed), the summary
/// line-break normalized, structured-list sections rendered to block markup.
pub fn extract(raw: &str) -> FieldRecord {
    let mut record = FieldRecord::default();

    if let Some(body) = section_body(raw, markers::NAME) {
        record.name = body;
    }
    if let Some(body) = section_body(raw, markers::TITLE) {
        record.title = body;
    }
    if let Some(body) = section_body(raw, markers::EMAIL) {
        record.email = body;
    }
    if let Some(body) = section_body(raw, markers::PHONE) {
        record.phone = body;
    }
    if let Some(body) = section_body(raw, markers::LOCATION) {
        record.location = body;
    }
    if let Some(body) = section_body(raw, markers::SUMMARY) {
        record.summary = format::with_line_breaks(&body);
    }
    if let Some(body) = section_body(raw, markers::SKILLS) {
        record.skills = format::skills(&body);
    }
    if let Some(body) = section_body(raw, markers::EXPERIENCE) {
        record.experience = format::experience(&body);
    }
    if let Some(body) = section_body(raw, markers::EDUCATION) {
        record.education = format::education(&body);
    }
    if let Some(body) = section_body(raw, markers::PROJECTS) {
        record.projects = format::projects(&body);
    }
    if let Some(body) = section_body(raw, markers::CERTIFICATIONS) {
        record.certifications = format::certifications(&body);
    }

    record
}
