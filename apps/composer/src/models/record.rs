//! The field record: the eleven-field wire contract between extraction,
//! template authors, and the substitution engine.

use serde::{Deserialize, Serialize};

/// Canonical output of section extraction.
///
/// All eleven fields are always present. Identity and narrative fields hold
/// plain or lightly marked-up text; structured-list fields (skills,
/// experience, education, projects, certifications) hold pre-rendered block
/// markup once extraction succeeds. Extraction always rebuilds the record
/// from [`FieldRecord::default`]; it is never partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct FieldRecord {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub projects: String,
    pub certifications: String,
}

/// Fallback values are part of the contract: callers may assert them
/// literally, and they guarantee every field is defined in the output
/// document even when the generator omits a section entirely.
impl Default for FieldRecord {
    fn default() -> Self {
        FieldRecord {
            name: "John Doe".to_string(),
            title: "Software Engineer".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            summary: "Experienced software engineer with expertise in modern web technologies..."
                .to_string(),
            skills: String::new(),
            experience: String::new(),
            education: String::new(),
            projects: String::new(),
            certifications: String::new(),
        }
    }
}

impl FieldRecord {
    /// The eleven placeholder names, in contract order. Template authors may
    /// use any subset, in any order, any number of times.
    pub const FIELD_NAMES: [&'static str; 11] = [
        "NAME",
        "TITLE",
        "EMAIL",
        "PHONE",
        "LOCATION",
        "SUMMARY",
        "SKILLS",
        "EXPERIENCE",
        "EDUCATION",
        "PROJECTS",
        "CERTIFICATIONS",
    ];

    /// Placeholder-name/value pairs, in contract order.
    pub fn fields(&self) -> [(&'static str, &str); 11] {
        [
            ("NAME", self.name.as_str()),
            ("TITLE", self.title.as_str()),
            ("EMAIL", self.email.as_str()),
            ("PHONE", self.phone.as_str()),
            ("LOCATION", self.location.as_str()),
            ("SUMMARY", self.summary.as_str()),
            ("SKILLS", self.skills.as_str()),
            ("EXPERIENCE", self.experience.as_str()),
            ("EDUCATION", self.education.as_str()),
            ("PROJECTS", self.projects.as_str()),
            ("CERTIFICATIONS", self.certifications.as_str()),
        ]
    }
}
