//! Per-section formatting: turns trimmed section bodies into the block
//! markup embedded by the document templates.
//!
//! Output carries the class names the templates bind to (`skill-category`,
//! `experience-item`, `cert-item`, ...). Values stored in the field record
//! are final markup; nothing downstream re-escapes or re-processes them.

/// Maximum certification lines rendered; later lines are silently dropped
/// so certifications never crowd out the sections above them on one page.
pub const CERTIFICATION_LIMIT: usize = 3;

/// Converts internal newlines to explicit `<br>` tokens so multi-line text
/// renders as separate visual lines inside a single block element.
pub fn with_line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

/// Formats the skills section: one self-contained group per non-blank line.
///
/// A line containing a colon is `category: items`; the category becomes the
/// group heading and the remainder after the first colon the item list. A
/// line with no colon becomes an unlabeled group headed "Skills".
pub fn skills(body: &str) -> String {
    let mut html = String::new();
    for line in body.lines().filter(|line| !line.trim().is_empty()) {
        let (heading, items) = match line.split_once(':') {
            Some((category, rest)) => (category.trim(), rest.trim()),
            None => ("Skills", line.trim()),
        };
        html.push_str(&format!(
            r#"<div class="skill-category">
  <h4>{heading}</h4>
  <div class="skill-list">{items}</div>
</div>
"#
        ));
    }
    html
}

/// Formats the experience section. Per entry, lines are taken positionally:
/// job title, company (empty if absent), date range (empty if absent), then
/// the remaining lines newline-joined as the description.
pub fn experience(body: &str) -> String {
    let mut html = String::new();
    for entry in split_entries(body) {
        let title = entry[0];
        let company = entry.get(1).copied().unwrap_or("");
        let date = entry.get(2).copied().unwrap_or("");
        let description = with_line_breaks(&entry.get(3..).unwrap_or_default().join("\n"));
        html.push_str(&format!(
            r#"<div class="experience-item">
  <div class="item-header">
    <div>
      <div class="item-title">{title}</div>
      <div class="item-company">{company}</div>
    </div>
    <div class="item-date">{date}</div>
  </div>
  <div class="item-description">{description}</div>
</div>
"#
        ));
    }
    html
}

/// Formats the education section: degree, institution, date. No description
/// slot; any further lines in an entry are ignored.
pub fn education(body: &str) -> String {
    let mut html = String::new();
    for entry in split_entries(body) {
        let degree = entry[0];
        let institution = entry.get(1).copied().unwrap_or("");
        let date = entry.get(2).copied().unwrap_or("");
        html.push_str(&format!(
            r#"<div class="education-item">
  <div class="item-header">
    <div>
      <div class="item-title">{degree}</div>
      <div class="item-company">{institution}</div>
    </div>
    <div class="item-date">{date}</div>
  </div>
</div>
"#
        ));
    }
    html
}

/// Formats the projects section: project name, then the remaining lines as
/// the description.
pub fn projects(body: &str) -> String {
    let mut html = String::new();
    for entry in split_entries(body) {
        let name = entry[0];
        let description = with_line_breaks(&entry.get(1..).unwrap_or_default().join("\n"));
        html.push_str(&format!(
            r#"<div class="project-item">
  <div class="item-header">
    <div class="item-title">{name}</div>
  </div>
  <div class="item-description">{description}</div>
</div>
"#
        ));
    }
    html
}

/// Formats the certifications section: one certification per non-blank line,
/// capped at [`CERTIFICATION_LIMIT`]. A line containing `" - "` splits into
/// a name and an issuing body; text after a second `" - "` is dropped.
pub fn certifications(body: &str) -> String {
    let mut html = String::new();
    for line in body
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(CERTIFICATION_LIMIT)
    {
        let mut segments = line.split(" - ");
        let name = segments.next().unwrap_or(line).trim();
        match segments.next() {
            Some(issuer) => {
                let issuer = issuer.trim();
                html.push_str(&format!(
                    r#"<div class="cert-item">
  <div class="cert-name">{name}</div>
  <div class="cert-issuer">{issuer}</div>
</div>
"#
                ));
            }
            None => {
                html.push_str(&format!(
                    r#"<div class="cert-item">
  <div class="cert-name">{name}</div>
</div>
"#
                ));
            }
        }
    }
    html
}

/// Splits a structured-list body into logical entries.
///
/// An entry is a contiguous run of non-blank lines. A run only starts a new
/// entry when its first line leads with a word character; a bullet- or
/// punctuation-led run attaches to the previous entry. This is a heuristic,
/// not a grammar: a date or company line left leading a run by stray blank
/// lines starts a spurious entry.
fn split_entries(body: &str) -> Vec<Vec<&str>> {
    let mut entries: Vec<Vec<&str>> = Vec::new();
    let mut run_start = true;
    for line in body.lines() {
        if line.trim().is_empty() {
            run_start = true;
            continue;
        }
        let opens_entry = run_start && line.chars().next().is_some_and(is_word_char);
        if entries.is_empty() || opens_entry {
            entries.push(vec![line]);
        } else if let Some(current) = entries.last_mut() {
            current.push(line);
        }
        run_start = false;
    }
    entries
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_line_breaks_converts_every_newline() {
        assert_eq!(with_line_breaks("a\nb\nc"), "a<br>b<br>c");
        assert_eq!(with_line_breaks("no breaks"), "no breaks");
    }

    #[test]
    fn test_skills_line_with_colon_becomes_category() {
        let html = skills("Languages: Go, Rust, TypeScript");
        assert!(html.contains("<h4>Languages</h4>"));
        assert!(html.contains(r#"<div class="skill-list">Go, Rust, TypeScript</div>"#));
    }

    #[test]
    fn test_skills_line_without_colon_gets_default_heading() {
        let html = skills("Go, Rust");
        assert!(html.contains("<h4>Skills</h4>"));
        assert!(html.contains(r#"<div class="skill-list">Go, Rust</div>"#));
    }

    #[test]
    fn test_skills_remainder_keeps_later_colons() {
        let html = skills("Tooling: kubectl, kubectl port-forward 8080:80");
        assert!(html.contains("<h4>Tooling</h4>"));
        assert!(html.contains("kubectl port-forward 8080:80"));
    }

    #[test]
    fn test_skills_groups_concatenate_in_source_order() {
        let html = skills("Languages: Rust\n\nDatabases: Postgres");
        let languages = html.find("Languages").unwrap();
        let databases = html.find("Databases").unwrap();
        assert!(languages < databases);
        assert_eq!(html.matches("skill-category").count(), 2);
    }

    #[test]
    fn test_experience_positional_schema() {
        let html = experience("Engineer\nAcme Corp\n2020 - 2022\nBuilt X\nBuilt Y");
        assert_eq!(html.matches("experience-item").count(), 1);
        assert!(html.contains(r#"<div class="item-title">Engineer</div>"#));
        assert!(html.contains(r#"<div class="item-company">Acme Corp</div>"#));
        assert!(html.contains(r#"<div class="item-date">2020 - 2022</div>"#));
        assert!(html.contains(r#"<div class="item-description">Built X<br>Built Y</div>"#));
    }

    #[test]
    fn test_experience_missing_company_and_date_render_empty() {
        let html = experience("Engineer");
        assert!(html.contains(r#"<div class="item-company"></div>"#));
        assert!(html.contains(r#"<div class="item-date"></div>"#));
        assert!(html.contains(r#"<div class="item-description"></div>"#));
    }

    #[test]
    fn test_blank_line_separates_entries() {
        let html = experience("Engineer\nAcme\n2020\n\nManager\nBeta\n2022");
        assert_eq!(html.matches("experience-item").count(), 2);
    }

    #[test]
    fn test_bullet_run_after_blank_line_attaches_to_previous_entry() {
        let html = experience("Engineer\nAcme\n2020\n\n- Shipped the parser\n- Cut costs");
        assert_eq!(html.matches("experience-item").count(), 1);
        assert!(html.contains("- Shipped the parser<br>- Cut costs"));
    }

    // Known edge of the boundary heuristic: a digit-led line leading a run
    // starts its own entry. Accepted, not worked around.
    #[test]
    fn test_digit_led_run_starts_spurious_entry() {
        let html = experience("Engineer\nAcme\n\n2020 - 2022");
        assert_eq!(html.matches("experience-item").count(), 2);
        assert!(html.contains(r#"<div class="item-title">2020 - 2022</div>"#));
    }

    #[test]
    fn test_leading_bullet_body_still_forms_an_entry() {
        let html = experience("- stray bullet first\nEngineer");
        assert_eq!(html.matches("experience-item").count(), 1);
        assert!(html.contains(r#"<div class="item-title">- stray bullet first</div>"#));
    }

    #[test]
    fn test_education_has_no_description_slot() {
        let html = education("MSc Mathematics\nUniversity of London\n2014\nextra line");
        assert_eq!(html.matches("education-item").count(), 1);
        assert!(html.contains(r#"<div class="item-title">MSc Mathematics</div>"#));
        assert!(html.contains(r#"<div class="item-company">University of London</div>"#));
        assert!(html.contains(r#"<div class="item-date">2014</div>"#));
        assert!(!html.contains("item-description"));
        assert!(!html.contains("extra line"));
    }

    #[test]
    fn test_projects_name_then_description() {
        let html = projects("Crate Indexer\nIncremental indexing daemon.\nWritten in Rust.");
        assert_eq!(html.matches("project-item").count(), 1);
        assert!(html.contains(r#"<div class="item-title">Crate Indexer</div>"#));
        assert!(html
            .contains(r#"<div class="item-description">Incremental indexing daemon.<br>Written in Rust.</div>"#));
    }

    #[test]
    fn test_certifications_capped_at_three_in_order() {
        let html = certifications("First\nSecond\nThird\nFourth\nFifth");
        assert_eq!(html.matches("cert-item").count(), CERTIFICATION_LIMIT);
        let first = html.find("First").unwrap();
        let third = html.find("Third").unwrap();
        assert!(first < third);
        assert!(!html.contains("Fourth"));
        assert!(!html.contains("Fifth"));
    }

    #[test]
    fn test_certification_with_issuer() {
        let html = certifications("CKA - CNCF");
        assert!(html.contains(r#"<div class="cert-name">CKA</div>"#));
        assert!(html.contains(r#"<div class="cert-issuer">CNCF</div>"#));
    }

    #[test]
    fn test_certification_without_issuer_omits_issuer_block() {
        let html = certifications("Rust Certified Developer");
        assert!(html.contains(r#"<div class="cert-name">Rust Certified Developer</div>"#));
        assert!(!html.contains("cert-issuer"));
    }

    // A third " - " segment is dropped, matching the two-slot schema.
    #[test]
    fn test_certification_third_segment_is_dropped() {
        let html = certifications("CISSP - ISC2 - 2020");
        assert!(html.contains(r#"<div class="cert-name">CISSP</div>"#));
        assert!(html.contains(r#"<div class="cert-issuer">ISC2</div>"#));
        assert!(!html.contains("2020"));
    }

    #[test]
    fn test_empty_bodies_produce_empty_markup() {
        assert_eq!(skills(""), "");
        assert_eq!(experience(""), "");
        assert_eq!(education(""), "");
        assert_eq!(projects(""), "");
        assert_eq!(certifications(""), "");
    }
}
