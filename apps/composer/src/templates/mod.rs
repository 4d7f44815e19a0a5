//! Template registry: resolves template names to placeholder-bearing HTML.
//!
//! Templates are authored externally and are opaque to the pipeline; the
//! registry only does name lookup. A directory of `*.html` files is loaded
//! keyed by file stem, and the embedded `modern` template is the
//! zero-configuration fallback.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;

/// The embedded fallback template. Carries every placeholder of the field
/// record contract and the styles for the block markup the extractor emits.
pub const BUILTIN_MODERN: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Resume</title>
<style>
  * { margin: 0; padding: 0; box-sizing: border-box; }
  body {
    font-family: 'Helvetica Neue', Arial, sans-serif;
    font-size: 11px;
    line-height: 1.5;
    color: #1f2933;
    padding: 32px 40px;
  }
  .header { border-bottom: 2px solid #2563eb; padding-bottom: 12px; margin-bottom: 16px; }
  .header h1 { font-size: 26px; letter-spacing: 1px; }
  .header .headline { font-size: 14px; color: #2563eb; margin-top: 2px; }
  .contact { margin-top: 6px; color: #52606d; }
  .contact span + span::before { content: " | "; }
  h2 {
    font-size: 13px;
    text-transform: uppercase;
    letter-spacing: 2px;
    color: #2563eb;
    border-bottom: 1px solid #d9e2ec;
    margin: 14px 0 8px;
  }
  .skill-category { margin-bottom: 6px; }
  .skill-category h4 { display: inline; font-size: 11px; }
  .skill-list { display: inline; margin-left: 4px; }
  .experience-item, .education-item, .project-item { margin-bottom: 10px; }
  .item-header { display: flex; justify-content: space-between; }
  .item-title { font-weight: bold; }
  .item-company { color: #52606d; }
  .item-date { color: #7b8794; white-space: nowrap; }
  .item-description { margin-top: 3px; }
  .cert-item { margin-bottom: 4px; }
  .cert-name { display: inline; font-weight: bold; }
  .cert-issuer { display: inline; color: #52606d; margin-left: 4px; }
</style>
</head>
<body>
  <div class="header">
    <h1>{{NAME}}</h1>
    <div class="headline">{{TITLE}}</div>
    <div class="contact">
      <span>{{EMAIL}}</span>
      <span>{{PHONE}}</span>
      <span>{{LOCATION}}</span>
    </div>
  </div>
  <h2>Summary</h2>
  <p>{{SUMMARY}}</p>
  <h2>Technical Skills</h2>
  {{SKILLS}}
  <h2>Experience</h2>
  {{EXPERIENCE}}
  <h2>Projects</h2>
  {{PROJECTS}}
  <h2>Education</h2>
  {{EDUCATION}}
  <h2>Certifications</h2>
  {{CERTIFICATIONS}}
</body>
</html>
"#;

/// A named document template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub html: String,
}

/// In-memory template registry.
#[derive(Debug, Default)]
pub struct TemplateStore {
    templates: HashMap<String, Template>,
}

impl TemplateStore {
    /// A store holding only the embedded `modern` template.
    pub fn builtin() -> Self {
        let mut templates = HashMap::new();
        templates.insert(
            "modern".to_string(),
            Template {
                name: "modern".to_string(),
                html: BUILTIN_MODERN.to_string(),
            },
        );
        TemplateStore { templates }
    }

    /// Loads every `*.html` file in `dir`, keyed by file stem.
    /// Other files are ignored.
    pub fn load_dir(dir: &Path) -> Result<Self, AppError> {
        let mut templates = HashMap::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("html") {
                continue;
            }
            let name = match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };
            let html = fs::read_to_string(&path)?;
            debug!(template = %name, "loaded template");
            templates.insert(
                name.clone(),
                Template { name, html },
            );
        }
        Ok(TemplateStore { templates })
    }

    /// Resolves a template by name. Unknown names are a boundary error the
    /// caller surfaces; the pipeline itself never sees them.
    pub fn get(&self, name: &str) -> Result<&Template, AppError> {
        self.templates
            .get(name)
            .ok_or_else(|| AppError::TemplateNotFound(name.to_string()))
    }

    /// Registered template names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::FieldRecord;
    use std::io::Write;

    #[test]
    fn test_builtin_template_carries_every_placeholder_once() {
        for name in FieldRecord::FIELD_NAMES {
            let placeholder = format!("{{{{{name}}}}}");
            assert_eq!(
                BUILTIN_MODERN.matches(&placeholder).count(),
                1,
                "placeholder {name} must appear exactly once"
            );
        }
    }

    #[test]
    fn test_builtin_store_resolves_modern() {
        let store = TemplateStore::builtin();
        let template = store.get("modern").unwrap();
        assert_eq!(template.name, "modern");
        assert_eq!(template.html, BUILTIN_MODERN);
    }

    #[test]
    fn test_unknown_template_is_a_not_found_error() {
        let store = TemplateStore::builtin();
        let err = store.get("brutalist").unwrap_err();
        assert!(matches!(err, AppError::TemplateNotFound(name) if name == "brutalist"));
    }

    #[test]
    fn test_load_dir_keys_html_files_by_stem() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["modern.html", "classic.html"] {
            let mut file = fs::File::create(dir.path().join(name)).unwrap();
            writeln!(file, "<html>{{{{NAME}}}}</html>").unwrap();
        }
        fs::File::create(dir.path().join("notes.txt")).unwrap();

        let store = TemplateStore::load_dir(dir.path()).unwrap();
        assert_eq!(store.names(), vec!["classic", "modern"]);
        assert!(store.get("modern").unwrap().html.contains("{{NAME}}"));
    }

    #[test]
    fn test_load_dir_on_empty_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::load_dir(dir.path()).unwrap();
        assert!(store.is_empty());
    }
}
