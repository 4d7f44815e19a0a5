//! Template substitution: literal `{{FIELD}}` replacement, no escaping.
//!
//! Document authors own the structural safety of the fields they choose to
//! interpolate; narrative fields legitimately carry `<br>` markup that
//! escaping would break.

use crate::models::record::FieldRecord;

/// Replaces every `{{NAME}}`-style placeholder matching one of the eleven
/// field names with the corresponding field value, verbatim.
///
/// Total and deterministic. A single left-to-right scan: substituted values
/// are never rescanned, so a field value containing `{{` or `}}` sequences
/// is not re-substituted. Unknown placeholder tokens pass through unchanged,
/// as does a template with no placeholders at all.
pub fn render(template: &str, fields: &FieldRecord) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let known = after_open
            .find("}}")
            .and_then(|close| lookup(fields, &after_open[..close]).map(|value| (close, value)));
        match known {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after_open[close + 2..];
            }
            None => {
                // Not a known token: emit the braces literally and keep
                // scanning right after them.
                out.push_str("{{");
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}

fn lookup<'a>(fields: &'a FieldRecord, token: &str) -> Option<&'a str> {
    fields
        .fields()
        .into_iter()
        .find(|(name, _)| *name == token)
        .map(|(_, value)| value)
}
