//! End-to-end composition: extraction followed by template substitution.
//!
//! Each invocation is a pure function of its inputs; nothing persists
//! between calls and concurrent invocations need no coordination.

use tracing::debug;

use crate::extract;
use crate::render;

/// Runs the full pipeline over bracket-delimited generated text.
pub fn compose(raw: &str, template: &str) -> String {
    let record = extract::extract(raw);
    debug!(input_chars = raw.len(), "extracted field record");
    render::render(template, &record)
}

/// Same pipeline, parsing the legacy bold-header grammar instead.
pub fn compose_legacy(raw: &str, template: &str) -> String {
    let record = extract::legacy::extract(raw);
    debug!(input_chars = raw.len(), "extracted field record (legacy markers)");
    render::render(template, &record)
}
