//! Generator-output cleanup: strips unfilled placeholder stubs from prose.
//!
//! Generated text sometimes carries instruction stubs the model failed to
//! fill in, like `[2-3 sentences here]`, `{city}` or `(optional)`. This pass
//! removes them. It must only run on prose destined for display, never on
//! bracket-delimited text: square-bracket stubs share their syntax with
//! section markers.

use std::sync::LazyLock;

use regex::Regex;

static SQUARE_STUB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("valid regex"));
static CURLY_STUB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}").expect("valid regex"));
static PAREN_STUB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid regex"));

/// Removes `[...]`, `{...}` and `(...)` spans and trims the result.
/// Surrounding whitespace inside the line is left as-is.
pub fn strip_placeholder_stubs(text: &str) -> String {
    let text = SQUARE_STUB.replace_all(text, "");
    let text = CURLY_STUB.replace_all(&text, "");
    let text = PAREN_STUB.replace_all(&text, "");
    text.trim().to_string()
}
