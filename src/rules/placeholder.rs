//! Placeholder consistency between source and target.

use std::sync::LazyLock;

use regex::Regex;

use crate::issues::{PlaceholderMismatchIssue, QaContext};

/// A brace-delimited run (`{name}`) or a `%`-prefixed format specifier (`%d`).
static PLACEHOLDER_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}|%\w").unwrap());

/// Placeholder tokens of `text`, in order of appearance.
pub fn placeholders(text: &str) -> Vec<String> {
    PLACEHOLDER_TOKEN_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Flag a key whose ordered placeholder sequence differs between source and target.
pub fn check_placeholders(
    key: &str,
    source: &str,
    target: &str,
) -> Option<PlaceholderMismatchIssue> {
    let source_placeholders = placeholders(source);
    let target_placeholders = placeholders(target);
    if source_placeholders == target_placeholders {
        return None;
    }
    Some(PlaceholderMismatchIssue {
        context: QaContext::new(key, source, target),
        source_placeholders,
        target_placeholders,
    })
}
