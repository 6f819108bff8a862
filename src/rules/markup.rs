//! Markup integrity between source and target.

use crate::core::strip::MARKUP_TAG_REGEX;
use crate::issues::{MarkupMismatchIssue, QaContext};

/// Markup tags of `text`, in order of appearance.
pub fn markup_tags(text: &str) -> Vec<String> {
    MARKUP_TAG_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Flag a key whose ordered tag sequence differs between source and target.
pub fn check_markup(key: &str, source: &str, target: &str) -> Option<MarkupMismatchIssue> {
    let source_tags = markup_tags(source);
    let target_tags = markup_tags(target);
    if source_tags == target_tags {
        return None;
    }
    Some(MarkupMismatchIssue {
        context: QaContext::new(key, source, target),
        source_tags,
        target_tags,
    })
}
