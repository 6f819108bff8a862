//! Length expansion of a translation.

use crate::issues::{LengthOverflowIssue, QaContext};

/// A target longer than this multiple of the source length may overflow the UI.
pub const MAX_EXPANSION: usize = 2;

/// Flag a key whose target is more than twice as long as its source.
///
/// Lengths are counted in characters.
pub fn check_length(key: &str, source: &str, target: &str) -> Option<LengthOverflowIssue> {
    let source_len = source.chars().count();
    let target_len = target.chars().count();
    if target_len <= source_len * MAX_EXPANSION {
        return None;
    }
    Some(LengthOverflowIssue {
        context: QaContext::new(key, source, target),
        source_len,
        target_len,
    })
}
