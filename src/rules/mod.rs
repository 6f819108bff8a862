//! Bilingual QA rules.
//!
//! Each rule is a pure function over one key's source and target text and
//! returns its own issue type. [`diff`] runs every rule over a pair of keyed
//! string maps.
//!
//! ## Module Structure
//!
//! - `placeholder`: placeholder sequence mismatch
//! - `markup`: markup tag sequence mismatch
//! - `length`: excessive length expansion

pub mod length;
pub mod markup;
pub mod placeholder;

pub use length::check_length;
pub use markup::check_markup;
pub use placeholder::check_placeholders;

use crate::{core::KeyedStrings, issues::QaIssue};

/// Compare every source key against its translation.
///
/// A key absent from `target` is compared against an empty string; absence
/// itself is not an issue. Rules run independently, so one key can yield up
/// to three issues. Issues follow the source key order.
pub fn diff(source: &KeyedStrings, target: &KeyedStrings) -> Vec<QaIssue> {
    let mut issues = Vec::new();

    for (key, source_text) in source.iter() {
        let target_text = target.get(key).unwrap_or("");

        if let Some(issue) = check_placeholders(key, source_text, target_text) {
            issues.push(issue.into());
        }
        if let Some(issue) = check_markup(key, source_text, target_text) {
            issues.push(issue.into());
        }
        if let Some(issue) = check_length(key, source_text, target_text) {
            issues.push(issue.into());
        }
    }

    issues
}
