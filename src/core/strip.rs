//! Markup and placeholder stripping.
//!
//! Localization strings carry formatting markers (`<b>`, `<color=red>`) and
//! runtime placeholders (`{name}`, `{{count}}`) that translators never
//! translate. Stripping removes them so words are counted on translatable
//! content only.
//!
//! The passes run in a fixed order: tags, then placeholders, then whitespace.
//! Removing tags first means a placeholder embedded in a tag attribute goes
//! away together with its tag.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// A generic markup tag: `<`, a run of non-`>` characters, `>`.
///
/// Open, close and self-closing tags all match independently.
pub static MARKUP_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// A brace placeholder: `{`, a run of non-`}` characters, then the closing brace run.
///
/// Consumes `{name}` as well as `{{name}}` in one match.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]*\}+").unwrap());

/// Strips markup tags and placeholders from `raw`, then normalizes whitespace.
///
/// An absent value yields an empty string. Unbalanced delimiters are left
/// untouched: a `<` with no following `>` is kept as-is, and so is a `{`
/// with no following `}`.
///
/// # Examples
///
/// ```
/// use locount::core::strip;
///
/// assert_eq!(strip(Some("<b>설정</b>")), "설정");
/// assert_eq!(strip(Some("레벨 {level}")), "레벨");
/// assert_eq!(strip(None), "");
/// ```
pub fn strip(raw: Option<&str>) -> String {
    match raw {
        Some(text) => strip_markup(text),
        None => String::new(),
    }
}

/// Runs the three stripping passes on a present value.
pub fn strip_markup(text: &str) -> String {
    let without_tags = MARKUP_TAG_REGEX.replace_all(text, "");
    let without_placeholders = PLACEHOLDER_REGEX.replace_all(&without_tags, "");
    collapse_whitespace(&without_placeholders)
}

/// Collapses every whitespace run to a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Stripping policy applied by the word accountant.
///
/// When disabled, [`TagStripper::clean`] returns the raw text unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagStripper {
    enabled: bool,
}

impl Default for TagStripper {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl TagStripper {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn clean<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.enabled {
            Cow::Owned(strip_markup(raw))
        } else {
            Cow::Borrowed(raw)
        }
    }
}
