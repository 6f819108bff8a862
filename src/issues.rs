//! Issue types for bilingual QA results.
//!
//! Each issue carries the key and both texts it was found in, so the
//! terminal reporter and the spreadsheet writer need nothing else.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue, least severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    Warning,
    High,
    Critical,
}

impl Severity {
    /// Capitalized label used in exported reports.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warning => "Warning",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rule {
    PlaceholderMismatch,
    MarkupMismatch,
    LengthOverflow,
}

impl Rule {
    /// Human-readable issue name used in exported reports.
    pub fn title(&self) -> &'static str {
        match self {
            Rule::PlaceholderMismatch => "Placeholder Missing",
            Rule::MarkupMismatch => "HTML Tag Corruption",
            Rule::LengthOverflow => "Potential UI Overflow",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::MarkupMismatch => write!(f, "markup-mismatch"),
            Rule::LengthOverflow => write!(f, "length-overflow"),
        }
    }
}

// ============================================================
// Context
// ============================================================

/// Key and texts an issue was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaContext {
    pub key: String,
    pub source_text: String,
    /// Empty when the key is absent from the target.
    pub target_text: String,
}

impl QaContext {
    pub fn new(
        key: impl Into<String>,
        source_text: impl Into<String>,
        target_text: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Placeholder tokens differ between source and target (order-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderMismatchIssue {
    pub context: QaContext,
    pub source_placeholders: Vec<String>,
    pub target_placeholders: Vec<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::High
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Markup tags differ between source and target (order-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkupMismatchIssue {
    pub context: QaContext,
    pub source_tags: Vec<String>,
    pub target_tags: Vec<String>,
}

impl MarkupMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Critical
    }

    pub fn rule() -> Rule {
        Rule::MarkupMismatch
    }
}

/// Target is more than twice as long as the source, in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthOverflowIssue {
    pub context: QaContext,
    pub source_len: usize,
    pub target_len: usize,
}

impl LengthOverflowIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::LengthOverflow
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A bilingual defect found by the QA differ.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QaIssue {
    PlaceholderMismatch(PlaceholderMismatchIssue),
    MarkupMismatch(MarkupMismatchIssue),
    LengthOverflow(LengthOverflowIssue),
}

impl QaIssue {
    pub fn severity(&self) -> Severity {
        match self {
            QaIssue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::severity(),
            QaIssue::MarkupMismatch(_) => MarkupMismatchIssue::severity(),
            QaIssue::LengthOverflow(_) => LengthOverflowIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            QaIssue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::rule(),
            QaIssue::MarkupMismatch(_) => MarkupMismatchIssue::rule(),
            QaIssue::LengthOverflow(_) => LengthOverflowIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for issues that can be reported to the terminal or a spreadsheet.
#[enum_dispatch]
pub trait Report {
    fn context(&self) -> &QaContext;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

fn format_tokens(tokens: &[String]) -> String {
    if tokens.is_empty() {
        "(none)".to_string()
    } else {
        tokens.join(" ")
    }
}

impl Report for PlaceholderMismatchIssue {
    fn context(&self) -> &QaContext {
        &self.context
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "source has {}, target has {}",
            format_tokens(&self.source_placeholders),
            format_tokens(&self.target_placeholders)
        ))
    }
}

impl Report for MarkupMismatchIssue {
    fn context(&self) -> &QaContext {
        &self.context
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "source has {}, target has {}",
            format_tokens(&self.source_tags),
            format_tokens(&self.target_tags)
        ))
    }
}

impl Report for LengthOverflowIssue {
    fn context(&self) -> &QaContext {
        &self.context
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "target is {} characters, source is {}",
            self.target_len, self.source_len
        ))
    }
}
