//! Word accounting for one source document.

use serde::Serialize;

use super::{
    data::{SourceDocument, SourceFormat},
    strip::TagStripper,
};
use crate::utils::count_words;

/// Counts for one source document (or one selected column of a table).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountingRow {
    pub source_identifier: String,
    pub format: SourceFormat,
    /// Text column, for tabular sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub unit_count: usize,
    pub words_raw: usize,
    pub words_cleaned: usize,
    pub tagged_unit_count: usize,
    /// Unrounded `billable_words × rate`.
    pub cost_estimate: f64,
    /// Whether costs were computed on cleaned words.
    pub strip_enabled: bool,
}

impl AccountingRow {
    /// Words the cost was computed on.
    pub fn billable_words(&self) -> usize {
        if self.strip_enabled {
            self.words_cleaned
        } else {
            self.words_raw
        }
    }
}

/// Count strings, words and tagged strings of `document` and price them at `rate`.
///
/// A document without strings yields an all-zero row.
pub fn account(document: &SourceDocument, rate: f64, stripper: &TagStripper) -> AccountingRow {
    let mut words_raw = 0;
    let mut words_cleaned = 0;
    let mut tagged_unit_count = 0;

    for string in &document.strings {
        let cleaned = stripper.clean(&string.raw);
        words_raw += count_words(&string.raw);
        words_cleaned += count_words(&cleaned);
        if cleaned != string.raw.as_str() {
            tagged_unit_count += 1;
        }
    }

    let strip_enabled = stripper.is_enabled();
    let billable = if strip_enabled {
        words_cleaned
    } else {
        words_raw
    };

    AccountingRow {
        source_identifier: document.identifier.clone(),
        format: document.format,
        column: document.column.clone(),
        unit_count: document.strings.len(),
        words_raw,
        words_cleaned,
        tagged_unit_count,
        cost_estimate: billable as f64 * rate,
        strip_enabled,
    }
}

/// Translation effort assumptions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    pub words_per_hour: f64,
    pub hours_per_day: f64,
}

impl Default for Throughput {
    fn default() -> Self {
        Self {
            words_per_hour: 250.0,
            hours_per_day: 8.0,
        }
    }
}

/// Effort needed to translate a word count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeEstimate {
    pub hours: f64,
    pub days: f64,
}

impl Throughput {
    /// Effort for `words` translated into `languages` target languages.
    ///
    /// Non-positive throughput values yield a zero estimate.
    pub fn estimate(&self, words: usize, languages: usize) -> TimeEstimate {
        if self.words_per_hour <= 0.0 || self.hours_per_day <= 0.0 {
            return TimeEstimate {
                hours: 0.0,
                days: 0.0,
            };
        }
        let hours = words as f64 / self.words_per_hour * languages.max(1) as f64;
        TimeEstimate {
            hours,
            days: hours / self.hours_per_day,
        }
    }
}
