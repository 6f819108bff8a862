//! Report aggregation and cost/time quotes.

use std::cmp::Reverse;

use serde::Serialize;

use super::{
    account::{AccountingRow, Throughput, TimeEstimate},
    rates::RateTable,
};
use crate::utils::round_cents;

/// Column sums over every row of a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportTotals {
    pub unit_count: usize,
    pub words_raw: usize,
    pub words_cleaned: usize,
    /// Sum of each row's billable words.
    pub billable_words: usize,
    pub tagged_unit_count: usize,
    /// Sum of per-row costs.
    pub cost_estimate: f64,
}

/// Ordered rows plus a synthetic TOTAL row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<AccountingRow>,
    pub totals: ReportTotals,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when every row was accounted with stripping enabled.
    pub fn strip_enabled(&self) -> bool {
        self.rows.iter().all(|row| row.strip_enabled)
    }

    /// True when any row was read from a table column.
    pub fn has_columns(&self) -> bool {
        self.rows.iter().any(|row| row.column.is_some())
    }

    /// Sum of the cent-rounded row costs, so the TOTAL matches the rows shown above it.
    pub fn billed_cost(&self) -> f64 {
        round_cents(
            self.rows
                .iter()
                .map(|row| round_cents(row.cost_estimate))
                .sum(),
        )
    }
}

/// Append `rows` in the order received and compute the TOTAL row.
///
/// The total cost is the sum of per-row costs, not recomputed from summed words.
pub fn aggregate(rows: Vec<AccountingRow>) -> Report {
    let totals = rows
        .iter()
        .fold(ReportTotals::default(), |mut totals, row| {
            totals.unit_count += row.unit_count;
            totals.words_raw += row.words_raw;
            totals.words_cleaned += row.words_cleaned;
            totals.billable_words += row.billable_words();
            totals.tagged_unit_count += row.tagged_unit_count;
            totals.cost_estimate += row.cost_estimate;
            totals
        });
    Report { rows, totals }
}

/// Group rows by format label, largest billable word count first within a group.
pub fn sort_rows(rows: &mut [AccountingRow]) {
    rows.sort_by_key(|row| (row.format.label(), Reverse(row.billable_words())));
}

/// Cost of a report for one target language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageCost {
    pub language: String,
    pub rate: f64,
    pub words: usize,
    pub cost: f64,
}

/// Cost and effort of a report across the selected target languages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub source_language: String,
    pub languages: Vec<LanguageCost>,
    /// Sum of the cent-rounded language costs, or the report's billed cost
    /// when no language is selected.
    pub total_cost: f64,
    pub time: TimeEstimate,
}

impl Quote {
    pub fn new(
        report: &Report,
        source_language: &str,
        languages: &[String],
        rates: &RateTable,
        throughput: &Throughput,
    ) -> Self {
        let words = report.totals.billable_words;
        let languages: Vec<LanguageCost> = languages
            .iter()
            .map(|language| {
                let rate = rates.rate_for(language);
                LanguageCost {
                    language: language.clone(),
                    rate,
                    words,
                    cost: words as f64 * rate,
                }
            })
            .collect();

        let total_cost = if languages.is_empty() {
            report.billed_cost()
        } else {
            round_cents(languages.iter().map(|l| round_cents(l.cost)).sum())
        };

        Self {
            source_language: source_language.to_string(),
            time: throughput.estimate(words, languages.len()),
            languages,
            total_cost,
        }
    }
}
