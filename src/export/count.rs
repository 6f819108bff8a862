//! Sheets of the word count report.

use chrono::{DateTime, Local};

use super::workbook::{Cell, Sheet};
use crate::{
    core::{Quote, Report},
    utils::{format_money, round_cents},
};

pub const WORD_COUNT_SHEET: &str = "Word Count";
pub const COST_BY_LANGUAGE_SHEET: &str = "Cost by Language";
pub const SUMMARY_SHEET: &str = "Summary";

/// Per-file rows plus a TOTAL row with blank text cells.
///
/// `Column` is only present when a row was read from a table column, and
/// `Strings with Tags` only when stripping was enabled.
pub fn word_count_sheet(report: &Report) -> Sheet {
    let with_columns = report.has_columns();
    let with_tags = report.strip_enabled();

    let mut headers = vec!["File Name", "Type"];
    if with_columns {
        headers.push("Column");
    }
    headers.extend(["Strings", "Words"]);
    if with_tags {
        headers.push("Strings with Tags");
    }
    headers.push("Cost (USD)");

    let mut sheet = Sheet::new(WORD_COUNT_SHEET, &headers);

    for row in &report.rows {
        let mut cells = vec![
            Cell::text(&row.source_identifier),
            Cell::text(row.format.label()),
        ];
        if with_columns {
            cells.push(row.column.as_deref().map_or(Cell::Blank, Cell::text));
        }
        cells.push(Cell::Integer(row.unit_count));
        cells.push(Cell::Integer(row.billable_words()));
        if with_tags {
            cells.push(Cell::Integer(row.tagged_unit_count));
        }
        cells.push(Cell::Number(round_cents(row.cost_estimate)));
        sheet.push_row(cells);
    }

    let totals = &report.totals;
    let mut cells = vec![Cell::text("TOTAL"), Cell::Blank];
    if with_columns {
        cells.push(Cell::Blank);
    }
    cells.push(Cell::Integer(totals.unit_count));
    cells.push(Cell::Integer(totals.billable_words));
    if with_tags {
        cells.push(Cell::Integer(totals.tagged_unit_count));
    }
    cells.push(Cell::Number(report.billed_cost()));
    sheet.push_row(cells);

    sheet
}

/// One row per selected target language, or `None` when none is selected.
pub fn cost_by_language_sheet(quote: &Quote) -> Option<Sheet> {
    if quote.languages.is_empty() {
        return None;
    }

    let mut sheet = Sheet::new(
        COST_BY_LANGUAGE_SHEET,
        &[
            "Target Language",
            "Rate (USD/word)",
            "Source Words",
            "Total Cost (USD)",
        ],
    );
    for language in &quote.languages {
        sheet.push_row(vec![
            Cell::text(&language.language),
            Cell::Number(language.rate),
            Cell::Integer(language.words),
            Cell::Number(round_cents(language.cost)),
        ]);
    }
    sheet.push_row(vec![
        Cell::text("TOTAL"),
        Cell::Blank,
        Cell::Blank,
        Cell::Number(quote.total_cost),
    ]);
    Some(sheet)
}

pub fn summary_sheet(report: &Report, quote: &Quote, now: &DateTime<Local>) -> Sheet {
    let languages = if quote.languages.is_empty() {
        "-".to_string()
    } else {
        quote
            .languages
            .iter()
            .map(|l| l.language.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut sheet = Sheet::new(SUMMARY_SHEET, &["Metric", "Value"]);
    let metrics = [
        ("Source Language", Cell::text(&quote.source_language)),
        ("Total Files", Cell::Integer(report.rows.len())),
        ("Total Words", Cell::Integer(report.totals.billable_words)),
        ("Target Languages", Cell::text(languages)),
        (
            "Total Cost (USD)",
            Cell::text(format!("${}", format_money(quote.total_cost))),
        ),
        (
            "Estimated Hours",
            Cell::Number((quote.time.hours * 10.0).round() / 10.0),
        ),
        (
            "Estimated Days",
            Cell::Number((quote.time.days * 10.0).round() / 10.0),
        ),
        (
            "Report Date",
            Cell::text(now.format("%Y-%m-%d %H:%M:%S").to_string()),
        ),
    ];
    for (metric, value) in metrics {
        sheet.push_row(vec![Cell::text(metric), value]);
    }
    sheet
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use crate::{
        core::{AccountingRow, RateTable, SourceFormat, Throughput, aggregate},
        export::count::*,
    };

    fn row(name: &str, column: Option<&str>, words: usize, cost: f64) -> AccountingRow {
        AccountingRow {
            source_identifier: name.to_string(),
            format: if column.is_some() {
                SourceFormat::Tabular
            } else {
                SourceFormat::Json
            },
            column: column.map(str::to_string),
            unit_count: 2,
            words_raw: words + 1,
            words_cleaned: words,
            tagged_unit_count: 1,
            cost_estimate: cost,
            strip_enabled: true,
        }
    }

    #[test]
    fn test_word_count_sheet_with_tags_without_columns() {
        let report = aggregate(vec![row("ui.json", None, 10, 1.5049)]);
        let sheet = word_count_sheet(&report);

        assert_eq!(
            sheet.headers,
            vec![
                "File Name",
                "Type",
                "Strings",
                "Words",
                "Strings with Tags",
                "Cost (USD)"
            ]
        );
        assert_eq!(
            sheet.rows[0],
            vec![
                Cell::text("ui.json"),
                Cell::text("JSON"),
                Cell::Integer(2),
                Cell::Integer(10),
                Cell::Integer(1),
                Cell::Number(1.5)
            ]
        );
        assert_eq!(sheet.rows.last().unwrap()[0], Cell::text("TOTAL"));
        assert_eq!(sheet.rows.last().unwrap()[1], Cell::Blank);
    }

    #[test]
    fn test_word_count_sheet_with_column_and_no_strip() {
        let mut tabular = row("dialogue.xlsx", Some("Korean"), 7, 1.05);
        tabular.strip_enabled = false;
        let mut json = row("ui.json", None, 3, 0.45);
        json.strip_enabled = false;
        let report = aggregate(vec![tabular, json]);
        let sheet = word_count_sheet(&report);

        assert_eq!(
            sheet.headers,
            vec!["File Name", "Type", "Column", "Strings", "Words", "Cost (USD)"]
        );
        assert_eq!(sheet.rows[0][2], Cell::text("Korean"));
        assert_eq!(sheet.rows[1][2], Cell::Blank);
        // Stripping disabled: words are raw words.
        assert_eq!(sheet.rows[0][4], Cell::Integer(8));
        let total = sheet.rows.last().unwrap();
        assert_eq!(total[4], Cell::Integer(12));
        assert_eq!(total[5], Cell::Number(1.5));
    }

    #[test]
    fn test_total_cost_adds_up_displayed_costs() {
        let report = aggregate(vec![
            row("a.json", None, 1, 0.005),
            row("b.json", None, 1, 0.005),
            row("c.json", None, 1, 0.005),
        ]);
        let sheet = word_count_sheet(&report);

        let costs: Vec<&Cell> = sheet.rows.iter().map(|r| r.last().unwrap()).collect();
        assert_eq!(
            costs,
            vec![
                &Cell::Number(0.01),
                &Cell::Number(0.01),
                &Cell::Number(0.01),
                &Cell::Number(0.03)
            ]
        );

        let languages = vec!["English (EN)".to_string(), "Vietnamese (VI)".to_string()];
        let rates = RateTable::new(0.0051, BTreeMap::new());
        let quote = Quote::new(
            &report,
            "Korean (KO)",
            &languages,
            &rates,
            &Throughput::default(),
        );
        let sheet = cost_by_language_sheet(&quote).unwrap();
        // 3 words at 0.0051 is 0.0153, shown as 0.02 per language
        assert_eq!(sheet.rows[0][3], Cell::Number(0.02));
        assert_eq!(sheet.rows[2][3], Cell::Number(0.04));
    }

    #[test]
    fn test_cost_by_language_sheet() {
        let report = aggregate(vec![row("ui.json", None, 100, 15.0)]);
        let languages = vec!["English (EN)".to_string(), "Japanese (JA)".to_string()];
        let quote = Quote::new(
            &report,
            "Korean (KO)",
            &languages,
            &RateTable::default(),
            &Throughput::default(),
        );
        let sheet = cost_by_language_sheet(&quote).unwrap();
        assert_eq!(sheet.rows.len(), 3);
        assert_eq!(sheet.rows[1][0], Cell::text("Japanese (JA)"));
        assert_eq!(sheet.rows[1][3], Cell::Number(20.0));
        assert_eq!(sheet.rows[2][3], Cell::Number(36.0));

        let quote = Quote::new(
            &report,
            "Korean (KO)",
            &[],
            &RateTable::default(),
            &Throughput::default(),
        );
        assert!(cost_by_language_sheet(&quote).is_none());
    }

    #[test]
    fn test_summary_sheet() {
        let report = aggregate(vec![row("ui.json", None, 2000, 300.0)]);
        let quote = Quote::new(
            &report,
            "Korean (KO)",
            &[],
            &RateTable::default(),
            &Throughput::default(),
        );
        let now = Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        let sheet = summary_sheet(&report, &quote, &now);

        let value = |metric: &str| {
            sheet
                .rows
                .iter()
                .find(|r| r[0] == Cell::text(metric))
                .map(|r| r[1].clone())
                .unwrap()
        };
        assert_eq!(value("Source Language"), Cell::text("Korean (KO)"));
        assert_eq!(value("Total Files"), Cell::Integer(1));
        assert_eq!(value("Total Words"), Cell::Integer(2000));
        assert_eq!(value("Target Languages"), Cell::text("-"));
        assert_eq!(value("Total Cost (USD)"), Cell::text("$300.00"));
        assert_eq!(value("Estimated Hours"), Cell::Number(8.0));
        assert_eq!(value("Estimated Days"), Cell::Number(1.0));
        assert_eq!(value("Report Date"), Cell::text("2024-03-05 14:07:09"));
    }
}
