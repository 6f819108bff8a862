//! Terminal output for count reports and QA issues.
//!
//! Count reports are rendered as an aligned table; QA issues are printed in
//! cargo style. Every function has a `_to` variant that writes to any
//! `Write` so output can be tested.

use std::{
    io::{self, Write},
    path::Path,
};

use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::{
    core::{Quote, Report, SourceError},
    export::ExportOutcome,
    issues::{QaIssue, Report as _, Severity},
    utils::{format_money, format_thousands, pad_left, pad_right, truncate_to_width},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// File names longer than this are truncated in the table.
const MAX_NAME_WIDTH: usize = 40;

/// Texts longer than this are truncated in QA listings.
const MAX_TEXT_WIDTH: usize = 80;

// ============================================================
// Count Report
// ============================================================

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Column {
    title: &'static str,
    align: Align,
}

fn columns(report: &Report) -> Vec<Column> {
    let mut columns = vec![
        Column {
            title: "File Name",
            align: Align::Left,
        },
        Column {
            title: "Type",
            align: Align::Left,
        },
    ];
    if report.has_columns() {
        columns.push(Column {
            title: "Column",
            align: Align::Left,
        });
    }
    columns.push(Column {
        title: "Strings",
        align: Align::Right,
    });
    columns.push(Column {
        title: "Words",
        align: Align::Right,
    });
    if report.strip_enabled() {
        columns.push(Column {
            title: "Tagged",
            align: Align::Right,
        });
    }
    columns.push(Column {
        title: "Cost (USD)",
        align: Align::Right,
    });
    columns
}

fn body_rows(report: &Report) -> Vec<Vec<String>> {
    let with_columns = report.has_columns();
    let with_tags = report.strip_enabled();

    let mut rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                truncate_to_width(&row.source_identifier, MAX_NAME_WIDTH),
                row.format.label().to_string(),
            ];
            if with_columns {
                cells.push(row.column.clone().unwrap_or_default());
            }
            cells.push(format_thousands(row.unit_count));
            cells.push(format_thousands(row.billable_words()));
            if with_tags {
                cells.push(format_thousands(row.tagged_unit_count));
            }
            cells.push(format_money(row.cost_estimate));
            cells
        })
        .collect();

    let totals = &report.totals;
    let mut cells = vec!["TOTAL".to_string(), String::new()];
    if with_columns {
        cells.push(String::new());
    }
    cells.push(format_thousands(totals.unit_count));
    cells.push(format_thousands(totals.billable_words));
    if with_tags {
        cells.push(format_thousands(totals.tagged_unit_count));
    }
    cells.push(format_money(report.billed_cost()));
    rows.push(cells);
    rows
}

fn render_line(cells: &[String], columns: &[Column], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(columns)
        .zip(widths)
        .map(|((cell, column), width)| match column.align {
            Align::Left => pad_right(cell, *width),
            Align::Right => pad_left(cell, *width),
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Print the count table followed by the quote.
pub fn print_count_report(report: &Report, quote: &Quote) {
    print_count_report_to(report, quote, &mut io::stdout().lock());
}

pub fn print_count_report_to<W: Write>(report: &Report, quote: &Quote, writer: &mut W) {
    let columns = columns(report);
    let rows = body_rows(report);
    let titles: Vec<String> = columns.iter().map(|c| c.title.to_string()).collect();

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| {
            rows.iter()
                .chain(std::iter::once(&titles))
                .map(|cells| UnicodeWidthStr::width(cells[i].as_str()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let rule = "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1));

    let _ = writeln!(writer, "{}", render_line(&titles, &columns, &widths).bold());
    let _ = writeln!(writer, "{}", rule.dimmed());
    if let Some((total, files)) = rows.split_last() {
        for cells in files {
            let _ = writeln!(writer, "{}", render_line(cells, &columns, &widths));
        }
        let _ = writeln!(writer, "{}", rule.dimmed());
        let _ = writeln!(writer, "{}", render_line(total, &columns, &widths).bold());
    }

    print_quote_to(quote, writer);
}

fn print_quote_to<W: Write>(quote: &Quote, writer: &mut W) {
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{} {}", "Source language:".bold(), quote.source_language);

    if !quote.languages.is_empty() {
        let name_width = quote
            .languages
            .iter()
            .map(|l| UnicodeWidthStr::width(l.language.as_str()))
            .max()
            .unwrap_or(0);
        let _ = writeln!(writer, "{}", "Cost by language:".bold());
        for language in &quote.languages {
            let _ = writeln!(
                writer,
                "  {}  {:.2}/word  ${}",
                pad_right(&language.language, name_width),
                language.rate,
                format_money(language.cost)
            );
        }
    }

    let _ = writeln!(
        writer,
        "{} ${}",
        "Total cost:".bold(),
        format_money(quote.total_cost)
    );
    let _ = writeln!(
        writer,
        "{} {:.1} hours ({:.1} days)",
        "Estimated effort:".bold(),
        quote.time.hours,
        quote.time.days
    );
}

/// Print warnings about inputs that were skipped or produced no text.
pub fn print_file_warnings(skipped: &[SourceError], empty: &[SourceError], missing: &[&Path]) {
    print_file_warnings_to(skipped, empty, missing, &mut io::stderr().lock());
}

pub fn print_file_warnings_to<W: Write>(
    skipped: &[SourceError],
    empty: &[SourceError],
    missing: &[&Path],
    writer: &mut W,
) {
    for path in missing {
        let _ = writeln!(
            writer,
            "{} {}: path does not exist",
            "warning:".bold().yellow(),
            path.display()
        );
    }
    for err in skipped.iter().chain(empty) {
        let action = if err.is_warning() { "" } else { "skipped " };
        let _ = writeln!(
            writer,
            "{} {}{}: {}",
            "warning:".bold().yellow(),
            action,
            err.path(),
            err
        );
    }
}

/// Warn that `language` has no configured rate and is priced at `rate`.
pub fn print_rate_fallback(language: &str, rate: f64) {
    print_rate_fallback_to(language, rate, &mut io::stderr().lock());
}

pub fn print_rate_fallback_to<W: Write>(language: &str, rate: f64, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} no rate configured for '{}', using default rate {}/word",
        "warning:".bold().yellow(),
        language,
        rate
    );
}

// ============================================================
// QA Issues
// ============================================================

/// Print QA issues in cargo-style format, most severe first.
pub fn report_issues(issues: &[QaIssue]) {
    report_issues_to(issues, &mut io::stdout().lock());
}

pub fn report_issues_to<W: Write>(issues: &[QaIssue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted: Vec<&QaIssue> = issues.iter().collect();
    // Stable: keeps source key order within a severity.
    sorted.sort_by_key(|issue| std::cmp::Reverse(issue.severity()));

    for issue in sorted {
        print_issue(issue, writer);
    }
    print_issue_summary(issues, writer);
}

fn severity_label(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Critical => "critical".bold().red(),
        Severity::High => "high".bold().magenta(),
        Severity::Warning => "warning".bold().yellow(),
    }
}

fn print_issue<W: Write>(issue: &QaIssue, writer: &mut W) {
    let context = issue.context();
    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_label(issue.severity()),
        context.key,
        issue.rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(
        writer,
        "  {} {} {}",
        "=".blue(),
        "source:".bold(),
        truncate_to_width(&context.source_text, MAX_TEXT_WIDTH)
    );
    let _ = writeln!(
        writer,
        "  {} {} {}",
        "=".blue(),
        "target:".bold(),
        truncate_to_width(&context.target_text, MAX_TEXT_WIDTH)
    );
    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }
    let _ = writeln!(writer);
}

fn print_issue_summary<W: Write>(issues: &[QaIssue], writer: &mut W) {
    let count = |severity: Severity| issues.iter().filter(|i| i.severity() == severity).count();
    let critical = count(Severity::Critical);
    let high = count(Severity::High);
    let warnings = count(Severity::Warning);

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        if issues.len() == 1 { "problem" } else { "problems" },
        critical,
        "critical".red(),
        high,
        "high".magenta(),
        warnings,
        (if warnings == 1 { "warning" } else { "warnings" }).yellow()
    );
}

/// Print a success message when no QA issues are found.
pub fn print_qa_success(keys: usize) {
    print_qa_success_to(keys, &mut io::stdout().lock());
}

pub fn print_qa_success_to<W: Write>(keys: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Compared {} {} - no issues found",
            keys,
            if keys == 1 { "key" } else { "keys" }
        )
        .green()
    );
}

// ============================================================
// Notices
// ============================================================

/// Report the result of a spreadsheet export. Failures are notices only.
pub fn print_export_notice(result: &Result<ExportOutcome>) {
    print_export_notice_to(result, &mut io::stderr().lock());
}

pub fn print_export_notice_to<W: Write>(result: &Result<ExportOutcome>, writer: &mut W) {
    match result {
        Ok(ExportOutcome::Written(path)) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Report saved to {}", path.display()).green()
            );
        }
        Ok(ExportOutcome::NothingToExport) => {
            let _ = writeln!(writer, "{} no rows to export", "note:".bold());
        }
        Err(err) => {
            let _ = writeln!(
                writer,
                "{} failed to export report: {:#}",
                "warning:".bold().yellow(),
                err
            );
        }
    }
}
