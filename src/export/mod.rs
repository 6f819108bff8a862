//! Spreadsheet export of count and QA reports.
//!
//! Exports are a side channel: the CLI reports a failure as a notice and
//! never changes its exit status because of it.
//!
//! ## Module Structure
//!
//! - `workbook`: sheet model and `.xlsx` writer
//! - `count`: sheets of the word count report
//! - `qa`: sheet of the QA report

pub mod count;
pub mod qa;
pub mod workbook;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Local};
use tracing::debug;

use self::workbook::WorkbookWriter;
use crate::{
    core::{Quote, Report},
    issues::QaIssue,
};

pub const COUNT_REPORT_KIND: &str = "word_count";
pub const QA_REPORT_KIND: &str = "qa_report";

/// `<kind>_<YYYYMMDD-HHMMSS>.xlsx`
pub fn report_file_name(kind: &str, now: &DateTime<Local>) -> String {
    format!("{}_{}.xlsx", kind, now.format("%Y%m%d-%H%M%S"))
}

/// What an export attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    /// There were no rows to write.
    NothingToExport,
}

/// Write the word count report into `dir`.
pub fn export_count(
    report: &Report,
    quote: &Quote,
    dir: &Path,
    now: &DateTime<Local>,
) -> Result<ExportOutcome> {
    if report.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }

    let path = dir.join(report_file_name(COUNT_REPORT_KIND, now));
    let mut writer = WorkbookWriter::new(&path);
    writer.add_sheet(count::word_count_sheet(report));
    if let Some(sheet) = count::cost_by_language_sheet(quote) {
        writer.add_sheet(sheet);
    }
    writer.add_sheet(count::summary_sheet(report, quote, now));
    writer.save()?;

    debug!(path = %path.display(), rows = report.rows.len(), "exported word count report");
    Ok(ExportOutcome::Written(path))
}

/// Write the QA issues into `dir`.
pub fn export_qa(issues: &[QaIssue], dir: &Path, now: &DateTime<Local>) -> Result<ExportOutcome> {
    if issues.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }

    let path = dir.join(report_file_name(QA_REPORT_KIND, now));
    let mut writer = WorkbookWriter::new(&path);
    writer.add_sheet(qa::qa_sheet(issues));
    writer.save()?;

    debug!(path = %path.display(), issues = issues.len(), "exported QA report");
    Ok(ExportOutcome::Written(path))
}
