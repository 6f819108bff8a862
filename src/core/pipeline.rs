//! The extract → strip → account → aggregate pipeline.
//!
//! Every input is processed independently, so files are extracted and
//! accounted in parallel. Results are collected in input order and folded
//! into the report at a single point. Per-file errors never abort a batch:
//! they are returned alongside the report.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{debug, warn};

use super::{
    account::{AccountingRow, account},
    data::SourceDocument,
    error::SourceError,
    extract::{ColumnSelector, Extract, Extractor},
    report::{Report, aggregate, sort_rows},
    strip::TagStripper,
};

/// Settings for one counting run.
#[derive(Debug, Clone)]
pub struct CountOptions {
    /// Rate applied to every row, in USD per word.
    pub rate: f64,
    pub stripper: TagStripper,
    pub columns: ColumnSelector,
    /// Keep zero-valued rows for files that yield no strings.
    pub keep_empty: bool,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            rate: super::rates::DEFAULT_RATE,
            stripper: TagStripper::default(),
            columns: ColumnSelector::default(),
            keep_empty: false,
        }
    }
}

/// Result of a counting run.
#[derive(Debug, Default)]
pub struct CountOutcome {
    pub report: Report,
    /// Files that could not be counted.
    pub skipped: Vec<SourceError>,
    /// Files that were read but yielded no strings.
    pub empty: Vec<SourceError>,
}

impl CountOutcome {
    pub fn files_counted(&self) -> usize {
        self.report.rows.len()
    }
}

/// Count every file in `files`.
pub fn count_files(files: &[PathBuf], options: &CountOptions) -> CountOutcome {
    let results: Vec<(String, Result<AccountingRow, SourceError>)> = files
        .par_iter()
        .map(|path| {
            let row = Extractor::for_path(path, &options.columns)
                .and_then(|extractor| extractor.extract(path))
                .map(|document| account(&document, options.rate, &options.stripper));
            (path.to_string_lossy().to_string(), row)
        })
        .collect();
    fold(results, options)
}

/// Count already-extracted documents.
pub fn count_documents(documents: &[SourceDocument], options: &CountOptions) -> CountOutcome {
    let results: Vec<(String, Result<AccountingRow, SourceError>)> = documents
        .par_iter()
        .map(|document| {
            (
                document.identifier.clone(),
                Ok(account(document, options.rate, &options.stripper)),
            )
        })
        .collect();
    fold(results, options)
}

fn fold(
    results: Vec<(String, Result<AccountingRow, SourceError>)>,
    options: &CountOptions,
) -> CountOutcome {
    let mut rows = Vec::with_capacity(results.len());
    let mut skipped = Vec::new();
    let mut empty = Vec::new();

    for (path, result) in results {
        match result {
            Ok(row) if row.unit_count == 0 => {
                debug!(file = %path, "no strings extracted");
                empty.push(SourceError::EmptyExtraction { path });
                if options.keep_empty {
                    rows.push(row);
                }
            }
            Ok(row) => rows.push(row),
            Err(err) => {
                warn!(file = %err.path(), error = %err, "skipping file");
                skipped.push(err);
            }
        }
    }

    sort_rows(&mut rows);
    CountOutcome {
        report: aggregate(rows),
        skipped,
        empty,
    }
}
