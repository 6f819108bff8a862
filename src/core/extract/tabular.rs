use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use super::{DEFAULT_TEXT_COLUMNS, Extract, display_path, identifier_for};
use crate::core::{
    data::{SourceDocument, SourceFormat, TranslatableString},
    error::SourceError,
};

/// A table with named columns; the first row of the source is the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Present cells of `column`, in row order, keyed by spreadsheet row.
    ///
    /// Missing and zero-length cells are dropped. Whitespace-only cells are
    /// kept: they count as a string with no words.
    pub fn column_values(&self, column: &str) -> Vec<TranslatableString> {
        let Some(idx) = self.column_index(column) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(row_idx, row)| {
                let cell = row.get(idx)?.as_deref()?;
                if cell.is_empty() {
                    return None;
                }
                // Header occupies row 1
                Some(TranslatableString::keyed(
                    cell,
                    format!("{}:{}", column, row_idx + 2),
                ))
            })
            .collect()
    }
}

/// How the translatable-text column is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelector {
    /// Candidate names, tried in order.
    pub candidates: Vec<String>,
    /// Explicit column; must match exactly when set.
    pub explicit: Option<String>,
}

impl Default for ColumnSelector {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_TEXT_COLUMNS.iter().map(|s| s.to_string()).collect(),
            explicit: None,
        }
    }
}

impl ColumnSelector {
    pub fn new(candidates: Vec<String>, explicit: Option<String>) -> Self {
        Self {
            candidates,
            explicit,
        }
    }

    /// Resolve the text column of `table`.
    ///
    /// Exact (case-sensitive) candidate matches win over case-insensitive ones.
    pub fn find_column<'t>(&self, table: &'t Table) -> Option<&'t str> {
        if let Some(explicit) = &self.explicit {
            return table
                .columns
                .iter()
                .find(|c| *c == explicit)
                .map(String::as_str);
        }

        for candidate in &self.candidates {
            if let Some(col) = table.columns.iter().find(|c| *c == candidate) {
                return Some(col.as_str());
            }
        }

        for candidate in &self.candidates {
            let lower = candidate.to_lowercase();
            if let Some(col) = table.columns.iter().find(|c| c.to_lowercase() == lower) {
                return Some(col.as_str());
            }
        }

        None
    }

    /// Names reported in `ColumnNotFound`.
    fn searched(&self) -> Vec<String> {
        match &self.explicit {
            Some(explicit) => vec![explicit.clone()],
            None => self.candidates.clone(),
        }
    }
}

/// Extractor for spreadsheet and CSV tables.
#[derive(Debug, Clone, Default)]
pub struct TabularColumnExtractor {
    selector: ColumnSelector,
}

impl TabularColumnExtractor {
    pub fn new(selector: ColumnSelector) -> Self {
        Self { selector }
    }

    /// Select the text column from the first table that has one.
    ///
    /// Returns the chosen column name with its values.
    pub fn select(&self, tables: &[Table]) -> Option<(String, Vec<TranslatableString>)> {
        tables.iter().find_map(|table| {
            let column = self.selector.find_column(table)?;
            debug!(sheet = %table.name, column, "selected text column");
            Some((column.to_string(), table.column_values(column)))
        })
    }
}

impl Extract for TabularColumnExtractor {
    fn extract(&self, path: &Path) -> Result<SourceDocument, SourceError> {
        let is_csv = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        let tables = if is_csv {
            vec![load_csv(path)?]
        } else {
            load_workbook(path)?
        };

        let (column, strings) = self
            .select(&tables)
            .ok_or_else(|| SourceError::ColumnNotFound {
                path: display_path(path),
                candidates: self.selector.searched(),
            })?;

        Ok(
            SourceDocument::new(identifier_for(path), SourceFormat::Tabular, strings)
                .with_column(column),
        )
    }
}

/// Read every worksheet of a workbook (`.xlsx`, `.xlsm`, `.xls`, `.ods`).
pub fn load_workbook(path: &Path) -> Result<Vec<Table>, SourceError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| SourceError::extraction(display_path(path), e))?;

    let mut tables = Vec::new();
    for sheet in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|e| SourceError::extraction(display_path(path), e))?;

        let mut rows = range.rows();
        let Some(header) = rows.next() else {
            continue;
        };
        let columns = header.iter().map(|c| c.to_string()).collect();
        let mut table = Table::new(sheet, columns);
        for row in rows {
            table.push_row(row.iter().map(cell_text).collect());
        }
        tables.push(table);
    }
    Ok(tables)
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Read a CSV file; the header row names the columns.
pub fn load_csv(path: &Path) -> Result<Table, SourceError> {
    let failure = |e: csv::Error| SourceError::extraction(display_path(path), e);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(failure)?;

    let columns = reader
        .headers()
        .map_err(failure)?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();
    let mut table = Table::new(identifier_for(path), columns);

    for record in reader.records() {
        let record = record.map_err(failure)?;
        table.push_row(
            record
                .iter()
                .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                .collect(),
        );
    }
    Ok(table)
}
