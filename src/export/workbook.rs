//! Minimal spreadsheet model and its `.xlsx` writer.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};

/// Upper bound for auto-fitted column widths, in characters.
const MAX_COLUMN_WIDTH: usize = 50;

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(usize),
    Number(f64),
    Blank,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    fn display_len(&self) -> usize {
        match self {
            Cell::Text(s) => s.chars().count(),
            Cell::Integer(n) => n.to_string().len(),
            Cell::Number(n) => n.to_string().len(),
            Cell::Blank => 0,
        }
    }
}

/// A named sheet: a header row followed by data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            name: name.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Width of each column: longest cell plus padding, capped.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i >= widths.len() {
                    widths.push(0);
                }
                widths[i] = widths[i].max(cell.display_len());
            }
        }
        widths
            .into_iter()
            .map(|w| (w + 2).min(MAX_COLUMN_WIDTH))
            .collect()
    }
}

/// Writes sheets into a single `.xlsx` workbook.
pub struct WorkbookWriter {
    file_path: PathBuf,
    sheets: Vec<Sheet>,
}

impl WorkbookWriter {
    pub fn new(path: &Path) -> Self {
        Self {
            file_path: path.to_path_buf(),
            sheets: Vec::new(),
        }
    }

    pub fn add_sheet(&mut self, sheet: Sheet) -> &mut Self {
        self.sheets.push(sheet);
        self
    }

    /// Save the workbook, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        for sheet in &self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(&sheet.name)
                .with_context(|| format!("Invalid sheet name: {}", sheet.name))?;

            for (col, title) in sheet.headers.iter().enumerate() {
                worksheet.write_string_with_format(0, col as u16, title, &header)?;
            }

            for (index, row) in sheet.rows.iter().enumerate() {
                let r = index as u32 + 1;
                for (col, cell) in row.iter().enumerate() {
                    let c = col as u16;
                    match cell {
                        Cell::Text(s) => {
                            worksheet.write_string(r, c, s)?;
                        }
                        Cell::Integer(n) => {
                            worksheet.write_number(r, c, *n as f64)?;
                        }
                        Cell::Number(n) => {
                            worksheet.write_number(r, c, *n)?;
                        }
                        Cell::Blank => {}
                    }
                }
            }

            for (col, width) in sheet.column_widths().into_iter().enumerate() {
                worksheet.set_column_width(col as u16, width as f64)?;
            }
        }

        workbook
            .save(&self.file_path)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;
        Ok(())
    }
}
