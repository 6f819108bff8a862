//! Source extraction.
//!
//! Each supported input kind has one extractor that selects *which* text a
//! document contributes and in *what order*. Parsing the underlying syntax is
//! delegated to a collaborator crate (`serde_json`, `roxmltree`, `calamine`,
//! `csv`, `zip`, `lopdf`); the extractors only walk the parsed structure.
//!
//! ## Module Structure
//!
//! - `nested`: JSON-like trees of mappings, sequences and scalars
//! - `element_tree`: generic XML and XLIFF documents
//! - `tabular`: a named text column of a spreadsheet or CSV table
//! - `paragraphs`: paragraph/table documents (DOCX)
//! - `pages`: page-based documents (PDF)

pub mod element_tree;
pub mod nested;
pub mod pages;
pub mod paragraphs;
pub mod tabular;

use std::path::Path;

use enum_dispatch::enum_dispatch;

pub use element_tree::ElementTreeExtractor;
pub use nested::{NestedMapExtractor, NestedValue, Scalar};
pub use pages::{PageDocument, PageDocumentExtractor};
pub use paragraphs::{ParagraphDocument, ParagraphDocumentExtractor};
pub use tabular::{ColumnSelector, Table, TabularColumnExtractor};

use super::{
    data::{SourceDocument, SourceFormat},
    error::SourceError,
};

/// Default candidate names for the translatable-text column.
pub const DEFAULT_TEXT_COLUMNS: &[&str] = &["Korean", "KO", "Source", "Source Text", "korean"];

/// Capability shared by all extractors.
#[enum_dispatch]
pub trait Extract {
    /// Read the file at `path` and return its translatable strings.
    fn extract(&self, path: &Path) -> Result<SourceDocument, SourceError>;
}

/// Closed set of extractors, one per input kind.
#[enum_dispatch(Extract)]
#[derive(Debug, Clone)]
pub enum Extractor {
    NestedMap(NestedMapExtractor),
    ElementTree(ElementTreeExtractor),
    TabularColumn(TabularColumnExtractor),
    ParagraphDocument(ParagraphDocumentExtractor),
    PageDocument(PageDocumentExtractor),
}

impl Extractor {
    /// Pick the extractor for a format.
    ///
    /// `columns` only affects tabular sources.
    pub fn for_format(format: SourceFormat, columns: &ColumnSelector) -> Self {
        match format {
            SourceFormat::Json => NestedMapExtractor.into(),
            SourceFormat::Xml | SourceFormat::Xliff => ElementTreeExtractor.into(),
            SourceFormat::Tabular => TabularColumnExtractor::new(columns.clone()).into(),
            SourceFormat::Document => ParagraphDocumentExtractor.into(),
            SourceFormat::Pdf => PageDocumentExtractor.into(),
        }
    }

    /// Resolve the extractor for a path from its extension.
    pub fn for_path(path: &Path, columns: &ColumnSelector) -> Result<Self, SourceError> {
        match SourceFormat::from_path(path) {
            Some(format) => Ok(Self::for_format(format, columns)),
            None => Err(SourceError::UnsupportedFormat {
                path: display_path(path),
                extension: path
                    .extension()
                    .map(|e| format!(".{}", e.to_string_lossy()))
                    .unwrap_or_default(),
            }),
        }
    }
}

/// File name used as the document identifier.
pub(crate) fn identifier_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| display_path(path))
}

pub(crate) fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Read a text file, mapping I/O failures to [`SourceError::ExtractionFailure`].
pub(crate) fn read_text(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|e| SourceError::extraction(display_path(path), e))
}
