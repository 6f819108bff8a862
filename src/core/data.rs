//! Core data types: translatable strings, source documents and formats.

use std::path::Path;

use indexmap::IndexMap;

use serde::Serialize;

use super::strip::strip_markup;

// ============================================================
// Source Format
// ============================================================

/// Input format of a source document, resolved once at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Json,
    Xml,
    Xliff,
    Tabular,
    Document,
    Pdf,
}

impl SourceFormat {
    /// Resolve the format from a file extension (case-insensitive).
    ///
    /// Returns `None` for extensions outside the recognized set.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(SourceFormat::Json),
            "xml" => Some(SourceFormat::Xml),
            "xlf" | "xliff" => Some(SourceFormat::Xliff),
            "xlsx" | "xlsm" | "xls" | "ods" | "csv" => Some(SourceFormat::Tabular),
            "docx" => Some(SourceFormat::Document),
            "pdf" => Some(SourceFormat::Pdf),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Short label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            SourceFormat::Json => "JSON",
            SourceFormat::Xml => "XML",
            SourceFormat::Xliff => "XLIFF",
            SourceFormat::Tabular => "Tabular",
            SourceFormat::Document => "DOCX",
            SourceFormat::Pdf => "PDF",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================
// Translatable String
// ============================================================

/// A single unit of source text extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableString {
    /// Original text, exactly as stored.
    pub raw: String,
    /// Stable identifier (JSON key path, row, trans-unit id), if the format has one.
    pub origin_key: Option<String>,
}

impl TranslatableString {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            origin_key: None,
        }
    }

    pub fn keyed(raw: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            origin_key: Some(key.into()),
        }
    }

    /// The raw text with markup and placeholders stripped.
    ///
    /// Recomputed on each call.
    pub fn cleaned(&self) -> String {
        strip_markup(&self.raw)
    }
}

// ============================================================
// Source Document
// ============================================================

/// One input file, immutable after extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// File name or logical name.
    pub identifier: String,
    pub format: SourceFormat,
    /// Column the strings were read from (tabular sources only).
    pub column: Option<String>,
    pub strings: Vec<TranslatableString>,
}

impl SourceDocument {
    pub fn new(
        identifier: impl Into<String>,
        format: SourceFormat,
        strings: Vec<TranslatableString>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            format,
            column: None,
            strings,
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }
}

// ============================================================
// Keyed Strings
// ============================================================

/// Key → text map used by the QA differ.
///
/// Keeps insertion order for reporting. A repeated key replaces the earlier
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedStrings {
    entries: IndexMap<String, String>,
}

impl KeyedStrings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds a map from the keyed strings of a document.
    ///
    /// Strings without an origin key are skipped.
    pub fn from_document(document: &SourceDocument) -> Self {
        document
            .strings
            .iter()
            .filter_map(|s| s.origin_key.as_ref().map(|k| (k.clone(), s.raw.clone())))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyedStrings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = KeyedStrings::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
