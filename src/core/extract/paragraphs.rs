use std::{fs::File, io::Read, path::Path};

use roxmltree::{Document, Node};
use tracing::debug;

use super::{Extract, display_path, identifier_for};
use crate::core::{
    data::{SourceDocument, SourceFormat, TranslatableString},
    error::SourceError,
};

/// WordprocessingML main namespace.
const WORD_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Body part inside a `.docx` package.
const DOCUMENT_PART: &str = "word/document.xml";

/// Text content of a paragraph/table document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphDocument {
    /// Top-level paragraphs in document order.
    pub paragraphs: Vec<String>,
    /// Top-level tables as rows of cell texts.
    pub tables: Vec<Vec<Vec<String>>>,
}

impl ParagraphDocument {
    /// Parse the body XML of a WordprocessingML document.
    pub fn from_document_xml(xml: &str) -> Result<Self, roxmltree::Error> {
        let doc = Document::parse(xml)?;
        let mut out = ParagraphDocument::default();

        let Some(body) = doc
            .root_element()
            .children()
            .find(|n| is_word(n, "body"))
        else {
            return Ok(out);
        };

        for child in body.children().filter(|n| n.is_element()) {
            if is_word(&child, "p") {
                out.paragraphs.push(paragraph_text(&child));
            } else if is_word(&child, "tbl") {
                out.tables.push(table_cells(&child));
            }
        }
        Ok(out)
    }

    /// Open a `.docx` package and read its body part.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let failure = |e: &dyn std::fmt::Display| SourceError::extraction(display_path(path), e);

        let file = File::open(path).map_err(|e| failure(&e))?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| failure(&e))?;
        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| failure(&e))?;
        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(|e| failure(&e))?;

        Self::from_document_xml(&xml).map_err(|e| failure(&e))
    }
}

fn is_word(node: &Node, name: &str) -> bool {
    node.is_element() && node.has_tag_name((WORD_NAMESPACE, name))
}

fn paragraph_text(paragraph: &Node) -> String {
    let mut text = String::new();
    for node in paragraph.descendants() {
        if is_word(&node, "t") {
            text.push_str(node.text().unwrap_or_default());
        } else if is_word(&node, "tab") {
            text.push('\t');
        } else if is_word(&node, "br") || is_word(&node, "cr") {
            text.push('\n');
        }
    }
    text
}

fn table_cells(table: &Node) -> Vec<Vec<String>> {
    table
        .children()
        .filter(|n| is_word(n, "tr"))
        .map(|row| {
            row.children()
                .filter(|n| is_word(n, "tc"))
                .map(|cell| {
                    cell.children()
                        .filter(|n| is_word(n, "p"))
                        .map(|p| paragraph_text(&p))
                        .collect::<Vec<_>>()
                        .join("\n")
                })
                .collect()
        })
        .collect()
}

/// Extractor for paragraph/table documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphDocumentExtractor;

impl ParagraphDocumentExtractor {
    /// Non-empty paragraphs, then non-empty table cells (table → row → column).
    pub fn select(&self, document: &ParagraphDocument) -> Vec<TranslatableString> {
        let cells = document.tables.iter().flatten().flatten();
        document
            .paragraphs
            .iter()
            .chain(cells)
            .filter(|text| !text.trim().is_empty())
            .map(|text| TranslatableString::new(text.as_str()))
            .collect()
    }
}

impl Extract for ParagraphDocumentExtractor {
    fn extract(&self, path: &Path) -> Result<SourceDocument, SourceError> {
        let document = ParagraphDocument::load(path)?;
        let strings = self.select(&document);
        debug!(
            file = %path.display(),
            paragraphs = document.paragraphs.len(),
            tables = document.tables.len(),
            strings = strings.len(),
            "extracted document text"
        );
        Ok(SourceDocument::new(
            identifier_for(path),
            SourceFormat::Document,
            strings,
        ))
    }
}
