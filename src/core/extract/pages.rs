use std::path::Path;

use tracing::{debug, warn};

use super::{Extract, display_path, identifier_for};
use crate::core::{
    data::{SourceDocument, SourceFormat, TranslatableString},
    error::SourceError,
};

/// Extracted text of a page-based document, one entry per page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDocument {
    pub pages: Vec<String>,
}

impl PageDocument {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    /// Load a PDF and extract the text of each page.
    ///
    /// A page whose content stream cannot be decoded is logged and read as
    /// empty; only a failure to open the document itself is an error.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let document = lopdf::Document::load(path)
            .map_err(|e| SourceError::extraction(display_path(path), e))?;

        let pages = document
            .get_pages()
            .into_keys()
            .map(|number| match document.extract_text(&[number]) {
                Ok(text) => text,
                Err(e) => {
                    warn!(file = %path.display(), page = number, error = %e, "unreadable page");
                    String::new()
                }
            })
            .collect();
        Ok(Self { pages })
    }
}

/// Extractor for page-based documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageDocumentExtractor;

impl PageDocumentExtractor {
    /// Page texts in page order; blank pages contribute nothing.
    pub fn select(&self, document: &PageDocument) -> Vec<TranslatableString> {
        document
            .pages
            .iter()
            .filter(|page| !page.trim().is_empty())
            .map(|page| TranslatableString::new(page.as_str()))
            .collect()
    }
}

impl Extract for PageDocumentExtractor {
    fn extract(&self, path: &Path) -> Result<SourceDocument, SourceError> {
        let document = PageDocument::load(path)?;
        let strings = self.select(&document);
        debug!(
            file = %path.display(),
            pages = document.pages.len(),
            strings = strings.len(),
            "extracted page text"
        );
        Ok(SourceDocument::new(
            identifier_for(path),
            SourceFormat::Pdf,
            strings,
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::core::extract::pages::*;

    #[test]
    fn test_select_skips_blank_pages() {
        let document = PageDocument::new(vec![
            "첫 페이지 본문".to_string(),
            String::new(),
            "  \n ".to_string(),
            "Page three".to_string(),
        ]);
        let strings = PageDocumentExtractor.select(&document);
        let raws: Vec<_> = strings.iter().map(|s| s.raw.as_str()).collect();
        assert_eq!(raws, vec!["첫 페이지 본문", "Page three"]);
        assert!(strings.iter().all(|s| s.origin_key.is_none()));
    }

    #[test]
    fn test_select_empty_document() {
        assert!(
            PageDocumentExtractor
                .select(&PageDocument::default())
                .is_empty()
        );
    }

    #[test]
    fn test_corrupt_pdf_is_extraction_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manual.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();

        let err = PageDocumentExtractor.extract(&path).unwrap_err();
        assert!(matches!(
            err,
            SourceError::ExtractionFailure { ref path, .. } if path.ends_with("manual.pdf")
        ));
    }
}
