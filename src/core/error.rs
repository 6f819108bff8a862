//! Per-file error taxonomy.
//!
//! Every variant is recoverable: the pipeline catches it at the file
//! boundary, records the file as skipped and moves on to the next input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// File extension is not in the recognized set.
    #[error("unsupported file type '{extension}'")]
    UnsupportedFormat { path: String, extension: String },

    /// Tabular source has none of the candidate text columns.
    #[error("no text column found (looked for: {})", candidates.join(", "))]
    ColumnNotFound {
        path: String,
        candidates: Vec<String>,
    },

    /// The underlying parse of a malformed or corrupt file failed.
    #[error("failed to extract text: {cause}")]
    ExtractionFailure { path: String, cause: String },

    /// Parsing succeeded but produced no translatable strings.
    #[error("no text extracted")]
    EmptyExtraction { path: String },
}

impl SourceError {
    pub fn extraction(path: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        SourceError::ExtractionFailure {
            path: path.into(),
            cause: cause.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            SourceError::UnsupportedFormat { path, .. }
            | SourceError::ColumnNotFound { path, .. }
            | SourceError::ExtractionFailure { path, .. }
            | SourceError::EmptyExtraction { path } => path,
        }
    }

    /// True for outcomes that are warnings rather than failures.
    pub fn is_warning(&self) -> bool {
        matches!(self, SourceError::EmptyExtraction { .. })
    }
}
